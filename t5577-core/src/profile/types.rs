//! Profile and catalog types

/// Errors from catalog lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProfileError {
    /// Selection index is not below the catalog size
    IndexOutOfRange,
}

/// Bit pattern a profile contributes to the control word
pub trait ControlBits {
    /// Bits OR-ed into block 0 when this profile is selected
    fn control_bits(&self) -> u32;
}

/// Modulation profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModulationProfile {
    /// Display name, also written to the document header
    pub name: &'static str,
    /// Modulation field bits
    pub control_bits: u32,
}

impl ControlBits for ModulationProfile {
    fn control_bits(&self) -> u32 {
        self.control_bits
    }
}

/// RF clock (bit rate) profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockProfile {
    /// Carrier cycles per data bit (RF/n)
    pub divider: u8,
    /// Bit rate field bits
    pub control_bits: u32,
}

impl ControlBits for ClockProfile {
    fn control_bits(&self) -> u32 {
        self.control_bits
    }
}

/// Read-only ordered catalog of profiles
#[derive(Debug, Clone, Copy)]
pub struct Catalog<P: 'static> {
    entries: &'static [P],
}

impl<P: 'static> Catalog<P> {
    /// Wrap a static table
    ///
    /// Panics (at compile time for `const` catalogs) if `entries` is
    /// empty: a selection must always exist.
    pub const fn new(entries: &'static [P]) -> Self {
        assert!(!entries.is_empty(), "profile catalog must not be empty");
        Self { entries }
    }

    /// Number of profiles
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Iterate profiles in catalog order
    pub fn iter(&self) -> core::slice::Iter<'static, P> {
        self.entries.iter()
    }
}

impl<P: Copy + 'static> Catalog<P> {
    /// Get the profile at `index`
    pub fn get(&self, index: usize) -> Result<P, ProfileError> {
        self.entries
            .get(index)
            .copied()
            .ok_or(ProfileError::IndexOutOfRange)
    }

    /// First profile of the catalog (the default selection)
    pub fn first(&self) -> P {
        self.entries[0]
    }
}

/// The two catalogs a tag configuration selects from
#[derive(Debug, Clone, Copy)]
pub struct ProfileTables {
    /// Modulation catalog
    pub modulations: Catalog<ModulationProfile>,
    /// RF clock catalog
    pub clocks: Catalog<ClockProfile>,
}

impl ProfileTables {
    /// Build tables from two catalogs
    pub const fn new(
        modulations: Catalog<ModulationProfile>,
        clocks: Catalog<ClockProfile>,
    ) -> Self {
        Self {
            modulations,
            clocks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODS: Catalog<ModulationProfile> = Catalog::new(&[
        ModulationProfile {
            name: "A",
            control_bits: 0x1,
        },
        ModulationProfile {
            name: "B",
            control_bits: 0x3,
        },
    ]);

    #[test]
    fn test_count_and_get() {
        assert_eq!(MODS.count(), 2);
        assert_eq!(MODS.get(1).unwrap().name, "B");
        assert_eq!(MODS.first().name, "A");
    }

    #[test]
    fn test_get_out_of_range() {
        assert_eq!(MODS.get(2), Err(ProfileError::IndexOutOfRange));
        assert_eq!(MODS.get(usize::MAX), Err(ProfileError::IndexOutOfRange));
    }

    #[test]
    fn test_catalog_outlives_its_owner() {
        // The iterator borrows the table, not the catalog value
        fn entries<P: 'static>(catalog: Catalog<P>) -> core::slice::Iter<'static, P> {
            catalog.iter()
        }

        assert_eq!(entries(MODS).last().unwrap().name, "B");
        let clocks = Catalog::new(&[ClockProfile {
            divider: 32,
            control_bits: 0x0008_0000,
        }]);
        assert_eq!(entries(clocks).count(), 1);
    }

    #[test]
    fn test_iter_preserves_order() {
        let bits: Vec<u32> = MODS.iter().map(|p| p.control_bits()).collect();
        assert_eq!(bits, vec![0x1, 0x3]);
    }
}
