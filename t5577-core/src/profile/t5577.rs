//! T5577 page 0 profile tables
//!
//! Bit values are the block 0 field encodings from the T5577 datasheet.
//! Patterns overlap on purpose (PSK3 = PSK1 | PSK2, Diphase = ASK | Biphase,
//! ...). Every superset is listed after its subsets, which is what lets a
//! last-match decode recover the selection.

use super::types::{Catalog, ClockProfile, ModulationProfile, ProfileTables};

/// Modulation catalog, in selection order
pub const MODULATIONS: [ModulationProfile; 11] = [
    ModulationProfile {
        name: "Direct",
        control_bits: 0x0000_0000,
    },
    ModulationProfile {
        name: "PSK1",
        control_bits: 0x0000_1000,
    },
    ModulationProfile {
        name: "PSK2",
        control_bits: 0x0000_2000,
    },
    ModulationProfile {
        name: "PSK3",
        control_bits: 0x0000_3000,
    },
    ModulationProfile {
        name: "FSK1",
        control_bits: 0x0000_4000,
    },
    ModulationProfile {
        name: "FSK2",
        control_bits: 0x0000_5000,
    },
    ModulationProfile {
        name: "FSK1a",
        control_bits: 0x0000_6000,
    },
    ModulationProfile {
        name: "FSK2a",
        control_bits: 0x0000_7000,
    },
    ModulationProfile {
        name: "ASK/Man",
        control_bits: 0x0000_8000,
    },
    ModulationProfile {
        name: "Biphase",
        control_bits: 0x0001_0000,
    },
    ModulationProfile {
        name: "Diphase",
        control_bits: 0x0001_8000,
    },
];

/// RF clock catalog, in selection order
pub const RF_CLOCKS: [ClockProfile; 8] = [
    ClockProfile {
        divider: 8,
        control_bits: 0x0000_0000,
    },
    ClockProfile {
        divider: 16,
        control_bits: 0x0004_0000,
    },
    ClockProfile {
        divider: 32,
        control_bits: 0x0008_0000,
    },
    ClockProfile {
        divider: 40,
        control_bits: 0x000C_0000,
    },
    ClockProfile {
        divider: 50,
        control_bits: 0x0010_0000,
    },
    ClockProfile {
        divider: 64,
        control_bits: 0x0014_0000,
    },
    ClockProfile {
        divider: 100,
        control_bits: 0x0018_0000,
    },
    ClockProfile {
        divider: 128,
        control_bits: 0x001C_0000,
    },
];

impl ProfileTables {
    /// The T5577 catalogs
    pub const T5577: ProfileTables =
        ProfileTables::new(Catalog::new(&MODULATIONS), Catalog::new(&RF_CLOCKS));
}

impl Default for ProfileTables {
    fn default() -> Self {
        Self::T5577
    }
}
