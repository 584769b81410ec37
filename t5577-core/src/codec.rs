//! Control word codec
//!
//! Block 0 of a T5577 tag is its configuration page. The editor owns three
//! of its fields:
//!
//! ```text
//!  bits 18..20   bits 12..16        bits 5..7
//! ┌───────────┬──────────────┬───┬──────────┬───────┐
//! │  bit rate │  modulation  │...│ max block│  ...  │
//! └───────────┴──────────────┴───┴──────────┴───────┘
//! ```
//!
//! Encoding ORs the selected profiles' bits with the block count shifted
//! into the max-block field. Decoding scans each catalog in order and keeps
//! the last profile whose bits are all present in the word, so a superset
//! pattern listed after its subsets (PSK3 after PSK1/PSK2) wins.

use crate::config::layout::{MAX_BLOCK_MASK, MAX_BLOCK_SHIFT, MIN_BLOCK_COUNT};
use crate::config::TagConfiguration;
use crate::profile::{Catalog, ClockProfile, ControlBits, ModulationProfile, ProfileTables};

/// A catalog entry found by decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Match<P> {
    /// Position in the catalog
    pub index: usize,
    /// The matching profile
    pub profile: P,
}

/// Selections recovered from a control word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Decoded {
    /// Last matching modulation, if any entry matched
    pub modulation: Option<Match<ModulationProfile>>,
    /// Last matching clock, if any entry matched
    pub clock: Option<Match<ClockProfile>>,
    /// Block count, never below `MIN_BLOCK_COUNT`
    pub block_count: u8,
    /// The max-block field was 0 and `block_count` was raised to 1
    pub block_count_clamped: bool,
}

/// Encode a configuration's selections into a control word
pub fn encode(config: &TagConfiguration) -> u32 {
    compose(config.modulation(), config.clock(), config.block_count())
}

/// Build a control word from its parts
///
/// `block_count` must fit the 3-bit max-block field; a larger value spills
/// into the neighbouring bits. Callers keep the count in range, this
/// function does not mask it.
pub fn compose(modulation: &ModulationProfile, clock: &ClockProfile, block_count: u8) -> u32 {
    debug_assert!(
        u32::from(block_count) <= MAX_BLOCK_MASK,
        "block count overflows the max-block field"
    );
    modulation.control_bits | clock.control_bits | (u32::from(block_count) << MAX_BLOCK_SHIFT)
}

/// Raw value of the max-block field
pub fn block_count_field(word: u32) -> u8 {
    ((word >> MAX_BLOCK_SHIFT) & MAX_BLOCK_MASK) as u8
}

/// Decode a control word against the given catalogs
///
/// A zero max-block field decodes as one block.
pub fn decode(tables: &ProfileTables, word: u32) -> Decoded {
    let raw_count = block_count_field(word);
    let block_count_clamped = raw_count < MIN_BLOCK_COUNT;
    if block_count_clamped {
        warn!("control word {=u32:#x} has no block count, using 1", word);
    }

    let decoded = Decoded {
        modulation: last_match(&tables.modulations, word),
        clock: last_match(&tables.clocks, word),
        block_count: raw_count.max(MIN_BLOCK_COUNT),
        block_count_clamped,
    };

    debug!(
        "decoded {=u32:#x}: modulation={} clock={} blocks={}",
        word,
        decoded.modulation.map(|m| m.index),
        decoded.clock.map(|m| m.index),
        decoded.block_count
    );
    decoded
}

/// Index and value of the last entry whose bits are all set in `word`
fn last_match<P>(catalog: &Catalog<P>, word: u32) -> Option<Match<P>>
where
    P: ControlBits + Copy + 'static,
{
    let mut found = None;
    for (index, profile) in catalog.iter().enumerate() {
        let bits = profile.control_bits();
        if (word & bits) == bits {
            found = Some(Match {
                index,
                profile: *profile,
            });
        }
    }
    found
}
