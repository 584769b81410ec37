//! Configuration persistence
//!
//! Maps a `TagConfiguration` to and from the raw block document defined
//! by `t5577-format`. Only block lines are read back; the selections are
//! recovered by decoding block 0.

use t5577_format::{Document, FormatError, Header, ParseReport};

use crate::codec::{self, Decoded};
use crate::config::layout::MAX_BLOCKS;
use crate::config::TagConfiguration;
use crate::profile::ProfileTables;

/// Largest tag file the load action reads
///
/// The load buffer lives on the stack. A full eight-block document is
/// under 300 bytes; the rest is room for hand-written notes. Larger files
/// fail with `StorageError::BufferTooSmall`.
pub const MAX_FILE_SIZE: usize = 4096;

/// Result of loading a document into a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LoadReport {
    /// What the reader found in the document
    pub parse: ParseReport,
    /// Selections decoded from block 0
    pub decoded: Decoded,
}

/// Serialize the active blocks of a configuration
///
/// The header carries the selected modulation name, clock divider and
/// block count for human readers.
pub fn serialize(config: &TagConfiguration) -> Result<Document, FormatError> {
    let header = Header {
        modulation: config.modulation().name,
        rf_clock: config.clock().divider,
    };
    t5577_format::serialize(&header, config.active_blocks())
}

/// Parse a document's block lines into `blocks`, in place
pub fn parse(text: &str, blocks: &mut [u32; MAX_BLOCKS]) -> ParseReport {
    t5577_format::parse(text, blocks)
}

/// Parse a document and commit it to `config`
///
/// Blocks are parsed into a copy of the current contents, block 0 of the
/// copy is decoded, and only then is the result applied. Blocks the
/// document does not mention keep their current values (up to the decoded
/// block count). All loaded flags are armed.
pub fn load(tables: &ProfileTables, text: &str, config: &mut TagConfiguration) -> LoadReport {
    let mut staged = *config.blocks();
    let report = parse(text, &mut staged);

    if report.malformed > 0 {
        warn!(
            "skipped {} malformed block line(s), first: {}",
            report.malformed,
            report.first_error
        );
    }
    if !report.has_control_word() {
        warn!("document has no block 0, keeping current selections");
    }

    let decoded = codec::decode(tables, staged[0]);
    config.apply_loaded(&decoded, staged);

    info!(
        "loaded {} block line(s), {} active block(s)",
        report.applied,
        config.block_count()
    );
    LoadReport {
        parse: report,
        decoded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::layout::MAX_BLOCK_COUNT;
    use crate::config::LoadedField;
    use proptest::prelude::*;

    const TABLES: ProfileTables = ProfileTables::T5577;

    fn psk1_rf32_three_blocks() -> TagConfiguration {
        let mut config = TagConfiguration::new(&TABLES);
        config.set_modulation(&TABLES, 1).unwrap();
        config.set_clock(&TABLES, 2).unwrap();
        config.set_block_count(3).unwrap();
        config.set_block(1, 0xDEAD_BEEF).unwrap();
        config.set_block(2, 0x0000_0000).unwrap();
        config
    }

    #[test]
    fn test_serialize_header_follows_selections() {
        let doc = serialize(&psk1_rf32_three_blocks()).unwrap();

        assert!(doc.contains("Modulation: PSK1\n"));
        assert!(doc.contains("RF Clock: 32\n"));
        assert!(doc.contains("Number of User Blocks: 3\n"));
        assert!(doc.contains("Block 0: 00081060\n"));
        assert!(doc.contains("Block 1: DEADBEEF\n"));
        assert!(doc.contains("Block 2: 00000000\n"));
        assert!(!doc.contains("Block 3"));
    }

    #[test]
    fn test_load_restores_selections() {
        let original = psk1_rf32_three_blocks();
        let doc = serialize(&original).unwrap();

        let mut restored = TagConfiguration::new(&TABLES);
        let report = load(&TABLES, &doc, &mut restored);

        assert_eq!(report.parse.applied, 3);
        assert_eq!(restored.selections(), original.selections());
        assert_eq!(restored.active_blocks(), original.active_blocks());
    }

    #[test]
    fn test_load_arms_flags() {
        let doc = serialize(&psk1_rf32_three_blocks()).unwrap();
        let mut config = TagConfiguration::new(&TABLES);
        load(&TABLES, &doc, &mut config);

        assert!(config.loaded().is_set(LoadedField::Modulation));
        assert!(config.loaded().is_set(LoadedField::Clock));
        assert!(config.loaded().is_set(LoadedField::BlockCount));
    }

    #[test]
    fn test_header_is_ignored() {
        // Header says ASK/Man and 7 blocks; block 0 says PSK1, RF/32, 3 blocks
        let doc = "Filetype: Flipper T5577 Raw File\n\
                   Version: 1.0\n\
                   Modulation: ASK/Man\n\
                   RF Clock: 128\n\
                   Number of User Blocks: 7\n\
                   \n\
                   Raw Data:\n\
                   Block 0: 00081060\n\
                   Block 1: 11111111\n";

        let mut config = TagConfiguration::new(&TABLES);
        load(&TABLES, doc, &mut config);

        assert_eq!(config.modulation().name, "PSK1");
        assert_eq!(config.clock().divider, 32);
        assert_eq!(config.block_count(), 3);
    }

    #[test]
    fn test_unmentioned_blocks_kept_within_count() {
        let mut config = TagConfiguration::new(&TABLES);
        config.set_block_count(MAX_BLOCK_COUNT).unwrap();
        for index in 1..MAX_BLOCK_COUNT as usize {
            config.set_block(index, 0x5555_0000 + index as u32).unwrap();
        }

        // Three blocks, but only block 0 and block 2 are in the document
        let doc = "Block 0: 00000060\nBlock 2: 22222222\n";
        load(&TABLES, doc, &mut config);

        assert_eq!(config.block_count(), 3);
        assert_eq!(config.blocks()[1], 0x5555_0001);
        assert_eq!(config.blocks()[2], 0x2222_2222);
        assert_eq!(config.blocks()[3], 0);
    }

    #[test]
    fn test_load_reports_malformed_lines() {
        let doc = "Block 0: 00000040\nBlock 1: nothex!!\n";
        let mut config = TagConfiguration::new(&TABLES);
        let report = load(&TABLES, doc, &mut config);

        assert_eq!(report.parse.applied, 1);
        assert_eq!(report.parse.malformed, 1);
        assert_eq!(config.block_count(), 2);
    }

    #[test]
    fn test_load_zero_block_count_clamps() {
        let mut config = TagConfiguration::new(&TABLES);
        let report = load(&TABLES, "Block 0: 00001000\n", &mut config);

        assert!(report.decoded.block_count_clamped);
        assert_eq!(config.block_count(), 1);
        assert_eq!(config.modulation().name, "PSK1");
    }

    proptest! {
        #[test]
        fn prop_serialize_parse_roundtrip(
            modulation in 0usize..11,
            clock in 0usize..8,
            count in 1u8..=MAX_BLOCK_COUNT,
            values in proptest::array::uniform7(any::<u32>()),
        ) {
            let mut config = TagConfiguration::new(&TABLES);
            config.set_modulation(&TABLES, modulation).unwrap();
            config.set_clock(&TABLES, clock).unwrap();
            config.set_block_count(count).unwrap();
            for index in 1..count as usize {
                config.set_block(index, values[index - 1]).unwrap();
            }

            let doc = serialize(&config).unwrap();

            let mut blocks = [0u32; MAX_BLOCKS];
            let report = parse(&doc, &mut blocks);
            prop_assert_eq!(report.applied, count as usize);
            prop_assert_eq!(&blocks[..count as usize], config.active_blocks());

            let decoded = codec::decode(&TABLES, blocks[0]);
            prop_assert_eq!(decoded.modulation.map(|m| m.index), Some(modulation));
            prop_assert_eq!(decoded.clock.map(|m| m.index), Some(clock));
            prop_assert_eq!(decoded.block_count, count);
        }
    }
}
