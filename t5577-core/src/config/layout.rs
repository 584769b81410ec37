//! Block 0 layout constants

/// Number of 32-bit blocks on page 0
pub use t5577_format::MAX_BLOCKS;

/// Position of the max-block field in the control word
pub const MAX_BLOCK_SHIFT: u32 = 5;

/// Width mask of the max-block field (3 bits)
pub const MAX_BLOCK_MASK: u32 = 0x7;

/// Smallest selectable block count (block 0 alone)
pub const MIN_BLOCK_COUNT: u8 = 1;

/// Largest block count the max-block field can encode
pub const MAX_BLOCK_COUNT: u8 = MAX_BLOCK_MASK as u8;

/// First block the user may edit (block 0 is derived)
pub const FIRST_EDITABLE_BLOCK: u8 = 1;

/// Last block the user may edit
///
/// Block 7 exists on the tag but a block count of 8 cannot be encoded,
/// so it is never saved or written.
pub const LAST_EDITABLE_BLOCK: u8 = MAX_BLOCK_COUNT - 1;
