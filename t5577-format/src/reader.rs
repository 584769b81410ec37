//! Document reader
//!
//! A line is a data line iff it starts with `"Block "`. Everything else,
//! including the whole header, is skipped: the configuration is recovered
//! from the value of block 0, not from the header text.
//!
//! Data line grammar:
//!
//! ```text
//! "Block " <hex digit> ":" " " <8 hex digits> [whitespace]
//! ```
//!
//! Malformed data lines are skipped and counted. Blocks not named by the
//! document keep the value they had before parsing.

use crate::{BLOCK_PREFIX, MAX_BLOCKS};

/// Width of the block index field (one hex digit)
pub const INDEX_WIDTH: usize = 1;

/// Width of the block value field (eight hex digits)
pub const VALUE_WIDTH: usize = 8;

/// Reasons a data line is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// No `':'` after the index field
    MissingSeparator,
    /// Index field is not exactly one hex digit
    InvalidIndex,
    /// Index names a block past the end of the tag
    IndexOutOfRange,
    /// Separator is not followed by a single space
    MissingSpace,
    /// Fewer than eight characters in the value field
    ValueTooShort,
    /// Value field contains a non-hex character
    InvalidHexDigit,
    /// Unexpected characters after the value field
    TrailingData,
}

/// A successfully parsed data line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlockLine {
    /// Block index (0..MAX_BLOCKS)
    pub index: usize,
    /// Block value
    pub value: u32,
}

/// Outcome of parsing a whole document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParseReport {
    /// Data lines written into the block array
    pub applied: usize,
    /// Data lines skipped as malformed
    pub malformed: usize,
    /// Error of the first malformed line
    pub first_error: Option<LineError>,
    /// Bit `n` set when block `n` was written
    seen: u8,
}

impl ParseReport {
    /// Check whether the document wrote block `index`
    pub fn contains(&self, index: usize) -> bool {
        index < MAX_BLOCKS && self.seen & (1 << index) != 0
    }

    /// Check whether the document wrote block 0 (the control word)
    pub fn has_control_word(&self) -> bool {
        self.contains(0)
    }

    fn record(&mut self, result: Result<BlockLine, LineError>) {
        match result {
            Ok(line) => {
                self.applied += 1;
                self.seen |= 1 << line.index;
            }
            Err(error) => {
                self.malformed += 1;
                if self.first_error.is_none() {
                    self.first_error = Some(error);
                }
            }
        }
    }
}

/// Parse a single line
///
/// Returns `None` for lines that are not data lines, otherwise the parsed
/// block or the reason it was rejected.
pub fn parse_line(line: &str) -> Option<Result<BlockLine, LineError>> {
    let rest = line.strip_prefix(BLOCK_PREFIX)?;
    Some(parse_fields(rest))
}

fn parse_fields(rest: &str) -> Result<BlockLine, LineError> {
    let separator = rest.find(':').ok_or(LineError::MissingSeparator)?;

    // Index field
    let index_field = &rest.as_bytes()[..separator];
    if index_field.len() != INDEX_WIDTH {
        return Err(LineError::InvalidIndex);
    }
    let index = hex_digit(index_field[0]).ok_or(LineError::InvalidIndex)? as usize;
    if index >= MAX_BLOCKS {
        return Err(LineError::IndexOutOfRange);
    }

    // Single space, then the value field
    let after = rest[separator + 1..]
        .strip_prefix(' ')
        .ok_or(LineError::MissingSpace)?;
    let bytes = after.as_bytes();
    if bytes.len() < VALUE_WIDTH {
        return Err(LineError::ValueTooShort);
    }

    let mut value: u32 = 0;
    for &byte in &bytes[..VALUE_WIDTH] {
        let digit = hex_digit(byte).ok_or(LineError::InvalidHexDigit)?;
        value = (value << 4) | digit;
    }

    // The value field is ASCII, so VALUE_WIDTH is a char boundary
    if !after[VALUE_WIDTH..].trim().is_empty() {
        return Err(LineError::TrailingData);
    }

    Ok(BlockLine { index, value })
}

fn hex_digit(byte: u8) -> Option<u32> {
    (byte as char).to_digit(16)
}

/// Parse a document into `blocks`, in place
///
/// Each valid data line overwrites its block; later lines for the same
/// index win. Blocks the document does not name are left untouched.
pub fn parse(input: &str, blocks: &mut [u32; MAX_BLOCKS]) -> ParseReport {
    let mut report = ParseReport::default();

    for line in input.lines() {
        if let Some(result) = parse_line(line) {
            if let Ok(block) = result {
                blocks[block.index] = block.value;
            }
            report.record(result);
        }
    }

    report
}
