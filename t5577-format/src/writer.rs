//! Document writer
//!
//! Emits the fixed five-line header, the `Raw Data:` marker and one line
//! per block. Output is deterministic and goes into a fixed-capacity
//! buffer.

use core::fmt::Write;

use heapless::String;

use crate::{BLOCK_PREFIX, FILETYPE, MAX_BLOCKS, VERSION};

/// Capacity of a serialized document in bytes
///
/// A full eight-block document with a 16 character profile name is under
/// 300 bytes.
pub const MAX_DOCUMENT_SIZE: usize = 512;

/// Serialized document buffer
pub type Document = String<MAX_DOCUMENT_SIZE>;

/// Errors that can occur while writing a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FormatError {
    /// Document does not fit in the output buffer
    BufferTooSmall,
    /// More blocks than a tag holds
    TooManyBlocks,
}

/// Informational header fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Header<'a> {
    /// Modulation profile name
    pub modulation: &'a str,
    /// RF clock divider
    pub rf_clock: u8,
}

/// Serialize a header and the active blocks into a document
///
/// The block count line is taken from `blocks.len()`.
pub fn serialize(header: &Header<'_>, blocks: &[u32]) -> Result<Document, FormatError> {
    if blocks.len() > MAX_BLOCKS {
        return Err(FormatError::TooManyBlocks);
    }

    let mut document = Document::new();
    write_document(&mut document, header, blocks).map_err(|_| FormatError::BufferTooSmall)?;
    Ok(document)
}

fn write_document<W: Write>(out: &mut W, header: &Header<'_>, blocks: &[u32]) -> core::fmt::Result {
    writeln!(out, "Filetype: {}", FILETYPE)?;
    writeln!(out, "Version: {}", VERSION)?;
    writeln!(out, "Modulation: {}", header.modulation)?;
    writeln!(out, "RF Clock: {}", header.rf_clock)?;
    writeln!(out, "Number of User Blocks: {}", blocks.len())?;
    writeln!(out)?;
    writeln!(out, "Raw Data:")?;
    for (index, value) in blocks.iter().enumerate() {
        writeln!(out, "{}{}: {:08X}", BLOCK_PREFIX, index, value)?;
    }
    // Trailing empty line
    writeln!(out)
}
