//! T5577 raw block document format
//!
//! This crate defines the text document used to persist a tag
//! configuration. The header is informational only; the block lines are
//! the only machine-read content.
//!
//! # Document Layout
//!
//! ```text
//! Filetype: Flipper T5577 Raw File
//! Version: 1.0
//! Modulation: <profile name>
//! RF Clock: <divider, decimal>
//! Number of User Blocks: <count, decimal>
//!
//! Raw Data:
//! Block 0: 00000068
//! Block 1: DEADBEEF
//! ...
//! ```
//!
//! A block line is `"Block "`, one hex index digit, `':'`, one space and
//! eight hex digits. The grammar is fixed: widening the index field needs a
//! new format version.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod reader;
pub mod writer;

pub use reader::{parse, parse_line, BlockLine, LineError, ParseReport, INDEX_WIDTH, VALUE_WIDTH};
pub use writer::{serialize, Document, FormatError, Header, MAX_DOCUMENT_SIZE};

/// Number of 32-bit blocks on page 0 of a T5577 tag
pub const MAX_BLOCKS: usize = 8;

/// Value of the `Filetype:` header line
pub const FILETYPE: &str = "Flipper T5577 Raw File";

/// Value of the `Version:` header line
pub const VERSION: &str = "1.0";

/// Prefix that marks a data line
pub const BLOCK_PREFIX: &str = "Block ";
