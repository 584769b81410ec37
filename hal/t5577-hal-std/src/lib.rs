//! Host HAL for the T5577 writer
//!
//! Implements the storage trait on top of `std::fs`, so the editor core can
//! run on a desktop against a real directory tree:
//! - File storage rooted at a host directory

#![deny(unsafe_code)]

pub mod storage;

pub use storage::StdFileStorage;
