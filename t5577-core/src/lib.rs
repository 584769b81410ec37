//! Board-agnostic core logic for the T5577 writer
//!
//! This crate contains everything between the user's selections and the
//! bytes on disk or on the tag:
//!
//! - Modulation and RF clock profile catalogs
//! - Tag configuration model (selections + raw blocks)
//! - Control word codec for block 0
//! - Persistence to the raw block text document
//! - Editor workflow state machine and actions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

// Must come first so the logging macros are visible to later modules
mod fmt;

pub mod codec;
pub mod config;
pub mod persistence;
pub mod profile;
pub mod workflow;
