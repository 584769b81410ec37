//! T5577 Writer Hardware Abstraction Layer
//!
//! This crate defines the traits the editor core uses to reach everything
//! outside of it: the tag programmer, file storage, and the two dialogs
//! the load and save actions need. Platform crates implement them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  t5577-core (editor workflow)           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  t5577-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ t5577-hal-std │       │  device HAL   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`writer::TagWriter`] - Programs finished blocks onto a tag
//! - [`storage::FileStorage`] - Text file persistence
//! - [`dialog::FilePicker`] - File browser used by the load action
//! - [`dialog::TextInput`] - Name entry used by the save action

#![no_std]
#![deny(unsafe_code)]

pub mod dialog;
pub mod storage;
pub mod writer;

// Re-export key traits at crate root for convenience
pub use dialog::{FilePicker, Path, TagName, TextInput, MAX_NAME_LEN, MAX_PATH_LEN};
pub use storage::{FileStorage, StorageError};
pub use writer::TagWriter;
