//! Configuration types
//!
//! The tag configuration model, the block 0 layout constants, and the
//! storage settings used by the load and save actions.

pub mod layout;
pub mod storage;
pub mod tag;

pub use layout::*;
pub use storage::StorageConfig;
pub use tag::{ConfigError, LoadedField, LoadedFlags, Selections, TagConfiguration};
