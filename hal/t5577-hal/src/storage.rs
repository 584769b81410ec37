//! File storage abstractions
//!
//! Provides traits for whole-file text persistence that can be implemented
//! on top of an SD card, a host filesystem, or anything else that maps
//! paths to byte contents.

/// Errors from storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// File or directory could not be opened or created
    Open,
    /// File exists but reading failed
    Read,
    /// Writing failed after the file was opened
    Write,
    /// Path does not exist
    NotFound,
    /// Buffer too small for the file contents
    BufferTooSmall,
}

/// File storage trait
///
/// All calls are blocking. Implementations should not leave a partially
/// written file behind when `write` fails.
pub trait FileStorage {
    /// Read the whole file at `path` into the provided buffer
    ///
    /// # Arguments
    /// * `path` - Absolute storage path
    /// * `buffer` - Buffer to read data into
    ///
    /// # Returns
    /// The number of bytes read, or an error.
    fn read(&mut self, path: &str, buffer: &mut [u8]) -> Result<usize, StorageError>;

    /// Create or replace the file at `path` with `data`
    fn write(&mut self, path: &str, data: &[u8]) -> Result<(), StorageError>;

    /// Check if a file or directory exists
    fn exists(&mut self, path: &str) -> bool;

    /// Create the directory at `path` if it does not exist yet
    ///
    /// The parent directory must already exist.
    fn ensure_dir(&mut self, path: &str) -> Result<(), StorageError>;
}
