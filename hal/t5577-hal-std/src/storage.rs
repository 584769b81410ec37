//! Filesystem storage driver
//!
//! Storage paths are absolute (`/ext/apps_data/...`). They are mapped below
//! a host root directory, so `/ext/apps_data` becomes `<root>/ext/apps_data`.
//! Writes go to a sibling temporary file that is renamed over the target,
//! so a failed write never leaves a truncated tag file.

use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use t5577_hal::{FileStorage, StorageError};

/// Suffix of the temporary file used while writing
const TEMP_SUFFIX: &str = ".tmp";

/// File storage rooted at a host directory
#[derive(Debug, Clone)]
pub struct StdFileStorage {
    root: PathBuf,
}

impl StdFileStorage {
    /// Create storage rooted at `root`
    ///
    /// The root directory itself must exist before files are written.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Host path of a storage path
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }

    fn write_atomic(target: &Path, data: &[u8]) -> Result<(), StorageError> {
        let mut temp = target.as_os_str().to_owned();
        temp.push(TEMP_SUFFIX);
        let temp = PathBuf::from(temp);

        let mut file = fs::File::create(&temp).map_err(open_error)?;
        let written = file.write_all(data).and_then(|_| file.sync_all());
        drop(file);

        if written.is_err() {
            let _ = fs::remove_file(&temp);
            return Err(StorageError::Write);
        }
        fs::rename(&temp, target).map_err(|_| {
            let _ = fs::remove_file(&temp);
            StorageError::Write
        })
    }
}

impl FileStorage for StdFileStorage {
    fn read(&mut self, path: &str, buffer: &mut [u8]) -> Result<usize, StorageError> {
        let data = fs::read(self.resolve(path)).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StorageError::NotFound,
            _ => StorageError::Read,
        })?;
        if data.len() > buffer.len() {
            return Err(StorageError::BufferTooSmall);
        }
        buffer[..data.len()].copy_from_slice(&data);
        Ok(data.len())
    }

    fn write(&mut self, path: &str, data: &[u8]) -> Result<(), StorageError> {
        Self::write_atomic(&self.resolve(path), data)
    }

    fn exists(&mut self, path: &str) -> bool {
        self.resolve(path).exists()
    }

    fn ensure_dir(&mut self, path: &str) -> Result<(), StorageError> {
        let dir = self.resolve(path);
        match fs::create_dir(&dir) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::AlreadyExists && dir.is_dir() => Ok(()),
            Err(e) => Err(open_error(e)),
        }
    }
}

fn open_error(e: io::Error) -> StorageError {
    match e.kind() {
        ErrorKind::NotFound => StorageError::NotFound,
        _ => StorageError::Open,
    }
}
