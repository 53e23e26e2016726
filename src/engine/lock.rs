//! engine::lock
//!
//! Exclusive lock on a document being stamped.
//!
//! # Invariants
//!
//! - The lock is held from the read through the rewrite
//! - Lock is automatically released on drop (RAII pattern)
//! - Lock acquisition is non-blocking (fails fast if locked)
//! - The document is rewritten through the locked handle, so another
//!   stamping process never sees a half-planned edit
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use stdheader::engine::lock::DocumentLock;
//!
//! let mut lock = DocumentLock::acquire(Path::new("main.c"))?;
//! let bytes = lock.read_bytes()?;
//! lock.replace_contents(&String::from_utf8(bytes)?)?;
//! // Lock released when `lock` goes out of scope
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use thiserror::Error;

/// Errors from locking operations.
#[derive(Debug, Error)]
pub enum LockError {
    /// Another process already holds the lock.
    #[error("'{0}' is locked by another stdheader process")]
    AlreadyLocked(PathBuf),

    /// The document could not be opened for locking.
    #[error("failed to open '{path}': {source}")]
    Open {
        path: PathBuf,
        source: io::Error,
    },

    /// Failed to acquire the OS lock.
    #[error("failed to lock '{path}': {source}")]
    AcquireFailed {
        path: PathBuf,
        source: io::Error,
    },

    /// Failed to release the lock.
    #[error("failed to release lock: {0}")]
    ReleaseFailed(String),
}

/// An exclusive lock on one document.
#[derive(Debug)]
pub struct DocumentLock {
    path: PathBuf,
    /// When this is Some, we hold the lock.
    file: Option<File>,
}

impl DocumentLock {
    /// Open `path` for reading and writing and lock it.
    ///
    /// The file must already exist. Locking uses `fs2`, which works across
    /// processes.
    ///
    /// # Errors
    ///
    /// - [`LockError::AlreadyLocked`] if another process holds the lock
    /// - [`LockError::Open`] if the file cannot be opened read/write
    /// - [`LockError::AcquireFailed`] if the OS lock cannot be acquired
    pub fn acquire(path: &Path) -> Result<Self, LockError> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|source| LockError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(Self {
                path: path.to_path_buf(),
                file: Some(file),
            }),
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => {
                Err(LockError::AlreadyLocked(path.to_path_buf()))
            }
            Err(source) => Err(LockError::AcquireFailed {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    #[cfg(test)]
    fn is_held(&self) -> bool {
        self.file.is_some()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole document as raw bytes.
    pub fn read_bytes(&mut self) -> io::Result<Vec<u8>> {
        let file = self.held()?;
        file.seek(SeekFrom::Start(0))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        Ok(bytes)
    }

    /// Replace the document's contents and sync them to disk.
    pub fn replace_contents(&mut self, text: &str) -> io::Result<()> {
        let file = self.held()?;
        file.seek(SeekFrom::Start(0))?;
        file.set_len(0)?;
        file.write_all(text.as_bytes())?;
        file.sync_all()
    }

    /// Release the lock explicitly.
    ///
    /// This is called automatically on drop.
    pub fn release(&mut self) -> Result<(), LockError> {
        if let Some(file) = self.file.take() {
            FileExt::unlock(&file).map_err(|e| LockError::ReleaseFailed(e.to_string()))?;
        }
        Ok(())
    }

    fn held(&mut self) -> io::Result<&mut File> {
        self.file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "document lock was released"))
    }
}

impl Drop for DocumentLock {
    fn drop(&mut self) {
        // Best-effort release on drop
        if let Some(file) = self.file.take() {
            let _ = FileExt::unlock(&file);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn document(temp: &TempDir, contents: &str) -> PathBuf {
        let path = temp.path().join("main.c");
        fs::write(&path, contents).expect("write document");
        path
    }

    #[test]
    fn acquire_succeeds() {
        let temp = TempDir::new().unwrap();
        let path = document(&temp, "int x;\n");

        let lock = DocumentLock::acquire(&path).expect("acquire lock");
        assert!(lock.is_held());
        assert_eq!(lock.path(), path);
    }

    #[test]
    fn missing_file_fails_to_open() {
        let temp = TempDir::new().unwrap();
        let result = DocumentLock::acquire(&temp.path().join("absent.c"));
        assert!(matches!(result, Err(LockError::Open { .. })));
    }

    #[test]
    fn prevents_second_acquire() {
        let temp = TempDir::new().unwrap();
        let path = document(&temp, "int x;\n");

        let _lock = DocumentLock::acquire(&path).expect("first acquire");
        let result = DocumentLock::acquire(&path);
        assert!(matches!(result, Err(LockError::AlreadyLocked(_))));
    }

    #[test]
    fn released_on_drop() {
        let temp = TempDir::new().unwrap();
        let path = document(&temp, "int x;\n");

        {
            let lock = DocumentLock::acquire(&path).expect("first acquire");
            assert!(lock.is_held());
        }

        let lock = DocumentLock::acquire(&path).expect("second acquire");
        assert!(lock.is_held());
    }

    #[test]
    fn released_explicitly() {
        let temp = TempDir::new().unwrap();
        let path = document(&temp, "int x;\n");

        let mut lock = DocumentLock::acquire(&path).expect("acquire");
        lock.release().expect("release");
        lock.release().expect("second release is a no-op");
        assert!(!lock.is_held());
        assert!(lock.read_bytes().is_err());

        DocumentLock::acquire(&path).expect("reacquire");
    }

    #[test]
    fn read_and_replace() {
        let temp = TempDir::new().unwrap();
        let path = document(&temp, "a much longer original body\n");

        let mut lock = DocumentLock::acquire(&path).expect("acquire");
        assert_eq!(lock.read_bytes().unwrap(), b"a much longer original body\n");

        lock.replace_contents("short\n").unwrap();
        assert_eq!(lock.read_bytes().unwrap(), b"short\n");
        drop(lock);

        assert_eq!(fs::read_to_string(&path).unwrap(), "short\n");
    }

    #[test]
    fn error_display_names_path() {
        let err = LockError::AlreadyLocked(PathBuf::from("main.c"));
        assert!(err.to_string().contains("main.c"));
        assert!(err.to_string().contains("locked"));
    }
}
