//! Installation verification.
//!
//! An installation directory is considered valid when every identifying file
//! is present with the expected byte size and MD5 digest.

use std::{fs, path::Path};

/// A known file from a supported installation
#[derive(Debug, Clone)]
pub struct GameFile {
    pub name: &'static str,
    pub size: u64,
    pub md5: &'static str,
}

impl GameFile {
    pub const fn new(name: &'static str, size: u64, md5: &'static str) -> Self {
        GameFile { name, size, md5 }
    }

    /// Check that `dir` contains this file with the expected size and digest
    pub fn matches(&self, dir: &Path) -> bool {
        let path = dir.join(self.name);

        // Size check first, so mismatched files are rejected without hashing
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(_) => return false,
        };
        if metadata.len() != self.size {
            return false;
        }

        match fs::read(&path) {
            Ok(data) => format!("{:x}", md5::compute(&data)) == self.md5,
            Err(_) => false,
        }
    }
}

/// Verifies that the provided path is the supported game
pub fn verify(files: &[GameFile], dir: &Path) -> bool {
    files.iter().all(|file| file.matches(dir))
}
