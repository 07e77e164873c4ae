//! Direct `/dev/urandom` reader.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use zeroize::Zeroize;

use super::{EntropySource, words_from_bytes};
use crate::error::{Error, Result};

const DEV_URANDOM: &str = "/dev/urandom";

pub fn is_available() -> bool {
    Path::new(DEV_URANDOM).exists()
}

/// Reads straight from the device on every call. Nothing is pooled, so no
/// random material outlives the request that consumed it.
#[derive(Debug)]
pub struct Urandom {
    path: PathBuf,
    file: Option<File>,
}

impl Urandom {
    pub fn new() -> Self {
        Self::with_path(DEV_URANDOM)
    }

    /// Point at a different device node. Mostly useful for tests.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: None,
        }
    }

    fn unavailable(&self, e: std::io::Error) -> Error {
        Error::RandomSourceUnavailable {
            source_name: self.name(),
            reason: format!("{}: {}", self.path.display(), e),
        }
    }
}

impl Default for Urandom {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for Urandom {
    fn fill(&mut self, buf: &mut [u32]) -> Result<()> {
        if buf.is_empty() {
            return Ok(());
        }

        let file = match self.file.take() {
            Some(file) => file,
            None => {
                let file = File::open(&self.path).map_err(|e| self.unavailable(e))?;
                log::debug!("opened {}", self.path.display());
                file
            }
        };
        let file = self.file.insert(file);

        let mut bytes = vec![0u8; buf.len() * 4];
        if let Err(e) = file.read_exact(&mut bytes) {
            bytes.zeroize();
            // Drop the handle so the next call retries from scratch.
            self.file = None;
            return Err(self.unavailable(e));
        }

        words_from_bytes(&bytes, buf);
        bytes.zeroize();
        Ok(())
    }

    fn name(&self) -> &'static str {
        "/dev/urandom"
    }
}
