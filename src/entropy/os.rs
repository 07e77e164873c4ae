//! Operating system CSPRNG (`getrandom(2)`, `BCryptGenRandom`, ...).

use rand::TryRngCore;
use rand::rngs::OsRng;
use zeroize::Zeroize;

use super::{EntropySource, words_from_bytes};
use crate::error::{Error, Result};

/// Zero-sized handle over the OS generator; safe to create per request and
/// to use from any thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, buf: &mut [u32]) -> Result<()> {
        if buf.is_empty() {
            return Ok(());
        }

        let mut bytes = vec![0u8; buf.len() * 4];
        let res = OsRng.try_fill_bytes(&mut bytes);
        if let Err(e) = res {
            bytes.zeroize();
            return Err(Error::RandomSourceUnavailable {
                source_name: self.name(),
                reason: e.to_string(),
            });
        }

        words_from_bytes(&bytes, buf);
        bytes.zeroize();
        Ok(())
    }

    fn name(&self) -> &'static str {
        "os"
    }
}
