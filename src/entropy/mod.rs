//! Cryptographically secure random sources.
//!
//! Every source here must be unpredictable: the sampler trusts whatever it is
//! handed. There is no fallback to a non-cryptographic generator anywhere in
//! this module; a failing source surfaces as
//! [`Error::RandomSourceUnavailable`](crate::Error::RandomSourceUnavailable).

mod os;
pub mod urand;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use os::OsEntropy;
pub use urand::Urandom;

/// A uniform, unpredictable supplier of 32-bit words.
pub trait EntropySource {
    /// Overwrite every element of `buf` with fresh random words.
    fn fill(&mut self, buf: &mut [u32]) -> Result<()>;

    /// Short human-readable name, used in logs and error messages.
    fn name(&self) -> &'static str;
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn fill(&mut self, buf: &mut [u32]) -> Result<()> {
        (**self).fill(buf)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<S: EntropySource + ?Sized> EntropySource for Box<S> {
    fn fill(&mut self, buf: &mut [u32]) -> Result<()> {
        (**self).fill(buf)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Which source the caller asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Os,
    Urandom,
}

impl SourceKind {
    pub fn open(self) -> Box<dyn EntropySource> {
        match self {
            SourceKind::Os => Box::new(OsEntropy),
            SourceKind::Urandom => Box::new(Urandom::new()),
        }
    }
}

/// Reassemble little-endian bytes into words. `bytes` must hold exactly four
/// bytes per word.
fn words_from_bytes(bytes: &[u8], words: &mut [u32]) {
    debug_assert_eq!(bytes.len(), words.len() * 4);
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
}
