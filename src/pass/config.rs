//! Validated generation request.

use serde::{Deserialize, Serialize};

use super::charset::CategorySet;
use crate::error::{Error, Result};

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 32;

/// How a random word is turned into a pool index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sampling {
    /// `r % pool.len()`. Slightly favours low indices whenever the pool size
    /// does not divide 2^32; for pools under a hundred characters the skew is
    /// below one part in 40 million.
    #[default]
    Modulo,
    /// Discard words from the incomplete top bucket and redraw. Exact.
    Rejection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub categories: CategorySet,
    pub exclude_ambiguous: bool,
    pub sampling: Sampling,
    length: usize,
}

impl Config {
    pub fn new(categories: CategorySet, exclude_ambiguous: bool, length: usize) -> Result<Self> {
        Ok(Self {
            categories,
            exclude_ambiguous,
            sampling: Sampling::default(),
            length: check_length(length)?,
        })
    }

    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn set_length(&mut self, length: usize) -> Result<()> {
        self.length = check_length(length)?;
        Ok(())
    }
}

fn check_length(length: usize) -> Result<usize> {
    if (MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        Ok(length)
    } else {
        Err(Error::InvalidLength(length))
    }
}
