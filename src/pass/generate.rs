//! Password sampling.

use zeroize::{Zeroize, Zeroizing};

use super::charset;
use super::config::{Config, Sampling};
use crate::entropy::EntropySource;
use crate::error::{Error, Result};

const WORD_SPAN: u64 = 1 << 32;

/// Build the pool described by `config` and sample a password from it.
pub fn generate<S>(config: &Config, source: &mut S) -> Result<Zeroizing<String>>
where
    S: EntropySource + ?Sized,
{
    let pool = charset::build(config.categories, config.exclude_ambiguous);
    log::debug!(
        "pool: {} chars from [{}], exclude_ambiguous={}",
        pool.len(),
        config.categories,
        config.exclude_ambiguous
    );
    sample(&pool, config.length(), config.sampling, source)
}

/// Draw `length` characters from `pool`, one random word per character.
///
/// Fails with [`Error::EmptyPool`] before touching the source when there is
/// nothing to draw from. Source failures are returned as-is.
pub fn sample<S>(
    pool: &[char],
    length: usize,
    sampling: Sampling,
    source: &mut S,
) -> Result<Zeroizing<String>>
where
    S: EntropySource + ?Sized,
{
    if pool.is_empty() {
        return Err(Error::EmptyPool);
    }

    log::debug!(
        "sampling {length} chars via {} ({:?})",
        source.name(),
        sampling
    );

    let mut words = vec![0u32; length];
    source.fill(&mut words)?;

    let res = pick_all(pool, &words, sampling, source);
    words.zeroize();
    res
}

fn pick_all<S>(
    pool: &[char],
    words: &[u32],
    sampling: Sampling,
    source: &mut S,
) -> Result<Zeroizing<String>>
where
    S: EntropySource + ?Sized,
{
    let mut password = Zeroizing::new(String::with_capacity(words.len()));
    let n = pool.len() as u64;

    match sampling {
        Sampling::Modulo => {
            for &r in words {
                password.push(pool[index(r, n)]);
            }
        }
        Sampling::Rejection => {
            // Largest multiple of n that fits in 2^32; words at or above it
            // would land unevenly.
            let zone = WORD_SPAN - WORD_SPAN % n;
            for &r in words {
                let r = if (r as u64) < zone {
                    r
                } else {
                    redraw(zone, source)?
                };
                password.push(pool[index(r, n)]);
            }
        }
    }

    Ok(password)
}

#[inline]
fn index(r: u32, n: u64) -> usize {
    (r as u64 % n) as usize
}

fn redraw<S>(zone: u64, source: &mut S) -> Result<u32>
where
    S: EntropySource + ?Sized,
{
    let mut word = [0u32; 1];
    loop {
        source.fill(&mut word)?;
        if (word[0] as u64) < zone {
            let r = word[0];
            word.zeroize();
            return Ok(r);
        }
    }
}
