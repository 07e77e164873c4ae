//! Password generation and scoring.

pub mod charset;
mod config;
mod generate;
mod strength;

pub use charset::{AMBIGUOUS, Category, CategorySet, build as build_pool};
pub use config::{Config, MAX_LENGTH, MIN_LENGTH, Sampling};
pub use generate::{generate, sample};
pub use strength::{Strength, entropy_bits, score};
