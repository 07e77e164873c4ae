//! Single-password generator built around an OS-backed CSPRNG.
//!
//! ```no_run
//! use passmint::entropy::OsEntropy;
//! use passmint::pass::{self, CategorySet, Config, Strength};
//!
//! let config = Config::new(CategorySet::all(), true, 20)?;
//! let password = pass::generate(&config, &mut OsEntropy)?;
//! let score = pass::score(&password, config.categories);
//! println!("{} ({})", *password, Strength::from_score(score));
//! # Ok::<(), passmint::Error>(())
//! ```

pub mod entropy;
mod error;
pub mod pass;
pub mod settings;

pub use error::{Error, Result};
