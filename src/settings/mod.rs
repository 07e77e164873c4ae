//! Persisted generation defaults.
//!
//! Only options live here. Generated passwords are never written to disk.

mod file;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::entropy::SourceKind;
use crate::error::Result;
use crate::pass::{CategorySet, Config, Sampling};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub length: usize,
    pub categories: CategorySet,
    pub exclude_ambiguous: bool,
    pub sampling: Sampling,
    pub source: SourceKind,
}

impl Settings {
    /// Read settings from `path`, falling back to defaults when the file
    /// does not exist yet.
    pub fn load_from(path: &Path) -> Result<Self> {
        file::load(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        file::save(self, path)
    }

    /// `<config dir>/passmint/settings.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        file::default_path()
    }

    /// Turn the stored options into a validated generation request.
    pub fn to_config(&self) -> Result<Config> {
        Ok(Config::new(self.categories, self.exclude_ambiguous, self.length)?
            .with_sampling(self.sampling))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: 16,
            categories: CategorySet::all(),
            exclude_ambiguous: false,
            sampling: Sampling::Modulo,
            source: SourceKind::Os,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::pass::Category;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = Settings {
            length: 24,
            categories: CategorySet::empty()
                .with(Category::Lowercase)
                .with(Category::Numbers),
            exclude_ambiguous: true,
            sampling: Sampling::Rejection,
            source: SourceKind::Urandom,
        };
        settings.save_to(&path).unwrap();

        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "length": 8, "categories": ["numbers"] }"#).unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.length, 8);
        assert_eq!(
            settings.categories,
            CategorySet::empty().with(Category::Numbers)
        );
        assert!(!settings.exclude_ambiguous);
        assert_eq!(settings.source, SourceKind::Os);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "length=8").unwrap();

        assert!(matches!(
            Settings::load_from(&path),
            Err(Error::SettingsFormat(_))
        ));
    }

    #[test]
    fn stored_length_is_validated() {
        let settings = Settings {
            length: 2,
            ..Settings::default()
        };
        assert!(matches!(settings.to_config(), Err(Error::InvalidLength(2))));
    }

    #[test]
    fn to_config_carries_sampling() {
        let settings = Settings {
            sampling: Sampling::Rejection,
            ..Settings::default()
        };
        let config = settings.to_config().unwrap();
        assert_eq!(config.sampling, Sampling::Rejection);
        assert_eq!(config.length(), 16);
    }
}
