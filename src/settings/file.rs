//! Settings file persistence.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use super::Settings;
use crate::error::Result;

const FILE_NAME: &str = "settings.json";

pub fn default_path() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("dev", "passmint", "passmint")?;
    Some(dirs.config_dir().join(FILE_NAME))
}

pub fn load(path: &Path) -> Result<Settings> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::info!("no settings at {}, using defaults", path.display());
            return Ok(Settings::default());
        }
        Err(e) => return Err(e.into()),
    };

    let settings = serde_json::from_str(&data)?;
    log::debug!("loaded settings from {}", path.display());
    Ok(settings)
}

pub fn save(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut data = serde_json::to_string_pretty(settings)?;
    data.push('\n');
    fs::write(path, data)?;

    log::info!("saved settings to {}", path.display());
    Ok(())
}
