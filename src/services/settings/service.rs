use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::GridSettings;

const SETTINGS_FILE: &str = "grid.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service backed by the per-user config directory, if the platform has one
    pub fn from_default_location() -> Option<Self> {
        Self::default_path().map(Self::new)
    }

    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "KenBoyle", "AvailabilityGrid")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings, falling back to defaults when no file exists
    pub fn get(&self) -> Result<GridSettings> {
        if !self.path.exists() {
            log::debug!("No settings at {}, using defaults", self.path.display());
            return Ok(GridSettings::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let settings = GridSettings::from_toml(&content)
            .with_context(|| format!("Failed to parse settings in {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;

        Ok(settings)
    }

    /// Update settings
    pub fn update(&self, settings: &GridSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create dir {}", parent.display()))?;
        }

        let content = settings.to_toml().context("Failed to serialize settings")?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;

        log::info!("Saved grid settings to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_get_defaults_without_file() {
        let dir = tempdir().unwrap();
        let service = SettingsService::new(dir.path().join(SETTINGS_FILE));
        assert_eq!(service.get().unwrap(), GridSettings::default());
    }

    #[test]
    fn test_update_and_get() {
        let dir = tempdir().unwrap();
        let service = SettingsService::new(dir.path().join("nested").join(SETTINGS_FILE));

        let settings = GridSettings {
            first_hour: 8,
            last_hour: 21,
            ..Default::default()
        };
        service.update(&settings).expect("Failed to update settings");

        let loaded = service.get().expect("Failed to load settings");
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_update_rejects_invalid() {
        let dir = tempdir().unwrap();
        let service = SettingsService::new(dir.path().join(SETTINGS_FILE));
        let settings = GridSettings {
            first_hour: 22,
            last_hour: 8,
            ..Default::default()
        };

        let err = service.update(&settings).unwrap_err();
        assert!(err.to_string().contains("Invalid settings"));
        assert!(!service.path().exists());
    }

    #[test]
    fn test_get_rejects_invalid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "first_hour = 20\nlast_hour = 10\n").unwrap();

        let err = SettingsService::new(&path).get().unwrap_err();
        assert!(err.to_string().contains("Invalid settings"));
    }

    #[test]
    fn test_get_rejects_malformed_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "first_hour = \"seven\"").unwrap();

        let err = SettingsService::new(&path).get().unwrap_err();
        assert!(err.to_string().contains("Failed to parse settings"));
    }
}
