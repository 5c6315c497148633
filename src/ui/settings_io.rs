use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::storage::{default_roster_path, ROSTER_PATH_ENV};
use crate::ui::settings::UiSettings;

fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("executive_attendance");
    path.push("ui_settings.json");
    path
}

pub fn load_settings() -> UiSettings {
    load_settings_from(&settings_path())
}

pub fn save_settings(settings: &UiSettings) -> anyhow::Result<()> {
    save_settings_to(&settings_path(), settings)
}

/// Unreadable or malformed settings are logged and replaced by defaults.
pub fn load_settings_from(path: &Path) -> UiSettings {
    let Ok(text) = fs::read_to_string(path) else {
        return UiSettings::default();
    };

    match serde_json::from_str(&text) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("ignoring bad settings file {}: {}", path.display(), e);
            UiSettings::default()
        }
    }
}

pub fn save_settings_to(path: &Path, settings: &UiSettings) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating settings dir {}", dir.display()))?;
    }
    let json = serde_json::to_string_pretty(settings).context("serializing settings")?;
    fs::write(path, json).with_context(|| format!("writing settings to {}", path.display()))?;
    Ok(())
}

/// Env override, then the saved choice, then the data dir default.
pub fn resolve_roster_path(settings: &UiSettings) -> PathBuf {
    resolve_roster_path_with(std::env::var_os(ROSTER_PATH_ENV).map(PathBuf::from), settings)
}

fn resolve_roster_path_with(env_override: Option<PathBuf>, settings: &UiSettings) -> PathBuf {
    env_override
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(|| settings.roster_path.clone())
        .unwrap_or_else(default_roster_path)
}
