use crate::config::types::{SETTINGS_FILE_NAME, UserSettings};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn save_settings(settings: &UserSettings) -> Result<()> {
    // Save to settings.json in the current working directory
    save_settings_to(settings, Path::new(SETTINGS_FILE_NAME))
}

pub fn save_settings_to(settings: &UserSettings, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(settings).context("無法序列化設定")?;

    fs::write(path, content)
        .with_context(|| format!("無法寫入設定檔: {}", path.display()))?;

    Ok(())
}
