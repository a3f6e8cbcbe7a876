use crate::config::types::{Config, SETTINGS_FILE_NAME, UserSettings};
use anyhow::{Context, Result};
use log::warn;
use std::fs;
use std::path::Path;

impl Config {
    pub fn new() -> Result<Self> {
        let settings = load_settings_from(Path::new(SETTINGS_FILE_NAME)).unwrap_or_else(|e| {
            warn!("改用預設設定: {e:#}");
            UserSettings::default()
        });

        Ok(Self { settings })
    }
}

/// 讀取設定檔，檔案不存在時回傳預設值
pub fn load_settings_from(path: &Path) -> Result<UserSettings> {
    if !path.exists() {
        return Ok(UserSettings::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("無法讀取設定檔: {}", path.display()))?;

    if content.trim().is_empty() {
        return Ok(UserSettings::default());
    }

    serde_json::from_str(&content)
        .with_context(|| format!("無法解析設定檔: {}", path.display()))
}
