use crate::component::camera_copy::DEFAULT_FALLBACK_PREFIX;
use serde::{Deserialize, Serialize};

/// 設定檔檔名，位於程式執行的當前目錄
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// 相機照片整理的預設選項
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraCopySettings {
    pub skip_duplicates: bool,
    pub destructive: bool,
    pub dry_run: bool,
    /// 沒有 EXIF 時的檔名前綴
    pub fallback_prefix: String,
    pub last_source: Option<String>,
    pub last_destination: Option<String>,
}

impl Default for CameraCopySettings {
    fn default() -> Self {
        Self {
            skip_duplicates: true,
            destructive: false,
            dry_run: true,
            fallback_prefix: DEFAULT_FALLBACK_PREFIX.to_string(),
            last_source: None,
            last_destination: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub camera_copy: CameraCopySettings,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub settings: UserSettings,
}
