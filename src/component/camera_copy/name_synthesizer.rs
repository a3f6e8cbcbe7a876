//! 檔名產生模組
//!
//! 由相機資訊（或檔案修改時間）組出不含副檔名的基本檔名，並清理非法字元

use super::metadata_extractor::CameraMetadata;
use crate::tools::CandidateFile;
use anyhow::Result;
use chrono::{DateTime, NaiveDateTime, Utc};
use std::time::SystemTime;

/// 缺少 Make 時使用的名稱
pub const UNKNOWN_MAKE: &str = "brand";
/// 缺少 Model 時使用的名稱
pub const UNKNOWN_MODEL: &str = "camera";
/// 完全沒有中繼資料時的檔名前綴
pub const DEFAULT_FALLBACK_PREFIX: &str = "bad_exif";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%S";
const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// 依序替換為連字號的字元
const INVALID_CHARS: [char; 14] = [
    '/', '<', '>', ':', '"', '\\', '|', '?', '*', ',', '.', ' ', '&', '%',
];

/// 基本檔名產生器
#[derive(Debug, Clone)]
pub struct NameSynthesizer {
    fallback_prefix: String,
}

impl Default for NameSynthesizer {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_PREFIX)
    }
}

impl NameSynthesizer {
    #[must_use]
    pub fn new(fallback_prefix: &str) -> Self {
        Self {
            fallback_prefix: fallback_prefix.to_string(),
        }
    }

    /// 產生檔案的基本檔名
    ///
    /// 只有在拍攝時間缺少或無法解析時才讀取檔案修改時間
    pub fn synthesize(
        &self,
        file: &CandidateFile,
        metadata: Option<&CameraMetadata>,
    ) -> Result<String> {
        let capture_time = metadata
            .and_then(|m| m.datetime.as_deref())
            .and_then(reformat_exif_datetime);

        let timestamp = match capture_time {
            Some(timestamp) => timestamp,
            None => format_timestamp(file.modified()?),
        };

        Ok(self.compose(metadata, &timestamp))
    }

    /// 以已決定的時間字串組出基本檔名
    #[must_use]
    pub fn compose(&self, metadata: Option<&CameraMetadata>, timestamp: &str) -> String {
        let raw = match metadata {
            Some(metadata) => {
                let make = metadata.make.as_deref().unwrap_or(UNKNOWN_MAKE);
                let model = metadata.model.as_deref().unwrap_or(UNKNOWN_MODEL);
                [make, model, timestamp].join("_")
            }
            None => format!("{}_{timestamp}", self.fallback_prefix),
        };

        sanitize(&raw)
    }
}

/// 將 `YYYY:MM:DD hh:mm:ss` 轉為 `YYYY-MM-DDThh-mm-ss`，格式不正確時回傳 `None`
#[must_use]
pub fn reformat_exif_datetime(raw: &str) -> Option<String> {
    NaiveDateTime::parse_from_str(raw.trim(), EXIF_DATETIME_FORMAT)
        .ok()
        .map(|datetime| datetime.format(TIMESTAMP_FORMAT).to_string())
}

/// 以 UTC 格式化檔案時間
#[must_use]
pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).format(TIMESTAMP_FORMAT).to_string()
}

/// 清理檔名
///
/// 每個非法字元替換為 `-` 後立即合併連續的連字號，最後去除頭尾的連字號。
/// 對已清理過的字串再次呼叫結果不變。
#[must_use]
pub fn sanitize(input: &str) -> String {
    let mut result = input.to_string();
    for invalid in INVALID_CHARS {
        result = collapse_hyphens(&result.replace(invalid, "-"));
    }
    result.trim_matches('-').to_string()
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum HyphenState {
    OutsideRun,
    InsideRun,
}

/// 連續兩個以上的連字號只保留一個，單一連字號不受影響
fn collapse_hyphens(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut state = HyphenState::OutsideRun;

    for ch in input.chars() {
        state = match (state, ch) {
            (HyphenState::OutsideRun, '-') => {
                output.push(ch);
                HyphenState::InsideRun
            }
            (HyphenState::InsideRun, '-') => HyphenState::InsideRun,
            (_, _) => {
                output.push(ch);
                HyphenState::OutsideRun
            }
        };
    }

    output
}
