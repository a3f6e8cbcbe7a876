//! 影像中繼資料擷取
//!
//! 從 JPEG 內容讀取 EXIF IFD0 的 Make、Model 與 DateTime。
//! 解析失敗一律視為「沒有可用資料」，不會回傳錯誤。

use exif::{Exif, In, Reader, Tag, Value};
use std::io::Cursor;

/// 命名所需的相機資訊，每個欄位都可能不存在
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CameraMetadata {
    pub make: Option<String>,
    pub model: Option<String>,
    /// 原始 EXIF 格式：`YYYY:MM:DD hh:mm:ss`
    pub datetime: Option<String>,
}

/// 中繼資料擷取介面
pub trait MetadataExtractor {
    /// 回傳 `None` 表示檔案完全沒有可解析的中繼資料
    fn extract(&self, content: &[u8]) -> Option<CameraMetadata>;
}

/// 以 kamadak-exif 實作的擷取器
#[derive(Debug, Clone, Copy, Default)]
pub struct ExifExtractor;

impl MetadataExtractor for ExifExtractor {
    fn extract(&self, content: &[u8]) -> Option<CameraMetadata> {
        let exif = Reader::new()
            .read_from_container(&mut Cursor::new(content))
            .ok()?;

        Some(CameraMetadata {
            make: ascii_field(&exif, Tag::Make),
            model: ascii_field(&exif, Tag::Model),
            datetime: ascii_field(&exif, Tag::DateTime),
        })
    }
}

fn ascii_field(exif: &Exif, tag: Tag) -> Option<String> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    let Value::Ascii(values) = &field.value else {
        return None;
    };

    let text = String::from_utf8_lossy(values.first()?);
    let trimmed = text.trim_matches(|c: char| c == '\0' || c.is_whitespace());
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
