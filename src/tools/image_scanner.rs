use anyhow::{Context, Result};
use log::debug;
use regex::bytes::Regex;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::SystemTime;
use walkdir::{DirEntry, WalkDir};

static REGEX_JPEG_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.jpe?g$").expect("無效的正規表達式"));

/// 掃描得到的候選圖片，內容在處理時才讀取
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    path: PathBuf,
}

impl CandidateFile {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read_content(&self) -> Result<Vec<u8>> {
        fs::read(&self.path).with_context(|| format!("無法讀取檔案: {}", self.path.display()))
    }

    pub fn modified(&self) -> Result<SystemTime> {
        fs::metadata(&self.path)
            .and_then(|metadata| metadata.modified())
            .with_context(|| {
                format!(
                    "無法讀取修改時間: {}",
                    self.path.display()
                )
            })
    }
}

/// 檔名是否屬於 JPEG 副檔名家族（.jpg / .jpeg，不分大小寫）
///
/// 以原始位元組比對，非 UTF-8 的檔名同樣適用
#[must_use]
pub fn is_jpeg_file_name(file_name: &OsStr) -> bool {
    REGEX_JPEG_EXTENSION.is_match(file_name.as_encoded_bytes())
}

/// 遞迴掃描目錄下的 JPEG 檔案
///
/// 每個資料夾內依檔名排序，未變動的目錄每次掃描順序相同。
/// 無法讀取的資料夾或項目會被略過。`exclude` 指向的子資料夾（通常是輸出目錄）不會被掃描。
pub fn scan_image_files(
    directory: &Path,
    exclude: Option<&Path>,
) -> impl Iterator<Item = CandidateFile> {
    let exclude = exclude.and_then(|path| path.canonicalize().ok());

    WalkDir::new(directory)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| !is_excluded_directory(entry, exclude.as_deref()))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!("略過無法讀取的項目: {e}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| is_jpeg_file_name(entry.file_name()))
        .map(|entry| CandidateFile::new(entry.into_path()))
}

fn is_excluded_directory(entry: &DirEntry, exclude: Option<&Path>) -> bool {
    let Some(exclude) = exclude else {
        return false;
    };
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .path()
            .canonicalize()
            .is_ok_and(|path| path == exclude)
}
