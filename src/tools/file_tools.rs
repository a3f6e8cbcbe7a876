use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// 複製檔案，保留原檔
pub fn copy_file(source: &Path, target: &Path) -> Result<()> {
    fs::copy(source, target).with_context(|| {
        format!(
            "無法複製檔案: {} -> {}",
            source.display(),
            target.display()
        )
    })?;
    Ok(())
}

/// 移動檔案
///
/// 先嘗試 rename；失敗時（例如跨檔案系統）改為複製後刪除原檔
pub fn move_file(source: &Path, target: &Path) -> Result<()> {
    match fs::rename(source, target) {
        Ok(()) => Ok(()),
        Err(e) => {
            debug!(
                "無法直接重新命名 {}（{e}），改用複製後刪除",
                source.display()
            );
            copy_and_delete(source, target)
        }
    }
}

pub fn delete_file(path: &Path) -> Result<()> {
    fs::remove_file(path).with_context(|| format!("無法刪除檔案: {}", path.display()))
}

fn copy_and_delete(source: &Path, target: &Path) -> Result<()> {
    copy_file(source, target)?;
    delete_file(source)
}
