//! 試跑紀錄檔
//!
//! 試跑時不動任何檔案，改把每個預計動作寫成一列 CSV

use super::action_planner::PlannedAction;
use anyhow::{Context, Result};
use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use log::warn;
use std::fs::File;
use std::path::{Path, PathBuf};

/// 紀錄檔名稱，放在輸出目錄下
pub const LEDGER_FILE_NAME: &str = "camera_copy.csv";

const LEDGER_HEADER: [&str; 3] = ["action", "source", "destination"];

pub struct DryRunLedger {
    writer: Writer<File>,
    path: PathBuf,
}

impl DryRunLedger {
    /// 建立（或清空）紀錄檔並寫入標題列
    pub fn create(destination_dir: &Path) -> Result<Self> {
        let path = destination_dir.join(LEDGER_FILE_NAME);
        let file = File::create(&path)
            .with_context(|| format!("無法建立紀錄檔: {}", path.display()))?;

        let writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::Any(b'\n'))
            .flexible(true)
            .from_writer(file);

        let mut ledger = Self { writer, path };
        ledger.write_row(&LEDGER_HEADER)?;
        Ok(ledger)
    }

    /// 寫入一筆預計動作，寫入後立即 flush
    pub fn record(&mut self, action: &PlannedAction) -> Result<()> {
        let mut row = vec![action.label().to_string(), path_field(action.source())];
        if let Some(destination) = action.destination() {
            row.push(path_field(destination));
        }
        self.write_row(&row)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_row<T: AsRef<[u8]>>(&mut self, row: &[T]) -> Result<()> {
        self.writer
            .write_record(row)
            .with_context(|| format!("無法寫入紀錄檔: {}", self.path.display()))?;
        self.writer
            .flush()
            .with_context(|| format!("無法寫入紀錄檔: {}", self.path.display()))
    }
}

/// CSV 欄位只能放文字，非 UTF-8 路徑以替代字元表示
fn path_field(path: &Path) -> String {
    path.to_str().map_or_else(
        || {
            warn!("路徑不是有效的 UTF-8，紀錄檔中以替代字元表示: {}", path.display());
            path.to_string_lossy().into_owned()
        },
        str::to_string,
    )
}
