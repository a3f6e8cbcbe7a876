//! 動作規劃與執行
//!
//! 依分類結果與設定決定每個檔案的唯一動作，實際執行或寫入試跑紀錄

use super::duplicate_detector::Classification;
use super::ledger::DryRunLedger;
use crate::tools::{copy_file, delete_file, move_file};
use anyhow::Result;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// 單一檔案的預計動作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedAction {
    Copy { source: PathBuf, destination: PathBuf },
    Move { source: PathBuf, destination: PathBuf },
    Delete { source: PathBuf },
    Ignore { source: PathBuf },
}

impl PlannedAction {
    /// 新內容複製或移動到輸出目錄；重複檔案刪除或忽略
    #[must_use]
    pub fn plan(
        source: &Path,
        classification: &Classification,
        destination_dir: &Path,
        destructive: bool,
    ) -> Self {
        let source = source.to_path_buf();
        match classification {
            Classification::Fresh(name) => {
                let destination = destination_dir.join(name);
                if destructive {
                    Self::Move {
                        source,
                        destination,
                    }
                } else {
                    Self::Copy {
                        source,
                        destination,
                    }
                }
            }
            Classification::Duplicate(_) => {
                if destructive {
                    Self::Delete { source }
                } else {
                    Self::Ignore { source }
                }
            }
        }
    }

    /// 紀錄檔中使用的動作名稱
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Copy { .. } => "copy",
            Self::Move { .. } => "move",
            Self::Delete { .. } => "delete",
            Self::Ignore { .. } => "ignore",
        }
    }

    #[must_use]
    pub fn source(&self) -> &Path {
        match self {
            Self::Copy { source, .. }
            | Self::Move { source, .. }
            | Self::Delete { source }
            | Self::Ignore { source } => source,
        }
    }

    #[must_use]
    pub fn destination(&self) -> Option<&Path> {
        match self {
            Self::Copy { destination, .. } | Self::Move { destination, .. } => Some(destination),
            Self::Delete { .. } | Self::Ignore { .. } => None,
        }
    }

    /// 是否會把檔案放到輸出目錄
    #[must_use]
    pub const fn is_relocation(&self) -> bool {
        matches!(self, Self::Copy { .. } | Self::Move { .. })
    }

    /// 實際執行動作
    pub fn execute(&self) -> Result<()> {
        if let Some(destination) = self.destination().filter(|path| path.exists()) {
            warn!("覆寫既有檔案: {}", destination.display());
        }

        match self {
            Self::Copy {
                source,
                destination,
            } => {
                copy_file(source, destination)?;
                info!("已複製: {} -> {}", source.display(), destination.display());
            }
            Self::Move {
                source,
                destination,
            } => {
                move_file(source, destination)?;
                info!("已移動: {} -> {}", source.display(), destination.display());
            }
            Self::Delete { source } => {
                delete_file(source)?;
                info!("已刪除重複檔案: {}", source.display());
            }
            Self::Ignore { .. } => {}
        }

        Ok(())
    }
}

/// 動作的去處：直接執行或寫入試跑紀錄
pub enum ActionSink {
    Execute,
    Record(DryRunLedger),
}

impl ActionSink {
    pub fn apply(&mut self, action: &PlannedAction) -> Result<()> {
        match self {
            Self::Execute => action.execute(),
            Self::Record(ledger) => ledger.record(action),
        }
    }

    #[cfg(test)]
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        matches!(self, Self::Record(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fresh() -> Classification {
        Classification::Fresh("Acme_X100_001.jpg".to_string())
    }

    fn duplicate() -> Classification {
        Classification::Duplicate("Acme_X100_001.jpg".to_string())
    }

    #[test]
    fn test_plan_matrix() {
        let source = Path::new("/src/a.jpg");
        let dest = Path::new("/dst");
        let expected_destination = PathBuf::from("/dst/Acme_X100_001.jpg");

        assert_eq!(
            PlannedAction::plan(source, &fresh(), dest, false),
            PlannedAction::Copy {
                source: source.to_path_buf(),
                destination: expected_destination.clone(),
            }
        );
        assert_eq!(
            PlannedAction::plan(source, &fresh(), dest, true),
            PlannedAction::Move {
                source: source.to_path_buf(),
                destination: expected_destination,
            }
        );
        assert_eq!(
            PlannedAction::plan(source, &duplicate(), dest, false),
            PlannedAction::Ignore {
                source: source.to_path_buf()
            }
        );
        assert_eq!(
            PlannedAction::plan(source, &duplicate(), dest, true),
            PlannedAction::Delete {
                source: source.to_path_buf()
            }
        );
    }

    #[test]
    fn test_labels_and_relocation() {
        let source = Path::new("/src/a.jpg");
        let dest = Path::new("/dst");

        let copy = PlannedAction::plan(source, &fresh(), dest, false);
        let delete = PlannedAction::plan(source, &duplicate(), dest, true);

        assert_eq!(copy.label(), "copy");
        assert!(copy.is_relocation());
        assert_eq!(delete.label(), "delete");
        assert!(!delete.is_relocation());
        assert_eq!(delete.destination(), None);
        assert_eq!(delete.source(), source);
    }

    #[test]
    fn test_execute_copy_and_move() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("a.jpg");
        let dest = temp_dir.path().join("out");
        fs::create_dir_all(&dest).unwrap();
        fs::write(&source, "image").unwrap();

        PlannedAction::plan(&source, &fresh(), &dest, false)
            .execute()
            .unwrap();
        assert!(source.exists());
        assert!(dest.join("Acme_X100_001.jpg").exists());

        let moved = Classification::Fresh("Acme_X100_002.jpg".to_string());
        PlannedAction::plan(&source, &moved, &dest, true)
            .execute()
            .unwrap();
        assert!(!source.exists());
        assert!(dest.join("Acme_X100_002.jpg").exists());
    }

    #[test]
    fn test_execute_duplicate_actions() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("dup.jpg");
        fs::write(&source, "image").unwrap();

        PlannedAction::plan(&source, &duplicate(), temp_dir.path(), false)
            .execute()
            .unwrap();
        assert!(source.exists());

        PlannedAction::plan(&source, &duplicate(), temp_dir.path(), true)
            .execute()
            .unwrap();
        assert!(!source.exists());
    }

    #[test]
    fn test_execute_failure_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("missing.jpg");

        let result = PlannedAction::plan(&source, &fresh(), temp_dir.path(), false).execute();
        assert!(result.is_err());
    }

    #[test]
    fn test_sink_records_without_touching_files() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("a.jpg");
        fs::write(&source, "image").unwrap();

        let mut sink = ActionSink::Record(DryRunLedger::create(temp_dir.path()).unwrap());
        assert!(sink.is_dry_run());

        sink.apply(&PlannedAction::plan(&source, &fresh(), temp_dir.path(), true))
            .unwrap();

        assert!(source.exists());
        assert!(!temp_dir.path().join("Acme_X100_001.jpg").exists());
    }
}
