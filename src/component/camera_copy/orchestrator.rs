//! 整理流程主體
//!
//! 依掃描順序逐一處理檔案：讀取內容、擷取中繼資料、產生檔名、判斷重複、執行或紀錄動作。
//! 同一時間只處理一個檔案，檔名編號與重複判定因此可重現。

use super::action_planner::{ActionSink, PlannedAction};
use super::duplicate_detector::{Classification, DuplicateDetector};
use super::ledger::DryRunLedger;
use super::metadata_extractor::{ExifExtractor, MetadataExtractor};
use super::name_registry::NameRegistry;
use super::name_synthesizer::{DEFAULT_FALLBACK_PREFIX, NameSynthesizer};
use crate::config::CameraCopySettings;
use crate::tools::{
    CandidateFile, ensure_directory_exists, scan_image_files, validate_directory_exists,
};
use anyhow::Result;
use indicatif::ProgressBar;
use log::{debug, info, warn};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 呼叫端提供的執行參數
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// 是否偵測並略過重複檔案
    pub skip_duplicates: bool,
    /// 移動而非複製；搭配 `skip_duplicates` 時會刪除重複檔案
    pub destructive: bool,
    /// 只寫入紀錄檔，不動任何圖片
    pub dry_run: bool,
    /// 沒有中繼資料時的檔名前綴
    pub fallback_prefix: String,
}

impl RunOptions {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            skip_duplicates: false,
            destructive: false,
            dry_run: false,
            fallback_prefix: DEFAULT_FALLBACK_PREFIX.to_string(),
        }
    }

    pub fn from_settings(
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
        settings: &CameraCopySettings,
    ) -> Self {
        Self {
            skip_duplicates: settings.skip_duplicates,
            destructive: settings.destructive,
            dry_run: settings.dry_run,
            fallback_prefix: settings.fallback_prefix.clone(),
            ..Self::new(source, destination)
        }
    }
}

/// 執行結果統計
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub files_processed: usize,
    pub duplicates_skipped: usize,
    /// 複製或移動（試跑時為預計複製或移動）的檔案數
    pub files_relocated: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "處理檔案: {}", self.files_processed)?;
        writeln!(f, "略過重複: {}", self.duplicates_skipped)?;
        write!(f, "複製或移動: {}", self.files_relocated)
    }
}

/// 單次整理流程，名稱與指紋登記表只存在於此次執行
pub struct RunOrchestrator<E: MetadataExtractor = ExifExtractor> {
    options: RunOptions,
    extractor: E,
    synthesizer: NameSynthesizer,
    names: NameRegistry,
    detector: Option<DuplicateDetector>,
    shutdown_signal: Arc<AtomicBool>,
    progress: ProgressBar,
}

impl RunOrchestrator<ExifExtractor> {
    #[must_use]
    pub fn new(options: RunOptions, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self::with_extractor(options, ExifExtractor, shutdown_signal)
    }
}

impl<E: MetadataExtractor> RunOrchestrator<E> {
    pub fn with_extractor(
        options: RunOptions,
        extractor: E,
        shutdown_signal: Arc<AtomicBool>,
    ) -> Self {
        let synthesizer = NameSynthesizer::new(&options.fallback_prefix);
        let detector = options.skip_duplicates.then(DuplicateDetector::new);

        Self {
            options,
            extractor,
            synthesizer,
            names: NameRegistry::new(),
            detector,
            shutdown_signal,
            progress: ProgressBar::hidden(),
        }
    }

    /// 每處理完一個檔案就前進一格
    #[must_use]
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// 執行整理流程
    ///
    /// 任何檔案操作失敗都會中止整個流程；已完成的動作不會復原
    pub fn run(mut self) -> Result<RunSummary> {
        validate_directory_exists(&self.options.source)?;
        ensure_directory_exists(&self.options.destination)?;

        let source = self.options.source.clone();
        let destination = self.options.destination.clone();

        let mut sink = if self.options.dry_run {
            let ledger = DryRunLedger::create(&destination)?;
            info!("試跑模式，預計動作寫入: {}", ledger.path().display());
            ActionSink::Record(ledger)
        } else {
            ActionSink::Execute
        };

        info!(
            "開始整理: {} -> {}（略過重複: {}，移動模式: {}，試跑: {}）",
            source.display(),
            destination.display(),
            self.options.skip_duplicates,
            self.options.destructive,
            self.options.dry_run
        );

        let mut summary = RunSummary::default();

        for file in scan_image_files(&source, Some(destination.as_path())) {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                warn!(
                    "收到中斷要求，已處理 {} 個檔案後停止",
                    summary.files_processed
                );
                self.progress.abandon_with_message("已中斷");
                return Ok(summary);
            }

            let action = self.process_file(&file, &mut sink)?;

            summary.files_processed += 1;
            if action.is_relocation() {
                summary.files_relocated += 1;
            } else {
                summary.duplicates_skipped += 1;
            }
            self.progress.inc(1);
        }

        self.progress.finish_with_message("完成");
        info!(
            "整理完成 - 處理: {}，重複: {}，複製或移動: {}",
            summary.files_processed, summary.duplicates_skipped, summary.files_relocated
        );

        Ok(summary)
    }

    fn process_file(&mut self, file: &CandidateFile, sink: &mut ActionSink) -> Result<PlannedAction> {
        let content = file.read_content()?;
        let metadata = self.extractor.extract(&content);
        let base_name = self.synthesizer.synthesize(file, metadata.as_ref())?;

        let classification = self.classify(&content, &base_name);
        debug!(
            "{} -> {}",
            file.path().display(),
            classification.report_name()
        );

        let action = PlannedAction::plan(
            file.path(),
            &classification,
            &self.options.destination,
            self.options.destructive,
        );
        sink.apply(&action)?;

        Ok(action)
    }

    /// 未開啟去重時所有檔案都是新內容；重複檔案不佔用檔名編號
    fn classify(&mut self, content: &[u8], base_name: &str) -> Classification {
        let names = &mut self.names;
        match self.detector.as_mut() {
            Some(detector) => detector.classify(content, || names.resolve(base_name)),
            None => Classification::Fresh(names.resolve(base_name)),
        }
    }
}

/// 不需要中斷訊號與進度顯示時的簡便入口
pub fn camera_copy(options: RunOptions) -> Result<RunSummary> {
    RunOrchestrator::new(options, Arc::new(AtomicBool::new(false))).run()
}
