//! 相機照片整理元件
//!
//! 掃描 JPEG 圖片，依 EXIF 相機資訊與拍攝時間重新命名，
//! 可選擇以 BLAKE3 指紋略過重複檔案，並複製、移動或只輸出試跑紀錄

mod action_planner;
mod duplicate_detector;
mod ledger;
mod main;
mod metadata_extractor;
mod name_registry;
mod name_synthesizer;
mod orchestrator;

pub use action_planner::{ActionSink, PlannedAction};
pub use duplicate_detector::{Classification, DuplicateDetector, FingerprintRegistry};
pub use ledger::{DryRunLedger, LEDGER_FILE_NAME};
pub use main::CameraCopy;
pub use metadata_extractor::{CameraMetadata, ExifExtractor, MetadataExtractor};
pub use name_registry::{NameRegistry, OUTPUT_EXTENSION};
pub use name_synthesizer::{
    DEFAULT_FALLBACK_PREFIX, NameSynthesizer, UNKNOWN_MAKE, UNKNOWN_MODEL, format_timestamp,
    reformat_exif_datetime, sanitize,
};
pub use orchestrator::{RunOptions, RunOrchestrator, RunSummary, camera_copy};
