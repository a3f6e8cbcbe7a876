//! 整合測試 - 以公開 API 驗證命名、編號與去重規則

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use auto_photo_organize::component::camera_copy::{
    CameraMetadata, Classification, DuplicateDetector, MetadataExtractor, NameRegistry,
    RunOptions, RunOrchestrator, sanitize,
};
use auto_photo_organize::tools::scan_image_files;
use tempfile::TempDir;

/// 以檔案內容第一行決定相機資訊的假擷取器，格式：`make|model|datetime`
struct LineExtractor;

impl MetadataExtractor for LineExtractor {
    fn extract(&self, content: &[u8]) -> Option<CameraMetadata> {
        let text = std::str::from_utf8(content).ok()?;
        let line = text.lines().next()?;
        let mut parts = line.split('|');
        let field = |part: Option<&str>| part.filter(|p| !p.is_empty()).map(str::to_string);

        if !line.contains('|') {
            return None;
        }

        Some(CameraMetadata {
            make: field(parts.next()),
            model: field(parts.next()),
            datetime: field(parts.next()),
        })
    }
}

fn setup() -> (TempDir, PathBuf, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("source");
    let destination = temp_dir.path().join("destination");
    fs::create_dir_all(&source).unwrap();
    (temp_dir, source, destination)
}

fn sorted_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

/// 測試 1: 相同基本檔名依掃描順序取得 _001、_002…
#[test]
fn test_collision_suffixes_follow_scan_order() {
    let (_temp, source, destination) = setup();
    fs::create_dir_all(source.join("day2")).unwrap();

    fs::write(source.join("a.jpg"), "Acme|X100|2021:01:02 03:04:05\nfirst").unwrap();
    fs::write(source.join("b.jpg"), "Other|Z|2022:05:06 07:08:09\nother").unwrap();
    fs::write(source.join("c.jpg"), "Acme|X100|2021:01:02 03:04:05\nsecond").unwrap();
    fs::write(source.join("day2/d.jpg"), "Acme|X100|2021:01:02 03:04:05\nthird").unwrap();

    let summary = RunOrchestrator::with_extractor(
        RunOptions::new(&source, &destination),
        LineExtractor,
        Arc::new(AtomicBool::new(false)),
    )
    .run()
    .unwrap();

    assert_eq!(summary.files_processed, 4);
    assert_eq!(summary.files_relocated, 4);

    let base = "Acme_X100_2021-01-02T03-04-05";
    assert!(
        fs::read_to_string(destination.join(format!("{base}_001.jpg")))
            .unwrap()
            .ends_with("first")
    );
    assert!(
        fs::read_to_string(destination.join(format!("{base}_002.jpg")))
            .unwrap()
            .ends_with("second")
    );
    assert!(
        fs::read_to_string(destination.join(format!("{base}_003.jpg")))
            .unwrap()
            .ends_with("third")
    );
    assert!(destination.join("Other_Z_2022-05-06T07-08-09_001.jpg").exists());
}

/// 測試 2: 缺少的欄位以預設名稱取代，名稱中的非法字元被清理
#[test]
fn test_placeholders_and_sanitized_names() {
    let (_temp, source, destination) = setup();
    fs::write(source.join("a.jpg"), "|EOS 5D.Mk II|2021:01:02 03:04:05").unwrap();
    fs::write(source.join("b.jpg"), "NIKON CORPORATION|||").unwrap();

    RunOrchestrator::with_extractor(
        RunOptions::new(&source, &destination),
        LineExtractor,
        Arc::new(AtomicBool::new(false)),
    )
    .run()
    .unwrap();

    let names = sorted_names(&destination);
    assert!(names.contains(&"brand_EOS-5D-Mk-II_2021-01-02T03-04-05_001.jpg".to_string()));
    assert!(
        names
            .iter()
            .any(|n| n.starts_with("NIKON-CORPORATION_camera_") && n.ends_with("_001.jpg"))
    );
}

/// 測試 3: 相同內容只有第一個是正本，其餘都指向正本的輸出檔名
#[test]
fn test_first_seen_fingerprint_is_canonical() {
    let mut detector = DuplicateDetector::new();
    let mut names = NameRegistry::new();

    let first = detector.classify(b"same bytes", || names.resolve("shot"));
    let other = detector.classify(b"other bytes", || names.resolve("shot"));
    let second = detector.classify(b"same bytes", || names.resolve("shot"));

    assert_eq!(first, Classification::Fresh("shot_001.jpg".to_string()));
    assert_eq!(other, Classification::Fresh("shot_002.jpg".to_string()));
    assert_eq!(second, Classification::Duplicate("shot_001.jpg".to_string()));
    assert_eq!(second.report_name(), "DUP of shot_001.jpg");
}

/// 測試 4: 清理結果再次清理不變
#[test]
fn test_sanitize_idempotent_over_printable_ascii() {
    let printable: String = (0x20u8..0x7f).map(char::from).collect();
    let mut samples: Vec<String> = printable.chars().map(|c| format!("a{c}{c}b")).collect();
    samples.push(printable.clone());
    samples.push(printable.chars().rev().collect());

    for sample in samples {
        let once = sanitize(&sample);
        assert_eq!(sanitize(&once), once, "not idempotent for {sample:?}");
    }
}

/// 測試 5: 掃描只回傳 JPEG，且不重複
#[test]
fn test_scan_yields_each_jpeg_once() {
    let (_temp, source, _destination) = setup();
    fs::create_dir_all(source.join("sub")).unwrap();
    for name in ["a.jpg", "b.JPEG", "c.png", "sub/d.JpG", "sub/e.txt"] {
        fs::write(source.join(name), name).unwrap();
    }

    let paths: Vec<PathBuf> = scan_image_files(&source, None)
        .map(|file| file.path().to_path_buf())
        .collect();
    let unique: HashSet<&PathBuf> = paths.iter().collect();

    assert_eq!(paths.len(), 3);
    assert_eq!(unique.len(), 3);
}
