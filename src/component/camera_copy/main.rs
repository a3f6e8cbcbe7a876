use super::orchestrator::{RunOptions, RunOrchestrator, RunSummary};
use crate::config::Config;
use crate::config::save::save_settings;
use crate::tools::validate_directory_exists;
use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

/// 相機照片整理元件
pub struct CameraCopy {
    shutdown_signal: Arc<AtomicBool>,
}

impl CameraCopy {
    pub const fn new(shutdown_signal: Arc<AtomicBool>) -> Self {
        Self { shutdown_signal }
    }

    pub fn run(&self, config: &mut Config) -> Result<()> {
        println!("{}", style("=== 相機照片整理 ===").cyan().bold());

        let settings = &config.settings.camera_copy;
        let source = self.prompt_path("來源資料夾", settings.last_source.as_deref())?;
        validate_directory_exists(&source)?;
        let destination =
            self.prompt_path("輸出資料夾", settings.last_destination.as_deref())?;

        let mut options =
            RunOptions::from_settings(&source, &destination, &config.settings.camera_copy);
        options.skip_duplicates = self.prompt_flag(
            "是否檢查並略過重複的圖片？",
            options.skip_duplicates,
        )?;
        options.dry_run = self.prompt_flag(
            "試跑（只輸出動作清單，不動任何檔案）？",
            options.dry_run,
        )?;
        options.destructive = self.prompt_flag(
            "移動而非複製圖片（並刪除重複檔案）？",
            options.destructive,
        )?;

        if options.destructive && !options.dry_run && !self.confirm_destructive()? {
            println!("{}", style("已取消").yellow());
            return Ok(());
        }

        config.settings.camera_copy.last_source = Some(source.to_string_lossy().to_string());
        config.settings.camera_copy.last_destination =
            Some(destination.to_string_lossy().to_string());
        if let Err(e) = save_settings(&config.settings) {
            warn!("無法儲存上次使用的路徑: {e}");
        }

        let dry_run = options.dry_run;
        let summary = RunOrchestrator::new(options, Arc::clone(&self.shutdown_signal))
            .with_progress(self.spinner())
            .run()?;

        self.print_summary(&summary, dry_run, &destination);

        Ok(())
    }

    fn prompt_path(&self, prompt: &str, last_used: Option<&str>) -> Result<PathBuf> {
        let mut input = Input::<String>::new().with_prompt(prompt);
        if let Some(last_used) = last_used {
            input = input.default(last_used.to_string());
        }
        let path = input.interact_text()?;
        Ok(PathBuf::from(path.trim()))
    }

    fn prompt_flag(&self, prompt: &str, default: bool) -> Result<bool> {
        let value = Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(value)
    }

    fn confirm_destructive(&self) -> Result<bool> {
        let confirmed = Confirm::new()
            .with_prompt("來源圖片將被移動，重複檔案將被刪除，確定要繼續？")
            .default(false)
            .interact()?;
        Ok(confirmed)
    }

    fn spinner(&self) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {pos} 個檔案 {msg}")
                .expect("無效的進度條樣式"),
        );
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message("處理中...");
        spinner
    }

    fn print_summary(&self, summary: &RunSummary, dry_run: bool, destination: &Path) {
        println!();
        println!("{}", style("=== 整理任務摘要 ===").cyan().bold());
        println!("  處理檔案: {} 個", summary.files_processed);
        println!(
            "  略過重複: {} 個",
            style(summary.duplicates_skipped).yellow()
        );
        println!(
            "  複製或移動: {} 個",
            style(summary.files_relocated).green()
        );

        if dry_run {
            println!();
            println!(
                "{}",
                style(format!(
                    "試跑: 預計動作已寫入 {}",
                    destination.join(super::LEDGER_FILE_NAME).display()
                ))
                .yellow()
            );
        }

        info!(
            "相機照片整理完成 - 處理: {}，重複: {}，複製或移動: {}",
            summary.files_processed, summary.duplicates_skipped, summary.files_relocated
        );
    }
}
