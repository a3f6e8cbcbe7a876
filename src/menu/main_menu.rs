use crate::config::save::save_settings;
use crate::config::types::Config;
use crate::menu::handlers::run_camera_copy;
use anyhow::Result;
use console::{Term, style};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

pub fn show_main_menu(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &mut Config,
) -> Result<bool> {
    term.clear_screen()?;

    println!("{}", style("=== Auto Photo Organize ===").cyan().bold());
    println!("{}", style("按 ESC 返回").dim());

    let options = vec!["相機照片整理", "設定", "離開"];

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("請選擇功能")
        .items(&options)
        .default(0)
        .interact_on_opt(term)?;

    match selection {
        Some(0) => {
            run_camera_copy(term, shutdown_signal, config)?;
            Ok(true)
        }
        Some(1) => {
            show_settings_menu(term, config)?;
            Ok(true)
        }
        Some(2) => Ok(false),
        None => Ok(false), // ESC pressed - exit
        _ => unreachable!(),
    }
}

fn on_off(value: bool) -> &'static str {
    if value { "開啟" } else { "關閉" }
}

/// 設定選單
fn show_settings_menu(term: &Term, config: &mut Config) -> Result<()> {
    loop {
        term.clear_screen()?;

        println!("{}", style("=== Settings ===").cyan().bold());
        println!("{}", style("按 ESC 返回").dim());

        let current = &config.settings.camera_copy;
        let options = vec![
            format!("略過重複: {}", on_off(current.skip_duplicates)),
            format!("試跑: {}", on_off(current.dry_run)),
            format!("移動模式（移動/刪除）: {}", on_off(current.destructive)),
            format!("無 EXIF 時的檔名前綴: {}", current.fallback_prefix),
            "返回".to_string(),
        ];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("請選擇要修改的設定")
            .items(&options)
            .default(0)
            .interact_on_opt(term)?;

        let camera_copy = &mut config.settings.camera_copy;
        match selection {
            Some(0) => camera_copy.skip_duplicates = !camera_copy.skip_duplicates,
            Some(1) => camera_copy.dry_run = !camera_copy.dry_run,
            Some(2) => camera_copy.destructive = !camera_copy.destructive,
            Some(3) => {
                let prefix: String = Input::new()
                    .with_prompt("無 EXIF 圖片的檔名前綴")
                    .default(camera_copy.fallback_prefix.clone())
                    .interact_text()?;
                camera_copy.fallback_prefix = prefix.trim().to_string();
            }
            Some(4) | None => break, // ESC or back
            _ => unreachable!(),
        }

        save_settings(&config.settings)?;
        println!("\n{}", style("設定已儲存").green());
        std::thread::sleep(std::time::Duration::from_secs(1));
    }

    Ok(())
}
