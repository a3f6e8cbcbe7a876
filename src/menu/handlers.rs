use crate::component::CameraCopy;
use crate::config::Config;
use crate::pause;
use anyhow::Result;
use console::{Term, style};
use log::error;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

pub fn run_camera_copy(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &mut Config,
) -> Result<()> {
    let camera_copy = CameraCopy::new(Arc::clone(shutdown_signal));

    if let Err(e) = camera_copy.run(config) {
        error!("相機照片整理失敗: {e:#}");
        eprintln!("{} {:#}", style("錯誤:").red().bold(), e);
    }

    pause(term)?;
    Ok(())
}
