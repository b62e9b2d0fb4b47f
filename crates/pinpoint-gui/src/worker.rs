use std::io;
use std::path::Path;
use std::sync::mpsc;

use anyhow::{Context, Result};
use pinpoint_core::config::PinpointConfig;
use pinpoint_core::io::image_io::{load_image, save_image};
use tracing::debug;

use crate::messages::{WorkerCommand, WorkerResult};

/// Start the file worker. Only decoding and disk writes happen here; the
/// annotator itself stays on the UI thread.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> io::Result<mpsc::Sender<WorkerCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("pinpoint-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })?;

    Ok(cmd_tx)
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Error { message: msg.into() });
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadImage { path } => match load_image(&path) {
                Ok(image) => send(&tx, &ctx, WorkerResult::ImageLoaded { path, image }),
                Err(e) => send_error(&tx, &ctx, format!("Failed to load image: {e}")),
            },
            WorkerCommand::LoadConfig { path } => match read_config(&path) {
                Ok(config) => send(&tx, &ctx, WorkerResult::ConfigLoaded { path, config }),
                Err(e) => send_error(&tx, &ctx, format!("{e:#}")),
            },
            WorkerCommand::SaveFrame { path, frame } => match save_image(&frame, &path) {
                Ok(()) => send(&tx, &ctx, WorkerResult::Saved { path }),
                Err(e) => send_error(&tx, &ctx, format!("Failed to save: {e}")),
            },
            WorkerCommand::SaveConfig { path, config } => match write_config(&path, &config) {
                Ok(()) => send(&tx, &ctx, WorkerResult::Saved { path }),
                Err(e) => send_error(&tx, &ctx, format!("{e:#}")),
            },
            WorkerCommand::SaveReport { path, report } => match std::fs::write(&path, report) {
                Ok(()) => send(&tx, &ctx, WorkerResult::Saved { path }),
                Err(e) => send_error(&tx, &ctx, format!("Failed to write report: {e}")),
            },
        }
    }
    debug!("worker channel closed");
}

fn read_config(path: &Path) -> Result<PinpointConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: PinpointConfig = toml::from_str(&contents).context("Invalid pinpoint config")?;
    config.validate()?;
    Ok(config)
}

fn write_config(path: &Path, config: &PinpointConfig) -> Result<()> {
    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = PinpointConfig::default();
        config.display.scale_factor = 4.0;
        write_config(&path, &config).unwrap();
        assert_eq!(read_config(&path).unwrap(), config);

        std::fs::write(&path, "[display]\nscale_factor = 0.0\n").unwrap();
        assert!(read_config(&path).is_err());
    }
}
