use std::path::PathBuf;

use image::RgbImage;
use pinpoint_core::config::PinpointConfig;

/// File work sent from the UI thread to the worker thread.
pub enum WorkerCommand {
    /// Decode an image to annotate.
    LoadImage { path: PathBuf },

    /// Read and validate a TOML config.
    LoadConfig { path: PathBuf },

    /// Write the current display frame.
    SaveFrame { path: PathBuf, frame: RgbImage },

    /// Write the current settings and style as TOML.
    SaveConfig { path: PathBuf, config: PinpointConfig },

    /// Write the plain-text result report.
    SaveReport { path: PathBuf, report: String },
}

/// Results sent from the worker thread back to the UI thread.
pub enum WorkerResult {
    ImageLoaded { path: PathBuf, image: RgbImage },
    ConfigLoaded { path: PathBuf, config: PinpointConfig },
    Saved { path: PathBuf },
    Error { message: String },
}
