pub mod annotate;
pub mod config;
pub mod info;
pub mod session;

use std::path::Path;

use anyhow::{Context, Result};
use pinpoint_core::config::PinpointConfig;
use pinpoint_core::geometry::PixelPos;
use tracing::debug;

/// Read a TOML config, or fall back to the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<PinpointConfig> {
    let Some(path) = path else {
        return Ok(PinpointConfig::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: PinpointConfig = toml::from_str(&contents).context("Invalid pinpoint config")?;
    config.validate()?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Parse an `X,Y` pixel position.
pub fn parse_pixel_pos(s: &str) -> std::result::Result<PixelPos, String> {
    let parts: Vec<i32> = s
        .split(',')
        .map(|p| p.trim().parse::<i32>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| format!("invalid pixel position '{s}' (expected X,Y)"))?;
    match parts[..] {
        [x, y] => Ok(PixelPos::new(x, y)),
        _ => Err(format!("pixel position needs exactly 2 values, got '{s}'")),
    }
}
