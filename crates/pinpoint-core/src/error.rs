use thiserror::Error;

use crate::session::SettingKind;

/// Rejected value for a numeric display setting. State is left unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("{kind} must be a valid number, got '{input}'")]
    NotANumber { kind: SettingKind, input: String },

    #[error("{kind} must be greater than 0, got {value}")]
    NotPositive { kind: SettingKind, value: f64 },
}

#[derive(Error, Debug)]
pub enum PinpointError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PinpointError>;
