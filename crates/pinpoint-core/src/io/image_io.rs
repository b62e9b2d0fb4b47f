use std::path::Path;

use image::{ImageFormat, RgbImage};
use tracing::debug;

use crate::error::{PinpointError, Result};

/// Load any image the `image` crate can decode as 8-bit RGB.
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let img = image::open(path)?.to_rgb8();
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return Err(PinpointError::InvalidDimensions {
            width: w,
            height: h,
        });
    }
    debug!(path = %path.display(), width = w, height = h, "loaded image");
    Ok(img)
}

/// Basic facts about an image file, as decoded.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub color: String,
}

pub fn image_info(path: &Path) -> Result<ImageInfo> {
    let img = image::open(path)?;
    Ok(ImageInfo {
        width: img.width(),
        height: img.height(),
        color: format!("{:?}", img.color()),
    })
}

/// Save a frame as 8-bit RGB PNG.
pub fn save_png(frame: &RgbImage, path: &Path) -> Result<()> {
    frame.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save a frame, choosing the format from the file extension. Unknown or
/// missing extensions fall back to PNG.
pub fn save_image(frame: &RgbImage, path: &Path) -> Result<()> {
    match ImageFormat::from_path(path) {
        Ok(ImageFormat::Png) | Err(_) => save_png(frame, path),
        Ok(format) => {
            frame.save_with_format(path, format)?;
            Ok(())
        }
    }
}
