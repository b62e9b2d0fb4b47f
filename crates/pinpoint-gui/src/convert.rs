use image::RgbImage;

/// Convert an 8-bit RGB frame to an egui ColorImage.
pub fn rgb_to_color_image(frame: &RgbImage) -> egui::ColorImage {
    let size = [frame.width() as usize, frame.height() as usize];
    egui::ColorImage::from_rgb(size, frame.as_raw())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixels_keep_layout() {
        let mut frame = RgbImage::new(3, 2);
        frame.put_pixel(2, 1, image::Rgb([10, 20, 30]));

        let img = rgb_to_color_image(&frame);
        assert_eq!(img.size, [3, 2]);
        assert_eq!(img.pixels[5], egui::Color32::from_rgb(10, 20, 30));
        assert_eq!(img.pixels[0], egui::Color32::from_rgb(0, 0, 0));
    }
}
