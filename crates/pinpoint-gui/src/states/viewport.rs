/// Viewport display state.
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Size of the annotated image in pixels.
    pub image_size: Option<[usize; 2]>,
    pub zoom: f32,
    pub pan_offset: egui::Vec2,
    /// Fit the next frame to the window (set when a new image arrives).
    pub fit_pending: bool,
    /// Image pixel under the pointer, for the status line.
    pub hover_pixel: Option<[i32; 2]>,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            texture: None,
            image_size: None,
            zoom: 1.0,
            pan_offset: egui::Vec2::ZERO,
            fit_pending: false,
            hover_pixel: None,
        }
    }
}
