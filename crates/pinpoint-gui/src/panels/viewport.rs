use pinpoint_core::geometry::PixelPos;

use crate::app::PinpointApp;

const MIN_ZOOM: f32 = 0.1;
const MAX_ZOOM: f32 = 20.0;

pub fn show(ctx: &egui::Context, app: &mut PinpointApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let texture_info = app
            .viewport
            .texture
            .as_ref()
            .map(|t| (t.id(), [t.size()[0] as f32, t.size()[1] as f32]));

        if let Some((texture_id, tex_size)) = texture_info {
            let image_size = resolve_image_size(app, tex_size);
            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

            if app.viewport.fit_pending {
                fit_to_rect(
                    &mut app.viewport.zoom,
                    &mut app.viewport.pan_offset,
                    image_size,
                    rect,
                );
                app.viewport.fit_pending = false;
            }

            handle_zoom(ui, &response, app, rect);
            handle_pan(ui, &response, app);

            let img_rect = compute_img_rect(rect, image_size, app);
            draw_image(ui, texture_id, img_rect);

            app.viewport.hover_pixel = response
                .hover_pos()
                .map(|pos| screen_to_image(pos, img_rect, image_size))
                .map(|p| [p.x, p.y]);

            if response.clicked_by(egui::PointerButton::Primary) && !ui.input(|i| i.modifiers.command) {
                if let Some(pos) = response.interact_pointer_pos() {
                    app.handle_click(ctx, screen_to_image(pos, img_rect, image_size));
                }
            }
        } else {
            show_placeholder(ui);
        }
    });
}

/// Map a screen position to the image pixel under it. Positions outside the
/// image map to out-of-range pixels, which the annotator ignores.
pub fn screen_to_image(pos: egui::Pos2, img_rect: egui::Rect, image_size: egui::Vec2) -> PixelPos {
    let x = (pos.x - img_rect.left()) / img_rect.width() * image_size.x;
    let y = (pos.y - img_rect.top()) / img_rect.height() * image_size.y;
    PixelPos::new(x.floor() as i32, y.floor() as i32)
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn resolve_image_size(app: &PinpointApp, tex_size: [f32; 2]) -> egui::Vec2 {
    if let Some(size) = app.viewport.image_size {
        egui::vec2(size[0] as f32, size[1] as f32)
    } else {
        egui::vec2(tex_size[0], tex_size[1])
    }
}

fn handle_zoom(ui: &egui::Ui, response: &egui::Response, app: &mut PinpointApp, rect: egui::Rect) {
    let scroll_delta = ui.input(|i| i.smooth_scroll_delta.y);
    if scroll_delta == 0.0 || !response.hovered() {
        return;
    }

    let zoom_factor = (scroll_delta * 0.005).exp();
    let new_zoom = (app.viewport.zoom * zoom_factor).clamp(MIN_ZOOM, MAX_ZOOM);

    // Zoom toward mouse cursor
    if let Some(mouse_pos) = ui.input(|i| i.pointer.hover_pos()) {
        let center = rect.center().to_vec2() + app.viewport.pan_offset;
        let mouse_rel = mouse_pos.to_vec2() - center;
        let scale_change = new_zoom / app.viewport.zoom;
        app.viewport.pan_offset += mouse_rel * (1.0 - scale_change);
    }

    app.viewport.zoom = new_zoom;
}

fn handle_pan(ui: &egui::Ui, response: &egui::Response, app: &mut PinpointApp) {
    if response.dragged_by(egui::PointerButton::Middle)
        || (response.dragged_by(egui::PointerButton::Primary) && ui.input(|i| i.modifiers.command))
    {
        app.viewport.pan_offset += response.drag_delta();
    }
}

fn compute_img_rect(rect: egui::Rect, image_size: egui::Vec2, app: &PinpointApp) -> egui::Rect {
    let scaled = image_size * app.viewport.zoom;
    let center = rect.center() + app.viewport.pan_offset;
    egui::Rect::from_center_size(center, scaled)
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open an image to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}

fn fit_to_rect(zoom: &mut f32, pan: &mut egui::Vec2, image_size: egui::Vec2, rect: egui::Rect) {
    let available = rect.size();
    let fit_x = available.x / image_size.x;
    let fit_y = available.y / image_size.y;
    *zoom = fit_x.min(fit_y).clamp(MIN_ZOOM, MAX_ZOOM);
    *pan = egui::Vec2::ZERO;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_image_at_double_zoom() {
        let img_rect = egui::Rect::from_min_size(egui::pos2(100.0, 50.0), egui::vec2(200.0, 100.0));
        let size = egui::vec2(100.0, 50.0);

        assert_eq!(screen_to_image(egui::pos2(100.0, 50.0), img_rect, size), PixelPos::new(0, 0));
        assert_eq!(screen_to_image(egui::pos2(103.9, 51.9), img_rect, size), PixelPos::new(1, 0));
        assert_eq!(screen_to_image(egui::pos2(299.0, 149.0), img_rect, size), PixelPos::new(99, 49));
    }

    #[test]
    fn test_screen_to_image_outside_is_out_of_range() {
        let img_rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(10.0, 10.0));
        let size = egui::vec2(10.0, 10.0);
        assert_eq!(screen_to_image(egui::pos2(-0.5, 3.0), img_rect, size), PixelPos::new(-1, 3));
        assert_eq!(screen_to_image(egui::pos2(10.0, 3.0), img_rect, size), PixelPos::new(10, 3));
    }
}
