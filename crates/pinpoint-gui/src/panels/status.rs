use crate::app::PinpointApp;

pub fn show(ctx: &egui::Context, app: &mut PinpointApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area: fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            if let Some(ref size) = app.viewport.image_size {
                ui.label(format!("{}x{}", size[0], size[1]));
                ui.separator();
            }
            ui.label(format!("Zoom: {:.0}%", app.viewport.zoom * 100.0));

            if let Some(annotator) = app.annotator.as_ref() {
                let session = annotator.session();
                let settings = session.settings();

                ui.separator();
                match session.origin() {
                    Some(origin) => ui.label(format!("Origin: {origin}")),
                    None => ui.label("Origin: click to set"),
                };
                ui.separator();
                ui.label(format!("Points: {}", session.points().len()));
                ui.separator();
                ui.label(format!(
                    "Scale: {:.3}  Unit/px: {:.3}",
                    settings.scale_factor, settings.unit_per_pixel
                ));
                ui.separator();
                ui.label(if settings.labels_visible { "Labels: on" } else { "Labels: off" });
            }

            if let Some([x, y]) = app.viewport.hover_pixel {
                ui.separator();
                ui.label(format!("Cursor: ({x}, {y})"));
            }
        });

        ui.add_space(2.0);
    });
}
