use crate::app::PinpointApp;

/// Modal window for numeric settings. Enter submits, Esc cancels.
pub fn show(ctx: &egui::Context, app: &mut PinpointApp) {
    let Some(prompt) = app.prompt.as_mut() else {
        return;
    };

    let mut submit = false;
    let mut cancel = false;

    egui::Window::new(prompt.title())
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(format!("Enter {}:", prompt.kind.to_string().to_lowercase()));
            let response = ui.text_edit_singleline(&mut prompt.input);
            if !prompt.focus_requested {
                response.request_focus();
                prompt.focus_requested = true;
            }
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit = true;
            }

            if let Some(ref error) = prompt.error {
                ui.colored_label(egui::Color32::from_rgb(230, 80, 80), error);
            }

            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    submit = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        cancel = true;
    }

    if cancel {
        app.prompt = None;
    } else if submit {
        app.submit_prompt(ctx);
    }
}
