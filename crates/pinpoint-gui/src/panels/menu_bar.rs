use pinpoint_core::annotator::{Command, KeyAction};
use pinpoint_core::session::SettingKind;

use crate::app::PinpointApp;
use crate::messages::WorkerCommand;

pub fn show(ctx: &egui::Context, app: &mut PinpointApp) {
    let has_image = app.annotator.is_some();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_file(app);
                }

                let save_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
                if ui
                    .add_enabled(has_image, egui::Button::new("Save As...").shortcut_text(ctx.format_shortcut(&save_shortcut)))
                    .clicked()
                {
                    ui.close();
                    save_file(app);
                }

                if ui.add_enabled(has_image, egui::Button::new("Export Results...")).clicked() {
                    ui.close();
                    export_results(app);
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    app.quit(ctx);
                }
            });

            ui.menu_button("Edit", |ui| {
                let items = [
                    ("Set Scale Factor...", "S", KeyAction::Prompt(SettingKind::ScaleFactor)),
                    ("Set Unit per Pixel...", "P", KeyAction::Prompt(SettingKind::UnitPerPixel)),
                    ("Toggle Labels", "H", KeyAction::Command(Command::ToggleLabels)),
                    ("Clear Points", "C", KeyAction::Command(Command::ClearPoints)),
                    ("Reset All", "R", KeyAction::Command(Command::ResetAll)),
                ];
                for (label, key, action) in items {
                    if ui
                        .add_enabled(has_image, egui::Button::new(label).shortcut_text(key))
                        .clicked()
                    {
                        ui.close();
                        app.dispatch(ctx, action);
                    }
                }
            });

            ui.menu_button("View", |ui| {
                if ui.add_enabled(has_image, egui::Button::new("Fit to Window")).clicked() {
                    ui.close();
                    app.viewport.fit_pending = true;
                }
                if ui.add_enabled(has_image, egui::Button::new("Actual Size")).clicked() {
                    ui.close();
                    app.viewport.zoom = 1.0;
                    app.viewport.pan_offset = egui::Vec2::ZERO;
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("Controls").clicked() {
                    ui.close();
                    app.ui_state.show_help = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            open_file(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S))) {
            save_file(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            app.quit(ctx);
        }
    });
}

fn open_file(app: &mut PinpointApp) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "bmp", "tif", "tiff", "webp"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = cmd_tx.send(WorkerCommand::LoadImage { path });
        }
    });
}

fn save_file(app: &mut PinpointApp) {
    let Some(frame) = app.annotator.as_ref().map(|a| a.frame().clone()) else {
        app.ui_state.add_log("No image to save".into());
        return;
    };
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .add_filter("JPEG", &["jpg", "jpeg"])
            .set_file_name("annotated.png")
            .save_file()
        {
            let _ = cmd_tx.send(WorkerCommand::SaveFrame { path, frame });
        }
    });
}

fn export_results(app: &mut PinpointApp) {
    let Some(report) = app.annotator.as_ref().and_then(|a| a.export_results()) else {
        app.ui_state.add_log("No origin set, nothing to export".into());
        return;
    };
    let report = format!("{report}\n");
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Text", &["txt"])
            .set_file_name("points.txt")
            .save_file()
        {
            let _ = cmd_tx.send(WorkerCommand::SaveReport { path, report });
        }
    });
}

fn import_config(app: &mut PinpointApp) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        {
            let _ = cmd_tx.send(WorkerCommand::LoadConfig { path });
        }
    });
}

fn export_config(app: &mut PinpointApp) {
    let config = app.current_config();
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("pinpoint.toml")
            .save_file()
        {
            let _ = cmd_tx.send(WorkerCommand::SaveConfig { path, config });
        }
    });
}
