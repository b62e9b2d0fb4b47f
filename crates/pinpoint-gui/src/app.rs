use std::io;
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::sync::mpsc;

use pinpoint_core::annotator::{key_action, Annotator, ClickOutcome, Command, KeyAction};
use pinpoint_core::config::PinpointConfig;
use pinpoint_core::geometry::PixelPos;
use pinpoint_core::session::SettingKind;
use tracing::info;

use crate::convert::rgb_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{PromptState, UIState, ViewportState};
use crate::worker;

/// Plain keys routed to the annotator, as the characters `key_action` expects.
const COMMAND_KEYS: [(egui::Key, char); 6] = [
    (egui::Key::S, 's'),
    (egui::Key::P, 'p'),
    (egui::Key::H, 'h'),
    (egui::Key::C, 'c'),
    (egui::Key::R, 'r'),
    (egui::Key::Escape, '\u{1b}'),
];

pub struct PinpointApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub annotator: Option<Annotator>,
    /// Style and startup settings applied to every image opened.
    pub config: PinpointConfig,
    pub prompt: Option<PromptState>,
    pub ui_state: UIState,
    pub viewport: ViewportState,
}

impl PinpointApp {
    pub fn new(ctx: &egui::Context, initial: Option<PathBuf>) -> io::Result<Self> {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx, ctx.clone())?;

        let app = Self {
            cmd_tx,
            result_rx,
            annotator: None,
            config: PinpointConfig::default(),
            prompt: None,
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
        };
        if let Some(path) = initial {
            app.send_command(WorkerCommand::LoadImage { path });
        }
        Ok(app)
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageLoaded { path, image } => self.on_image_loaded(ctx, path, image),
                WorkerResult::ConfigLoaded { path, config } => {
                    if let Some(annotator) = self.annotator.as_mut() {
                        if let Err(e) = annotator.apply_config(&config) {
                            self.ui_state.add_log(format!("ERROR: {e}"));
                            continue;
                        }
                    }
                    self.config = config;
                    self.prompt = None;
                    self.ui_state.add_log(format!("Config imported from {}", path.display()));
                    self.refresh_texture(ctx);
                }
                WorkerResult::Saved { path } => {
                    self.ui_state.add_log(format!("Saved: {}", path.display()));
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
            }
        }
    }

    fn on_image_loaded(&mut self, ctx: &egui::Context, path: PathBuf, image: image::RgbImage) {
        let (w, h) = image.dimensions();
        let result = if let Some(annotator) = self.annotator.as_mut() {
            annotator.replace_image(image)
        } else {
            Annotator::new(image, &self.config).map(|a| {
                self.annotator = Some(a);
            })
        };
        if let Err(e) = result {
            self.ui_state.add_log(format!("ERROR: {e}"));
            return;
        }

        self.ui_state
            .add_log(format!("Opened: {} ({w}x{h})", path.display()));
        self.ui_state.add_log("Click to set the origin".into());
        self.ui_state.file_path = Some(path);
        self.prompt = None;
        self.viewport.fit_pending = true;
        self.refresh_texture(ctx);
    }

    /// Upload the annotator's latest frame to the viewport texture.
    pub fn refresh_texture(&mut self, ctx: &egui::Context) {
        let Some(annotator) = self.annotator.as_ref() else {
            return;
        };
        let image = rgb_to_color_image(annotator.frame());
        let size = image.size;
        let texture = ctx.load_texture("viewport", image, egui::TextureOptions::NEAREST);
        self.viewport.texture = Some(texture);
        self.viewport.image_size = Some(size);
    }

    pub fn handle_click(&mut self, ctx: &egui::Context, pos: PixelPos) {
        if self.prompt.is_some() {
            return;
        }
        let Some(annotator) = self.annotator.as_mut() else {
            return;
        };

        let message = match annotator.on_primary_click(pos) {
            ClickOutcome::OriginSet(origin) => format!("Origin set at {origin}"),
            ClickOutcome::PointAdded(point) => match annotator.session().physical(&point) {
                Some(coord) => format!(
                    "Point {}: pixel {}, relative {}",
                    point.sequence_index, point.pixel, coord
                ),
                None => format!("Point {} added", point.sequence_index),
            },
            ClickOutcome::Ignored => format!("Click at {pos} is outside the image"),
        };
        self.ui_state.add_log(message);
        self.refresh_texture(ctx);
    }

    /// Route plain key presses to the annotator. Skipped while a text field
    /// has focus or the prompt is open.
    fn handle_keys(&mut self, ctx: &egui::Context) {
        if self.prompt.is_some() || ctx.wants_keyboard_input() {
            return;
        }
        let pressed: Vec<char> = ctx.input(|i| {
            if i.modifiers.any() {
                return Vec::new();
            }
            COMMAND_KEYS
                .iter()
                .filter(|(key, _)| i.key_pressed(*key))
                .map(|(_, c)| *c)
                .collect()
        });

        for key in pressed {
            if let Some(action) = key_action(key) {
                self.dispatch(ctx, action);
            }
        }
    }

    pub fn dispatch(&mut self, ctx: &egui::Context, action: KeyAction) {
        match action {
            KeyAction::Prompt(kind) => self.open_prompt(kind),
            KeyAction::Command(Command::Quit) => self.quit(ctx),
            KeyAction::Command(command) => {
                let Some(annotator) = self.annotator.as_mut() else {
                    return;
                };
                if let ControlFlow::Continue(()) = annotator.on_command(command) {
                    let message = match command {
                        Command::ToggleLabels if annotator.session().settings().labels_visible => {
                            "Coordinate labels on"
                        }
                        Command::ToggleLabels => "Coordinate labels off",
                        Command::ClearPoints => "Cleared all points",
                        Command::ResetAll => "Reset origin and points",
                        Command::Quit => return,
                    };
                    self.ui_state.add_log(message.into());
                    self.refresh_texture(ctx);
                }
            }
        }
    }

    fn open_prompt(&mut self, kind: SettingKind) {
        let Some(annotator) = self.annotator.as_ref() else {
            return;
        };
        self.prompt = Some(PromptState::new(kind, annotator.session().settings().get(kind)));
    }

    /// Apply the prompt's text. Rejected input keeps the prompt open with the
    /// error shown; session state is untouched.
    pub fn submit_prompt(&mut self, ctx: &egui::Context) {
        let (Some(prompt), Some(annotator)) = (self.prompt.as_mut(), self.annotator.as_mut()) else {
            self.prompt = None;
            return;
        };

        match annotator.on_numeric_setting(prompt.kind, &prompt.input) {
            Ok(value) => {
                self.ui_state
                    .add_log(format!("{} set to {value:.3}", prompt.kind));
                self.prompt = None;
                self.refresh_texture(ctx);
            }
            Err(e) => {
                self.ui_state.add_log(format!("ERROR: {e}"));
                prompt.error = Some(e.to_string());
            }
        }
    }

    /// The current session settings folded into the loaded config.
    pub fn current_config(&self) -> PinpointConfig {
        let mut config = self.config.clone();
        if let Some(annotator) = self.annotator.as_ref() {
            config.display = annotator.session().settings().clone();
        }
        config
    }

    /// Log the final results and close the window.
    pub fn quit(&mut self, ctx: &egui::Context) {
        match self.annotator.as_ref().and_then(Annotator::export_results) {
            Some(report) => {
                for line in report.to_string().lines() {
                    info!("{line}");
                }
                println!("{report}");
            }
            None => info!("No origin set, nothing to export"),
        }
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}

impl eframe::App for PinpointApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);
        self.handle_keys(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);
        panels::prompt::show(ctx, self);

        if self.ui_state.show_help {
            egui::Window::new("Controls")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    egui::Grid::new("controls_grid").striped(true).show(ui, |ui| {
                        for (key, what) in panels::KEY_HELP {
                            ui.strong(*key);
                            ui.label(*what);
                            ui.end_row();
                        }
                    });
                    ui.add_space(8.0);
                    ui.vertical_centered(|ui| {
                        ui.label(format!("Pinpoint {}", env!("CARGO_PKG_VERSION")));
                        if ui.button("Close").clicked() {
                            self.ui_state.show_help = false;
                        }
                    });
                });
        }
    }
}
