pub mod menu_bar;
pub mod prompt;
pub mod status;
pub mod viewport;

/// Key bindings shown in the Controls window.
pub(crate) const KEY_HELP: &[(&str, &str)] = &[
    ("Left click", "Set origin, then add points"),
    ("S", "Set scale factor"),
    ("P", "Set unit per pixel"),
    ("H", "Toggle coordinate labels"),
    ("C", "Clear points"),
    ("R", "Reset origin and points"),
    ("Esc", "Quit and print results"),
    ("Scroll", "Zoom"),
    ("Middle drag", "Pan"),
];
