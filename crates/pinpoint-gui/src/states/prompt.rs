use pinpoint_core::session::SettingKind;

/// Modal numeric prompt. While open, clicks and key commands are not
/// dispatched to the annotator.
pub struct PromptState {
    pub kind: SettingKind,
    pub input: String,
    /// Rejection message from the last submit, shown under the field.
    pub error: Option<String>,
    pub focus_requested: bool,
}

impl PromptState {
    /// Open a prompt pre-filled with the current value.
    pub fn new(kind: SettingKind, current: f64) -> Self {
        Self {
            kind,
            input: current.to_string(),
            error: None,
            focus_requested: false,
        }
    }

    pub fn title(&self) -> String {
        format!("Set {}", self.kind.to_string().to_lowercase())
    }
}
