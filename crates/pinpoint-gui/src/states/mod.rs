mod prompt;
mod ui;
mod viewport;

pub use prompt::PromptState;
pub use ui::UIState;
pub use viewport::ViewportState;
