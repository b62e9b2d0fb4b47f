use std::path::PathBuf;

/// Maximum number of lines kept in the log panel.
const MAX_LOG_LINES: usize = 500;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub file_path: Option<PathBuf>,

    /// Log messages.
    pub log_messages: Vec<String>,

    pub show_help: bool,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
        if self.log_messages.len() > MAX_LOG_LINES {
            let excess = self.log_messages.len() - MAX_LOG_LINES;
            self.log_messages.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_is_bounded() {
        let mut ui = UIState::default();
        for i in 0..MAX_LOG_LINES + 3 {
            ui.add_log(i.to_string());
        }
        assert_eq!(ui.log_messages.len(), MAX_LOG_LINES);
        assert_eq!(ui.log_messages[0], "3");
    }
}
