use kidskb_core::history::History;
use kidskb_core::settings::settings;

/// Per-keyboard editing state. Passed into and returned from every key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// What the child has typed so far.
    pub text_input: String,
    /// Current ghost completion; empty when there is none.
    pub suggestion: String,
    /// Shift state; decides the case of letter keys and rendered words.
    pub is_upper_case: bool,
    pub history: History,
}

impl SessionState {
    pub fn new(history: History) -> Self {
        Self {
            text_input: String::new(),
            suggestion: String::new(),
            is_upper_case: settings().keyboard.start_upper_case,
            history,
        }
    }

    pub fn with_upper_case(mut self, upper: bool) -> Self {
        self.is_upper_case = upper;
        self
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(History::new())
    }
}
