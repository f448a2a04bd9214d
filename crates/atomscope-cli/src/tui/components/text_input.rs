use crossterm::event::{KeyCode, KeyEvent};

/// Result of feeding a key to a [`TextInput`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Edited,
    Submitted(String),
    Cancelled,
    Ignored,
}

/// Single-line text input with a focus flag
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: String,
    focused: bool,
}

impl TextInput {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.focused = false;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> InputEvent {
        if !self.focused {
            return InputEvent::Ignored;
        }
        match key.code {
            KeyCode::Enter => {
                self.focused = false;
                InputEvent::Submitted(self.value.trim().to_string())
            }
            KeyCode::Esc => {
                self.focused = false;
                InputEvent::Cancelled
            }
            KeyCode::Backspace => {
                self.value.pop();
                InputEvent::Edited
            }
            KeyCode::Char(c) => {
                self.value.push(c);
                InputEvent::Edited
            }
            _ => InputEvent::Ignored,
        }
    }
}
