use ratatui::crossterm::event::KeyEvent;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, Input, Key, TextArea};

/// Creates a TextArea configured for single-line label input.
fn create_textarea(text: &str) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![text.to_string()]);
    // Remove default underline from cursor line
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea.move_cursor(CursorMove::End);
    textarea
}

/// Keys tui-textarea turns into a line break
fn inserts_newline(input: &Input) -> bool {
    match input.key {
        Key::Enter => true,
        Key::Char('\n' | '\r') => true,
        Key::Char('m') => input.ctrl && !input.alt,
        _ => false,
    }
}

/// Editing state of the visible input
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            textarea: create_textarea(""),
        }
    }

    /// Current text of the input
    pub fn text(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    /// Feed a key to the editor; returns whether the text changed
    pub fn input(&mut self, key: KeyEvent) -> bool {
        let input = Input::from(key);
        // The field is single-line; never let the editor split it
        if inserts_newline(&input) {
            return false;
        }
        let before = self.text().to_string();
        self.textarea.input(input);
        self.text() != before
    }

    pub fn sync_text(&mut self, text: &str) {
        if self.text() != text {
            self.textarea = create_textarea(text);
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
