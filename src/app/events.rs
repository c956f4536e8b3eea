use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::io;

use super::mouse_click;
use super::state::{App, Focus};
use crate::autocomplete::{FieldEvent, Key};
use crate::layout::region_at;
use crate::node::{EventKind, NodeHost};

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
        Ok(())
    }

    /// Handle key press events
    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::Field => self.handle_field_key(key),
            Focus::DetailsPane => self.handle_details_key(key),
        }
    }

    /// Handle keys that work regardless of focus
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        // Tab / Shift+Tab: move focus between the field and the details pane
        if key.code == KeyCode::Tab || key.code == KeyCode::BackTab {
            match self.focus {
                Focus::Field => self.set_focus(Focus::DetailsPane),
                Focus::DetailsPane => self.set_focus(Focus::Field),
            }
            return true;
        }

        false
    }

    /// Handle keys while the field has focus
    fn handle_field_key(&mut self, key: KeyEvent) {
        let field_key = match key.code {
            KeyCode::Enter => Some(Key::Enter),
            KeyCode::Up => Some(Key::ArrowUp),
            KeyCode::Down => Some(Key::ArrowDown),
            KeyCode::Esc => Some(Key::Escape),
            _ => None,
        };

        match field_key {
            // Esc with nothing to close leaves the application
            Some(Key::Escape) if !self.field.list_is_active() => self.should_quit = true,
            Some(field_key) => self.deliver(EventKind::KeyUp, FieldEvent::KeyUp(field_key)),
            None => {
                if self.input.input(key) {
                    self.write_input_text();
                    self.deliver(EventKind::Input, FieldEvent::Input);
                }
                self.deliver(EventKind::KeyUp, FieldEvent::KeyUp(Key::Other));
            }
        }
    }

    fn handle_details_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
            self.should_quit = true;
        }
    }

    /// Copy the editor text into the visible input node
    fn write_input_text(&mut self) {
        if let Some(input) = self.input_node() {
            let text = self.input.text().to_string();
            self.tree.set_value(input, &text);
        }
    }

    /// Move focus, delivering focus/blur to the field
    pub(super) fn set_focus(&mut self, focus: Focus) {
        if self.focus == focus {
            return;
        }
        self.focus = focus;
        match focus {
            Focus::Field => self.deliver(EventKind::Focus, FieldEvent::Focus),
            Focus::DetailsPane => self.deliver(EventKind::Blur, FieldEvent::Blur),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let region = region_at(&self.layout_regions, mouse.column, mouse.row);
            mouse_click::handle_click(self, region);
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
