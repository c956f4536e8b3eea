use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::state::{App, Focus};
use crate::input::{input_render, list_render};

const HELP_TEXT: &str = " Type to filter • ↑/↓ move • Enter select • Esc close/quit • Tab focus ";

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());
        let (field_area, details_area, footer_area) = (layout[0], layout[1], layout[2]);

        let field_row =
            Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)])
                .split(field_area);

        input_render::render_field(self, frame, field_row[0]);
        input_render::render_shadow(self, frame, field_row[1]);
        self.render_details(frame, details_area);
        self.render_footer(frame, footer_area);

        // Drawn last so it overlays the details pane
        list_render::render_popup(self, frame, field_row[0]);
    }

    fn render_details(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focus == Focus::DetailsPane {
            self.theme.accent_color()
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Details ")
            .border_style(Style::default().fg(border_color));

        let label_style = Style::default().fg(Color::DarkGray);
        let selection = match self.selection() {
            Some((label, value)) => Span::styled(
                format!("{} = {}", label, value),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            None => Span::styled("none", label_style),
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Entries:   ", label_style),
                Span::raw(self.field.data().len().to_string()),
            ]),
            Line::from(vec![Span::styled("Selection: ", label_style), selection]),
            Line::default(),
            Line::from(Span::styled("Activity", label_style)),
        ];

        // Newest first, limited to what fits
        let room = usize::from(area.height.saturating_sub(2)).saturating_sub(lines.len());
        lines.extend(
            self.activity
                .borrow()
                .iter()
                .rev()
                .take(room)
                .map(|entry| Line::from(format!("  {}", entry))),
        );

        frame.render_widget(Paragraph::new(lines).block(block), area);
        self.layout_regions.details_pane = Some(area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.warning {
            Some(warning) => Line::from(Span::styled(
                format!(" {} ", warning),
                Style::default().fg(Color::Yellow),
            )),
            None => Line::from(Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray))),
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
