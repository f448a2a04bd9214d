use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::status_level_to_color;
use crate::presentation::StatusLevel;

pub struct StatusBarView<'a> {
    pub status: Option<(&'a str, StatusLevel)>,
    pub help: &'a str,
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        if let Some((message, level)) = self.status {
            spans.push(Span::styled(
                message,
                Style::default().fg(status_level_to_color(level)),
            ));
            spans.push(Span::raw("  |  "));
        }
        spans.push(Span::styled(self.help, Style::default().fg(Color::Yellow)));

        Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}
