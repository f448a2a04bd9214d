use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// One-line prompt; an inline error replaces the hint in the title
pub struct InputView<'a> {
    pub prompt: &'a str,
    pub value: &'a str,
    pub focused: bool,
    pub error: Option<&'a str>,
}

impl<'a> Widget for InputView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = match (self.error, self.focused) {
            (Some(_), _) => Color::Red,
            (None, true) => Color::Cyan,
            (None, false) => Color::DarkGray,
        };
        let mut block = Block::default()
            .title(self.prompt)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        if let Some(error) = self.error {
            block = block.title_bottom(Line::from(Span::styled(
                error,
                Style::default().fg(Color::Red),
            )));
        }

        let cursor = if self.focused { "_" } else { "" };
        Paragraph::new(Line::from(vec![
            Span::raw(self.value),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
        .block(block)
        .render(area, buf);
    }
}
