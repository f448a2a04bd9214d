use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Centered message box drawn over the current screen
pub struct ModalView<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub hint: &'a str,
}

pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

impl<'a> Widget for ModalView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width.min(60);
        let rect = centered(area, width, 7.min(area.height));
        Clear.render(rect, buf);
        Paragraph::new(vec![
            Line::from(self.body),
            Line::from(""),
            Line::from(self.hint).style(Style::default().fg(Color::DarkGray)),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(self.title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .render(rect, buf);
    }
}
