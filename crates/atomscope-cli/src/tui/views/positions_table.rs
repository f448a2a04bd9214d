use ratatui::{
    layout::Constraint,
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
};

use super::growth_color;
use crate::i18n::t;
use crate::presentation::formatters::{format_number, format_percent};
use crate::presentation::PositionRow;
use crate::types::Language;

pub struct PositionsTableView<'a> {
    rows: &'a [PositionRow],
    title: String,
    lang: Language,
}

impl<'a> PositionsTableView<'a> {
    pub fn new(rows: &'a [PositionRow], title: String, lang: Language) -> Self {
        Self { rows, title, lang }
    }

    pub fn build_table(self) -> Table<'a> {
        let lang = self.lang;
        let header = Row::new(vec![
            t(lang, "col.kind"),
            t(lang, "col.atom"),
            t(lang, "col.shares"),
            t(lang, "col.share_price"),
            t(lang, "col.value"),
            t(lang, "col.pnl"),
        ])
        .style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row<'a>> = self
            .rows
            .iter()
            .map(|row| {
                let kind = match row.kind {
                    "triple" => t(lang, "kind.triple"),
                    _ => t(lang, "kind.atom"),
                };
                Row::new(vec![
                    Cell::from(kind),
                    Cell::from(row.label.as_str()),
                    Cell::from(format_number(row.shares)),
                    Cell::from(format_number(row.share_price)),
                    Cell::from(format_number(row.value)),
                    Cell::from(format_percent(row.pnl_percent))
                        .style(Style::default().fg(growth_color(row.pnl_percent))),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(8),
            Constraint::Min(24),
            Constraint::Length(12),
            Constraint::Length(15),
            Constraint::Length(12),
            Constraint::Length(10),
        ];

        Table::new(rows, widths)
            .header(header)
            .block(Block::default().title(self.title).borders(Borders::ALL))
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    }
}
