use ratatui::{
    layout::Constraint,
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
};

use super::{confidence_color, growth_color};
use crate::i18n::t;
use crate::presentation::formatters::{format_number, format_percent};
use crate::presentation::view_models::confidence_label;
use crate::presentation::AtomRow;
use crate::types::Language;

/// Ranked atom list. Rendered statefully by the dashboard so the selected
/// row survives redraws.
pub struct AtomTableView<'a> {
    rows: &'a [AtomRow],
    title: String,
    lang: Language,
}

impl<'a> AtomTableView<'a> {
    pub fn new(rows: &'a [AtomRow], title: String, lang: Language) -> Self {
        Self { rows, title, lang }
    }

    pub fn build_table(self) -> Table<'a> {
        let lang = self.lang;
        let with_growth = self.rows.iter().any(|r| r.growth.is_some());

        let mut header = vec![
            t(lang, "col.rank"),
            t(lang, "col.atom"),
            t(lang, "col.market_cap"),
            t(lang, "col.share_price"),
            t(lang, "col.positions"),
            t(lang, "col.created"),
            t(lang, "col.confidence"),
        ];
        let mut widths = vec![
            Constraint::Length(4),
            Constraint::Min(20),
            Constraint::Length(14),
            Constraint::Length(15),
            Constraint::Length(10),
            Constraint::Length(11),
            Constraint::Length(11),
        ];
        if with_growth {
            header.push(t(lang, "col.growth"));
            widths.push(Constraint::Length(11));
        }

        let rows: Vec<Row<'a>> = self
            .rows
            .iter()
            .map(|row| {
                let mut cells = vec![
                    Cell::from(row.rank.to_string()),
                    Cell::from(row.label.as_str()),
                    Cell::from(format_number(row.market_cap)),
                    Cell::from(format_number(row.share_price)),
                    Cell::from(format_number(row.positions)),
                    Cell::from(row.created.as_str()),
                    Cell::from(confidence_label(lang, row.confidence))
                        .style(Style::default().fg(confidence_color(row.confidence))),
                ];
                if with_growth {
                    cells.push(
                        Cell::from(format_percent(row.growth))
                            .style(Style::default().fg(growth_color(row.growth))),
                    );
                }
                Row::new(cells)
            })
            .collect();

        Table::new(rows, widths)
            .header(Row::new(header).style(Style::default().add_modifier(Modifier::BOLD)))
            .block(Block::default().title(self.title).borders(Borders::ALL))
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    }
}
