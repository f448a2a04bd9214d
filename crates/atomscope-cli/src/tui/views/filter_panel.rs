use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::i18n::t;
use crate::presentation::view_models::{sort_key_label, sort_order_label};
use crate::tui::components::filter_panel::FilterField;
use crate::types::Language;
use atomscope_types::{FilterBound, FilterSpec};

pub struct FilterPanelView<'a> {
    spec: &'a FilterSpec,
    selected: usize,
    lang: Language,
}

impl<'a> FilterPanelView<'a> {
    pub fn new(spec: &'a FilterSpec, selected: usize, lang: Language) -> Self {
        Self {
            spec,
            selected,
            lang,
        }
    }
}

fn bound_label(lang: Language, bound: FilterBound) -> &'static str {
    match bound {
        FilterBound::MinMarketCap => t(lang, "filter.min_market_cap"),
        FilterBound::MaxMarketCap => t(lang, "filter.max_market_cap"),
        FilterBound::MinSharePrice => t(lang, "filter.min_share_price"),
        FilterBound::MaxSharePrice => t(lang, "filter.max_share_price"),
    }
}

impl<'a> Widget for FilterPanelView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lang = self.lang;
        let lines: Vec<Line> = FilterField::ALL
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let (label, value) = match field {
                    FilterField::SortBy => (
                        t(lang, "filter.sort_by"),
                        sort_key_label(lang, self.spec.sort_by).to_string(),
                    ),
                    FilterField::Order => (
                        t(lang, "filter.order"),
                        sort_order_label(lang, self.spec.sort_order).to_string(),
                    ),
                    FilterField::Bound(bound) => (
                        bound_label(lang, *bound),
                        self.spec.bound(*bound).unwrap_or("-").to_string(),
                    ),
                };
                let style = if i == self.selected {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                Line::from(vec![
                    Span::styled(format!("{:<20}", label), style),
                    Span::raw(" "),
                    Span::raw(value),
                ])
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(t(lang, "filter.title"))
                    .borders(Borders::ALL),
            )
            .render(area, buf);
    }
}
