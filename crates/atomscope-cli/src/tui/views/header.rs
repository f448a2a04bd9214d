use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Widget},
};

use crate::i18n::t;
use crate::types::Language;
use atomscope_client::{Network, WalletStatus};
use atomscope_types::{Limit, Tab, TrendingPeriod, short_address};

/// Tab bar with the list settings and the wallet badge
pub struct HeaderView<'a> {
    pub lang: Language,
    pub active: Tab,
    pub period: TrendingPeriod,
    pub limit: Limit,
    pub wallet: &'a WalletStatus,
    pub network: Network,
}

fn tab_title(lang: Language, tab: Tab) -> &'static str {
    match tab {
        Tab::Top => t(lang, "tab.top"),
        Tab::Trending => t(lang, "tab.trending"),
        Tab::Positions => t(lang, "tab.positions"),
        Tab::Explorer => t(lang, "tab.explorer"),
    }
}

impl<'a> Widget for HeaderView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lang = self.lang;
        let block = Block::default()
            .title(t(lang, "app.title"))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks =
            Layout::horizontal([Constraint::Min(40), Constraint::Length(44)]).split(inner);

        let titles: Vec<Line> = Tab::ALL
            .iter()
            .enumerate()
            .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab_title(lang, *tab))))
            .collect();
        Tabs::new(titles)
            .select(self.active.index())
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .render(chunks[0], buf);

        let mut spans = Vec::new();
        if matches!(self.active, Tab::Top | Tab::Trending) {
            if self.active == Tab::Trending {
                spans.push(Span::raw(format!(
                    "{} {}  ",
                    t(lang, "period.label"),
                    self.period
                )));
            }
            spans.push(Span::raw(format!("{} {}  ", t(lang, "limit.label"), self.limit)));
        }

        match &self.wallet.address {
            Some(address) if self.wallet.connected => {
                spans.push(Span::styled(
                    format!("{} {}", t(lang, "wallet.connected"), short_address(address)),
                    Style::default().fg(Color::Green),
                ));
                if self.wallet.wrong_network(self.network) {
                    spans.push(Span::styled(
                        format!(" {}", t(lang, "wallet.wrong_network")),
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    ));
                }
            }
            _ => spans.push(Span::styled(
                t(lang, "wallet.disconnected"),
                Style::default().fg(Color::DarkGray),
            )),
        }

        Paragraph::new(Line::from(spans))
            .right_aligned()
            .render(chunks[1], buf);
    }
}
