use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::Action;
use crate::i18n::t;
use crate::presentation::formatters::format_number;
use crate::presentation::view_models::confidence_label;
use crate::presentation::{AtomDetailViewModel, StatusLevel};
use crate::tui::views::{HistoryChartView, StatusBarView};
use crate::tui::worker::{FetchRequest, FetchResult};
use crate::types::Language;
use atomscope_engine::{ChartSeries, DetailState, RequestKind, ViewState, chart_series};
use atomscope_types::AtomDetail;

/// One atom: its figures, triples and signal/price history.
///
/// Holds the dashboard snapshot it was opened with until the user goes back.
pub struct DetailComponent {
    id: String,
    snapshot: ViewState,
    state: DetailState,
    lang: Language,
    detail: Option<AtomDetail>,
    series: ChartSeries,
    loading_detail: bool,
    loading_history: bool,
    error: Option<String>,
}

impl DetailComponent {
    pub fn new(id: String, snapshot: ViewState, lang: Language) -> Self {
        let state = DetailState::seeded_from(Some(&snapshot));
        Self {
            id,
            snapshot,
            state,
            lang,
            detail: None,
            series: ChartSeries::default(),
            loading_detail: false,
            loading_history: false,
            error: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn detail(&self) -> Option<&AtomDetail> {
        self.detail.as_ref()
    }

    pub fn series(&self) -> &ChartSeries {
        &self.series
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Dashboard state to restore when leaving this view
    pub fn snapshot(&self) -> &ViewState {
        &self.snapshot
    }

    /// Atom and history for the current chart period
    pub fn load(&mut self) -> Action {
        self.error = None;
        self.loading_detail = true;
        self.loading_history = true;
        Action::Fetch(vec![
            FetchRequest::Detail {
                id: self.id.clone(),
            },
            self.history_request(),
        ])
    }

    fn history_request(&self) -> FetchRequest {
        FetchRequest::History {
            id: self.id.clone(),
            window: self.state.history_window(),
        }
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('b') | KeyCode::Esc | KeyCode::Backspace => Some(Action::Back),
            KeyCode::Char('p') => {
                self.state.select_period(self.state.chart_period.next());
                self.loading_history = true;
                Some(Action::Fetch(vec![self.history_request()]))
            }
            KeyCode::Char('r') => Some(self.load()),
            _ => None,
        }
    }

    pub fn apply(&mut self, kind: RequestKind, result: Result<FetchResult, String>) {
        match result {
            Ok(FetchResult::Detail(detail)) => {
                self.loading_detail = false;
                self.detail = Some(*detail);
            }
            Ok(FetchResult::History(points)) => {
                self.loading_history = false;
                self.series = chart_series(&points);
            }
            Ok(_) => {}
            Err(message) => {
                match kind {
                    RequestKind::Detail => self.loading_detail = false,
                    RequestKind::History => self.loading_history = false,
                    _ => {}
                }
                self.error = Some(message);
            }
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let lang = self.lang;
        let [info_area, chart_area, status_area] = Layout::vertical([
            Constraint::Length(11),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .areas(area);

        let view_model = self
            .detail
            .as_ref()
            .map(|d| AtomDetailViewModel::new(d, self.state.chart_period, &self.series));

        match &view_model {
            Some(vm) => self.render_info(f, info_area, vm),
            None => f.render_widget(
                Paragraph::new(t(lang, "status.loading"))
                    .block(Block::default().title(format!("#{}", self.id)).borders(Borders::ALL)),
                info_area,
            ),
        }

        let period = self.state.chart_period;
        if self.series.is_empty() {
            let message = if self.loading_history {
                t(lang, "status.loading")
            } else {
                t(lang, "empty.history")
            };
            f.render_widget(
                Paragraph::new(message)
                    .style(Style::default().fg(Color::DarkGray))
                    .block(
                        Block::default()
                            .title(format!("{} ({})", t(lang, "detail.history"), period))
                            .borders(Borders::ALL),
                    ),
                chart_area,
            );
        } else {
            let [signal_area, price_area] =
                Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .areas(chart_area);
            f.render_widget(
                HistoryChartView::signal(
                    &self.series,
                    format!("{} ({})", t(lang, "detail.signal"), period),
                ),
                signal_area,
            );
            f.render_widget(
                HistoryChartView::share_price(
                    &self.series,
                    format!("{} ({})", t(lang, "detail.price"), period),
                ),
                price_area,
            );
        }

        let status = match (&self.error, self.loading_detail || self.loading_history) {
            (Some(error), _) => Some((
                format!("{} - {}", error, t(lang, "status.retry")),
                StatusLevel::Error,
            )),
            (None, true) => Some((t(lang, "status.loading").to_string(), StatusLevel::Info)),
            (None, false) => None,
        };
        f.render_widget(
            StatusBarView {
                status: status.as_ref().map(|(m, l)| (m.as_str(), *l)),
                help: t(lang, "help.detail"),
            },
            status_area,
        );
    }

    fn render_info(&self, f: &mut Frame, area: Rect, vm: &AtomDetailViewModel) {
        let lang = self.lang;
        let atom = &vm.atom;
        let label_style = Style::default().fg(Color::DarkGray);

        let field = |key: &'static str, value: String| {
            Line::from(vec![
                Span::styled(format!("{:<18}", t(lang, key)), label_style),
                Span::raw(value),
            ])
        };

        let mut lines = Vec::new();
        if let Some(description) = &vm.description {
            lines.push(Line::from(description.as_str()));
        }
        if let Some(did) = &vm.did {
            lines.push(field("detail.did", did.clone()));
        }
        if let Some(creator) = &vm.creator {
            lines.push(field("detail.creator", creator.clone()));
        }
        lines.push(field("col.market_cap", format_number(atom.market_cap)));
        lines.push(field("col.share_price", format_number(atom.share_price)));
        lines.push(field("col.positions", format_number(atom.positions)));
        lines.push(field("col.created", atom.created.clone()));
        lines.push(field(
            "detail.confidence",
            confidence_label(lang, atom.confidence).to_string(),
        ));
        if !vm.triples.is_empty() {
            let shown: Vec<String> = vm
                .triples
                .iter()
                .take(3)
                .map(|tr| format!("{} {} {}", tr.subject, tr.predicate, tr.object))
                .collect();
            lines.push(field(
                "detail.triples",
                format!("{} ({})", shown.join(" | "), vm.triples.len()),
            ));
        }

        let title = Line::from(Span::styled(
            format!("{} #{}", atom.label, atom.id),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(Block::default().title(title).borders(Borders::ALL)),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atomscope_engine::HistoryWindow;
    use atomscope_testing::fixtures::sample_history;
    use atomscope_types::TrendingPeriod;
    use crossterm::event::KeyModifiers;

    fn press(component: &mut DetailComponent, code: KeyCode) -> Option<Action> {
        component.handle_input(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_period_seeded_from_snapshot_then_independent() {
        let snapshot = ViewState {
            trending_period: TrendingPeriod::H24,
            ..ViewState::default()
        };
        let mut detail = DetailComponent::new("7".to_string(), snapshot.clone(), Language::En);
        assert_eq!(
            detail.load(),
            Action::Fetch(vec![
                FetchRequest::Detail { id: "7".to_string() },
                FetchRequest::History {
                    id: "7".to_string(),
                    window: HistoryWindow::Hours(24)
                },
            ])
        );

        let next = TrendingPeriod::H24.next();
        assert_eq!(
            press(&mut detail, KeyCode::Char('p')),
            Some(Action::Fetch(vec![FetchRequest::History {
                id: "7".to_string(),
                window: HistoryWindow::for_period(next)
            }]))
        );
        assert_eq!(detail.snapshot(), &snapshot);
    }

    #[test]
    fn test_history_builds_series() {
        let mut detail = DetailComponent::new("1".to_string(), ViewState::default(), Language::En);
        detail.apply(
            RequestKind::History,
            Ok(FetchResult::History(sample_history())),
        );
        assert_eq!(detail.series().len(), 3);

        detail.apply(RequestKind::Detail, Err("server returned 404".to_string()));
        assert_eq!(detail.error(), Some("server returned 404"));
        assert_eq!(press(&mut detail, KeyCode::Char('b')), Some(Action::Back));
    }
}
