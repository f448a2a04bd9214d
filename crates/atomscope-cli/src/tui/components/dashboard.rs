use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, TableState, Wrap},
};
use std::sync::Arc;

use super::filter_panel::{FilterPanel, PanelEvent};
use super::text_input::{InputEvent, TextInput};
use super::Action;
use crate::i18n::t;
use crate::presentation::{AtomRow, PositionRow, StatusLevel, SyncViewModel};
use crate::tui::views::{
    AtomTableView, FilterPanelView, HeaderView, InputView, ModalView, PositionsTableView,
    StatusBarView,
};
use crate::tui::worker::{FetchRequest, FetchResult};
use crate::types::Language;
use atomscope_client::{DEFAULT_SEARCH_LIMIT, Network, WalletStatus};
use atomscope_engine::{
    DashboardState, FetchStrategy, ListView, RequestKind, SortMode, ViewState,
};
use atomscope_types::{Atom, FilterSpec, Limit, Position, SyncMode, Tab, validate_address};

const POSITIONS_PAGE: usize = 50;

#[derive(Debug, Clone, Default)]
struct SearchResults {
    query: String,
    atoms: Vec<Atom>,
}

/// The four-tab dashboard: ranked lists, the connected wallet's positions,
/// and the address explorer
pub struct DashboardComponent {
    state: DashboardState,
    strategy: Arc<dyn FetchStrategy>,
    lang: Language,

    list: ListView,
    search_input: TextInput,
    search: Option<SearchResults>,

    wallet_address: Option<String>,
    positions: Vec<Position>,
    positions_for: Option<Tab>,
    explorer_input: TextInput,
    explorer_address: Option<String>,
    explorer_error: Option<String>,

    filter_panel: Option<FilterPanel>,
    table: TableState,
    /// Kinds still expected for the active tab; loading while non-empty
    pending: Vec<RequestKind>,
    syncing: bool,
    error: Option<String>,
    modal: Option<String>,
}

impl DashboardComponent {
    /// Build the dashboard. `snapshot` comes from a detail view being left and
    /// is consumed here; without one the list starts at `default_limit`.
    pub fn new(
        snapshot: Option<ViewState>,
        default_limit: Limit,
        strategy: Arc<dyn FetchStrategy>,
        lang: Language,
    ) -> Self {
        let restored = snapshot.is_some();
        let mut state = DashboardState::restore(snapshot);
        if !restored {
            state.limit = default_limit;
        }

        Self {
            state,
            strategy,
            lang,
            list: ListView::new(),
            search_input: TextInput::default(),
            search: None,
            wallet_address: None,
            positions: Vec::new(),
            positions_for: None,
            explorer_input: TextInput::default(),
            explorer_address: None,
            explorer_error: None,
            filter_panel: None,
            table: TableState::default().with_selected(Some(0)),
            pending: Vec::new(),
            syncing: false,
            error: None,
            modal: None,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Set the wallet address without issuing a reload
    pub fn with_wallet(mut self, address: Option<String>) -> Self {
        self.wallet_address = address;
        self
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn modal(&self) -> Option<&str> {
        self.modal.as_deref()
    }

    pub fn explorer_error(&self) -> Option<&str> {
        self.explorer_error.as_deref()
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Rows currently on screen for the list tabs: search results while a
    /// search is active, else the projected list
    pub fn visible_atoms(&self) -> &[Atom] {
        match &self.search {
            Some(search) => &search.atoms,
            None => self.list.visible(),
        }
    }

    /// Requests that load the active tab from scratch
    pub fn refresh(&mut self) -> Option<Action> {
        self.error = None;
        let request = match self.state.active_tab {
            Tab::Top => Some(FetchRequest::Atoms {
                limit: self.strategy.fetch_size(self.state.limit.get()),
                filters: self.server_filters(),
            }),
            Tab::Trending => Some(FetchRequest::Trending {
                period: self.state.trending_period,
                limit: self.strategy.fetch_size(self.state.limit.get()),
                filters: self.server_filters(),
            }),
            Tab::Positions => self.positions_request(self.wallet_address.clone()),
            Tab::Explorer => self.positions_request(self.explorer_address.clone()),
        };

        let mut requests: Vec<FetchRequest> = request.into_iter().collect();
        if let Some(search) = &self.search {
            requests.push(FetchRequest::Search {
                query: search.query.clone(),
                limit: DEFAULT_SEARCH_LIMIT,
            });
        }

        self.pending = requests.iter().map(FetchRequest::kind).collect();
        (!requests.is_empty()).then_some(Action::Fetch(requests))
    }

    fn server_filters(&self) -> Option<FilterSpec> {
        self.strategy.server_filters(&self.state.filters).cloned()
    }

    fn positions_request(&mut self, address: Option<String>) -> Option<FetchRequest> {
        let address = address?;
        self.positions_for = Some(self.state.active_tab);
        Some(FetchRequest::Positions {
            address,
            limit: POSITIONS_PAGE,
            offset: 0,
        })
    }

    /// The connected wallet changed; reload if its positions are on screen
    pub fn set_wallet(&mut self, address: Option<String>) -> Option<Action> {
        self.wallet_address = address;
        if self.state.active_tab != Tab::Positions {
            return None;
        }
        self.positions.clear();
        self.table.select(Some(0));
        self.refresh()
    }

    fn select_tab(&mut self, tab: Tab) -> Option<Action> {
        if tab == self.state.active_tab {
            return None;
        }
        self.state.select_tab(tab);
        self.list.clear();
        self.positions.clear();
        self.positions_for = None;
        self.search = None;
        self.search_input.clear();
        self.filter_panel = None;
        self.table.select(Some(0));
        self.refresh()
    }

    fn reproject(&mut self) {
        if let Some(mode) = self.state.sort_mode() {
            self.list.reproject(
                self.strategy.as_ref(),
                &self.state.filters,
                &mode,
                self.state.limit.get(),
            );
            self.clamp_selection();
        }
    }

    fn row_count(&self) -> usize {
        match self.state.active_tab {
            Tab::Top | Tab::Trending => self.visible_atoms().len(),
            Tab::Positions | Tab::Explorer => self.positions.len(),
        }
    }

    fn clamp_selection(&mut self) {
        let count = self.row_count();
        let selected = self.table.selected().unwrap_or(0);
        self.table
            .select(Some(selected.min(count.saturating_sub(1))));
    }

    fn move_selection(&mut self, down: bool) {
        let count = self.row_count();
        if count == 0 {
            return;
        }
        let current = self.table.selected().unwrap_or(0);
        let next = if down {
            (current + 1).min(count - 1)
        } else {
            current.saturating_sub(1)
        };
        self.table.select(Some(next));
    }

    /// Atom id behind the selected row; triple positions have none
    fn selected_atom_id(&self) -> Option<String> {
        let index = self.table.selected()?;
        match self.state.active_tab {
            Tab::Top | Tab::Trending => self.visible_atoms().get(index).map(|a| a.id.to_string()),
            Tab::Positions | Tab::Explorer => self
                .positions
                .get(index)
                .and_then(|p| p.atom_term_id())
                .map(|id| id.to_string()),
        }
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        if self.modal.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.modal = None;
            }
            return None;
        }

        if self.search_input.is_focused() {
            return match self.search_input.handle_key(key) {
                InputEvent::Submitted(query) if !query.is_empty() => self.start_search(query),
                InputEvent::Submitted(_) | InputEvent::Cancelled => {
                    self.search = None;
                    self.pending.retain(|k| *k != RequestKind::Search);
                    self.search_input.clear();
                    self.clamp_selection();
                    None
                }
                InputEvent::Edited | InputEvent::Ignored => None,
            };
        }

        if self.explorer_input.is_focused() {
            return match self.explorer_input.handle_key(key) {
                InputEvent::Submitted(input) => self.explore(&input),
                InputEvent::Edited => {
                    self.explorer_error = None;
                    None
                }
                InputEvent::Cancelled | InputEvent::Ignored => None,
            };
        }

        if let Some(panel) = &mut self.filter_panel {
            let event = panel.handle_key(key, &mut self.state.filters);
            match event {
                PanelEvent::Changed => {
                    self.reproject();
                    // A filtering backend needs the new bounds
                    if self.strategy.server_filters(&self.state.filters).is_some() {
                        return self.refresh();
                    }
                }
                PanelEvent::Closed => self.filter_panel = None,
                PanelEvent::Unchanged => {}
            }
            return None;
        }

        let list_tab = matches!(self.state.active_tab, Tab::Top | Tab::Trending);
        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                self.select_tab(Tab::ALL[index])
            }
            KeyCode::Tab => {
                let next = Tab::ALL[(self.state.active_tab.index() + 1) % Tab::ALL.len()];
                self.select_tab(next)
            }
            KeyCode::Char('p') if self.state.active_tab == Tab::Trending => {
                self.state.trending_period = self.state.trending_period.next();
                self.refresh()
            }
            KeyCode::Char('l') if list_tab => {
                self.state.limit = self.state.limit.next();
                self.refresh()
            }
            KeyCode::Char('L') if list_tab => {
                self.state.limit = self.state.limit.prev();
                self.refresh()
            }
            KeyCode::Char('/') if list_tab => {
                self.search_input.focus();
                None
            }
            KeyCode::Char('f') if list_tab => {
                self.filter_panel = Some(FilterPanel::default());
                None
            }
            KeyCode::Esc if self.search.is_some() => {
                self.search = None;
                self.pending.retain(|k| *k != RequestKind::Search);
                self.search_input.clear();
                self.clamp_selection();
                None
            }
            KeyCode::Char('i') if self.state.active_tab == Tab::Explorer => {
                self.explorer_input.focus();
                None
            }
            KeyCode::Char('s') if !self.syncing => {
                self.syncing = true;
                Some(Action::Fetch(vec![FetchRequest::Sync {
                    mode: SyncMode::New,
                    limit: None,
                }]))
            }
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Char('c') => Some(Action::ToggleWallet),
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(true);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(false);
                None
            }
            KeyCode::Enter => self.selected_atom_id().map(|id| Action::OpenDetail {
                id,
                snapshot: self.state.snapshot(),
            }),
            _ => None,
        }
    }

    fn start_search(&mut self, query: String) -> Option<Action> {
        self.search = Some(SearchResults {
            query: query.clone(),
            atoms: Vec::new(),
        });
        if !self.pending.contains(&RequestKind::Search) {
            self.pending.push(RequestKind::Search);
        }
        self.error = None;
        self.table.select(Some(0));
        Some(Action::Fetch(vec![FetchRequest::Search {
            query,
            limit: DEFAULT_SEARCH_LIMIT,
        }]))
    }

    /// Validate the typed address before any lookup is issued
    fn explore(&mut self, input: &str) -> Option<Action> {
        match validate_address(input) {
            Ok(address) => {
                self.explorer_address = Some(address.to_string());
                self.explorer_error = None;
                self.positions.clear();
                self.table.select(Some(0));
                self.refresh()
            }
            Err(e) => {
                self.explorer_error = Some(e.to_string());
                None
            }
        }
    }

    /// Apply a settled fetch. May return follow-up requests.
    ///
    /// Results of a kind the active tab is not waiting for (a list landing
    /// after a switch to the positions tab) are ignored.
    pub fn apply(&mut self, kind: RequestKind, result: Result<FetchResult, String>) -> Option<Action> {
        let expected = self.pending.contains(&kind);
        self.pending.retain(|k| *k != kind);

        let result = match result {
            Ok(result) => result,
            Err(message) => {
                if kind == RequestKind::Sync {
                    self.syncing = false;
                    self.modal = Some(format!("{}: {}", t(self.lang, "sync.failure"), message));
                } else if expected {
                    self.error = Some(message);
                }
                return None;
            }
        };

        match result {
            FetchResult::Atoms(raw) => {
                if expected && let Some(mode) = self.state.sort_mode() {
                    self.apply_raw(raw, mode);
                }
                None
            }
            FetchResult::Search(atoms) => {
                if expected && let Some(search) = &mut self.search {
                    search.atoms = atoms;
                }
                self.clamp_selection();
                None
            }
            FetchResult::Positions(positions) => {
                if expected && self.positions_for == Some(self.state.active_tab) {
                    self.positions = positions;
                    self.clamp_selection();
                }
                None
            }
            FetchResult::Sync(report) => {
                self.syncing = false;
                let view_model = SyncViewModel::new(SyncMode::New, &report);
                self.modal = Some(view_model.summary(self.lang));
                if report.success {
                    self.refresh()
                } else {
                    None
                }
            }
            FetchResult::Detail(_) | FetchResult::History(_) => None,
        }
    }

    fn apply_raw(&mut self, raw: Vec<Atom>, mode: SortMode) {
        self.list.replace_raw(
            raw,
            self.strategy.as_ref(),
            &self.state.filters,
            &mode,
            self.state.limit.get(),
        );
        self.clamp_selection();
    }

    fn status(&self) -> Option<(String, StatusLevel)> {
        if let Some(error) = &self.error {
            return Some((
                format!("{} - {}", error, t(self.lang, "status.retry")),
                StatusLevel::Error,
            ));
        }
        if self.syncing {
            return Some((t(self.lang, "status.syncing").to_string(), StatusLevel::Info));
        }
        if self.is_loading() {
            return Some((t(self.lang, "status.loading").to_string(), StatusLevel::Info));
        }
        if self.state.filters.has_active_filters()
            && matches!(self.state.active_tab, Tab::Top | Tab::Trending)
        {
            return Some((t(self.lang, "filter.active").to_string(), StatusLevel::Warning));
        }
        None
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, wallet: &WalletStatus, network: Network) {
        let lang = self.lang;
        let [header_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .areas(area);

        f.render_widget(
            HeaderView {
                lang,
                active: self.state.active_tab,
                period: self.state.trending_period,
                limit: self.state.limit,
                wallet,
                network,
            },
            header_area,
        );

        match self.state.active_tab {
            Tab::Top | Tab::Trending => self.render_list(f, body_area),
            Tab::Positions => self.render_positions(f, body_area),
            Tab::Explorer => self.render_explorer(f, body_area),
        }

        let status = self.status();
        let help = if self.filter_panel.is_some() {
            t(lang, "help.filters")
        } else {
            t(lang, "help.dashboard")
        };
        f.render_widget(
            StatusBarView {
                status: status.as_ref().map(|(m, l)| (m.as_str(), *l)),
                help,
            },
            status_area,
        );

        if let Some(message) = &self.modal {
            f.render_widget(
                ModalView {
                    title: t(lang, "sync.title"),
                    body: message,
                    hint: t(lang, "modal.dismiss"),
                },
                area,
            );
        }
    }

    fn render_list(&mut self, f: &mut Frame, area: Rect) {
        let lang = self.lang;
        let show_input = self.search_input.is_focused() || self.search.is_some();
        let [input_area, rest] = Layout::vertical([
            Constraint::Length(if show_input { 3 } else { 0 }),
            Constraint::Min(3),
        ])
        .areas(area);

        if show_input {
            let value = match (&self.search, self.search_input.is_focused()) {
                (Some(search), false) => search.query.as_str(),
                _ => self.search_input.value(),
            };
            f.render_widget(
                InputView {
                    prompt: t(lang, "search.prompt"),
                    value,
                    focused: self.search_input.is_focused(),
                    error: None,
                },
                input_area,
            );
        }

        let [table_area, panel_area] = Layout::horizontal([
            Constraint::Min(40),
            Constraint::Length(if self.filter_panel.is_some() { 36 } else { 0 }),
        ])
        .areas(rest);

        if let Some(panel) = &self.filter_panel {
            f.render_widget(
                FilterPanelView::new(&self.state.filters, panel.selected_index(), lang),
                panel_area,
            );
        }

        let (title, growth_period) = match (&self.search, self.state.active_tab) {
            (Some(search), _) => (
                format!("{} \"{}\"", t(lang, "search.results"), search.query),
                None,
            ),
            (None, Tab::Trending) => (
                format!("{} ({})", t(lang, "tab.trending"), self.state.trending_period),
                Some(self.state.trending_period),
            ),
            (None, _) => (t(lang, "tab.top").to_string(), None),
        };

        let rows = AtomRow::rows(self.visible_atoms(), growth_period);
        if rows.is_empty() && !self.is_loading() {
            let key = if self.search.is_some() {
                "empty.search"
            } else {
                "empty.atoms"
            };
            render_message(f, table_area, &title, t(lang, key));
            return;
        }
        let table = AtomTableView::new(&rows, title, lang).build_table();
        f.render_stateful_widget(table, table_area, &mut self.table);
    }

    fn render_positions(&mut self, f: &mut Frame, area: Rect) {
        let lang = self.lang;
        let title = t(lang, "tab.positions").to_string();
        if self.wallet_address.is_none() {
            render_message(f, area, &title, t(lang, "empty.wallet"));
            return;
        }
        self.render_positions_table(f, area, title);
    }

    fn render_explorer(&mut self, f: &mut Frame, area: Rect) {
        let lang = self.lang;
        let [input_area, rest] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(area);

        let value = if self.explorer_input.is_focused() || self.explorer_address.is_none() {
            self.explorer_input.value()
        } else {
            self.explorer_address.as_deref().unwrap_or_default()
        };
        f.render_widget(
            InputView {
                prompt: t(lang, "explorer.prompt"),
                value,
                focused: self.explorer_input.is_focused(),
                error: self.explorer_error.as_deref(),
            },
            input_area,
        );

        let title = t(lang, "tab.explorer").to_string();
        if self.explorer_address.is_none() {
            render_message(f, rest, &title, t(lang, "empty.explorer"));
            return;
        }
        self.render_positions_table(f, rest, title);
    }

    fn render_positions_table(&mut self, f: &mut Frame, area: Rect, title: String) {
        if self.positions.is_empty() && !self.is_loading() {
            render_message(f, area, &title, t(self.lang, "empty.positions"));
            return;
        }
        let rows = PositionRow::rows(&self.positions);
        let table = PositionsTableView::new(&rows, title, self.lang).build_table();
        f.render_stateful_widget(table, area, &mut self.table);
    }
}

fn render_message(f: &mut Frame, area: Rect, title: &str, message: &str) {
    f.render_widget(
        Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true })
            .block(Block::default().title(title).borders(Borders::ALL)),
        area,
    );
}
