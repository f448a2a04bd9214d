//! Dashboard application: routes keys to the active screen, dispatches the
//! fetches screens ask for, and applies only the outcomes that are still
//! current.

use crossterm::event::{KeyEvent, KeyEventKind};
use ratatui::Frame;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};
use tokio::runtime::Handle;

use super::components::{Action, DashboardComponent, DetailComponent};
use super::worker::{FetchOutcome, Worker};
use crate::types::Language;
use atomscope_client::{AddressWallet, AtomSource, Network, Wallet, WalletStatus};
use atomscope_engine::{FetchStrategy, RequestKind, RequestTracker, ViewState};
use atomscope_types::Limit;

pub enum Screen {
    Dashboard(DashboardComponent),
    Detail(DetailComponent),
}

pub struct AppSettings {
    pub lang: Language,
    pub network: Network,
    pub default_limit: Limit,
    pub strategy: Arc<dyn FetchStrategy>,
}

pub struct App {
    screen: Screen,
    tracker: RequestTracker,
    wallet: AddressWallet,
    settings: AppSettings,
    worker: Worker,
    rx: Receiver<FetchOutcome>,
    should_quit: bool,
}

const DASHBOARD_KINDS: [RequestKind; 4] = [
    RequestKind::List,
    RequestKind::Search,
    RequestKind::Positions,
    RequestKind::Sync,
];
const DETAIL_KINDS: [RequestKind; 2] = [RequestKind::Detail, RequestKind::History];

impl App {
    /// Build the app and issue the dashboard's first load
    pub fn new(
        source: Arc<dyn AtomSource>,
        handle: Handle,
        wallet: AddressWallet,
        settings: AppSettings,
    ) -> Self {
        let (worker, rx) = Worker::new(source, handle);
        let dashboard = build_dashboard(&settings, &wallet, None);
        let mut app = Self {
            screen: Screen::Dashboard(dashboard),
            tracker: RequestTracker::new(),
            wallet,
            settings,
            worker,
            rx,
            should_quit: false,
        };
        app.reload_dashboard();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn dashboard(&self) -> Option<&DashboardComponent> {
        match &self.screen {
            Screen::Dashboard(dashboard) => Some(dashboard),
            Screen::Detail(_) => None,
        }
    }

    pub fn detail(&self) -> Option<&DetailComponent> {
        match &self.screen {
            Screen::Detail(detail) => Some(detail),
            Screen::Dashboard(_) => None,
        }
    }

    pub fn wallet_status(&self) -> WalletStatus {
        WalletStatus::of(&self.wallet)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let action = match &mut self.screen {
            Screen::Dashboard(dashboard) => dashboard.handle_input(key),
            Screen::Detail(detail) => detail.handle_input(key),
        };
        if let Some(action) = action {
            self.dispatch(action);
        }
    }

    fn dispatch(&mut self, action: Action) {
        match action {
            Action::Fetch(requests) => {
                for request in requests {
                    let token = self.tracker.issue(request.kind());
                    self.worker.spawn(token, request);
                }
            }
            Action::OpenDetail { id, snapshot } => {
                tracing::debug!(%id, "opening detail");
                for kind in DASHBOARD_KINDS {
                    self.tracker.cancel(kind);
                }
                let mut detail = DetailComponent::new(id, snapshot, self.settings.lang);
                let load = detail.load();
                self.screen = Screen::Detail(detail);
                self.dispatch(load);
            }
            Action::Back => {
                for kind in DETAIL_KINDS {
                    self.tracker.cancel(kind);
                }
                if let Screen::Detail(detail) = &self.screen {
                    let snapshot = detail.snapshot().clone();
                    self.screen = Screen::Dashboard(build_dashboard(
                        &self.settings,
                        &self.wallet,
                        Some(snapshot),
                    ));
                    self.reload_dashboard();
                }
            }
            Action::ToggleWallet => {
                if self.wallet.is_connected() {
                    self.wallet.disconnect();
                } else if let Err(e) = self.wallet.connect() {
                    tracing::warn!(error = %e, "wallet connection failed");
                }
                let address = self.wallet.address().map(str::to_string);
                let follow_up = match &mut self.screen {
                    Screen::Dashboard(dashboard) => dashboard.set_wallet(address),
                    Screen::Detail(_) => None,
                };
                if let Some(action) = follow_up {
                    self.dispatch(action);
                }
            }
            Action::Quit => self.should_quit = true,
        }
    }

    /// Issue the first load of a freshly built dashboard
    fn reload_dashboard(&mut self) {
        let load = match &mut self.screen {
            Screen::Dashboard(dashboard) => dashboard.refresh(),
            Screen::Detail(_) => None,
        };
        if let Some(action) = load {
            self.dispatch(action);
        }
    }

    fn apply(&mut self, outcome: FetchOutcome) {
        let kind = outcome.token.kind();
        if !self.tracker.settle(outcome.token) {
            tracing::debug!(?kind, seq = outcome.token.seq(), "dropping stale result");
            return;
        }
        let follow_up = match &mut self.screen {
            Screen::Dashboard(dashboard) => dashboard.apply(kind, outcome.result),
            Screen::Detail(detail) => {
                detail.apply(kind, outcome.result);
                None
            }
        };
        if let Some(action) = follow_up {
            self.dispatch(action);
        }
    }

    /// Apply every outcome that has already arrived
    pub fn drain(&mut self) {
        while let Ok(outcome) = self.rx.try_recv() {
            self.apply(outcome);
        }
    }

    /// Block until no request is outstanding, or `timeout` passes. Returns
    /// whether everything settled.
    pub fn settle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.tracker.has_pending() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.rx.recv_timeout(remaining) {
                Ok(outcome) => self.apply(outcome),
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    return false;
                }
            }
        }
        true
    }

    pub fn render(&mut self, f: &mut Frame) {
        let area = f.area();
        let wallet = WalletStatus::of(&self.wallet);
        let network = self.settings.network;
        match &mut self.screen {
            Screen::Dashboard(dashboard) => dashboard.render(f, area, &wallet, network),
            Screen::Detail(detail) => detail.render(f, area),
        }
    }
}

/// Dashboard for `snapshot` (or defaults) with the wallet's current address
fn build_dashboard(
    settings: &AppSettings,
    wallet: &AddressWallet,
    snapshot: Option<ViewState>,
) -> DashboardComponent {
    DashboardComponent::new(
        snapshot,
        settings.default_limit,
        settings.strategy.clone(),
        settings.lang,
    )
    .with_wallet(wallet.address().map(str::to_string))
}
