//! Dashboard navigation driven through `App` against a seeded mock source.

use atomscope::tui::{App, AppSettings};
use atomscope::types::Language;
use atomscope_client::{AddressWallet, MockCall, MockSource, Network};
use atomscope_engine::OverFetch;
use atomscope_testing::AtomBuilder;
use atomscope_testing::fixtures::{WALLET, sample_history, sample_positions};
use atomscope_types::{AtomDetail, FilterBound, Limit, Tab, TrendingPeriod};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

const SETTLE: Duration = Duration::from_secs(5);

fn trending_source() -> MockSource {
    let atoms = vec![
        AtomBuilder::new(1).label("Tiny").market_cap(5.0).generic_growth(50.0).build(),
        AtomBuilder::new(2).label("Large").market_cap(500.0).generic_growth(10.0).build(),
        AtomBuilder::new(3).label("Middle").market_cap(50.0).generic_growth(30.0).build(),
    ];
    MockSource::new()
        .with_atoms(atoms.clone())
        .with_trending(atoms.clone())
        .with_detail(AtomDetail {
            atom: atoms[2].clone(),
            triples: Vec::new(),
        })
        .with_history("3", sample_history())
        .with_positions(WALLET, sample_positions())
}

fn app(runtime: &Runtime, source: MockSource) -> App {
    shared_app(runtime, Arc::new(source))
}

fn shared_app(runtime: &Runtime, source: Arc<MockSource>) -> App {
    let settings = AppSettings {
        lang: Language::En,
        network: Network::Mainnet,
        default_limit: Limit::default(),
        strategy: Arc::new(OverFetch::default()),
    };
    let wallet = AddressWallet::new(Some(WALLET.to_string()), Some(Network::Mainnet.chain_id()));
    App::new(source, runtime.handle().clone(), wallet, settings)
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn visible_ids(app: &App) -> Vec<String> {
    app.dashboard()
        .expect("dashboard screen")
        .visible_atoms()
        .iter()
        .map(|a| a.id.to_string())
        .collect()
}

#[test]
fn test_detail_round_trip_restores_dashboard_state() {
    let runtime = Runtime::new().unwrap();
    let mut app = app(&runtime, trending_source());
    assert!(app.settle(SETTLE));
    assert_eq!(visible_ids(&app), ["2", "3", "1"]);

    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('p'));
    press(&mut app, KeyCode::Char('l'));
    assert!(app.settle(SETTLE));

    press(&mut app, KeyCode::Char('f'));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('1'));
    press(&mut app, KeyCode::Char('0'));
    press(&mut app, KeyCode::Esc);
    assert_eq!(visible_ids(&app), ["3", "2"]);

    let before = app.dashboard().unwrap().state().clone();
    assert_eq!(before.active_tab, Tab::Trending);
    assert_eq!(before.trending_period, TrendingPeriod::D7.next());
    assert_eq!(before.limit.get(), 25);

    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Enter);
    assert!(app.settle(SETTLE));

    let detail = app.detail().expect("detail screen");
    assert_eq!(detail.id(), "3");
    assert!(detail.detail().is_some());
    assert_eq!(detail.series().len(), 3);
    assert_eq!(detail.error(), None);

    press(&mut app, KeyCode::Char('b'));
    assert!(app.settle(SETTLE));

    let dashboard = app.dashboard().expect("dashboard screen");
    assert_eq!(dashboard.state(), &before);
    assert_eq!(
        dashboard.state().filters.bound(FilterBound::MinMarketCap),
        Some("10")
    );
    assert_eq!(visible_ids(&app), ["3", "2"]);
}

#[test]
fn test_wallet_toggle_loads_positions() {
    let runtime = Runtime::new().unwrap();
    let mut app = app(&runtime, trending_source());
    assert!(app.settle(SETTLE));

    press(&mut app, KeyCode::Char('3'));
    assert!(app.settle(SETTLE));
    assert!(app.dashboard().unwrap().positions().is_empty());

    press(&mut app, KeyCode::Char('c'));
    assert!(app.wallet_status().connected);
    assert!(app.settle(SETTLE));
    assert_eq!(app.dashboard().unwrap().positions().len(), 2);

    press(&mut app, KeyCode::Char('c'));
    assert!(!app.wallet_status().connected);
}

#[test]
fn test_back_to_positions_loads_once() {
    let runtime = Runtime::new().unwrap();
    let source = Arc::new(trending_source());
    let mut app = shared_app(&runtime, source.clone());
    assert!(app.settle(SETTLE));

    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Char('c'));
    assert!(app.settle(SETTLE));
    assert_eq!(app.dashboard().unwrap().positions().len(), 2);

    press(&mut app, KeyCode::Enter);
    assert!(app.settle(SETTLE));
    assert!(app.detail().is_some());

    let positions_calls = |calls: Vec<MockCall>| {
        calls
            .iter()
            .filter(|c| matches!(c, MockCall::Positions { .. }))
            .count()
    };
    let before = positions_calls(source.calls());

    press(&mut app, KeyCode::Char('b'));
    assert!(app.settle(SETTLE));

    let dashboard = app.dashboard().expect("dashboard screen");
    assert_eq!(dashboard.state().active_tab, Tab::Positions);
    assert_eq!(dashboard.positions().len(), 2);
    assert_eq!(positions_calls(source.calls()), before + 1);
}

#[test]
fn test_failed_load_keeps_dashboard_usable() {
    let runtime = Runtime::new().unwrap();
    let source = trending_source();
    source.fail_with(503, "indexer offline");
    let mut app = app(&runtime, source);
    assert!(app.settle(SETTLE));

    let dashboard = app.dashboard().unwrap();
    assert!(dashboard.error().is_some());
    assert!(!dashboard.is_loading());
    assert!(dashboard.visible_atoms().is_empty());
}

#[test]
fn test_render_shows_tabs_and_rows() {
    let runtime = Runtime::new().unwrap();
    let mut app = app(&runtime, trending_source());
    assert!(app.settle(SETTLE));

    let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();

    let text: String = terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(text.contains("Top"));
    assert!(text.contains("Trending"));
    assert!(text.contains("Large"));
    assert!(text.contains("Middle"));
}
