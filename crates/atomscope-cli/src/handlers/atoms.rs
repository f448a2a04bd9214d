//! `top`, `trending` and `search`: one fetch, then the list projection.

use super::backend_error;
use crate::args::BoundArgs;
use crate::context::ExecutionContext;
use crate::presentation::{AtomListViewModel, AtomRow, CommandResult, ConsoleRenderer, ListHeading};
use anyhow::Result;
use atomscope_client::AtomSource;
use atomscope_engine::{FetchStrategy, ListView, SortMode};
use atomscope_types::{FilterSpec, Limit, SortKey, SortOrder, TrendingPeriod};

pub struct TopQuery {
    pub limit: Limit,
    pub sort_by: SortKey,
    pub order: SortOrder,
    pub bounds: BoundArgs,
}

pub async fn load_top(
    source: &dyn AtomSource,
    strategy: &dyn FetchStrategy,
    query: &TopQuery,
) -> Result<AtomListViewModel> {
    let spec = query
        .bounds
        .apply(FilterSpec::new().sort(query.sort_by, query.order));
    let mode = SortMode::Ranked {
        key: query.sort_by,
        order: query.order,
    };

    let fetch_size = strategy.fetch_size(query.limit.get());
    tracing::debug!(fetch_size, limit = query.limit.get(), "fetching top atoms");
    let raw = source
        .list_atoms(fetch_size, strategy.server_filters(&spec))
        .await
        .map_err(backend_error)?;
    let fetched = raw.len();

    let mut view = ListView::new();
    view.replace_raw(raw, strategy, &spec, &mode, query.limit.get());

    Ok(AtomListViewModel {
        heading: ListHeading::Top {
            sort_by: query.sort_by,
            order: query.order,
        },
        fetched,
        atoms: AtomRow::rows(view.visible(), None),
        filters: spec,
    })
}

pub async fn load_trending(
    source: &dyn AtomSource,
    strategy: &dyn FetchStrategy,
    period: TrendingPeriod,
    limit: Limit,
    bounds: &BoundArgs,
) -> Result<AtomListViewModel> {
    let spec = bounds.apply(FilterSpec::new());
    let mode = SortMode::Trending(period);

    let fetch_size = strategy.fetch_size(limit.get());
    tracing::debug!(fetch_size, %period, "fetching trending atoms");
    let raw = source
        .trending(period, fetch_size, strategy.server_filters(&spec))
        .await
        .map_err(backend_error)?;
    let fetched = raw.len();

    let mut view = ListView::new();
    view.replace_raw(raw, strategy, &spec, &mode, limit.get());

    Ok(AtomListViewModel {
        heading: ListHeading::Trending { period },
        fetched,
        atoms: AtomRow::rows(view.visible(), Some(period)),
        filters: spec,
    })
}

/// Search results are shown in server order, without range filters
pub async fn load_search(
    source: &dyn AtomSource,
    query: &str,
    limit: usize,
) -> Result<AtomListViewModel> {
    let query = query.trim();
    if query.is_empty() {
        anyhow::bail!("Search query is empty");
    }

    let atoms = source.search(query, limit).await.map_err(backend_error)?;
    Ok(AtomListViewModel {
        heading: ListHeading::Search {
            query: query.to_string(),
        },
        fetched: atoms.len(),
        atoms: AtomRow::rows(&atoms, None),
        filters: FilterSpec::new(),
    })
}

pub fn handle_top(ctx: &ExecutionContext, query: TopQuery) -> Result<()> {
    let source = ctx.source();
    let strategy = ctx.fetch_strategy();
    let view_model = ctx.block_on(load_top(source.as_ref(), strategy.as_ref(), &query))?;
    render(ctx, view_model)
}

pub fn handle_trending(
    ctx: &ExecutionContext,
    period: TrendingPeriod,
    limit: Limit,
    bounds: BoundArgs,
) -> Result<()> {
    let source = ctx.source();
    let strategy = ctx.fetch_strategy();
    let view_model = ctx.block_on(load_trending(
        source.as_ref(),
        strategy.as_ref(),
        period,
        limit,
        &bounds,
    ))?;
    render(ctx, view_model)
}

pub fn handle_search(ctx: &ExecutionContext, query: &str, limit: usize) -> Result<()> {
    let source = ctx.source();
    let view_model = ctx.block_on(load_search(source.as_ref(), query, limit))?;
    render(ctx, view_model)
}

fn render(ctx: &ExecutionContext, view_model: AtomListViewModel) -> Result<()> {
    let renderer = ConsoleRenderer::new(ctx.format, ctx.lang);
    renderer.render(CommandResult::new(view_model))
}

#[cfg(test)]
mod tests {
    use super::*;
    use atomscope_client::{MockCall, MockSource};
    use atomscope_engine::{OverFetch, ServerFiltered};
    use atomscope_testing::fixtures::{AtomBuilder, atoms_with_caps, sample_atoms};
    use atomscope_types::FilterBound;

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(future)
    }

    fn top(limit: usize, bounds: BoundArgs) -> TopQuery {
        TopQuery {
            limit: Limit::new(limit).unwrap(),
            sort_by: SortKey::MarketCap,
            order: SortOrder::Desc,
            bounds,
        }
    }

    #[test]
    fn test_top_over_fetches_and_filters() {
        let source = MockSource::new().with_atoms(atoms_with_caps(&[5.0, 500.0, 50.0, 5000.0]));
        let bounds = BoundArgs {
            min_market_cap: Some("10".to_string()),
            ..BoundArgs::default()
        };

        let vm = block_on(load_top(&source, &OverFetch::default(), &top(10, bounds))).unwrap();

        assert_eq!(source.calls(), vec![MockCall::ListAtoms {
                limit: 20,
                filters: None
            }]);
        assert_eq!(vm.fetched, 4);
        let caps: Vec<f64> = vm.atoms.iter().map(|a| a.market_cap).collect();
        assert_eq!(caps, vec![5000.0, 500.0, 50.0]);
        assert_eq!(vm.filters.min_market_cap, "10");
    }

    #[test]
    fn test_top_server_filtered_requests_exact_limit() {
        let source = MockSource::new().with_atoms(sample_atoms());
        let vm = block_on(load_top(&source, &ServerFiltered, &top(25, BoundArgs::default()))).unwrap();
        assert_eq!(
            source.calls(),
            vec![MockCall::ListAtoms {
                limit: 25,
                filters: Some(FilterSpec::new())
            }]
        );
        assert_eq!(vm.atoms[0].label, "Ethereum");
    }

    #[test]
    fn test_server_filtered_forwards_bounds() {
        let source = MockSource::new().with_atoms(atoms_with_caps(&[5.0, 500.0]));
        let bounds = BoundArgs {
            min_market_cap: Some("100".to_string()),
            ..BoundArgs::default()
        };

        let vm = block_on(load_top(&source, &ServerFiltered, &top(10, bounds))).unwrap();

        let caps: Vec<f64> = vm.atoms.iter().map(|a| a.market_cap).collect();
        assert_eq!(caps, vec![500.0]);
        assert_eq!(
            source.calls(),
            vec![MockCall::ListAtoms {
                limit: 10,
                filters: Some(FilterSpec::new().with_bound(FilterBound::MinMarketCap, "100"))
            }]
        );
    }

    #[test]
    fn test_trending_ranks_by_period_growth() {
        let source = MockSource::new().with_trending(vec![
            AtomBuilder::new("1").label("Slow").growth(TrendingPeriod::H24, 2.0).build(),
            AtomBuilder::new("2").label("Fast").growth(TrendingPeriod::H24, 40.0).build(),
            AtomBuilder::new("3").label("Generic").generic_growth(10.0).build(),
        ]);

        let vm = block_on(load_trending(
            &source,
            &OverFetch::default(),
            TrendingPeriod::H24,
            Limit::default(),
            &BoundArgs::default(),
        ))
        .unwrap();

        let labels: Vec<&str> = vm.atoms.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["Fast", "Generic", "Slow"]);
        assert_eq!(vm.atoms[1].growth, Some(10.0));
        assert_eq!(
            source.calls(),
            vec![MockCall::Trending {
                period: TrendingPeriod::H24,
                limit: 20,
                filters: None
            }]
        );
    }

    #[test]
    fn test_search_rejects_blank_query() {
        let source = MockSource::new();
        let err = block_on(load_search(&source, "   ", 20)).unwrap_err();
        assert_eq!(err.to_string(), "Search query is empty");
        assert!(source.calls().is_empty());
    }

    #[test]
    fn test_backend_failure_uses_banner_text() {
        let source = MockSource::new();
        source.fail_with(503, r#"{"error": "indexer offline"}"#);
        let err = block_on(load_top(&source, &OverFetch::default(), &top(10, BoundArgs::default())))
            .unwrap_err();
        assert_eq!(err.to_string(), "server returned 503: indexer offline");
    }
}
