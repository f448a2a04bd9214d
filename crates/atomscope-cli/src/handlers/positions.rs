use super::backend_error;
use crate::context::ExecutionContext;
use crate::presentation::{CommandResult, ConsoleRenderer, PositionListViewModel, PositionRow};
use anyhow::Result;
use atomscope_client::AtomSource;
use atomscope_types::validate_address;

/// The explicit address wins; otherwise the configured wallet
pub fn resolve_address(explicit: Option<&str>, configured: Option<&str>) -> Result<String> {
    let candidate = match (explicit, configured) {
        (Some(address), _) => address,
        (None, Some(address)) => address,
        (None, None) => anyhow::bail!(
            "No wallet address given and none configured (set [wallet] address in config.toml)"
        ),
    };
    Ok(validate_address(candidate)?.to_string())
}

pub async fn load_positions(
    source: &dyn AtomSource,
    address: &str,
    limit: usize,
    offset: usize,
) -> Result<PositionListViewModel> {
    let positions = source
        .positions(address, limit, offset)
        .await
        .map_err(backend_error)?;
    Ok(PositionListViewModel {
        address: address.to_string(),
        positions: PositionRow::rows(&positions),
    })
}

pub fn handle(
    ctx: &ExecutionContext,
    address: Option<&str>,
    limit: usize,
    offset: usize,
) -> Result<()> {
    let address = resolve_address(address, ctx.config.wallet.address.as_deref())?;
    let source = ctx.source();
    let view_model = ctx.block_on(load_positions(source.as_ref(), &address, limit, offset))?;
    ConsoleRenderer::new(ctx.format, ctx.lang).render(CommandResult::new(view_model))
}

#[cfg(test)]
mod tests {
    use super::*;
    use atomscope_client::{MockCall, MockSource};
    use atomscope_testing::fixtures::{WALLET, sample_positions};

    #[test]
    fn test_resolve_address_priority() {
        let other = "0x1111111111111111111111111111111111111111";
        assert_eq!(resolve_address(Some(other), Some(WALLET)).unwrap(), other);
        assert_eq!(resolve_address(None, Some(WALLET)).unwrap(), WALLET);
        assert!(resolve_address(None, None).is_err());
    }

    #[test]
    fn test_resolve_address_rejects_malformed() {
        let err = resolve_address(Some("0x123"), None).unwrap_err();
        assert_eq!(err.to_string(), "Invalid wallet address: 0x123");
    }

    #[test]
    fn test_positions_rows() {
        let source = MockSource::new().with_positions(WALLET, sample_positions());
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();

        let vm = runtime
            .block_on(load_positions(&source, WALLET, 50, 0))
            .unwrap();

        assert_eq!(vm.positions.len(), 2);
        assert_eq!(vm.positions[0].kind, "atom");
        assert_eq!(vm.positions[0].label, "Ethereum");
        assert_eq!(vm.positions[0].term_id.as_deref(), Some("1"));
        assert_eq!(vm.positions[1].kind, "triple");
        assert_eq!(
            source.calls(),
            vec![MockCall::Positions {
                address: WALLET.to_string(),
                limit: 50,
                offset: 0
            }]
        );
    }
}
