use crate::config::Config;
use crate::types::{Language, OutputFormat};
use anyhow::{Context, Result};
use atomscope_client::{AddressWallet, AtomSource, HttpSource};
use atomscope_engine::{FetchStrategy, OverFetch, ServerFiltered};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::{Handle, Runtime};

/// Everything a command needs: effective config, output settings, the async
/// runtime and the data source
pub struct ExecutionContext {
    pub config: Config,
    pub format: OutputFormat,
    pub lang: Language,
    runtime: Runtime,
    source: Arc<dyn AtomSource>,
}

impl ExecutionContext {
    pub fn new(config: Config, format: OutputFormat, lang: Language) -> Result<Self> {
        let source = HttpSource::new(
            &config.api_url,
            Duration::from_secs(config.request_timeout_secs),
        )
        .context("Failed to build HTTP client")?;
        Self::with_source(config, format, lang, Arc::new(source))
    }

    pub fn with_source(
        config: Config,
        format: OutputFormat,
        lang: Language,
        source: Arc<dyn AtomSource>,
    ) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .context("Failed to start async runtime")?;
        Ok(Self {
            config,
            format,
            lang,
            runtime,
            source,
        })
    }

    pub fn source(&self) -> Arc<dyn AtomSource> {
        self.source.clone()
    }

    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    pub fn handle(&self) -> Handle {
        self.runtime.handle().clone()
    }

    pub fn fetch_strategy(&self) -> Arc<dyn FetchStrategy> {
        strategy_for(&self.config)
    }

    /// Wallet seeded from `[wallet]` in the config; disconnected when no
    /// address is configured
    pub fn wallet(&self) -> AddressWallet {
        AddressWallet::new(
            self.config.wallet.address.clone(),
            Some(self.config.wallet_chain_id()),
        )
    }
}

pub fn strategy_for(config: &Config) -> Arc<dyn FetchStrategy> {
    if config.server_filtering {
        Arc::new(ServerFiltered)
    } else {
        Arc::new(OverFetch {
            multiplier: config.fetch_multiplier,
        })
    }
}
