use crate::types::Language;
use anyhow::{Context, Result};
use atomscope_client::Network;
use atomscope_types::Limit;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the config file path based on priority:
/// 1. Explicit `--config` path (with tilde expansion)
/// 2. `ATOMSCOPE_CONFIG` environment variable
/// 3. `<config_dir>/atomscope/config.toml`
/// 4. `~/.atomscope/config.toml`
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(&path.to_string_lossy()));
    }

    if let Ok(env_path) = std::env::var("ATOMSCOPE_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("atomscope").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".atomscope").join("config.toml"));
    }

    anyhow::bail!("Could not determine config path: no HOME or config directory found")
}

/// Directory for the TUI log file
pub fn resolve_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("atomscope"))
        .unwrap_or_else(|| std::env::temp_dir().join("atomscope"))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WalletConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub network: Network,
    pub language: Language,
    pub default_limit: Limit,
    pub fetch_multiplier: usize,
    pub server_filtering: bool,
    pub request_timeout_secs: u64,
    pub wallet: WalletConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3000".to_string(),
            network: Network::Mainnet,
            language: Language::Fr,
            default_limit: Limit::default(),
            fetch_multiplier: 2,
            server_filtering: false,
            request_timeout_secs: 15,
            wallet: WalletConfig::default(),
        }
    }
}

impl Config {
    /// Load from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Chain id reported by the wallet; the network's own id when unset
    pub fn wallet_chain_id(&self) -> u64 {
        self.wallet.chain_id.unwrap_or(self.network.chain_id())
    }
}
