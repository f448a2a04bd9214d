//! The wallet capability.
//!
//! The dashboard never reaches for a global wallet; a `Wallet` is handed to
//! it explicitly. The CLI's [`AddressWallet`] "connects" to an address taken
//! from configuration or the command line.

use atomscope_types::{ValidationError, validate_address};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Mainnet => 1155,
            Network::Testnet => 13579,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "Intuition Network",
            Network::Testnet => "Intuition Network Testnet",
        }
    }

    pub fn from_chain_id(chain_id: u64) -> Option<Self> {
        [Network::Mainnet, Network::Testnet]
            .into_iter()
            .find(|n| n.chain_id() == chain_id)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub trait Wallet: Send {
    fn address(&self) -> Option<&str>;

    fn is_connected(&self) -> bool;

    fn chain_id(&self) -> Option<u64>;

    fn connect(&mut self) -> Result<(), ValidationError>;

    fn disconnect(&mut self);
}

/// Wallet backed by a plain address.
#[derive(Debug, Clone, Default)]
pub struct AddressWallet {
    address: Option<String>,
    chain_id: Option<u64>,
    connected: bool,
}

impl AddressWallet {
    /// A disconnected wallet that will connect to `address` when asked
    pub fn new(address: Option<String>, chain_id: Option<u64>) -> Self {
        Self {
            address,
            chain_id,
            connected: false,
        }
    }

    /// Replace the target address and connect to it
    pub fn connect_to(&mut self, address: &str) -> Result<(), ValidationError> {
        let address = validate_address(address)?;
        self.address = Some(address.to_string());
        self.connected = true;
        Ok(())
    }
}

impl Wallet for AddressWallet {
    fn address(&self) -> Option<&str> {
        if self.connected {
            self.address.as_deref()
        } else {
            None
        }
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn chain_id(&self) -> Option<u64> {
        if self.connected { self.chain_id } else { None }
    }

    fn connect(&mut self) -> Result<(), ValidationError> {
        let address = self.address.clone().unwrap_or_default();
        self.connect_to(&address)
    }

    fn disconnect(&mut self) {
        self.connected = false;
    }
}

/// Read-only view of a wallet, for rendering the header badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalletStatus {
    pub connected: bool,
    pub address: Option<String>,
    pub chain_id: Option<u64>,
}

impl WalletStatus {
    pub fn of(wallet: &dyn Wallet) -> Self {
        Self {
            connected: wallet.is_connected(),
            address: wallet.address().map(str::to_string),
            chain_id: wallet.chain_id(),
        }
    }

    /// Connected on a chain other than `expected`. Display-only.
    pub fn wrong_network(&self, expected: Network) -> bool {
        self.connected && self.chain_id.is_some_and(|id| id != expected.chain_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "0xABCDEF1234567890abcdef1234567890ABCDEF12";

    #[test]
    fn test_connect_requires_valid_address() {
        let mut wallet = AddressWallet::new(None, None);
        assert_eq!(wallet.connect(), Err(ValidationError::Empty));
        assert!(!wallet.is_connected());

        let mut wallet = AddressWallet::new(Some("0x123".to_string()), None);
        assert!(matches!(wallet.connect(), Err(ValidationError::Malformed(_))));
    }

    #[test]
    fn test_address_hidden_while_disconnected() {
        let mut wallet = AddressWallet::new(Some(ADDRESS.to_string()), Some(1155));
        assert_eq!(wallet.address(), None);

        wallet.connect().unwrap();
        assert_eq!(wallet.address(), Some(ADDRESS));
        assert_eq!(wallet.chain_id(), Some(1155));

        wallet.disconnect();
        assert_eq!(wallet.address(), None);
        assert_eq!(wallet.chain_id(), None);
    }

    #[test]
    fn test_wrong_network() {
        let mut wallet = AddressWallet::new(Some(ADDRESS.to_string()), Some(13579));
        assert!(!WalletStatus::of(&wallet).wrong_network(Network::Mainnet));

        wallet.connect().unwrap();
        let status = WalletStatus::of(&wallet);
        assert!(status.wrong_network(Network::Mainnet));
        assert!(!status.wrong_network(Network::Testnet));
    }

    #[test]
    fn test_chain_ids() {
        assert_eq!(Network::from_chain_id(1155), Some(Network::Mainnet));
        assert_eq!(Network::from_chain_id(13579), Some(Network::Testnet));
        assert_eq!(Network::from_chain_id(1), None);
    }
}
