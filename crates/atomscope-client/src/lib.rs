//! Backend access for atomscope.
//!
//! - [`AtomSource`]: the REST operations the dashboard consumes
//! - [`HttpSource`]: production implementation over `reqwest`
//! - [`MockSource`]: canned responses for tests and offline runs
//! - [`Wallet`]: the injected wallet capability

pub mod error;
mod http;
mod mock;
mod source;
pub mod wallet;

pub use error::{Error, Result};
pub use http::HttpSource;
pub use mock::{MockCall, MockSource};
pub use source::{AtomSource, DEFAULT_SEARCH_LIMIT};
pub use wallet::{AddressWallet, Network, Wallet, WalletStatus};
