pub mod address;
pub mod domain;
pub mod error;
pub mod numeric;
pub mod query;
mod util;

pub use address::{is_wallet_address, short_address, validate_address};
pub use domain::*;
pub use error::{ParseEnumError, ValidationError};
pub use numeric::{RawNumber, parse_number, to_number};
pub use query::*;
pub use util::*;
