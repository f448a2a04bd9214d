use crate::error::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

static WALLET_ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0[xX][0-9a-fA-F]{40}$").expect("valid address pattern"));

/// Check if string is a `0x`-prefixed 40 hex digit wallet address (case-insensitive)
pub fn is_wallet_address(s: &str) -> bool {
    WALLET_ADDRESS.is_match(s)
}

/// Validate explorer input before any positions lookup is issued.
///
/// Surrounding whitespace is ignored; the trimmed address is returned.
pub fn validate_address(input: &str) -> Result<&str, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    if !is_wallet_address(trimmed) {
        return Err(ValidationError::Malformed(trimmed.to_string()));
    }
    Ok(trimmed)
}

/// Abbreviate an address for display: `0x1234...abcd`
pub fn short_address(address: &str) -> String {
    if address.len() <= 10 || !address.is_ascii() {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}
