use super::atom::parse_timestamp_millis;
use crate::numeric::{RawNumber, to_number};
use serde::{Deserialize, Serialize};

/// One sample of `GET /atoms/:id/history`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub timestamp: String,
    #[serde(default)]
    pub signal_value: Option<RawNumber>,
    #[serde(default)]
    pub share_price: Option<RawNumber>,
}

impl HistoryPoint {
    pub fn timestamp_millis(&self) -> Option<i64> {
        parse_timestamp_millis(&self.timestamp)
    }

    pub fn signal_value(&self) -> f64 {
        to_number(self.signal_value.as_ref())
    }

    pub fn share_price(&self) -> f64 {
        to_number(self.share_price.as_ref())
    }
}
