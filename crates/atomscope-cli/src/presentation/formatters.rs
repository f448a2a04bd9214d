use chrono::{DateTime, Utc};

/// Compact magnitude formatting: `1.23K`, `4.50M`, more decimals for small
/// values. Zero and non-finite values render as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude < 0.01 {
        format!("{:.6}", value)
    } else if magnitude < 1.0 {
        format!("{:.4}", value)
    } else if magnitude < 1_000.0 {
        format!("{:.2}", value)
    } else if magnitude < 1_000_000.0 {
        format!("{:.2}K", value / 1_000.0)
    } else {
        format!("{:.2}M", value / 1_000_000.0)
    }
}

/// Signed percentage with two decimals; `N/A` when unknown
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => {
            let sign = if v >= 0.0 { '+' } else { '-' };
            format!("{}{:.2}%", sign, v.abs())
        }
        _ => "N/A".to_string(),
    }
}

pub fn format_date(millis: Option<i64>) -> String {
    millis
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn format_timestamp(secs: f64) -> String {
    DateTime::<Utc>::from_timestamp(secs as i64, 0)
        .map(|dt| dt.format("%m-%d %H:%M").to_string())
        .unwrap_or_default()
}
