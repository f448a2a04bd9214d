use serde::Serialize;

/// Coarse trust tier derived from an atom's signal (market cap)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn from_signal(signal: f64) -> Self {
        if signal > 1000.0 {
            Confidence::High
        } else if signal > 100.0 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_are_exclusive() {
        assert_eq!(Confidence::from_signal(1000.01), Confidence::High);
        assert_eq!(Confidence::from_signal(1000.0), Confidence::Medium);
        assert_eq!(Confidence::from_signal(100.0), Confidence::Low);
        assert_eq!(Confidence::from_signal(0.0), Confidence::Low);
    }
}
