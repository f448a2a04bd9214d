use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Opaque backend identifier (atom id, term id, creator id).
///
/// The API emits these as JSON numbers or strings; both are held as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Ident(String);

impl Ident {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Total order: integer ids first, numerically, then the rest lexically
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        match (self.0.parse::<u128>(), other.0.parse::<u128>()) {
            (Ok(a), Ok(b)) => a.cmp(&b),
            (Ok(_), Err(_)) => Ordering::Less,
            (Err(_), Ok(_)) => Ordering::Greater,
            (Err(_), Err(_)) => self.0.cmp(&other.0),
        }
    }
}

impl<'de> Deserialize<'de> for Ident {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(serde_json::Number),
            Text(String),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Number(n) => Ident(n.to_string()),
            Repr::Text(s) => Ident(s),
        })
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Ident {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Ident {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Ident {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_and_string_ids() {
        let a: Ident = serde_json::from_str("42").unwrap();
        let b: Ident = serde_json::from_str("\"0xabc\"").unwrap();
        assert_eq!(a.as_str(), "42");
        assert_eq!(b.as_str(), "0xabc");
    }

    #[test]
    fn test_natural_cmp() {
        assert_eq!(Ident::from("9").natural_cmp(&Ident::from("10")), Ordering::Less);
        assert_eq!(Ident::from("b").natural_cmp(&Ident::from("a")), Ordering::Greater);
    }

    #[test]
    fn test_mixed_ids_order_transitively() {
        let mut ids: Vec<Ident> = ["1a", "10", "0xff", "9"].into_iter().map(Ident::from).collect();
        ids.sort_by(Ident::natural_cmp);
        let ordered: Vec<&str> = ids.iter().map(Ident::as_str).collect();
        assert_eq!(ordered, ["9", "10", "0xff", "1a"]);

        let (nine, ten, mixed) = (Ident::from("9"), Ident::from("10"), Ident::from("1a"));
        assert_eq!(nine.natural_cmp(&ten), Ordering::Less);
        assert_eq!(ten.natural_cmp(&mixed), Ordering::Less);
        assert_eq!(nine.natural_cmp(&mixed), Ordering::Less);
    }
}
