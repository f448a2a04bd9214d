//! Assertions shared by engine and CLI tests.

use anyhow::{Context, Result};
use atomscope_types::Atom;
use serde_json::Value;

pub fn ids(atoms: &[Atom]) -> Vec<String> {
    atoms.iter().map(|a| a.id.to_string()).collect()
}

pub fn market_caps(atoms: &[Atom]) -> Vec<f64> {
    atoms.iter().map(Atom::market_cap).collect()
}

/// Assert that a JSON list output holds `expected` rows under `key`.
pub fn assert_row_count(json: &Value, key: &str, expected: usize) -> Result<()> {
    let rows = json[key]
        .as_array()
        .with_context(|| format!("Expected '{}' array in JSON", key))?;

    if rows.len() != expected {
        anyhow::bail!("Expected {} {}, got {}", expected, key, rows.len());
    }

    Ok(())
}

/// Assert that the `id` fields of a JSON list appear in exactly this order.
pub fn assert_id_order(json: &Value, key: &str, expected: &[&str]) -> Result<()> {
    let rows = json[key]
        .as_array()
        .with_context(|| format!("Expected '{}' array in JSON", key))?;

    let actual: Vec<String> = rows
        .iter()
        .map(|row| match &row["id"] {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect();

    if actual != expected {
        anyhow::bail!("Expected order {:?}, got {:?}", expected, actual);
    }

    Ok(())
}
