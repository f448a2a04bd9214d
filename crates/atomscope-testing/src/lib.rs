//! Testing infrastructure for atomscope tests.
//!
//! - `fixtures`: atom, position and history builders
//! - `assertions`: ordering and JSON shape checks
//! - `world`: isolated config/data directories for CLI runs

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use assertions::{assert_id_order, assert_row_count};
pub use fixtures::AtomBuilder;
pub use world::{CliResult, TestWorld};
