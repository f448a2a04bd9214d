mod atom;
mod history;
mod ident;
mod position;
mod sync;

pub use atom::{Atom, AtomDetail, GrowthDirection, Trend, Triple, TripleTerm};
pub use history::HistoryPoint;
pub use ident::Ident;
pub use position::{AtomHolding, Position, PositionEntity, TermLabel, TripleHolding};
pub use sync::{SyncCoverage, SyncMode, SyncReport, SyncStats};
