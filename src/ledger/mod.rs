//! Score ledger: per-round, per-player raw deltas.
//!
//! ## Shape
//!
//! The ledger is a list of rounds (rows). Every row holds one cell per
//! roster column. Columns are added and removed for all rows at once, so
//! readers never see a ragged ledger.
//!
//! ## Totals
//!
//! Totals are never stored. `totals` recomputes them from the rows with
//! floor-at-zero accumulation on every read.
//!
//! ## Snapshots
//!
//! Rows are `im` persistent vectors, so `snapshot` is O(1) and the
//! presentation layer can hold on to it while play continues.

pub mod table;
pub mod totals;

pub use table::{LedgerSnapshot, Round, ScoreLedger};
pub use totals::floored_totals;
