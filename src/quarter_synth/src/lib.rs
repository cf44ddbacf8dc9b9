//! Quarter Synth - synthetic per-quarter breakdowns of per-game basketball stats.
//!
//! Splits each game total into four quarter values that reproduce the total
//! exactly, keep made <= attempts in every quarter, and derive per-quarter
//! points from the allocated makes. Python bindings are available behind the
//! `python` feature.

pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod paired;
pub mod points;
pub mod record;
pub mod split;
pub mod stats;
pub mod synth;
pub mod table;

#[cfg(feature = "python")]
mod python;

pub use config::SynthConfig;
pub use constants::{NUM_QUARTERS, QUARTERS, REQUIRED_COLUMNS};
pub use error::{Result, SynthError};
pub use game::GameRow;
pub use paired::{shooting_pct, split_attempts_and_made, split_quarters, PairedSplit, QuarterSplit};
pub use points::{points, quarter_points, QuarterPoints};
pub use record::{records_to_table, QuarterRecord, SideQuarters, StatQuarters};
pub use split::{apportion, proportions, split_total, SplitMethod};
pub use stats::{Side, StatSpec, SPLIT_STATS};
pub use synth::{synthesize_quarters, QuarterSynthesizer};
pub use table::{parse_count, Table};
