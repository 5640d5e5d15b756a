//! Trust and recommendation engine
//!
//! Everything in here is a pure, synchronous function over a borrowed snapshot
//! of the catalogue. Nothing mutates its input or touches I/O, so callers may
//! invoke these concurrently without coordination.

pub mod classifier;
pub mod discover;
pub mod recommendations;
pub mod stats;
pub mod trust;

pub use classifier::{badges, is_hidden_gem, is_trending, BadgeRules};
pub use recommendations::{rank_score, recommend, sort_for_students, student_rank_score};
pub use stats::aggregate;
pub use trust::trust_score;
