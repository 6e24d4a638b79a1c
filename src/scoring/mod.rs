//! Base system scoring
//!
//! Picks the best base system for a language from its per-system scores.
//!
//! # Decision Rules
//!
//! ```text
//! ranked      = systems by score descending, ties by system name ascending
//! best        = ranked[0] if score(ranked[0]) >= best_system_min else "Unknown"
//! mixed       = [canonical(s) for s in ranked if score(s) > mixed_system_min]
//! canonical   = CanonicalLabelMap[best]
//! ```
//!
//! Both thresholds default to 0.05.
//!
//! # Example
//!
//! ```text
//! Fiver:0.30 Tener:0.90 Twentier:0.50 Twoer:0.02
//!   best      = Tener (decimal)
//!   mixed     = [decimal, vigesimal, quinary]
//! ```

mod base_scorer;

pub use base_scorer::{rank_systems, score_summary, BaseSystemScorer, ScorerOutput};
