//! Base classification and accuracy accounting
//!
//! Each language's scorer output is compared with its gold annotation.
//! Classification of one language is pure; accuracy figures and error
//! evidence are folded serially by the `Accumulator`.
//!
//! Gold labels only count when they are one of the comparable bases and the
//! language covers enough of the gating concept subset. Otherwise the gold
//! label is downgraded to "unknown" and the language contributes an output
//! record but no accuracy sample.

mod accumulator;
mod base_classifier;

pub use accumulator::{format_rate, AccuracySummary, Accumulator, AnalysisReport, ErrorGroup};
pub use base_classifier::{
    BaseClassifier, Classification, Comparison, CoverageStats, ErrorEntry, EvidenceRow,
};
