//! Base system detection
//!
//! Scores candidate numeral base systems for a language from colexification
//! evidence.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  ColexificationDetector                     │
//! │  - Normalizes every form to ASCII (simple_chars)            │
//! │  - Evaluates each "partial" triple of each system           │
//! │  - Skips triples whose concepts the language lacks          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │              SystemScores (system → ScoreResult)            │
//! │  - score = hits / coverage (0 when coverage is 0)           │
//! │  - colexis: first matching conceptA → conceptB              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let detector = ColexificationDetector::new();
//! let scores = detector.detect(&language, &relations);
//! println!("Fiver: {:.2}", scores["Fiver"].score);
//! ```

mod base;
mod colexification;

pub use base::{MatchMode, ScoreResult, SystemScores};
pub use colexification::{ColexificationDetector, ColexificationOptions};
