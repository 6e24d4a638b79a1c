//! numeralbank - numeral base classification from colexifications
//!
//! Infers whether a language counts in fives, tens, twenties or twos by
//! checking which number words are contained in others ("one" inside
//! "six" suggests a quinary system), then compares the prediction with the
//! base annotated in the source data.

pub mod alignment;
pub mod classifier;
pub mod cli;
pub mod concepts;
pub mod config;
pub mod detectors;
pub mod labels;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod relations;
pub mod reporters;
pub mod scoring;
pub mod wordlist;
