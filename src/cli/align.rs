//! Align command - inspect the shared stem of two forms

use crate::alignment::{sw_align, AlignmentParams};
use crate::normalize::simple_chars;
use anyhow::Result;
use console::style;

/// Run the align command
pub fn run(a: &str, b: &str) -> Result<()> {
    let (a, b) = (simple_chars(a), simple_chars(b));
    let alignment = sw_align(&a, &b, &AlignmentParams::default());

    println!("{}", alignment.render_a());
    println!("{}", alignment.render_b());
    println!(
        "Score: {}  Shared stem: {}",
        style(alignment.score).cyan(),
        style(alignment.first_matching_run()).green().bold()
    );
    Ok(())
}
