//! Fills a small grid and prints the result.
//!
//! Run with `RUST_LOG=debug` to watch the propagation and search phases.

use fillword_core::{Layout, LayoutError, Vocabulary};

fn main() -> Result<(), LayoutError> {
    env_logger::init();

    let layout: Layout = "
        ______
        #_##_#
        #_##_#
        #_____
        #_##_#
        #_##_#
    "
    .parse()?;
    let vocab: Vocabulary = [
        "STREET", "TALKED", "ESCAPE", "KEBAB", "SEVEN", "THREE", "PUZZLE",
        "ANSWER",
    ]
    .into_iter()
    .collect();

    match fillword_solver::solve(&layout, &vocab) {
        Some(assignment) => print!("{}", assignment.render(&layout, &vocab)),
        None => println!("No solution."),
    }
    Ok(())
}
