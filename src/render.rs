//! Text reconstruction for the canonical ordering.
//!
//! Statements keep their original text byte for byte; the engine only
//! reorders and respaces. Runs are joined with exactly one blank line,
//! statements inside a run with a single newline, and the block carries
//! no leading or trailing blank lines.

use crate::pipeline::CanonicalOrdering;

/// Render the canonical ordering as the replacement text for the span
/// from the first to the last import statement.
pub fn render(canonical: &CanonicalOrdering) -> String {
    canonical
        .runs
        .iter()
        .map(|run| {
            run.imports
                .iter()
                .map(|imp| imp.full_text.as_str())
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
