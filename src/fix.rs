//! Fix runner: rewrites import blocks into canonical form.
//!
//! For each matched file the canonical ordering is rendered and spliced
//! over the byte range from the first to the last import statement.
//! There is no partial fix: either the whole block is replaced or the
//! file is left alone. Statement text itself is never rewritten, only
//! reordered and respaced.

use crate::check::check;
use crate::config::Effective;
use crate::extract::extract_imports;
use crate::lint::collect_targets;
use crate::pipeline::{build, resolve_groups, ExternalGroupPolicy};
use crate::registry::PatternRegistry;
use crate::render::render;
use crate::utils::display_path;
use rayon::prelude::*;
use std::fs;

pub struct FixResult {
    pub file: String,
    pub changed: bool,
    pub preview: Option<String>,
    pub original: Option<String>,
}

/// Rewrite import blocks matched by the effective patterns.
///
/// A file changes when its block fails the combined order check or any
/// group boundary is not separated by exactly one blank line. When
/// `write` is false the rewritten content is returned as a preview (and
/// the original alongside it when `capture_old` is set, for diffs).
pub fn run_fix(eff: &Effective, write: bool, capture_old: bool) -> Vec<FixResult> {
    let registry = PatternRegistry::new();
    let resolved = resolve_groups(&eff.groups, ExternalGroupPolicy::None);
    let targets = collect_targets(&eff.repo_root, &eff.patterns);

    let mut results: Vec<FixResult> = targets
        .par_iter()
        .map(|path| {
            let file = display_path(&eff.repo_root, path);
            let unchanged = |file: String| FixResult {
                file,
                changed: false,
                preview: None,
                original: None,
            };
            let data = match fs::read_to_string(path) {
                Ok(s) => s,
                Err(_) => return unchanged(file),
            };
            let block = extract_imports(&data);
            if block.disabled || block.imports.len() <= 1 {
                return unchanged(file);
            }
            let canonical = build(&block.imports, &resolved, &registry);
            let report = check(&data, &block.imports, &canonical, &resolved, &registry);
            if report.sorted_ok && report.spacing_violations.is_empty() {
                return unchanged(file);
            }

            let first = &block.imports[0];
            let last = &block.imports[block.imports.len() - 1];
            let mut content = String::with_capacity(data.len());
            content.push_str(&data[..first.span.0]);
            content.push_str(&render(&canonical));
            content.push_str(&data[last.span.1..]);

            let changed = content != data;
            if changed && write {
                let _ = fs::write(path, &content);
                FixResult {
                    file,
                    changed,
                    preview: None,
                    original: if capture_old { Some(data) } else { None },
                }
            } else {
                FixResult {
                    file,
                    changed,
                    preview: if changed { Some(content) } else { None },
                    original: if capture_old { Some(data) } else { None },
                }
            }
        })
        .collect();

    results.sort_by(|a, b| a.file.cmp(&b.file));
    results
}
