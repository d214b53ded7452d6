//! Order-compliance checker.
//!
//! Compares the physical import sequence against the canonical ordering
//! and answers three independent questions: is the combined order
//! correct, is the group sequence correct, and is inter-group spacing
//! correct. Hosts may report any subset; all three derive from the same
//! canonical ordering and classification pass.

use crate::classify::is_external;
use crate::models::group::GroupRule;
use crate::models::import::ImportRecord;
use crate::pipeline::{classify_import, CanonicalOrdering};
use crate::registry::PatternRegistry;

/// Result of one compliance pass over a file's import block.
pub struct ComplianceReport {
    /// The actual sequence equals the canonical one, record for record.
    pub sorted_ok: bool,
    /// Group ranks never decrease left to right and every group
    /// transition is separated by at least one blank line.
    pub grouped_ok: bool,
    /// Right-hand import of every adjacent different-group pair that is
    /// not separated by exactly one blank line.
    pub spacing_violations: Vec<ImportRecord>,
}

/// Rank used by the grouping check. Matched imports rank by resolved
/// group position; unmatched externals rank before every configured
/// group, unmatched relative imports after all of them.
fn group_rank(membership: Option<usize>, imp: &ImportRecord) -> i64 {
    match membership {
        Some(idx) => idx as i64,
        None if is_external(&imp.module_path) => -1,
        None => i64::MAX,
    }
}

/// Check `imports` (in physical order) against `canonical`.
///
/// `source` is the file text; spacing is judged on the literal bytes
/// between adjacent statements, where exactly two newlines mean exactly
/// one blank line. Record identity is `sequence_index`: two distinct
/// statements importing the same module path are never interchangeable.
pub fn check(
    source: &str,
    imports: &[ImportRecord],
    canonical: &CanonicalOrdering,
    resolved: &[GroupRule],
    registry: &PatternRegistry,
) -> ComplianceReport {
    let flat: Vec<&ImportRecord> = canonical.flatten().collect();
    let sorted_ok = flat.len() == imports.len()
        && imports
            .iter()
            .zip(flat.iter())
            .all(|(actual, wanted)| actual.sequence_index == wanted.sequence_index);

    let membership: Vec<Option<usize>> = imports
        .iter()
        .map(|imp| classify_import(&imp.module_path, resolved, registry))
        .collect();

    let mut grouped_ok = true;
    for i in 1..imports.len() {
        let prev_rank = group_rank(membership[i - 1], &imports[i - 1]);
        let curr_rank = group_rank(membership[i], &imports[i]);
        if prev_rank > curr_rank {
            grouped_ok = false;
            break;
        }
        if membership[i - 1] != membership[i] {
            let has_blank_line = imports[i - 1].end_line + 1 < imports[i].line;
            if !has_blank_line {
                grouped_ok = false;
                break;
            }
        }
    }

    let mut spacing_violations = Vec::new();
    for i in 1..imports.len() {
        if membership[i - 1] == membership[i] {
            continue;
        }
        let between = &source[imports[i - 1].span.1..imports[i].span.0];
        if between.matches('\n').count() != 2 {
            spacing_violations.push(imports[i].clone());
        }
    }

    ComplianceReport {
        sorted_ok,
        grouped_ok,
        spacing_violations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::group::SortKey;
    use crate::pipeline::{build, resolve_groups, ExternalGroupPolicy};

    fn rule(pattern: &str, sort_key: SortKey, priority: Option<f64>) -> GroupRule {
        GroupRule {
            pattern: pattern.to_string(),
            sort_key,
            priority,
        }
    }

    /// Lay statements out as a source string, with `blanks[i]` blank
    /// lines before statement i+1, and build matching records.
    fn layout(statements: &[&str], paths: &[&str], blanks: &[usize]) -> (String, Vec<ImportRecord>) {
        let mut source = String::new();
        let mut records = Vec::new();
        let mut line = 1;
        for (i, stmt) in statements.iter().enumerate() {
            if i > 0 {
                let n = blanks[i - 1];
                for _ in 0..n {
                    source.push('\n');
                }
                line += n;
            }
            let start = source.len();
            source.push_str(stmt);
            records.push(ImportRecord {
                module_path: paths[i].to_string(),
                full_text: stmt.to_string(),
                sequence_index: i,
                span: (start, source.len()),
                line,
                end_line: line,
            });
            source.push('\n');
            line += 1;
        }
        (source, records)
    }

    #[test]
    fn test_canonical_sequence_reports_clean() {
        let rules = vec![
            rule(r"\.interface\.ts", SortKey::LengthFrom, None),
            rule(r"\.constant\.ts", SortKey::Alphabetical, None),
        ];
        let (source, imports) = layout(
            &[
                "import a from './ab.interface.ts';",
                "import b from './abc.interface.ts';",
                "import c from './a.constant.ts';",
                "import d from './b.constant.ts';",
            ],
            &[
                "./ab.interface.ts",
                "./abc.interface.ts",
                "./a.constant.ts",
                "./b.constant.ts",
            ],
            &[0, 1, 0],
        );
        let resolved = resolve_groups(&rules, ExternalGroupPolicy::None);
        let registry = PatternRegistry::new();
        let canonical = build(&imports, &resolved, &registry);
        let report = check(&source, &imports, &canonical, &resolved, &registry);
        assert!(report.sorted_ok);
        assert!(report.grouped_ok);
        assert!(report.spacing_violations.is_empty());
    }

    #[test]
    fn test_double_blank_line_is_spacing_violation_only() {
        let rules = vec![
            rule(r"\.interface\.ts", SortKey::LengthFrom, None),
            rule(r"\.constant\.ts", SortKey::Alphabetical, None),
        ];
        let (source, imports) = layout(
            &[
                "import a from './ab.interface.ts';",
                "import c from './a.constant.ts';",
            ],
            &["./ab.interface.ts", "./a.constant.ts"],
            &[2],
        );
        let resolved = resolve_groups(&rules, ExternalGroupPolicy::None);
        let registry = PatternRegistry::new();
        let canonical = build(&imports, &resolved, &registry);
        let report = check(&source, &imports, &canonical, &resolved, &registry);
        assert!(report.sorted_ok);
        assert!(report.grouped_ok);
        assert_eq!(report.spacing_violations.len(), 1);
        assert_eq!(report.spacing_violations[0].sequence_index, 1);
    }

    #[test]
    fn test_missing_blank_line_fails_grouping_and_spacing() {
        let rules = vec![
            rule(r"\.interface\.ts", SortKey::LengthFrom, None),
            rule(r"\.constant\.ts", SortKey::Alphabetical, None),
        ];
        let (source, imports) = layout(
            &[
                "import a from './ab.interface.ts';",
                "import c from './a.constant.ts';",
            ],
            &["./ab.interface.ts", "./a.constant.ts"],
            &[0],
        );
        let resolved = resolve_groups(&rules, ExternalGroupPolicy::None);
        let registry = PatternRegistry::new();
        let canonical = build(&imports, &resolved, &registry);
        let report = check(&source, &imports, &canonical, &resolved, &registry);
        assert!(report.sorted_ok);
        assert!(!report.grouped_ok);
        assert_eq!(report.spacing_violations.len(), 1);
    }

    #[test]
    fn test_out_of_group_order_fails_both_order_checks() {
        let rules = vec![
            rule(r"\.interface\.ts", SortKey::LengthFrom, Some(1.0)),
            rule(r"\.constant\.ts", SortKey::Alphabetical, Some(2.0)),
        ];
        let (source, imports) = layout(
            &[
                "import c from './a.constant.ts';",
                "import a from './ab.interface.ts';",
            ],
            &["./a.constant.ts", "./ab.interface.ts"],
            &[1],
        );
        let resolved = resolve_groups(&rules, ExternalGroupPolicy::None);
        let registry = PatternRegistry::new();
        let canonical = build(&imports, &resolved, &registry);
        let report = check(&source, &imports, &canonical, &resolved, &registry);
        assert!(!report.sorted_ok);
        assert!(!report.grouped_ok);
    }

    #[test]
    fn test_within_group_disorder_keeps_grouped_ok() {
        let rules = vec![rule(r"\.constant\.ts", SortKey::Alphabetical, None)];
        let (source, imports) = layout(
            &[
                "import z from './z.constant.ts';",
                "import a from './a.constant.ts';",
            ],
            &["./z.constant.ts", "./a.constant.ts"],
            &[0],
        );
        let resolved = resolve_groups(&rules, ExternalGroupPolicy::None);
        let registry = PatternRegistry::new();
        let canonical = build(&imports, &resolved, &registry);
        let report = check(&source, &imports, &canonical, &resolved, &registry);
        assert!(!report.sorted_ok);
        assert!(report.grouped_ok);
        assert!(report.spacing_violations.is_empty());
    }

    #[test]
    fn test_unmatched_external_after_relative_fails_grouping() {
        // With no matching configured group, externals rank before
        // unmatched relative imports.
        let (source, imports) = layout(
            &["import a from './local';", "import b from 'react';"],
            &["./local", "react"],
            &[1],
        );
        let resolved = resolve_groups(&[], ExternalGroupPolicy::None);
        let registry = PatternRegistry::new();
        let canonical = build(&imports, &resolved, &registry);
        let report = check(&source, &imports, &canonical, &resolved, &registry);
        assert!(!report.grouped_ok);
    }

    #[test]
    fn test_duplicate_module_paths_are_not_interchangeable() {
        let (source, imports) = layout(
            &[
                "import { a } from './mod';",
                "import { b } from './mod';",
            ],
            &["./mod", "./mod"],
            &[0],
        );
        let resolved = resolve_groups(&[], ExternalGroupPolicy::None);
        let registry = PatternRegistry::new();
        let canonical = build(&imports, &resolved, &registry);
        let report = check(&source, &imports, &canonical, &resolved, &registry);
        // Equal sort keys: the stable pipeline keeps input order, so the
        // physical sequence is canonical as-is.
        assert!(report.sorted_ok);
    }
}
