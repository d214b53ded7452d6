//! Lint runner for import ordering, grouping, and spacing checks.
//!
//! Produces a `LintResult` with issues and a summary. Each enabled check
//! reports independently: combined order (`import-sort`), group sequence
//! (`import-groups`), and inter-group spacing (`import-group-spacing`).
//! Severity comes from `[lint].level`; `level = "error"` affects the
//! error count and typical CI exit behavior upstream.

use crate::check::check;
use crate::config::Effective;
use crate::extract::extract_imports;
use crate::models::{Issue, LintResult, Summary};
use crate::pipeline::{build, resolve_groups, ExternalGroupPolicy};
use crate::registry::PatternRegistry;
use crate::utils::display_path;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const RULE_SORT: &str = "import-sort";
pub const RULE_GROUPS: &str = "import-groups";
pub const RULE_SPACING: &str = "import-group-spacing";

const MSG_UNSORTED: &str = "Imports are not properly sorted";
const MSG_UNGROUPED: &str = "Imports are not grouped according to the specified patterns";
const MSG_MISSING_NEWLINE: &str = "Missing newline between import groups";

/// Expand the configured glob patterns under `root` into a deduplicated,
/// deterministic file list.
pub fn collect_targets(root: &Path, patterns: &[String]) -> Vec<PathBuf> {
    let mut targets: BTreeSet<PathBuf> = BTreeSet::new();
    for pat in patterns {
        let abs_glob = root.join(pat);
        let pattern = abs_glob.to_string_lossy().to_string();
        if let Ok(entries) = glob::glob(&pattern) {
            for entry in entries.flatten() {
                if entry.is_file() {
                    targets.insert(entry);
                }
            }
        }
    }
    targets.into_iter().collect()
}

/// Run the enabled import checks across files matched by the effective
/// patterns.
///
/// Files whose import block is covered by a disable marker, or that hold
/// at most one import, produce no issues. The grouping check runs with
/// the implicit external group prepended; the combined sort and spacing
/// checks run against the configured groups alone.
pub fn run_lint(eff: &Effective) -> LintResult {
    let registry = PatternRegistry::new();
    let combined = resolve_groups(&eff.groups, ExternalGroupPolicy::None);
    let grouping = resolve_groups(&eff.groups, ExternalGroupPolicy::InjectFirst);
    let targets = collect_targets(&eff.repo_root, &eff.patterns);

    let per_file: Vec<(Vec<Issue>, usize)> = targets
        .par_iter()
        .map(|path| {
            let data = match fs::read_to_string(path) {
                Ok(s) => s,
                Err(_) => return (Vec::new(), 0),
            };
            let block = extract_imports(&data);
            if block.disabled || block.imports.len() <= 1 {
                return (Vec::new(), 1);
            }
            let file = display_path(&eff.repo_root, path);
            let mut issues: Vec<Issue> = Vec::new();

            if eff.rule_sorted || eff.rule_spacing {
                let canonical = build(&block.imports, &combined, &registry);
                let report = check(&data, &block.imports, &canonical, &combined, &registry);
                if eff.rule_sorted && !report.sorted_ok {
                    issues.push(Issue {
                        file: file.clone(),
                        rule: RULE_SORT.into(),
                        severity: eff.level.clone(),
                        line: block.imports[0].line,
                        message: MSG_UNSORTED.into(),
                    });
                }
                if eff.rule_spacing {
                    for violation in &report.spacing_violations {
                        issues.push(Issue {
                            file: file.clone(),
                            rule: RULE_SPACING.into(),
                            severity: eff.level.clone(),
                            line: violation.line,
                            message: MSG_MISSING_NEWLINE.into(),
                        });
                    }
                }
            }

            if eff.rule_grouped {
                let canonical = build(&block.imports, &grouping, &registry);
                let report = check(&data, &block.imports, &canonical, &grouping, &registry);
                if !report.grouped_ok {
                    issues.push(Issue {
                        file,
                        rule: RULE_GROUPS.into(),
                        severity: eff.level.clone(),
                        line: block.imports[0].line,
                        message: MSG_UNGROUPED.into(),
                    });
                }
            }

            (issues, 1)
        })
        .collect();

    // Deterministic ordering of issues by file then line then rule
    let mut issues: Vec<Issue> = per_file
        .into_iter()
        .flat_map(|(issues, _)| issues)
        .collect();
    issues.sort_by(|a, b| {
        a.file
            .cmp(&b.file)
            .then(a.line.cmp(&b.line))
            .then(a.rule.cmp(&b.rule))
    });

    let mut errs = 0usize;
    let mut warns = 0usize;
    let mut infos = 0usize;
    for is in &issues {
        match is.severity.as_str() {
            "error" => errs += 1,
            "warning" | "warn" => warns += 1,
            _ => infos += 1,
        }
    }
    LintResult {
        issues,
        summary: Summary {
            errors: errs,
            warnings: warns,
            infos,
            files: targets.len(),
        },
    }
}
