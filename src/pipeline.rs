//! Grouping and ordering pipeline.
//!
//! Turns an extracted import sequence plus validated group rules into the
//! canonical ordering: groups resolved by priority, imports claimed
//! first-match-wins over the priority order, each bucket sorted by its
//! own key, unmatched imports appended last. The canonical ordering is a
//! sequence of `(group, imports)` runs shared by the compliance checker
//! and the text reconstructor.

use crate::classify::NON_RELATIVE_PATTERN;
use crate::models::group::{GroupRule, SortKey};
use crate::models::import::ImportRecord;
use crate::registry::PatternRegistry;
use crate::sorter;

/// Whether the pipeline prepends a synthetic group for non-relative
/// imports. The grouping-only rule opts in, mirroring how external
/// packages conventionally lead the import block; the combined sort rule
/// leaves unmatched externals in the default bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalGroupPolicy {
    None,
    /// Prepend `{ pattern: "^[^./]", alphabetical, priority 0 }` unless a
    /// configured group already uses that exact pattern.
    InjectFirst,
}

/// One contiguous run of the canonical ordering.
pub struct Run {
    /// Index into the resolved group list; `None` is the default bucket.
    pub group: Option<usize>,
    pub imports: Vec<ImportRecord>,
}

/// Ordered concatenation of non-empty buckets. The single source of
/// truth the checker compares against and the reconstructor renders.
pub struct CanonicalOrdering {
    pub runs: Vec<Run>,
}

impl CanonicalOrdering {
    /// Imports in canonical order, run boundaries erased.
    pub fn flatten(&self) -> impl Iterator<Item = &ImportRecord> {
        self.runs.iter().flat_map(|run| run.imports.iter())
    }
}

/// Order groups by explicit priority ascending, unset priority last,
/// declaration order preserved among ties (stable sort).
pub fn resolve_groups(rules: &[GroupRule], policy: ExternalGroupPolicy) -> Vec<GroupRule> {
    let mut resolved: Vec<GroupRule> = Vec::with_capacity(rules.len() + 1);
    if policy == ExternalGroupPolicy::InjectFirst
        && !rules.iter().any(|g| g.pattern == NON_RELATIVE_PATTERN)
    {
        resolved.push(GroupRule {
            pattern: NON_RELATIVE_PATTERN.to_string(),
            sort_key: SortKey::Alphabetical,
            priority: Some(0.0),
        });
    }
    resolved.extend(rules.iter().cloned());
    resolved.sort_by(|a, b| a.priority_rank().total_cmp(&b.priority_rank()));
    resolved
}

/// First resolved group whose pattern matches `path`, if any. Matching
/// walks the priority order, so when two patterns overlap the group with
/// the lower resolved priority claims the import regardless of
/// declaration order.
pub fn classify_import(
    path: &str,
    resolved: &[GroupRule],
    registry: &PatternRegistry,
) -> Option<usize> {
    resolved
        .iter()
        .position(|group| registry.matches(&group.pattern, path))
}

/// Build the canonical ordering for `imports` under `resolved` groups.
///
/// Buckets preserve input order before sorting, so stable per-bucket
/// sorts keep equal-key imports in their original relative order. Groups
/// with no matching imports contribute no run.
pub fn build(
    imports: &[ImportRecord],
    resolved: &[GroupRule],
    registry: &PatternRegistry,
) -> CanonicalOrdering {
    let mut buckets: Vec<Vec<ImportRecord>> = vec![Vec::new(); resolved.len()];
    let mut default_bucket: Vec<ImportRecord> = Vec::new();

    for imp in imports {
        match classify_import(&imp.module_path, resolved, registry) {
            Some(idx) => buckets[idx].push(imp.clone()),
            None => default_bucket.push(imp.clone()),
        }
    }

    let mut runs = Vec::new();
    for (idx, mut bucket) in buckets.into_iter().enumerate() {
        if bucket.is_empty() {
            continue;
        }
        let cmp = sorter::comparator(resolved[idx].sort_key);
        bucket.sort_by(|a, b| cmp(a, b));
        runs.push(Run {
            group: Some(idx),
            imports: bucket,
        });
    }
    if !default_bucket.is_empty() {
        let cmp = sorter::default_bucket_comparator();
        default_bucket.sort_by(|a, b| cmp(a, b));
        runs.push(Run {
            group: None,
            imports: default_bucket,
        });
    }
    CanonicalOrdering { runs }
}
