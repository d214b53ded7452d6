//! Group configuration model.
//!
//! A `GroupRule` is the validated form of one user-configured group: the
//! raw `sortMethod`/`lengthTarget` pair from the config file is resolved
//! into a single `SortKey` up front, so sorting never re-branches on
//! string tags.

/// Sort key for one group, resolved once from `sortMethod` + `lengthTarget`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Case-insensitive comparison of the module path.
    Alphabetical,
    /// Ascending length of the module path.
    LengthFrom,
    /// Ascending length of the full statement text.
    LengthFull,
}

#[derive(Debug, Clone, PartialEq)]
/// A validated group rule, ready for the grouping pipeline.
pub struct GroupRule {
    /// Regular expression tested against the module path.
    pub pattern: String,
    pub sort_key: SortKey,
    /// Lower sorts earlier; `None` sorts after every explicit priority.
    pub priority: Option<f64>,
}

impl GroupRule {
    /// Rank used by the priority resolver; unset priority sorts last.
    pub fn priority_rank(&self) -> f64 {
        self.priority.unwrap_or(f64::INFINITY)
    }
}
