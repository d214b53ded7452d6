//! Compiled group-pattern cache.
//!
//! Group patterns are compiled once and memoized for the lifetime of the
//! registry, so repeated passes over many files never recompile the same
//! pattern. A pattern that fails to compile is cached as never-matching:
//! the runtime match path is defensive and silent, the configuration
//! validator is responsible for surfacing bad patterns to the user.

use regex::Regex;
use std::collections::HashMap;
use std::sync::RwLock;

/// Memoizing compiler for group patterns. Safe to share across the rayon
/// pool: the cache is only an optimization, a miss simply recompiles.
pub struct PatternRegistry {
    cache: RwLock<HashMap<String, Option<Regex>>>,
}

impl PatternRegistry {
    pub fn new() -> Self {
        PatternRegistry {
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// True when `pattern` compiles and matches `path` anywhere.
    pub fn matches(&self, pattern: &str, path: &str) -> bool {
        if let Some(entry) = self.cache.read().unwrap().get(pattern) {
            return entry.as_ref().is_some_and(|re| re.is_match(path));
        }
        let compiled = Regex::new(pattern).ok();
        let hit = compiled.as_ref().is_some_and(|re| re.is_match(path));
        self.cache.write().unwrap().insert(pattern.to_string(), compiled);
        hit
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::new()
    }
}
