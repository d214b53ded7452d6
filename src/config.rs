//! Configuration discovery and effective settings resolution.
//!
//! Imra reads `imra.toml|yaml|yml` from the repository root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective`
//! config. Defaults:
//! - `patterns`: `**/*.js`, `**/*.jsx`, `**/*.ts`, `**/*.tsx`
//! - `output`: `human`
//! - `lint.sorted|grouped|spacing`: true
//! - `lint.level`: `error`
//! - `fix.write|diff|check`: false
//!
//! Overrides precedence: CLI > config file > defaults. Group entries are
//! validated here, before any file is touched; a bad group configuration
//! aborts the whole run rather than producing per-file noise.

use crate::models::group::GroupRule;
use crate::validate::{validate_groups, ConfigError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File patterns checked by default when neither the CLI nor the config
/// file narrows them.
pub const DEFAULT_PATTERNS: [&str; 4] = ["**/*.js", "**/*.jsx", "**/*.ts", "**/*.tsx"];

const CONFIG_FILES: [&str; 3] = ["imra.toml", "imra.yaml", "imra.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// One `[[groups]]` entry as written in the config file. Validated into
/// `GroupRule` before use.
pub struct RawGroup {
    pub pattern: Option<String>,
    #[serde(rename = "sortMethod")]
    pub sort_method: Option<String>,
    #[serde(rename = "lengthTarget")]
    pub length_target: Option<String>,
    pub priority: Option<serde_json::Number>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Lint rule toggles under `[lint]`.
pub struct LintCfg {
    pub sorted: Option<bool>,
    pub grouped: Option<bool>,
    pub spacing: Option<bool>,
    pub level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Fix behavior under `[fix]`.
pub struct FixCfg {
    pub write: Option<bool>,
    pub diff: Option<bool>,
    pub check: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `imra.toml|yaml`.
pub struct ImraConfig {
    pub patterns: Option<Vec<String>>,
    pub output: Option<String>,
    #[serde(default)]
    pub lint: Option<LintCfg>,
    #[serde(default)]
    pub fix: Option<FixCfg>,
    #[serde(default)]
    pub groups: Vec<RawGroup>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying
/// precedence. Groups are already validated.
pub struct Effective {
    pub repo_root: PathBuf,
    pub config_found: bool,
    pub patterns: Vec<String>,
    pub output: String,
    pub rule_sorted: bool,
    pub rule_grouped: bool,
    pub rule_spacing: bool,
    pub level: String,
    pub write: bool,
    pub diff: bool,
    pub check: bool,
    pub groups: Vec<GroupRule>,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when an `imra.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|name| cur.join(name).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `ImraConfig` from `imra.toml` or `imra.yaml|yml` if present.
pub fn load_config(root: &Path) -> Result<Option<ImraConfig>, ConfigError> {
    for name in CONFIG_FILES {
        let path = root.join(name);
        if path.exists() {
            return load_config_file(&path).map(Some);
        }
    }
    Ok(None)
}

/// Load a specific configuration file, picking the parser by extension.
pub fn load_config_file(path: &Path) -> Result<ImraConfig, ConfigError> {
    let display = path.to_string_lossy().to_string();
    let text = fs::read_to_string(path).map_err(|_| ConfigError::Read(display.clone()))?;
    let is_yaml = path
        .extension()
        .is_some_and(|ext| ext == "yaml" || ext == "yml");
    if is_yaml {
        serde_yaml::from_str(&text).map_err(|e| ConfigError::Parse {
            file: display,
            detail: e.to_string(),
        })
    } else {
        toml::from_str(&text).map_err(|e| ConfigError::Parse {
            file: display,
            detail: e.to_string(),
        })
    }
}

/// Resolve `Effective` by merging CLI flags, discovered config, and
/// defaults, validating the group rules along the way.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_config: Option<&str>,
    cli_patterns: &[String],
    cli_output: Option<&str>,
    cli_write: Option<bool>,
    cli_diff: Option<bool>,
    cli_check: Option<bool>,
) -> Result<Effective, ConfigError> {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);

    let (cfg, config_found) = match cli_config {
        Some(path) => (Some(load_config_file(Path::new(path))?), true),
        None => match load_config(&repo_root)? {
            Some(cfg) => (Some(cfg), true),
            None => (None, false),
        },
    };
    let cfg = cfg.unwrap_or_default();

    let patterns = if !cli_patterns.is_empty() {
        cli_patterns.to_vec()
    } else {
        cfg.patterns
            .clone()
            .unwrap_or_else(|| DEFAULT_PATTERNS.iter().map(|s| s.to_string()).collect())
    };

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output.clone())
        .unwrap_or_else(|| "human".to_string());

    let lint = cfg.lint.clone().unwrap_or_default();
    let fix = cfg.fix.clone().unwrap_or_default();

    let groups = validate_groups(&cfg.groups)?;

    Ok(Effective {
        repo_root,
        config_found,
        patterns,
        output,
        rule_sorted: lint.sorted.unwrap_or(true),
        rule_grouped: lint.grouped.unwrap_or(true),
        rule_spacing: lint.spacing.unwrap_or(true),
        level: lint.level.unwrap_or_else(|| "error".to_string()),
        write: cli_write.or(fix.write).unwrap_or(false),
        diff: cli_diff.or(fix.diff).unwrap_or(false),
        check: cli_check.or(fix.check).unwrap_or(false),
        groups,
    })
}
