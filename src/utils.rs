//! Small shared helpers for the CLI surface.

use owo_colors::OwoColorize;
use std::path::Path;

fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Prefix for fatal CLI errors printed to stderr.
pub fn error_prefix() -> String {
    if use_colors() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

/// Prefix for friendly notes printed to stderr.
pub fn note_prefix() -> String {
    if use_colors() {
        "note:".yellow().bold().to_string()
    } else {
        "note:".to_string()
    }
}

/// Render a target path relative to the repository root when possible.
pub fn display_path(root: &Path, path: &Path) -> String {
    pathdiff::diff_paths(path, root)
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_path_is_relative_to_root() {
        let root = Path::new("/repo");
        let path = Path::new("/repo/src/app.ts");
        assert_eq!(display_path(root, path), "src/app.ts");
    }
}
