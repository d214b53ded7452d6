//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "imra",
    version,
    about = "Imra — import arranger",
    long_about = "Imra — a tiny, fast CLI to lint and fix the ordering, grouping, and spacing of import blocks.\n\nConfiguration precedence: CLI > imra.toml > defaults.",
    after_help = "Examples:\n  imra lint src/**/*.ts\n  imra lint --output json\n  imra fix --diff\n  imra fix --write src/**/*.tsx",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands for linting and fixing import blocks.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current imra version.")]
    Version,
    /// Check import ordering, grouping, and spacing
    #[command(
        about = "Run import checks",
        long_about = "Check the leading import block of matched files against the configured groups. Severity levels contribute to CI exits.",
        after_help = "Examples:\n  imra lint\n  imra lint --output json src/**/*.ts"
    )]
    Lint {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, help = "Path to imra.toml|yaml (default: discovered)")]
        config: Option<String>,
        #[arg(help = "Glob patterns overriding the configured targets")]
        patterns: Vec<String>,
    },
    /// Rewrite import blocks into canonical form
    #[command(
        about = "Apply canonical import ordering",
        long_about = "Reorder and respace the leading import block per the configured groups. When --diff or --check is set, write is disabled.",
        after_help = "Examples:\n  imra fix --diff\n  imra fix --write"
    )]
    Fix {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Write changes to files")]
        write: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Show diffs for changed files (implies write=false)")]
        diff: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Exit non-zero if changes would occur (implies write=false)")]
        check: bool,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, help = "Path to imra.toml|yaml (default: discovered)")]
        config: Option<String>,
        #[arg(help = "Glob patterns overriding the configured targets")]
        patterns: Vec<String>,
    },
}
