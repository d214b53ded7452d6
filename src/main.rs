//! Imra CLI binary entry point.
//! Delegates to modules for lint/fix and prints results.

use clap::Parser;
use imra::cli::{Cli, Commands};
use imra::{config, fix, lint, output, utils};

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Lint {
            repo_root,
            output: out,
            config: config_path,
            patterns,
        } => {
            let eff = match config::resolve_effective(
                repo_root.as_deref(),
                config_path.as_deref(),
                &patterns,
                out.as_deref(),
                None,
                None,
                None,
            ) {
                Ok(eff) => eff,
                Err(e) => {
                    eprintln!("{} {}", utils::error_prefix(), e);
                    std::process::exit(2);
                }
            };
            if !eff.config_found && eff.output != "json" {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No imra.toml found; using defaults."
                );
            }
            let result = lint::run_lint(&eff);
            output::print_lint(&result, &eff.output);
            if result.summary.errors > 0 {
                std::process::exit(1);
            }
        }
        Commands::Fix {
            repo_root,
            write,
            diff,
            check,
            output: out,
            config: config_path,
            patterns,
        } => {
            let eff = match config::resolve_effective(
                repo_root.as_deref(),
                config_path.as_deref(),
                &patterns,
                out.as_deref(),
                if write { Some(true) } else { None },
                if diff { Some(true) } else { None },
                if check { Some(true) } else { None },
            ) {
                Ok(eff) => eff,
                Err(e) => {
                    eprintln!("{} {}", utils::error_prefix(), e);
                    std::process::exit(2);
                }
            };
            if !eff.config_found && eff.output != "json" {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No imra.toml found; using defaults."
                );
            }
            // CLI/config precedence at runtime:
            // - If diff or check is enabled, force write=false for this run.
            // - Otherwise respect write.
            let eff_diff = eff.diff;
            let eff_check = eff.check;
            let eff_write = if eff_diff || eff_check {
                false
            } else {
                eff.write
            };
            let results = fix::run_fix(&eff, eff_write, eff_diff || eff_check);
            output::print_fix(&results, &eff.output, eff_write, eff_diff);
            if eff_check && results.iter().any(|r| r.changed) {
                std::process::exit(1);
            }
        }
    }
}
