//! CLI entry point for acme-theme.

mod cli;
mod commands;
mod output;

use acme_constant::app::{DATA_DIR, ENV_FILE};
use acme_observability::ObservabilityConfig;
use clap::Parser;

use crate::cli::Cli;

/// Load env files: `~/.acme/env`, then the nearest project `.acme/env`.
/// dotenvy never overrides a variable that is already set.
fn load_acme_env() {
    if let Some(home) = dirs::home_dir() {
        let config_path = home.join(DATA_DIR).join(ENV_FILE);
        if config_path.exists() {
            let _ = dotenvy::from_path(&config_path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd;
        for _ in 0..32 {
            let project_env = dir.join(DATA_DIR).join(ENV_FILE);
            if project_env.exists() {
                let _ = dotenvy::from_path(&project_env);
                break;
            }
            if let Some(parent) = dir.parent() {
                dir = parent.to_path_buf();
            } else {
                break;
            }
        }
    }
}

fn init_logging(verbose: bool) {
    let installed = if verbose {
        acme_observability::init(ObservabilityConfig::from_env().with_log_level("debug"))
    } else {
        acme_observability::init_from_env()
    };
    if let Err(e) = installed {
        output::error(&format!("logging disabled: {e}"));
    }
}

fn main() {
    load_acme_env();
    let cli = Cli::parse();
    output::init(cli.output);
    init_logging(cli.verbose);

    if let Err(e) = commands::handle(cli) {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
