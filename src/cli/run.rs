use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;

use super::{args::Arguments, exit_status::ExitStatus};
use crate::{
    config::{CONFIG_FILE_NAME, Config, default_config_json, load_config},
    convert::{self, ConvertOptions},
    report::{self, SUCCESS_MARK},
};

/// Resolve config and arguments, then convert.
pub fn run(args: Arguments) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Cannot determine the working directory")?;

    if args.init {
        return init(&cwd);
    }

    let loaded = load_config(&cwd)?;
    if args.verbose && loaded.from_file {
        eprintln!("{} {}", "config:".dimmed(), CONFIG_FILE_NAME);
    }

    let options = resolve_options(args, loaded.config);
    let summary = convert::run(&options)?;
    report::print_summary(&summary);

    Ok(ExitStatus::Success)
}

/// Command line values win over config file values.
fn resolve_options(args: Arguments, config: Config) -> ConvertOptions {
    let sources = if args.sources.is_empty() {
        config.sources.iter().map(PathBuf::from).collect()
    } else {
        args.sources
    };

    ConvertOptions {
        sources,
        output_dir: args
            .output_dir
            .unwrap_or_else(|| PathBuf::from(config.output_dir)),
        ignores: config.ignores,
        verbose: args.verbose,
    }
}

fn init(dir: &Path) -> Result<ExitStatus> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
        return Ok(ExitStatus::Failure);
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );

    Ok(ExitStatus::Success)
}
