//! Whole-run orchestration: wipe the output directory, collect sources,
//! translate each file and write the result.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use colored::Colorize;

use super::{
    collect::{CollectOptions, SourceFile, collect_sources},
    table::TagTable,
    translate::translate_with,
};
use crate::report;

/// Everything a run needs. Paths are used as given, relative paths resolve
/// against the working directory.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub sources: Vec<PathBuf>,
    pub output_dir: PathBuf,
    pub ignores: Vec<String>,
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    pub source: PathBuf,
    pub output: PathBuf,
}

/// What a finished run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub output_dir: PathBuf,
    pub converted: Vec<ConvertedFile>,
    /// Number of writes that replaced the output of an earlier source with
    /// the same file name.
    pub overwritten: usize,
}

/// Convert every source file below `options.sources` into `options.output_dir`.
///
/// The output directory is removed and recreated first, unless it holds one
/// of the sources. Any I/O failure aborts the run and may leave the output
/// directory partially populated.
pub fn run(options: &ConvertOptions) -> Result<RunSummary> {
    let table = TagTable::standard();
    table.validate()?;

    check_output_dir(&options.output_dir, &options.sources)?;
    prepare_output_dir(&options.output_dir)?;
    let exclude_dir = options
        .output_dir
        .canonicalize()
        .with_context(|| format!("Cannot resolve {}", options.output_dir.display()))?;

    let sources = collect_sources(
        &options.sources,
        &CollectOptions {
            ignores: &options.ignores,
            exclude_dir: Some(&exclude_dir),
            verbose: options.verbose,
        },
    )?;

    let mut written: HashMap<String, PathBuf> = HashMap::new();
    let mut converted = Vec::with_capacity(sources.len());
    let mut overwritten = 0;

    for source in sources {
        if options.verbose {
            eprintln!("{} {}", "reading:".dimmed(), source.path.display());
        }
        let output = convert_file(&table, &source, &options.output_dir)?;

        if let Some(previous) = written.insert(source.output_name.clone(), source.path.clone()) {
            overwritten += 1;
            report::print_overwrite_warning(&output, &previous, &source.path);
        }
        report::print_converted(&source.path, &output);

        converted.push(ConvertedFile {
            source: source.path,
            output,
        });
    }

    Ok(RunSummary {
        output_dir: options.output_dir.clone(),
        converted,
        overwritten,
    })
}

/// Refuse an output directory that is, or contains, one of the sources.
///
/// A missing output directory is never removed, so only an existing one is
/// checked.
fn check_output_dir(output_dir: &Path, sources: &[PathBuf]) -> Result<()> {
    if !output_dir.exists() {
        return Ok(());
    }
    let output = output_dir
        .canonicalize()
        .with_context(|| format!("Cannot resolve {}", output_dir.display()))?;

    for source in sources {
        let resolved = source
            .canonicalize()
            .with_context(|| format!("Cannot read {}", source.display()))?;
        if resolved.starts_with(&output) {
            bail!(
                "Output directory {} contains source {}, refusing to remove it",
                output_dir.display(),
                source.display()
            );
        }
    }
    Ok(())
}

/// Remove `dir` with everything in it, then create it empty.
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir)
            .with_context(|| format!("Failed to remove output directory: {}", dir.display()))?;
    }
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    Ok(())
}

fn convert_file(table: &TagTable, source: &SourceFile, output_dir: &Path) -> Result<PathBuf> {
    let text = fs::read_to_string(&source.path)
        .with_context(|| format!("Failed to read file: {}", source.path.display()))?;

    let output = output_dir.join(&source.output_name);
    fs::write(&output, translate_with(table, &text))
        .with_context(|| format!("Failed to write file: {}", output.display()))?;

    Ok(output)
}
