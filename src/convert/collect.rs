//! Source file discovery.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

use super::naming::{is_source_file, output_file_name};

/// A markup file to convert and the flat file name its output gets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub output_name: String,
}

/// Options controlling which files the collector returns.
#[derive(Debug, Default)]
pub struct CollectOptions<'a> {
    /// Glob patterns matched against the full path of each file.
    pub ignores: &'a [String],
    /// A canonical directory path never descended into.
    pub exclude_dir: Option<&'a Path>,
    pub verbose: bool,
}

/// Walk every root and return the source files found, in walk order.
///
/// Entries inside a directory are visited sorted by file name. Roots are
/// processed in the order given and a file reached twice is listed once.
/// A root that is itself a source file is returned as is.
pub fn collect_sources(roots: &[PathBuf], options: &CollectOptions) -> Result<Vec<SourceFile>> {
    let ignore_patterns = options
        .ignores
        .iter()
        .map(|p| {
            Pattern::new(p).with_context(|| format!("Invalid ignore pattern: \"{}\"", p))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut sources = Vec::new();

    for root in roots {
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_excluded_dir(entry, options.exclude_dir));

        for entry in walker {
            let entry = entry.with_context(|| format!("Cannot read {}", root.display()))?;
            let path = entry.path();

            if !entry.file_type().is_file() || !is_source_file(path) {
                continue;
            }

            let path_str = path.to_string_lossy();
            if ignore_patterns.iter().any(|p| p.matches(&path_str)) {
                if options.verbose {
                    eprintln!("{} {}", "skipped:".dimmed(), path.display());
                }
                continue;
            }

            let resolved = fs::canonicalize(path)
                .with_context(|| format!("Cannot read {}", path.display()))?;
            if !seen.insert(resolved) {
                continue;
            }

            let Some(output_name) = output_file_name(path) else {
                eprintln!(
                    "{} Skipping file with a non UTF-8 name: {}",
                    "warning:".bold().yellow(),
                    path.display()
                );
                continue;
            };

            sources.push(SourceFile {
                path: path.to_path_buf(),
                output_name,
            });
        }
    }

    Ok(sources)
}

fn is_excluded_dir(entry: &DirEntry, exclude_dir: Option<&Path>) -> bool {
    let Some(dir) = exclude_dir else {
        return false;
    };
    entry.file_type().is_dir()
        && fs::canonicalize(entry.path()).is_ok_and(|path| path == dir)
}
