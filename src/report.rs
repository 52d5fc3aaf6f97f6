//! Progress and summary printing.
//!
//! Kept apart from the conversion engine so the library can be used without
//! printing side effects in callers that only need `translate`.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use crate::convert::RunSummary;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print one progress line for a converted file.
pub fn print_converted(source: &Path, output: &Path) {
    print_converted_to(source, output, &mut io::stdout().lock());
}

pub fn print_converted_to<W: Write>(source: &Path, output: &Path, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} {}",
        source.display(),
        "->".blue(),
        output.display()
    );
}

/// Warn that a flat output name was reused by a second source.
pub fn print_overwrite_warning(output: &Path, previous: &Path, current: &Path) {
    print_overwrite_warning_to(output, previous, current, &mut io::stderr().lock());
}

pub fn print_overwrite_warning_to<W: Write>(
    output: &Path,
    previous: &Path,
    current: &Path,
    writer: &mut W,
) {
    let _ = writeln!(
        writer,
        "{} {} overwrites output of {} ({})",
        "warning:".bold().yellow(),
        current.display(),
        previous.display(),
        output.display()
    );
}

/// Print the end of run summary.
pub fn print_summary(summary: &RunSummary) {
    print_summary_to(summary, &mut io::stdout().lock());
}

pub fn print_summary_to<W: Write>(summary: &RunSummary, writer: &mut W) {
    let count = summary.converted.len();
    let msg = format!(
        "Converted {} {} into {}",
        count,
        if count == 1 { "file" } else { "files" },
        summary.output_dir.display()
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());

    if summary.overwritten > 0 {
        let _ = writeln!(
            writer,
            "{} {} output {} overwritten by a source with the same name",
            "warning:".bold().yellow(),
            summary.overwritten,
            if summary.overwritten == 1 {
                "file was"
            } else {
                "files were"
            }
        );
    }
}
