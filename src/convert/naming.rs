use std::path::Path;

/// Extension of the markup files picked up by the collector.
pub const SOURCE_EXTENSION: &str = "bb";

/// Extension given to every written file.
pub const OUTPUT_EXTENSION: &str = "html";

pub fn is_source_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(SOURCE_EXTENSION)
}

/// Output file name for a source path.
///
/// Only the trailing extension is rewritten, so `bbcode.bb` becomes
/// `bbcode.html`. Directories are dropped: all output is flat.
///
/// ```
/// use std::path::Path;
/// use bb2html::convert::output_file_name;
///
/// assert_eq!(output_file_name(Path::new("posts/bbcode.bb")).as_deref(), Some("bbcode.html"));
/// ```
pub fn output_file_name(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    let stem = file_name
        .strip_suffix(SOURCE_EXTENSION)
        .and_then(|s| s.strip_suffix('.'))
        .unwrap_or(file_name);
    Some(format!("{}.{}", stem, OUTPUT_EXTENSION))
}
