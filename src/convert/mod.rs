//! Conversion engine.
//!
//! - `table`: the fixed, ordered tag substitution rules
//! - `translate`: applies the table to a document
//! - `naming`: maps source file names to output file names
//! - `collect`: finds source files below a set of roots
//! - `pipeline`: runs a whole conversion into an output directory

pub mod collect;
pub mod naming;
pub mod pipeline;
pub mod table;
pub mod translate;

pub use collect::{CollectOptions, SourceFile, collect_sources};
pub use naming::{OUTPUT_EXTENSION, SOURCE_EXTENSION, output_file_name};
pub use pipeline::{ConvertOptions, ConvertedFile, RunSummary, prepare_output_dir, run};
pub use table::{TagRule, TagTable};
pub use translate::{translate, translate_with};
