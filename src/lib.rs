//! bb2html - batch converter from BBCode-style markup to HTML
//!
//! Scans directory trees for `.bb` files, translates the bracket tags they
//! contain into HTML and writes one `.html` file per source into a flat
//! output directory.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `convert`: Tag table, translator, source collection and the run pipeline
//! - `report`: Progress and summary output

pub mod cli;
pub mod config;
pub mod convert;
pub mod report;
