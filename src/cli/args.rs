//! CLI argument definitions using clap.
//!
//! `bb2html [OPTIONS] [SOURCES]...`
//!
//! Sources are directories searched recursively for `.bb` files, or single
//! `.bb` files. Without any, the `sources` list of the config file is used,
//! which defaults to the working directory.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Directories or .bb files to convert (overrides config file)
    #[arg(value_name = "SOURCES")]
    pub sources: Vec<PathBuf>,

    /// Output directory, wiped and recreated on every run (overrides config file)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Write a default .bb2htmlrc.json in the working directory and exit
    #[arg(long, conflicts_with_all = ["sources", "output_dir"])]
    pub init: bool,
}
