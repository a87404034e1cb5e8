//! CLI argument definitions using clap.
//!
//! Lsdoc is a single-purpose tool, so there are no subcommands: every flag
//! has a default reproducing the fixed configuration the tool originally
//! shipped with, and a bare `lsdoc` in a project root builds the catalog.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Glob pattern selecting component source files
    #[arg(long, default_value = "./src/**/*.tsx")]
    pub path: String,

    /// Output directory for the generated catalog
    #[arg(long, default_value = "build")]
    pub build_dir: PathBuf,

    /// Template the catalog document is rendered from
    #[arg(long, default_value = "template.html")]
    pub template: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    pub fn into_config(self) -> Config {
        Config {
            pattern: self.path,
            build_dir: self.build_dir,
            template: self.template,
            verbose: self.verbose,
        }
    }
}
