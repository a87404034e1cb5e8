//! Lsdoc - static component catalog generator for TSX design systems
//!
//! Lsdoc scans TSX source files for documentation comments carrying
//! `@lsComponent` annotations, assembles the annotated declarations into a
//! component catalog, relocates referenced image assets into the build
//! directory, and renders a browsable `index.html` from a template.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments and pipeline orchestration)
//! - `config`: Run configuration and fixed output layout
//! - `catalog`: Core catalog engine (walk, extract, relocate, render)
//! - `parsers`: TSX source parsing and documentation-comment tag parsing

pub mod catalog;
pub mod cli;
pub mod config;
pub mod parsers;
