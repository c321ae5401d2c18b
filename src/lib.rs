//! Autoglot - localization post-processor for structured response data
//!
//! Autoglot rewrites the text values of serializable data against per-locale
//! message catalogs, and collects CJK text that has no catalog entry yet into
//! a candidate file for later translation.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Localization engine (key derivation, resolution, tree walking, pipelines)

pub mod cli;
pub mod config;
pub mod core;
