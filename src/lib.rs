//! Langsync - translation key extraction and dictionary synchronization
//!
//! Langsync scans a project's source tree for calls to the translation
//! marker (`_("...")`) and resolver (`__("...", lang)`), then reconciles
//! the keys it finds with per-language JSON dictionaries: missing keys are
//! added with empty placeholders, existing translations are never touched,
//! and unused keys can optionally be removed.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Scanning, merging and lookup engine

pub mod cli;
pub mod config;
pub mod core;
