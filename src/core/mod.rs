//! Core engine: source walking, key scanning, dictionary merging and lookup.
//!
//! ## Module Structure
//!
//! - `walker`: depth-first source enumeration with ignore rules
//! - `scanner`: call-site matching and key deduplication
//! - `dictionary`: load, merge and atomically save language files
//! - `resolve`: runtime key lookup with default-language fallback
//! - `reporter`: level-gated, indented tracing
//! - `context`: per-run options and mutable state
//! - `sync`: the full scan-then-merge run

pub mod context;
pub mod dictionary;
pub mod reporter;
pub mod resolve;
pub mod scanner;
pub mod sync;
pub mod walker;

pub use context::{ParseOptions, RunContext};
pub use dictionary::{AddedKey, Dictionary, MergeOutcome};
pub use reporter::{Reporter, Verbosity};
pub use resolve::{ResolutionTable, marker};
pub use scanner::{MatchedKey, MatchedKeys};
pub use sync::{DictionarySync, SyncSummary, synchronize};
pub use walker::{DEFAULT_IGNORES, IgnoreList, SourceWalker, WalkEntry};
