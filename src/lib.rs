/*!
 * flatcode - Flatten source trees into a single tagged text file
 *
 * Each base folder becomes a directory tree listing followed by the verbatim
 * contents of its matching files, delimited by `#~[DIR_TREE]` and `#~[FILE]`
 * tag lines so a reader can recover paths and file boundaries.
 */

pub mod config;
pub mod emitter;
pub mod error;
pub mod filter;
pub mod llm;
pub mod report;
pub mod runner;
pub mod scanner;
pub mod tree;
pub mod types;
pub mod utils;


// Re-export main components for easier access
pub use config::{Args, Config, ReadErrorPolicy};
pub use emitter::{ContentEmitter, EmitOutcome, EmittedFile, FILE_TAG};
pub use error::{FlattenError, Result};
pub use filter::{ExtensionFilter, IgnoreSet};
pub use report::Reporter;
pub use runner::{RunSummary, Runner};
pub use scanner::Scanner;
pub use tree::{render_tree, DIR_TREE_TAG};
pub use types::{DirectoryEntry, Entry, FileEntry};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
