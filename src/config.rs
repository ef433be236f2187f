/*!
 * Configuration handling for flatcode
 */

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use clap::{Parser, ValueEnum};
use clap_complete::Shell;

use crate::ensure;
use crate::error::{FlattenError, Result};

/// Extensions matched when `--ext` is not given
pub const DEFAULT_EXTENSIONS: [&str; 12] = [
    "c", "cpp", "hpp", "h", "hh", "py", "pl", "sh", "txt", "md", "R", "Rmd",
];

/// Name of the output artifact, created in the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "codebase.txt";

/// Policy for selected files that cannot be read or decoded as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReadErrorPolicy {
    /// Stop the run with a diagnostic naming the file (default)
    #[default]
    Abort,
    /// Leave the file out, log a warning and keep going
    Skip,
}

/// Command-line arguments for flatcode
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "flatcode",
    version = env!("CARGO_PKG_VERSION"),
    about = "Flattens a codebase with specified file extensions, including all Makefiles, excluding the output file.",
    long_about = "Writes a directory tree listing followed by the tagged verbatim contents of every matching file into a single text file, ready to be handed to a Large Language Model."
)]
pub struct Args {
    /// Base folders to process
    #[clap(
        long,
        num_args = 1..,
        required_unless_present_any = ["llm", "generate"]
    )]
    pub folders: Vec<String>,

    /// File extensions to include, without leading dots
    #[clap(long, num_args = 0.., default_values = DEFAULT_EXTENSIONS)]
    pub ext: Vec<String>,

    /// Print instructions for a language model to understand the flattened file, then exit
    #[clap(long)]
    pub llm: bool,

    /// Output file name
    #[clap(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Glob patterns for file or directory names to leave out entirely
    #[clap(long, num_args = 1..)]
    pub ignore: Vec<String>,

    /// What to do with a matching file that cannot be read as UTF-8 text
    #[clap(long, value_enum, default_value_t = ReadErrorPolicy::default())]
    pub on_read_error: ReadErrorPolicy,

    /// Leave out files whose first 1024 bytes contain a NUL byte
    #[clap(long)]
    pub skip_binary: bool,

    /// Suppress the progress spinner and the summary report
    #[clap(long, short)]
    pub quiet: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Base folders, trailing separators stripped, in the order given
    pub folders: Vec<PathBuf>,

    /// Extensions matched by the extension filter
    pub extensions: Vec<String>,

    /// Output artifact path
    pub output_file: PathBuf,

    /// Name patterns to prune
    pub ignore_patterns: Vec<String>,

    /// Handling of unreadable or undecodable files
    pub read_error_policy: ReadErrorPolicy,

    /// Whether to apply the NUL-byte binary heuristic
    pub skip_binary: bool,

    /// Whether to suppress progress and report output
    pub quiet: bool,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            folders: args
                .folders
                .iter()
                .map(|f| PathBuf::from(strip_trailing_separators(f)))
                .collect(),
            extensions: args
                .ext
                .iter()
                .map(|e| e.trim_start_matches('.').to_string())
                .filter(|e| !e.is_empty())
                .collect(),
            output_file: args.output,
            ignore_patterns: args.ignore,
            read_error_policy: args.on_read_error,
            skip_binary: args.skip_binary,
            quiet: args.quiet,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.folders.is_empty(),
            InvalidArgument,
            "at least one folder must be given with --folders"
        );

        for folder in &self.folders {
            if !folder.exists() {
                return Err(FlattenError::FolderNotFound(folder.clone()));
            }
            if !folder.is_dir() {
                return Err(FlattenError::NotADirectory(folder.clone()));
            }
        }

        // Check if output file directory exists
        if let Some(parent) = self.output_file.parent() {
            ensure!(
                parent == Path::new("") || parent.is_dir(),
                Config,
                "output directory not found: {}",
                parent.display()
            );
        }

        Ok(())
    }
}

/// Strip trailing path separators, keeping a lone root separator intact
pub fn strip_trailing_separators(folder: &str) -> &str {
    let trimmed = folder.trim_end_matches(['/', MAIN_SEPARATOR]);
    if trimmed.is_empty() && !folder.is_empty() {
        &folder[..1]
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_separators() {
        assert_eq!(strip_trailing_separators("proj/"), "proj");
        assert_eq!(strip_trailing_separators("proj//"), "proj");
        assert_eq!(strip_trailing_separators("a/b"), "a/b");
        assert_eq!(strip_trailing_separators("./"), ".");
        assert_eq!(strip_trailing_separators("/"), "/");
    }

    #[test]
    fn default_extensions_are_applied() {
        let args = Args::parse_from(["flatcode", "--folders", "src"]);
        let config = Config::from_args(args);
        assert_eq!(config.extensions, DEFAULT_EXTENSIONS.to_vec());
        assert_eq!(config.output_file, PathBuf::from(DEFAULT_OUTPUT_FILE));
        assert_eq!(config.read_error_policy, ReadErrorPolicy::Abort);
    }

    #[test]
    fn folders_and_extensions_take_multiple_values() {
        let args = Args::parse_from([
            "flatcode", "--folders", "proj/", "lib", "--ext", "py", ".txt",
        ]);
        let config = Config::from_args(args);
        assert_eq!(
            config.folders,
            vec![PathBuf::from("proj"), PathBuf::from("lib")]
        );
        assert_eq!(config.extensions, vec!["py", "txt"]);
    }

    #[test]
    fn empty_ext_list_is_allowed() {
        let args = Args::parse_from(["flatcode", "--folders", "proj", "--ext"]);
        assert!(Config::from_args(args).extensions.is_empty());
    }

    #[test]
    fn folders_required_without_llm() {
        assert!(Args::try_parse_from(["flatcode"]).is_err());
        assert!(Args::try_parse_from(["flatcode", "--llm"]).is_ok());
    }

    #[test]
    fn validate_rejects_missing_folder() {
        let args = Args::parse_from(["flatcode", "--folders", "definitely/not/here"]);
        let err = Config::from_args(args).validate().unwrap_err();
        assert!(matches!(err, FlattenError::FolderNotFound(_)));
        assert!(err.to_string().contains("definitely/not/here"));
    }
}
