/*!
 * Run coordination: one artifact, every base folder in order
 */

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use indicatif::ProgressBar;

use crate::config::Config;
use crate::emitter::{ContentEmitter, EmittedFile};
use crate::error::Result;
use crate::filter::{ExtensionFilter, IgnoreSet};
use crate::scanner::Scanner;
use crate::tree::render_tree;

/// What a completed run produced
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Output artifact path
    pub output_file: PathBuf,
    /// Base folders processed
    pub folders: usize,
    /// Files written, in output order
    pub emitted: Vec<EmittedFile>,
    /// Selected files left out
    pub skipped: Vec<PathBuf>,
    /// Wall time of the run
    pub duration: Duration,
}

/// Drives the tree renderer and content emitter over every base folder
pub struct Runner {
    config: Config,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
}

impl Runner {
    /// Create a new runner
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self { config, progress }
    }

    /// Create or truncate the artifact and fill it
    ///
    /// On error, whatever was written before the failure stays on disk.
    pub fn run(&self) -> Result<RunSummary> {
        let start_time = Instant::now();

        let file = File::create(&self.config.output_file)?;
        let mut out = BufWriter::new(file);

        let scanner = Scanner::new(IgnoreSet::new(self.config.ignore_patterns.clone()))
            .excluding(&self.config.output_file);
        let filter = ExtensionFilter::new(self.config.extensions.as_slice());
        let emitter = ContentEmitter::new(
            &scanner,
            &filter,
            self.config.read_error_policy,
            Arc::clone(&self.progress),
        )
        .skip_binary(self.config.skip_binary);

        let mut summary = RunSummary {
            output_file: self.config.output_file.clone(),
            folders: 0,
            emitted: Vec::new(),
            skipped: Vec::new(),
            duration: Duration::ZERO,
        };

        for folder in &self.config.folders {
            log::debug!("processing {}", folder.display());
            self.progress.set_prefix(folder.display().to_string());

            render_tree(&mut out, folder, &scanner)?;
            let outcome = emitter.emit(&mut out, folder)?;

            summary.folders += 1;
            summary.emitted.extend(outcome.emitted);
            summary.skipped.extend(outcome.skipped);
        }

        out.flush()?;
        summary.duration = start_time.elapsed();
        Ok(summary)
    }
}
