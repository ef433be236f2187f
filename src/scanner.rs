/*!
 * Ordered directory traversal shared by the tree renderer and content emitter
 */

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::Result;
use crate::filter::IgnoreSet;
use crate::types::{DirectoryEntry, Entry, FileEntry};

/// Scanner for base folders
///
/// Every walk yields entries depth first. Within a directory, files come
/// before subdirectories and each group is sorted by name, so two walks over
/// an unchanged tree always agree. Symbolic links are never followed.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    /// Names pruned from the walk
    ignore: IgnoreSet,
    /// Canonical path of the output artifact, if it exists
    excluded: Option<PathBuf>,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(ignore: IgnoreSet) -> Self {
        Self {
            ignore,
            excluded: None,
        }
    }

    /// Never yield the file at `path`; it must already exist to be recognised
    pub fn excluding(mut self, path: &Path) -> Self {
        self.excluded = fs::canonicalize(path).ok();
        self
    }

    /// Walk `root`, yielding directories and non-empty files below it
    pub fn walk<'a>(&'a self, root: &Path) -> impl Iterator<Item = Result<Entry>> + 'a {
        WalkDir::new(root)
            .min_depth(1)
            .follow_links(false)
            .sort_by(files_then_dirs)
            .into_iter()
            .filter_entry(move |e| {
                e.depth() == 0 || !self.ignore.is_ignored(&e.file_name().to_string_lossy())
            })
            .filter_map(move |res| match res {
                Ok(entry) => self.classify(entry).transpose(),
                Err(e) => Some(Err(e.into())),
            })
    }

    /// Walk `root`, yielding only the files
    pub fn files<'a>(&'a self, root: &Path) -> impl Iterator<Item = Result<FileEntry>> + 'a {
        self.walk(root).filter_map(|res| match res {
            Ok(Entry::File(file)) => Some(Ok(file)),
            Ok(Entry::Directory(_)) => None,
            Err(e) => Some(Err(e)),
        })
    }

    fn classify(&self, entry: DirEntry) -> Result<Option<Entry>> {
        let file_type = entry.file_type();
        let name = entry.file_name().to_string_lossy().to_string();

        if file_type.is_dir() {
            return Ok(Some(Entry::Directory(DirectoryEntry {
                path: entry.path().to_path_buf(),
                name,
                depth: entry.depth(),
            })));
        }

        let size = if file_type.is_file() {
            entry.metadata()?.len()
        } else if file_type.is_symlink() {
            match fs::metadata(entry.path()) {
                Ok(meta) if meta.is_file() => meta.len(),
                Ok(_) => {
                    log::debug!("not following symlink {}", entry.path().display());
                    return Ok(None);
                }
                Err(e) => {
                    log::debug!("ignoring dangling symlink {}: {}", entry.path().display(), e);
                    return Ok(None);
                }
            }
        } else {
            return Ok(None);
        };

        if size == 0 {
            log::debug!("skipping empty file {}", entry.path().display());
            return Ok(None);
        }

        if self.is_excluded(entry.path()) {
            log::debug!("skipping output file {}", entry.path().display());
            return Ok(None);
        }

        Ok(Some(Entry::File(FileEntry {
            path: entry.path().to_path_buf(),
            name,
            depth: entry.depth(),
            size,
        })))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        let Some(excluded) = &self.excluded else {
            return false;
        };
        if path.file_name() != excluded.file_name() {
            return false;
        }
        fs::canonicalize(path).is_ok_and(|p| &p == excluded)
    }
}

fn files_then_dirs(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}
