/*!
 * Core types shared by the traversal stages
 */

use std::path::PathBuf;

/// A directory below a base folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Path as produced by the walk (base folder joined with the relative path)
    pub path: PathBuf,
    /// Base name
    pub name: String,
    /// Distance from the base folder; the base folder itself is never yielded
    pub depth: usize,
}

/// A non-empty regular file below a base folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path as produced by the walk
    pub path: PathBuf,
    /// File name
    pub name: String,
    /// Depth of the file itself; files directly in the base folder have depth 1
    pub depth: usize,
    /// Size in bytes, always greater than zero
    pub size: u64,
}

/// An entry yielded by the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Directory entry
    Directory(DirectoryEntry),
    /// File entry
    File(FileEntry),
}

impl Entry {
    /// Depth below the base folder
    pub fn depth(&self) -> usize {
        match self {
            Entry::Directory(dir) => dir.depth,
            Entry::File(file) => file.depth,
        }
    }
}
