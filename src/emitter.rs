/*!
 * Tagged file content emission
 */

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indicatif::ProgressBar;

use crate::config::ReadErrorPolicy;
use crate::error::{FlattenError, Result};
use crate::filter::ExtensionFilter;
use crate::scanner::Scanner;

/// Marker opening each file block
pub const FILE_TAG: &str = "#~[FILE] ";

/// Bytes inspected by the binary heuristic
const BINARY_SNIFF_LEN: usize = 1024;

/// Statistics for a file written to the artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedFile {
    /// Path as written in the tag line
    pub tag_path: String,
    /// Size in bytes
    pub bytes: u64,
    /// Number of lines
    pub lines: usize,
    /// Number of characters
    pub chars: usize,
}

/// Result of emitting one base folder
#[derive(Debug, Clone, Default)]
pub struct EmitOutcome {
    /// Files written, in output order
    pub emitted: Vec<EmittedFile>,
    /// Selected files left out by the read error policy or binary heuristic
    pub skipped: Vec<PathBuf>,
}

/// Writes the tagged contents of every selected file below a base folder
pub struct ContentEmitter<'a> {
    scanner: &'a Scanner,
    filter: &'a ExtensionFilter,
    policy: ReadErrorPolicy,
    skip_binary: bool,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
}

impl<'a> ContentEmitter<'a> {
    /// Create a new emitter
    pub fn new(
        scanner: &'a Scanner,
        filter: &'a ExtensionFilter,
        policy: ReadErrorPolicy,
        progress: Arc<ProgressBar>,
    ) -> Self {
        Self {
            scanner,
            filter,
            policy,
            skip_binary: false,
            progress,
        }
    }

    /// Leave out files that look binary
    pub fn skip_binary(mut self, skip: bool) -> Self {
        self.skip_binary = skip;
        self
    }

    /// Emit every non-empty file below `root` that passes the extension filter
    ///
    /// Each block is the tag line, the raw content, then one extra newline.
    pub fn emit<W: Write>(&self, out: &mut W, root: &Path) -> Result<EmitOutcome> {
        let mut outcome = EmitOutcome::default();

        for file in self.scanner.files(root) {
            let file = file?;
            if !self.filter.matches(&file.name) {
                continue;
            }

            self.progress.set_message(file.name.clone());

            let text = match self.read_text(&file.path) {
                Ok(Some(text)) => text,
                Ok(None) => {
                    log::debug!("skipping binary file {}", file.path.display());
                    outcome.skipped.push(file.path);
                    continue;
                }
                Err(e) if e.is_file_level() && self.policy == ReadErrorPolicy::Skip => {
                    log::warn!("skipping file: {}", e);
                    outcome.skipped.push(file.path);
                    continue;
                }
                Err(e) => return Err(e),
            };

            let tag_path = tag_path(root, &file.path);
            writeln!(out, "{}{}", FILE_TAG, tag_path)?;
            out.write_all(text.as_bytes())?;
            out.write_all(b"\n")?;

            self.progress.inc(1);
            outcome.emitted.push(EmittedFile {
                tag_path,
                bytes: file.size,
                lines: text.lines().count(),
                chars: text.chars().count(),
            });
        }

        Ok(outcome)
    }

    /// Read a file as UTF-8, or `None` when it looks binary and those are skipped
    fn read_text(&self, path: &Path) -> Result<Option<String>> {
        let bytes = fs::read(path).map_err(|source| FlattenError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        if self.skip_binary && looks_binary(&bytes) {
            return Ok(None);
        }

        String::from_utf8(bytes)
            .map(Some)
            .map_err(|_| FlattenError::Decode(path.to_path_buf()))
    }
}

/// True when the first bytes of `content` contain a NUL
pub fn looks_binary(content: &[u8]) -> bool {
    content.iter().take(BINARY_SNIFF_LEN).any(|&b| b == 0)
}

/// Path written in a file's tag line
///
/// Under the `.` base folder the leading `./` is dropped; otherwise the walk
/// path is used as is.
pub fn tag_path(root: &Path, path: &Path) -> String {
    if root == Path::new(".") {
        path.strip_prefix(".").unwrap_or(path).display().to_string()
    } else {
        path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    use tempfile::tempdir;

    fn emit_with(
        root: &Path,
        exts: &[&str],
        policy: ReadErrorPolicy,
        skip_binary: bool,
    ) -> Result<(String, EmitOutcome)> {
        let scanner = Scanner::default();
        let filter = ExtensionFilter::new(exts);
        let emitter = ContentEmitter::new(&scanner, &filter, policy, Arc::new(ProgressBar::hidden()))
            .skip_binary(skip_binary);
        let mut out = Vec::new();
        let outcome = emitter.emit(&mut out, root)?;
        Ok((String::from_utf8_lossy(&out).to_string(), outcome))
    }

    #[test]
    fn writes_tag_content_and_one_newline() -> io::Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("a.py"), "print(1)\n")?;
        fs::write(dir.path().join("b.rs"), "fn main() {}\n")?;

        let (out, outcome) = emit_with(dir.path(), &["py"], ReadErrorPolicy::Abort, false).unwrap();
        let expected = format!(
            "{}{}\nprint(1)\n\n",
            FILE_TAG,
            dir.path().join("a.py").display()
        );
        assert_eq!(out, expected);
        assert_eq!(outcome.emitted.len(), 1);
        assert_eq!(outcome.emitted[0].lines, 1);
        assert_eq!(outcome.emitted[0].bytes, 9);
        Ok(())
    }

    #[test]
    fn content_without_trailing_newline_is_kept_verbatim() -> io::Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("Makefile"), "all:\r\n\techo hi")?;

        let (out, _) = emit_with(dir.path(), &[], ReadErrorPolicy::Abort, false).unwrap();
        let body = out.split_once('\n').map(|(_, rest)| rest).unwrap();
        assert_eq!(body, "all:\r\n\techo hi\n");
        Ok(())
    }

    #[test]
    fn undecodable_file_aborts_by_default() -> io::Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("bad.txt"), [0xff, 0xfe, 0x00])?;

        let err = emit_with(dir.path(), &["txt"], ReadErrorPolicy::Abort, false).unwrap_err();
        assert!(matches!(err, FlattenError::Decode(_)));
        assert!(err.to_string().contains("bad.txt"));
        Ok(())
    }

    #[test]
    fn undecodable_file_is_skipped_under_skip_policy() -> io::Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("bad.txt"), [0xff, 0xfe, 0x00])?;
        fs::write(dir.path().join("good.txt"), "fine")?;

        let (out, outcome) = emit_with(dir.path(), &["txt"], ReadErrorPolicy::Skip, false).unwrap();
        assert!(!out.contains("bad.txt"));
        assert!(out.contains("good.txt"));
        assert_eq!(outcome.skipped, vec![dir.path().join("bad.txt")]);
        Ok(())
    }

    #[test]
    fn nul_bytes_pass_through_unless_binary_skipping_is_on() -> io::Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("data.txt"), "a\0b")?;

        let (out, _) = emit_with(dir.path(), &["txt"], ReadErrorPolicy::Abort, false).unwrap();
        assert!(out.contains("a\0b\n"));

        let (out, outcome) = emit_with(dir.path(), &["txt"], ReadErrorPolicy::Abort, true).unwrap();
        assert!(out.is_empty());
        assert_eq!(outcome.skipped.len(), 1);
        Ok(())
    }

    #[test]
    fn tag_path_strips_leading_dot_only_for_dot_root() {
        assert_eq!(
            tag_path(Path::new("."), Path::new("./src/main.c")),
            "src/main.c"
        );
        assert_eq!(
            tag_path(Path::new("proj"), Path::new("proj/a.py")),
            "proj/a.py"
        );
        assert_eq!(
            tag_path(Path::new("./proj"), Path::new("./proj/a.py")),
            "./proj/a.py"
        );
    }

    #[test]
    fn looks_binary_checks_only_the_prefix() {
        assert!(looks_binary(b"\0abc"));
        assert!(!looks_binary(b"plain text"));
        let mut late = vec![b'a'; BINARY_SNIFF_LEN];
        late.push(0);
        assert!(!looks_binary(&late));
    }
}
