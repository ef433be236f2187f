/*!
 * Directory tree listing written ahead of the file contents
 */

use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::scanner::Scanner;
use crate::types::Entry;

/// Marker opening the tree listing of a base folder
pub const DIR_TREE_TAG: &str = "#~[DIR_TREE] ";

/// Spaces per depth level
const INDENT: &str = "  ";

/// Write the tree listing of `root` to `out`
///
/// One header line names the root, then every directory below it (with a
/// trailing `/`) and every non-empty file (name only) is written, indented
/// two spaces per level. Extensions are not checked here.
pub fn render_tree<W: Write>(out: &mut W, root: &Path, scanner: &Scanner) -> Result<()> {
    writeln!(out, "{}{}", DIR_TREE_TAG, root.display())?;

    for entry in scanner.walk(root) {
        let entry = entry?;
        let indent = INDENT.repeat(entry.depth());
        match entry {
            Entry::Directory(dir) => writeln!(out, "{}{}/", indent, dir.name)?,
            Entry::File(file) => writeln!(out, "{}{}", indent, file.name)?,
        }
    }

    Ok(())
}
