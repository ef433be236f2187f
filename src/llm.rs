//! Instructions printed by `--llm`, describing the artifact's tag grammar.

/// Fixed instruction block handed to a language model alongside the artifact
pub const LLM_INSTRUCTIONS: &str = r#"
## LLM Instructions for Assistance in Codebase Understanding

### Role Definition:
- **Act as a software engineer** helping to understand and navigate a codebase.
- Base insights, explanations and solutions on the codebase text you are given.

### Codebase File Structure:
- The text file describes one or more base folders, each as a directory tree followed by file contents.
- A directory tree starts with a '#~[DIR_TREE] directory_path' line. Directories end with '/' and
  every entry is indented two spaces per level below directory_path:
  #~[DIR_TREE] directory_path
    file.ext
    subdirectory/
      file.ext
      nested_subdirectory/
        file.ext
- Each file's content starts with a '#~[FILE] file_path' line, where file_path is the path of the file
  including the directory_path of the preceding #~[DIR_TREE] line (when directory_path is '.', it is left
  out). The verbatim content of the file follows, then one blank line:
  #~[FILE] file_path
  ...verbatim content of the file...
- Empty files are never listed. Only files with selected extensions, and any Makefile, have their content
  included; the tree lists every non-empty file.

### Guidelines for Interaction:
- Answer from the explicit content and tags in the text file.
- Do not assume anything about the code that the tags and content do not show.
- Refer to files and directories by the exact paths in the tags.
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_both_tags() {
        assert!(LLM_INSTRUCTIONS.contains("#~[DIR_TREE] "));
        assert!(LLM_INSTRUCTIONS.contains("#~[FILE] "));
    }
}
