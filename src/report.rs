/*!
 * Reporting functionality for flatcode
 *
 * Renders an end-of-run summary using the tabled library.
 */

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::emitter::EmittedFile;
use crate::runner::RunSummary;
use crate::utils::{format_file_size, format_number};

/// Beyond this many files only the largest are listed
const MAX_LISTED_FILES: usize = 15;
const TOP_FILES: usize = 10;

/// Report generator for run summaries
#[derive(Debug, Default)]
pub struct Reporter;

impl Reporter {
    /// Create a new reporter
    pub fn new() -> Self {
        Self
    }

    /// Generate the report string
    pub fn generate_report(&self, summary: &RunSummary) -> String {
        let files_title = if summary.emitted.len() > MAX_LISTED_FILES {
            "📋  TOP 10 LARGEST FILES"
        } else {
            "📋  PROCESSED FILES"
        };

        format!(
            "{}\n{}\n\n{}\n{}",
            files_title,
            self.create_files_table(summary),
            "✅  FLATTENING COMPLETE",
            self.create_summary_table(summary)
        )
    }

    /// Print the report to stdout
    pub fn print_report(&self, summary: &RunSummary) {
        println!("\n{}", self.generate_report(summary));
    }

    fn create_summary_table(&self, summary: &RunSummary) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: &'static str,

            #[tabled(rename = "Value")]
            value: String,
        }

        let total_bytes: u64 = summary.emitted.iter().map(|f| f.bytes).sum();
        let total_lines: usize = summary.emitted.iter().map(|f| f.lines).sum();
        let total_chars: usize = summary.emitted.iter().map(|f| f.chars).sum();

        let rows = vec![
            SummaryRow {
                key: "📂 Output File",
                value: summary.output_file.display().to_string(),
            },
            SummaryRow {
                key: "⏱️ Process Time",
                value: format!("{:.4?}", summary.duration),
            },
            SummaryRow {
                key: "📁 Folders",
                value: summary.folders.to_string(),
            },
            SummaryRow {
                key: "📄 Files Written",
                value: format_number(summary.emitted.len()),
            },
            SummaryRow {
                key: "⏭️ Files Skipped",
                value: format_number(summary.skipped.len()),
            },
            SummaryRow {
                key: "💾 Total Size",
                value: format_file_size(total_bytes),
            },
            SummaryRow {
                key: "📝 Total Lines",
                value: format_number(total_lines),
            },
            SummaryRow {
                key: "📦 LLM Tokens",
                value: format!("{} tokens (estimated)", format_number(total_chars / 4)),
            },
        ];

        style(Table::new(rows))
    }

    fn create_files_table(&self, summary: &RunSummary) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Size")]
            size: String,

            #[tabled(rename = "Lines")]
            lines: String,

            #[tabled(rename = "Est. Tokens")]
            tokens: String,
        }

        let mut files: Vec<&EmittedFile> = summary.emitted.iter().collect();
        if files.len() > MAX_LISTED_FILES {
            files.sort_by(|a, b| b.bytes.cmp(&a.bytes));
            files.truncate(TOP_FILES);
        }

        let rows: Vec<FileRow> = files
            .into_iter()
            .map(|file| FileRow {
                path: file.tag_path.clone(),
                size: format_file_size(file.bytes),
                lines: format_number(file.lines),
                tokens: format_number(file.chars / 4),
            })
            .collect();

        style(Table::new(rows))
    }
}

fn style(mut table: Table) -> String {
    table
        .with(Style::rounded())
        .with(Padding::new(1, 1, 0, 0))
        .with(Modify::new(Columns::new(..)).with(Alignment::left()));
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    fn file(path: &str, bytes: u64) -> EmittedFile {
        EmittedFile {
            tag_path: path.to_string(),
            bytes,
            lines: 1,
            chars: bytes as usize,
        }
    }

    fn summary(emitted: Vec<EmittedFile>) -> RunSummary {
        RunSummary {
            output_file: PathBuf::from("codebase.txt"),
            folders: 1,
            emitted,
            skipped: vec![PathBuf::from("proj/bad.txt")],
            duration: Duration::from_millis(3),
        }
    }

    #[test]
    fn lists_every_file_when_few() {
        let report = Reporter::new().generate_report(&summary(vec![
            file("proj/a.py", 10),
            file("proj/Makefile", 5),
        ]));
        assert!(report.contains("PROCESSED FILES"));
        assert!(report.contains("proj/a.py"));
        assert!(report.contains("proj/Makefile"));
        assert!(report.contains("codebase.txt"));
    }

    #[test]
    fn lists_only_largest_when_many() {
        let files = (0..20).map(|i| file(&format!("f{:02}.txt", i), i)).collect();
        let report = Reporter::new().generate_report(&summary(files));
        assert!(report.contains("TOP 10 LARGEST FILES"));
        assert!(report.contains("f19.txt"));
        assert!(report.contains("f10.txt"));
        assert!(!report.contains("f09.txt"));
    }
}
