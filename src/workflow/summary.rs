//! Human-readable summary of a run

use colored::Colorize;

use crate::logging::format_message;

use super::report::{ChangeReport, FileStatus};

/// Renders the report as the text printed at the end of a run
///
/// The opening count leaves out excluded candidates; the closing totals
/// include them.
pub fn render_summary(report: &ChangeReport) -> String {
    let to_process = report.examined() - report.skipped();
    let mut lines = vec![format!("Found {to_process} files to process")];

    for entry in report.entries() {
        let name = entry.display_name();
        let line = match &entry.status {
            FileStatus::Modified => format_message(
                &format!("  Updated: {name}"),
                &format!("  {} {name}", "Updated:".green()),
            ),
            FileStatus::Unchanged => format!("  No changes: {name}"),
            FileStatus::Skipped => format_message(
                &format!("  Skipped: {name}"),
                &format!("  {} {name}", "Skipped:".bright_black()),
            ),
            FileStatus::Failed(failure) => format_message(
                &format!("  Failed: {name} ({})", failure.message),
                &format!("  {} {name} ({})", "Failed:".red(), failure.message),
            ),
        };
        lines.push(line);
    }

    lines.push(String::new());
    if report.is_dry_run() {
        lines.push(format!(
            "Done! Would update {} files (dry run).",
            report.modified()
        ));
    } else {
        lines.push(format!("Done! Updated {} files.", report.modified()));
    }
    lines.push(format!(
        "Examined: {}, modified: {}, unchanged: {}, skipped: {}, errored: {}",
        report.examined(),
        report.modified(),
        report.unchanged(),
        report.skipped(),
        report.errored()
    ));

    lines.join("\n")
}
