//! Terminal-facing run hooks: confirmations and progress lines.

use std::time::Duration;

use dolimask_engine::{
    format_eta, RunHooks, SessionError, TableOutcome, TablePreview, TableReport,
};

use crate::prompt;

/// Prints previews and progress to the terminal and asks before each table
/// unless the run is unattended.
pub struct CliHooks {
    assume_yes: bool,
}

impl CliHooks {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl RunHooks for CliHooks {
    fn confirm_table(&mut self, preview: &TablePreview<'_>) -> bool {
        println!(
            "\n{} {}: {} rows, about {}",
            preview.table,
            preview.label,
            preview.rows,
            format_eta(preview.estimated)
        );
        if preview.table == "llx_user" {
            println!("  Logins and passwords are kept as they are.");
        }
        if self.assume_yes {
            return true;
        }
        prompt::confirm("Anonymize this table?", false).unwrap_or(false)
    }

    fn on_row_progress(&mut self, table: &str, done: u64, total: u64, remaining: Duration) {
        if done == total {
            println!("  {table}: {done}/{total} rows");
        } else {
            println!(
                "  {table}: {done}/{total} rows, about {} left",
                format_eta(remaining)
            );
        }
    }

    fn on_row_failed(&mut self, table: &str, id: i64, error: &SessionError) {
        eprintln!("  {table}: row {id} failed: {error}");
    }

    fn on_table_finished(&mut self, report: &TableReport) {
        match &report.outcome {
            TableOutcome::Completed { updated, failed } => {
                println!("  {updated} rows updated, {failed} failed, committed.");
            }
            TableOutcome::Empty => println!("  {}: empty, skipped.", report.table),
            TableOutcome::Declined => println!("  skipped."),
            TableOutcome::CountFailed | TableOutcome::SnapshotFailed => {
                eprintln!("  {}: skipped after a query failure.", report.table);
            }
            TableOutcome::CommitFailed { error, .. } => {
                eprintln!("  commit failed, changes rolled back: {error}");
            }
        }
    }
}
