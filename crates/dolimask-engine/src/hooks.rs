use std::time::Duration;

use crate::report::TableReport;
use crate::session::SessionError;

/// What the operator sees before deciding on a table.
#[derive(Debug, Clone)]
pub struct TablePreview<'a> {
    pub table: &'a str,
    pub label: &'a str,
    pub rows: u64,
    pub estimated: Duration,
}

/// Run-time callbacks for confirmation prompts and progress display.
///
/// Default implementations confirm everything and stay silent, so embedders
/// only override what they care about.
pub trait RunHooks: Send {
    /// Asked once per counted table, empty ones included. Returning `false`
    /// skips the table.
    fn confirm_table(&mut self, preview: &TablePreview<'_>) -> bool {
        let _ = preview;
        true
    }

    /// Emitted every few rows; `remaining` is the projected time left for
    /// this table at the configured throughput.
    fn on_row_progress(&mut self, table: &str, done: u64, total: u64, remaining: Duration) {
        let _ = (table, done, total, remaining);
    }

    fn on_row_failed(&mut self, table: &str, id: i64, error: &SessionError) {
        let _ = (table, id, error);
    }

    fn on_table_finished(&mut self, report: &TableReport) {
        let _ = report;
    }
}

/// Hooks that confirm every table without asking; for unattended runs.
#[derive(Debug, Default)]
pub struct AutoConfirm;

impl RunHooks for AutoConfirm {}
