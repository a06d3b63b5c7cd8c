use std::time::Duration;

/// How one table of the plan ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableOutcome {
    /// The per-row loop ran to the end and the transaction committed.
    Completed { updated: u64, failed: u64 },
    /// The table holds no rows; nothing to do.
    Empty,
    /// The operator declined this table.
    Declined,
    /// The row count query failed; the table was skipped.
    CountFailed,
    /// The primary key snapshot query failed; the table was skipped.
    SnapshotFailed,
    /// Updates ran but the final commit failed, so none of them stuck.
    CommitFailed {
        updated: u64,
        failed: u64,
        error: String,
    },
}

/// Per-table summary emitted after the table is finished.
#[derive(Debug, Clone)]
pub struct TableReport {
    pub table: String,
    /// Row count measured before the run; zero when counting failed.
    pub rows: u64,
    pub outcome: TableOutcome,
    pub duration: Duration,
}

impl TableReport {
    pub fn committed_updates(&self) -> u64 {
        match self.outcome {
            TableOutcome::Completed { updated, .. } => updated,
            _ => 0,
        }
    }

    pub fn failed_rows(&self) -> u64 {
        match self.outcome {
            TableOutcome::Completed { failed, .. } | TableOutcome::CommitFailed { failed, .. } => {
                failed
            }
            _ => 0,
        }
    }
}

/// Summary of a whole run, one entry per planned table in plan order.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub tables: Vec<TableReport>,
}

impl RunReport {
    pub fn total_updated(&self) -> u64 {
        self.tables.iter().map(TableReport::committed_updates).sum()
    }

    pub fn total_failed_rows(&self) -> u64 {
        self.tables.iter().map(TableReport::failed_rows).sum()
    }

    pub fn completed_tables(&self) -> usize {
        self.tables
            .iter()
            .filter(|report| matches!(report.outcome, TableOutcome::Completed { .. }))
            .count()
    }
}
