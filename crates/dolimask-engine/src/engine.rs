use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use dolimask_catalog::{Plan, TableRule};

use crate::hooks::{RunHooks, TablePreview};
use crate::report::{RunReport, TableOutcome, TableReport};
use crate::session::{Session, SqlValue};

/// Tunables for a run.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Observed update throughput used for the pre-run duration estimate.
    pub rows_per_second: f64,
    /// Fixed seed for reproducible substitute values; random when absent.
    pub seed: Option<u64>,
    /// Emit a progress callback every this many processed rows.
    pub progress_every: u64,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            rows_per_second: 25.0,
            seed: None,
            progress_every: 50,
        }
    }
}

/// Walks the plan table by table and rewrites sensitive columns in place.
///
/// One transaction per table: every row update of a table either commits
/// together or rolls back together. A failure on one table never aborts the
/// remainder of the plan.
#[derive(Debug, Clone, Default)]
pub struct AnonymizeEngine {
    options: EngineOptions,
}

impl AnonymizeEngine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    pub async fn run<S, H>(&self, session: &mut S, plan: &Plan, hooks: &mut H) -> RunReport
    where
        S: Session + ?Sized,
        H: RunHooks + ?Sized,
    {
        let mut rng = match self.options.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };

        let mut report = RunReport::default();
        info!(tables = plan.len(), "anonymization started");

        for rule in plan.tables() {
            let table_report = self
                .run_table(session, rule, hooks, &mut rng)
                .await;
            hooks.on_table_finished(&table_report);
            report.tables.push(table_report);
        }

        info!(
            tables = report.tables.len(),
            completed = report.completed_tables(),
            updated = report.total_updated(),
            failed_rows = report.total_failed_rows(),
            "anonymization finished"
        );
        report
    }

    async fn run_table<S, H>(
        &self,
        session: &mut S,
        rule: &TableRule,
        hooks: &mut H,
        rng: &mut ChaCha8Rng,
    ) -> TableReport
    where
        S: Session + ?Sized,
        H: RunHooks + ?Sized,
    {
        let start = Instant::now();
        let finish = |rows: u64, outcome: TableOutcome| TableReport {
            table: rule.table.to_string(),
            rows,
            outcome,
            duration: start.elapsed(),
        };

        let count_sql = format!("SELECT COUNT(*) FROM {}", rule.table);
        let rows = match session.fetch_count(&count_sql).await {
            Ok(rows) => rows,
            Err(error) => {
                warn!(table = rule.table, %error, "row count failed, skipping table");
                return finish(0, TableOutcome::CountFailed);
            }
        };

        let preview = TablePreview {
            table: rule.table,
            label: rule.label,
            rows,
            estimated: estimate_duration(rows, self.options.rows_per_second),
        };
        if !hooks.confirm_table(&preview) {
            info!(table = rule.table, "table declined by operator");
            return finish(rows, TableOutcome::Declined);
        }

        let snapshot_sql = format!("SELECT {} FROM {}", rule.primary_key, rule.table);
        let ids = match session.fetch_ids(&snapshot_sql).await {
            Ok(ids) => ids,
            Err(error) => {
                warn!(table = rule.table, %error, "key snapshot failed, skipping table");
                return finish(rows, TableOutcome::SnapshotFailed);
            }
        };
        if ids.is_empty() {
            info!(table = rule.table, "table is empty, nothing to anonymize");
            return finish(rows, TableOutcome::Empty);
        }

        let statement = update_statement(rule);
        let progress_every = self.options.progress_every.max(1);
        let total = ids.len() as u64;
        let mut updated = 0_u64;
        let mut failed = 0_u64;

        info!(table = rule.table, rows = total, "anonymizing table");

        for (index, id) in ids.into_iter().enumerate() {
            let mut params: Vec<SqlValue> = rule
                .columns
                .iter()
                .map(|column| SqlValue::Text(column.kind.generate(rng)))
                .collect();
            params.push(SqlValue::Int(id));

            match session.execute(&statement, &params).await {
                Ok(_) => updated += 1,
                Err(error) => {
                    failed += 1;
                    warn!(table = rule.table, id, %error, "row update failed");
                    hooks.on_row_failed(rule.table, id, &error);
                }
            }

            let done = index as u64 + 1;
            if done % progress_every == 0 || done == total {
                let remaining =
                    estimate_duration(total - done, self.options.rows_per_second);
                hooks.on_row_progress(rule.table, done, total, remaining);
            }
        }

        match session.commit().await {
            Ok(()) => {
                info!(table = rule.table, updated, failed, "table committed");
                finish(rows, TableOutcome::Completed { updated, failed })
            }
            Err(error) => {
                warn!(table = rule.table, %error, "commit failed, table rolled back");
                finish(
                    rows,
                    TableOutcome::CommitFailed {
                        updated,
                        failed,
                        error: error.to_string(),
                    },
                )
            }
        }
    }
}

/// Builds the per-table UPDATE, one placeholder per rule column plus the key.
pub fn update_statement(rule: &TableRule) -> String {
    let assignments: Vec<String> = rule
        .columns
        .iter()
        .map(|column| format!("{} = ?", column.column))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE {} = ?",
        rule.table,
        assignments.join(", "),
        rule.primary_key
    )
}

/// Projected wall-clock duration for `rows` updates at the given throughput.
pub fn estimate_duration(rows: u64, rows_per_second: f64) -> Duration {
    if rows_per_second <= 0.0 {
        return Duration::ZERO;
    }
    Duration::from_secs_f64(rows as f64 / rows_per_second)
}

/// Renders a duration as `N min SS s` for operator prompts.
pub fn format_eta(duration: Duration) -> String {
    let seconds = duration.as_secs();
    format!("{} min {:02} s", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dolimask_catalog::Catalog;

    #[test]
    fn update_statement_lists_columns_in_rule_order() {
        let catalog = Catalog::builtin();
        let rule = catalog.get("llx_contrat").unwrap();
        assert_eq!(
            update_statement(rule),
            "UPDATE llx_contrat SET ref = ?, note_private = ?, note_public = ? WHERE rowid = ?"
        );
    }

    #[test]
    fn update_statement_uses_the_table_primary_key() {
        let catalog = Catalog::builtin();
        let rule = catalog.get("llx_actioncomm").unwrap();
        assert!(update_statement(rule).ends_with("WHERE id = ?"));
    }

    #[test]
    fn estimate_matches_throughput() {
        assert_eq!(estimate_duration(250, 25.0), Duration::from_secs(10));
        assert_eq!(estimate_duration(0, 25.0), Duration::ZERO);
        assert_eq!(estimate_duration(100, 0.0), Duration::ZERO);
    }

    #[test]
    fn eta_formats_minutes_and_seconds() {
        assert_eq!(format_eta(Duration::from_secs(125)), "2 min 05 s");
        assert_eq!(format_eta(Duration::from_secs(4)), "0 min 04 s");
    }
}
