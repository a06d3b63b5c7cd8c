use dolimask_generate::GeneratorKind;

use crate::dolibarr;
use crate::plan::Plan;

/// Primary key column assumed for tables without an explicit entry.
pub const DEFAULT_PRIMARY_KEY: &str = "rowid";

/// One column and the shape of its substitute value.
#[derive(Debug, Clone, Copy)]
pub struct ColumnRule {
    pub column: &'static str,
    pub kind: GeneratorKind,
}

/// Catalog entry binding a table to its primary key and column rules.
///
/// Column order is declaration order and fixes the SET-clause order of
/// generated UPDATE statements.
#[derive(Debug)]
pub struct TableRule {
    pub table: &'static str,
    pub primary_key: &'static str,
    /// Human-readable label for operator prompts; not load-bearing.
    pub label: &'static str,
    pub columns: &'static [ColumnRule],
}

/// The static set of anonymizable tables.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    tables: &'static [TableRule],
}

impl Catalog {
    /// The built-in Dolibarr catalog.
    pub fn builtin() -> Self {
        Self {
            tables: dolibarr::TABLES,
        }
    }

    pub fn tables(&self) -> &'static [TableRule] {
        self.tables
    }

    pub fn get(&self, name: &str) -> Option<&'static TableRule> {
        self.tables.iter().find(|rule| rule.table == name)
    }

    /// Primary key for a table name; falls back to [`DEFAULT_PRIMARY_KEY`]
    /// for tables the catalog does not list.
    pub fn primary_key(&self, name: &str) -> &'static str {
        self.get(name)
            .map(|rule| rule.primary_key)
            .unwrap_or(DEFAULT_PRIMARY_KEY)
    }

    /// Build the run plan: the whole catalog in declaration order, or the
    /// subset naming tables in `filter`. Unknown names are ignored.
    pub fn plan(&self, filter: Option<&[String]>) -> Plan {
        let selected = self
            .tables
            .iter()
            .filter(|rule| match filter {
                Some(names) => names.iter().any(|name| name == rule.table),
                None => true,
            })
            .collect();
        Plan::from_rules(selected)
    }
}
