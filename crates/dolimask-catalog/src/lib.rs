//! Static anonymization catalog for Dolibarr tables.
//!
//! The catalog binds each supported `llx_*` table to its primary key and
//! the set of column generator rules. It is defined once, read-only for
//! the whole run, and never consulted for tables it does not list.

pub mod dolibarr;
pub mod plan;
pub mod rule;

pub use plan::Plan;
pub use rule::{Catalog, ColumnRule, TableRule, DEFAULT_PRIMARY_KEY};
