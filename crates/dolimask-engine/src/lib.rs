//! Table-by-table anonymization engine.
//!
//! The engine walks a [`dolimask_catalog::Plan`] over an abstract database
//! [`Session`], generating substitute values per row and committing once per
//! table. Interaction with the operator goes through [`RunHooks`].

pub mod engine;
pub mod hooks;
pub mod report;
pub mod session;

pub use engine::{estimate_duration, format_eta, update_statement, AnonymizeEngine, EngineOptions};
pub use hooks::{AutoConfirm, RunHooks, TablePreview};
pub use report::{RunReport, TableOutcome, TableReport};
pub use session::{Session, SessionError, SqlValue};
