use crate::rule::TableRule;

/// The ordered list of tables selected for one anonymization run.
///
/// Built once from the catalog and an optional filter; immutable for the
/// run's duration.
#[derive(Debug)]
pub struct Plan {
    tables: Vec<&'static TableRule>,
}

impl Plan {
    pub fn from_rules(tables: Vec<&'static TableRule>) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &[&'static TableRule] {
        &self.tables
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
