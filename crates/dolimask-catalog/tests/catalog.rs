use std::collections::HashSet;

use dolimask_catalog::{Catalog, DEFAULT_PRIMARY_KEY};

#[test]
fn builtin_covers_the_twelve_dolibarr_tables() {
    let catalog = Catalog::builtin();
    let names: Vec<&str> = catalog.tables().iter().map(|rule| rule.table).collect();
    assert_eq!(
        names,
        vec![
            "llx_societe",
            "llx_socpeople",
            "llx_user",
            "llx_facture",
            "llx_propal",
            "llx_commande",
            "llx_contrat",
            "llx_facture_fourn",
            "llx_commande_fournisseur",
            "llx_projet",
            "llx_ticket",
            "llx_actioncomm",
        ]
    );
}

#[test]
fn every_table_has_at_least_one_column() {
    for rule in Catalog::builtin().tables() {
        assert!(!rule.columns.is_empty(), "{} has no columns", rule.table);
    }
}

#[test]
fn column_names_are_unique_within_each_table() {
    for rule in Catalog::builtin().tables() {
        let mut seen = HashSet::new();
        for column in rule.columns {
            assert!(
                seen.insert(column.column),
                "{} lists {} twice",
                rule.table,
                column.column
            );
        }
    }
}

#[test]
fn actioncomm_uses_id_as_primary_key() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.primary_key("llx_actioncomm"), "id");
    assert_eq!(catalog.primary_key("llx_societe"), DEFAULT_PRIMARY_KEY);
}

#[test]
fn unknown_table_falls_back_to_default_primary_key() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.primary_key("llx_not_a_table"), DEFAULT_PRIMARY_KEY);
}

#[test]
fn plan_without_filter_keeps_catalog_order() {
    let catalog = Catalog::builtin();
    let plan = catalog.plan(None);
    assert_eq!(plan.len(), catalog.tables().len());
    let planned: Vec<&str> = plan.tables().iter().map(|rule| rule.table).collect();
    let all: Vec<&str> = catalog.tables().iter().map(|rule| rule.table).collect();
    assert_eq!(planned, all);
}

#[test]
fn plan_filter_selects_subset_in_catalog_order() {
    let catalog = Catalog::builtin();
    // Filter order does not matter, catalog order wins.
    let filter = vec!["llx_ticket".to_string(), "llx_user".to_string()];
    let plan = catalog.plan(Some(&filter));
    let planned: Vec<&str> = plan.tables().iter().map(|rule| rule.table).collect();
    assert_eq!(planned, vec!["llx_user", "llx_ticket"]);
}

#[test]
fn plan_filter_ignores_unknown_names() {
    let catalog = Catalog::builtin();
    let filter = vec!["llx_nope".to_string(), "llx_contrat".to_string()];
    let plan = catalog.plan(Some(&filter));
    let planned: Vec<&str> = plan.tables().iter().map(|rule| rule.table).collect();
    assert_eq!(planned, vec!["llx_contrat"]);
}

#[test]
fn plan_with_empty_filter_is_empty() {
    let catalog = Catalog::builtin();
    let plan = catalog.plan(Some(&[]));
    assert!(plan.is_empty());
}
