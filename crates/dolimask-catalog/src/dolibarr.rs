//! Built-in column rules for the supported Dolibarr tables.
//!
//! Each entry mirrors a sensitive column of the stock Dolibarr schema.
//! Login and password columns of `llx_user` are deliberately absent: the
//! operator keeps working credentials after anonymization.

use dolimask_generate::GeneratorKind as G;

use crate::rule::{ColumnRule, TableRule, DEFAULT_PRIMARY_KEY};

const fn col(column: &'static str, kind: G) -> ColumnRule {
    ColumnRule { column, kind }
}

const CIVILITIES: &[&str] = &["M.", "Mme", "Dr", "Me"];
const GENDERS: &[&str] = &["male", "female", "other"];

const SOCIETE: &[ColumnRule] = &[
    col("nom", G::CompanyName),
    col("name_alias", G::CompanyName),
    col("ref_ext", G::Uuid),
    col("ref_int", G::Uuid),
    col("address", G::Address),
    col("zip", G::Zip),
    col("town", G::City),
    col("phone", G::Phone),
    col("fax", G::Phone),
    col("url", G::Url),
    col("email", G::Email),
    col("socialnetworks", G::Text { max_chars: 200 }),
    col("siren", G::Bothify { pattern: "#########" }),
    col("siret", G::Bothify { pattern: "##############" }),
    col("ape", G::Bothify { pattern: "????##" }),
    col("idprof4", G::Bothify { pattern: "IDP4####" }),
    col("idprof5", G::Bothify { pattern: "IDP5####" }),
    col("idprof6", G::Bothify { pattern: "IDP6####" }),
    col("tva_intra", G::Bothify { pattern: "FR##????####" }),
    col("note_private", G::Text { max_chars: 500 }),
    col("note_public", G::Text { max_chars: 500 }),
    col("model_pdf", G::Word),
    col("last_main_doc", G::Word),
    col("supplier_account", G::Bothify { pattern: "SUPACC####" }),
    col("fk_prospectlevel", G::Bothify { pattern: "PROSP##" }),
    col("location_incoterms", G::City),
    col("deposit_percent", G::Bothify { pattern: "##" }),
    col("canvas", G::Word),
    col("import_key", G::UuidHex { len: 14 }),
    col("webservices_url", G::Url),
    col("webservices_key", G::Uuid),
    col("barcode", G::Ean13),
    col("accountancy_code_sell", G::Bothify { pattern: "ACS####" }),
    col("accountancy_code_buy", G::Bothify { pattern: "ACB####" }),
    col("multicurrency_code", G::Constant { value: "EUR" }),
    col("default_lang", G::Constant { value: "fr_FR" }),
    col("logo", G::Word),
    col("logo_squarred", G::Word),
];

const SOCPEOPLE: &[ColumnRule] = &[
    col("ref_ext", G::Uuid),
    col("civility", G::OneOf { choices: CIVILITIES }),
    col("lastname", G::LastName),
    col("firstname", G::FirstName),
    col("address", G::Address),
    col("zip", G::Zip),
    col("town", G::City),
    col("poste", G::JobTitle),
    col("phone", G::Phone),
    col("phone_perso", G::Phone),
    col("phone_mobile", G::Phone),
    col("fax", G::Phone),
    col("email", G::Email),
    col("socialnetworks", G::Text { max_chars: 200 }),
    col("photo", G::Word),
    col("fk_prospectlevel", G::Bothify { pattern: "PROSP##" }),
    col("note_private", G::Text { max_chars: 500 }),
    col("note_public", G::Text { max_chars: 500 }),
    col("default_lang", G::Constant { value: "fr_FR" }),
    col("canvas", G::Word),
    col("import_key", G::UuidHex { len: 14 }),
];

const USER: &[ColumnRule] = &[
    col("ref_employee", G::Bothify { pattern: "EMP####" }),
    col("ref_ext", G::Uuid),
    col("gender", G::OneOf { choices: GENDERS }),
    col("civility", G::OneOf { choices: CIVILITIES }),
    col("lastname", G::LastName),
    col("firstname", G::FirstName),
    col("address", G::Address),
    col("zip", G::Zip),
    col("town", G::City),
    col("job", G::JobTitle),
    col("office_phone", G::Phone),
    col("office_fax", G::Phone),
    col("user_mobile", G::Phone),
    col("personal_mobile", G::Phone),
    col("email", G::Email),
    col("personal_email", G::Email),
    col("socialnetworks", G::Text { max_chars: 200 }),
    col("signature", G::Text { max_chars: 200 }),
    col("note_public", G::Text { max_chars: 500 }),
    col("note_private", G::Text { max_chars: 500 }),
    col("model_pdf", G::Word),
    col("ldap_sid", G::Uuid),
    col("openid", G::Url),
    col("photo", G::Word),
    col("lang", G::Constant { value: "fr_FR" }),
    col("color", G::HexColor),
    col("barcode", G::Ean13),
    col("accountancy_code", G::Bothify { pattern: "ACCT####" }),
    col("import_key", G::UuidHex { len: 14 }),
    col("iplastlogin", G::Ipv4),
    col("ippreviouslogin", G::Ipv4),
    col("twofactor_qrcode", G::Text { max_chars: 200 }),
    col("twofactor_params", G::Text { max_chars: 200 }),
    col("national_registration_number", G::Bothify { pattern: "##########" }),
    col("birth_place", G::City),
    col("email_oauth2", G::Email),
    col("last_main_doc", G::Word),
];

const FACTURE: &[ColumnRule] = &[
    col("ref", G::PrefixedRef { prefix: "FAKEFAC-", len: 10 }),
    col("ref_ext", G::Uuid),
    col("ref_int", G::Uuid),
    col("ref_client", G::Bothify { pattern: "FAKECLIENT-####" }),
    col("increment", G::Bothify { pattern: "INC####" }),
    col("close_code", G::Bothify { pattern: "CLOSE####" }),
    col("close_note", G::Sentence { words: 5 }),
    col("note_private", G::Text { max_chars: 500 }),
    col("note_public", G::Text { max_chars: 500 }),
    col("model_pdf", G::Word),
    col("location_incoterms", G::City),
    col("import_key", G::UuidHex { len: 14 }),
    col("extraparams", G::Bothify { pattern: "PARAMS####" }),
    col("multicurrency_code", G::Constant { value: "EUR" }),
    col("last_main_doc", G::Word),
    col("module_source", G::Word),
    col("pos_source", G::Word),
];

const PROPAL: &[ColumnRule] = &[
    col("ref", G::PrefixedRef { prefix: "FAKEPROP-", len: 10 }),
    col("ref_client", G::Bothify { pattern: "FAKECLIENT-####" }),
    col("note_private", G::Text { max_chars: 500 }),
    col("note_public", G::Text { max_chars: 500 }),
    col("model_pdf", G::Word),
];

const COMMANDE: &[ColumnRule] = &[
    col("ref", G::PrefixedRef { prefix: "FAKECMD-", len: 10 }),
    col("ref_client", G::Bothify { pattern: "FAKECLIENT-####" }),
    col("note_private", G::Text { max_chars: 500 }),
    col("note_public", G::Text { max_chars: 500 }),
    col("model_pdf", G::Word),
];

const CONTRAT: &[ColumnRule] = &[
    col("ref", G::PrefixedRef { prefix: "FAKECTR-", len: 10 }),
    col("note_private", G::Text { max_chars: 500 }),
    col("note_public", G::Text { max_chars: 500 }),
];

const FACTURE_FOURN: &[ColumnRule] = &[
    col("ref", G::PrefixedRef { prefix: "FAKEFACF-", len: 10 }),
    col("ref_supplier", G::PrefixedRef { prefix: "FAKEFOURN-", len: 5 }),
    col("note_private", G::Text { max_chars: 500 }),
    col("note_public", G::Text { max_chars: 500 }),
    col("model_pdf", G::Word),
];

const COMMANDE_FOURN: &[ColumnRule] = &[
    col("ref", G::PrefixedRef { prefix: "FAKECMDF-", len: 10 }),
    col("ref_supplier", G::PrefixedRef { prefix: "FAKEFOURN-", len: 5 }),
    col("note_private", G::Text { max_chars: 500 }),
    col("note_public", G::Text { max_chars: 500 }),
    col("model_pdf", G::Word),
];

const PROJET: &[ColumnRule] = &[
    col("ref", G::PrefixedRef { prefix: "FAKEPROJ-", len: 10 }),
    col("title", G::Sentence { words: 3 }),
    col("description", G::Text { max_chars: 500 }),
    col("note_private", G::Text { max_chars: 500 }),
    col("note_public", G::Text { max_chars: 500 }),
    col("model_pdf", G::Word),
    col("last_main_doc", G::Word),
    col("import_key", G::UuidHex { len: 14 }),
    col("email_msgid", G::MessageId),
    col("ip", G::Ipv4),
    col("location", G::City),
    col("extraparams", G::Bothify { pattern: "PARAMS####" }),
];

const TICKET: &[ColumnRule] = &[
    col("ref", G::PrefixedRef { prefix: "FAKETICKET-", len: 10 }),
    col("track_id", G::PrefixedRef { prefix: "TRACK-", len: 10 }),
    col("origin_email", G::Email),
    col("subject", G::PrefixedSentence { prefix: "Ticket ", words: 3 }),
    col("message", G::Text { max_chars: 1000 }),
    col("type_code", G::Bothify { pattern: "TYPE####" }),
    col("category_code", G::Bothify { pattern: "CAT####" }),
    col("severity_code", G::Bothify { pattern: "SEV####" }),
    col("timing", G::Bothify { pattern: "TIME##" }),
    col("import_key", G::UuidHex { len: 14 }),
    col("email_msgid", G::MessageId),
    col("ip", G::Ipv4),
];

const ACTIONCOMM: &[ColumnRule] = &[
    col("ref", G::PrefixedRef { prefix: "FAKEEVENT-", len: 10 }),
    col("ref_ext", G::PrefixedRef { prefix: "FAKEEXT-", len: 10 }),
    col("code", G::Bothify { pattern: "CODE####" }),
    col("location", G::City),
    col("label", G::PrefixedSentence { prefix: "Event ", words: 3 }),
    col("note", G::Text { max_chars: 1000 }),
    col("email_subject", G::PrefixedSentence { prefix: "Re: ", words: 3 }),
    col("email_msgid", G::MessageId),
    col("email_from", G::Email),
    col("email_sender", G::Email),
    col("email_to", G::Email),
    col("email_tocc", G::Email),
    col("email_tobcc", G::Email),
    col("errors_to", G::Email),
    col("recurid", G::PrefixedRef { prefix: "RECUR-", len: 8 }),
    col("recurrule", G::Word),
    col("elementtype", G::Word),
    col("import_key", G::UuidHex { len: 14 }),
    col("extraparams", G::Bothify { pattern: "PARAMS####" }),
    col("reply_to", G::Email),
    col("ip", G::Ipv4),
];

/// Built-in table rules, in processing order.
pub const TABLES: &[TableRule] = &[
    TableRule {
        table: "llx_societe",
        primary_key: DEFAULT_PRIMARY_KEY,
        label: "(Third parties)",
        columns: SOCIETE,
    },
    TableRule {
        table: "llx_socpeople",
        primary_key: DEFAULT_PRIMARY_KEY,
        label: "(Contacts)",
        columns: SOCPEOPLE,
    },
    TableRule {
        table: "llx_user",
        primary_key: DEFAULT_PRIMARY_KEY,
        label: "(Users)",
        columns: USER,
    },
    TableRule {
        table: "llx_facture",
        primary_key: DEFAULT_PRIMARY_KEY,
        label: "(Customer invoices)",
        columns: FACTURE,
    },
    TableRule {
        table: "llx_propal",
        primary_key: DEFAULT_PRIMARY_KEY,
        label: "(Commercial proposals)",
        columns: PROPAL,
    },
    TableRule {
        table: "llx_commande",
        primary_key: DEFAULT_PRIMARY_KEY,
        label: "(Customer orders)",
        columns: COMMANDE,
    },
    TableRule {
        table: "llx_contrat",
        primary_key: DEFAULT_PRIMARY_KEY,
        label: "(Contracts)",
        columns: CONTRAT,
    },
    TableRule {
        table: "llx_facture_fourn",
        primary_key: DEFAULT_PRIMARY_KEY,
        label: "(Supplier invoices)",
        columns: FACTURE_FOURN,
    },
    TableRule {
        table: "llx_commande_fournisseur",
        primary_key: DEFAULT_PRIMARY_KEY,
        label: "(Supplier orders)",
        columns: COMMANDE_FOURN,
    },
    TableRule {
        table: "llx_projet",
        primary_key: DEFAULT_PRIMARY_KEY,
        label: "(Projects)",
        columns: PROJET,
    },
    TableRule {
        table: "llx_ticket",
        primary_key: DEFAULT_PRIMARY_KEY,
        label: "(Tickets)",
        columns: TICKET,
    },
    TableRule {
        table: "llx_actioncomm",
        primary_key: "id",
        label: "(Events and actions)",
        columns: ACTIONCOMM,
    },
];
