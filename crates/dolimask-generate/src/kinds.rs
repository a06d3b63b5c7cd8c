use fake::Fake;
use fake::faker::address::raw::{BuildingNumber, CityName, StreetName, ZipCode};
use fake::faker::company::raw::CompanyName;
use fake::faker::internet::raw::FreeEmail;
use fake::faker::job::raw::Title;
use fake::faker::lorem::raw::{Sentence, Word};
use fake::faker::name::raw::{FirstName, LastName};
use fake::faker::phone_number::raw::PhoneNumber;
use fake::locales::FR_FR;
use rand::Rng;
use rand::seq::IndexedRandom;

const URL_SUFFIXES: &[&str] = &["fr", "com", "net", "org"];

/// The shape of the synthetic value substituted into one column.
///
/// Variants are data, not closures: the catalog stays a static table and
/// generation dispatches here with an explicit RNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    /// Company or organisation name.
    CompanyName,
    /// Person first name.
    FirstName,
    /// Person last name.
    LastName,
    /// Street address flattened to one line.
    Address,
    /// Postal code.
    Zip,
    /// City name.
    City,
    /// Phone number.
    Phone,
    /// E-mail address.
    Email,
    /// HTTP URL.
    Url,
    /// Single lorem word.
    Word,
    /// Job title.
    JobTitle,
    /// Lorem sentence with a fixed word count.
    Sentence { words: usize },
    /// Sentence with a fixed literal prefix (ticket subjects, event labels).
    PrefixedSentence { prefix: &'static str, words: usize },
    /// Lorem text capped at `max_chars` characters.
    Text { max_chars: usize },
    /// Hyphenated UUID v4.
    Uuid,
    /// UUID v4 without hyphens, truncated to `len` characters.
    UuidHex { len: usize },
    /// Literal prefix followed by `len` characters of UUID hex
    /// (FAKEFAC-xxxxxxxxxx style document references).
    PrefixedRef { prefix: &'static str, len: usize },
    /// Pattern where `#` becomes a random digit and `?` a random
    /// uppercase letter; everything else is literal.
    Bothify { pattern: &'static str },
    /// Always the same value (fixed enums such as currency codes).
    Constant { value: &'static str },
    /// Uniform pick from a fixed choice list.
    OneOf { choices: &'static [&'static str] },
    /// EAN-13 barcode with a valid check digit.
    Ean13,
    /// Six lowercase hex digits (color without the leading `#`).
    HexColor,
    /// Dotted-quad IPv4 address.
    Ipv4,
    /// RFC 5322 style message id.
    MessageId,
}

impl GeneratorKind {
    /// Produce one fresh value for this kind.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        match self {
            GeneratorKind::CompanyName => CompanyName(FR_FR).fake_with_rng(rng),
            GeneratorKind::FirstName => FirstName(FR_FR).fake_with_rng(rng),
            GeneratorKind::LastName => LastName(FR_FR).fake_with_rng(rng),
            GeneratorKind::Address => {
                let number: String = BuildingNumber(FR_FR).fake_with_rng(rng);
                let street: String = StreetName(FR_FR).fake_with_rng(rng);
                let zip: String = ZipCode(FR_FR).fake_with_rng(rng);
                let city: String = CityName(FR_FR).fake_with_rng(rng);
                format!("{number} {street}, {zip} {city}")
            }
            GeneratorKind::Zip => ZipCode(FR_FR).fake_with_rng(rng),
            GeneratorKind::City => CityName(FR_FR).fake_with_rng(rng),
            GeneratorKind::Phone => PhoneNumber(FR_FR).fake_with_rng(rng),
            GeneratorKind::Email => FreeEmail(FR_FR).fake_with_rng(rng),
            GeneratorKind::Url => {
                let word: String = Word(FR_FR).fake_with_rng(rng);
                let suffix = URL_SUFFIXES.choose(rng).copied().unwrap_or("com");
                format!("https://www.{}.{suffix}", word.to_lowercase())
            }
            GeneratorKind::Word => Word(FR_FR).fake_with_rng(rng),
            GeneratorKind::JobTitle => Title(FR_FR).fake_with_rng(rng),
            GeneratorKind::Sentence { words } => sentence(*words, rng),
            GeneratorKind::PrefixedSentence { prefix, words } => {
                format!("{prefix}{}", sentence(*words, rng))
            }
            GeneratorKind::Text { max_chars } => lorem_text(*max_chars, rng),
            GeneratorKind::Uuid => random_uuid(rng).to_string(),
            GeneratorKind::UuidHex { len } => {
                let mut hex = random_uuid(rng).simple().to_string();
                hex.truncate(*len);
                hex
            }
            GeneratorKind::PrefixedRef { prefix, len } => {
                let mut hex = random_uuid(rng).simple().to_string();
                hex.truncate(*len);
                format!("{prefix}{hex}")
            }
            GeneratorKind::Bothify { pattern } => bothify(pattern, rng),
            GeneratorKind::Constant { value } => (*value).to_string(),
            GeneratorKind::OneOf { choices } => {
                choices.choose(rng).copied().unwrap_or_default().to_string()
            }
            GeneratorKind::Ean13 => ean13(rng),
            GeneratorKind::HexColor => {
                let value: u32 = rng.random_range(0..0x100_0000);
                format!("{value:06x}")
            }
            GeneratorKind::Ipv4 => {
                let a: u8 = rng.random_range(1..=223);
                let b: u8 = rng.random_range(0..=255);
                let c: u8 = rng.random_range(0..=255);
                let d: u8 = rng.random_range(1..=254);
                format!("{a}.{b}.{c}.{d}")
            }
            GeneratorKind::MessageId => {
                let hex = random_uuid(rng).simple().to_string();
                format!("<{hex}@example.com>")
            }
        }
    }
}

fn sentence<R: Rng + ?Sized>(words: usize, rng: &mut R) -> String {
    let words = words.max(1);
    Sentence(FR_FR, words..words + 1).fake_with_rng(rng)
}

/// Build lorem text close to, and never above, `max_chars` characters.
fn lorem_text<R: Rng + ?Sized>(max_chars: usize, rng: &mut R) -> String {
    let mut text = String::new();
    loop {
        let words = rng.random_range(4..=9);
        let next: String = sentence(words, rng);
        if text.is_empty() {
            text = next;
            continue;
        }
        if text.chars().count() + 1 + next.chars().count() > max_chars {
            break;
        }
        text.push(' ');
        text.push_str(&next);
    }
    truncate_chars(text, max_chars)
}

fn truncate_chars(value: String, max_chars: usize) -> String {
    match value.char_indices().nth(max_chars) {
        Some((idx, _)) => value[..idx].to_string(),
        None => value,
    }
}

fn bothify<R: Rng + ?Sized>(pattern: &str, rng: &mut R) -> String {
    pattern
        .chars()
        .map(|c| match c {
            '#' => char::from(b'0' + rng.random_range(0..10u8)),
            '?' => char::from(b'A' + rng.random_range(0..26u8)),
            other => other,
        })
        .collect()
}

fn ean13<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut digits = [0_u8; 13];
    for digit in digits.iter_mut().take(12) {
        *digit = rng.random_range(0..10);
    }
    let sum: u32 = digits
        .iter()
        .take(12)
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { *d as u32 } else { *d as u32 * 3 })
        .sum();
    digits[12] = ((10 - (sum % 10)) % 10) as u8;
    digits.iter().map(|d| char::from(b'0' + *d)).collect()
}

fn random_uuid<R: Rng + ?Sized>(rng: &mut R) -> uuid::Uuid {
    let mut bytes = [0_u8; 16];
    rng.fill(&mut bytes);
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    uuid::Uuid::from_bytes(bytes)
}
