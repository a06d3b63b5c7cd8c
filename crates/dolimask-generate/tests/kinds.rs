use dolimask_generate::GeneratorKind;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

#[test]
fn same_seed_same_sequence() {
    let kinds = [
        GeneratorKind::CompanyName,
        GeneratorKind::Email,
        GeneratorKind::Uuid,
        GeneratorKind::Bothify { pattern: "FR##????####" },
        GeneratorKind::Text { max_chars: 200 },
    ];
    let mut a = rng(42);
    let mut b = rng(42);
    for kind in kinds {
        assert_eq!(kind.generate(&mut a), kind.generate(&mut b));
    }
}

#[test]
fn fresh_values_per_call() {
    let mut rng = rng(7);
    let first = GeneratorKind::Uuid.generate(&mut rng);
    let second = GeneratorKind::Uuid.generate(&mut rng);
    assert_ne!(first, second);
}

#[test]
fn constant_is_constant() {
    let mut rng = rng(1);
    let kind = GeneratorKind::Constant { value: "EUR" };
    assert_eq!(kind.generate(&mut rng), "EUR");
    assert_eq!(kind.generate(&mut rng), "EUR");
}

#[test]
fn one_of_stays_in_choices() {
    const CIVILITIES: &[&str] = &["M.", "Mme", "Dr", "Me"];
    let mut rng = rng(3);
    for _ in 0..50 {
        let value = GeneratorKind::OneOf { choices: CIVILITIES }.generate(&mut rng);
        assert!(CIVILITIES.contains(&value.as_str()), "unexpected: {value}");
    }
}

#[test]
fn bothify_replaces_placeholders() {
    let mut rng = rng(11);
    let value = GeneratorKind::Bothify { pattern: "FR##????####" }.generate(&mut rng);
    assert_eq!(value.len(), 12);
    assert!(value.starts_with("FR"));
    assert!(value[2..4].chars().all(|c| c.is_ascii_digit()));
    assert!(value[4..8].chars().all(|c| c.is_ascii_uppercase()));
    assert!(value[8..].chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn uuid_hex_is_truncated_and_dashless() {
    let mut rng = rng(13);
    let value = GeneratorKind::UuidHex { len: 14 }.generate(&mut rng);
    assert_eq!(value.len(), 14);
    assert!(value.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn prefixed_ref_keeps_prefix() {
    let mut rng = rng(17);
    let value = GeneratorKind::PrefixedRef { prefix: "FAKEFAC-", len: 10 }.generate(&mut rng);
    assert!(value.starts_with("FAKEFAC-"));
    assert_eq!(value.len(), "FAKEFAC-".len() + 10);
}

#[test]
fn ean13_check_digit_is_valid() {
    let mut rng = rng(19);
    for _ in 0..20 {
        let value = GeneratorKind::Ean13.generate(&mut rng);
        assert_eq!(value.len(), 13);
        let digits: Vec<u32> = value.chars().map(|c| c.to_digit(10).unwrap()).collect();
        let sum: u32 = digits
            .iter()
            .enumerate()
            .map(|(i, d)| if i % 2 == 0 { *d } else { *d * 3 })
            .sum();
        assert_eq!(sum % 10, 0, "bad check digit in {value}");
    }
}

#[test]
fn text_respects_max_chars() {
    let mut rng = rng(23);
    for max in [20, 200, 500] {
        let value = GeneratorKind::Text { max_chars: max }.generate(&mut rng);
        assert!(value.chars().count() <= max);
        assert!(!value.is_empty());
    }
}

#[test]
fn ipv4_is_dotted_quad() {
    let mut rng = rng(29);
    let value = GeneratorKind::Ipv4.generate(&mut rng);
    let octets: Vec<&str> = value.split('.').collect();
    assert_eq!(octets.len(), 4);
    for octet in octets {
        octet.parse::<u8>().unwrap();
    }
}

#[test]
fn message_id_is_bracketed() {
    let mut rng = rng(31);
    let value = GeneratorKind::MessageId.generate(&mut rng);
    assert!(value.starts_with('<'));
    assert!(value.ends_with("@example.com>"));
}

#[test]
fn hex_color_has_no_hash() {
    let mut rng = rng(37);
    let value = GeneratorKind::HexColor.generate(&mut rng);
    assert_eq!(value.len(), 6);
    assert!(value.chars().all(|c| c.is_ascii_hexdigit()));
}
