use route53domains_types::Price;
use std::collections::HashSet;

#[test]
fn equality_follows_bit_pattern() {
    assert_eq!(Price::new(9.99), Price::from(9.99));
    assert_ne!(Price::new(0.0), Price::new(-0.0));
    assert_eq!(Price::new(f64::NAN), Price::new(-f64::NAN));
}

#[test]
fn usable_as_set_member() {
    let set: HashSet<Price> = [Price::new(1.5), Price::new(1.5), Price::new(f64::NAN)]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn display_keeps_fraction() {
    assert_eq!(Price::new(12.0).to_string(), "12.0");
    assert_eq!(Price::new(0.5).to_string(), "0.5");
}

// ── Serde ───────────────────────────────────────────────────────

#[test]
fn reads_integers_and_fractions() {
    let whole: Price = serde_json::from_str("12").unwrap();
    assert_eq!(whole.amount(), 12.0);
    let cents: Price = serde_json::from_str("8.25").unwrap();
    assert_eq!(cents, Price::new(8.25));
    assert_eq!(serde_json::to_string(&cents).unwrap(), "8.25");
}

#[test]
fn rejects_strings() {
    assert!(serde_json::from_str::<Price>(r#""12.00""#).is_err());
}
