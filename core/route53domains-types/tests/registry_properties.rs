//! Property-based tests for the enum registry laws.
//!
//! - Round-trip: parse(serialize(v)) == v for every member
//! - Rejection: any string outside the token table fails with UnknownEnumValue

use proptest::prelude::*;
use route53domains_types::{CountryCode, EnumRegistry, Error, OperationType};

fn country_strategy() -> impl Strategy<Value = CountryCode> {
    prop::sample::select(CountryCode::VALUES)
}

fn operation_type_strategy() -> impl Strategy<Value = OperationType> {
    prop::sample::select(OperationType::VALUES)
}

proptest! {
    #[test]
    fn country_code_roundtrips(code in country_strategy()) {
        prop_assert_eq!(CountryCode::parse(code.as_str()).unwrap(), code);
    }

    #[test]
    fn operation_type_roundtrips_through_json(op in operation_type_strategy()) {
        let json = serde_json::to_string(&op).unwrap();
        let parsed: OperationType = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, op);
    }

    #[test]
    fn lowercase_country_codes_are_rejected(code in country_strategy()) {
        let lowered = code.as_str().to_ascii_lowercase();
        let is_unknown = matches!(
            CountryCode::parse(&lowered),
            Err(Error::UnknownEnumValue { .. })
        );
        prop_assert!(is_unknown);
    }

    #[test]
    fn arbitrary_strings_parse_only_when_known(s in "[A-Z_]{0,12}") {
        let known = OperationType::tokens().contains(&s.as_str());
        match OperationType::parse(&s) {
            Ok(op) => {
                prop_assert!(known);
                prop_assert_eq!(op.as_str(), s.as_str());
            }
            Err(err) => {
                prop_assert!(!known);
                prop_assert_eq!(err, Error::UnknownEnumValue {
                    registry: "OperationType",
                    value: s.clone(),
                });
            }
        }
    }
}
