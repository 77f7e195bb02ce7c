use pretty_assertions::assert_eq;
use route53domains_model::{
    BillingRecord, ContactDetail, ContactType, CountryCode, DomainSummary, Error, ExtraParam,
    ExtraParamName, FieldValue, GetDomainDetailResult, HOST_NAME_PATTERN, ListDomainsRequest,
    Nameserver, OperationType, Price, RegisterDomainRequest, Tag, Timestamp, TypedRecord,
    Violation,
};

fn detail_for(name: &str) -> GetDomainDetailResult {
    GetDomainDetailResult::default().with_domain_name(name).unwrap()
}

// ── Unset vs empty ───────────────────────────────────────────────

#[test]
fn new_record_has_every_field_unset() {
    let detail = GetDomainDetailResult::default();
    assert!(detail.is_empty());
    assert_eq!(detail.domain_name(), None);
    assert_eq!(detail.auto_renew(), None);
    assert_eq!(detail.nameservers(), None);
    assert_eq!(detail.to_string(), "{}");
}

#[test]
fn unset_string_is_not_equal_to_empty_string() {
    let unset = GetDomainDetailResult::default();
    let empty = detail_for("");
    assert_ne!(unset, empty);
    assert_eq!(empty.domain_name(), Some(""));
}

#[test]
fn unset_flag_is_not_equal_to_false() {
    let unset = DomainSummary::default();
    let off = DomainSummary::default().with_auto_renew(false).unwrap();
    assert_ne!(unset, off);
    assert_eq!(off.auto_renew(), Some(false));
}

#[test]
fn unset_sequence_is_not_equal_to_empty_sequence() {
    let unset = GetDomainDetailResult::default();
    let empty = GetDomainDetailResult::default()
        .with_nameservers(Vec::<Nameserver>::new())
        .unwrap();
    assert_ne!(unset, empty);
    assert_eq!(empty.nameservers(), Some(&[][..]));
}

#[test]
fn unset_integer_is_not_equal_to_zero() {
    let unset = ListDomainsRequest::default();
    let zero = ListDomainsRequest::default().with_max_items(0).unwrap();
    assert_ne!(unset, zero);
}

// ── Fluent chaining ──────────────────────────────────────────────

#[test]
fn fluent_chain_matches_sequential_setters_in_either_order() {
    let chained = DomainSummary::default()
        .with_domain_name("example.com")
        .unwrap()
        .with_auto_renew(true)
        .unwrap();

    let mut forward = DomainSummary::default();
    forward.set_domain_name("example.com").unwrap();
    forward.set_auto_renew(true).unwrap();

    let mut backward = DomainSummary::default();
    backward.set_auto_renew(true).unwrap();
    backward.set_domain_name("example.com").unwrap();

    assert_eq!(chained, forward);
    assert_eq!(forward, backward);
    assert_eq!(chained.stable_hash(), backward.stable_hash());
}

#[test]
fn setter_returns_the_same_record_for_chaining() {
    let mut summary = DomainSummary::default();
    summary
        .set_domain_name("example.com")
        .unwrap()
        .set_transfer_lock(true)
        .unwrap();
    assert_eq!(summary.domain_name(), Some("example.com"));
    assert_eq!(summary.transfer_lock(), Some(true));
}

// ── Constraints ──────────────────────────────────────────────────

#[test]
fn domain_name_accepts_255_characters() {
    let name = "a".repeat(255);
    let detail = detail_for(&name);
    assert_eq!(detail.domain_name(), Some(name.as_str()));
}

#[test]
fn domain_name_rejects_256_characters() {
    let err = GetDomainDetailResult::default()
        .with_domain_name("a".repeat(256))
        .unwrap_err();
    assert_eq!(
        err,
        Error::Validation {
            record: "GetDomainDetailResult",
            field: "DomainName",
            violation: Violation::TooLong { max: 255, actual: 256 },
        }
    );
    assert!(err.is_validation());
    assert_eq!(err.field(), Some("DomainName"));
}

#[test]
fn length_counts_utf16_units_not_bytes() {
    let name = "é".repeat(255);
    assert!(name.len() > 255);
    assert!(GetDomainDetailResult::default().with_domain_name(name).is_ok());
}

#[test]
fn astral_characters_count_as_two_units() {
    // 128 chars, 256 UTF-16 units.
    let name = "\u{1F600}".repeat(128);
    assert_eq!(name.chars().count(), 128);
    let err = GetDomainDetailResult::default()
        .with_domain_name(name)
        .unwrap_err();
    assert_eq!(
        err,
        Error::Validation {
            record: "GetDomainDetailResult",
            field: "DomainName",
            violation: Violation::TooLong { max: 255, actual: 256 },
        }
    );

    let name = "\u{1F600}".repeat(127);
    assert!(GetDomainDetailResult::default().with_domain_name(name).is_ok());
}

#[test]
fn failed_set_leaves_previous_value() {
    let mut detail = detail_for("example.com");
    assert!(detail.set_domain_name("x".repeat(300)).is_err());
    assert_eq!(detail.domain_name(), Some("example.com"));
}

#[test]
fn nameserver_host_must_match_pattern() {
    assert!(Nameserver::named("ns-1.example_host.com").is_ok());

    let err = Nameserver::named("ns1 example.com").unwrap_err();
    assert_eq!(
        err,
        Error::Validation {
            record: "Nameserver",
            field: "Name",
            violation: Violation::PatternMismatch {
                pattern: HOST_NAME_PATTERN
            },
        }
    );
}

#[test]
fn duration_in_years_is_bounded() {
    let request = RegisterDomainRequest::default();
    assert!(request.clone().with_duration_in_years(1).is_ok());
    assert!(request.clone().with_duration_in_years(10).is_ok());

    let err = request.with_duration_in_years(11).unwrap_err();
    assert_eq!(
        err,
        Error::Validation {
            record: "RegisterDomainRequest",
            field: "DurationInYears",
            violation: Violation::OutOfRange { min: 1, max: 10, actual: 11 },
        }
    );
}

#[test]
fn sequence_elements_are_checked() {
    let long_ip = "1".repeat(46);
    let err = Nameserver::default()
        .with_glue_ips(["192.0.2.1".to_string(), long_ip])
        .unwrap_err();
    assert_eq!(err.field(), Some("GlueIps"));

    let mut ns = Nameserver::named("ns1.example.com").unwrap();
    ns.append_glue_ips(["2001:db8::1"]).unwrap();
    assert!(ns.append_glue_ips(["x".repeat(46)]).is_err());
    assert_eq!(ns.glue_ips(), Some(&["2001:db8::1".to_string()][..]));
}

#[test]
fn nested_records_are_validated_when_set() {
    let contact: ContactDetail =
        serde_json::from_str(&format!(r#"{{"FirstName":"{}"}}"#, "n".repeat(300))).unwrap();

    let err = RegisterDomainRequest::default()
        .with_admin_contact(contact)
        .unwrap_err();
    assert_eq!(
        err,
        Error::Validation {
            record: "ContactDetail",
            field: "FirstName",
            violation: Violation::TooLong { max: 255, actual: 300 },
        }
    );
}

#[test]
fn validate_rechecks_deserialized_records() {
    let json = format!(r#"{{"DomainName":"{}"}}"#, "d".repeat(256));
    let detail: GetDomainDetailResult = serde_json::from_str(&json).unwrap();
    assert_eq!(detail.validate().unwrap_err().field(), Some("DomainName"));

    assert!(detail_for("example.com").validate().is_ok());
}

// ── Sequences ────────────────────────────────────────────────────

#[test]
fn append_then_replace_nameservers() {
    let ns1 = Nameserver::named("ns1.example.com").unwrap();
    let ns2 = Nameserver::named("ns2.example.com").unwrap();
    let ns3 = Nameserver::named("ns3.example.com").unwrap();

    let mut detail = GetDomainDetailResult::default();
    detail.append_nameservers([ns1.clone()]).unwrap();
    detail.append_nameservers([ns2.clone()]).unwrap();
    assert_eq!(detail.nameservers(), Some(&[ns1, ns2][..]));

    detail.set_nameservers([ns3.clone()]).unwrap();
    assert_eq!(detail.nameservers(), Some(&[ns3][..]));
}

#[test]
fn appending_an_empty_batch_initializes_the_sequence() {
    let detail = GetDomainDetailResult::default()
        .with_appended_status_list(Vec::<String>::new())
        .unwrap();
    assert_eq!(detail.status_list(), Some(&[][..]));
    assert_eq!(detail.is_set("StatusList"), Some(true));
}

#[test]
fn record_owns_its_sequence_storage() {
    let mut source = vec!["clientTransferProhibited".to_string()];
    let detail = GetDomainDetailResult::default()
        .with_status_list(source.clone())
        .unwrap();
    source.push("serverHold".to_string());
    assert_eq!(detail.status_list().map(<[String]>::len), Some(1));
}

// ── Enum-typed fields ────────────────────────────────────────────

#[test]
fn token_field_accepts_typed_value() {
    let contact = ContactDetail::default()
        .with_contact_type(ContactType::Person)
        .unwrap()
        .with_country_code(CountryCode::Us)
        .unwrap();
    assert_eq!(contact.contact_type(), Some("PERSON"));
    assert_eq!(contact.contact_type_value().unwrap(), Some(ContactType::Person));
    assert_eq!(contact.country_code_value().unwrap(), Some(CountryCode::Us));
}

#[test]
fn token_field_keeps_unknown_raw_tokens() {
    let contact = ContactDetail::default()
        .with_contact_type("SOLE_TRADER")
        .unwrap();
    assert_eq!(contact.contact_type(), Some("SOLE_TRADER"));
    assert_eq!(
        contact.contact_type_value().unwrap_err(),
        Error::UnknownEnumValue {
            registry: "ContactType",
            value: "SOLE_TRADER".to_string(),
        }
    );
}

#[test]
fn strict_token_setter_rejects_unknown_values() {
    let mut contact = ContactDetail::default()
        .with_contact_type(ContactType::Company)
        .unwrap();
    let err = contact.set_contact_type_strict("company").unwrap_err();
    assert!(err.is_unknown_enum_value());
    assert_eq!(contact.contact_type(), Some("COMPANY"));

    contact.set_contact_type_strict("RESELLER").unwrap();
    assert_eq!(contact.contact_type_value().unwrap(), Some(ContactType::Reseller));
}

#[test]
fn unset_token_field_has_no_typed_value() {
    assert_eq!(ContactDetail::default().contact_type_value().unwrap(), None);
}

// ── Presence and clearing ────────────────────────────────────────

#[test]
fn is_set_reports_by_wire_name() {
    let detail = detail_for("example.com");
    assert_eq!(detail.is_set("DomainName"), Some(true));
    assert_eq!(detail.is_set("AutoRenew"), Some(false));
    assert_eq!(detail.is_set("NoSuchField"), None);
    assert_eq!(detail.set_fields(), vec!["DomainName"]);
}

#[test]
fn clear_returns_field_to_unset() {
    let mut detail = detail_for("example.com").with_auto_renew(true).unwrap();
    assert!(detail.clear("DomainName"));
    assert!(!detail.clear("NoSuchField"));
    assert_eq!(detail.domain_name(), None);
    assert_eq!(detail, GetDomainDetailResult::default().with_auto_renew(true).unwrap());
}

// ── Rendering ────────────────────────────────────────────────────

#[test]
fn renders_only_set_fields() {
    assert_eq!(detail_for("example.com").to_string(), "{DomainName: example.com}");
}

#[test]
fn renders_fields_in_declaration_order() {
    let mut detail = GetDomainDetailResult::default();
    detail.set_auto_renew(true).unwrap();
    detail.set_domain_name("example.com").unwrap();
    assert_eq!(detail.to_string(), "{DomainName: example.com,AutoRenew: true}");
}

#[test]
fn renders_nested_records_and_sequences() {
    let ns = Nameserver::named("ns1.example.com")
        .unwrap()
        .with_glue_ips(["192.0.2.1", "2001:db8::1"])
        .unwrap();
    let detail = GetDomainDetailResult::default()
        .with_nameservers([ns])
        .unwrap()
        .with_status_list(["ok"])
        .unwrap();
    assert_eq!(
        detail.to_string(),
        "{Nameservers: [{Name: ns1.example.com,GlueIps: [192.0.2.1, 2001:db8::1]}],StatusList: [ok]}"
    );
}

#[test]
fn renders_timestamps_and_tokens() {
    let expiry = Timestamp::from_epoch_millis(1_714_564_800_000).unwrap();
    let summary = DomainSummary::default().with_expiry(expiry).unwrap();
    assert_eq!(summary.to_string(), "{Expiry: 2024-05-01T12:00:00Z}");

    let param = ExtraParam::new(ExtraParamName::DunsNumber, "123456789").unwrap();
    assert_eq!(param.to_string(), "{Name: DUNS_NUMBER,Value: 123456789}");
}

// ── Stable hash ──────────────────────────────────────────────────

#[test]
fn empty_record_hash_is_fold_of_zeros() {
    // 21 unset fields: 31^21 with wrapping.
    let expected = (0..21).fold(1i32, |h, _| h.wrapping_mul(31));
    assert_eq!(GetDomainDetailResult::default().stable_hash(), expected);
}

#[test]
fn string_hash_follows_utf16_polynomial() {
    assert_eq!("a".to_string().field_hash(), 97);
    assert_eq!("ab".to_string().field_hash(), 3105);
    assert_eq!("example.com".to_string().field_hash(), -1_944_013_059);
}

#[test]
fn record_hash_is_fixed_across_runs() {
    assert_eq!(detail_for("example.com").stable_hash(), -195_423_972);
    assert_eq!(Tag::default().with_key("a").unwrap().stable_hash(), 3968);
}

#[test]
fn scalar_hashes() {
    assert_eq!(true.field_hash(), 1231);
    assert_eq!(false.field_hash(), 1237);
    assert_eq!(42i32.field_hash(), 42);
    let ts = Timestamp::from_epoch_millis(1_714_564_800_000).unwrap();
    assert_eq!(ts.field_hash(), 872_849_295);
    assert_eq!(Price::new(12.5).field_hash(), 1_076_428_800);
    assert_eq!(Price::new(0.0).field_hash(), 0);
    assert_eq!(Price::new(-0.0).field_hash(), i32::MIN);
}

#[test]
fn price_field_equality_and_rendering() {
    let record = BillingRecord::default()
        .with_domain_name("example.com")
        .unwrap()
        .with_operation(OperationType::RenewDomain)
        .unwrap()
        .with_price(12.0)
        .unwrap();
    assert_eq!(record.price(), Some(Price::new(12.0)));
    assert_eq!(record.to_string(), "{DomainName: example.com,Operation: RENEW_DOMAIN,Price: 12.0}");
    assert_ne!(record, record.clone().with_price(-12.0).unwrap());

    let only_price = BillingRecord::default().with_price(12.5).unwrap();
    // Four unset fields, then the price.
    assert_eq!(only_price.stable_hash(), 1_105_057_951);
}

#[test]
fn nested_record_hash_recurses() {
    let ns = Nameserver::named("ns1.example.com").unwrap();
    assert_eq!(ns.stable_hash(), 1_496_514_566);

    let detail = GetDomainDetailResult::default()
        .with_nameservers([ns.clone()])
        .unwrap();
    // DomainName unset, then Nameservers, then 19 unset fields.
    let list_hash = 31i32.wrapping_add(ns.stable_hash());
    let expected = (0..19).fold(961i32.wrapping_add(list_hash), |h, _| h.wrapping_mul(31));
    assert_eq!(detail.stable_hash(), expected);
}
