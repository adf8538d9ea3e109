//! Tests for contingent validation, filtering and outcomes.

use super::*;
use chrono::TimeZone;
use rstest::{fixture, rstest};
use serde_json::json;

fn attributes(value: serde_json::Value) -> Attributes {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[fixture]
fn stored() -> Contingent {
    Contingent::from_parts(ContingentParts {
        id: ContingentId::new(5),
        name: ContingentName::new("Alpha").expect("valid name"),
        attributes: attributes(json!({ "leader": "Kim" })),
        created_at: Utc
            .with_ymd_and_hms(2026, 1, 2, 3, 4, 5)
            .single()
            .expect("valid timestamp"),
        created_by: UserId::random(),
    })
}

#[rstest]
#[case(None, "name must not be null")]
#[case(Some(""), "name must not be blank")]
#[case(Some("   "), "name must not be blank")]
fn rejects_missing_or_blank_names(#[case] name: Option<&str>, #[case] expected: &str) {
    let payload = ContingentPayload {
        name: name.map(str::to_owned),
        attributes: Attributes::new(),
    };
    let violation = ContingentDraft::try_from(payload).expect_err("payload must be rejected");
    assert_eq!(violation.field(), "name");
    assert_eq!(violation.message(), expected);
}

#[rstest]
fn null_violation_keeps_unformatted_default_message() {
    let violation = FieldViolation::must_not_be_null("name");
    assert_eq!(violation.default_message(), MUST_NOT_BE_NULL);
    assert_eq!(violation.to_string(), "name must not be null");
}

#[rstest]
#[case(NAME_MAX, true)]
#[case(NAME_MAX + 1, false)]
fn enforces_name_length_in_characters(#[case] length: usize, #[case] accepted: bool) {
    let raw: String = std::iter::repeat_n('é', length).collect();
    let result = ContingentName::new(raw);
    assert_eq!(result.is_ok(), accepted);
    if let Err(violation) = result {
        assert_eq!(violation.message(), "name must be at most 64 characters");
    }
}

#[rstest]
#[case("id")]
#[case("createTime")]
#[case("createUserId")]
fn rejects_reserved_attribute_keys(#[case] key: &str) {
    let mut extra = Attributes::new();
    extra.insert(key.to_owned(), json!(1));
    let payload = ContingentPayload {
        name: Some("Alpha".to_owned()),
        attributes: extra,
    };
    let violation = ContingentDraft::try_from(payload).expect_err("reserved key");
    assert_eq!(violation.field(), "attributes");
    assert!(violation.message().ends_with(key));
}

#[rstest]
fn null_check_runs_before_attribute_check() {
    let payload = ContingentPayload {
        name: None,
        attributes: attributes(json!({ "id": 3 })),
    };
    let violation = ContingentDraft::try_from(payload).expect_err("rejected");
    assert_eq!(violation.message(), "name must not be null");
}

#[rstest]
#[case(None, None)]
#[case(Some(""), None)]
#[case(Some("  "), None)]
#[case(Some("Al"), Some("%Al%"))]
#[case(Some("a\\b"), Some("%a\\\\b%"))]
#[case(Some("100%"), Some("%100\\%%"))]
#[case(Some("x_y"), Some("%x\\_y%"))]
fn builds_escaped_like_patterns(#[case] raw: Option<&str>, #[case] expected: Option<&str>) {
    let filter = NameFilter::new(raw.map(str::to_owned));
    assert_eq!(filter.like_pattern().as_deref(), expected);
}

#[rstest]
#[case(NameFilter::all(), "anything", true)]
#[case(NameFilter::new(Some("lph".to_owned())), "Alpha", true)]
#[case(NameFilter::new(Some("LPH".to_owned())), "Alpha", false)]
#[case(NameFilter::new(Some("%".to_owned())), "Alpha", false)]
fn in_process_matching_is_literal_and_case_sensitive(
    #[case] filter: NameFilter,
    #[case] name: &str,
    #[case] expected: bool,
) {
    assert_eq!(filter.matches(name), expected);
}

#[rstest]
fn apply_preserves_identity_and_audit_stamp(stored: Contingent) {
    let mut record = stored.clone();
    record.apply(ContingentDraft {
        name: ContingentName::new("Beta").expect("valid name"),
        attributes: Attributes::new(),
    });
    assert_eq!(record.id(), stored.id());
    assert_eq!(record.created_at(), stored.created_at());
    assert_eq!(record.created_by(), stored.created_by());
    assert_eq!(record.name().as_str(), "Beta");
    assert!(record.attributes().is_empty());
}

#[rstest]
fn outcome_map_only_touches_completed_values() {
    let done: CommandOutcome<i64> = CommandOutcome::Completed(2);
    assert_eq!(done.map(|v| v * 2), CommandOutcome::Completed(4));
    let missing: CommandOutcome<i64> = CommandOutcome::NotFound;
    assert_eq!(missing.map(|v| v * 2), CommandOutcome::NotFound);
}

#[rstest]
#[case(ContingentWrite::Created(ContingentId::new(1)), "created")]
#[case(ContingentWrite::Updated(ContingentId::new(1)), "updated")]
#[case(ContingentWrite::Deleted(ContingentId::new(1)), "deleted")]
fn write_kinds_are_labelled(#[case] write: ContingentWrite, #[case] label: &str) {
    assert_eq!(write.kind(), label);
    assert_eq!(write.id(), ContingentId::new(1));
}

#[rstest]
fn parses_path_ids() {
    assert_eq!("42".parse::<ContingentId>().ok(), Some(ContingentId::new(42)));
    assert!("abc".parse::<ContingentId>().is_err());
}
