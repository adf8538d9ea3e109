//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::{ContingentId, Error};

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    const fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn invalid_id_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be an integer")).with_details(json!({
        "field": field,
        "value": value,
        "code": "invalid_id",
    }))
}

/// Parse a contingent id taken from the request path.
pub(crate) fn parse_contingent_id(value: &str, field: FieldName) -> Result<ContingentId, Error> {
    value
        .parse::<ContingentId>()
        .map_err(|_| invalid_id_error(field, value))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;

    #[rstest]
    #[case("5", 5)]
    #[case("-3", -3)]
    #[case("9223372036854775807", i64::MAX)]
    fn parses_integer_ids(#[case] raw: &str, #[case] expected: i64) {
        let id = parse_contingent_id(raw, FieldName::new("id")).expect("valid id");
        assert_eq!(id, ContingentId::new(expected));
    }

    #[rstest]
    #[case("abc")]
    #[case("1.5")]
    #[case("")]
    #[case("9223372036854775808")]
    fn rejects_non_integer_ids(#[case] raw: &str) {
        let error = parse_contingent_id(raw, FieldName::new("id")).expect_err("invalid id");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(error.message(), "id must be an integer");
        let details = error.details().expect("details present");
        assert_eq!(details["value"], json!(raw));
        assert_eq!(details["code"], json!("invalid_id"));
    }
}
