//! Payload validation for contingent writes.
//!
//! Rules run in a fixed order and stop at the first violation so callers
//! always see a single, deterministic message.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Attributes;

/// Default message attached to violations for absent fields.
///
/// Appended directly after the field name when rendered.
pub const MUST_NOT_BE_NULL: &str = " must not be null";

/// Maximum contingent name length, in characters.
pub const NAME_MAX: usize = 64;

/// Attribute keys that collide with modelled fields in the record JSON.
pub const RESERVED_ATTRIBUTE_KEYS: [&str; 4] = ["id", "name", "createTime", "createUserId"];

/// First rule a payload failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    field: &'static str,
    default_message: String,
}

impl FieldViolation {
    /// Violation carrying an arbitrary default message.
    pub fn new(field: &'static str, default_message: impl Into<String>) -> Self {
        Self {
            field,
            default_message: default_message.into(),
        }
    }

    /// Violation for a field that was absent.
    pub fn must_not_be_null(field: &'static str) -> Self {
        Self::new(field, MUST_NOT_BE_NULL)
    }

    /// Name of the offending field.
    pub const fn field(&self) -> &'static str {
        self.field
    }

    /// Unformatted default message.
    pub fn default_message(&self) -> &str {
        self.default_message.as_str()
    }

    /// Client-facing message.
    ///
    /// The null message is prefixed with the field name; any other default
    /// message is returned verbatim.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::FieldViolation;
    ///
    /// assert_eq!(FieldViolation::must_not_be_null("name").message(), "name must not be null");
    /// assert_eq!(FieldViolation::new("name", "too long").message(), "too long");
    /// ```
    #[must_use]
    pub fn message(&self) -> String {
        if self.default_message == MUST_NOT_BE_NULL {
            format!("{}{}", self.field, self.default_message)
        } else {
            self.default_message.clone()
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Validated contingent name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContingentName(String);

impl ContingentName {
    /// Validate a raw name.
    pub fn new(raw: impl Into<String>) -> Result<Self, FieldViolation> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(FieldViolation::new("name", "name must not be blank"));
        }
        if raw.chars().count() > NAME_MAX {
            return Err(FieldViolation::new(
                "name",
                format!("name must be at most {NAME_MAX} characters"),
            ));
        }
        Ok(Self(raw))
    }

    /// Borrow the name.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ContingentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ContingentName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for ContingentName {
    type Error = FieldViolation;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ContingentName> for String {
    fn from(value: ContingentName) -> Self {
        value.0
    }
}

/// Unvalidated write payload as submitted by a caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContingentPayload {
    /// Requested name, absent when the caller omitted it.
    pub name: Option<String>,
    /// Opaque attributes.
    pub attributes: Attributes,
}

/// Payload that passed every rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ContingentDraft {
    /// Validated name.
    pub name: ContingentName,
    /// Opaque attributes, free of reserved keys.
    pub attributes: Attributes,
}

impl TryFrom<ContingentPayload> for ContingentDraft {
    type Error = FieldViolation;

    fn try_from(payload: ContingentPayload) -> Result<Self, Self::Error> {
        let ContingentPayload { name, attributes } = payload;
        let raw = name.ok_or_else(|| FieldViolation::must_not_be_null("name"))?;
        let validated = ContingentName::new(raw)?;
        if let Some(key) = RESERVED_ATTRIBUTE_KEYS
            .iter()
            .find(|key| attributes.contains_key(**key))
        {
            return Err(FieldViolation::new(
                "attributes",
                format!("attributes must not contain reserved key {key}"),
            ));
        }
        Ok(Self {
            name: validated,
            attributes,
        })
    }
}
