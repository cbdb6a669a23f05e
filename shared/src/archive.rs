//! Archive index records and request validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A catalog record pointing at an external organization's web presence.
///
/// JSON field names follow the public API (`Class`, `WebName`, ...), not
/// Rust naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveIndex {
    /// Positive, store-assigned, never reused.
    pub id: i64,
    /// Category, e.g. museum or library.
    #[serde(rename = "Class")]
    pub class: String,
    /// Name of the referenced website.
    #[serde(rename = "WebName")]
    pub web_name: String,
    /// Name of the owning organization.
    #[serde(rename = "OrgName")]
    pub org_name: String,
    /// URL of the organization's website.
    #[serde(rename = "OrgWebLink")]
    pub org_web_link: String,
    /// Set on insert.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// Refreshed on every update.
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl ArchiveIndex {
    /// Copy of the four business fields.
    pub fn fields(&self) -> ArchiveFields {
        ArchiveFields {
            class: self.class.clone(),
            web_name: self.web_name.clone(),
            org_name: self.org_name.clone(),
            org_web_link: self.org_web_link.clone(),
        }
    }
}

/// Request body for create and update. Every member is optional on the wire
/// so that a missing field is a validation failure rather than a parse
/// failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveIndexInput {
    /// `Class` on the wire.
    #[serde(rename = "Class", default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// `WebName` on the wire.
    #[serde(rename = "WebName", default, skip_serializing_if = "Option::is_none")]
    pub web_name: Option<String>,
    /// `OrgName` on the wire.
    #[serde(rename = "OrgName", default, skip_serializing_if = "Option::is_none")]
    pub org_name: Option<String>,
    /// `OrgWebLink` on the wire.
    #[serde(rename = "OrgWebLink", default, skip_serializing_if = "Option::is_none")]
    pub org_web_link: Option<String>,
}

/// The four business fields after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveFields {
    /// See [`ArchiveIndex::class`].
    pub class: String,
    /// See [`ArchiveIndex::web_name`].
    pub web_name: String,
    /// See [`ArchiveIndex::org_name`].
    pub org_name: String,
    /// See [`ArchiveIndex::org_web_link`].
    pub org_web_link: String,
}

/// Create or update body with at least one required field missing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("all archive fields are required, missing: {}", missing.join(", "))]
pub struct ValidationError {
    /// Wire names of the fields that were absent, null or empty.
    pub missing: Vec<&'static str>,
}

impl ArchiveIndexInput {
    /// Checks that all four fields are present and non-empty. Values are
    /// kept verbatim; whitespace-only text counts as present.
    pub fn validate(self) -> Result<ArchiveFields, ValidationError> {
        let mut missing = Vec::new();
        let class = take_required(self.class, "Class", &mut missing);
        let web_name = take_required(self.web_name, "WebName", &mut missing);
        let org_name = take_required(self.org_name, "OrgName", &mut missing);
        let org_web_link = take_required(self.org_web_link, "OrgWebLink", &mut missing);

        if !missing.is_empty() {
            return Err(ValidationError {
                missing,
            });
        }

        Ok(ArchiveFields {
            class,
            web_name,
            org_name,
            org_web_link,
        })
    }
}

impl From<ArchiveFields> for ArchiveIndexInput {
    fn from(fields: ArchiveFields) -> Self {
        Self {
            class: Some(fields.class),
            web_name: Some(fields.web_name),
            org_name: Some(fields.org_name),
            org_web_link: Some(fields.org_web_link),
        }
    }
}

fn take_required(
    value: Option<String>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> String {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => {
            missing.push(name);
            String::new()
        },
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::ArchiveIndexInput;

    fn full_input() -> ArchiveIndexInput {
        serde_json::from_value(json!({
            "Class": "museum",
            "WebName": "W",
            "OrgName": "O",
            "OrgWebLink": "http://x"
        }))
        .expect("deserialize input")
    }

    #[test]
    fn validate_accepts_all_fields_verbatim() {
        let fields = full_input().validate().expect("valid input");
        assert_eq!(fields.class, "museum");
        assert_eq!(fields.web_name, "W");
        assert_eq!(fields.org_name, "O");
        assert_eq!(fields.org_web_link, "http://x");
    }

    #[test]
    fn validate_reports_each_missing_field() {
        let mut input = full_input();
        input.class = None;
        let err = input.validate().expect_err("missing Class");
        assert_eq!(err.missing, vec!["Class"]);

        let mut input = full_input();
        input.web_name = Some(String::new());
        input.org_web_link = Some(String::new());
        let err = input.validate().expect_err("empty fields");
        assert_eq!(err.missing, vec!["WebName", "OrgWebLink"]);
    }

    #[test]
    fn whitespace_only_values_are_kept() {
        let mut input = full_input();
        input.class = Some(" ".to_string());
        let fields = input.validate().expect("whitespace counts as present");
        assert_eq!(fields.class, " ");
    }

    #[test]
    fn null_members_deserialize_as_missing() {
        let input: ArchiveIndexInput = serde_json::from_value(json!({
            "Class": null,
            "WebName": "W"
        }))
        .expect("deserialize input");
        let err = input.validate().expect_err("incomplete input");
        assert_eq!(err.missing, vec!["Class", "OrgName", "OrgWebLink"]);
    }
}
