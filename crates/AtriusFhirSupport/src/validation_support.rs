//! Lexical rules for FHIR primitives and reference target checks.
//!
//! Every check returns `Err(message)` describing the violation. The generated
//! validation code routes the result through [`crate::ValidationContext::lexical`]
//! or [`crate::ValidationContext::check_reference`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::reference::{self, LiteralReference};

/// Upper bound on the length of a FHIR string value (1 MiB).
pub const MAX_STRING_LENGTH: usize = 1_048_576;

static CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s]+( [^\s]+)*$").expect("code pattern"));
static ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9\-.]{1,64}$").expect("id pattern"));
static OID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^urn:oid:[0-2](\.(0|[1-9][0-9]*))+$").expect("oid pattern"));
static UUID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^urn:uuid:[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("uuid pattern")
});

/// Access to the parts of a reference that the target type check needs.
///
/// Implemented by `Reference` and `CodeableReference` in the model crate.
pub trait ReferenceTarget {
    /// `Reference.reference`, if present.
    fn literal_reference(&self) -> Option<&str>;
    /// `Reference.type`, if present.
    fn declared_type(&self) -> Option<&str>;
}

pub fn check_string(value: &str) -> Result<(), String> {
    if value.len() > MAX_STRING_LENGTH {
        return Err(format!(
            "string value exceeds the maximum length of {} bytes",
            MAX_STRING_LENGTH
        ));
    }
    if value.trim().is_empty() {
        return Err("string value must contain at least one non-whitespace character".into());
    }
    if value
        .chars()
        .any(|c| c.is_control() && !matches!(c, '\t' | '\r' | '\n'))
    {
        return Err("string value contains illegal control characters".into());
    }
    Ok(())
}

pub fn check_code(value: &str) -> Result<(), String> {
    if CODE.is_match(value) {
        Ok(())
    } else {
        Err(format!(
            "code value '{}' must not contain leading, trailing or repeated whitespace",
            value
        ))
    }
}

pub fn check_id(value: &str) -> Result<(), String> {
    if ID.is_match(value) {
        Ok(())
    } else {
        Err(format!(
            "id value '{}' must be 1 to 64 characters from [A-Za-z0-9-.]",
            value
        ))
    }
}

pub fn check_uri(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("uri value must not be empty".into());
    }
    if value.chars().any(char::is_whitespace) {
        return Err(format!("uri value '{}' must not contain whitespace", value));
    }
    Ok(())
}

pub fn check_oid(value: &str) -> Result<(), String> {
    if OID.is_match(value) {
        Ok(())
    } else {
        Err(format!("oid value '{}' must have the form urn:oid:n.n.n", value))
    }
}

pub fn check_uuid(value: &str) -> Result<(), String> {
    if UUID.is_match(value) {
        Ok(())
    } else {
        Err(format!(
            "uuid value '{}' must be a lowercase urn:uuid: identifier",
            value
        ))
    }
}

pub fn check_positive_int(value: i32) -> Result<(), String> {
    if value >= 1 {
        Ok(())
    } else {
        Err(format!("positiveInt value {} must be at least 1", value))
    }
}

pub fn check_unsigned_int(value: i32) -> Result<(), String> {
    if value >= 0 {
        Ok(())
    } else {
        Err(format!("unsignedInt value {} must not be negative", value))
    }
}

/// Narrative xhtml must be a single `div` in the xhtml namespace.
pub fn check_xhtml(value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if !(trimmed.starts_with("<div") && trimmed.ends_with("</div>")) {
        return Err("xhtml value must be a single <div> element".into());
    }
    let open_tag_end = trimmed.find('>').unwrap_or(trimmed.len());
    if !trimmed[..open_tag_end].contains(r#"xmlns="http://www.w3.org/1999/xhtml""#) {
        return Err("xhtml div must declare the xhtml namespace".into());
    }
    Ok(())
}

/// Checks that a reference targets one of `allowed` resource types.
///
/// The target type is taken from the literal reference when it has the
/// `[base/]Type/id` form, otherwise from `Reference.type`. Contained (`#id`) and `urn:`
/// references carry no type and are only checked through `Reference.type`.
///
/// ```rust
/// use atrius_fhir_support::validation_support::check_reference_type;
///
/// assert!(check_reference_type(Some("Patient/1"), None, &["Patient", "Group"]).is_ok());
/// assert!(check_reference_type(Some("Device/1"), None, &["Patient", "Group"]).is_err());
/// assert!(check_reference_type(Some("#p1"), None, &["Patient"]).is_ok());
/// ```
pub fn check_reference_type(
    reference: Option<&str>,
    declared_type: Option<&str>,
    allowed: &[&str],
) -> Result<(), String> {
    let literal_type = match reference.map(reference::parse_literal) {
        Some(LiteralReference::Resource { resource_type, .. }) => Some(resource_type),
        _ => None,
    };

    if let (Some(found), Some(declared)) = (literal_type, declared_type) {
        if found != declared {
            return Err(format!(
                "resource type found in Reference.reference '{}' does not match the specified Reference.type '{}'",
                found, declared
            ));
        }
    }

    let Some(resource_type) = literal_type.or(declared_type) else {
        return Ok(());
    };
    if !reference::is_resource_type(resource_type) {
        return Err(format!(
            "'{}' is not a valid resource type",
            resource_type
        ));
    }
    if allowed.contains(&"Resource") || allowed.contains(&resource_type) {
        Ok(())
    } else {
        Err(format!(
            "resource type found in reference value '{}' must be one of: {}",
            resource_type,
            allowed.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_must_have_content() {
        assert!(check_string("x").is_ok());
        assert!(check_string(" \t ").is_err());
        assert!(check_string("bell\u{7}").is_err());
        assert!(check_string("line\nbreak").is_ok());
    }

    #[test]
    fn strings_are_limited_to_one_mebibyte() {
        assert!(check_string(&"a".repeat(MAX_STRING_LENGTH)).is_ok());
        let err = check_string(&"a".repeat(MAX_STRING_LENGTH + 1)).unwrap_err();
        assert!(err.contains("maximum length"));
    }

    #[test]
    fn uris_reject_whitespace() {
        assert!(check_uri("http://example.org/fhir/ValueSet/x|1.0").is_ok());
        assert!(check_uri("urn:oid:1.2.3").is_ok());
        assert!(check_uri("http://a b").is_err());
        assert!(check_uri("http://a\tb").is_err());
        assert!(check_uri("").is_err());
    }

    #[test]
    fn codes_reject_stray_whitespace() {
        assert!(check_code("entered-in-error").is_ok());
        assert!(check_code("two words").is_ok());
        assert!(check_code(" leading").is_err());
        assert!(check_code("double  space").is_err());
    }

    #[test]
    fn ids_are_limited_to_64_chars() {
        assert!(check_id(&"a".repeat(64)).is_ok());
        assert!(check_id(&"a".repeat(65)).is_err());
        assert!(check_id("under_score").is_err());
    }

    #[test]
    fn oids_and_uuids() {
        assert!(check_oid("urn:oid:2.16.840.1.113883").is_ok());
        assert!(check_oid("2.16.840").is_err());
        assert!(check_uuid("urn:uuid:c757873d-ec9a-4326-a141-556f43239520").is_ok());
        assert!(check_uuid("urn:uuid:C757873D-EC9A-4326-A141-556F43239520").is_err());
    }

    #[test]
    fn xhtml_needs_namespaced_div() {
        assert!(check_xhtml(r#"<div xmlns="http://www.w3.org/1999/xhtml">ok</div>"#).is_ok());
        assert!(check_xhtml("<div>missing ns</div>").is_err());
        assert!(check_xhtml("<p>not a div</p>").is_err());
    }

    #[test]
    fn reference_type_mismatch_with_declared_type() {
        let err = check_reference_type(Some("Patient/1"), Some("Group"), &["Patient", "Group"])
            .unwrap_err();
        assert!(err.contains("does not match"));
    }

    #[test]
    fn declared_type_used_for_logical_reference() {
        assert!(check_reference_type(None, Some("Group"), &["Patient", "Group"]).is_ok());
        assert!(check_reference_type(None, Some("Device"), &["Patient"]).is_err());
        assert!(check_reference_type(None, Some("NotAType"), &["Resource"]).is_err());
    }

    #[test]
    fn any_resource_allows_everything() {
        assert!(check_reference_type(Some("Claim/c1"), None, &["Resource"]).is_ok());
    }
}
