//! Request-body field validation shared by the HTTP handlers.

use crate::domain::Error;

/// Require a non-empty string field, mirroring the schema-validator
/// phrasing clients already match on.
pub(crate) fn require_string(field: &str, value: Option<String>) -> Result<String, Error> {
    match value {
        None => Err(Error::invalid_request(format!("\"{field}\" is required"))),
        Some(text) if text.trim().is_empty() => Err(Error::invalid_request(format!(
            "\"{field}\" is not allowed to be empty"
        ))),
        Some(text) => Ok(text),
    }
}

/// Validate an optional field: absent is fine, present must be non-empty.
pub(crate) fn optional_string(field: &str, value: Option<String>) -> Result<Option<String>, Error> {
    match value {
        None => Ok(None),
        some => require_string(field, some).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, "\"title\" is required")]
    #[case(Some(String::new()), "\"title\" is not allowed to be empty")]
    #[case(Some("   ".to_owned()), "\"title\" is not allowed to be empty")]
    fn require_string_rejects_missing_and_blank(
        #[case] value: Option<String>,
        #[case] expected: &str,
    ) {
        let error = require_string("title", value).expect_err("should be rejected");
        assert_eq!(error.message(), expected);
    }

    #[test]
    fn require_string_passes_values_through() {
        assert_eq!(
            require_string("title", Some("Monday".to_owned())).expect("valid"),
            "Monday"
        );
    }

    #[test]
    fn optional_string_accepts_absent_fields() {
        assert_eq!(optional_string("text", None).expect("valid"), None);
    }

    #[test]
    fn optional_string_rejects_blank_fields() {
        let error = optional_string("text", Some(" ".to_owned())).expect_err("blank");
        assert_eq!(error.message(), "\"text\" is not allowed to be empty");
    }
}
