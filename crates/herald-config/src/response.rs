use serde::Deserialize;

/// Envelope builder policy
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResponseConfig {
    /// Status used when several errors are reported at once
    #[serde(default)]
    pub multi_error_status: MultiErrorStatus,
    /// Replace the text of 500 errors with a generic message
    #[serde(default)]
    pub redact_internal: bool,
}

/// How the status of a multi-error response is chosen
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MultiErrorStatus {
    /// Always 400, whatever the errors classify to
    #[default]
    BadRequest,
    /// Highest status among the classified errors
    Classified,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_bad_request() {
        let config: ResponseConfig = toml::from_str("").unwrap();
        assert_eq!(config.multi_error_status, MultiErrorStatus::BadRequest);
        assert!(!config.redact_internal);
    }

    #[test]
    fn deserialize_classified_policy() {
        let toml = r#"
            multi_error_status = "classified"
            redact_internal = true
        "#;

        let config: ResponseConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.multi_error_status, MultiErrorStatus::Classified);
        assert!(config.redact_internal);
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let result = toml::from_str::<ResponseConfig>(r#"multi_error_status = "first""#);
        assert!(result.is_err());
    }
}
