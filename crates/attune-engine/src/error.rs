// ABOUTME: Error types for persisted settings decoding and rejected override mutations
// ABOUTME: Both are recoverable; callers fall back to defaults or keep the previous settings

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SettingsError>;

/// Failure to decode a persisted settings value.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Malformed accessibility settings: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Accessibility settings version {found} does not match expected version {expected}")]
    VersionMismatch { found: u64, expected: u32 },

    #[error("Accessibility settings carry no version field")]
    Unversioned,

    #[error("Accessibility settings out of range: {}", errors.join("; "))]
    OutOfRange { errors: Vec<String> },
}

impl SettingsError {
    /// Create a version mismatch error
    pub fn version_mismatch(found: u64, expected: u32) -> Self {
        Self::VersionMismatch { found, expected }
    }
}

/// An override failed validation and was not applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid dimensions: {}", errors.join("; "))]
pub struct OverrideRejected {
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_mismatch_message() {
        let error = SettingsError::version_mismatch(2, 1);
        assert_eq!(
            error.to_string(),
            "Accessibility settings version 2 does not match expected version 1"
        );
    }

    #[test]
    fn test_malformed_wraps_serde_error() {
        let serde_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = SettingsError::from(serde_error);
        assert!(matches!(error, SettingsError::Malformed(_)));
    }

    #[test]
    fn test_override_rejected_lists_every_error() {
        let rejected = OverrideRejected {
            errors: vec![
                "Letter spacing must be between 0 and 0.2".into(),
                "Max alerts per minute must be between 1 and 60".into(),
            ],
        };
        assert_eq!(
            rejected.to_string(),
            "Invalid dimensions: Letter spacing must be between 0 and 0.2; Max alerts per minute must be between 1 and 60"
        );
    }
}
