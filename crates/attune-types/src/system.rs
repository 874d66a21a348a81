// ABOUTME: Ambient platform accessibility preferences fed into the resolution baseline
// ABOUTME: The default value is the neutral reading used when no platform signal is available

use serde::{Deserialize, Serialize};

/// Default ambient font size in CSS pixels
pub const DEFAULT_SYSTEM_FONT_SIZE: f32 = 16.0;

/// Platform-reported accessibility preferences.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemDefaults {
    pub prefers_dark_mode: bool,
    pub prefers_reduced_motion: bool,
    pub prefers_high_contrast: bool,
    pub prefers_reduced_transparency: bool,
    pub system_font_size: f32,
}

impl Default for SystemDefaults {
    fn default() -> Self {
        Self {
            prefers_dark_mode: false,
            prefers_reduced_motion: false,
            prefers_high_contrast: false,
            prefers_reduced_transparency: false,
            system_font_size: DEFAULT_SYSTEM_FONT_SIZE,
        }
    }
}

impl SystemDefaults {
    /// True when no preference deviates from the neutral reading
    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_neutral() {
        let defaults = SystemDefaults::default();
        assert!(defaults.is_neutral());
        assert_eq!(defaults.system_font_size, 16.0);
    }

    #[test]
    fn test_partial_json_fills_missing_fields() {
        let defaults: SystemDefaults =
            serde_json::from_str(r#"{"prefersReducedMotion":true}"#).unwrap();
        assert!(defaults.prefers_reduced_motion);
        assert!(!defaults.prefers_dark_mode);
        assert_eq!(defaults.system_font_size, DEFAULT_SYSTEM_FONT_SIZE);
        assert!(!defaults.is_neutral());
    }
}
