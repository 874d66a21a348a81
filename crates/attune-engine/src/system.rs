// ABOUTME: System default providers and the system-aware baseline dimensions
// ABOUTME: Providers never fail; missing or unparseable signals read as the neutral default

use attune_logging::debug;
use attune_types::{
    AccessibilityDimensions, ColorScheme, ContrastLevel, MotionPreference, SystemDefaults,
};

pub const ENV_DARK_MODE: &str = "PREFER_DARK_MODE";
pub const ENV_REDUCED_MOTION: &str = "PREFER_REDUCED_MOTION";
pub const ENV_HIGH_CONTRAST: &str = "PREFER_HIGH_CONTRAST";
pub const ENV_REDUCED_TRANSPARENCY: &str = "PREFER_REDUCED_TRANSPARENCY";
pub const ENV_FONT_SIZE: &str = "SYSTEM_FONT_SIZE";

/// Source of ambient platform accessibility preferences.
///
/// `detect` is called at startup and again whenever the host reports a
/// preference change. It must be cheap and side-effect free.
pub trait SystemDefaultProvider: Send + Sync {
    fn detect(&self) -> SystemDefaults;
}

/// Reads preferences from `PREFER_*` and `SYSTEM_FONT_SIZE` environment variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSystemDefaults;

impl SystemDefaultProvider for EnvSystemDefaults {
    fn detect(&self) -> SystemDefaults {
        let defaults = system_defaults_from_lookup(|key| std::env::var(key).ok());
        debug!(?defaults, "System defaults detected from environment");
        defaults
    }
}

/// Always reports the same value. Used in tests and by hosts that push
/// preferences from their own change listeners.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedSystemDefaults(pub SystemDefaults);

impl SystemDefaultProvider for FixedSystemDefaults {
    fn detect(&self) -> SystemDefaults {
        self.0
    }
}

/// Build `SystemDefaults` from a variable lookup. Absent or unparseable
/// values keep their neutral reading.
pub fn system_defaults_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> SystemDefaults {
    let flag = |key: &str| lookup(key).and_then(|value| parse_flag(&value)).unwrap_or(false);

    let mut defaults = SystemDefaults {
        prefers_dark_mode: flag(ENV_DARK_MODE),
        prefers_reduced_motion: flag(ENV_REDUCED_MOTION),
        prefers_high_contrast: flag(ENV_HIGH_CONTRAST),
        prefers_reduced_transparency: flag(ENV_REDUCED_TRANSPARENCY),
        ..SystemDefaults::default()
    };

    if let Some(size) = lookup(ENV_FONT_SIZE)
        && let Ok(size) = size.trim().parse::<f32>()
        && size.is_finite()
        && size > 0.0
    {
        defaults.system_font_size = size;
    }

    defaults
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Full default dimensions adjusted for the platform preferences.
///
/// Reduced transparency and font size are carried on `SystemDefaults` but do
/// not alter any dimension.
pub fn system_aware_defaults(system: &SystemDefaults) -> AccessibilityDimensions {
    let mut dims = AccessibilityDimensions::default();

    if system.prefers_dark_mode {
        dims.color_contrast.color_scheme = ColorScheme::Dark;
    }

    if system.prefers_reduced_motion {
        dims.motion_animation.motion_preference = MotionPreference::Reduced;
        dims.motion_animation.disable_parallax = true;
        dims.motion_animation.disable_auto_play = true;
    }

    if system.prefers_high_contrast {
        dims.color_contrast.contrast_level = ContrastLevel::High;
        dims.color_contrast.force_borders = true;
    }

    dims
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_no_signals_is_neutral() {
        let defaults = system_defaults_from_lookup(lookup_from(&[]));
        assert_eq!(defaults, SystemDefaults::default());
    }

    #[test]
    fn test_flags_accept_common_spellings() {
        let defaults = system_defaults_from_lookup(lookup_from(&[
            (ENV_DARK_MODE, "1"),
            (ENV_REDUCED_MOTION, "TRUE"),
            (ENV_HIGH_CONTRAST, "yes"),
            (ENV_REDUCED_TRANSPARENCY, "off"),
            (ENV_FONT_SIZE, "20"),
        ]));

        assert!(defaults.prefers_dark_mode);
        assert!(defaults.prefers_reduced_motion);
        assert!(defaults.prefers_high_contrast);
        assert!(!defaults.prefers_reduced_transparency);
        assert_eq!(defaults.system_font_size, 20.0);
    }

    #[test]
    fn test_unparseable_values_fall_back() {
        let defaults = system_defaults_from_lookup(lookup_from(&[
            (ENV_REDUCED_MOTION, "sometimes"),
            (ENV_FONT_SIZE, "huge"),
        ]));
        assert_eq!(defaults, SystemDefaults::default());

        let defaults = system_defaults_from_lookup(lookup_from(&[(ENV_FONT_SIZE, "-4")]));
        assert_eq!(defaults.system_font_size, 16.0);
    }

    #[test]
    fn test_neutral_system_gives_plain_defaults() {
        assert_eq!(
            system_aware_defaults(&SystemDefaults::default()),
            AccessibilityDimensions::default()
        );
    }

    #[test]
    fn test_reduced_motion_adjusts_motion_group() {
        let dims = system_aware_defaults(&SystemDefaults {
            prefers_reduced_motion: true,
            ..Default::default()
        });
        assert_eq!(dims.motion_animation.motion_preference, MotionPreference::Reduced);
        assert!(dims.motion_animation.disable_parallax);
        assert!(dims.motion_animation.disable_auto_play);
        assert!(!dims.motion_animation.instant_transitions);
    }

    #[test]
    fn test_dark_and_high_contrast() {
        let dims = system_aware_defaults(&SystemDefaults {
            prefers_dark_mode: true,
            prefers_high_contrast: true,
            ..Default::default()
        });
        assert_eq!(dims.color_contrast.color_scheme, ColorScheme::Dark);
        assert_eq!(dims.color_contrast.contrast_level, ContrastLevel::High);
        assert!(dims.color_contrast.force_borders);
    }

    #[test]
    fn test_fixed_provider_returns_its_value() {
        let value = SystemDefaults {
            prefers_dark_mode: true,
            ..Default::default()
        };
        assert_eq!(FixedSystemDefaults(value).detect(), value);
    }
}
