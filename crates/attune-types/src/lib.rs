// ABOUTME: Pure data types for accessibility dimensions, presets, user settings and theme tokens
// ABOUTME: Foundation layer for all other attune crates, no cross-crate dependencies

#[macro_use]
mod macros;

pub mod dimensions;
mod number;
pub mod partial;
pub mod preset;
pub mod safety;
pub mod settings;
pub mod system;
pub mod tokens;

// Re-export commonly used types
pub use dimensions::{
    AccessibilityDimensions, AlertTiming, CognitiveDimensions, ColorBlindMode,
    ColorContrastDimensions, ColorScheme, ContrastLevel, DisclosureMode, FocusIndicatorSize,
    FocusNavigationInputDimensions, FontScale, Handedness, LineHeight, MaxLineLength,
    MotionAnimationDimensions, MotionPreference, ParagraphSpacing, SensorySensitivityDimensions,
    SituationalEnvironmentalDimensions, TouchTargetSize, TypographyReadingDimensions,
    VisualDensity,
};
pub use partial::{
    PartialAccessibilityDimensions, PartialCognitive, PartialColorContrast,
    PartialFocusNavigationInput, PartialMotionAnimation, PartialSensorySensitivity,
    PartialSituationalEnvironmental, PartialTypographyReading,
};
pub use preset::{AccessibilityPreset, PresetId, WcagLevel};
pub use safety::SafetyCriticalField;
pub use settings::{AccessibilityUserSettings, SETTINGS_VERSION};
pub use system::SystemDefaults;
pub use tokens::{BehavioralFlags, ComponentProps, CssTokens, StyleToken, ThemeTokens};
