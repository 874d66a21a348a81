// ABOUTME: The seven accessibility dimension groups and their enumerated value types
// ABOUTME: Defaults here are the hard-coded baseline before system, preset or user layers

use serde::{Deserialize, Serialize};

// ============================================================================
// Dimension value types
// ============================================================================

dimension_enum! {
    /// Color scheme variants
    ColorScheme {
        Light => "light",
        Dark => "dark",
        DimDark => "dim-dark",
        WarmBias => "warm-bias",
        CoolBias => "cool-bias",
        Monochrome => "monochrome",
    }
    default = Light
}

dimension_enum! {
    /// Contrast levels aligned with WCAG
    ContrastLevel {
        /// WCAG AA
        Standard => "standard",
        /// WCAG AAA
        High => "high",
        /// Beyond AAA
        UltraHigh => "ultra-high",
        /// Reduced contrast for light sensitivity
        Low => "low",
    }
    default = Standard
}

dimension_enum! {
    /// Color vision deficiency accommodation
    ColorBlindMode {
        None => "none",
        Deuteranopia => "deuteranopia",
        Protanopia => "protanopia",
        Tritanopia => "tritanopia",
    }
    default = None
}

dimension_enum! {
    /// Font scaling, 100% through 200%
    FontScale {
        Normal => "normal",
        Large => "large",
        ExtraLarge => "extra-large",
        Maximum => "maximum",
    }
    default = Normal
}

dimension_enum! {
    LineHeight {
        Normal => "normal",
        Relaxed => "relaxed",
        Loose => "loose",
    }
    default = Normal
}

dimension_enum! {
    ParagraphSpacing {
        Normal => "normal",
        Increased => "increased",
        Double => "double",
    }
    default = Normal
}

dimension_enum! {
    /// Reading line length constraint
    MaxLineLength {
        None => "none",
        /// 80ch
        Standard => "standard",
        /// 60ch
        Reduced => "reduced",
        /// 45ch
        Narrow => "narrow",
    }
    default = Standard
}

dimension_enum! {
    MotionPreference {
        Full => "full",
        Reduced => "reduced",
        None => "none",
    }
    default = Full
}

dimension_enum! {
    FocusIndicatorSize {
        Standard => "standard",
        Enhanced => "enhanced",
        ExtraLarge => "extra-large",
    }
    default = Standard
}

dimension_enum! {
    TouchTargetSize {
        Standard => "standard",
        Enlarged => "enlarged",
        Maximum => "maximum",
    }
    default = Standard
}

dimension_enum! {
    /// Layout handedness for one-handed use
    Handedness {
        Neutral => "neutral",
        Left => "left",
        Right => "right",
    }
    default = Neutral
}

dimension_enum! {
    /// Information disclosure pattern
    DisclosureMode {
        AllAtOnce => "all-at-once",
        Progressive => "progressive",
        StepByStep => "step-by-step",
    }
    default = AllAtOnce
}

dimension_enum! {
    /// Visual density for cognitive load
    VisualDensity {
        Normal => "normal",
        Reduced => "reduced",
        Minimal => "minimal",
    }
    default = Normal
}

dimension_enum! {
    /// Alert presentation timing
    AlertTiming {
        Immediate => "immediate",
        /// 500ms
        Debounced => "debounced",
        /// At most one every 3s
        RateLimited => "rate-limited",
    }
    default = Immediate
}

// ============================================================================
// Dimension groups
// ============================================================================

dimension_group! {
    /// A. Color and contrast
    ColorContrastDimensions / PartialColorContrast {
        color_scheme: ColorScheme = ColorScheme::Light,
        contrast_level: ContrastLevel = ContrastLevel::Standard,
        color_blind_mode: ColorBlindMode = ColorBlindMode::None,
        /// Never use color alone to convey state (safety-critical)
        color_independent_state: bool = true,
        /// Force borders on all interactive elements
        force_borders: bool = false,
    }
}

dimension_group! {
    /// B. Typography and reading
    TypographyReadingDimensions / PartialTypographyReading {
        font_scale: FontScale = FontScale::Normal,
        dyslexia_font: bool = false,
        monospace_reading: bool = false,
        line_height: LineHeight = LineHeight::Normal,
        paragraph_spacing: ParagraphSpacing = ParagraphSpacing::Normal,
        max_line_length: MaxLineLength = MaxLineLength::Standard,
        high_character_distinction: bool = false,
        disable_italics: bool = false,
        disable_all_caps: bool = false,
        /// Extra letter spacing in em, within [0, 0.2]
        letter_spacing: f64 = 0.0,
        /// Extra word spacing in em, within [0, 0.5]
        word_spacing: f64 = 0.0,
    }
}

dimension_group! {
    /// C. Motion and animation
    MotionAnimationDimensions / PartialMotionAnimation {
        motion_preference: MotionPreference = MotionPreference::Full,
        disable_parallax: bool = false,
        disable_auto_play: bool = false,
        /// Use 0ms transitions
        instant_transitions: bool = false,
        static_loading_indicators: bool = false,
        text_only_feedback: bool = false,
        /// Milliseconds, within [0, 5000]
        #[serde(deserialize_with = "crate::number::whole")]
        @partial #[serde(deserialize_with = "crate::number::option_whole")]
        max_animation_duration: i32 = 500,
    }
}

dimension_group! {
    /// D. Focus, navigation and input
    FocusNavigationInputDimensions / PartialFocusNavigationInput {
        focus_indicator_size: FocusIndicatorSize = FocusIndicatorSize::Standard,
        always_show_focus: bool = false,
        keyboard_first_navigation: bool = false,
        screen_reader_optimized: bool = false,
        switch_navigation: bool = false,
        touch_target_size: TouchTargetSize = TouchTargetSize::Standard,
        handedness: Handedness = Handedness::Neutral,
        sticky_primary_actions: bool = false,
        sequential_navigation: bool = false,
        always_visible_skip_links: bool = false,
        increase_interactive_spacing: bool = false,
    }
}

dimension_group! {
    /// E. Cognitive load and comprehension
    CognitiveDimensions / PartialCognitive {
        simple_language_mode: bool = false,
        no_jargon_mode: bool = false,
        disclosure_mode: DisclosureMode = DisclosureMode::AllAtOnce,
        chunked_information: bool = false,
        explicit_state_labels: bool = false,
        /// Safety-critical
        confirm_destructive_actions: bool = true,
        /// No auto-redirects or sudden modals (safety-critical)
        no_surprise_changes: bool = true,
        layout_consistency_lock: bool = false,
        decision_reduction_mode: bool = false,
        visual_hierarchy_boost: bool = false,
        always_show_progress: bool = false,
        universal_undo: bool = false,
    }
}

dimension_group! {
    /// F. Sensory sensitivity
    SensorySensitivityDimensions / PartialSensorySensitivity {
        low_stimulation_mode: bool = false,
        visual_density: VisualDensity = VisualDensity::Normal,
        /// WCAG 2.3.1 (safety-critical)
        disable_flashing: bool = true,
        disable_high_frequency_patterns: bool = false,
        /// No pulsing or attention-seeking idle animation
        calm_idle_states: bool = false,
        alert_timing: AlertTiming = AlertTiming::Immediate,
        disable_alert_stacking: bool = false,
        /// Within [1, 60]
        #[serde(deserialize_with = "crate::number::whole")]
        @partial #[serde(deserialize_with = "crate::number::option_whole")]
        max_alerts_per_minute: i32 = 60,
        disable_ambient_sounds: bool = false,
    }
}

dimension_group! {
    /// G. Situational and environmental
    SituationalEnvironmentalDimensions / PartialSituationalEnvironmental {
        sunlight_mode: bool = false,
        night_mode: bool = false,
        one_hand_mode: bool = false,
        gloves_mode: bool = false,
        offline_mode_visuals: bool = false,
        low_bandwidth_mode: bool = false,
        battery_saver_mode: bool = false,
        emergency_mode: bool = false,
        public_space_privacy: bool = false,
        /// Never rely on sound alone (safety-critical)
        quiet_mode: bool = true,
    }
}

/// Complete set of accessibility dimensions. Every field is always populated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityDimensions {
    pub color_contrast: ColorContrastDimensions,
    pub typography_reading: TypographyReadingDimensions,
    pub motion_animation: MotionAnimationDimensions,
    pub focus_navigation_input: FocusNavigationInputDimensions,
    pub cognitive: CognitiveDimensions,
    pub sensory_sensitivity: SensorySensitivityDimensions,
    pub situational_environmental: SituationalEnvironmentalDimensions,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_safety_defaults_are_safe() {
        let dims = AccessibilityDimensions::default();
        assert!(dims.color_contrast.color_independent_state);
        assert!(dims.sensory_sensitivity.disable_flashing);
        assert!(dims.cognitive.confirm_destructive_actions);
        assert!(dims.cognitive.no_surprise_changes);
        assert!(dims.situational_environmental.quiet_mode);
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(ContrastLevel::UltraHigh.as_str(), "ultra-high");
        assert_eq!(DisclosureMode::StepByStep.to_string(), "step-by-step");
        assert_eq!(
            serde_json::to_string(&AlertTiming::RateLimited).unwrap(),
            "\"rate-limited\""
        );
        let scheme: ColorScheme = serde_json::from_str("\"dim-dark\"").unwrap();
        assert_eq!(scheme, ColorScheme::DimDark);
    }

    #[test]
    fn test_enum_defaults_come_from_the_default_clause() {
        assert_eq!(ColorScheme::default(), ColorScheme::Light);
        assert_eq!(ContrastLevel::default(), ContrastLevel::Standard);
        assert_eq!(FontScale::default().as_str(), "normal");
    }

    #[test]
    fn test_enum_all_lists_every_variant() {
        assert_eq!(ColorScheme::ALL.len(), 6);
        assert_eq!(ContrastLevel::ALL.len(), 4);
        assert_eq!(FontScale::ALL.len(), 4);
        assert_eq!(AlertTiming::ALL.len(), 3);
    }

    #[test]
    fn test_dimensions_serialize_camel_case() {
        let value = serde_json::to_value(AccessibilityDimensions::default()).unwrap();
        assert_eq!(value["colorContrast"]["contrastLevel"], "standard");
        assert_eq!(value["typographyReading"]["letterSpacing"], 0.0);
        assert_eq!(value["motionAnimation"]["maxAnimationDuration"], 500);
        assert_eq!(value["situationalEnvironmental"]["quietMode"], true);
    }

    #[test]
    fn test_unknown_enum_value_is_rejected() {
        let result: Result<FontScale, _> = serde_json::from_str("\"gigantic\"");
        assert!(result.is_err());
    }
}
