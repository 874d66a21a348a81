// ABOUTME: Curated preset content: one overlay of dimension values per preset identifier
// ABOUTME: Pure data; changing a preset here never requires touching merge or synthesis code

use attune_types::{
    AccessibilityPreset, AlertTiming, CognitiveDimensions, ColorBlindMode,
    ColorContrastDimensions, ColorScheme, ContrastLevel, DisclosureMode, FocusIndicatorSize,
    FocusNavigationInputDimensions, FontScale, Handedness, LineHeight, MaxLineLength,
    MotionAnimationDimensions, MotionPreference, ParagraphSpacing, PartialAccessibilityDimensions,
    PresetId, SensorySensitivityDimensions, SituationalEnvironmentalDimensions, TouchTargetSize,
    TypographyReadingDimensions, VisualDensity, WcagLevel,
};

/// Bumped whenever preset content changes
pub const CATALOG_VERSION: u32 = 1;

/// Build the preset for `id`. The match is exhaustive so every identifier
/// has content.
pub(crate) fn build(id: PresetId) -> AccessibilityPreset {
    match id {
        PresetId::LowVision => preset(
            id,
            "Low Vision",
            "Large text, high contrast, clear borders, and enhanced focus indicators",
            WcagLevel::AAA,
            true,
            PartialAccessibilityDimensions {
                color_contrast: Some(
                    ColorContrastDimensions {
                        color_scheme: ColorScheme::Light,
                        contrast_level: ContrastLevel::UltraHigh,
                        color_blind_mode: ColorBlindMode::None,
                        color_independent_state: true,
                        force_borders: true,
                    }
                    .into(),
                ),
                typography_reading: Some(
                    TypographyReadingDimensions {
                        font_scale: FontScale::ExtraLarge,
                        dyslexia_font: false,
                        monospace_reading: false,
                        line_height: LineHeight::Relaxed,
                        paragraph_spacing: ParagraphSpacing::Increased,
                        max_line_length: MaxLineLength::Reduced,
                        high_character_distinction: true,
                        disable_italics: true,
                        disable_all_caps: true,
                        letter_spacing: 0.05,
                        word_spacing: 0.16,
                    }
                    .into(),
                ),
                focus_navigation_input: Some(
                    FocusNavigationInputDimensions {
                        focus_indicator_size: FocusIndicatorSize::ExtraLarge,
                        always_show_focus: true,
                        keyboard_first_navigation: true,
                        screen_reader_optimized: false,
                        switch_navigation: false,
                        touch_target_size: TouchTargetSize::Enlarged,
                        handedness: Handedness::Neutral,
                        sticky_primary_actions: true,
                        sequential_navigation: false,
                        always_visible_skip_links: true,
                        increase_interactive_spacing: true,
                    }
                    .into(),
                ),
                cognitive: Some(
                    CognitiveDimensions {
                        simple_language_mode: false,
                        no_jargon_mode: false,
                        disclosure_mode: DisclosureMode::AllAtOnce,
                        chunked_information: true,
                        explicit_state_labels: true,
                        confirm_destructive_actions: true,
                        no_surprise_changes: true,
                        layout_consistency_lock: true,
                        decision_reduction_mode: false,
                        visual_hierarchy_boost: true,
                        always_show_progress: true,
                        universal_undo: true,
                    }
                    .into(),
                ),
                ..Default::default()
            },
        ),

        PresetId::Photosensitive => preset(
            id,
            "Photosensitive",
            "No flashing, reduced motion, calm animations, and low stimulation",
            WcagLevel::AAA,
            true,
            PartialAccessibilityDimensions {
                motion_animation: Some(no_motion().into()),
                sensory_sensitivity: Some(
                    SensorySensitivityDimensions {
                        low_stimulation_mode: true,
                        visual_density: VisualDensity::Reduced,
                        disable_flashing: true,
                        disable_high_frequency_patterns: true,
                        calm_idle_states: true,
                        alert_timing: AlertTiming::Debounced,
                        disable_alert_stacking: true,
                        max_alerts_per_minute: 10,
                        disable_ambient_sounds: true,
                    }
                    .into(),
                ),
                color_contrast: Some(
                    ColorContrastDimensions {
                        color_scheme: ColorScheme::Light,
                        contrast_level: ContrastLevel::Standard,
                        color_blind_mode: ColorBlindMode::None,
                        color_independent_state: true,
                        force_borders: false,
                    }
                    .into(),
                ),
                ..Default::default()
            },
        ),

        PresetId::Dyslexia => preset(
            id,
            "Dyslexia",
            "Dyslexia-friendly font, increased spacing, shorter lines, clear hierarchy",
            WcagLevel::AAA,
            true,
            PartialAccessibilityDimensions {
                typography_reading: Some(
                    TypographyReadingDimensions {
                        font_scale: FontScale::Large,
                        dyslexia_font: true,
                        monospace_reading: false,
                        line_height: LineHeight::Loose,
                        paragraph_spacing: ParagraphSpacing::Double,
                        max_line_length: MaxLineLength::Narrow,
                        high_character_distinction: true,
                        disable_italics: true,
                        disable_all_caps: true,
                        letter_spacing: 0.12,
                        word_spacing: 0.16,
                    }
                    .into(),
                ),
                color_contrast: Some(
                    ColorContrastDimensions {
                        color_scheme: ColorScheme::WarmBias,
                        contrast_level: ContrastLevel::High,
                        color_blind_mode: ColorBlindMode::None,
                        color_independent_state: true,
                        force_borders: false,
                    }
                    .into(),
                ),
                cognitive: Some(
                    CognitiveDimensions {
                        simple_language_mode: true,
                        no_jargon_mode: true,
                        disclosure_mode: DisclosureMode::Progressive,
                        chunked_information: true,
                        explicit_state_labels: true,
                        confirm_destructive_actions: true,
                        no_surprise_changes: true,
                        layout_consistency_lock: true,
                        decision_reduction_mode: false,
                        visual_hierarchy_boost: true,
                        always_show_progress: true,
                        universal_undo: true,
                    }
                    .into(),
                ),
                ..Default::default()
            },
        ),

        PresetId::AdhdCognitiveLoad => preset(
            id,
            "ADHD / Cognitive Load",
            "Reduced distractions, clear hierarchy, step-by-step guidance, minimal choices",
            WcagLevel::AAA,
            true,
            PartialAccessibilityDimensions {
                cognitive: Some(
                    CognitiveDimensions {
                        simple_language_mode: true,
                        no_jargon_mode: true,
                        disclosure_mode: DisclosureMode::StepByStep,
                        chunked_information: true,
                        explicit_state_labels: true,
                        confirm_destructive_actions: true,
                        no_surprise_changes: true,
                        layout_consistency_lock: true,
                        decision_reduction_mode: true,
                        visual_hierarchy_boost: true,
                        always_show_progress: true,
                        universal_undo: true,
                    }
                    .into(),
                ),
                sensory_sensitivity: Some(
                    SensorySensitivityDimensions {
                        low_stimulation_mode: true,
                        visual_density: VisualDensity::Minimal,
                        disable_flashing: true,
                        disable_high_frequency_patterns: true,
                        calm_idle_states: true,
                        alert_timing: AlertTiming::RateLimited,
                        disable_alert_stacking: true,
                        max_alerts_per_minute: 5,
                        disable_ambient_sounds: true,
                    }
                    .into(),
                ),
                motion_animation: Some(reduced_motion(200).into()),
                focus_navigation_input: Some(
                    FocusNavigationInputDimensions {
                        focus_indicator_size: FocusIndicatorSize::Enhanced,
                        always_show_focus: true,
                        keyboard_first_navigation: true,
                        screen_reader_optimized: false,
                        switch_navigation: false,
                        touch_target_size: TouchTargetSize::Enlarged,
                        handedness: Handedness::Neutral,
                        sticky_primary_actions: true,
                        sequential_navigation: true,
                        always_visible_skip_links: true,
                        increase_interactive_spacing: true,
                    }
                    .into(),
                ),
                ..Default::default()
            },
        ),

        PresetId::ScreenReaderFirst => preset(
            id,
            "Screen Reader First",
            "Optimized for screen reader navigation with keyboard-first controls",
            WcagLevel::AAA,
            true,
            PartialAccessibilityDimensions {
                focus_navigation_input: Some(
                    FocusNavigationInputDimensions {
                        focus_indicator_size: FocusIndicatorSize::ExtraLarge,
                        always_show_focus: true,
                        keyboard_first_navigation: true,
                        screen_reader_optimized: true,
                        switch_navigation: false,
                        touch_target_size: TouchTargetSize::Standard,
                        handedness: Handedness::Neutral,
                        sticky_primary_actions: false,
                        sequential_navigation: true,
                        always_visible_skip_links: true,
                        increase_interactive_spacing: false,
                    }
                    .into(),
                ),
                cognitive: Some(
                    CognitiveDimensions {
                        simple_language_mode: false,
                        no_jargon_mode: false,
                        disclosure_mode: DisclosureMode::AllAtOnce,
                        chunked_information: false,
                        explicit_state_labels: true,
                        confirm_destructive_actions: true,
                        no_surprise_changes: true,
                        layout_consistency_lock: true,
                        decision_reduction_mode: false,
                        visual_hierarchy_boost: false,
                        always_show_progress: true,
                        universal_undo: true,
                    }
                    .into(),
                ),
                motion_animation: Some(no_motion().into()),
                ..Default::default()
            },
        ),

        PresetId::ElderFriendly => preset(
            id,
            "Elder Friendly",
            "Large text, simple language, clear buttons, confirmations, and undo",
            WcagLevel::AAA,
            true,
            PartialAccessibilityDimensions {
                typography_reading: Some(
                    TypographyReadingDimensions {
                        font_scale: FontScale::ExtraLarge,
                        dyslexia_font: false,
                        monospace_reading: false,
                        line_height: LineHeight::Loose,
                        paragraph_spacing: ParagraphSpacing::Increased,
                        max_line_length: MaxLineLength::Reduced,
                        high_character_distinction: true,
                        disable_italics: false,
                        disable_all_caps: false,
                        letter_spacing: 0.02,
                        word_spacing: 0.0,
                    }
                    .into(),
                ),
                color_contrast: Some(
                    ColorContrastDimensions {
                        color_scheme: ColorScheme::Light,
                        contrast_level: ContrastLevel::High,
                        color_blind_mode: ColorBlindMode::None,
                        color_independent_state: true,
                        force_borders: true,
                    }
                    .into(),
                ),
                focus_navigation_input: Some(
                    FocusNavigationInputDimensions {
                        focus_indicator_size: FocusIndicatorSize::ExtraLarge,
                        always_show_focus: true,
                        keyboard_first_navigation: false,
                        screen_reader_optimized: false,
                        switch_navigation: false,
                        touch_target_size: TouchTargetSize::Maximum,
                        handedness: Handedness::Neutral,
                        sticky_primary_actions: true,
                        sequential_navigation: false,
                        always_visible_skip_links: false,
                        increase_interactive_spacing: true,
                    }
                    .into(),
                ),
                cognitive: Some(
                    CognitiveDimensions {
                        simple_language_mode: true,
                        no_jargon_mode: true,
                        disclosure_mode: DisclosureMode::StepByStep,
                        chunked_information: true,
                        explicit_state_labels: true,
                        confirm_destructive_actions: true,
                        no_surprise_changes: true,
                        layout_consistency_lock: true,
                        decision_reduction_mode: true,
                        visual_hierarchy_boost: true,
                        always_show_progress: true,
                        universal_undo: true,
                    }
                    .into(),
                ),
                motion_animation: Some(reduced_motion(300).into()),
                ..Default::default()
            },
        ),

        PresetId::CrisisEmergency => preset(
            id,
            "Crisis / Emergency",
            "Maximum readability, minimal interface, large controls, immediate actions",
            WcagLevel::AAA,
            false,
            PartialAccessibilityDimensions {
                situational_environmental: Some(
                    SituationalEnvironmentalDimensions {
                        low_bandwidth_mode: true,
                        emergency_mode: true,
                        ..Default::default()
                    }
                    .into(),
                ),
                typography_reading: Some(
                    TypographyReadingDimensions {
                        font_scale: FontScale::Maximum,
                        dyslexia_font: false,
                        monospace_reading: false,
                        line_height: LineHeight::Loose,
                        paragraph_spacing: ParagraphSpacing::Double,
                        max_line_length: MaxLineLength::Reduced,
                        high_character_distinction: true,
                        disable_italics: true,
                        disable_all_caps: false,
                        letter_spacing: 0.0,
                        word_spacing: 0.0,
                    }
                    .into(),
                ),
                color_contrast: Some(
                    ColorContrastDimensions {
                        color_scheme: ColorScheme::Light,
                        contrast_level: ContrastLevel::UltraHigh,
                        color_blind_mode: ColorBlindMode::None,
                        color_independent_state: true,
                        force_borders: true,
                    }
                    .into(),
                ),
                focus_navigation_input: Some(
                    FocusNavigationInputDimensions {
                        focus_indicator_size: FocusIndicatorSize::ExtraLarge,
                        always_show_focus: true,
                        keyboard_first_navigation: true,
                        screen_reader_optimized: false,
                        switch_navigation: false,
                        touch_target_size: TouchTargetSize::Maximum,
                        handedness: Handedness::Neutral,
                        sticky_primary_actions: true,
                        sequential_navigation: false,
                        always_visible_skip_links: true,
                        increase_interactive_spacing: true,
                    }
                    .into(),
                ),
                // Explicitly relaxes confirmDestructiveActions
                cognitive: Some(
                    CognitiveDimensions {
                        simple_language_mode: true,
                        no_jargon_mode: true,
                        disclosure_mode: DisclosureMode::AllAtOnce,
                        chunked_information: false,
                        explicit_state_labels: true,
                        confirm_destructive_actions: false,
                        no_surprise_changes: true,
                        layout_consistency_lock: true,
                        decision_reduction_mode: true,
                        visual_hierarchy_boost: true,
                        always_show_progress: false,
                        universal_undo: false,
                    }
                    .into(),
                ),
                sensory_sensitivity: Some(
                    SensorySensitivityDimensions {
                        low_stimulation_mode: true,
                        visual_density: VisualDensity::Minimal,
                        disable_flashing: true,
                        disable_high_frequency_patterns: true,
                        calm_idle_states: true,
                        alert_timing: AlertTiming::Immediate,
                        disable_alert_stacking: true,
                        max_alerts_per_minute: 60,
                        disable_ambient_sounds: true,
                    }
                    .into(),
                ),
                motion_animation: Some(no_motion().into()),
                ..Default::default()
            },
        ),

        PresetId::OutdoorSunlight => preset(
            id,
            "Outdoor / Sunlight",
            "Maximum contrast, no subtle shades, large touch targets",
            WcagLevel::AAA,
            true,
            PartialAccessibilityDimensions {
                situational_environmental: Some(
                    SituationalEnvironmentalDimensions {
                        sunlight_mode: true,
                        ..Default::default()
                    }
                    .into(),
                ),
                color_contrast: Some(
                    ColorContrastDimensions {
                        color_scheme: ColorScheme::Light,
                        contrast_level: ContrastLevel::UltraHigh,
                        color_blind_mode: ColorBlindMode::None,
                        color_independent_state: true,
                        force_borders: true,
                    }
                    .into(),
                ),
                focus_navigation_input: Some(
                    FocusNavigationInputDimensions {
                        focus_indicator_size: FocusIndicatorSize::ExtraLarge,
                        always_show_focus: true,
                        touch_target_size: TouchTargetSize::Enlarged,
                        increase_interactive_spacing: true,
                        ..Default::default()
                    }
                    .into(),
                ),
                typography_reading: Some(
                    TypographyReadingDimensions {
                        font_scale: FontScale::Large,
                        line_height: LineHeight::Relaxed,
                        paragraph_spacing: ParagraphSpacing::Increased,
                        max_line_length: MaxLineLength::Standard,
                        high_character_distinction: true,
                        ..Default::default()
                    }
                    .into(),
                ),
                ..Default::default()
            },
        ),

        PresetId::LowPowerOffline => preset(
            id,
            "Low Power / Offline",
            "Battery efficient, reduced animations, offline-optimized visuals",
            WcagLevel::AA,
            true,
            PartialAccessibilityDimensions {
                situational_environmental: Some(
                    SituationalEnvironmentalDimensions {
                        offline_mode_visuals: true,
                        low_bandwidth_mode: true,
                        battery_saver_mode: true,
                        ..Default::default()
                    }
                    .into(),
                ),
                motion_animation: Some(no_motion().into()),
                sensory_sensitivity: Some(
                    SensorySensitivityDimensions {
                        low_stimulation_mode: false,
                        visual_density: VisualDensity::Reduced,
                        disable_flashing: true,
                        disable_high_frequency_patterns: false,
                        calm_idle_states: true,
                        alert_timing: AlertTiming::Debounced,
                        disable_alert_stacking: false,
                        max_alerts_per_minute: 30,
                        disable_ambient_sounds: true,
                    }
                    .into(),
                ),
                ..Default::default()
            },
        ),

        PresetId::PublicSharedDevice => preset(
            id,
            "Public / Shared Device",
            "Privacy mode, reduced readability distance, clear logout, no saved data",
            WcagLevel::AA,
            true,
            PartialAccessibilityDimensions {
                situational_environmental: Some(
                    SituationalEnvironmentalDimensions {
                        public_space_privacy: true,
                        ..Default::default()
                    }
                    .into(),
                ),
                cognitive: Some(
                    CognitiveDimensions {
                        simple_language_mode: true,
                        explicit_state_labels: true,
                        universal_undo: true,
                        ..Default::default()
                    }
                    .into(),
                ),
                ..Default::default()
            },
        ),

        PresetId::MotorImpairment => preset(
            id,
            "Motor Impairment",
            "Large touch targets, increased spacing, sticky actions, undo support",
            WcagLevel::AAA,
            true,
            PartialAccessibilityDimensions {
                focus_navigation_input: Some(
                    FocusNavigationInputDimensions {
                        focus_indicator_size: FocusIndicatorSize::ExtraLarge,
                        always_show_focus: true,
                        keyboard_first_navigation: true,
                        screen_reader_optimized: false,
                        switch_navigation: false,
                        touch_target_size: TouchTargetSize::Maximum,
                        handedness: Handedness::Neutral,
                        sticky_primary_actions: true,
                        sequential_navigation: false,
                        always_visible_skip_links: true,
                        increase_interactive_spacing: true,
                    }
                    .into(),
                ),
                cognitive: Some(
                    CognitiveDimensions {
                        explicit_state_labels: true,
                        layout_consistency_lock: true,
                        universal_undo: true,
                        ..Default::default()
                    }
                    .into(),
                ),
                motion_animation: Some(reduced_motion(300).into()),
                ..Default::default()
            },
        ),

        PresetId::VestibularDisorders => preset(
            id,
            "Vestibular Disorders",
            "No motion, no parallax, no autoplay, instant transitions",
            WcagLevel::AAA,
            true,
            PartialAccessibilityDimensions {
                motion_animation: Some(no_motion().into()),
                sensory_sensitivity: Some(
                    SensorySensitivityDimensions {
                        low_stimulation_mode: true,
                        visual_density: VisualDensity::Normal,
                        disable_flashing: true,
                        disable_high_frequency_patterns: true,
                        calm_idle_states: true,
                        alert_timing: AlertTiming::Debounced,
                        disable_alert_stacking: true,
                        max_alerts_per_minute: 10,
                        disable_ambient_sounds: true,
                    }
                    .into(),
                ),
                ..Default::default()
            },
        ),

        PresetId::Default => preset(
            id,
            "Default (System-Aware)",
            "Respects system accessibility preferences with sensible defaults",
            WcagLevel::AA,
            true,
            PartialAccessibilityDimensions::default(),
        ),
    }
}

fn preset(
    id: PresetId,
    name: &str,
    description: &str,
    wcag_level: WcagLevel,
    allow_overrides: bool,
    dimensions: PartialAccessibilityDimensions,
) -> AccessibilityPreset {
    AccessibilityPreset {
        id,
        name: name.to_string(),
        description: description.to_string(),
        wcag_level,
        allow_overrides,
        dimensions,
    }
}

/// Motion group shared by the presets that remove all motion
fn no_motion() -> MotionAnimationDimensions {
    MotionAnimationDimensions {
        motion_preference: MotionPreference::None,
        disable_parallax: true,
        disable_auto_play: true,
        instant_transitions: true,
        static_loading_indicators: true,
        text_only_feedback: true,
        max_animation_duration: 0,
    }
}

fn reduced_motion(max_animation_duration: i32) -> MotionAnimationDimensions {
    MotionAnimationDimensions {
        motion_preference: MotionPreference::Reduced,
        disable_parallax: true,
        disable_auto_play: true,
        instant_transitions: false,
        static_loading_indicators: false,
        text_only_feedback: false,
        max_animation_duration,
    }
}
