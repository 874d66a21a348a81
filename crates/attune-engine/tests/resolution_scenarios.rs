// ABOUTME: End-to-end resolution scenarios through the public engine API
// ABOUTME: Settings go in as JSON or values, ThemeTokens come out

use attune_engine::attune_types::{
    AccessibilityUserSettings, ContrastLevel, FontScale, MotionPreference,
    PartialAccessibilityDimensions, PartialMotionAnimation, PartialTypographyReading, PresetId,
    StyleToken, SystemDefaults,
};
use attune_engine::{
    AccessibilitySession, FixedSystemDefaults, PresetCatalog, ThemeResolver, load_settings,
    validate,
};
use pretty_assertions::assert_eq;

fn resolver(system: SystemDefaults) -> ThemeResolver<FixedSystemDefaults> {
    ThemeResolver::new(FixedSystemDefaults(system))
}

fn with_preset(id: PresetId) -> AccessibilityUserSettings {
    AccessibilityUserSettings {
        active_preset: Some(id.as_str().to_string()),
        ..Default::default()
    }
}

#[test]
fn empty_settings_keep_every_safeguard() {
    let tokens = resolver(SystemDefaults::default()).resolve(&AccessibilityUserSettings::default(), None);
    let dims = tokens.active_dimensions;

    assert!(dims.sensory_sensitivity.disable_flashing);
    assert!(dims.cognitive.confirm_destructive_actions);
    assert!(dims.cognitive.no_surprise_changes);
    assert!(dims.situational_environmental.quiet_mode);
    assert!(tokens.behavioral_flags.disable_flashing);
}

#[test]
fn reduced_motion_cascades_from_system() {
    let tokens = resolver(SystemDefaults {
        prefers_reduced_motion: true,
        ..Default::default()
    })
    .resolve(&AccessibilityUserSettings::default(), None);

    assert!(tokens.behavioral_flags.disable_parallax);
    assert!(tokens.behavioral_flags.disable_auto_play);
    assert!(tokens.component_props.transition_duration <= 200);
    assert!(tokens.component_props.animation_duration <= 200);
}

#[test]
fn user_override_beats_preset() {
    let mut settings = with_preset(PresetId::Photosensitive);
    let preset = PresetCatalog::new().preset(PresetId::Photosensitive);
    assert_eq!(
        preset.dimensions.motion_animation.and_then(|g| g.motion_preference),
        Some(MotionPreference::None)
    );

    settings.dimension_overrides = PartialAccessibilityDimensions {
        motion_animation: Some(PartialMotionAnimation {
            motion_preference: Some(MotionPreference::Full),
            ..Default::default()
        }),
        ..Default::default()
    };

    let tokens = resolver(SystemDefaults::default()).resolve(&settings, None);
    assert_eq!(
        tokens.active_dimensions.motion_animation.motion_preference,
        MotionPreference::Full
    );
    assert!(!tokens.behavioral_flags.disable_animations);
}

#[test]
fn crisis_preset_forces_contrast_and_flattens() {
    let tokens = resolver(SystemDefaults::default()).resolve(&with_preset(PresetId::CrisisEmergency), None);

    assert_eq!(
        tokens.active_dimensions.color_contrast.contrast_level,
        ContrastLevel::UltraHigh
    );
    for shadow in [StyleToken::ShadowSm, StyleToken::ShadowMd, StyleToken::ShadowLg] {
        assert_eq!(tokens.css_tokens.get(shadow), Some("none"));
    }
    assert_eq!(tokens.css_tokens.get(StyleToken::BorderRadius), Some("0px"));
    assert!(tokens.behavioral_flags.emergency_mode);
}

#[test]
fn extra_large_font_scale_token() {
    let mut settings = AccessibilityUserSettings::default();
    settings.dimension_overrides.typography_reading = Some(PartialTypographyReading {
        font_scale: Some(FontScale::ExtraLarge),
        ..Default::default()
    });

    let tokens = resolver(SystemDefaults::default()).resolve(&settings, None);
    assert_eq!(tokens.css_tokens.get(StyleToken::FontSizeScale), Some("1.5"));
}

#[test]
fn validator_boundaries() {
    let letter = |value: f64| PartialAccessibilityDimensions {
        typography_reading: Some(PartialTypographyReading {
            letter_spacing: Some(value),
            ..Default::default()
        }),
        ..Default::default()
    };

    assert!(validate(&letter(0.0)).valid);
    assert!(validate(&letter(0.2)).valid);
    for value in [0.21, -0.01] {
        let result = validate(&letter(value));
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].starts_with("Letter spacing"));
    }
}

#[test]
fn unknown_preset_resolves_like_no_preset() {
    let resolver = resolver(SystemDefaults::default());
    let unknown = AccessibilityUserSettings {
        active_preset: Some("does-not-exist".into()),
        ..Default::default()
    };
    assert_eq!(
        resolver.resolve(&unknown, None),
        resolver.resolve(&AccessibilityUserSettings::default(), None)
    );
}

#[test]
fn stored_settings_round_trip_through_session() {
    let stored = r#"{
        "activePreset": "dyslexia",
        "dimensionOverrides": { "typographyReading": { "fontScale": "large" } },
        "temporaryOverrides": {},
        "syncSettings": false,
        "lastModified": 1700000000000,
        "version": 1
    }"#;

    let session = AccessibilitySession::new(
        resolver(SystemDefaults::default()),
        load_settings(stored),
    );
    assert!(session.is_preset_active(PresetId::Dyslexia));

    let tokens = session.tokens();
    assert!(tokens.active_dimensions.typography_reading.dyslexia_font);
    assert_eq!(tokens.css_tokens.get(StyleToken::FontSizeScale), Some("1.25"));
    assert!(
        tokens
            .component_props
            .font_family
            .starts_with("OpenDyslexic")
    );
}

#[test]
fn outdated_settings_fall_back_to_defaults() {
    let session = AccessibilitySession::new(
        resolver(SystemDefaults::default()),
        load_settings(r#"{"version": 0, "activePreset": "low-vision"}"#),
    );
    assert!(!session.has_customizations());
}

#[test]
fn tokens_serialize_with_camel_case_contract() {
    let tokens = resolver(SystemDefaults::default()).resolve(&AccessibilityUserSettings::default(), None);
    let value = serde_json::to_value(&tokens).unwrap();

    assert_eq!(value["cssTokens"]["--a11y-font-size-scale"], "1");
    assert_eq!(value["behavioralFlags"]["confirmDestructive"], true);
    assert_eq!(value["componentProps"]["touchTargetMinSize"], 44);
    assert_eq!(value["componentProps"]["maxLineLength"], "80ch");
    assert_eq!(value["activeDimensions"]["cognitive"]["noSurpriseChanges"], true);
}
