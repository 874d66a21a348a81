// ABOUTME: Output contract of theme resolution: style tokens, behavioral flags, component props
// ABOUTME: Plain serializable values so any rendering layer can consume them

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dimensions::{AccessibilityDimensions, DisclosureMode};

dimension_enum! {
    /// Every style token key the synthesizer emits
    StyleToken {
        // Colors
        BgBase => "--a11y-bg-base",
        BgElevated => "--a11y-bg-elevated",
        BgSunken => "--a11y-bg-sunken",
        TextPrimary => "--a11y-text-primary",
        TextSecondary => "--a11y-text-secondary",
        TextTertiary => "--a11y-text-tertiary",
        BorderDefault => "--a11y-border-default",
        BorderFocus => "--a11y-border-focus",
        InteractivePrimary => "--a11y-interactive-primary",
        InteractiveHover => "--a11y-interactive-hover",
        InteractiveActive => "--a11y-interactive-active",
        InteractiveDisabled => "--a11y-interactive-disabled",
        Success => "--a11y-success",
        Warning => "--a11y-warning",
        Error => "--a11y-error",
        Info => "--a11y-info",

        // Spacing
        SpacingXs => "--a11y-spacing-xs",
        SpacingSm => "--a11y-spacing-sm",
        SpacingMd => "--a11y-spacing-md",
        SpacingLg => "--a11y-spacing-lg",
        SpacingXl => "--a11y-spacing-xl",
        TouchTargetMin => "--a11y-touch-target-min",
        InteractiveSpacing => "--a11y-interactive-spacing",

        // Typography
        FontFamilyBase => "--a11y-font-family-base",
        FontFamilyMono => "--a11y-font-family-mono",
        FontSizeBase => "--a11y-font-size-base",
        FontSizeScale => "--a11y-font-size-scale",
        LineHeight => "--a11y-line-height",
        LetterSpacing => "--a11y-letter-spacing",
        WordSpacing => "--a11y-word-spacing",
        ParagraphSpacing => "--a11y-paragraph-spacing",
        MaxLineLength => "--a11y-max-line-length",

        // Borders and focus
        BorderWidth => "--a11y-border-width",
        BorderRadius => "--a11y-border-radius",
        FocusRingWidth => "--a11y-focus-ring-width",
        FocusRingOffset => "--a11y-focus-ring-offset",

        // Timing
        TransitionDuration => "--a11y-transition-duration",
        AnimationDuration => "--a11y-animation-duration",

        // Shadows
        ShadowSm => "--a11y-shadow-sm",
        ShadowMd => "--a11y-shadow-md",
        ShadowLg => "--a11y-shadow-lg",

        DensityMultiplier => "--a11y-density-multiplier",
    }
}

/// Flat map of computed style values keyed by token name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CssTokens(BTreeMap<String, String>);

impl CssTokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, token: StyleToken, value: impl Into<String>) {
        self.0.insert(token.as_str().to_string(), value.into());
    }

    pub fn get(&self, token: StyleToken) -> Option<&str> {
        self.0.get(token.as_str()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Boolean projection of the dimensions: which behaviors to suppress or enable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehavioralFlags {
    // Motion
    pub disable_animations: bool,
    pub disable_transitions: bool,
    pub disable_parallax: bool,
    pub disable_auto_play: bool,

    // Navigation
    pub keyboard_first_mode: bool,
    pub screen_reader_mode: bool,
    pub switch_navigation_mode: bool,
    pub always_show_skip_links: bool,

    // Cognitive
    pub simple_language: bool,
    pub no_jargon: bool,
    pub explicit_labels: bool,
    pub confirm_destructive: bool,
    pub show_progress: bool,

    // Sensory
    pub disable_flashing: bool,
    pub calm_mode: bool,
    pub one_alert_at_a_time: bool,
    pub quiet_mode: bool,

    // Situational
    pub emergency_mode: bool,
    pub privacy_mode: bool,
    pub low_bandwidth: bool,
    pub battery_saver: bool,
}

/// Values for direct use in component layout and timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentProps {
    pub font_family: String,
    pub disable_italics: bool,
    pub disable_all_caps: bool,
    /// Pixels
    pub touch_target_min_size: u32,
    /// Pixels
    pub focus_indicator_width: u32,
    /// Pixels, already scaled by visual density
    pub interactive_spacing: u32,
    /// CSS length, `None` when unconstrained
    pub max_line_length: Option<String>,
    pub disclosure_mode: DisclosureMode,
    /// Milliseconds
    pub transition_duration: u32,
    /// Milliseconds
    pub animation_duration: u32,
    /// Milliseconds
    pub alert_delay: u32,
}

/// Complete resolution output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTokens {
    pub css_tokens: CssTokens,
    pub behavioral_flags: BehavioralFlags,
    pub component_props: ComponentProps,
    pub active_dimensions: AccessibilityDimensions,
}
