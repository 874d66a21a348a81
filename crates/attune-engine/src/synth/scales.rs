// ABOUTME: Enum-to-scalar lookup tables shared by style tokens and component props
// ABOUTME: Also formats numbers the way style sheets expect them (1 not 1.0)

use attune_types::{
    AlertTiming, FocusIndicatorSize, FontScale, LineHeight, MaxLineLength, MotionPreference,
    ParagraphSpacing, TouchTargetSize, TypographyReadingDimensions, VisualDensity,
};

/// Base transition length before motion preferences are applied
pub const TRANSITION_BASE_MS: u32 = 150;

/// Upper bound for any duration under reduced motion
pub const REDUCED_MOTION_CAP_MS: u32 = 200;

pub const DYSLEXIA_FONT_STACK: &str = "OpenDyslexic, \"Comic Sans MS\", sans-serif";
pub const MONOSPACE_FONT_STACK: &str = "ui-monospace, monospace";
pub const SYSTEM_FONT_STACK: &str = "system-ui, sans-serif";

pub const fn font_scale_multiplier(scale: FontScale) -> f64 {
    match scale {
        FontScale::Normal => 1.0,
        FontScale::Large => 1.25,
        FontScale::ExtraLarge => 1.5,
        FontScale::Maximum => 2.0,
    }
}

pub const fn line_height(value: LineHeight) -> f64 {
    match value {
        LineHeight::Normal => 1.5,
        LineHeight::Relaxed => 1.75,
        LineHeight::Loose => 2.0,
    }
}

pub const fn paragraph_spacing(value: ParagraphSpacing) -> &'static str {
    match value {
        ParagraphSpacing::Normal => "1em",
        ParagraphSpacing::Increased => "1.5em",
        ParagraphSpacing::Double => "2em",
    }
}

/// CSS length for the line length limit, `None` when unconstrained.
pub const fn max_line_length(value: MaxLineLength) -> Option<&'static str> {
    match value {
        MaxLineLength::None => None,
        MaxLineLength::Standard => Some("80ch"),
        MaxLineLength::Reduced => Some("60ch"),
        MaxLineLength::Narrow => Some("45ch"),
    }
}

/// Pixels
pub const fn focus_ring_width(size: FocusIndicatorSize) -> u32 {
    match size {
        FocusIndicatorSize::Standard => 2,
        FocusIndicatorSize::Enhanced => 3,
        FocusIndicatorSize::ExtraLarge => 5,
    }
}

/// Pixels
pub const fn touch_target_min(size: TouchTargetSize) -> u32 {
    match size {
        TouchTargetSize::Standard => 44,
        TouchTargetSize::Enlarged => 56,
        TouchTargetSize::Maximum => 72,
    }
}

pub const fn density_multiplier(density: VisualDensity) -> f64 {
    match density {
        VisualDensity::Normal => 1.0,
        VisualDensity::Reduced => 1.25,
        VisualDensity::Minimal => 1.5,
    }
}

/// Milliseconds
pub const fn alert_delay(timing: AlertTiming) -> u32 {
    match timing {
        AlertTiming::Immediate => 0,
        AlertTiming::Debounced => 500,
        AlertTiming::RateLimited => 3000,
    }
}

/// Effective duration of a motion with nominal length `base_ms`.
///
/// Negative bases (possible only from unvalidated input) count as zero.
pub fn motion_duration(preference: MotionPreference, base_ms: i64) -> u32 {
    let base = u32::try_from(base_ms.max(0)).unwrap_or(u32::MAX);
    match preference {
        MotionPreference::None => 0,
        MotionPreference::Reduced => base.min(REDUCED_MOTION_CAP_MS),
        MotionPreference::Full => base,
    }
}

/// Dyslexia font wins over monospace, which wins over the system stack.
pub fn font_family(typography: &TypographyReadingDimensions) -> &'static str {
    if typography.dyslexia_font {
        DYSLEXIA_FONT_STACK
    } else if typography.monospace_reading {
        MONOSPACE_FONT_STACK
    } else {
        SYSTEM_FONT_STACK
    }
}

/// Shortest decimal form: whole numbers lose their fraction and
/// negative zero prints as `0`.
pub fn css_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
