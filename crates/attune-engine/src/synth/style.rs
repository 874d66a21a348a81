// ABOUTME: Derives the flat style token map from complete dimensions
// ABOUTME: Colors come from the palette tables; everything else is a scalar lookup

use attune_types::{AccessibilityDimensions, ContrastLevel, CssTokens, StyleToken};

use super::palette::{PaletteFamily, palette};
use super::scales::{self, css_number};

const INTERACTIVE_DISABLED: &str = "hsl(0 0% 70%)";
const SUCCESS: &str = "hsl(142 76% 36%)";
const WARNING: &str = "hsl(38 92% 50%)";
const ERROR: &str = "hsl(0 84% 60%)";
const INFO: &str = "hsl(221 83% 53%)";

const SHADOW_SM: &str = "0 1px 2px 0 rgb(0 0 0 / 0.05)";
const SHADOW_MD: &str = "0 4px 6px -1px rgb(0 0 0 / 0.1)";
const SHADOW_LG: &str = "0 10px 15px -3px rgb(0 0 0 / 0.1)";

const BORDER_RADIUS: &str = "0.375rem";
const FOCUS_RING_OFFSET: &str = "2px";
const FONT_SIZE_BASE: &str = "1rem";

pub fn style_tokens(dims: &AccessibilityDimensions) -> CssTokens {
    let mut tokens = CssTokens::new();
    color_tokens(dims, &mut tokens);
    spacing_tokens(dims, &mut tokens);
    typography_tokens(dims, &mut tokens);
    border_tokens(dims, &mut tokens);
    timing_tokens(dims, &mut tokens);
    shadow_tokens(dims, &mut tokens);
    tokens.insert(
        StyleToken::DensityMultiplier,
        css_number(scales::density_multiplier(dims.sensory_sensitivity.visual_density)),
    );
    tokens
}

/// Ultra-high contrast or emergency mode strips decoration.
fn flattened(dims: &AccessibilityDimensions) -> bool {
    dims.color_contrast.contrast_level == ContrastLevel::UltraHigh
        || dims.situational_environmental.emergency_mode
}

fn color_tokens(dims: &AccessibilityDimensions, tokens: &mut CssTokens) {
    let color = &dims.color_contrast;
    let palette = palette(
        PaletteFamily::for_scheme(color.color_scheme),
        color.contrast_level,
    );

    for (token, value) in palette.entries() {
        tokens.insert(token, value);
    }
    tokens.insert(StyleToken::BorderFocus, palette.interactive_primary);
    tokens.insert(StyleToken::InteractiveDisabled, INTERACTIVE_DISABLED);

    let ultra_high = color.contrast_level == ContrastLevel::UltraHigh;
    for (token, value) in [
        (StyleToken::Success, SUCCESS),
        (StyleToken::Warning, WARNING),
        (StyleToken::Error, ERROR),
        (StyleToken::Info, INFO),
    ] {
        // Status colors collapse to the foreground so they stay legible on either family
        tokens.insert(token, if ultra_high { palette.text_primary } else { value });
    }

    tokens.insert(
        StyleToken::BorderWidth,
        if color.force_borders { "2px" } else { "1px" },
    );
}

fn spacing_tokens(dims: &AccessibilityDimensions, tokens: &mut CssTokens) {
    let density = scales::density_multiplier(dims.sensory_sensitivity.visual_density);
    let rem = |base: f64| format!("{}rem", css_number(base * density));

    tokens.insert(StyleToken::SpacingXs, rem(0.25));
    tokens.insert(StyleToken::SpacingSm, rem(0.5));
    tokens.insert(StyleToken::SpacingMd, rem(1.0));
    tokens.insert(StyleToken::SpacingLg, rem(1.5));
    tokens.insert(StyleToken::SpacingXl, rem(2.0));

    let focus = &dims.focus_navigation_input;
    tokens.insert(
        StyleToken::TouchTargetMin,
        format!("{}px", scales::touch_target_min(focus.touch_target_size)),
    );
    tokens.insert(
        StyleToken::InteractiveSpacing,
        rem(if focus.increase_interactive_spacing { 1.0 } else { 0.5 }),
    );
}

fn typography_tokens(dims: &AccessibilityDimensions, tokens: &mut CssTokens) {
    let typography = &dims.typography_reading;

    tokens.insert(StyleToken::FontFamilyBase, scales::font_family(typography));
    tokens.insert(StyleToken::FontFamilyMono, scales::MONOSPACE_FONT_STACK);
    tokens.insert(StyleToken::FontSizeBase, FONT_SIZE_BASE);
    tokens.insert(
        StyleToken::FontSizeScale,
        css_number(scales::font_scale_multiplier(typography.font_scale)),
    );
    tokens.insert(
        StyleToken::LineHeight,
        css_number(scales::line_height(typography.line_height)),
    );
    tokens.insert(
        StyleToken::LetterSpacing,
        format!("{}em", css_number(typography.letter_spacing)),
    );
    tokens.insert(
        StyleToken::WordSpacing,
        format!("{}em", css_number(typography.word_spacing)),
    );
    tokens.insert(
        StyleToken::ParagraphSpacing,
        scales::paragraph_spacing(typography.paragraph_spacing),
    );
    tokens.insert(
        StyleToken::MaxLineLength,
        scales::max_line_length(typography.max_line_length).unwrap_or("none"),
    );
}

fn border_tokens(dims: &AccessibilityDimensions, tokens: &mut CssTokens) {
    tokens.insert(
        StyleToken::BorderRadius,
        if flattened(dims) { "0px" } else { BORDER_RADIUS },
    );
    tokens.insert(
        StyleToken::FocusRingWidth,
        format!(
            "{}px",
            scales::focus_ring_width(dims.focus_navigation_input.focus_indicator_size)
        ),
    );
    tokens.insert(StyleToken::FocusRingOffset, FOCUS_RING_OFFSET);
}

fn timing_tokens(dims: &AccessibilityDimensions, tokens: &mut CssTokens) {
    let motion = &dims.motion_animation;
    let transition = scales::motion_duration(
        motion.motion_preference,
        i64::from(scales::TRANSITION_BASE_MS),
    );
    let animation = scales::motion_duration(
        motion.motion_preference,
        i64::from(motion.max_animation_duration),
    );

    tokens.insert(StyleToken::TransitionDuration, format!("{transition}ms"));
    tokens.insert(StyleToken::AnimationDuration, format!("{animation}ms"));
}

fn shadow_tokens(dims: &AccessibilityDimensions, tokens: &mut CssTokens) {
    let flat = flattened(dims);
    for (token, value) in [
        (StyleToken::ShadowSm, SHADOW_SM),
        (StyleToken::ShadowMd, SHADOW_MD),
        (StyleToken::ShadowLg, SHADOW_LG),
    ] {
        tokens.insert(token, if flat { "none" } else { value });
    }
}
