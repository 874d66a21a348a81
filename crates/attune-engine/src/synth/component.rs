// ABOUTME: Layout and timing values for components that cannot read style tokens
// ABOUTME: Shares its lookup tables with the style token derivation

use attune_types::{AccessibilityDimensions, ComponentProps};

use super::scales;

/// Interactive spacing in pixels before density scaling
const INTERACTIVE_SPACING_PX: f64 = 8.0;
const INCREASED_INTERACTIVE_SPACING_PX: f64 = 16.0;

pub fn component_props(dims: &AccessibilityDimensions) -> ComponentProps {
    let typography = &dims.typography_reading;
    let focus = &dims.focus_navigation_input;
    let motion = &dims.motion_animation;

    let spacing = if focus.increase_interactive_spacing {
        INCREASED_INTERACTIVE_SPACING_PX
    } else {
        INTERACTIVE_SPACING_PX
    };
    let density = scales::density_multiplier(dims.sensory_sensitivity.visual_density);

    ComponentProps {
        font_family: scales::font_family(typography).to_string(),
        disable_italics: typography.disable_italics,
        disable_all_caps: typography.disable_all_caps,
        touch_target_min_size: scales::touch_target_min(focus.touch_target_size),
        focus_indicator_width: scales::focus_ring_width(focus.focus_indicator_size),
        // Every density multiplier times 8 or 16 is a whole number
        interactive_spacing: (spacing * density).round() as u32,
        max_line_length: scales::max_line_length(typography.max_line_length).map(str::to_string),
        disclosure_mode: dims.cognitive.disclosure_mode,
        transition_duration: scales::motion_duration(
            motion.motion_preference,
            i64::from(scales::TRANSITION_BASE_MS),
        ),
        animation_duration: scales::motion_duration(
            motion.motion_preference,
            i64::from(motion.max_animation_duration),
        ),
        alert_delay: scales::alert_delay(dims.sensory_sensitivity.alert_timing),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attune_types::{
        AlertTiming, DisclosureMode, MaxLineLength, MotionPreference, TouchTargetSize,
        VisualDensity,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_props() {
        let props = component_props(&AccessibilityDimensions::default());
        assert_eq!(
            props,
            ComponentProps {
                font_family: "system-ui, sans-serif".to_string(),
                disable_italics: false,
                disable_all_caps: false,
                touch_target_min_size: 44,
                focus_indicator_width: 2,
                interactive_spacing: 8,
                max_line_length: Some("80ch".to_string()),
                disclosure_mode: DisclosureMode::AllAtOnce,
                transition_duration: 150,
                animation_duration: 500,
                alert_delay: 0,
            }
        );
    }

    #[test]
    fn test_interactive_spacing_scales_with_density() {
        let mut dims = AccessibilityDimensions::default();
        dims.sensory_sensitivity.visual_density = VisualDensity::Minimal;
        assert_eq!(component_props(&dims).interactive_spacing, 12);

        dims.focus_navigation_input.increase_interactive_spacing = true;
        dims.sensory_sensitivity.visual_density = VisualDensity::Reduced;
        assert_eq!(component_props(&dims).interactive_spacing, 20);
    }

    #[test]
    fn test_unconstrained_line_length_is_none() {
        let mut dims = AccessibilityDimensions::default();
        dims.typography_reading.max_line_length = MaxLineLength::None;
        assert_eq!(component_props(&dims).max_line_length, None);
    }

    #[test]
    fn test_timing_and_targets() {
        let mut dims = AccessibilityDimensions::default();
        dims.motion_animation.motion_preference = MotionPreference::None;
        dims.sensory_sensitivity.alert_timing = AlertTiming::Debounced;
        dims.focus_navigation_input.touch_target_size = TouchTargetSize::Maximum;

        let props = component_props(&dims);
        assert_eq!(props.transition_duration, 0);
        assert_eq!(props.animation_duration, 0);
        assert_eq!(props.alert_delay, 500);
        assert_eq!(props.touch_target_min_size, 72);
    }
}
