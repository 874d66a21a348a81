// ABOUTME: Token synthesis from complete dimensions into the renderer-facing ThemeTokens
// ABOUTME: Style tokens, behavior flags and component props are independent pure functions

mod behavior;
mod component;
pub mod palette;
pub mod scales;
mod style;

use attune_types::{AccessibilityDimensions, ThemeTokens};

pub use behavior::behavioral_flags;
pub use component::component_props;
pub use style::style_tokens;

/// Derive every artifact for `dims`.
pub fn synthesize(dims: &AccessibilityDimensions) -> ThemeTokens {
    ThemeTokens {
        css_tokens: style_tokens(dims),
        behavioral_flags: behavioral_flags(dims),
        component_props: component_props(dims),
        active_dimensions: *dims,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attune_types::{ContrastLevel, StyleToken};

    #[test]
    fn test_synthesis_is_deterministic() {
        let mut dims = AccessibilityDimensions::default();
        dims.color_contrast.contrast_level = ContrastLevel::Low;
        dims.typography_reading.letter_spacing = 0.12;

        assert_eq!(synthesize(&dims), synthesize(&dims));
    }

    #[test]
    fn test_synthesis_carries_dimensions() {
        let mut dims = AccessibilityDimensions::default();
        dims.typography_reading.letter_spacing = 0.12;
        let tokens = synthesize(&dims);
        assert_eq!(tokens.active_dimensions, dims);
        assert_eq!(
            tokens.css_tokens.get(StyleToken::LetterSpacing),
            Some("0.12em")
        );
    }
}
