// ABOUTME: Predefined color palettes selected by color scheme family and contrast level
// ABOUTME: Every (family, contrast) pair has its own palette, so lookup is total

use attune_types::{ColorScheme, ContrastLevel, StyleToken};

/// Palette family a color scheme draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteFamily {
    Light,
    Dark,
    Monochrome,
}

impl PaletteFamily {
    pub const ALL: &'static [PaletteFamily] = &[
        PaletteFamily::Light,
        PaletteFamily::Dark,
        PaletteFamily::Monochrome,
    ];

    /// Warm and cool bias schemes share the light family.
    pub const fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Dark | ColorScheme::DimDark => Self::Dark,
            ColorScheme::Monochrome => Self::Monochrome,
            ColorScheme::Light | ColorScheme::WarmBias | ColorScheme::CoolBias => Self::Light,
        }
    }
}

/// The ten scheme-dependent color tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg_base: &'static str,
    pub bg_elevated: &'static str,
    pub bg_sunken: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_tertiary: &'static str,
    pub border_default: &'static str,
    pub interactive_primary: &'static str,
    pub interactive_hover: &'static str,
    pub interactive_active: &'static str,
}

impl Palette {
    pub fn entries(&self) -> [(StyleToken, &'static str); 10] {
        [
            (StyleToken::BgBase, self.bg_base),
            (StyleToken::BgElevated, self.bg_elevated),
            (StyleToken::BgSunken, self.bg_sunken),
            (StyleToken::TextPrimary, self.text_primary),
            (StyleToken::TextSecondary, self.text_secondary),
            (StyleToken::TextTertiary, self.text_tertiary),
            (StyleToken::BorderDefault, self.border_default),
            (StyleToken::InteractivePrimary, self.interactive_primary),
            (StyleToken::InteractiveHover, self.interactive_hover),
            (StyleToken::InteractiveActive, self.interactive_active),
        ]
    }
}

pub fn palette(family: PaletteFamily, contrast: ContrastLevel) -> &'static Palette {
    use ContrastLevel::*;
    use PaletteFamily::*;

    match (family, contrast) {
        (Light, Standard) => &LIGHT_STANDARD,
        (Light, High) => &LIGHT_HIGH,
        (Light, UltraHigh) => &LIGHT_ULTRA_HIGH,
        (Light, Low) => &LIGHT_LOW,
        (Dark, Standard) => &DARK_STANDARD,
        (Dark, High) => &DARK_HIGH,
        (Dark, UltraHigh) => &DARK_ULTRA_HIGH,
        (Dark, Low) => &DARK_LOW,
        (Monochrome, Standard) => &MONOCHROME_STANDARD,
        // Light high and ultra-high are already pure grayscale
        (Monochrome, High) => &LIGHT_HIGH,
        (Monochrome, UltraHigh) => &LIGHT_ULTRA_HIGH,
        (Monochrome, Low) => &MONOCHROME_LOW,
    }
}

const LIGHT_STANDARD: Palette = Palette {
    bg_base: "hsl(0 0% 100%)",
    bg_elevated: "hsl(0 0% 98%)",
    bg_sunken: "hsl(0 0% 96%)",
    text_primary: "hsl(240 10% 3.9%)",
    text_secondary: "hsl(240 5% 26%)",
    text_tertiary: "hsl(240 4% 46%)",
    border_default: "hsl(240 6% 90%)",
    interactive_primary: "hsl(240 6% 10%)",
    interactive_hover: "hsl(240 6% 20%)",
    interactive_active: "hsl(240 6% 30%)",
};

const LIGHT_HIGH: Palette = Palette {
    bg_base: "hsl(0 0% 100%)",
    bg_elevated: "hsl(0 0% 100%)",
    bg_sunken: "hsl(0 0% 98%)",
    text_primary: "hsl(0 0% 0%)",
    text_secondary: "hsl(0 0% 15%)",
    text_tertiary: "hsl(0 0% 30%)",
    border_default: "hsl(0 0% 60%)",
    interactive_primary: "hsl(0 0% 0%)",
    interactive_hover: "hsl(0 0% 15%)",
    interactive_active: "hsl(0 0% 30%)",
};

const LIGHT_ULTRA_HIGH: Palette = Palette {
    bg_base: "hsl(0 0% 100%)",
    bg_elevated: "hsl(0 0% 100%)",
    bg_sunken: "hsl(0 0% 100%)",
    text_primary: "hsl(0 0% 0%)",
    text_secondary: "hsl(0 0% 0%)",
    text_tertiary: "hsl(0 0% 20%)",
    border_default: "hsl(0 0% 0%)",
    interactive_primary: "hsl(0 0% 0%)",
    interactive_hover: "hsl(0 0% 10%)",
    interactive_active: "hsl(0 0% 20%)",
};

const LIGHT_LOW: Palette = Palette {
    bg_base: "hsl(30 20% 97%)",
    bg_elevated: "hsl(30 20% 98%)",
    bg_sunken: "hsl(30 20% 95%)",
    text_primary: "hsl(30 10% 30%)",
    text_secondary: "hsl(30 10% 45%)",
    text_tertiary: "hsl(30 10% 55%)",
    border_default: "hsl(30 10% 85%)",
    interactive_primary: "hsl(30 10% 35%)",
    interactive_hover: "hsl(30 10% 40%)",
    interactive_active: "hsl(30 10% 45%)",
};

const DARK_STANDARD: Palette = Palette {
    bg_base: "hsl(240 10% 3.9%)",
    bg_elevated: "hsl(240 10% 6%)",
    bg_sunken: "hsl(240 10% 1%)",
    text_primary: "hsl(0 0% 98%)",
    text_secondary: "hsl(0 0% 80%)",
    text_tertiary: "hsl(0 0% 65%)",
    border_default: "hsl(240 4% 16%)",
    interactive_primary: "hsl(0 0% 98%)",
    interactive_hover: "hsl(0 0% 90%)",
    interactive_active: "hsl(0 0% 80%)",
};

const DARK_HIGH: Palette = Palette {
    bg_base: "hsl(0 0% 0%)",
    bg_elevated: "hsl(0 0% 5%)",
    bg_sunken: "hsl(0 0% 0%)",
    text_primary: "hsl(0 0% 100%)",
    text_secondary: "hsl(0 0% 90%)",
    text_tertiary: "hsl(0 0% 75%)",
    border_default: "hsl(0 0% 50%)",
    interactive_primary: "hsl(0 0% 100%)",
    interactive_hover: "hsl(0 0% 95%)",
    interactive_active: "hsl(0 0% 85%)",
};

const DARK_ULTRA_HIGH: Palette = Palette {
    bg_base: "hsl(0 0% 0%)",
    bg_elevated: "hsl(0 0% 0%)",
    bg_sunken: "hsl(0 0% 0%)",
    text_primary: "hsl(0 0% 100%)",
    text_secondary: "hsl(0 0% 100%)",
    text_tertiary: "hsl(0 0% 90%)",
    border_default: "hsl(0 0% 100%)",
    interactive_primary: "hsl(0 0% 100%)",
    interactive_hover: "hsl(0 0% 95%)",
    interactive_active: "hsl(0 0% 90%)",
};

// Softened dark palette for light sensitivity: lifted background, warm muted text
const DARK_LOW: Palette = Palette {
    bg_base: "hsl(240 6% 12%)",
    bg_elevated: "hsl(240 6% 15%)",
    bg_sunken: "hsl(240 6% 10%)",
    text_primary: "hsl(30 10% 78%)",
    text_secondary: "hsl(30 8% 65%)",
    text_tertiary: "hsl(30 6% 55%)",
    border_default: "hsl(240 5% 22%)",
    interactive_primary: "hsl(30 10% 72%)",
    interactive_hover: "hsl(30 10% 67%)",
    interactive_active: "hsl(30 10% 62%)",
};

const MONOCHROME_STANDARD: Palette = Palette {
    bg_base: "hsl(0 0% 100%)",
    bg_elevated: "hsl(0 0% 95%)",
    bg_sunken: "hsl(0 0% 90%)",
    text_primary: "hsl(0 0% 0%)",
    text_secondary: "hsl(0 0% 25%)",
    text_tertiary: "hsl(0 0% 50%)",
    border_default: "hsl(0 0% 70%)",
    interactive_primary: "hsl(0 0% 0%)",
    interactive_hover: "hsl(0 0% 15%)",
    interactive_active: "hsl(0 0% 30%)",
};

const MONOCHROME_LOW: Palette = Palette {
    bg_base: "hsl(0 0% 94%)",
    bg_elevated: "hsl(0 0% 96%)",
    bg_sunken: "hsl(0 0% 92%)",
    text_primary: "hsl(0 0% 30%)",
    text_secondary: "hsl(0 0% 42%)",
    text_tertiary: "hsl(0 0% 52%)",
    border_default: "hsl(0 0% 82%)",
    interactive_primary: "hsl(0 0% 35%)",
    interactive_hover: "hsl(0 0% 40%)",
    interactive_active: "hsl(0 0% 45%)",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_families() {
        assert_eq!(PaletteFamily::for_scheme(ColorScheme::DimDark), PaletteFamily::Dark);
        assert_eq!(PaletteFamily::for_scheme(ColorScheme::WarmBias), PaletteFamily::Light);
        assert_eq!(
            PaletteFamily::for_scheme(ColorScheme::Monochrome),
            PaletteFamily::Monochrome
        );
    }

    #[test]
    fn test_every_palette_is_hsl() {
        for family in PaletteFamily::ALL {
            for contrast in ContrastLevel::ALL {
                for (token, value) in palette(*family, *contrast).entries() {
                    assert!(
                        value.starts_with("hsl(") && value.ends_with(')'),
                        "{family:?}/{contrast}: {token} = {value}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_monochrome_is_grayscale() {
        for contrast in ContrastLevel::ALL {
            for (_, value) in palette(PaletteFamily::Monochrome, *contrast).entries() {
                assert!(value.starts_with("hsl(0 0% "), "{value}");
            }
        }
    }

    #[test]
    fn test_dark_low_differs_from_dark_standard() {
        assert_ne!(
            palette(PaletteFamily::Dark, ContrastLevel::Low),
            palette(PaletteFamily::Dark, ContrastLevel::Standard)
        );
    }
}
