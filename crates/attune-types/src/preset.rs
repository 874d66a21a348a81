// ABOUTME: Preset identifiers and the curated preset record type
// ABOUTME: Identifiers are a closed set; unknown strings parse to None rather than failing

use serde::{Deserialize, Serialize};

use crate::partial::PartialAccessibilityDimensions;

dimension_enum! {
    /// Identifier of a curated accessibility preset
    PresetId {
        LowVision => "low-vision",
        Photosensitive => "photosensitive",
        Dyslexia => "dyslexia",
        AdhdCognitiveLoad => "adhd-cognitive-load",
        ScreenReaderFirst => "screen-reader-first",
        ElderFriendly => "elder-friendly",
        CrisisEmergency => "crisis-emergency",
        OutdoorSunlight => "outdoor-sunlight",
        LowPowerOffline => "low-power-offline",
        PublicSharedDevice => "public-shared-device",
        MotorImpairment => "motor-impairment",
        VestibularDisorders => "vestibular-disorders",
        Default => "default",
    }
    default = Default
}

impl PresetId {
    /// Look up an identifier by its wire name.
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|preset| preset.as_str() == id)
    }
}

impl std::str::FromStr for PresetId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown preset '{s}'"))
    }
}

dimension_enum! {
    /// WCAG conformance level a preset targets
    WcagLevel {
        A => "A",
        AA => "AA",
        AAA => "AAA",
    }
    default = AA
}

impl std::str::FromStr for WcagLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown WCAG level '{s}', expected A, AA or AAA"))
    }
}

/// A named, curated overlay of dimension values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityPreset {
    pub id: PresetId,
    pub name: String,
    pub description: String,
    pub wcag_level: WcagLevel,
    /// Whether individual dimensions may be overridden after applying
    pub allow_overrides: bool,
    pub dimensions: PartialAccessibilityDimensions,
}

impl AccessibilityPreset {
    /// Case-insensitive substring match on name and description.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_and_unknown() {
        assert_eq!(PresetId::parse("crisis-emergency"), Some(PresetId::CrisisEmergency));
        assert_eq!(PresetId::parse("default"), Some(PresetId::Default));
        assert_eq!(PresetId::parse("Crisis-Emergency"), None);
        assert_eq!(PresetId::parse("no-such-preset"), None);
    }

    #[test]
    fn test_every_id_round_trips_through_parse() {
        assert_eq!(PresetId::ALL.len(), 13);
        for id in PresetId::ALL {
            assert_eq!(PresetId::parse(id.as_str()), Some(*id));
        }
    }

    #[test]
    fn test_wcag_level_from_str_ignores_case() {
        assert_eq!("aaa".parse::<WcagLevel>(), Ok(WcagLevel::AAA));
        assert_eq!("AA".parse::<WcagLevel>(), Ok(WcagLevel::AA));
        assert!("AAAA".parse::<WcagLevel>().is_err());
    }

    #[test]
    fn test_matches_name_or_description() {
        let preset = AccessibilityPreset {
            id: PresetId::Dyslexia,
            name: "Dyslexia".into(),
            description: "Increased spacing, shorter lines".into(),
            wcag_level: WcagLevel::AAA,
            allow_overrides: true,
            dimensions: PartialAccessibilityDimensions::default(),
        };
        assert!(preset.matches("DYSLEX"));
        assert!(preset.matches("shorter"));
        assert!(!preset.matches("contrast"));
    }
}
