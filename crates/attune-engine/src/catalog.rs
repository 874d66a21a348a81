// ABOUTME: Static registry of curated presets, looked up by identifier
// ABOUTME: Unknown identifiers are "not found", never an error

use attune_logging::debug;
use attune_types::{AccessibilityPreset, PresetId, WcagLevel};
use once_cell::sync::Lazy;

use crate::presets;

pub use crate::presets::CATALOG_VERSION;

/// Presets in `PresetId::ALL` order, so a preset's position equals its discriminant.
static PRESETS: Lazy<Vec<AccessibilityPreset>> =
    Lazy::new(|| PresetId::ALL.iter().copied().map(presets::build).collect());

/// Read-only view over the built-in presets.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresetCatalog;

impl PresetCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Look up a preset by its wire identifier.
    pub fn get(&self, id: &str) -> Option<&'static AccessibilityPreset> {
        match PresetId::parse(id) {
            Some(id) => Some(self.preset(id)),
            None => {
                debug!(preset = id, "Unknown preset id, treating as no preset");
                None
            }
        }
    }

    /// The preset for a known identifier.
    pub fn preset(&self, id: PresetId) -> &'static AccessibilityPreset {
        &PRESETS[id as usize]
    }

    pub fn list(&self) -> &'static [AccessibilityPreset] {
        &PRESETS
    }

    pub fn ids(&self) -> impl Iterator<Item = PresetId> {
        PresetId::ALL.iter().copied()
    }

    pub fn by_wcag_level(&self, level: WcagLevel) -> Vec<&'static AccessibilityPreset> {
        PRESETS
            .iter()
            .filter(|preset| preset.wcag_level == level)
            .collect()
    }

    /// Case-insensitive search over preset names and descriptions.
    pub fn search(&self, query: &str) -> Vec<&'static AccessibilityPreset> {
        PRESETS.iter().filter(|preset| preset.matches(query)).collect()
    }

    pub fn version(&self) -> u32 {
        CATALOG_VERSION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attune_types::{ContrastLevel, MotionPreference, SafetyCriticalField};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_positions_match_identifiers() {
        let catalog = PresetCatalog::new();
        assert_eq!(catalog.list().len(), PresetId::ALL.len());
        for id in catalog.ids() {
            assert_eq!(catalog.preset(id).id, id);
        }
    }

    #[test]
    fn test_get_known_and_unknown() {
        let catalog = PresetCatalog::new();
        assert_eq!(
            catalog.get("photosensitive").map(|p| p.id),
            Some(PresetId::Photosensitive)
        );
        assert!(catalog.get("retro-terminal").is_none());
        assert!(catalog.get("").is_none());
    }

    #[test]
    fn test_default_preset_is_empty() {
        let preset = PresetCatalog::new().preset(PresetId::Default);
        assert!(preset.dimensions.is_empty());
        assert!(preset.allow_overrides);
    }

    #[test]
    fn test_crisis_preset_content() {
        let preset = PresetCatalog::new().preset(PresetId::CrisisEmergency);
        assert!(!preset.allow_overrides);

        let color = preset.dimensions.color_contrast.unwrap();
        assert_eq!(color.contrast_level, Some(ContrastLevel::UltraHigh));
        let motion = preset.dimensions.motion_animation.unwrap();
        assert_eq!(motion.motion_preference, Some(MotionPreference::None));
        assert_eq!(
            preset.dimensions.safety_relaxations(),
            vec![SafetyCriticalField::ConfirmDestructiveActions]
        );
    }

    #[test]
    fn test_only_crisis_relaxes_safety() {
        let catalog = PresetCatalog::new();
        let relaxing: Vec<PresetId> = catalog
            .list()
            .iter()
            .filter(|preset| !preset.dimensions.safety_relaxations().is_empty())
            .map(|preset| preset.id)
            .collect();
        assert_eq!(relaxing, vec![PresetId::CrisisEmergency]);
    }

    #[test]
    fn test_by_wcag_level() {
        let catalog = PresetCatalog::new();
        let aa: Vec<PresetId> = catalog
            .by_wcag_level(WcagLevel::AA)
            .iter()
            .map(|preset| preset.id)
            .collect();
        assert_eq!(
            aa,
            vec![
                PresetId::LowPowerOffline,
                PresetId::PublicSharedDevice,
                PresetId::Default
            ]
        );
        assert!(catalog.by_wcag_level(WcagLevel::A).is_empty());
        assert_eq!(catalog.by_wcag_level(WcagLevel::AAA).len(), 10);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = PresetCatalog::new();
        let hits: Vec<PresetId> = catalog.search("PARALLAX").iter().map(|p| p.id).collect();
        assert_eq!(hits, vec![PresetId::VestibularDisorders]);

        let hits: Vec<PresetId> = catalog.search("touch targets").iter().map(|p| p.id).collect();
        assert_eq!(hits, vec![PresetId::OutdoorSunlight, PresetId::MotorImpairment]);
    }
}
