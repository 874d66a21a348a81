// ABOUTME: Owns one user's settings and exposes the validated mutation entry points
// ABOUTME: Every accepted mutation stamps lastModified; resolution goes through ThemeResolver

use attune_logging::{debug, info, warn};
use attune_types::{
    AccessibilityUserSettings, PartialAccessibilityDimensions, PresetId, SystemDefaults,
    ThemeTokens,
};
use chrono::Utc;

use crate::catalog::PresetCatalog;
use crate::error::OverrideRejected;
use crate::resolver::{Resolution, ThemeResolver};
use crate::system::{EnvSystemDefaults, SystemDefaultProvider};
use crate::validate::{ValidationResult, clamp, clamp_settings, validate};

/// What to do with an override whose numeric fields are out of range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvalidOverridePolicy {
    /// Refuse the whole override and leave settings untouched
    #[default]
    Reject,
    /// Pull out-of-range values to the nearest bound and accept
    Clamp,
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

pub struct AccessibilitySession<P: SystemDefaultProvider = EnvSystemDefaults> {
    settings: AccessibilityUserSettings,
    workspace_id: Option<String>,
    system: SystemDefaults,
    resolver: ThemeResolver<P>,
    catalog: PresetCatalog,
    policy: InvalidOverridePolicy,
}

impl<P: SystemDefaultProvider> AccessibilitySession<P> {
    /// Start a session from previously loaded settings, or fresh defaults.
    /// System defaults are detected once here. Stored overlays with
    /// out-of-range values are clamped so resolution never sees them.
    pub fn new(resolver: ThemeResolver<P>, settings: Option<AccessibilityUserSettings>) -> Self {
        let mut settings =
            settings.unwrap_or_else(|| AccessibilityUserSettings::new(now_millis()));
        let clamped = clamp_settings(&mut settings);
        if clamped > 0 {
            warn!(overlays = clamped, "Clamped out-of-range stored accessibility settings");
        }
        let system = resolver.provider().detect();

        Self {
            settings,
            workspace_id: None,
            system,
            resolver,
            catalog: PresetCatalog::new(),
            policy: InvalidOverridePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: InvalidOverridePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_workspace(mut self, workspace_id: Option<String>) -> Self {
        self.workspace_id = workspace_id;
        self
    }

    pub fn settings(&self) -> &AccessibilityUserSettings {
        &self.settings
    }

    pub fn workspace_id(&self) -> Option<&str> {
        self.workspace_id.as_deref()
    }

    pub fn set_workspace(&mut self, workspace_id: Option<String>) {
        self.workspace_id = workspace_id;
    }

    pub fn system_defaults(&self) -> &SystemDefaults {
        &self.system
    }

    /// Select a preset, or clear the selection with `None`.
    pub fn set_preset(&mut self, preset: Option<PresetId>) {
        info!(
            preset = preset.map(PresetId::as_str).unwrap_or("none"),
            "Accessibility preset selected"
        );
        self.settings.active_preset = preset.map(|id| id.as_str().to_string());
        self.touch();
    }

    pub fn is_preset_active(&self, id: PresetId) -> bool {
        self.settings.preset_id() == Some(id)
    }

    /// Validate `overlay` and fold it into the persisted user overrides.
    pub fn update_dimensions(
        &mut self,
        overlay: &PartialAccessibilityDimensions,
    ) -> Result<ValidationResult, OverrideRejected> {
        let (accepted, result) = self.admit(overlay)?;

        if let Some(preset) = self.settings.preset_id().map(|id| self.catalog.preset(id))
            && !preset.allow_overrides
        {
            info!(
                preset = preset.id.as_str(),
                "Override applied on top of a preset that does not invite overrides"
            );
        }

        self.settings.dimension_overrides.merge_from(&accepted);
        self.touch();
        debug!(
            fields = self.settings.dimension_overrides.specified_fields(),
            "Dimension overrides updated"
        );
        Ok(result)
    }

    /// Validate `overlay` and fold it into the session-only overrides.
    /// They are never persisted.
    pub fn set_temporary_overrides(
        &mut self,
        overlay: &PartialAccessibilityDimensions,
    ) -> Result<ValidationResult, OverrideRejected> {
        let (accepted, result) = self.admit(overlay)?;
        self.settings.temporary_overrides.merge_from(&accepted);
        self.touch();
        Ok(result)
    }

    pub fn clear_temporary_overrides(&mut self) {
        self.settings.temporary_overrides = PartialAccessibilityDimensions::default();
        self.touch();
    }

    /// Replace the overlay stored for `workspace_id`. An empty overlay removes it.
    pub fn set_workspace_overrides(
        &mut self,
        workspace_id: impl Into<String>,
        overlay: &PartialAccessibilityDimensions,
    ) -> Result<ValidationResult, OverrideRejected> {
        let (accepted, result) = self.admit(overlay)?;
        let workspace_id = workspace_id.into();

        if accepted.is_empty() {
            self.settings.workspace_settings.remove(&workspace_id);
        } else {
            self.settings.workspace_settings.insert(workspace_id, accepted);
        }
        self.touch();
        Ok(result)
    }

    /// Drop every preset, override and workspace overlay.
    pub fn reset_to_defaults(&mut self) {
        info!("Accessibility settings reset to defaults");
        self.settings = AccessibilityUserSettings::new(now_millis());
    }

    pub fn has_customizations(&self) -> bool {
        self.settings.has_customizations()
    }

    /// Adopt new system defaults and resolve once against them.
    pub fn on_system_preferences_changed(&mut self, system: SystemDefaults) -> ThemeTokens {
        debug!(?system, "System accessibility preferences changed");
        self.system = system;
        self.tokens()
    }

    /// Re-detect system defaults from the provider and resolve once.
    pub fn refresh_system_defaults(&mut self) -> ThemeTokens {
        let system = self.resolver.provider().detect();
        self.on_system_preferences_changed(system)
    }

    pub fn tokens(&self) -> ThemeTokens {
        self.resolver
            .resolve_with_system(&self.settings, self.workspace_id(), &self.system)
    }

    /// Tokens plus the account of which layers produced them.
    pub fn resolution(&self) -> Resolution {
        self.resolver
            .resolve_report(&self.settings, self.workspace_id(), &self.system)
    }

    /// The settings as they should be stored.
    pub fn persisted(&self) -> AccessibilityUserSettings {
        self.settings.without_temporary()
    }

    fn admit(
        &self,
        overlay: &PartialAccessibilityDimensions,
    ) -> Result<(PartialAccessibilityDimensions, ValidationResult), OverrideRejected> {
        let result = validate(overlay);
        for warning in &result.warnings {
            warn!(warning = warning.as_str(), "Accessibility override warning");
        }

        if result.valid {
            return Ok((*overlay, result));
        }

        match self.policy {
            InvalidOverridePolicy::Reject => {
                warn!(errors = ?result.errors, "Rejected invalid accessibility override");
                Err(OverrideRejected {
                    errors: result.errors,
                })
            }
            InvalidOverridePolicy::Clamp => {
                info!(errors = ?result.errors, "Clamped out-of-range accessibility override");
                Ok((clamp(overlay), result))
            }
        }
    }

    fn touch(&mut self) {
        self.settings.last_modified = now_millis();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::LayerSource;
    use crate::system::FixedSystemDefaults;
    use attune_types::{
        AccessibilityDimensions, ContrastLevel, FontScale, MotionPreference, PartialMotionAnimation,
        PartialTypographyReading, StyleToken,
    };
    use pretty_assertions::assert_eq;

    fn session() -> AccessibilitySession<FixedSystemDefaults> {
        AccessibilitySession::new(ThemeResolver::new(FixedSystemDefaults::default()), None)
    }

    fn typography(partial: PartialTypographyReading) -> PartialAccessibilityDimensions {
        PartialAccessibilityDimensions {
            typography_reading: Some(partial),
            ..Default::default()
        }
    }

    #[test]
    fn test_fresh_session_has_no_customizations() {
        let session = session();
        assert!(!session.has_customizations());
        assert!(session.settings().last_modified > 0);
        assert_eq!(
            session.tokens().active_dimensions,
            AccessibilityDimensions::default()
        );
    }

    #[test]
    fn test_set_preset() {
        let mut session = session();
        session.set_preset(Some(PresetId::LowVision));
        assert!(session.is_preset_active(PresetId::LowVision));
        assert!(!session.is_preset_active(PresetId::Dyslexia));
        assert!(session.has_customizations());

        session.set_preset(None);
        assert!(!session.has_customizations());
    }

    #[test]
    fn test_update_dimensions_merges_deeply() {
        let mut session = session();
        session
            .update_dimensions(&typography(PartialTypographyReading {
                font_scale: Some(FontScale::Large),
                ..Default::default()
            }))
            .unwrap();
        session
            .update_dimensions(&typography(PartialTypographyReading {
                letter_spacing: Some(0.1),
                ..Default::default()
            }))
            .unwrap();

        let typography = session.tokens().active_dimensions.typography_reading;
        assert_eq!(typography.font_scale, FontScale::Large);
        assert_eq!(typography.letter_spacing, 0.1);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let mut session = session();
        let before = session.settings().clone();

        let error = session
            .update_dimensions(&typography(PartialTypographyReading {
                letter_spacing: Some(0.5),
                ..Default::default()
            }))
            .unwrap_err();

        assert_eq!(
            error.errors,
            vec!["Letter spacing must be between 0 and 0.2".to_string()]
        );
        assert_eq!(session.settings(), &before);
    }

    #[test]
    fn test_clamp_policy_accepts_clamped_value() {
        let mut session = session().with_policy(InvalidOverridePolicy::Clamp);
        let result = session
            .update_dimensions(&typography(PartialTypographyReading {
                letter_spacing: Some(0.5),
                ..Default::default()
            }))
            .unwrap();

        assert!(!result.valid);
        assert_eq!(
            session.tokens().active_dimensions.typography_reading.letter_spacing,
            0.2
        );
    }

    #[test]
    fn test_temporary_overrides_are_not_persisted() {
        let mut session = session();
        session
            .set_temporary_overrides(&PartialAccessibilityDimensions {
                motion_animation: Some(PartialMotionAnimation {
                    motion_preference: Some(MotionPreference::None),
                    ..Default::default()
                }),
                ..Default::default()
            })
            .unwrap();

        assert!(session.tokens().behavioral_flags.disable_animations);
        assert!(session.persisted().temporary_overrides.is_empty());

        session.clear_temporary_overrides();
        assert!(!session.tokens().behavioral_flags.disable_animations);
    }

    #[test]
    fn test_workspace_overrides_apply_to_selected_workspace() {
        let mut session = session();
        let overlay = typography(PartialTypographyReading {
            font_scale: Some(FontScale::Maximum),
            ..Default::default()
        });
        session.set_workspace_overrides("field", &overlay).unwrap();
        assert_eq!(
            session.tokens().css_tokens.get(StyleToken::FontSizeScale),
            Some("1")
        );

        session.set_workspace(Some("field".into()));
        assert_eq!(
            session.tokens().css_tokens.get(StyleToken::FontSizeScale),
            Some("2")
        );

        session
            .set_workspace_overrides("field", &PartialAccessibilityDimensions::default())
            .unwrap();
        assert!(session.settings().workspace_settings.is_empty());
    }

    #[test]
    fn test_reset_to_defaults() {
        let mut session = session();
        session.set_preset(Some(PresetId::CrisisEmergency));
        session
            .update_dimensions(&typography(PartialTypographyReading {
                dyslexia_font: Some(true),
                ..Default::default()
            }))
            .unwrap();

        session.reset_to_defaults();
        assert!(!session.has_customizations());
        assert_eq!(session.settings().active_preset, None);
    }

    #[test]
    fn test_system_change_triggers_fresh_resolution() {
        let mut session = session();
        let tokens = session.on_system_preferences_changed(SystemDefaults {
            prefers_high_contrast: true,
            ..Default::default()
        });
        assert_eq!(
            tokens.active_dimensions.color_contrast.contrast_level,
            ContrastLevel::High
        );
        assert!(session.system_defaults().prefers_high_contrast);

        let tokens = session.refresh_system_defaults();
        assert_eq!(
            tokens.active_dimensions.color_contrast.contrast_level,
            ContrastLevel::Standard
        );
    }

    #[test]
    fn test_mutations_bump_last_modified() {
        let mut session = AccessibilitySession::new(
            ThemeResolver::new(FixedSystemDefaults::default()),
            Some(AccessibilityUserSettings::default()),
        );
        assert_eq!(session.settings().last_modified, 0);
        session.set_preset(Some(PresetId::Dyslexia));
        assert!(session.settings().last_modified > 0);
    }

    #[test]
    fn test_resolution_reports_applied_layers() {
        let mut session = session();
        session.set_preset(Some(PresetId::LowVision));
        let resolution = session.resolution();

        assert_eq!(resolution.tokens, session.tokens());
        assert_eq!(
            resolution.merge.applied_layers,
            vec![LayerSource::SystemDefault, LayerSource::Preset]
        );
    }

    #[test]
    fn test_temporary_overrides_accumulate() {
        let mut session = session();
        session
            .set_temporary_overrides(&PartialAccessibilityDimensions {
                motion_animation: Some(PartialMotionAnimation {
                    motion_preference: Some(MotionPreference::None),
                    ..Default::default()
                }),
                ..Default::default()
            })
            .unwrap();
        session
            .set_temporary_overrides(&typography(PartialTypographyReading {
                font_scale: Some(FontScale::Large),
                ..Default::default()
            }))
            .unwrap();

        let dims = session.tokens().active_dimensions;
        assert_eq!(dims.motion_animation.motion_preference, MotionPreference::None);
        assert_eq!(dims.typography_reading.font_scale, FontScale::Large);
    }

    #[test]
    fn test_stored_out_of_range_values_are_clamped() {
        let mut stored = AccessibilityUserSettings::default();
        stored.dimension_overrides = typography(PartialTypographyReading {
            letter_spacing: Some(5.0),
            ..Default::default()
        });

        let session =
            AccessibilitySession::new(ThemeResolver::new(FixedSystemDefaults::default()), Some(stored));
        let tokens = session.tokens();
        assert_eq!(tokens.active_dimensions.typography_reading.letter_spacing, 0.2);
        assert_eq!(tokens.css_tokens.get(StyleToken::LetterSpacing), Some("0.2em"));
    }
}
