// ABOUTME: Layered merge of system defaults, preset, workspace, user and temporary overlays
// ABOUTME: Polices safety-critical fields so only explicit preset or user layers can relax them

use attune_logging::{debug, warn};
use attune_types::{
    AccessibilityDimensions, AccessibilityUserSettings, PartialAccessibilityDimensions,
    SafetyCriticalField, SystemDefaults,
};
use serde::Serialize;

use crate::catalog::PresetCatalog;
use crate::system::system_aware_defaults;

/// Where an overlay comes from. Ordered by increasing priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayerSource {
    SystemDefault,
    Preset,
    Workspace,
    UserOverride,
    TemporaryOverride,
}

impl LayerSource {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SystemDefault => "system-default",
            Self::Preset => "preset",
            Self::Workspace => "workspace",
            Self::UserOverride => "user-override",
            Self::TemporaryOverride => "temporary-override",
        }
    }

    /// Whether this layer may set a safety-critical field to its unsafe value.
    ///
    /// Presets state their own values explicitly and user layers are the
    /// person's own choice. Workspace overlays are shared configuration and
    /// may only tighten safeguards.
    pub const fn may_relax_safety(self) -> bool {
        matches!(
            self,
            Self::Preset | Self::UserOverride | Self::TemporaryOverride
        )
    }
}

impl std::fmt::Display for LayerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A safety-critical field that an overlay tried to set to its unsafe value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyRelaxation {
    pub field: SafetyCriticalField,
    pub source: LayerSource,
}

/// Merge result plus an account of how it was reached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeReport {
    pub dimensions: AccessibilityDimensions,
    /// Layers that contributed, lowest priority first
    pub applied_layers: Vec<LayerSource>,
    /// Relaxations that were applied
    pub relaxed_safety: Vec<SafetyRelaxation>,
    /// Relaxations that were dropped because their layer may not relax safety
    pub blocked_safety: Vec<SafetyRelaxation>,
}

/// Combines the layered overlays of a settings snapshot into complete dimensions.
#[derive(Debug, Clone, Copy, Default)]
pub struct DimensionMerger {
    catalog: PresetCatalog,
}

impl DimensionMerger {
    pub fn new(catalog: PresetCatalog) -> Self {
        Self { catalog }
    }

    /// Resolve complete dimensions for `settings`.
    pub fn merge(
        &self,
        settings: &AccessibilityUserSettings,
        workspace_id: Option<&str>,
        system: &SystemDefaults,
    ) -> AccessibilityDimensions {
        self.merge_with_report(settings, workspace_id, system).dimensions
    }

    pub fn merge_with_report(
        &self,
        settings: &AccessibilityUserSettings,
        workspace_id: Option<&str>,
        system: &SystemDefaults,
    ) -> MergeReport {
        let mut report = MergeReport {
            dimensions: system_aware_defaults(system),
            applied_layers: vec![LayerSource::SystemDefault],
            relaxed_safety: Vec::new(),
            blocked_safety: Vec::new(),
        };

        for (source, overlay) in self.overlays(settings, workspace_id) {
            let overlay = police_safety(source, overlay, &mut report);
            overlay.apply_to(&mut report.dimensions);
            report.applied_layers.push(source);
        }

        debug!(
            layers = ?report.applied_layers,
            relaxed = report.relaxed_safety.len(),
            blocked = report.blocked_safety.len(),
            "Merged accessibility dimensions"
        );

        report
    }

    /// The overlays present in `settings`, lowest priority first.
    pub fn overlays<'a>(
        &self,
        settings: &'a AccessibilityUserSettings,
        workspace_id: Option<&str>,
    ) -> Vec<(LayerSource, &'a PartialAccessibilityDimensions)> {
        let mut overlays = Vec::with_capacity(4);

        if let Some(preset) = settings
            .active_preset
            .as_deref()
            .and_then(|id| self.catalog.get(id))
        {
            overlays.push((LayerSource::Preset, &preset.dimensions));
        }

        if let Some(workspace_id) = workspace_id {
            match settings.workspace_overlay(workspace_id) {
                Some(overlay) => overlays.push((LayerSource::Workspace, overlay)),
                None => debug!(workspace = workspace_id, "No workspace overlay stored"),
            }
        }

        if !settings.dimension_overrides.is_empty() {
            overlays.push((LayerSource::UserOverride, &settings.dimension_overrides));
        }

        if !settings.temporary_overrides.is_empty() {
            overlays.push((
                LayerSource::TemporaryOverride,
                &settings.temporary_overrides,
            ));
        }

        overlays
    }
}

/// Return the overlay to apply for `source`, with disallowed safety
/// relaxations removed and every relaxation recorded in `report`.
fn police_safety(
    source: LayerSource,
    overlay: &PartialAccessibilityDimensions,
    report: &mut MergeReport,
) -> PartialAccessibilityDimensions {
    let mut effective = *overlay;

    for field in overlay.safety_relaxations() {
        let relaxation = SafetyRelaxation { field, source };
        if source.may_relax_safety() {
            warn!(
                field = field.path(),
                source = source.as_str(),
                "Safety-critical setting relaxed"
            );
            report.relaxed_safety.push(relaxation);
        } else {
            warn!(
                field = field.path(),
                source = source.as_str(),
                "Ignoring safety-critical relaxation from layer that may not relax it"
            );
            field.clear(&mut effective);
            report.blocked_safety.push(relaxation);
        }
    }

    effective
}

/// Merge with the built-in catalog.
pub fn merge_dimensions(
    settings: &AccessibilityUserSettings,
    workspace_id: Option<&str>,
    system: &SystemDefaults,
) -> AccessibilityDimensions {
    DimensionMerger::default().merge(settings, workspace_id, system)
}
