// ABOUTME: Persisted and session-scoped user accessibility settings
// ABOUTME: JSON shape uses camelCase names and carries a schema version for compatibility checks

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::partial::PartialAccessibilityDimensions;
use crate::preset::PresetId;

/// Schema version written into every persisted settings value
pub const SETTINGS_VERSION: u32 = 1;

/// One user's accessibility settings snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityUserSettings {
    /// Selected preset. Kept as a string so unknown ids survive a round trip
    /// and resolve to "no preset" instead of failing to load.
    #[serde(default)]
    pub active_preset: Option<String>,

    #[serde(default)]
    pub dimension_overrides: PartialAccessibilityDimensions,

    /// Session-only overrides, stripped before persisting
    #[serde(default)]
    pub temporary_overrides: PartialAccessibilityDimensions,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub workspace_settings: BTreeMap<String, PartialAccessibilityDimensions>,

    #[serde(default)]
    pub sync_settings: bool,

    /// Epoch milliseconds of the last mutation
    #[serde(default)]
    pub last_modified: i64,

    pub version: u32,
}

impl Default for AccessibilityUserSettings {
    fn default() -> Self {
        Self {
            active_preset: None,
            dimension_overrides: PartialAccessibilityDimensions::default(),
            temporary_overrides: PartialAccessibilityDimensions::default(),
            workspace_settings: BTreeMap::new(),
            sync_settings: false,
            last_modified: 0,
            version: SETTINGS_VERSION,
        }
    }
}

impl AccessibilityUserSettings {
    /// Default settings stamped with a modification time.
    pub fn new(last_modified: i64) -> Self {
        Self {
            last_modified,
            ..Self::default()
        }
    }

    /// The active preset, if set and known.
    pub fn preset_id(&self) -> Option<PresetId> {
        self.active_preset.as_deref().and_then(PresetId::parse)
    }

    /// Workspace overlay for `workspace_id`, if one is stored.
    pub fn workspace_overlay(&self, workspace_id: &str) -> Option<&PartialAccessibilityDimensions> {
        self.workspace_settings.get(workspace_id)
    }

    /// True when a preset is selected or any override is specified.
    pub fn has_customizations(&self) -> bool {
        self.active_preset.is_some()
            || !self.dimension_overrides.is_empty()
            || !self.temporary_overrides.is_empty()
    }

    /// Structural equality that ignores the modification timestamp.
    pub fn same_content(&self, other: &Self) -> bool {
        self.active_preset == other.active_preset
            && self.dimension_overrides == other.dimension_overrides
            && self.temporary_overrides == other.temporary_overrides
            && self.workspace_settings == other.workspace_settings
            && self.sync_settings == other.sync_settings
            && self.version == other.version
    }

    /// Copy suitable for persisting: temporary overrides removed.
    pub fn without_temporary(&self) -> Self {
        Self {
            temporary_overrides: PartialAccessibilityDimensions::default(),
            ..self.clone()
        }
    }
}
