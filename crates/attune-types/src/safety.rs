// ABOUTME: Registry of safety-critical dimension fields and their safe values
// ABOUTME: Lets the merger detect and police overlays that would disable a safeguard

use serde::{Deserialize, Serialize};

use crate::dimensions::AccessibilityDimensions;
use crate::partial::PartialAccessibilityDimensions;

/// A dimension field that must never be silently set to its unsafe value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SafetyCriticalField {
    /// Never use color alone to convey state
    ColorIndependentState,
    /// Never allow flashing content
    DisableFlashing,
    /// Always confirm destructive actions
    ConfirmDestructiveActions,
    /// No sudden context changes
    NoSurpriseChanges,
    /// Never rely on sound alone
    QuietMode,
}

impl SafetyCriticalField {
    pub const ALL: &'static [SafetyCriticalField] = &[
        SafetyCriticalField::ColorIndependentState,
        SafetyCriticalField::DisableFlashing,
        SafetyCriticalField::ConfirmDestructiveActions,
        SafetyCriticalField::NoSurpriseChanges,
        SafetyCriticalField::QuietMode,
    ];

    /// Dotted path of the field in the serialized dimension tree
    pub const fn path(self) -> &'static str {
        match self {
            Self::ColorIndependentState => "colorContrast.colorIndependentState",
            Self::DisableFlashing => "sensorySensitivity.disableFlashing",
            Self::ConfirmDestructiveActions => "cognitive.confirmDestructiveActions",
            Self::NoSurpriseChanges => "cognitive.noSurpriseChanges",
            Self::QuietMode => "situationalEnvironmental.quietMode",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ColorIndependentState => "Color-independent state",
            Self::DisableFlashing => "Disable flashing",
            Self::ConfirmDestructiveActions => "Confirm destructive actions",
            Self::NoSurpriseChanges => "No surprise changes",
            Self::QuietMode => "Quiet mode",
        }
    }

    /// Every safety-critical field is a flag whose safe value is `true`.
    pub const fn safe_value(self) -> bool {
        true
    }

    /// Value of this field in a complete dimension set
    pub fn resolved(self, dims: &AccessibilityDimensions) -> bool {
        match self {
            Self::ColorIndependentState => dims.color_contrast.color_independent_state,
            Self::DisableFlashing => dims.sensory_sensitivity.disable_flashing,
            Self::ConfirmDestructiveActions => dims.cognitive.confirm_destructive_actions,
            Self::NoSurpriseChanges => dims.cognitive.no_surprise_changes,
            Self::QuietMode => dims.situational_environmental.quiet_mode,
        }
    }

    /// Value an overlay requests for this field, if it specifies one
    pub fn requested(self, overlay: &PartialAccessibilityDimensions) -> Option<bool> {
        match self {
            Self::ColorIndependentState => overlay
                .color_contrast
                .and_then(|g| g.color_independent_state),
            Self::DisableFlashing => overlay.sensory_sensitivity.and_then(|g| g.disable_flashing),
            Self::ConfirmDestructiveActions => overlay
                .cognitive
                .and_then(|g| g.confirm_destructive_actions),
            Self::NoSurpriseChanges => overlay.cognitive.and_then(|g| g.no_surprise_changes),
            Self::QuietMode => overlay.situational_environmental.and_then(|g| g.quiet_mode),
        }
    }

    /// Remove this field from an overlay so it no longer specifies a value.
    pub fn clear(self, overlay: &mut PartialAccessibilityDimensions) {
        match self {
            Self::ColorIndependentState => {
                if let Some(group) = overlay.color_contrast.as_mut() {
                    group.color_independent_state = None;
                }
            }
            Self::DisableFlashing => {
                if let Some(group) = overlay.sensory_sensitivity.as_mut() {
                    group.disable_flashing = None;
                }
            }
            Self::ConfirmDestructiveActions => {
                if let Some(group) = overlay.cognitive.as_mut() {
                    group.confirm_destructive_actions = None;
                }
            }
            Self::NoSurpriseChanges => {
                if let Some(group) = overlay.cognitive.as_mut() {
                    group.no_surprise_changes = None;
                }
            }
            Self::QuietMode => {
                if let Some(group) = overlay.situational_environmental.as_mut() {
                    group.quiet_mode = None;
                }
            }
        }
    }
}

impl std::fmt::Display for SafetyCriticalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

impl PartialAccessibilityDimensions {
    /// Safety-critical fields this overlay explicitly sets to an unsafe value.
    pub fn safety_relaxations(&self) -> Vec<SafetyCriticalField> {
        SafetyCriticalField::ALL
            .iter()
            .copied()
            .filter(|field| {
                field
                    .requested(self)
                    .is_some_and(|value| value != field.safe_value())
            })
            .collect()
    }
}
