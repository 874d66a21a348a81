// ABOUTME: Sparse overlay over the full dimension tree, used for presets and overrides
// ABOUTME: Unspecified groups and fields leave the underlying value untouched when applied

use serde::{Deserialize, Serialize};

use crate::dimensions::AccessibilityDimensions;
pub use crate::dimensions::{
    PartialCognitive, PartialColorContrast, PartialFocusNavigationInput, PartialMotionAnimation,
    PartialSensorySensitivity, PartialSituationalEnvironmental, PartialTypographyReading,
};

/// Partial dimensions. Any group may be absent, and within a present group
/// any field may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialAccessibilityDimensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_contrast: Option<PartialColorContrast>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography_reading: Option<PartialTypographyReading>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motion_animation: Option<PartialMotionAnimation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_navigation_input: Option<PartialFocusNavigationInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cognitive: Option<PartialCognitive>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensory_sensitivity: Option<PartialSensorySensitivity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub situational_environmental: Option<PartialSituationalEnvironmental>,
}

/// Fold one optional group overlay into another, field by field.
fn merge_group<T: Copy + Default>(target: &mut Option<T>, other: Option<T>, merge: impl Fn(&mut T, &T)) {
    if let Some(other) = other {
        let group = target.get_or_insert_with(T::default);
        merge(group, &other);
    }
}

impl PartialAccessibilityDimensions {
    /// Overwrite every field of `target` that this overlay specifies.
    pub fn apply_to(&self, target: &mut AccessibilityDimensions) {
        if let Some(group) = &self.color_contrast {
            group.apply_to(&mut target.color_contrast);
        }
        if let Some(group) = &self.typography_reading {
            group.apply_to(&mut target.typography_reading);
        }
        if let Some(group) = &self.motion_animation {
            group.apply_to(&mut target.motion_animation);
        }
        if let Some(group) = &self.focus_navigation_input {
            group.apply_to(&mut target.focus_navigation_input);
        }
        if let Some(group) = &self.cognitive {
            group.apply_to(&mut target.cognitive);
        }
        if let Some(group) = &self.sensory_sensitivity {
            group.apply_to(&mut target.sensory_sensitivity);
        }
        if let Some(group) = &self.situational_environmental {
            group.apply_to(&mut target.situational_environmental);
        }
    }

    /// Return a copy of `base` with this overlay applied.
    pub fn applied_to(&self, base: &AccessibilityDimensions) -> AccessibilityDimensions {
        let mut result = *base;
        self.apply_to(&mut result);
        result
    }

    /// Deep-merge `other` into this overlay. Fields `other` specifies win,
    /// sibling fields already present here are kept.
    pub fn merge_from(&mut self, other: &Self) {
        merge_group(&mut self.color_contrast, other.color_contrast, PartialColorContrast::merge_from);
        merge_group(
            &mut self.typography_reading,
            other.typography_reading,
            PartialTypographyReading::merge_from,
        );
        merge_group(
            &mut self.motion_animation,
            other.motion_animation,
            PartialMotionAnimation::merge_from,
        );
        merge_group(
            &mut self.focus_navigation_input,
            other.focus_navigation_input,
            PartialFocusNavigationInput::merge_from,
        );
        merge_group(&mut self.cognitive, other.cognitive, PartialCognitive::merge_from);
        merge_group(
            &mut self.sensory_sensitivity,
            other.sensory_sensitivity,
            PartialSensorySensitivity::merge_from,
        );
        merge_group(
            &mut self.situational_environmental,
            other.situational_environmental,
            PartialSituationalEnvironmental::merge_from,
        );
    }

    /// True when no field in any group is specified.
    pub fn is_empty(&self) -> bool {
        self.specified_fields() == 0
    }

    /// Total number of specified fields across all groups.
    pub fn specified_fields(&self) -> usize {
        self.color_contrast.map_or(0, |g| g.specified_fields())
            + self.typography_reading.map_or(0, |g| g.specified_fields())
            + self.motion_animation.map_or(0, |g| g.specified_fields())
            + self.focus_navigation_input.map_or(0, |g| g.specified_fields())
            + self.cognitive.map_or(0, |g| g.specified_fields())
            + self.sensory_sensitivity.map_or(0, |g| g.specified_fields())
            + self.situational_environmental.map_or(0, |g| g.specified_fields())
    }
}

impl From<AccessibilityDimensions> for PartialAccessibilityDimensions {
    fn from(full: AccessibilityDimensions) -> Self {
        Self {
            color_contrast: Some(full.color_contrast.into()),
            typography_reading: Some(full.typography_reading.into()),
            motion_animation: Some(full.motion_animation.into()),
            focus_navigation_input: Some(full.focus_navigation_input.into()),
            cognitive: Some(full.cognitive.into()),
            sensory_sensitivity: Some(full.sensory_sensitivity.into()),
            situational_environmental: Some(full.situational_environmental.into()),
        }
    }
}
