// ABOUTME: Range checks for numeric dimension fields and advisory warnings for odd combinations
// ABOUTME: Only fields present in the overlay are inspected; the input is never modified

use attune_types::{
    AccessibilityUserSettings, ColorBlindMode, ColorScheme, FontScale, MotionPreference,
    PartialAccessibilityDimensions,
};
use serde::Serialize;

/// Declared bounds of a numeric dimension field. `step` is the UI increment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionConstraint {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl DimensionConstraint {
    /// NaN is never within range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }
}

/// The numeric fields of the dimension tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    LetterSpacing,
    WordSpacing,
    MaxAnimationDuration,
    MaxAlertsPerMinute,
}

impl NumericField {
    pub const ALL: &'static [NumericField] = &[
        NumericField::LetterSpacing,
        NumericField::WordSpacing,
        NumericField::MaxAnimationDuration,
        NumericField::MaxAlertsPerMinute,
    ];

    pub const fn constraint(self) -> DimensionConstraint {
        match self {
            Self::LetterSpacing => DimensionConstraint {
                min: 0.0,
                max: 0.2,
                step: 0.01,
            },
            Self::WordSpacing => DimensionConstraint {
                min: 0.0,
                max: 0.5,
                step: 0.01,
            },
            Self::MaxAnimationDuration => DimensionConstraint {
                min: 0.0,
                max: 5000.0,
                step: 50.0,
            },
            Self::MaxAlertsPerMinute => DimensionConstraint {
                min: 1.0,
                max: 60.0,
                step: 1.0,
            },
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::LetterSpacing => "Letter spacing",
            Self::WordSpacing => "Word spacing",
            Self::MaxAnimationDuration => "Max animation duration",
            Self::MaxAlertsPerMinute => "Max alerts per minute",
        }
    }

    const fn unit(self) -> &'static str {
        match self {
            Self::MaxAnimationDuration => "ms",
            _ => "",
        }
    }

    /// The value an overlay specifies for this field.
    pub fn read(self, overlay: &PartialAccessibilityDimensions) -> Option<f64> {
        match self {
            Self::LetterSpacing => overlay.typography_reading.and_then(|g| g.letter_spacing),
            Self::WordSpacing => overlay.typography_reading.and_then(|g| g.word_spacing),
            Self::MaxAnimationDuration => overlay
                .motion_animation
                .and_then(|g| g.max_animation_duration)
                .map(f64::from),
            Self::MaxAlertsPerMinute => overlay
                .sensory_sensitivity
                .and_then(|g| g.max_alerts_per_minute)
                .map(f64::from),
        }
    }

    /// Clamp this field in place, if the overlay specifies it.
    fn clamp_in(self, overlay: &mut PartialAccessibilityDimensions) {
        let constraint = self.constraint();
        match self {
            Self::LetterSpacing => {
                if let Some(group) = overlay.typography_reading.as_mut() {
                    group.letter_spacing = group.letter_spacing.map(|v| constraint.clamp(v));
                }
            }
            Self::WordSpacing => {
                if let Some(group) = overlay.typography_reading.as_mut() {
                    group.word_spacing = group.word_spacing.map(|v| constraint.clamp(v));
                }
            }
            Self::MaxAnimationDuration => {
                if let Some(group) = overlay.motion_animation.as_mut() {
                    group.max_animation_duration = group
                        .max_animation_duration
                        .map(|v| v.clamp(constraint.min as i32, constraint.max as i32));
                }
            }
            Self::MaxAlertsPerMinute => {
                if let Some(group) = overlay.sensory_sensitivity.as_mut() {
                    group.max_alerts_per_minute = group
                        .max_alerts_per_minute
                        .map(|v| v.clamp(constraint.min as i32, constraint.max as i32));
                }
            }
        }
    }

    pub fn range_message(self) -> String {
        let DimensionConstraint { min, max, .. } = self.constraint();
        let unit = self.unit();
        format!("{} must be between {min}{unit} and {max}{unit}", self.label())
    }
}

impl std::fmt::Display for NumericField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Check an overlay before it is accepted into settings.
pub fn validate(overlay: &PartialAccessibilityDimensions) -> ValidationResult {
    let errors: Vec<String> = NumericField::ALL
        .iter()
        .filter(|field| {
            field
                .read(overlay)
                .is_some_and(|value| !field.constraint().contains(value))
        })
        .map(|field| field.range_message())
        .collect();

    ValidationResult {
        valid: errors.is_empty(),
        errors,
        warnings: warnings(overlay),
    }
}

/// Copy of `overlay` with every numeric field pulled into range.
pub fn clamp(overlay: &PartialAccessibilityDimensions) -> PartialAccessibilityDimensions {
    let mut clamped = *overlay;
    for field in NumericField::ALL {
        field.clamp_in(&mut clamped);
    }
    clamped
}

/// Validation outcome for one overlay of a settings document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayerValidation {
    /// JSON path of the overlay, e.g. `workspaceSettings.ops`
    pub layer: String,
    pub result: ValidationResult,
}

/// Validate every overlay a settings document carries: user overrides,
/// temporary overrides and each workspace overlay, in that order.
pub fn validate_settings(settings: &AccessibilityUserSettings) -> Vec<LayerValidation> {
    let mut layers = vec![
        LayerValidation {
            layer: "dimensionOverrides".into(),
            result: validate(&settings.dimension_overrides),
        },
        LayerValidation {
            layer: "temporaryOverrides".into(),
            result: validate(&settings.temporary_overrides),
        },
    ];
    layers.extend(
        settings
            .workspace_settings
            .iter()
            .map(|(id, overlay)| LayerValidation {
                layer: format!("workspaceSettings.{id}"),
                result: validate(overlay),
            }),
    );
    layers
}

/// Pull every overlay of `settings` into range. Returns how many overlays changed.
pub fn clamp_settings(settings: &mut AccessibilityUserSettings) -> usize {
    let overlays = [&mut settings.dimension_overrides, &mut settings.temporary_overrides]
        .into_iter()
        .chain(settings.workspace_settings.values_mut());

    let mut changed = 0;
    for overlay in overlays {
        let clamped = clamp(overlay);
        if clamped != *overlay {
            *overlay = clamped;
            changed += 1;
        }
    }
    changed
}

fn warnings(overlay: &PartialAccessibilityDimensions) -> Vec<String> {
    let mut warnings = Vec::new();

    let motion = overlay.motion_animation.unwrap_or_default();
    let color = overlay.color_contrast.unwrap_or_default();
    let focus = overlay.focus_navigation_input.unwrap_or_default();

    if motion.motion_preference == Some(MotionPreference::Full)
        && motion.instant_transitions == Some(true)
    {
        warnings.push("Full motion with instant transitions may be confusing".to_string());
    }

    if color.color_scheme == Some(ColorScheme::Monochrome)
        && color
            .color_blind_mode
            .is_some_and(|mode| mode != ColorBlindMode::None)
    {
        warnings.push("Color-blind mode has no effect with a monochrome color scheme".to_string());
    }

    if overlay
        .situational_environmental
        .and_then(|g| g.emergency_mode)
        == Some(true)
        && overlay.typography_reading.and_then(|g| g.font_scale) == Some(FontScale::Normal)
    {
        warnings.push("Emergency mode with normal font scale may be hard to read".to_string());
    }

    if focus.screen_reader_optimized == Some(true) && focus.keyboard_first_navigation == Some(false)
    {
        warnings.push(
            "Screen reader optimization without keyboard-first navigation may be hard to use"
                .to_string(),
        );
    }

    if overlay
        .sensory_sensitivity
        .and_then(|g| g.low_stimulation_mode)
        == Some(true)
        && motion.motion_preference == Some(MotionPreference::Full)
    {
        warnings.push("Low stimulation mode with full motion may be overwhelming".to_string());
    }

    for field in overlay.safety_relaxations() {
        warnings.push(format!("{} is a safety safeguard and is being disabled", field.label()));
    }

    warnings
}
