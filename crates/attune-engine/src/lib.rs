// ABOUTME: Accessibility theme engine: preset catalog, layered merge, validation and token synthesis
// ABOUTME: Pure and synchronous; callers own persistence and apply the resulting tokens

pub mod catalog;
pub mod error;
pub mod merge;
pub mod persist;
mod presets;
pub mod resolver;
pub mod session;
pub mod synth;
pub mod system;
pub mod validate;


pub use catalog::{CATALOG_VERSION, PresetCatalog};
pub use error::{OverrideRejected, Result, SettingsError};
pub use merge::{DimensionMerger, LayerSource, MergeReport, SafetyRelaxation, merge_dimensions};
pub use persist::{decode_settings, encode_settings, load_settings, parse_settings};
pub use resolver::{Resolution, ResolverOptions, ThemeResolver, resolve_theme};
pub use session::{AccessibilitySession, InvalidOverridePolicy};
pub use synth::{behavioral_flags, component_props, style_tokens, synthesize};
pub use system::{
    EnvSystemDefaults, FixedSystemDefaults, SystemDefaultProvider, system_aware_defaults,
};
pub use validate::{
    DimensionConstraint, LayerValidation, NumericField, ValidationResult, clamp, clamp_settings,
    validate, validate_settings,
};

// Data types callers need alongside the engine
pub use attune_types;
