// ABOUTME: JSON codec for persisted user settings with schema version checking
// ABOUTME: Loading never fails hard; bad or outdated data reads as "no settings"

use attune_logging::warn;
use attune_types::{AccessibilityUserSettings, SETTINGS_VERSION};
use serde_json::Value;

use crate::error::{Result, SettingsError};
use crate::validate::validate_settings;

/// Decode persisted settings and check every overlay against its numeric
/// ranges. Out-of-range values are an error; nothing is clamped here.
pub fn decode_settings(json: &str) -> Result<AccessibilityUserSettings> {
    let settings = parse_settings(json)?;

    let errors: Vec<String> = validate_settings(&settings)
        .into_iter()
        .flat_map(|layer| {
            let name = layer.layer;
            layer
                .result
                .errors
                .into_iter()
                .map(move |error| format!("{name}: {error}"))
        })
        .collect();
    if !errors.is_empty() {
        return Err(SettingsError::OutOfRange { errors });
    }

    Ok(settings)
}

/// Decode the shape of persisted settings without range checks, checking
/// the schema version first.
pub fn parse_settings(json: &str) -> Result<AccessibilityUserSettings> {
    let value: Value = serde_json::from_str(json)?;

    let found = value
        .get("version")
        .and_then(Value::as_u64)
        .ok_or(SettingsError::Unversioned)?;
    if found != u64::from(SETTINGS_VERSION) {
        return Err(SettingsError::version_mismatch(found, SETTINGS_VERSION));
    }

    Ok(serde_json::from_value(value)?)
}

/// Decode persisted settings, treating any failure as absent.
pub fn load_settings(json: &str) -> Option<AccessibilityUserSettings> {
    match decode_settings(json) {
        Ok(settings) => Some(settings),
        Err(e) => {
            warn!(error = %e, "Discarding stored accessibility settings");
            None
        }
    }
}

/// Encode settings for storage. Temporary overrides are session-only and
/// are never written.
pub fn encode_settings(settings: &AccessibilityUserSettings) -> serde_json::Result<String> {
    serde_json::to_string(&settings.without_temporary())
}
