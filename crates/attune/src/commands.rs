// ABOUTME: Subcommand implementations writing to any io::Write sink
// ABOUTME: Each returns the process exit code; I/O and parse failures propagate as errors

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use attune_engine::{
    AccessibilitySession, LayerValidation, PresetCatalog, SystemDefaultProvider, ThemeResolver,
    load_settings, parse_settings, validate, validate_settings,
};
use attune_logging::{info, instrument, timed, warn};
use attune_types::{AccessibilityPreset, PartialAccessibilityDimensions, PresetId};
use serde::Serialize;
use serde_json::Value;

use crate::cli::{PresetsArgs, ResolveArgs};
use crate::config::Config;

fn write_json(out: &mut impl Write, value: &impl Serialize, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

fn read_settings(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Resolve tokens for a stored settings file, or defaults.
#[instrument(skip(config, out))]
pub fn resolve(config: &Config, args: &ResolveArgs, out: &mut impl Write) -> Result<ExitCode> {
    let settings = args.settings_file.as_deref().and_then(|path| {
        match read_settings(path) {
            Ok(json) => load_settings(&json),
            Err(e) => {
                warn!(error = %e, "Using default accessibility settings");
                None
            }
        }
    });

    let resolver =
        ThemeResolver::with_options(config.system_provider(), config.resolver.options());
    let workspace = args
        .workspace
        .clone()
        .or_else(|| config.resolver.default_workspace.clone());
    let mut session = AccessibilitySession::new(resolver, settings)
        .with_policy(config.resolver.policy())
        .with_workspace(workspace);

    if let Some(preset) = args.preset {
        session.set_preset(Some(preset));
    }

    if args.report {
        write_json(out, &session.resolution(), args.pretty)?;
    } else {
        write_json(out, &session.tokens(), args.pretty)?;
    }
    Ok(ExitCode::SUCCESS)
}

/// List catalog presets, optionally filtered by WCAG level and search text.
pub fn presets(args: &PresetsArgs, out: &mut impl Write) -> Result<ExitCode> {
    let catalog = PresetCatalog::new();
    let mut presets: Vec<&AccessibilityPreset> = match &args.search {
        Some(query) => catalog.search(query),
        None => catalog.list().iter().collect(),
    };
    if let Some(level) = args.level {
        presets.retain(|preset| preset.wcag_level == level);
    }

    if args.json {
        write_json(out, &presets, true)?;
        return Ok(ExitCode::SUCCESS);
    }

    for preset in presets {
        writeln!(
            out,
            "{:<24} {:<4} {}",
            preset.id.as_str(),
            preset.wcag_level.as_str(),
            preset.name
        )?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Check a dimensions overlay, or every overlay of a stored settings file
/// (recognised by its `version` field). Exit code 1 when anything is invalid
/// or the file cannot be decoded.
pub fn validate_file(path: &Path, out: &mut impl Write) -> Result<ExitCode> {
    let json = read_settings(path)?;
    let value: Value = match serde_json::from_str(&json) {
        Ok(value) => value,
        Err(e) => {
            writeln!(out, "{}: {e}", path.display())?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let checks = if value.get("version").is_some() {
        let settings = match parse_settings(&json) {
            Ok(settings) => settings,
            Err(e) => {
                writeln!(out, "{}: {e}", path.display())?;
                return Ok(ExitCode::FAILURE);
            }
        };
        if let Some(id) = settings.active_preset.as_deref()
            && PresetId::parse(id).is_none()
        {
            writeln!(out, "activePreset: unknown preset '{id}' (ignored when resolving)")?;
        }
        timed!("validate_settings", { validate_settings(&settings) })
    } else {
        let overlay: PartialAccessibilityDimensions = match serde_json::from_value(value) {
            Ok(overlay) => overlay,
            Err(e) => {
                writeln!(out, "{}: {e}", path.display())?;
                return Ok(ExitCode::FAILURE);
            }
        };
        vec![LayerValidation {
            layer: "dimensions".into(),
            result: validate(&overlay),
        }]
    };

    let mut valid = true;
    for check in &checks {
        valid &= check.result.valid;
        let status = if check.result.valid { "ok" } else { "invalid" };
        writeln!(out, "{}: {status}", check.layer)?;
        for error in &check.result.errors {
            writeln!(out, "  error: {error}")?;
        }
        for warning in &check.result.warnings {
            writeln!(out, "  warning: {warning}")?;
        }
    }

    info!(file = %path.display(), valid, layers = checks.len(), "Validated accessibility file");
    Ok(if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Print the system defaults the resolver would see.
pub fn system(config: &Config, out: &mut impl Write) -> Result<ExitCode> {
    let detected = config.system_provider().detect();
    write_json(out, &detected, true)?;
    Ok(ExitCode::SUCCESS)
}
