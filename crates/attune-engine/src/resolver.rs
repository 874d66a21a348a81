// ABOUTME: Theme resolution facade composing merge and token synthesis
// ABOUTME: Optionally memoizes the last result on structural equality of its inputs

use std::time::Duration;

use attune_logging::{PerfTimer, debug, trace};
use attune_types::{AccessibilityUserSettings, SystemDefaults, ThemeTokens};
use parking_lot::Mutex;
use serde::Serialize;

use crate::merge::{DimensionMerger, MergeReport};
use crate::synth::synthesize;
use crate::system::{EnvSystemDefaults, SystemDefaultProvider};

/// Resolutions slower than this log a warning. One frame at 60 Hz.
pub const DEFAULT_SLOW_RESOLVE: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolverOptions {
    pub memoize: bool,
    pub slow_resolve_warn: Duration,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            memoize: true,
            slow_resolve_warn: DEFAULT_SLOW_RESOLVE,
        }
    }
}

/// Tokens together with the merge account that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub tokens: ThemeTokens,
    pub merge: MergeReport,
}

struct MemoEntry {
    settings: AccessibilityUserSettings,
    workspace_id: Option<String>,
    system: SystemDefaults,
    resolution: Resolution,
}

impl MemoEntry {
    fn matches(
        &self,
        settings: &AccessibilityUserSettings,
        workspace_id: Option<&str>,
        system: &SystemDefaults,
    ) -> bool {
        self.workspace_id.as_deref() == workspace_id
            && self.system == *system
            && self.settings.same_content(settings)
    }
}

/// Turns a settings snapshot into `ThemeTokens`.
///
/// Resolution is a pure function of (settings, workspace, system defaults);
/// the memo only skips recomputation and never changes a result.
pub struct ThemeResolver<P: SystemDefaultProvider = EnvSystemDefaults> {
    provider: P,
    merger: DimensionMerger,
    options: ResolverOptions,
    memo: Mutex<Option<MemoEntry>>,
}

impl Default for ThemeResolver<EnvSystemDefaults> {
    fn default() -> Self {
        Self::new(EnvSystemDefaults)
    }
}

impl<P: SystemDefaultProvider> ThemeResolver<P> {
    pub fn new(provider: P) -> Self {
        Self::with_options(provider, ResolverOptions::default())
    }

    pub fn with_options(provider: P, options: ResolverOptions) -> Self {
        Self {
            provider,
            merger: DimensionMerger::default(),
            options,
            memo: Mutex::new(None),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    /// Resolve with freshly detected system defaults.
    pub fn resolve(
        &self,
        settings: &AccessibilityUserSettings,
        workspace_id: Option<&str>,
    ) -> ThemeTokens {
        let system = self.provider.detect();
        self.resolve_with_system(settings, workspace_id, &system)
    }

    /// Resolve against explicit system defaults, e.g. the value carried by a
    /// preference-change notification.
    pub fn resolve_with_system(
        &self,
        settings: &AccessibilityUserSettings,
        workspace_id: Option<&str>,
        system: &SystemDefaults,
    ) -> ThemeTokens {
        self.resolve_report(settings, workspace_id, system).tokens
    }

    pub fn resolve_report(
        &self,
        settings: &AccessibilityUserSettings,
        workspace_id: Option<&str>,
        system: &SystemDefaults,
    ) -> Resolution {
        if self.options.memoize
            && let Some(entry) = self.memo.lock().as_ref()
            && entry.matches(settings, workspace_id, system)
        {
            trace!("Theme resolution served from memo");
            return entry.resolution.clone();
        }

        let timer =
            PerfTimer::new("theme_resolve").with_warn_threshold(self.options.slow_resolve_warn);

        let merge = self.merger.merge_with_report(settings, workspace_id, system);
        let tokens = synthesize(&merge.dimensions);
        let resolution = Resolution { tokens, merge };

        let elapsed = timer.finish();
        debug!(
            preset = settings.active_preset.as_deref().unwrap_or("none"),
            workspace = workspace_id.unwrap_or("none"),
            layers = resolution.merge.applied_layers.len(),
            elapsed_us = elapsed.as_micros() as u64,
            "Resolved theme tokens"
        );

        if self.options.memoize {
            *self.memo.lock() = Some(MemoEntry {
                settings: settings.clone(),
                workspace_id: workspace_id.map(str::to_string),
                system: *system,
                resolution: resolution.clone(),
            });
        }

        resolution
    }

    /// Drop the memoized result.
    pub fn clear_memo(&self) {
        self.memo.lock().take();
    }

    #[cfg(test)]
    fn memo_is_set(&self) -> bool {
        self.memo.lock().is_some()
    }
}

/// Resolve once with a throwaway resolver.
pub fn resolve_theme(
    settings: &AccessibilityUserSettings,
    workspace_id: Option<&str>,
    system: &SystemDefaults,
) -> ThemeTokens {
    ThemeResolver::with_options(
        crate::system::FixedSystemDefaults(*system),
        ResolverOptions {
            memoize: false,
            ..Default::default()
        },
    )
    .resolve(settings, workspace_id)
}
