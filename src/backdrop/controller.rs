use crate::backdrop::guard::ParameterDiffGuard;
use crate::backdrop::surface::BackdropSurface;
use crate::capability::CapabilityProvider;
use crate::capability::filter::FilterHandle;
use crate::config::opts::EngineOpts;
use crate::foundation::core::{BlurConfiguration, FilterTag, MaskCanvas};
use crate::foundation::error::{BlurError, BlurResult};
use crate::mask::gradient;

/// Result of one `configure`/`update` call. Never an error: failures degrade locally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigureOutcome {
    /// A new filter replaced whatever the surface had.
    Installed { tag: FilterTag, generation: u64 },
    /// Same configuration as last applied; nothing happened.
    Unchanged,
    /// No variable-blur capability; the surface carries no filter.
    CapabilityUnavailable,
    /// The mask could not be produced; the surface keeps its previous filter.
    MaskGenerationFailed,
    /// The filter refused the inputs; the surface keeps its previous filter.
    Rejected,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControllerStats {
    /// Full reconfiguration attempts.
    pub reconstructions: u64,
    pub installs: u64,
    pub capability_misses: u64,
    pub mask_failures: u64,
    pub rejected: u64,
    /// `update` calls elided because nothing changed.
    pub skipped_updates: u64,
}

/// Owns the filter installed on one backdrop surface.
pub struct BackdropFilterController {
    provider: Box<dyn CapabilityProvider>,
    canvas: MaskCanvas,
    normalize_edges: bool,
    guard: ParameterDiffGuard,
    next_generation: u64,
    stats: ControllerStats,
}

impl BackdropFilterController {
    pub fn new(provider: Box<dyn CapabilityProvider>, opts: &EngineOpts) -> Self {
        Self {
            provider,
            canvas: opts.mask_canvas(),
            normalize_edges: opts.normalize_edges,
            guard: ParameterDiffGuard::new(),
            next_generation: 1,
            stats: ControllerStats::default(),
        }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    pub fn stats(&self) -> ControllerStats {
        self.stats
    }

    pub fn last_applied(&self) -> Option<&BlurConfiguration> {
        self.guard.last_applied()
    }

    /// Reconfigure only if `config` differs from the last applied one.
    pub fn update(
        &mut self,
        config: &BlurConfiguration,
        surface: &mut BackdropSurface,
    ) -> ConfigureOutcome {
        if !self.guard.changed(config) {
            self.stats.skipped_updates += 1;
            tracing::debug!(tag = %config.tag(), "blur configuration unchanged");
            return ConfigureOutcome::Unchanged;
        }
        self.configure(config, surface)
    }

    /// Build a fresh filter for `config` and install it as the surface's only filter.
    #[tracing::instrument(skip(self, surface), fields(tag = %config.tag()))]
    pub fn configure(
        &mut self,
        config: &BlurConfiguration,
        surface: &mut BackdropSurface,
    ) -> ConfigureOutcome {
        self.guard.record(*config);
        self.stats.reconstructions += 1;

        match self.build_filter(config) {
            Ok(handle) => {
                let tag = handle.tag();
                let generation = handle.generation();
                let replaced = surface.install_filter(handle);
                self.stats.installs += 1;
                tracing::debug!(
                    generation,
                    replaced = replaced.map(|h| h.generation()),
                    "installed variable blur filter"
                );
                ConfigureOutcome::Installed { tag, generation }
            }
            Err(BlurError::CapabilityUnavailable(msg)) => {
                self.stats.capability_misses += 1;
                surface.release_filter();
                tracing::warn!(provider = self.provider.name(), "variable blur unavailable: {msg}");
                ConfigureOutcome::CapabilityUnavailable
            }
            Err(BlurError::MaskGeneration(msg)) => {
                self.stats.mask_failures += 1;
                tracing::warn!("skipping filter attachment: {msg}");
                ConfigureOutcome::MaskGenerationFailed
            }
            Err(err) => {
                self.stats.rejected += 1;
                tracing::warn!("skipping filter attachment: {err}");
                ConfigureOutcome::Rejected
            }
        }
    }

    /// Drop the surface's filter and forget the applied configuration.
    pub fn release(&mut self, surface: &mut BackdropSurface) {
        if let Some(h) = surface.release_filter() {
            tracing::debug!(generation = h.generation(), "released variable blur filter");
        }
        self.guard.reset();
    }

    fn build_filter(&mut self, config: &BlurConfiguration) -> BlurResult<FilterHandle> {
        let builder = self.provider.acquire_variable_blur_filter()?;
        let mask =
            gradient::generate_on(self.canvas, config.start_offset(), config.direction())?;
        let generation = self.next_generation;
        let handle = builder
            .radius(config.max_blur_radius())
            .mask(mask)
            .normalize_edges(self.normalize_edges)
            .build(config.tag(), generation)?;
        self.next_generation += 1;
        Ok(handle)
    }
}

impl std::fmt::Debug for BackdropFilterController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackdropFilterController")
            .field("provider", &self.provider.name())
            .field("canvas", &self.canvas)
            .field("normalize_edges", &self.normalize_edges)
            .field("last_applied", &self.guard.last_applied())
            .field("stats", &self.stats)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/backdrop/controller.rs"]
mod tests;
