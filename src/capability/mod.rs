//! Detection and instantiation of the variable-blur compositing filter.
//!
//! The filter type is resolved by name through a [`FilterRegistry`], mirroring platforms that
//! only expose it as an untyped, named filter. Providers are selected once per engine.

pub(crate) mod filter;
pub(crate) mod registry;

use crate::config::opts::{EngineOpts, ProviderKind};
use crate::foundation::error::{BlurError, BlurResult};

use filter::FilterBuilder;
use registry::FilterRegistry;

/// Type name the variable-blur filter is registered under.
pub const VARIABLE_BLUR_TYPE: &str = "variableBlur";

/// Source of unconfigured variable-blur filters.
///
/// Implementations must never panic; absence of the capability is reported as
/// [`BlurError::CapabilityUnavailable`] and treated by callers as a normal degrade path.
pub trait CapabilityProvider {
    fn name(&self) -> &'static str;

    fn acquire_variable_blur_filter(&self) -> BlurResult<FilterBuilder>;
}

/// Software compositor resolving filters from a registry.
pub struct CpuCompositor {
    registry: FilterRegistry,
}

impl CpuCompositor {
    pub fn new() -> Self {
        Self {
            registry: FilterRegistry::with_builtin_filters(),
        }
    }

    pub fn with_registry(registry: FilterRegistry) -> Self {
        Self { registry }
    }
}

impl Default for CpuCompositor {
    fn default() -> Self {
        Self::new()
    }
}

impl CapabilityProvider for CpuCompositor {
    fn name(&self) -> &'static str {
        "cpu"
    }

    fn acquire_variable_blur_filter(&self) -> BlurResult<FilterBuilder> {
        self.registry.filter_with_type(VARIABLE_BLUR_TYPE)
    }
}

/// Provider for platforms without a variable-blur compositing filter.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unsupported;

impl CapabilityProvider for Unsupported {
    fn name(&self) -> &'static str {
        "none"
    }

    fn acquire_variable_blur_filter(&self) -> BlurResult<FilterBuilder> {
        Err(BlurError::capability_unavailable(
            "platform exposes no variable blur filter",
        ))
    }
}

pub fn select_provider(opts: &EngineOpts) -> Box<dyn CapabilityProvider> {
    let provider: Box<dyn CapabilityProvider> = match opts.provider {
        ProviderKind::Cpu => Box::new(CpuCompositor::new()),
        ProviderKind::None => Box::new(Unsupported),
    };
    tracing::debug!(provider = provider.name(), "selected capability provider");
    provider
}

#[cfg(test)]
#[path = "../../tests/unit/capability/mod.rs"]
mod tests;
