//! Varblur renders a directional, spatially-varying blur over whatever sits behind a view.
//!
//! A vertical gradient mask decides how strongly each row of the backdrop is blurred, so
//! content fades into soft blur instead of meeting a hard edge.
//!
//! # Pipeline overview
//!
//! 1. **Props**: host-facing [`BlurProps`] are sanitized into a [`BlurConfiguration`]
//! 2. **Guard**: [`ParameterDiffGuard`] drops updates that change nothing
//! 3. **Mask**: [`generate`] rasterizes a [`GradientMask`] on a fixed nominal canvas
//! 4. **Filter**: a [`CapabilityProvider`] hands out a filter that is configured and installed
//!    as the sole filter of a [`BackdropSurface`]
//!
//! [`DisplayScaleSync`] keeps the surface scale on the display's pixel density, and
//! [`EffectHostView`] composes child content under the whole thing.
//!
//! Missing platform support and failed mask generation are not errors for the host: the
//! backdrop simply stays unblurred (or keeps its previous filter) and a warning is logged.
#![forbid(unsafe_code)]

mod backdrop;
mod capability;
mod config;
mod effects;
mod foundation;
mod host;
mod mask;

pub use backdrop::controller::{BackdropFilterController, ConfigureOutcome, ControllerStats};
pub use backdrop::display::DisplayScaleSync;
pub use backdrop::guard::{ParameterDiffGuard, changed};
pub use backdrop::surface::BackdropSurface;
pub use capability::filter::{FilterBuilder, FilterHandle, FilterKernel};
pub use capability::registry::{FilterCtor, FilterRegistry};
pub use capability::{
    CapabilityProvider, CpuCompositor, Unsupported, VARIABLE_BLUR_TYPE, select_provider,
};
pub use config::opts::{EngineOpts, ProviderKind};
pub use config::props::BlurProps;
pub use effects::variable_blur::{VariableBlurParams, variable_blur_rgba8_premul};
pub use foundation::core::{
    BlurConfiguration, BlurDirection, FilterTag, Frame, MaskCanvas, Point, Size,
};
pub use foundation::error::{BlurError, BlurResult};
pub use host::view::{EffectHostView, HostContent};
pub use mask::gradient::{GradientMask, MaskImage, generate, generate_on};
