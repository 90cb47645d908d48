use crate::effects::variable_blur::{VariableBlurParams, variable_blur_rgba8_premul};
use crate::foundation::core::{FilterTag, Frame};
use crate::foundation::error::{BlurError, BlurResult};
use crate::mask::gradient::GradientMask;

/// How an installed filter is executed against backdrop pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKernel {
    CpuVariableBlur,
}

/// A freshly acquired, not yet configured filter instance.
#[derive(Clone, Debug)]
pub struct FilterBuilder {
    type_name: &'static str,
    kernel: FilterKernel,
    radius: f64,
    mask: Option<GradientMask>,
    normalize_edges: bool,
}

impl FilterBuilder {
    pub fn new(type_name: &'static str, kernel: FilterKernel) -> Self {
        Self {
            type_name,
            kernel,
            radius: 0.0,
            mask: None,
            normalize_edges: false,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn mask(mut self, mask: GradientMask) -> Self {
        self.mask = Some(mask);
        self
    }

    pub fn normalize_edges(mut self, enabled: bool) -> Self {
        self.normalize_edges = enabled;
        self
    }

    /// Freeze the inputs into an installable handle.
    pub fn build(self, tag: FilterTag, generation: u64) -> BlurResult<FilterHandle> {
        let mask = self
            .mask
            .ok_or_else(|| BlurError::validation("variable blur filter requires a mask image"))?;
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(BlurError::validation(
                "variable blur radius must be finite and >= 0",
            ));
        }
        Ok(FilterHandle {
            type_name: self.type_name,
            kernel: self.kernel,
            radius: self.radius,
            mask,
            normalize_edges: self.normalize_edges,
            tag,
            generation,
        })
    }
}

/// An immutable, configured filter as installed on a backdrop surface.
///
/// Reconfiguration never mutates a handle; a new one replaces it.
#[derive(Clone, Debug)]
pub struct FilterHandle {
    type_name: &'static str,
    kernel: FilterKernel,
    radius: f64,
    mask: GradientMask,
    normalize_edges: bool,
    tag: FilterTag,
    generation: u64,
}

impl FilterHandle {
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mask(&self) -> &GradientMask {
        &self.mask
    }

    pub fn normalizes_edges(&self) -> bool {
        self.normalize_edges
    }

    pub fn tag(&self) -> FilterTag {
        self.tag
    }

    /// Monotonic build counter of the controller that produced this handle.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Filter backdrop pixels rendered at `scale` device pixels per logical unit.
    pub fn apply(&self, backdrop: &Frame, scale: f64) -> BlurResult<Frame> {
        match self.kernel {
            FilterKernel::CpuVariableBlur => {
                let data = variable_blur_rgba8_premul(
                    &backdrop.data,
                    backdrop.width,
                    backdrop.height,
                    VariableBlurParams {
                        radius_px: self.radius * scale,
                        mask: &self.mask,
                        normalize_edges: self.normalize_edges,
                    },
                )?;
                Frame::from_premul_rgba8(backdrop.width, backdrop.height, data)
            }
        }
    }
}
