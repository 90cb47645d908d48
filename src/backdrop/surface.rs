use crate::capability::filter::FilterHandle;
use crate::foundation::core::Frame;
use crate::foundation::error::BlurResult;

/// The layer capturing the pixels behind a host view.
///
/// Holds at most one installed filter. Only the filter controller installs or releases
/// filters and only display sync changes the scale; everything else sees a read-only view.
#[derive(Clone, Debug)]
pub struct BackdropSurface {
    filter: Option<FilterHandle>,
    scale: f64,
}

impl BackdropSurface {
    pub fn new() -> Self {
        Self {
            filter: None,
            scale: 1.0,
        }
    }

    /// Installed filters; always zero or one entry.
    pub fn filters(&self) -> &[FilterHandle] {
        self.filter.as_slice()
    }

    pub fn filter(&self) -> Option<&FilterHandle> {
        self.filter.as_ref()
    }

    /// Device pixels per logical unit the backdrop renders at.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub(crate) fn install_filter(&mut self, handle: FilterHandle) -> Option<FilterHandle> {
        self.filter.replace(handle)
    }

    pub(crate) fn release_filter(&mut self) -> Option<FilterHandle> {
        self.filter.take()
    }

    pub(crate) fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    /// Run captured backdrop pixels through the installed filter, if any.
    pub fn composite(&self, backdrop: &Frame) -> BlurResult<Frame> {
        match &self.filter {
            Some(f) => f.apply(backdrop, self.scale),
            None => Ok(backdrop.clone()),
        }
    }
}

impl Default for BackdropSurface {
    fn default() -> Self {
        Self::new()
    }
}
