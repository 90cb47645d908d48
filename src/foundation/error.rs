/// Convenience result type used across varblur.
pub type BlurResult<T> = Result<T, BlurError>;

/// Error taxonomy of the blur engine.
///
/// Capability and mask errors are handled inside the filter controller and never reach the
/// host; the rest surface from parsing and pixel APIs.
#[derive(thiserror::Error, Debug)]
pub enum BlurError {
    /// Invalid props, options or pixel buffers.
    #[error("validation error: {0}")]
    Validation(String),

    /// The platform exposes no usable variable-blur filter.
    #[error("capability unavailable: {0}")]
    CapabilityUnavailable(String),

    /// The gradient mask could not be rasterized.
    #[error("mask generation failed: {0}")]
    MaskGeneration(String),

    /// Errors when serializing or deserializing props and options.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BlurError {
    /// Build a [`BlurError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BlurError::CapabilityUnavailable`] value.
    pub fn capability_unavailable(msg: impl Into<String>) -> Self {
        Self::CapabilityUnavailable(msg.into())
    }

    /// Build a [`BlurError::MaskGeneration`] value.
    pub fn mask_generation(msg: impl Into<String>) -> Self {
        Self::MaskGeneration(msg.into())
    }

    /// Build a [`BlurError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether the error belongs to the degrade-and-log class that never reaches the host.
    pub fn is_degrade(&self) -> bool {
        matches!(self, Self::CapabilityUnavailable(_) | Self::MaskGeneration(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
