use serde::{Deserialize, Deserializer, Serializer};

use crate::foundation::core::{BlurConfiguration, BlurDirection};
use crate::foundation::error::{BlurError, BlurResult};

/// Declarative props as supplied by a host UI framework.
///
/// Keys are camelCase and every field is optional:
///
/// ```json
/// { "maxBlurRadius": 105, "direction": "blurredTopClearBottom", "startOffset": 0.1 }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlurProps {
    pub max_blur_radius: f64,
    #[serde(
        serialize_with = "serialize_direction",
        deserialize_with = "deserialize_direction"
    )]
    pub direction: BlurDirection,
    pub start_offset: f64,
}

impl Default for BlurProps {
    fn default() -> Self {
        Self {
            max_blur_radius: BlurConfiguration::DEFAULT_MAX_BLUR_RADIUS,
            direction: BlurDirection::default(),
            start_offset: BlurConfiguration::DEFAULT_START_OFFSET,
        }
    }
}

impl BlurProps {
    pub fn from_json_str(s: &str) -> BlurResult<Self> {
        serde_json::from_str(s).map_err(|e| BlurError::serde(format!("parse blur props JSON: {e}")))
    }

    pub fn from_json_value(v: serde_json::Value) -> BlurResult<Self> {
        serde_json::from_value(v)
            .map_err(|e| BlurError::serde(format!("parse blur props JSON: {e}")))
    }

    /// Sanitize into an applied configuration.
    ///
    /// `startOffset` is clamped into `[0, 1]`; negative or non-finite radii become `0` and
    /// non-finite offsets become `0`.
    pub fn to_configuration(&self) -> BlurConfiguration {
        let radius = if self.max_blur_radius.is_finite() && self.max_blur_radius >= 0.0 {
            self.max_blur_radius
        } else {
            tracing::warn!(
                max_blur_radius = self.max_blur_radius,
                "maxBlurRadius must be finite and >= 0; using 0"
            );
            0.0
        };

        let offset = if !self.start_offset.is_finite() {
            tracing::warn!(start_offset = self.start_offset, "startOffset is not finite; using 0");
            0.0
        } else if !(0.0..=1.0).contains(&self.start_offset) {
            let clamped = self.start_offset.clamp(0.0, 1.0);
            tracing::warn!(
                start_offset = self.start_offset,
                clamped,
                "startOffset outside [0, 1]; clamping"
            );
            clamped
        } else {
            self.start_offset
        };

        BlurConfiguration::new(radius, self.direction, offset)
    }
}

fn serialize_direction<S: Serializer>(d: &BlurDirection, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(d.as_str())
}

fn deserialize_direction<'de, D: Deserializer<'de>>(d: D) -> Result<BlurDirection, D::Error> {
    let s = String::deserialize(d)?;
    Ok(BlurDirection::from_prop(&s))
}

#[cfg(test)]
#[path = "../../tests/unit/config/props.rs"]
mod tests;
