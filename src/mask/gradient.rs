//! Single-channel gradient masks encoding blur intensity along the vertical axis.
//!
//! Intensity `0.0` means "no blur" and `1.0` means "full blur". The mask is rasterized on a
//! fixed nominal canvas and consumed by filters as a relative falloff curve, so its pixel size
//! never depends on the host view.

use image::{ImageBuffer, Luma};

use crate::foundation::core::{BlurDirection, MaskCanvas, Point};
use crate::foundation::error::{BlurError, BlurResult};

pub type MaskImage = ImageBuffer<Luma<f32>, Vec<f32>>;

/// Two-point linear gradient between a fully transparent and a fully opaque endpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
struct LinearGradient {
    transparent: Point,
    opaque: Point,
    // +1 when intensity grows downwards, -1 when it grows upwards.
    toward_opaque: f64,
}

impl LinearGradient {
    fn for_direction(height: f64, start_offset: f64, direction: BlurDirection) -> Self {
        let mut opaque = Point::new(0.0, height);
        let mut transparent = Point::new(0.0, start_offset * height);
        if direction == BlurDirection::BottomClearTop {
            opaque.y = 0.0;
            transparent.y = height - transparent.y;
        }
        let toward_opaque = match direction {
            BlurDirection::TopClearBottom => 1.0,
            BlurDirection::BottomClearTop => -1.0,
        };
        Self {
            transparent,
            opaque,
            toward_opaque,
        }
    }

    fn intensity_at(&self, y: f64) -> f32 {
        let d = (y - self.transparent.y) * self.toward_opaque;
        let span = (self.opaque.y - self.transparent.y) * self.toward_opaque;
        if span <= 0.0 {
            return if d >= span { 1.0 } else { 0.0 };
        }
        (d / span).clamp(0.0, 1.0) as f32
    }
}

/// An immutable blur-intensity mask.
#[derive(Clone, Debug)]
pub struct GradientMask {
    image: MaskImage,
    direction: BlurDirection,
    gradient: LinearGradient,
}

impl GradientMask {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn direction(&self) -> BlurDirection {
        self.direction
    }

    pub fn image(&self) -> &MaskImage {
        &self.image
    }

    pub fn intensity(&self, x: u32, y: u32) -> f32 {
        self.image.get_pixel(x, y).0[0]
    }

    /// Vertical position (canvas units) of the transparent endpoint, i.e. the blur/clear line.
    pub fn transition_y(&self) -> f64 {
        self.gradient.transparent.y
    }

    /// Vertical position (canvas units) of the fully opaque endpoint.
    pub fn opaque_y(&self) -> f64 {
        self.gradient.opaque.y
    }

    /// First row, scanning from the clear edge, whose intensity is above zero.
    pub fn blur_onset_row(&self) -> Option<u32> {
        let h = self.height();
        let nonzero = |y: u32| self.intensity(0, y) > 0.0;
        match self.direction {
            BlurDirection::TopClearBottom => (0..h).find(|&y| nonzero(y)),
            BlurDirection::BottomClearTop => (0..h).rev().find(|&y| nonzero(y)),
        }
    }

    /// Sample the mask at a relative vertical position `v` in `[0, 1]`, interpolating rows.
    pub fn sample_fraction(&self, v: f64) -> f32 {
        let h = self.height();
        let pos = (v.clamp(0.0, 1.0) * f64::from(h) - 0.5).clamp(0.0, f64::from(h - 1));
        let y0 = pos.floor() as u32;
        let y1 = (y0 + 1).min(h - 1);
        let t = (pos - f64::from(y0)) as f32;
        let a = self.intensity(0, y0);
        let b = self.intensity(0, y1);
        a + (b - a) * t
    }

    /// Quantize to an 8-bit grayscale image (255 = full blur).
    pub fn to_luma8(&self) -> image::GrayImage {
        image::GrayImage::from_fn(self.width(), self.height(), |x, y| {
            Luma([(self.intensity(x, y) * 255.0).round() as u8])
        })
    }
}

/// Rasterize the blur-intensity gradient for `direction` on a `width x height` canvas.
///
/// `start_offset` is clamped into `[0, 1]`. Failure to produce an image is reported as
/// [`BlurError::MaskGeneration`].
#[tracing::instrument(level = "debug")]
pub fn generate(
    width: u32,
    height: u32,
    start_offset: f64,
    direction: BlurDirection,
) -> BlurResult<GradientMask> {
    if width == 0 || height == 0 {
        return Err(BlurError::mask_generation(format!(
            "mask canvas must be non-empty, got {width}x{height}"
        )));
    }
    if !start_offset.is_finite() {
        return Err(BlurError::mask_generation(
            "start offset must be finite",
        ));
    }

    let gradient =
        LinearGradient::for_direction(f64::from(height), start_offset.clamp(0.0, 1.0), direction);

    let len = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| BlurError::mask_generation("mask buffer size overflow"))?;
    let mut buf = Vec::with_capacity(len);
    for y in 0..height {
        let v = gradient.intensity_at(f64::from(y) + 0.5);
        buf.extend(std::iter::repeat_n(v, width as usize));
    }

    let image = MaskImage::from_raw(width, height, buf).ok_or_else(|| {
        BlurError::mask_generation("gradient compositing produced no image")
    })?;

    Ok(GradientMask {
        image,
        direction,
        gradient,
    })
}

/// [`generate`] on a [`MaskCanvas`].
pub fn generate_on(
    canvas: MaskCanvas,
    start_offset: f64,
    direction: BlurDirection,
) -> BlurResult<GradientMask> {
    generate(canvas.width, canvas.height, start_offset, direction)
}

#[cfg(test)]
#[path = "../../tests/unit/mask/gradient.rs"]
mod tests;
