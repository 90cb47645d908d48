use std::fmt;

use crate::foundation::error::{BlurError, BlurResult};

pub use kurbo::{Point, Size};

/// Which edge of the host view carries the fully blurred end of the mask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlurDirection {
    /// Clear region grows from the top as `start_offset` increases; full blur at the bottom edge.
    #[default]
    TopClearBottom,
    /// Mirror of [`BlurDirection::TopClearBottom`]; full blur at the top edge.
    BottomClearTop,
}

impl BlurDirection {
    /// Parse a host-supplied direction string.
    ///
    /// Unknown strings fall back to [`BlurDirection::TopClearBottom`]; hosts never had their
    /// direction rejected.
    pub fn from_prop(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "bottomcleartop" | "bottom_clear_top" | "blurredbottomcleartop" => Self::BottomClearTop,
            _ => Self::TopClearBottom,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopClearBottom => "topClearBottom",
            Self::BottomClearTop => "bottomClearTop",
        }
    }
}

impl fmt::Display for BlurDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three inputs that drive a variable blur.
///
/// Values are immutable once built; a new configuration replaces the previous one wholesale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlurConfiguration {
    max_blur_radius: f64,
    direction: BlurDirection,
    start_offset: f64,
}

impl BlurConfiguration {
    pub const DEFAULT_MAX_BLUR_RADIUS: f64 = 20.0;
    pub const DEFAULT_START_OFFSET: f64 = 0.0;

    pub fn new(max_blur_radius: f64, direction: BlurDirection, start_offset: f64) -> Self {
        Self {
            max_blur_radius,
            direction,
            start_offset,
        }
    }

    pub fn max_blur_radius(&self) -> f64 {
        self.max_blur_radius
    }

    pub fn direction(&self) -> BlurDirection {
        self.direction
    }

    pub fn start_offset(&self) -> f64 {
        self.start_offset
    }

    pub fn tag(&self) -> FilterTag {
        FilterTag {
            radius_bits: self.max_blur_radius.to_bits(),
            direction: self.direction,
            offset_bits: self.start_offset.to_bits(),
        }
    }
}

impl Default for BlurConfiguration {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_MAX_BLUR_RADIUS,
            BlurDirection::default(),
            Self::DEFAULT_START_OFFSET,
        )
    }
}

/// Identity of an installed filter, derived from `(max_blur_radius, direction, start_offset)`.
///
/// Floats are kept as raw bits so two tags are equal only for bit-identical inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FilterTag {
    radius_bits: u64,
    direction: BlurDirection,
    offset_bits: u64,
}

impl FilterTag {
    pub fn max_blur_radius(&self) -> f64 {
        f64::from_bits(self.radius_bits)
    }

    pub fn direction(&self) -> BlurDirection {
        self.direction
    }

    pub fn start_offset(&self) -> f64 {
        f64::from_bits(self.offset_bits)
    }
}

impl fmt::Display for FilterTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.max_blur_radius(),
            self.direction,
            self.start_offset()
        )
    }
}

/// Nominal canvas the gradient mask is rasterized on, independent of the host view's size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaskCanvas {
    pub width: u32,
    pub height: u32,
}

impl MaskCanvas {
    pub const NOMINAL: Self = Self::square(100);

    pub const fn square(size: u32) -> Self {
        Self {
            width: size,
            height: size,
        }
    }

    pub fn size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

impl Default for MaskCanvas {
    fn default() -> Self {
        Self::NOMINAL
    }
}

/// Premultiplied RGBA8 pixels, tightly packed, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Frame {
    /// A fully transparent frame.
    pub fn new(width: u32, height: u32) -> BlurResult<Self> {
        let len = byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0u8; len],
        })
    }

    pub fn from_premul_rgba8(width: u32, height: u32, data: Vec<u8>) -> BlurResult<Self> {
        if data.len() != byte_len(width, height)? {
            return Err(BlurError::validation(
                "frame data must match width*height*4",
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn from_straight_rgba8(width: u32, height: u32, mut data: Vec<u8>) -> BlurResult<Self> {
        if data.len() != byte_len(width, height)? {
            return Err(BlurError::validation(
                "frame data must match width*height*4",
            ));
        }
        for px in data.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            for c in &mut px[..3] {
                *c = (((u16::from(*c) * a) + 127) / 255) as u8;
            }
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }

    /// Read one pixel.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the frame; use [`Frame::get_pixel`] for a checked read.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.index(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Checked variant of [`Frame::pixel`].
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixel(x, y))
    }

    /// Write one pixel.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the frame. [`Frame::fill_rect`] clips instead.
    pub fn set_pixel(&mut self, x: u32, y: u32, px: [u8; 4]) {
        let i = self.index(x, y);
        self.data[i..i + 4].copy_from_slice(&px);
    }

    /// Fill the half-open rectangle `[x0, x1) x [y0, y1)`, clipped to the frame.
    pub fn fill_rect(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, px: [u8; 4]) {
        for y in y0.min(self.height)..y1.min(self.height) {
            for x in x0.min(self.width)..x1.min(self.width) {
                self.set_pixel(x, y, px);
            }
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }
}

fn byte_len(width: u32, height: u32) -> BlurResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| BlurError::validation("frame buffer size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
