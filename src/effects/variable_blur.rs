use std::collections::HashMap;

use crate::foundation::error::{BlurError, BlurResult};
use crate::mask::gradient::GradientMask;

#[derive(Clone, Copy, Debug)]
pub struct VariableBlurParams<'a> {
    /// Peak blur radius in device pixels, reached where the mask is fully opaque.
    ///
    /// Radii beyond the buffer's larger dimension behave like that dimension.
    pub radius_px: f64,
    pub mask: &'a GradientMask,
    /// Renormalize kernel weights over in-bounds taps instead of clamping to the edge pixel.
    pub normalize_edges: bool,
}

/// Blur a premultiplied RGBA8 buffer with a per-row radius taken from the mask.
///
/// The mask is sampled as a relative curve over the buffer height, so any mask canvas size
/// works for any buffer size.
pub fn variable_blur_rgba8_premul(
    src: &[u8],
    width: u32,
    height: u32,
    params: VariableBlurParams<'_>,
) -> BlurResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| BlurError::validation("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(BlurError::validation(
            "variable_blur_rgba8_premul expects src matching width*height*4",
        ));
    }
    if params.radius_px.is_nan() || params.radius_px < 0.0 {
        return Err(BlurError::validation("blur radius must be >= 0"));
    }

    // Taps past the buffer extent contribute nothing new in either edge mode.
    let peak = params.radius_px.min(f64::from(width.max(height)));
    let row_radii: Vec<u32> = (0..height)
        .map(|y| {
            let v = (f64::from(y) + 0.5) / f64::from(height);
            let r = peak * f64::from(params.mask.sample_fraction(v));
            r.round() as u32
        })
        .collect();
    if row_radii.iter().all(|&r| r == 0) {
        return Ok(src.to_vec());
    }

    let mut kernels = HashMap::<u32, Vec<u32>>::new();
    for &r in &row_radii {
        if let std::collections::hash_map::Entry::Vacant(e) = kernels.entry(r) {
            e.insert(gaussian_kernel_q16(r, sigma_for_radius(r))?);
        }
    }
    let row_kernels: Vec<&[u32]> = row_radii.iter().map(|r| kernels[r].as_slice()).collect();

    let mut tmp = vec![0u8; expected_len];
    let mut out = vec![0u8; expected_len];
    horizontal_pass(src, &mut tmp, width, &row_kernels, params.normalize_edges);
    vertical_pass(&tmp, &mut out, width, height, &row_kernels, params.normalize_edges);
    Ok(out)
}

fn sigma_for_radius(radius: u32) -> f32 {
    (radius as f32 / 3.0).max(0.5)
}

fn gaussian_kernel_q16(radius: u32, sigma: f32) -> BlurResult<Vec<u32>> {
    if radius == 0 {
        return Ok(vec![1 << 16]);
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(BlurError::validation("blur sigma must be > 0"));
    }

    let r = radius as i32;
    let mut weights_f = Vec::<f64>::with_capacity((2 * r + 1) as usize);
    let mut sum = 0.0f64;
    let sigma = f64::from(sigma);
    let denom = 2.0 * sigma * sigma;
    for i in -r..=r {
        let x = f64::from(i);
        let w = (-x * x / denom).exp();
        weights_f.push(w);
        sum += w;
    }

    let mut weights = Vec::<u32>::with_capacity(weights_f.len());
    let mut acc: i64 = 0;
    for &wf in &weights_f {
        let q = ((wf / sum) * 65536.0).round() as i64;
        let q = q.clamp(0, 65536);
        weights.push(q as u32);
        acc += q;
    }
    let delta = 65536 - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        weights[mid] = (i64::from(weights[mid]) + delta).clamp(0, 65536) as u32;
    }

    Ok(weights)
}

// Accumulates one output pixel from `len` taps around `center`; `at(i)` maps a tap index to a
// byte offset into `src`.
fn convolve(
    src: &[u8],
    k: &[u32],
    center: i32,
    len: i32,
    normalize_edges: bool,
    at: impl Fn(i32) -> usize,
) -> [u8; 4] {
    let radius = (k.len() / 2) as i32;
    let mut acc = [0u64; 4];
    let mut wsum = 0u64;
    for (ki, &kw) in k.iter().enumerate() {
        let mut s = center + ki as i32 - radius;
        if s < 0 || s >= len {
            if normalize_edges {
                continue;
            }
            s = s.clamp(0, len - 1);
        }
        let idx = at(s);
        for c in 0..4 {
            acc[c] += u64::from(kw) * u64::from(src[idx + c]);
        }
        wsum += u64::from(kw);
    }

    let mut px = [0u8; 4];
    for c in 0..4 {
        px[c] = if wsum == 0 {
            0
        } else {
            ((acc[c] + wsum / 2) / wsum).min(255) as u8
        };
    }
    px
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], width: u32, k: &[&[u32]], normalize_edges: bool) {
    let w = width as i32;
    for (y, kernel) in k.iter().enumerate() {
        let row = y * width as usize;
        for x in 0..w {
            let px = convolve(src, kernel, x, w, normalize_edges, |sx| {
                (row + sx as usize) * 4
            });
            let out_idx = (row + x as usize) * 4;
            dst[out_idx..out_idx + 4].copy_from_slice(&px);
        }
    }
}

fn vertical_pass(
    src: &[u8],
    dst: &mut [u8],
    width: u32,
    height: u32,
    k: &[&[u32]],
    normalize_edges: bool,
) {
    let w = width as usize;
    let h = height as i32;
    for y in 0..h {
        let kernel = k[y as usize];
        for x in 0..w {
            let px = convolve(src, kernel, y, h, normalize_edges, |sy| {
                (sy as usize * w + x) * 4
            });
            let out_idx = (y as usize * w + x) * 4;
            dst[out_idx..out_idx + 4].copy_from_slice(&px);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/variable_blur.rs"]
mod tests;
