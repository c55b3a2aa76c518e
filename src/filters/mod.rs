// ---------------------------------------------------------------------------
// In-place color filters over packed 8-bit RGBA rows.
//
// Architecture: #[rite] row functions contain the SIMD loops.
// #[arcane] wrappers dispatch via incant! — contiguous (single call)
// and strided (loop over rows, single dispatch). Invert has vector paths
// on every tier; grayscale and sepia are scalar-only fixed-point loops.
// ---------------------------------------------------------------------------

use crate::SizeError;
use archmage::incant;

mod scalar;
use scalar::*;

#[cfg(target_arch = "x86_64")]
mod avx2;
#[cfg(target_arch = "x86_64")]
use avx2::*;

#[cfg(target_arch = "aarch64")]
mod neon;
#[cfg(target_arch = "aarch64")]
use neon::*;

#[cfg(target_arch = "wasm32")]
mod wasm;
#[cfg(target_arch = "wasm32")]
use wasm::*;


/// The one supported pixel size: packed 8-bit R,G,B,A.
const BPP: usize = 4;

// ===========================================================================
// Validation helpers
// ===========================================================================

#[inline]
fn check_inplace(len: usize) -> Result<(), SizeError> {
    if len == 0 || !len.is_multiple_of(BPP) {
        Err(SizeError::NotPixelAligned)
    } else {
        Ok(())
    }
}

#[inline]
fn check_strided(
    len: usize,
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), SizeError> {
    if width == 0 || height == 0 {
        return Err(SizeError::InvalidStride);
    }
    let row_bytes = width.checked_mul(BPP).ok_or(SizeError::InvalidStride)?;
    if row_bytes > stride {
        return Err(SizeError::InvalidStride);
    }
    let total = (height - 1)
        .checked_mul(stride)
        .ok_or(SizeError::InvalidStride)?
        .checked_add(row_bytes)
        .ok_or(SizeError::InvalidStride)?;
    if len < total {
        return Err(SizeError::InvalidStride);
    }
    Ok(())
}

// ===========================================================================
// Per-pixel kernels
// ===========================================================================

// Luminance weights 0.299/0.587/0.114 scaled by 256, truncating shift.
// Maximum sum is 255 * 256, which fits u16 exactly.
#[inline(always)]
fn luma8(r: u8, g: u8, b: u8) -> u8 {
    ((r as u16 * 77 + g as u16 * 150 + b as u16 * 29) >> 8) as u8
}

// Sepia matrix scaled by 256. Row sums exceed 256 so results can pass 255
// and need the upper clamp; all terms are non-negative, so no lower clamp.
#[inline(always)]
fn sepia8(r: u8, g: u8, b: u8) -> [u8; 3] {
    let (r, g, b) = (r as u32, g as u32, b as u32);
    let nr = (r * 100 + g * 197 + b * 48) >> 8;
    let ng = (r * 89 + g * 175 + b * 43) >> 8;
    let nb = (r * 70 + g * 137 + b * 34) >> 8;
    [nr.min(255) as u8, ng.min(255) as u8, nb.min(255) as u8]
}

fn grayscale_row(row: &mut [u8]) {
    for px in row.chunks_exact_mut(BPP) {
        let gray = luma8(px[0], px[1], px[2]);
        px[0] = gray;
        px[1] = gray;
        px[2] = gray;
    }
}

fn sepia_row(row: &mut [u8]) {
    for px in row.chunks_exact_mut(BPP) {
        // All three outputs come from the original R,G,B — staged before
        // any write-back, since the transform is in place.
        let [r, g, b] = sepia8(px[0], px[1], px[2]);
        px[0] = r;
        px[1] = g;
        px[2] = b;
    }
}

// ===========================================================================
// Public API — invert (SIMD dispatched)
// ===========================================================================

/// Invert R,G,B in-place for 4bpp RGBA pixels (night mode). Alpha untouched.
///
/// Applying it twice restores the original bytes exactly.
pub fn invert_inplace(buf: &mut [u8]) -> Result<(), SizeError> {
    check_inplace(buf.len())?;
    incant!(invert_impl(buf), [v3, arm_v2, wasm128, scalar]);
    Ok(())
}

/// Invert R,G,B in-place for a strided RGBA image. Single SIMD dispatch.
///
/// `stride` is the distance in bytes between the start of consecutive rows.
/// Must be ≥ `width × 4`. Padding bytes between rows are never read or
/// written. The buffer must be at least `(height - 1) * stride + width * 4`
/// bytes.
pub fn invert_inplace_strided(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), SizeError> {
    check_strided(buf.len(), width, height, stride)?;
    incant!(
        invert_strided(buf, width, height, stride),
        [v3, arm_v2, wasm128, scalar]
    );
    Ok(())
}

// ===========================================================================
// Public API — grayscale and sepia (scalar-only)
// ===========================================================================

/// Grayscale 4bpp RGBA pixels in-place: R=G=B=(R×77 + G×150 + B×29)>>8.
/// Alpha untouched.
pub fn grayscale_inplace(buf: &mut [u8]) -> Result<(), SizeError> {
    check_inplace(buf.len())?;
    grayscale_row(buf);
    Ok(())
}

/// Grayscale a strided RGBA image in-place.
///
/// Same stride contract as [`invert_inplace_strided`].
pub fn grayscale_inplace_strided(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), SizeError> {
    check_strided(buf.len(), width, height, stride)?;
    for y in 0..height {
        grayscale_row(&mut buf[y * stride..][..width * BPP]);
    }
    Ok(())
}

/// Sepia-tone 4bpp RGBA pixels in-place, saturating each channel at 255.
/// Alpha untouched.
pub fn sepia_inplace(buf: &mut [u8]) -> Result<(), SizeError> {
    check_inplace(buf.len())?;
    sepia_row(buf);
    Ok(())
}

/// Sepia-tone a strided RGBA image in-place.
///
/// Same stride contract as [`invert_inplace_strided`].
pub fn sepia_inplace_strided(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), SizeError> {
    check_strided(buf.len(), width, height, stride)?;
    for y in 0..height {
        sepia_row(&mut buf[y * stride..][..width * BPP]);
    }
    Ok(())
}

// ===========================================================================
// Capability probe
// ===========================================================================

/// Whether a vector tier is available for the invert fast path on this
/// machine. Purely informational — every operation falls back to scalar
/// code with bit-identical results.
#[cfg(target_arch = "x86_64")]
pub fn simd_available() -> bool {
    use archmage::SimdToken;
    archmage::X64V3Token::summon().is_some()
}

/// Whether a vector tier is available for the invert fast path on this
/// machine. Purely informational — every operation falls back to scalar
/// code with bit-identical results.
#[cfg(target_arch = "aarch64")]
pub fn simd_available() -> bool {
    use archmage::SimdToken;
    archmage::Arm64V2Token::summon().is_some()
}

/// Whether a vector tier is available for the invert fast path on this
/// machine. Purely informational — every operation falls back to scalar
/// code with bit-identical results.
#[cfg(target_arch = "wasm32")]
pub fn simd_available() -> bool {
    use archmage::SimdToken;
    archmage::Wasm128Token::summon().is_some()
}

/// No vector tier exists on this architecture; the scalar path is the only
/// path.
#[cfg(not(any(
    target_arch = "x86_64",
    target_arch = "aarch64",
    target_arch = "wasm32"
)))]
pub fn simd_available() -> bool {
    false
}
