//! # nightshade
//!
//! *Every pixel looks better after dark.*
//!
//! In-place color filters for packed RGBA bitmaps: night-mode invert,
//! grayscale, and sepia. One fixed pixel layout (8-bit R,G,B,A at byte
//! offsets 0..4), alpha always preserved, padding bytes between rows never
//! touched. The invert kernel runs on x86-64 AVX2, ARM NEON, and WASM
//! SIMD128 with automatic fallback to scalar code; grayscale and sepia are
//! exact truncating fixed-point transforms with no vectorized form.
//!
//! ## Two API levels
//!
//! - **Slice level** (crate root): [`invert_inplace`], [`grayscale_inplace`],
//!   [`sepia_inplace`] and their `_strided` variants over raw `&mut [u8]`,
//!   returning [`SizeError`] on bad geometry.
//! - **Bitmap level** ([`invert`], [`grayscale`], [`sepia`]): operate on
//!   anything implementing [`Bitmap`], mirroring a managed host handing us
//!   an opaque bitmap handle. Validation or locking failure is a silent
//!   no-op with a diagnostic log line; the `try_*` variants surface the
//!   same outcome as a [`FilterError`] instead.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod apply;
mod bitmap;
mod filters;

pub use apply::{FilterError, grayscale, invert, sepia, try_grayscale, try_invert, try_sepia};
pub use bitmap::{Bitmap, BitmapInfo, LockError, MemoryBitmap, PixelFormat};
pub use filters::*;

/// Slice-level geometry violation: the buffer cannot hold the pixels it
/// claims to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeError {
    /// Buffer length is zero or not a whole number of 4-byte pixels.
    NotPixelAligned,
    /// Stride, width, or height inconsistent with the buffer length.
    InvalidStride,
}

impl core::fmt::Display for SizeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SizeError::NotPixelAligned => {
                write!(f, "buffer length is not a whole number of 4-byte pixels")
            }
            SizeError::InvalidStride => {
                write!(f, "stride/width/height inconsistent with buffer length")
            }
        }
    }
}

impl core::error::Error for SizeError {}
