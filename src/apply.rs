//! Bitmap-level entry points: validate, lock, transform, release.
//!
//! These mirror the call shape of a managed host handing over an opaque
//! bitmap handle: the plain functions return nothing and contain every
//! failure as a no-op plus one diagnostic log line; the `try_*` variants
//! expose the same outcome as a [`FilterError`]. Either way, a bitmap that
//! fails validation or acquisition is left byte-for-byte untouched.

use log::error;

use crate::SizeError;
use crate::bitmap::{Bitmap, LockError, PixelFormat};
use crate::filters;

/// Why a transform was skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterError {
    /// The bitmap is not packed 8-bit RGBA.
    UnsupportedFormat(PixelFormat),
    /// The host could not hand over geometry or pixel memory.
    Acquire(LockError),
    /// The reported geometry does not fit the locked pixel buffer.
    Size(SizeError),
}

impl core::fmt::Display for FilterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FilterError::UnsupportedFormat(format) => {
                write!(f, "bitmap format {format} is not RGBA_8888")
            }
            FilterError::Acquire(e) => write!(f, "{e}"),
            FilterError::Size(e) => write!(f, "{e}"),
        }
    }
}

impl core::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            FilterError::UnsupportedFormat(_) => None,
            FilterError::Acquire(e) => Some(e),
            FilterError::Size(e) => Some(e),
        }
    }
}

#[derive(Clone, Copy)]
enum Kernel {
    Invert,
    Grayscale,
    Sepia,
}

impl Kernel {
    fn name(self) -> &'static str {
        match self {
            Kernel::Invert => "invert",
            Kernel::Grayscale => "grayscale",
            Kernel::Sepia => "sepia",
        }
    }
}

fn apply<B: Bitmap>(bitmap: &mut B, kernel: Kernel) -> Result<(), FilterError> {
    let info = bitmap.info().map_err(FilterError::Acquire)?;
    if info.format != PixelFormat::Rgba8888 {
        return Err(FilterError::UnsupportedFormat(info.format));
    }
    let (w, h, stride) = (info.width, info.height, info.stride);

    #[cfg(feature = "std")]
    let start = std::time::Instant::now();

    // Size validation runs inside the lock but before any byte is written,
    // so a bad-geometry bitmap is released untouched.
    bitmap
        .with_pixels(|px| match kernel {
            Kernel::Invert => filters::invert_inplace_strided(px, w, h, stride),
            Kernel::Grayscale => filters::grayscale_inplace_strided(px, w, h, stride),
            Kernel::Sepia => filters::sepia_inplace_strided(px, w, h, stride),
        })
        .map_err(FilterError::Acquire)?
        .map_err(FilterError::Size)?;

    #[cfg(feature = "std")]
    log::debug!(
        "{}: {w}x{h} in {:.3}ms",
        kernel.name(),
        start.elapsed().as_secs_f64() * 1e3
    );

    Ok(())
}

fn run<B: Bitmap>(bitmap: &mut B, kernel: Kernel) {
    if let Err(e) = apply(bitmap, kernel) {
        error!("{} skipped: {e}", kernel.name());
    }
}

/// Invert the bitmap's colors in place (night mode).
///
/// Unsupported format or acquisition failure leaves the bitmap untouched
/// and logs one diagnostic line; nothing is returned.
pub fn invert<B: Bitmap>(bitmap: &mut B) {
    run(bitmap, Kernel::Invert);
}

/// Convert the bitmap to grayscale in place.
///
/// Same failure contract as [`invert`].
pub fn grayscale<B: Bitmap>(bitmap: &mut B) {
    run(bitmap, Kernel::Grayscale);
}

/// Apply a sepia tone to the bitmap in place.
///
/// Same failure contract as [`invert`].
pub fn sepia<B: Bitmap>(bitmap: &mut B) {
    run(bitmap, Kernel::Sepia);
}

/// [`invert`] with the skip reason surfaced.
pub fn try_invert<B: Bitmap>(bitmap: &mut B) -> Result<(), FilterError> {
    apply(bitmap, Kernel::Invert)
}

/// [`grayscale`] with the skip reason surfaced.
pub fn try_grayscale<B: Bitmap>(bitmap: &mut B) -> Result<(), FilterError> {
    apply(bitmap, Kernel::Grayscale)
}

/// [`sepia`] with the skip reason surfaced.
pub fn try_sepia<B: Bitmap>(bitmap: &mut B) -> Result<(), FilterError> {
    apply(bitmap, Kernel::Sepia)
}
