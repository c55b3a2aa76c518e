//! Buffer acquisition: pixel formats, geometry, and scoped pixel locking.
//!
//! The transform entry points receive an opaque handle from the host and
//! must (1) read its geometry, (2) verify the pixel format, (3) lock the
//! pixel memory for exactly one call, and (4) release the lock on every
//! exit path. [`Bitmap`] models that protocol: `with_pixels` scopes the
//! lock to a closure, so release is structural rather than a paired call
//! that an early return could leak.

use alloc::vec;
use alloc::vec::Vec;

use crate::SizeError;

/// Pixel memory layout tag.
///
/// Only [`Rgba8888`](PixelFormat::Rgba8888) — four 8-bit channels, R at
/// byte 0 and A at byte 3, rows optionally padded to a larger stride — is
/// transformable. The remaining tags exist so a host can hand us bitmaps
/// we must refuse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    /// Packed 8-bit R,G,B,A — the only supported transform layout.
    Rgba8888,
    /// 16-bit 5:6:5 without alpha.
    Rgb565,
    /// Packed 4-bit R,G,B,A.
    Rgba4444,
    /// 8-bit alpha-only mask.
    Alpha8,
    /// Half-float R,G,B,A.
    RgbaF16,
}

impl PixelFormat {
    /// Bytes occupied by one pixel in this layout.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgba8888 => 4,
            PixelFormat::Rgb565 | PixelFormat::Rgba4444 => 2,
            PixelFormat::Alpha8 => 1,
            PixelFormat::RgbaF16 => 8,
        }
    }
}

impl core::fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            PixelFormat::Rgba8888 => "RGBA_8888",
            PixelFormat::Rgb565 => "RGB_565",
            PixelFormat::Rgba4444 => "RGBA_4444",
            PixelFormat::Alpha8 => "A_8",
            PixelFormat::RgbaF16 => "RGBA_F16",
        };
        f.write_str(name)
    }
}

/// Geometry and format of a bitmap, as reported by its host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitmapInfo {
    /// Pixels per row.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Bytes from the start of one row to the start of the next.
    /// May exceed `width * bytes_per_pixel`; the excess is padding.
    pub stride: usize,
    /// Pixel memory layout.
    pub format: PixelFormat,
}

/// Acquisition failure: the host could not hand over the bitmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockError {
    /// Geometry/format retrieval failed.
    Geometry,
    /// The pixel memory could not be locked.
    Pixels,
}

impl core::fmt::Display for LockError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LockError::Geometry => write!(f, "failed to get bitmap info"),
            LockError::Pixels => write!(f, "failed to lock pixels"),
        }
    }
}

impl core::error::Error for LockError {}

/// An opaque host bitmap: geometry retrieval plus scoped pixel locking.
///
/// Implementations guarantee that whatever "lock" means for the host, it is
/// taken before `f` runs and released when `f` returns — on every path, and
/// exactly once per call. The core performs no synchronization of its own;
/// the host must not touch the pixel memory concurrently during the call.
pub trait Bitmap {
    /// Retrieve geometry and pixel format.
    fn info(&self) -> Result<BitmapInfo, LockError>;

    /// Lock the pixel memory for the duration of `f`.
    ///
    /// The slice handed to `f` starts at the first pixel of row 0 and is
    /// laid out with the stride reported by [`info`](Bitmap::info).
    fn with_pixels<R>(&mut self, f: impl FnOnce(&mut [u8]) -> R) -> Result<R, LockError>;
}

/// An owned, heap-backed bitmap. The simplest possible host: locking always
/// succeeds and geometry is whatever it was built with.
#[derive(Clone, Debug)]
pub struct MemoryBitmap {
    info: BitmapInfo,
    data: Vec<u8>,
}

impl MemoryBitmap {
    /// Zero-filled bitmap with tightly packed rows (`stride == width * bpp`).
    pub fn new(width: usize, height: usize, format: PixelFormat) -> MemoryBitmap {
        let stride = width * format.bytes_per_pixel();
        MemoryBitmap {
            info: BitmapInfo {
                width,
                height,
                stride,
                format,
            },
            data: vec![0u8; stride * height],
        }
    }

    /// Zero-filled bitmap with explicit row stride (allows row padding).
    pub fn with_stride(
        width: usize,
        height: usize,
        stride: usize,
        format: PixelFormat,
    ) -> Result<MemoryBitmap, SizeError> {
        let row_bytes = width
            .checked_mul(format.bytes_per_pixel())
            .ok_or(SizeError::InvalidStride)?;
        if stride < row_bytes {
            return Err(SizeError::InvalidStride);
        }
        let len = stride.checked_mul(height).ok_or(SizeError::InvalidStride)?;
        Ok(MemoryBitmap {
            info: BitmapInfo {
                width,
                height,
                stride,
                format,
            },
            data: vec![0u8; len],
        })
    }

    /// Wrap existing pixel bytes. The buffer must cover every pixel:
    /// `(height - 1) * stride + width * bpp` bytes at minimum.
    pub fn from_vec(
        data: Vec<u8>,
        width: usize,
        height: usize,
        stride: usize,
        format: PixelFormat,
    ) -> Result<MemoryBitmap, SizeError> {
        let row_bytes = width
            .checked_mul(format.bytes_per_pixel())
            .ok_or(SizeError::InvalidStride)?;
        if stride < row_bytes {
            return Err(SizeError::InvalidStride);
        }
        if height > 0 {
            let total = (height - 1)
                .checked_mul(stride)
                .ok_or(SizeError::InvalidStride)?
                .checked_add(row_bytes)
                .ok_or(SizeError::InvalidStride)?;
            if data.len() < total {
                return Err(SizeError::InvalidStride);
            }
        }
        Ok(MemoryBitmap {
            info: BitmapInfo {
                width,
                height,
                stride,
                format,
            },
            data,
        })
    }

    /// The raw pixel bytes, padding included.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw pixel bytes, padding included.
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl Bitmap for MemoryBitmap {
    fn info(&self) -> Result<BitmapInfo, LockError> {
        Ok(self.info)
    }

    fn with_pixels<R>(&mut self, f: impl FnOnce(&mut [u8]) -> R) -> Result<R, LockError> {
        Ok(f(&mut self.data))
    }
}
