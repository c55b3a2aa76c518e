//! Validates the code examples from README.md compile and behave correctly.

#[test]
fn readme_slice_api() {
    use nightshade::{grayscale_inplace, invert_inplace, sepia_inplace};

    // Two pixels: opaque red, opaque mid-gray.
    let mut pixels = vec![255u8, 0, 0, 255, 128, 128, 128, 255];
    invert_inplace(&mut pixels).unwrap();
    assert_eq!(pixels, [0, 255, 255, 255, 127, 127, 127, 255]);

    let mut pixels = vec![255u8, 0, 0, 255];
    grayscale_inplace(&mut pixels).unwrap();
    assert_eq!(pixels, [76, 76, 76, 255]);

    let mut pixels = vec![255u8, 0, 0, 255];
    sepia_inplace(&mut pixels).unwrap();
    assert_eq!(pixels, [99, 88, 69, 255]);
}

#[test]
fn readme_strided() {
    use nightshade::invert_inplace_strided;

    // 60 pixels per row, 100 rows, rows padded out to 256 bytes.
    let mut buf = vec![0u8; 256 * 100];
    invert_inplace_strided(&mut buf, 60, 100, 256).unwrap();
    assert_eq!(buf[0], 255); // first channel inverted
    assert_eq!(buf[240], 0); // first padding byte untouched
}

#[test]
fn readme_bitmap_api() {
    use nightshade::{MemoryBitmap, PixelFormat, invert, try_invert};

    let mut bmp = MemoryBitmap::new(64, 64, PixelFormat::Rgba8888);
    invert(&mut bmp);
    assert_eq!(bmp.bytes()[0], 255);

    // Non-RGBA bitmaps are refused, not transformed.
    let mut bmp = MemoryBitmap::new(64, 64, PixelFormat::Rgb565);
    assert!(try_invert(&mut bmp).is_err());
    assert!(bmp.bytes().iter().all(|&b| b == 0));
}

#[test]
fn readme_capability_probe() {
    // Either answer is valid; the call itself must be available everywhere.
    let _ = nightshade::simd_available();
}
