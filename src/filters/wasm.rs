use archmage::prelude::*;

// ===========================================================================
// WASM SIMD128 — rite row implementation
// ===========================================================================

#[rite]
pub(super) fn invert_row_wasm128(_token: Wasm128Token, row: &mut [u8]) {
    use core::arch::wasm32::{u32x4_splat, v128_xor};
    // Per-pixel XOR mask {255,255,255,0}: invert R,G,B, keep A. WASM memory
    // is little-endian, so the alpha byte is the high byte of each lane.
    let mask = u32x4_splat(0x00FF_FFFF);
    let n = row.len();
    let mut i = 0;
    // 4 whole pixels (16 bytes) per iteration.
    while i + 16 <= n {
        let arr: &[u8; 16] = row[i..i + 16].try_into().unwrap();
        let v = safe_unaligned_simd::wasm32::v128_load(arr);
        let out: &mut [u8; 16] = (&mut row[i..i + 16]).try_into().unwrap();
        safe_unaligned_simd::wasm32::v128_store(out, v128_xor(v, mask));
        i += 16;
    }
    // Trailing pixels: arithmetic form, numerically identical to the XOR.
    for px in row[i..].chunks_exact_mut(4) {
        px[0] = 255 - px[0];
        px[1] = 255 - px[1];
        px[2] = 255 - px[2];
    }
}

// ===========================================================================
// WASM arcane wrappers
// ===========================================================================

#[arcane]
pub(super) fn invert_impl_wasm128(t: Wasm128Token, b: &mut [u8]) {
    invert_row_wasm128(t, b);
}

#[arcane]
pub(super) fn invert_strided_wasm128(
    t: Wasm128Token,
    buf: &mut [u8],
    w: usize,
    h: usize,
    stride: usize,
) {
    for y in 0..h {
        invert_row_wasm128(t, &mut buf[y * stride..][..w * 4]);
    }
}
