use archmage::prelude::*;

// ===========================================================================
// SIMD constants
// ===========================================================================

// Repeating per-pixel XOR mask: invert R,G,B, keep A (0 ^ a == a).
const INVERT_RGB_MASK_AVX: [i8; 32] = [
    -1, -1, -1, 0, -1, -1, -1, 0, -1, -1, -1, 0, -1, -1, -1, 0, -1, -1, -1, 0, -1, -1, -1, 0, -1,
    -1, -1, 0, -1, -1, -1, 0,
];

// ===========================================================================
// x86-64 AVX2 — rite row implementation
// ===========================================================================

#[rite]
pub(super) fn invert_row_v3(_token: X64V3Token, row: &mut [u8]) {
    let mask = safe_unaligned_simd::x86_64::_mm256_loadu_si256(&INVERT_RGB_MASK_AVX);
    let n = row.len();
    let mut i = 0;
    // 8 whole pixels (32 bytes) per iteration.
    while i + 32 <= n {
        let arr: &[u8; 32] = row[i..i + 32].try_into().unwrap();
        let v = safe_unaligned_simd::x86_64::_mm256_loadu_si256(arr);
        let out: &mut [u8; 32] = (&mut row[i..i + 32]).try_into().unwrap();
        safe_unaligned_simd::x86_64::_mm256_storeu_si256(out, _mm256_xor_si256(v, mask));
        i += 32;
    }
    // Trailing pixels: arithmetic form, numerically identical to the XOR.
    for px in row[i..].chunks_exact_mut(4) {
        px[0] = 255 - px[0];
        px[1] = 255 - px[1];
        px[2] = 255 - px[2];
    }
}

// ===========================================================================
// x86-64 arcane wrappers
// ===========================================================================

#[arcane]
pub(super) fn invert_impl_v3(t: X64V3Token, b: &mut [u8]) {
    invert_row_v3(t, b);
}

#[arcane]
pub(super) fn invert_strided_v3(t: X64V3Token, buf: &mut [u8], w: usize, h: usize, stride: usize) {
    for y in 0..h {
        invert_row_v3(t, &mut buf[y * stride..][..w * 4]);
    }
}
