use archmage::prelude::*;

// ===========================================================================
// ARM NEON — rite row implementation
// ===========================================================================

#[rite]
pub(super) fn invert_row_arm_v2(_token: Arm64V2Token, row: &mut [u8]) {
    use core::arch::aarch64::veorq_u8;
    // Repeating per-pixel XOR mask: invert R,G,B, keep A (0 ^ a == a).
    let mask_bytes: [u8; 16] = [
        255, 255, 255, 0, 255, 255, 255, 0, 255, 255, 255, 0, 255, 255, 255, 0,
    ];
    let mask = safe_unaligned_simd::aarch64::vld1q_u8(&mask_bytes);
    let n = row.len();
    let mut i = 0;
    // 4 whole pixels (16 bytes) per iteration.
    while i + 16 <= n {
        let arr: &[u8; 16] = row[i..i + 16].try_into().unwrap();
        let v = safe_unaligned_simd::aarch64::vld1q_u8(arr);
        let out: &mut [u8; 16] = (&mut row[i..i + 16]).try_into().unwrap();
        safe_unaligned_simd::aarch64::vst1q_u8(out, veorq_u8(v, mask));
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
// ARM arcane wrappers
// ===========================================================================

#[arcane]
pub(super) fn invert_impl_arm_v2(t: Arm64V2Token, b: &mut [u8]) {
    invert_row_arm_v2(t, b);
}

#[arcane]
pub(super) fn invert_strided_arm_v2(
    t: Arm64V2Token,
    buf: &mut [u8],
    w: usize,
    h: usize,
    stride: usize,
) {
    for y in 0..h {
        invert_row_arm_v2(t, &mut buf[y * stride..][..w * 4]);
    }
}
