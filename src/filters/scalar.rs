use archmage::prelude::*;

// ===========================================================================
// Scalar row implementation
// ===========================================================================

// Arithmetic form of the invert kernel. The vector paths use the XOR
// identity 255 - x == 255 ^ x instead, which is exact for unsigned 8-bit
// channels; both forms produce identical bytes.
pub(super) fn invert_row_scalar(_token: ScalarToken, row: &mut [u8]) {
    for px in row.chunks_exact_mut(4) {
        px[0] = 255 - px[0];
        px[1] = 255 - px[1];
        px[2] = 255 - px[2];
    }
}

// ===========================================================================
// Scalar wrappers (dispatch targets for incant!)
// ===========================================================================

pub(super) fn invert_impl_scalar(t: ScalarToken, b: &mut [u8]) {
    invert_row_scalar(t, b);
}

pub(super) fn invert_strided_scalar(
    t: ScalarToken,
    buf: &mut [u8],
    w: usize,
    h: usize,
    stride: usize,
) {
    for y in 0..h {
        invert_row_scalar(t, &mut buf[y * stride..][..w * 4]);
    }
}
