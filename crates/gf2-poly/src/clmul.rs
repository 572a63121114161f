// src/clmul.rs
//! Carry-less multiplication of word-sized GF(2) polynomials.
//!
//! The product of two `u64` polynomials has degree at most 126, so it is
//! returned as a `u128` and reduced afterwards by the caller.

/// 64x64 -> 128 bit carry-less multiplication
#[inline]
pub fn carryless_mul_64(a: u64, b: u64) -> u128 {
    #[cfg(all(feature = "hardware-accel", target_arch = "x86_64", target_feature = "pclmulqdq"))]
    {
        use core::arch::x86_64::*;

        // SAFETY: pclmulqdq availability is a compile-time target feature here
        unsafe {
            let a_vec = _mm_set_epi64x(0, a as i64);
            let b_vec = _mm_set_epi64x(0, b as i64);

            let result = _mm_clmulepi64_si128(a_vec, b_vec, 0x00);

            let lo = _mm_cvtsi128_si64(result) as u64;
            let hi = _mm_cvtsi128_si64(_mm_srli_si128(result, 8)) as u64;

            ((hi as u128) << 64) | (lo as u128)
        }
    }

    #[cfg(not(all(feature = "hardware-accel", target_arch = "x86_64", target_feature = "pclmulqdq")))]
    {
        carryless_mul_64_soft(a, b)
    }
}

// shift-and-xor, one masked step per bit of b
#[cfg_attr(
    all(feature = "hardware-accel", target_arch = "x86_64", target_feature = "pclmulqdq"),
    allow(dead_code)
)]
#[inline]
pub(crate) fn carryless_mul_64_soft(a: u64, b: u64) -> u128 {
    let mut result = 0u128;

    for i in 0..64 {
        let mask = 0u128.wrapping_sub(((b >> i) & 1) as u128);
        result ^= ((a as u128) << i) & mask;
    }

    result
}
