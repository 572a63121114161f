use crate::clmul::carryless_mul_64;
use crate::error::{Gf2Error, Result};

/// A polynomial over GF(2) packed into a `u64`: bit `i` is the coefficient of `x^i`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gf2Poly(u64);

impl Gf2Poly {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);
    /// The indeterminate `x`
    pub const X: Self = Self(0b10);

    pub const fn from_value(val: u64) -> Self {
        Self(val)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Index of the highest set coefficient, `None` for the zero polynomial.
    pub const fn degree(&self) -> Option<u32> {
        if self.0 == 0 {
            None
        } else {
            Some(u64::BITS - 1 - self.0.leading_zeros())
        }
    }

    /// Coefficient of `x^i`; terms past the word are zero.
    pub fn coeff(&self, i: u32) -> bool {
        i < u64::BITS && (self.0 >> i) & 1 == 1
    }

    pub fn add(&self, other: &Self) -> Self {
        Self(self.0 ^ other.0)
    }

    /// Full carry-less product, never truncated.
    pub fn mul_wide(&self, other: &Self) -> u128 {
        carryless_mul_64(self.0, other.0)
    }

    /// Unreduced product, `None` when it has terms of degree 64 or above.
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        u64::try_from(self.mul_wide(other)).ok().map(Self)
    }

    /// Polynomial long division with no modulus.
    ///
    /// Returns `(quotient, remainder)` with `self == quotient * divisor + remainder`
    /// and the remainder of lower degree than the divisor.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        if divisor.is_zero() {
            return Err(Gf2Error::DivisionByZero);
        }

        let (quotient, remainder) = long_division(self.0, divisor.0);
        Ok((Self(quotient), Self(remainder)))
    }
}

// divisor must be nonzero
pub(crate) fn long_division(dividend: u64, divisor: u64) -> (u64, u64) {
    debug_assert_ne!(divisor, 0);

    let divisor_deg = u64::BITS - 1 - divisor.leading_zeros();
    let mut quotient = 0u64;
    let mut remainder = dividend;

    if remainder == 0 {
        return (quotient, remainder);
    }

    let remainder_deg = u64::BITS - 1 - remainder.leading_zeros();

    for i in (divisor_deg..=remainder_deg).rev() {
        if remainder & (1 << i) != 0 {
            let shift = i - divisor_deg;
            remainder ^= divisor << shift;
            quotient |= 1 << shift;
        }
    }

    (quotient, remainder)
}

impl From<u64> for Gf2Poly {
    fn from(val: u64) -> Self {
        Self::from_value(val)
    }
}

impl From<Gf2Poly> for u64 {
    fn from(poly: Gf2Poly) -> Self {
        poly.0
    }
}

#[cfg(feature = "rand")]
impl rand::distributions::Distribution<Gf2Poly> for rand::distributions::Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Gf2Poly {
        Gf2Poly::from_value(rng.gen())
    }
}
