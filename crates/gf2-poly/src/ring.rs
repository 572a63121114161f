//! Arithmetic in the quotient ring GF(2)[x]/(m).
//!
//! When `m` is irreducible of degree `d` the ring is the field GF(2^d) and
//! inversion works through Fermat: `a^-1 = a^(2^d - 2)`. Irreducibility is
//! NOT checked. A reducible modulus gives well-defined but meaningless
//! inverses and quotients.

use crate::error::{Gf2Error, Result};
use crate::poly::Gf2Poly;

/// A nonzero polynomial defining a quotient ring.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Modulus {
    poly: Gf2Poly,
    degree: u32,
}

impl Modulus {
    pub fn new(poly: Gf2Poly) -> Result<Self> {
        let degree = poly.degree().ok_or(Gf2Error::ZeroModulus)?;
        Ok(Self { poly, degree })
    }

    pub fn poly(&self) -> Gf2Poly {
        self.poly
    }

    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Number of elements of the ring, `2^degree`.
    pub fn field_size(&self) -> u64 {
        1u64 << self.degree
    }

    /// Remainder of `a` modulo this polynomial.
    pub fn reduce(&self, a: Gf2Poly) -> Gf2Poly {
        let mut a = a;
        a.reduce_mod(self);
        a
    }

    /// Remainder of a double-width product.
    pub fn reduce_wide(&self, value: u128) -> Gf2Poly {
        // result has degree below 64, truncation only drops zeros
        Gf2Poly::from_value(reduce_bits(value, self.poly.value(), self.degree) as u64)
    }

    /// Ring addition. Never raises the degree, so no reduction happens.
    pub fn add(&self, a: &Gf2Poly, b: &Gf2Poly) -> Gf2Poly {
        a.add(b)
    }

    pub fn mul(&self, a: &Gf2Poly, b: &Gf2Poly) -> Gf2Poly {
        self.reduce_wide(a.mul_wide(b))
    }

    pub fn square(&self, a: &Gf2Poly) -> Gf2Poly {
        self.mul(a, a)
    }

    /// `a^exp` by square-and-multiply. `a^0` is one, including for zero `a`
    /// and for the degree-0 modulus, where every other result is zero.
    pub fn pow(&self, a: &Gf2Poly, mut exp: u64) -> Gf2Poly {
        if exp == 0 {
            return Gf2Poly::ONE;
        }

        let mut result = self.reduce(Gf2Poly::ONE);
        let mut base = self.reduce(*a);

        while exp > 0 {
            if exp & 1 == 1 {
                result = self.mul(&result, &base);
            }
            exp >>= 1;
            if exp > 0 {
                base = self.square(&base);
            }
        }

        result
    }

    /// Multiplicative inverse, computed as `a^(2^d - 2)`.
    ///
    /// Fails only when `a` is zero modulo `m`. With a reducible modulus the
    /// returned value is not an inverse.
    pub fn inv(&self, a: &Gf2Poly) -> Result<Gf2Poly> {
        let a = self.reduce(*a);
        if a.is_zero() {
            return Err(Gf2Error::NotInvertible);
        }

        // a nonzero reduced element implies degree >= 1, so this cannot underflow
        Ok(self.pow(&a, self.field_size() - 2))
    }

    /// `a / b` in the ring, i.e. `a * b^-1`.
    pub fn div(&self, a: &Gf2Poly, b: &Gf2Poly) -> Result<Gf2Poly> {
        let b_inv = self.inv(b)?;
        Ok(self.mul(a, &b_inv))
    }
}

impl TryFrom<Gf2Poly> for Modulus {
    type Error = Gf2Error;

    fn try_from(poly: Gf2Poly) -> Result<Self> {
        Self::new(poly)
    }
}

impl Gf2Poly {
    /// Reduce in place modulo `modulus`.
    ///
    /// One descending pass from the top coefficient to `deg(m)`: clearing
    /// bit `i` with `m << (i - deg(m))` only touches bits below `i`.
    pub fn reduce_mod(&mut self, modulus: &Modulus) {
        *self = Self::from_value(
            reduce_bits(self.value() as u128, modulus.poly.value(), modulus.degree) as u64,
        );
    }
}

fn reduce_bits(mut value: u128, modulus: u64, modulus_deg: u32) -> u128 {
    if value == 0 {
        return value;
    }

    let modulus = modulus as u128;
    let value_deg = u128::BITS - 1 - value.leading_zeros();

    for i in (modulus_deg..=value_deg).rev() {
        if value & (1 << i) != 0 {
            value ^= modulus << (i - modulus_deg);
        }
    }

    value
}
