// src/lib.rs
//! Polynomials over GF(2) packed into a machine word.
//!
//! Bit `i` of a [`Gf2Poly`] is the coefficient of `x^i`. Addition is XOR,
//! multiplication is carry-less. Quotient-ring arithmetic (reduction,
//! multiplication, exponentiation, inversion and division modulo a fixed
//! polynomial) lives on [`Modulus`], which cannot be zero.
//!
//! # Features
//!
//! - `rand` (default): sample uniform polynomials with `rand::Rng::gen`
//! - `serde`: derive `Serialize`/`Deserialize` for [`Gf2Poly`]
//! - `hardware-accel`: use `pclmulqdq` for carry-less products on x86_64
//!
//! # Limitations
//!
//! Inversion and division assume the modulus is irreducible and do not
//! check it. [`factorize`] is trial division on the bit pattern and makes no
//! irreducibility claim about the factors it returns.
//!
//! # Example
//!
//! ```rust
//! use gf2_poly::{Gf2Poly, Modulus};
//!
//! // strings are read lowest degree first: "111" = 1 + x + x^2
//! let m = Modulus::new("111".parse().unwrap()).unwrap();
//! let a: Gf2Poly = "11".parse().unwrap();
//!
//! let a_inv = m.inv(&a).unwrap();
//! assert_eq!(a_inv.to_string(), "01");
//! assert_eq!(m.mul(&a, &a_inv), Gf2Poly::ONE);
//! ```

pub mod clmul;
mod codec;
mod error;
mod expr;
mod factor;
mod poly;
mod ring;

#[cfg(test)]
mod proptests;

pub use clmul::carryless_mul_64;
pub use error::{Gf2Error, Operand, ParseError, Result};
pub use expr::{Operation, Operator};
pub use factor::factorize;
pub use poly::Gf2Poly;
pub use ring::Modulus;
