//! Trial-division factoring.
//!
//! Candidate divisors are the integers `2, 3, 4, ...` read as bit patterns,
//! tried with exact polynomial division. The result is whatever trial
//! division produces on the bit pattern. It is not a certified decomposition
//! into irreducible polynomials, and nothing here tests irreducibility.

use crate::poly::{long_division, Gf2Poly};

/// Split `poly` into trial-division factors, smallest candidate first, with
/// multiplicity.
///
/// The raw (unreduced) product of the returned factors equals `poly`.
/// `0` and `1` have no factors.
///
/// Candidates are walked in increasing integer order, which is also
/// non-decreasing degree order. Once a candidate's degree exceeds half the
/// degree of what is left, everything of lower degree has been ruled out,
/// so the remainder is emitted as the last factor. This gives the same
/// sequence as counting all the way up to the remainder.
///
/// Cost grows with the smallest factor: an input with no factor below
/// degree `d / 2` tries about `2^(d/2 + 1)` candidates, so an irreducible
/// polynomial of degree near 63 runs for roughly `2^32` divisions.
pub fn factorize(poly: Gf2Poly) -> Vec<Gf2Poly> {
    let mut factors = Vec::new();
    let mut rest = poly.value();
    let mut candidate: u64 = 2;

    while candidate <= rest {
        let candidate_deg = degree(candidate);
        if 2 * candidate_deg > degree(rest) {
            factors.push(Gf2Poly::from_value(rest));
            break;
        }

        let (quotient, remainder) = long_division(rest, candidate);
        if remainder == 0 {
            factors.push(Gf2Poly::from_value(candidate));
            rest = quotient;
        } else {
            candidate += 1;
        }
    }

    factors
}

// value is nonzero in every caller
fn degree(value: u64) -> u32 {
    u64::BITS - 1 - value.leading_zeros()
}
