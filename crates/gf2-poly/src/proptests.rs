//! Property-based tests for GF(2) polynomial arithmetic.

use proptest::prelude::*;

use crate::{factorize, Gf2Poly, Modulus};

// x^8 + x^4 + x^3 + x + 1
const AES: u64 = 0x11b;
// x^16 + x^5 + x^3 + x^2 + 1
const GF16: u64 = 0x1002d;
// x^63 + x + 1
const GF63: u64 = (1 << 63) | 0b11;

fn poly() -> impl Strategy<Value = Gf2Poly> {
    any::<u64>().prop_map(Gf2Poly::from_value)
}

fn nonzero_modulus() -> impl Strategy<Value = Modulus> {
    (1u64..=u64::MAX).prop_map(|v| Modulus::new(Gf2Poly::from_value(v)).unwrap())
}

fn field_modulus() -> impl Strategy<Value = Modulus> {
    prop_oneof![Just(AES), Just(GF16), Just(GF63)]
        .prop_map(|v| Modulus::new(Gf2Poly::from_value(v)).unwrap())
}

// nonzero after reduction modulo any of the field moduli
fn unit(m: Modulus) -> impl Strategy<Value = (Modulus, Gf2Poly)> {
    poly()
        .prop_filter("invertible", move |a| !m.reduce(*a).is_zero())
        .prop_map(move |a| (m, a))
}

fn field_and_unit() -> impl Strategy<Value = (Modulus, Gf2Poly)> {
    field_modulus().prop_flat_map(unit)
}

proptest! {
    #[test]
    fn string_round_trip(a in poly()) {
        let s = a.to_string();
        prop_assert_eq!(s.parse::<Gf2Poly>().unwrap(), a);
        prop_assert!(s == "0" || s.ends_with('1'));
    }

    #[test]
    fn canonical_string_round_trip(bits in proptest::collection::vec(any::<bool>(), 0..63)) {
        let mut s: String = bits.iter().map(|&b| if b { '1' } else { '0' }).collect();
        s.push('1');
        prop_assert_eq!(s.parse::<Gf2Poly>().unwrap().to_string(), s);
    }

    #[test]
    fn degree_is_floor_log2(a in poly()) {
        match a.degree() {
            None => prop_assert!(a.is_zero()),
            Some(d) => prop_assert_eq!(d, a.value().ilog2()),
        }
    }

    #[test]
    fn reduction_is_idempotent(a in poly(), m in nonzero_modulus()) {
        let once = m.reduce(a);
        prop_assert_eq!(m.reduce(once), once);
        if let Some(d) = once.degree() {
            prop_assert!(d < m.degree());
        }
    }

    #[test]
    fn reduce_mod_in_place_matches_reduce(a in poly(), m in nonzero_modulus()) {
        let mut b = a;
        b.reduce_mod(&m);
        prop_assert_eq!(b, m.reduce(a));
    }

    #[test]
    fn addition_identity_and_involution(a in poly(), m in nonzero_modulus()) {
        prop_assert_eq!(m.add(&a, &a), Gf2Poly::ZERO);
        prop_assert_eq!(m.add(&a, &Gf2Poly::ZERO), a);
    }

    #[test]
    fn mul_commutes_and_distributes(a in poly(), b in poly(), c in poly(), m in nonzero_modulus()) {
        prop_assert_eq!(m.mul(&a, &b), m.mul(&b, &a));
        let left = m.mul(&a, &b.add(&c));
        let right = m.add(&m.mul(&a, &b), &m.mul(&a, &c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn raw_division_identity(a in poly(), b in poly()) {
        prop_assume!(!b.is_zero());
        let (q, r) = a.div_rem(&b).unwrap();
        let qb = q.mul_wide(&b);
        prop_assert_eq!(qb ^ r.value() as u128, a.value() as u128);
        if let Some(rd) = r.degree() {
            prop_assert!(rd < b.degree().unwrap());
        }
    }

    #[test]
    fn power_laws(a in poly(), m in nonzero_modulus(), e in 1u64..1000, f in 0u64..1000) {
        prop_assert_eq!(m.pow(&a, 0), Gf2Poly::ONE);
        prop_assert_eq!(m.pow(&a, 1), m.reduce(a));
        prop_assert_eq!(m.pow(&a, e + f), m.mul(&m.pow(&a, e), &m.pow(&a, f)));
    }

    #[test]
    fn inverse_is_inverse((m, a) in field_and_unit()) {
        let a_inv = m.inv(&a).unwrap();
        prop_assert_eq!(m.mul(&a_inv, &a), Gf2Poly::ONE);
    }

    #[test]
    fn divide_undoes_multiply((m, b) in field_and_unit(), a in poly()) {
        let product = m.mul(&a, &b);
        prop_assert_eq!(m.div(&product, &b).unwrap(), m.reduce(a));
    }

    #[test]
    fn factorization_reconstructs(v in 0u64..(1 << 20)) {
        let a = Gf2Poly::from_value(v);
        let factors = factorize(a);
        let product = factors
            .iter()
            .try_fold(Gf2Poly::ONE, |acc, f| acc.checked_mul(f));
        if v >= 2 {
            prop_assert_eq!(product, Some(a));
        } else {
            prop_assert!(factors.is_empty());
        }
        prop_assert!(factors.windows(2).all(|w| w[0] <= w[1]));
    }
}
