//! Reversed-bit string encoding.
//!
//! Character `i` of the string is the coefficient of `x^i`, so the string is
//! the integer's usual binary printout read backwards: `"011"` is `x^2 + x`.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseError;
use crate::poly::Gf2Poly;

impl FromStr for Gf2Poly {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut value = 0u64;
        for (pos, ch) in s.chars().enumerate() {
            match ch {
                '0' => {}
                '1' if pos < u64::BITS as usize => value |= 1 << pos,
                '1' => return Err(ParseError::Overflow { pos }),
                _ => return Err(ParseError::InvalidDigit { ch, pos }),
            }
        }

        Ok(Self::from_value(value))
    }
}

impl fmt::Display for Gf2Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(deg) = self.degree() else {
            return f.pad("0");
        };

        let s: String = (0..=deg)
            .map(|i| if self.coeff(i) { '1' } else { '0' })
            .collect();
        f.pad(&s)
    }
}
