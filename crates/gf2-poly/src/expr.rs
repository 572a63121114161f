//! Calculator expressions: `a+b`, `a*b`, `a/b`, `a^n`, `a^-1`, or a lone
//! operand, which asks for its factorization.
//!
//! Operands use the reversed-bit encoding from [`crate::codec`], the
//! exponent of `^` is decimal.

use core::fmt;
use core::str::FromStr;

use crate::error::{Gf2Error, Operand, Result};
use crate::factor::factorize;
use crate::poly::Gf2Poly;
use crate::ring::Modulus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Mul,
    Div,
    Pow,
    Inverse,
    Factorize,
}

impl Operator {
    pub fn token(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Inverse => "^-1",
            Self::Factorize => "reduce",
        }
    }

    /// Everything except factorization works inside GF(2)[x]/(m).
    pub fn needs_modulus(&self) -> bool {
        !matches!(self, Self::Factorize)
    }
}

impl FromStr for Operator {
    type Err = Gf2Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "+" => Ok(Self::Add),
            "*" => Ok(Self::Mul),
            "/" => Ok(Self::Div),
            "^" => Ok(Self::Pow),
            "^-1" => Ok(Self::Inverse),
            "reduce" => Ok(Self::Factorize),
            other => Err(Gf2Error::UnknownOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add(Gf2Poly, Gf2Poly),
    Mul(Gf2Poly, Gf2Poly),
    Div(Gf2Poly, Gf2Poly),
    Pow(Gf2Poly, u64),
    Inverse(Gf2Poly),
    Factorize(Gf2Poly),
}

impl Operation {
    /// Parse one expression.
    ///
    /// The operator is the first character that is neither a binary digit
    /// nor whitespace. With no operator the whole text is one operand to
    /// factorize.
    pub fn parse(text: &str) -> Result<Self> {
        let content = text.trim_matches(|c: char| matches!(c, ' ' | '\n' | '\r'));

        let Some((idx, ch)) = content
            .char_indices()
            .find(|(_, c)| !matches!(c, '0' | '1') && !c.is_whitespace())
        else {
            return Ok(Self::Factorize(operand(content, Operand::First)?));
        };

        let left = content[..idx].trim();
        let right = content[idx + ch.len_utf8()..].trim();

        let token = if ch == '^' && right == "-1" {
            "^-1"
        } else {
            &content[idx..idx + ch.len_utf8()]
        };

        let op = match token.parse::<Operator>()? {
            Operator::Inverse => Self::Inverse(operand(left, Operand::First)?),
            Operator::Pow => {
                let exp = right
                    .parse::<u64>()
                    .map_err(|_| Gf2Error::InvalidExponent(right.to_string()))?;
                Self::Pow(operand(left, Operand::First)?, exp)
            }
            Operator::Add => Self::Add(operand(left, Operand::First)?, operand(right, Operand::Second)?),
            Operator::Mul => Self::Mul(operand(left, Operand::First)?, operand(right, Operand::Second)?),
            Operator::Div => Self::Div(operand(left, Operand::First)?, operand(right, Operand::Second)?),
            // "reduce" is a word, a single character can never spell it
            Operator::Factorize => return Err(Gf2Error::UnknownOperation(token.to_string())),
        };

        Ok(op)
    }

    pub fn operator(&self) -> Operator {
        match self {
            Self::Add(..) => Operator::Add,
            Self::Mul(..) => Operator::Mul,
            Self::Div(..) => Operator::Div,
            Self::Pow(..) => Operator::Pow,
            Self::Inverse(_) => Operator::Inverse,
            Self::Factorize(_) => Operator::Factorize,
        }
    }

    pub fn needs_modulus(&self) -> bool {
        self.operator().needs_modulus()
    }

    /// Run the operation.
    ///
    /// Ring operations reduce their operands modulo `modulus` first and
    /// return a single polynomial. Factorization ignores the modulus and
    /// returns every factor.
    pub fn evaluate(&self, modulus: Option<&Modulus>) -> Result<Vec<Gf2Poly>> {
        let ring = || modulus.ok_or(Gf2Error::MissingModulus);

        let result = match *self {
            Self::Factorize(a) => return Ok(factorize(a)),
            Self::Add(a, b) => {
                let m = ring()?;
                m.add(&m.reduce(a), &m.reduce(b))
            }
            Self::Mul(a, b) => {
                let m = ring()?;
                m.mul(&m.reduce(a), &m.reduce(b))
            }
            Self::Div(a, b) => {
                let m = ring()?;
                m.div(&m.reduce(a), &m.reduce(b))?
            }
            Self::Pow(a, exp) => {
                let m = ring()?;
                m.pow(&m.reduce(a), exp)
            }
            Self::Inverse(a) => {
                let m = ring()?;
                m.inv(&m.reduce(a))?
            }
        };

        Ok(vec![result])
    }
}

impl FromStr for Operation {
    type Err = Gf2Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn operand(s: &str, which: Operand) -> Result<Gf2Poly> {
    s.parse::<Gf2Poly>()
        .map_err(|source| Gf2Error::Operand { which, source })
}
