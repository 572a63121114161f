//! error types for gf2-poly

use thiserror::Error;

/// Why a reversed-bit string could not be read as a polynomial
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty polynomial string")]
    Empty,

    #[error("invalid digit {ch:?} at position {pos}")]
    InvalidDigit { ch: char, pos: usize },

    #[error("coefficient at position {pos} does not fit in 64 bits")]
    Overflow { pos: usize },
}

/// Which side of a binary expression failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    First,
    Second,
}

impl core::fmt::Display for Operand {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::First => write!(f, "first operand"),
            Self::Second => write!(f, "second operand"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Gf2Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("{which}: {source}")]
    Operand {
        which: Operand,
        #[source]
        source: ParseError,
    },

    #[error("unknown operation {0:?}")]
    UnknownOperation(String),

    #[error("invalid exponent {0:?}")]
    InvalidExponent(String),

    #[error("modulus must be a nonzero polynomial")]
    ZeroModulus,

    #[error("division by the zero polynomial")]
    DivisionByZero,

    #[error("element is zero modulo the modulus and has no inverse")]
    NotInvertible,

    #[error("operation requires a modulus")]
    MissingModulus,
}

pub type Result<T> = core::result::Result<T, Gf2Error>;
