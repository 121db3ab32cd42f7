//! Exact integer arithmetic for the operator exercises.
//!
//! Integer results are arbitrary precision, so sums, products and powers are
//! printed exactly however large they get. True division is rounded once,
//! from the exact quotient, to the nearest `f64`.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::ToPrimitive;

use crate::core::number_format::float_repr;

/// Largest power result, in bits, computed before giving up.
pub const MAX_POWER_BITS: u64 = 1 << 24;

/// Result of an operator that yields an integer or, for true division and
/// negative exponents, a float.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Int(BigInt),
    Float(f64),
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(BigInt::from(value))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(value) => write!(f, "{value}"),
            Number::Float(value) => f.write_str(&float_repr(*value)),
        }
    }
}

/// Arithmetic failures.
///
/// Only [`ArithError::DivisionByZero`] is an anticipated outcome the
/// exercises print; a power too large to hold in memory aborts the exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithError {
    DivisionByZero,
    PowerTooLarge { base: i64, exp: i64 },
}

impl fmt::Display for ArithError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithError::DivisionByZero => f.write_str("Division by zero"),
            ArithError::PowerTooLarge { base, exp } => {
                write!(f, "{base} ** {exp} exceeds {MAX_POWER_BITS} bits")
            }
        }
    }
}

impl std::error::Error for ArithError {}

pub fn add(a: i64, b: i64) -> Number {
    Number::Int(BigInt::from(a) + BigInt::from(b))
}

pub fn subtract(a: i64, b: i64) -> Number {
    Number::Int(BigInt::from(a) - BigInt::from(b))
}

pub fn multiply(a: i64, b: i64) -> Number {
    Number::Int(BigInt::from(a) * BigInt::from(b))
}

/// True division: always a float, rounded once from the exact quotient.
pub fn divide(a: i64, b: i64) -> Result<Number, ArithError> {
    if b == 0 {
        return Err(ArithError::DivisionByZero);
    }
    let exact = BigRational::new(BigInt::from(a), BigInt::from(b));
    // Any quotient of two i64 values is within f64 range.
    let value = exact.to_f64().unwrap_or(a as f64 / b as f64);
    Ok(Number::Float(value))
}

/// Floored modulus: the result takes the sign of the divisor (`-7 % 3 == 2`).
pub fn modulo(a: i64, b: i64) -> Result<Number, ArithError> {
    if b == 0 {
        return Err(ArithError::DivisionByZero);
    }
    let (a, b) = (i128::from(a), i128::from(b));
    let rem = a % b;
    let floored = if rem != 0 && (rem < 0) != (b < 0) {
        rem + b
    } else {
        rem
    };
    Ok(Number::Int(BigInt::from(floored)))
}

/// Exact integer power for non-negative exponents, float power for negative
/// ones.
pub fn power(base: i64, exp: i64) -> Result<Number, ArithError> {
    if exp < 0 {
        if base == 0 {
            return Err(ArithError::DivisionByZero);
        }
        return Ok(Number::Float((base as f64).powf(exp as f64)));
    }

    match base {
        0 if exp == 0 => return Ok(Number::from(1_i64)),
        0 => return Ok(Number::from(0_i64)),
        1 => return Ok(Number::from(1_i64)),
        -1 => return Ok(Number::from(if exp % 2 == 0 { 1_i64 } else { -1 })),
        _ => {}
    }

    let base_bits = u64::from(u64::BITS - base.unsigned_abs().leading_zeros());
    let exp_small = u32::try_from(exp)
        .ok()
        .filter(|&e| base_bits.saturating_mul(u64::from(e)) <= MAX_POWER_BITS)
        .ok_or(ArithError::PowerTooLarge { base, exp })?;
    Ok(Number::Int(BigInt::from(base).pow(exp_small)))
}
