//! Unsigned 128-bit arithmetic over big-endian byte arrays.
//!
//! The backend is selected at build time: [`NativeCalculator`] uses `u128`, and
//! [`BigIntCalculator`] (crate feature `bigint`) uses arbitrary precision integers.
//! [`DefaultCalculator`] names whichever one the build enables.

use std::cmp::Ordering;

use crate::Error;

/// Arithmetic on 128-bit unsigned integers stored as 16 big-endian bytes.
pub trait Calculator {
    /// Returns the decimal representation without leading zeros.
    fn to_decimal(value: &[u8; 16]) -> String;

    /// Parses an unsigned decimal string.
    ///
    /// Fails with [`Error::OutOfRange`] for negative values or values above 2^128 - 1, and with
    /// [`Error::InvalidFormat`] if `src` is not a decimal integer.
    fn from_decimal(src: &str) -> Result<[u8; 16], Error>;

    /// Adds two values, failing with [`Error::OutOfRange`] on overflow.
    fn checked_add(lhs: &[u8; 16], rhs: &[u8; 16]) -> Result<[u8; 16], Error>;

    /// Compares two values as unsigned integers.
    fn compare(lhs: &[u8; 16], rhs: &[u8; 16]) -> Ordering;
}

#[cfg(not(feature = "bigint"))]
/// The calculator backend enabled in this build.
pub type DefaultCalculator = NativeCalculator;

#[cfg(feature = "bigint")]
/// The calculator backend enabled in this build.
pub type DefaultCalculator = BigIntCalculator;

/// Splits an optional sign off `src` and checks the remainder is made of ASCII digits.
fn digits(src: &str) -> Result<&str, Error> {
    let (negative, body) = match src.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, src),
    };
    if body.is_empty() || !body.bytes().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidFormat(src.to_owned()));
    }
    if negative && body.bytes().any(|c| c != b'0') {
        return Err(Error::OutOfRange);
    }
    Ok(body)
}

/// Calculator backed by the native `u128` type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct NativeCalculator;

impl Calculator for NativeCalculator {
    fn to_decimal(value: &[u8; 16]) -> String {
        u128::from_be_bytes(*value).to_string()
    }

    fn from_decimal(src: &str) -> Result<[u8; 16], Error> {
        let body = digits(src)?;
        let mut acc = 0u128;
        for c in body.bytes() {
            acc = acc
                .checked_mul(10)
                .and_then(|n| n.checked_add(u128::from(c - b'0')))
                .ok_or(Error::OutOfRange)?;
        }
        Ok(acc.to_be_bytes())
    }

    fn checked_add(lhs: &[u8; 16], rhs: &[u8; 16]) -> Result<[u8; 16], Error> {
        u128::from_be_bytes(*lhs)
            .checked_add(u128::from_be_bytes(*rhs))
            .map(u128::to_be_bytes)
            .ok_or(Error::OutOfRange)
    }

    fn compare(lhs: &[u8; 16], rhs: &[u8; 16]) -> Ordering {
        u128::from_be_bytes(*lhs).cmp(&u128::from_be_bytes(*rhs))
    }
}

#[cfg(feature = "bigint")]
#[cfg_attr(docsrs, doc(cfg(feature = "bigint")))]
pub use bigint::BigIntCalculator;

#[cfg(feature = "bigint")]
mod bigint {
    use std::cmp::Ordering;

    use num_bigint::BigUint;

    use super::{digits, Calculator};
    use crate::Error;

    /// Calculator backed by arbitrary precision integers from `num-bigint`.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct BigIntCalculator;

    /// Writes `n` into 16 big-endian bytes, failing if it needs more than 128 bits.
    fn to_array(n: &BigUint) -> Result<[u8; 16], Error> {
        if n.bits() > 128 {
            return Err(Error::OutOfRange);
        }
        let bytes = n.to_bytes_be();
        let mut dst = [0u8; 16];
        dst[16 - bytes.len()..].copy_from_slice(&bytes);
        Ok(dst)
    }

    impl Calculator for BigIntCalculator {
        fn to_decimal(value: &[u8; 16]) -> String {
            BigUint::from_bytes_be(value).to_str_radix(10)
        }

        fn from_decimal(src: &str) -> Result<[u8; 16], Error> {
            let body = digits(src)?;
            let n = BigUint::parse_bytes(body.as_bytes(), 10)
                .ok_or_else(|| Error::InvalidFormat(src.to_owned()))?;
            to_array(&n)
        }

        fn checked_add(lhs: &[u8; 16], rhs: &[u8; 16]) -> Result<[u8; 16], Error> {
            to_array(&(BigUint::from_bytes_be(lhs) + BigUint::from_bytes_be(rhs)))
        }

        fn compare(lhs: &[u8; 16], rhs: &[u8; 16]) -> Ordering {
            BigUint::from_bytes_be(lhs).cmp(&BigUint::from_bytes_be(rhs))
        }
    }
}
