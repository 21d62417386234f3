// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Numeric field rules.
//!
//! Every number crosses the JSON boundary as a decimal string and is parsed
//! strictly: no floats, exponents, `+` signs, whitespace or separators.

use std::fmt;
use std::ops::{Add, AddAssign};

use num_bigint::{BigInt, Sign};

use crate::Error;

/// Number of fractional digits carried by [`Dec`].
pub const DEC_PRECISION: usize = 18;

fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_bigint(field: &'static str, text: &str) -> Result<BigInt, Error> {
    if !is_integer(text) {
        return Err(Error::unparsable(field, text));
    }
    BigInt::parse_bytes(text.as_bytes(), 10)
        .ok_or_else(|| Error::unparsable(field, text))
}

/// Parses an unsigned 64-bit decimal string.
pub fn parse_u64(field: &'static str, text: &str) -> Result<u64, Error> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::unparsable(field, text));
    }
    text.parse().map_err(|_| Error::unparsable(field, text))
}

/// Parses a signed 64-bit decimal string.
pub fn parse_i64(field: &'static str, text: &str) -> Result<i64, Error> {
    if !is_integer(text) {
        return Err(Error::unparsable(field, text));
    }
    text.parse().map_err(|_| Error::unparsable(field, text))
}

/// Arbitrary-precision integer.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Int(BigInt);

impl Int {
    /// Parses a `-?[0-9]+` decimal string.
    pub fn parse(field: &'static str, text: &str) -> Result<Self, Error> {
        parse_bigint(field, text).map(Self)
    }

    /// The underlying integer.
    pub fn as_bigint(&self) -> &BigInt {
        &self.0
    }

    /// Whether the value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.sign() == Sign::NoSign
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<BigInt> for Int {
    fn from(value: BigInt) -> Self {
        Self(value)
    }
}

impl From<u64> for Int {
    fn from(value: u64) -> Self {
        Self(value.into())
    }
}

impl From<i64> for Int {
    fn from(value: i64) -> Self {
        Self(value.into())
    }
}

impl From<u128> for Int {
    fn from(value: u128) -> Self {
        Self(value.into())
    }
}

impl Add for Int {
    type Output = Int;

    fn add(self, rhs: Int) -> Int {
        Int(self.0 + rhs.0)
    }
}

impl AddAssign<&Int> for Int {
    fn add_assign(&mut self, rhs: &Int) {
        self.0 += &rhs.0;
    }
}

/// Fixed-point decimal with [`DEC_PRECISION`] fractional digits.
///
/// JSON carries the decimal form (`"1.500000000000000000"`); Protobuf
/// carries the scaled integer (`"1500000000000000000"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dec(BigInt);

impl Dec {
    /// Builds a decimal from its value scaled by 10^18.
    pub fn from_scaled(scaled: BigInt) -> Self {
        Self(scaled)
    }

    /// Builds a whole-number decimal.
    pub fn from_integer(value: i64) -> Self {
        let scale = BigInt::from(10u64).pow(DEC_PRECISION as u32);
        Self(BigInt::from(value) * scale)
    }

    /// Parses `-?[0-9]+(\.[0-9]{1,18})?`.
    pub fn parse(field: &'static str, text: &str) -> Result<Self, Error> {
        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };
        let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        let fraction_ok = !unsigned.contains('.')
            || (!fraction.is_empty() && fraction.len() <= DEC_PRECISION);
        if whole.is_empty()
            || !digits(whole)
            || !digits(fraction)
            || !fraction_ok
        {
            return Err(Error::unparsable(field, text));
        }

        let scaled = format!("{whole}{fraction:0<DEC_PRECISION$}");
        let magnitude = BigInt::parse_bytes(scaled.as_bytes(), 10)
            .ok_or_else(|| Error::unparsable(field, text))?;
        Ok(Self(if negative { -magnitude } else { magnitude }))
    }

    /// Parses the scaled integer form.
    pub fn parse_scaled(
        field: &'static str,
        text: &str,
    ) -> Result<Self, Error> {
        parse_bigint(field, text).map(Self)
    }

    /// The scaled integer form.
    pub fn to_scaled_string(&self) -> String {
        self.0.to_string()
    }

    /// The value scaled by 10^18.
    pub fn scaled(&self) -> &BigInt {
        &self.0
    }
}

impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.0.magnitude().to_string();
        let padded = format!("{magnitude:0>width$}", width = DEC_PRECISION + 1);
        let (whole, fraction) = padded.split_at(padded.len() - DEC_PRECISION);
        let sign = if self.0.sign() == Sign::Minus { "-" } else { "" };
        write!(f, "{sign}{whole}.{fraction}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u64_rejects_signs_and_garbage() {
        assert_eq!(parse_u64("n", "42"), Ok(42));
        assert_eq!(parse_u64("n", "18446744073709551615"), Ok(u64::MAX));
        for bad in ["", "+1", "-1", " 1", "1e3", "1_000", "18446744073709551616"] {
            assert_eq!(parse_u64("n", bad), Err(Error::unparsable("n", bad)));
        }
    }

    #[test]
    fn i64_accepts_leading_minus() {
        assert_eq!(parse_i64("n", "-9223372036854775808"), Ok(i64::MIN));
        assert!(parse_i64("n", "--1").is_err());
        assert!(parse_i64("n", "-").is_err());
    }

    #[test]
    fn int_is_arbitrary_precision() {
        let big = "123456789012345678901234567890";
        assert_eq!(Int::parse("amount", big).map(|i| i.to_string()), Ok(big.into()));
        assert_eq!(
            Int::parse("amount", "1.0"),
            Err(Error::UnparsableNumber {
                field: "amount",
                value: "1.0".into()
            })
        );
    }

    #[test]
    fn dec_renders_eighteen_digits() -> Result<(), Error> {
        assert_eq!(Dec::parse("w", "1.5")?.to_string(), "1.500000000000000000");
        assert_eq!(Dec::parse("w", "0")?.to_string(), "0.000000000000000000");
        assert_eq!(
            Dec::parse("w", "-0.000000000000000001")?.to_string(),
            "-0.000000000000000001"
        );
        assert_eq!(Dec::parse("w", "1.5")?.to_scaled_string(), "1500000000000000000");
        assert_eq!(Dec::from_integer(2), Dec::parse_scaled("w", "2000000000000000000")?);
        Ok(())
    }

    #[test]
    fn dec_rejects_excess_precision() {
        for bad in ["1.0000000000000000001", "1.", ".5", "1e2", "", "-", "1.-5"] {
            assert!(Dec::parse("w", bad).is_err(), "{bad}");
        }
    }
}
