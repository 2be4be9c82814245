//! Fixed point baht amounts.

use std::fmt::Display;
use std::str::FromStr;

use crate::Error;

/// A non-negative amount of baht, stored as satang (1/100 baht).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn from_satang(satang: u64) -> Self {
        Self(satang)
    }

    /// Round a floating point baht value to the nearest satang.
    ///
    /// Rounds the exact binary value of `baht` half up, so `2.675` (stored as
    /// 2.67499...) gives `2.67` and `0.125` gives `0.13`, as fixed two decimal
    /// formatting does. Negative, non-finite and out of range values are
    /// rejected.
    pub fn from_baht(baht: f64) -> Result<Self, Error> {
        let invalid = || Error::InvalidAmount(baht.to_string());
        if !baht.is_finite() || baht.is_sign_negative() {
            return Err(invalid());
        }

        // baht == mantissa * 2^exp
        let bits = baht.to_bits();
        let biased = ((bits >> 52) & 0x7FF) as i32;
        let fraction = bits & ((1 << 52) - 1);
        let (mantissa, exp) = match biased {
            0 => (fraction as u128, -1074),
            _ => ((fraction | (1 << 52)) as u128, biased - 1075),
        };

        let satang = if exp >= 0 {
            if exp > 64 {
                return Err(invalid());
            }
            (mantissa << exp) * 100
        } else {
            // floor(mantissa * 100 / 2^k + 1/2), anything past 2^62 is below half a satang
            let k = -exp;
            if k > 62 {
                0
            } else {
                (mantissa * 200 + (1 << k)) >> (k + 1)
            }
        };
        u64::try_from(satang).map(Self).map_err(|_| invalid())
    }

    pub fn satang(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

/// Two decimal wire format, e.g. `150.00`
impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Parse a plain decimal baht value with at most two fraction digits
impl FromStr for Amount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidAmount(s.to_string());
        let (whole, frac) = s.split_once('.').unwrap_or((s, ""));
        if whole.is_empty()
            || frac.len() > 2
            || (s.contains('.') && frac.is_empty())
            || !whole.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let whole: u64 = whole.parse().map_err(|_| invalid())?;
        let frac: u64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };
        whole
            .checked_mul(100)
            .and_then(|satang| satang.checked_add(frac))
            .map(Self)
            .ok_or_else(invalid)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Amount {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Amount {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
