//! Money type for expense amounts
//!
//! Amounts are stored as signed cents (i64) so that category totals and the
//! grand total stay exact no matter how many records are summed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use thiserror::Error;

/// A monetary amount stored as cents (hundredths of the currency unit)
///
/// The ledger carries no currency; the symbol is a presentation concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use budget_planner::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_decimal_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from a fractional value in major units
    ///
    /// Rounds half away from zero to the nearest cent.
    ///
    /// # Examples
    /// ```
    /// use budget_planner::models::Money;
    /// assert_eq!(Money::from_major(7.25).unwrap().cents(), 725);
    /// assert_eq!(Money::from_major(-2.5).unwrap().cents(), -250);
    /// ```
    pub fn from_major(value: f64) -> Result<Self, MoneyParseError> {
        if !value.is_finite() {
            return Err(MoneyParseError::NotFinite);
        }

        let cents = (value * 100.0).round();
        if cents > i64::MAX as f64 || cents < i64::MIN as f64 {
            return Err(MoneyParseError::OutOfRange(value.to_string()));
        }

        Ok(Self(cents as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Narrow a widened cent count, returning `None` outside the i64 range
    pub fn from_wide_cents(cents: i128) -> Option<Self> {
        i64::try_from(cents).ok().map(Self)
    }

    fn saturating_from_wide(cents: i128) -> Self {
        Self(cents.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
    }

    /// Parse a money amount from user input
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", ".5".
    /// Digits past the second decimal place are truncated.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let input = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(input.to_string());

        let (negative, rest) = match input.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, input),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        if rest.is_empty() || rest.starts_with(['-', '+']) {
            return Err(invalid());
        }

        let cents = match rest.split_once('.') {
            Some((units_str, cents_str)) => {
                let units: i64 = if units_str.is_empty() {
                    0
                } else {
                    units_str.parse().map_err(|_| invalid())?
                };

                if cents_str.contains('.') || !cents_str.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                if units_str.is_empty() && cents_str.is_empty() {
                    return Err(invalid());
                }

                let cents: i64 = match cents_str.len() {
                    0 => 0,
                    1 => cents_str.parse::<i64>().map_err(|_| invalid())? * 10,
                    _ => cents_str[..2].parse().map_err(|_| invalid())?,
                };

                units
                    .checked_mul(100)
                    .and_then(|c| c.checked_add(cents))
                    .ok_or_else(|| MoneyParseError::OutOfRange(input.to_string()))?
            }
            None => rest
                .parse::<i64>()
                .map_err(|_| invalid())?
                .checked_mul(100)
                .ok_or_else(|| MoneyParseError::OutOfRange(input.to_string()))?,
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with exactly two decimals and no symbol ("10.50", "-3.25")
    pub fn to_decimal_string(&self) -> String {
        if self.is_negative() {
            format!("-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            format!("{}.{:02}", self.units(), self.cents_part())
        }
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format_with_symbol("$"))
    }
}

// Arithmetic saturates at the i64 cent range instead of wrapping or panicking.
// Ledger totals are accumulated wide by the aggregate calculator and never
// reach these bounds.

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let cents: i128 = iter.map(|m| i128::from(m.0)).sum();
        Self::saturating_from_wide(cents)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),

    #[error("Amount out of range: {0}")]
    OutOfRange(String),

    #[error("Amount must be a finite number")]
    NotFinite,
}
