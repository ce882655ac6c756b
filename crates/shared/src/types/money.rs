//! Money type holding amounts in integer kobo.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts are stored and computed as `i64` kobo (1 Naira = 100 kobo).

use serde::{Deserialize, Serialize};

/// A monetary amount in kobo.
///
/// The inner value is the amount in the smallest currency unit, so
/// `Money::from_kobo(150_050)` is ₦1,500.50.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero naira.
    pub const ZERO: Self = Self(0);

    /// Creates an amount from kobo.
    #[must_use]
    pub const fn from_kobo(kobo: i64) -> Self {
        Self(kobo)
    }

    /// Creates an amount from whole naira.
    #[must_use]
    pub const fn from_naira(naira: i64) -> Self {
        Self(naira * 100)
    }

    /// Returns the amount in kobo.
    #[must_use]
    pub const fn kobo(self) -> i64 {
        self.0
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Checked addition; `None` on overflow.
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction; `None` on overflow.
    #[must_use]
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Sums an iterator of amounts, returning `None` on overflow.
    #[must_use]
    pub fn checked_sum<I: IntoIterator<Item = Self>>(amounts: I) -> Option<Self> {
        amounts
            .into_iter()
            .try_fold(Self::ZERO, Self::checked_add)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let naira = self.0 / 100;
        let kobo = (self.0 % 100).unsigned_abs();
        write!(f, "\u{20a6}{naira}.{kobo:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_naira_is_hundred_kobo() {
        assert_eq!(Money::from_naira(25).kobo(), 2_500);
    }

    #[test]
    fn test_checked_add() {
        let a = Money::from_kobo(1_050);
        let b = Money::from_kobo(950);
        assert_eq!(a.checked_add(b), Some(Money::from_kobo(2_000)));
        assert_eq!(Money::from_kobo(i64::MAX).checked_add(Money::from_kobo(1)), None);
    }

    #[test]
    fn test_checked_sum() {
        let total = Money::checked_sum([
            Money::from_naira(100),
            Money::from_naira(250),
            Money::from_kobo(50),
        ]);
        assert_eq!(total, Some(Money::from_kobo(35_050)));
    }

    #[test]
    fn test_display_formats_kobo() {
        assert_eq!(Money::from_kobo(150_050).to_string(), "\u{20a6}1500.50");
        assert_eq!(Money::ZERO.to_string(), "\u{20a6}0.00");
    }

    #[test]
    fn test_is_negative() {
        assert!(Money::from_kobo(-1).is_negative());
        assert!(!Money::ZERO.is_negative());
    }
}
