//! Suspension and closure windows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The active window of a suspension or closure order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspensionWindow {
    /// First day the order takes effect.
    pub suspended_from: NaiveDate,
    /// Last day of the order; `None` means open-ended.
    pub suspended_to: Option<NaiveDate>,
    /// Open-ended order with no planned end.
    pub is_indefinite: bool,
    /// The order has been lifted and no longer applies.
    pub is_dropped: bool,
}

impl SuspensionWindow {
    /// Applies the save-time invariant: indefinite windows carry no end date.
    #[must_use]
    pub const fn normalized(mut self) -> Self {
        if self.is_indefinite {
            self.suspended_to = None;
        }
        self
    }

    /// True if the order is in force on `date`.
    ///
    /// Dropped orders affect nothing; a missing end date extends the window
    /// indefinitely.
    #[must_use]
    pub fn affects_date(&self, date: NaiveDate) -> bool {
        if self.is_dropped {
            return false;
        }
        if date < self.suspended_from {
            return false;
        }
        self.suspended_to.is_none_or(|to| date <= to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_indefinite_window_loses_end_date() {
        let window = SuspensionWindow {
            suspended_from: d(2024, 1, 10),
            suspended_to: Some(d(2024, 3, 1)),
            is_indefinite: true,
            is_dropped: false,
        }
        .normalized();

        assert_eq!(window.suspended_to, None);
        assert!(window.affects_date(d(2024, 6, 1)));
        assert!(!window.affects_date(d(2023, 1, 1)));
    }

    #[test]
    fn test_bounded_window() {
        let window = SuspensionWindow {
            suspended_from: d(2024, 1, 10),
            suspended_to: Some(d(2024, 2, 10)),
            is_indefinite: false,
            is_dropped: false,
        };

        assert!(window.affects_date(d(2024, 1, 10)));
        assert!(window.affects_date(d(2024, 2, 10)));
        assert!(!window.affects_date(d(2024, 2, 11)));
        assert!(!window.affects_date(d(2024, 1, 9)));
    }

    #[test]
    fn test_dropped_window_affects_nothing() {
        let window = SuspensionWindow {
            suspended_from: d(2024, 1, 10),
            suspended_to: None,
            is_indefinite: true,
            is_dropped: true,
        };

        assert!(!window.affects_date(d(2024, 6, 1)));
    }

    #[test]
    fn test_bounded_order_keeps_end_date_after_normalize() {
        let window = SuspensionWindow {
            suspended_from: d(2024, 1, 10),
            suspended_to: Some(d(2024, 2, 10)),
            is_indefinite: false,
            is_dropped: false,
        }
        .normalized();

        assert_eq!(window.suspended_to, Some(d(2024, 2, 10)));
    }
}
