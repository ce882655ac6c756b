//! Term windows and the date-range validators around them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::CalendarError;
use super::types::SessionScope;

/// An inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    /// First day of the range.
    pub start: NaiveDate,
    /// Last day of the range.
    pub end: NaiveDate,
}

impl DateSpan {
    /// Creates a span, rejecting ranges that do not end after they start.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CalendarError> {
        if start >= end {
            return Err(CalendarError::InvalidDateRange);
        }
        Ok(Self { start, end })
    }

    /// True if `date` falls within the span (inclusive).
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// True if the two spans share at least one day.
    ///
    /// Two ranges `[a_start, a_end]` and `[b_start, b_end]` overlap if
    /// `a_start <= b_end AND a_end >= b_start`.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && self.end >= other.start
    }
}

/// The three terms of an academic session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermNumber {
    /// First term.
    First,
    /// Second term.
    Second,
    /// Third term.
    Third,
}

impl TermNumber {
    /// Numeric form (1-3).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }
}

impl TryFrom<i16> for TermNumber {
    type Error = CalendarError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            3 => Ok(Self::Third),
            _ => Err(CalendarError::InvalidTermNumber),
        }
    }
}

impl std::fmt::Display for TermNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => f.write_str("First Term"),
            Self::Second => f.write_str("Second Term"),
            Self::Third => f.write_str("Third Term"),
        }
    }
}

/// A term's number and date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermWindow {
    /// Which of the three terms this is.
    pub number: TermNumber,
    /// First day of the term.
    pub start_date: NaiveDate,
    /// Last day of the term.
    pub end_date: NaiveDate,
}

impl TermWindow {
    /// The term's date range as a span.
    #[must_use]
    pub const fn span(&self) -> DateSpan {
        DateSpan {
            start: self.start_date,
            end: self.end_date,
        }
    }
}

/// Validates that a session's date range is well-formed.
pub fn validate_session_span(start_date: NaiveDate, end_date: NaiveDate) -> Result<DateSpan, CalendarError> {
    DateSpan::new(start_date, end_date)
}

/// Validates the scope/school-link invariant for a session.
///
/// Individual-scoped sessions must reference exactly one school; every other
/// scope must not reference any.
pub fn validate_scope_link(scope: SessionScope, school_id: Option<Uuid>) -> Result<(), CalendarError> {
    match (scope, school_id) {
        (SessionScope::Individual, None) => Err(CalendarError::IndividualScopeRequiresSchool),
        (SessionScope::Individual, Some(_)) => Ok(()),
        (_, Some(_)) => Err(CalendarError::SchoolForbiddenForScope),
        (_, None) => Ok(()),
    }
}

/// Validates a term against its session's span and its sibling terms.
///
/// Checks, in order: the term's own range, containment within the session,
/// term-number uniqueness, overlap with siblings, and strict ordering
/// (term N starts after term N-1 ends).
pub fn validate_term(
    session: &DateSpan,
    term: &TermWindow,
    siblings: &[TermWindow],
) -> Result<(), CalendarError> {
    let span = DateSpan::new(term.start_date, term.end_date)?;

    if span.start < session.start {
        return Err(CalendarError::TermStartsBeforeSession);
    }
    if span.end > session.end {
        return Err(CalendarError::TermEndsAfterSession);
    }

    for sibling in siblings {
        if sibling.number == term.number {
            return Err(CalendarError::DuplicateTermNumber);
        }
    }

    for sibling in siblings {
        if span.overlaps(&sibling.span()) {
            return Err(CalendarError::OverlappingTerms {
                other: sibling.number.number(),
            });
        }
    }

    for sibling in siblings {
        if sibling.number < term.number && span.start <= sibling.end_date {
            return Err(CalendarError::OutOfOrderTerms {
                number: term.number.number(),
                previous: sibling.number.number(),
            });
        }
        if sibling.number > term.number && sibling.start_date <= span.end {
            return Err(CalendarError::OutOfOrderTerms {
                number: sibling.number.number(),
                previous: term.number.number(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn session() -> DateSpan {
        DateSpan::new(d(2026, 9, 1), d(2027, 7, 15)).unwrap()
    }

    fn term(number: TermNumber, start: NaiveDate, end: NaiveDate) -> TermWindow {
        TermWindow {
            number,
            start_date: start,
            end_date: end,
        }
    }

    #[test]
    fn test_session_span_rejects_inverted_range() {
        assert_eq!(
            validate_session_span(d(2027, 1, 1), d(2026, 1, 1)),
            Err(CalendarError::InvalidDateRange)
        );
        assert_eq!(
            validate_session_span(d(2026, 1, 1), d(2026, 1, 1)),
            Err(CalendarError::InvalidDateRange)
        );
    }

    #[test]
    fn test_first_term_within_session_is_accepted() {
        let t1 = term(TermNumber::First, d(2026, 9, 7), d(2026, 12, 18));
        assert_eq!(validate_term(&session(), &t1, &[]), Ok(()));
    }

    #[test]
    fn test_term_outside_session_is_rejected() {
        let early = term(TermNumber::First, d(2026, 8, 20), d(2026, 12, 18));
        assert_eq!(
            validate_term(&session(), &early, &[]),
            Err(CalendarError::TermStartsBeforeSession)
        );

        let late = term(TermNumber::Third, d(2027, 4, 20), d(2027, 8, 1));
        assert_eq!(
            validate_term(&session(), &late, &[]),
            Err(CalendarError::TermEndsAfterSession)
        );
    }

    #[test]
    fn test_duplicate_term_number_is_rejected() {
        let t1 = term(TermNumber::First, d(2026, 9, 7), d(2026, 12, 18));
        let again = term(TermNumber::First, d(2027, 1, 5), d(2027, 4, 2));
        assert_eq!(
            validate_term(&session(), &again, &[t1]),
            Err(CalendarError::DuplicateTermNumber)
        );
    }

    #[test]
    fn test_overlapping_terms_are_rejected() {
        let t1 = term(TermNumber::First, d(2026, 9, 7), d(2026, 12, 18));
        let t2 = term(TermNumber::Second, d(2026, 12, 10), d(2027, 4, 2));
        assert_eq!(
            validate_term(&session(), &t2, &[t1]),
            Err(CalendarError::OverlappingTerms { other: 1 })
        );
    }

    #[test]
    fn test_second_term_must_follow_first() {
        let t2 = term(TermNumber::Second, d(2027, 1, 5), d(2027, 4, 2));
        let t3_before_t2 = term(TermNumber::Third, d(2026, 9, 7), d(2026, 12, 18));
        assert_eq!(
            validate_term(&session(), &t3_before_t2, &[t2]),
            Err(CalendarError::OutOfOrderTerms { number: 3, previous: 2 })
        );
    }

    #[test]
    fn test_full_three_term_calendar_is_accepted() {
        let t1 = term(TermNumber::First, d(2026, 9, 7), d(2026, 12, 18));
        let t2 = term(TermNumber::Second, d(2027, 1, 5), d(2027, 4, 2));
        let t3 = term(TermNumber::Third, d(2027, 4, 20), d(2027, 7, 10));

        assert_eq!(validate_term(&session(), &t1, &[]), Ok(()));
        assert_eq!(validate_term(&session(), &t2, &[t1]), Ok(()));
        assert_eq!(validate_term(&session(), &t3, &[t1, t2]), Ok(()));
    }

    #[test]
    fn test_term_number_try_from() {
        assert_eq!(TermNumber::try_from(1_i16), Ok(TermNumber::First));
        assert_eq!(TermNumber::try_from(3_i16), Ok(TermNumber::Third));
        assert_eq!(TermNumber::try_from(4_i16), Err(CalendarError::InvalidTermNumber));
    }

    #[test]
    fn test_scope_link_validation() {
        let school = Some(Uuid::new_v4());
        assert_eq!(validate_scope_link(SessionScope::Individual, school), Ok(()));
        assert_eq!(
            validate_scope_link(SessionScope::Individual, None),
            Err(CalendarError::IndividualScopeRequiresSchool)
        );
        assert_eq!(
            validate_scope_link(SessionScope::Public, school),
            Err(CalendarError::SchoolForbiddenForScope)
        );
        assert_eq!(validate_scope_link(SessionScope::All, None), Ok(()));
    }
}
