//! Property-based tests for term window validation.

use chrono::NaiveDate;
use proptest::prelude::*;

use super::error::CalendarError;
use super::term::{validate_term, DateSpan, TermNumber, TermWindow};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
}

/// A session span long enough to hold any generated calendar.
fn session_span() -> DateSpan {
    DateSpan::new(base_date(), base_date() + chrono::Days::new(2_000)).unwrap()
}

/// Generates three ordered, gap-separated term windows inside the session.
///
/// Each term gets a positive length and at least one day of gap before the
/// next, so the full calendar is always valid.
fn ordered_terms() -> impl Strategy<Value = [TermWindow; 3]> {
    ([1u64..200, 1u64..100, 1u64..200, 1u64..100, 1u64..200], 0u64..30).prop_map(
        |([len1, gap1, len2, gap2, len3], lead)| {
            let start1 = base_date() + chrono::Days::new(lead);
            let end1 = start1 + chrono::Days::new(len1);
            let start2 = end1 + chrono::Days::new(gap1);
            let end2 = start2 + chrono::Days::new(len2);
            let start3 = end2 + chrono::Days::new(gap2);
            let end3 = start3 + chrono::Days::new(len3);
            [
                TermWindow { number: TermNumber::First, start_date: start1, end_date: end1 },
                TermWindow { number: TermNumber::Second, start_date: start2, end_date: end2 },
                TermWindow { number: TermNumber::Third, start_date: start3, end_date: end3 },
            ]
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Any ordered, gap-separated three-term calendar validates, and no two
    /// accepted term ranges overlap.
    #[test]
    fn prop_ordered_calendar_validates(terms in ordered_terms()) {
        let session = session_span();
        let [t1, t2, t3] = terms;

        prop_assert_eq!(validate_term(&session, &t1, &[]), Ok(()));
        prop_assert_eq!(validate_term(&session, &t2, &[t1]), Ok(()));
        prop_assert_eq!(validate_term(&session, &t3, &[t1, t2]), Ok(()));

        prop_assert!(!t1.span().overlaps(&t2.span()));
        prop_assert!(!t2.span().overlaps(&t3.span()));
        prop_assert!(!t1.span().overlaps(&t3.span()));
    }

    /// Dragging a later term's start back to (or before) the previous term's
    /// end is always rejected.
    #[test]
    fn prop_touching_terms_are_rejected(terms in ordered_terms()) {
        let session = session_span();
        let [t1, t2, _] = terms;

        let touching = TermWindow {
            number: TermNumber::Second,
            start_date: t1.end_date,
            end_date: t2.end_date.max(t1.end_date + chrono::Days::new(1)),
        };

        let result = validate_term(&session, &touching, &[t1]);
        prop_assert!(
            matches!(
                result,
                Err(CalendarError::OverlappingTerms { .. } | CalendarError::OutOfOrderTerms { .. })
            ),
            "expected rejection, got {:?}",
            result
        );
    }

    /// A term reaching past the session end is rejected with the
    /// field-scoped end-date error.
    #[test]
    fn prop_term_past_session_end_is_rejected(overshoot in 1u64..500) {
        let session = session_span();
        let term = TermWindow {
            number: TermNumber::First,
            start_date: session.start,
            end_date: session.end + chrono::Days::new(overshoot),
        };

        prop_assert_eq!(
            validate_term(&session, &term, &[]),
            Err(CalendarError::TermEndsAfterSession)
        );
    }
}
