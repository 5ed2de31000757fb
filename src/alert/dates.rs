//! Which two sessions to compare, given the current market-local time.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone};

use crate::calendar::{BusinessCalendar, TradingDate, days_between};

/// The pair of trading dates whose closes are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonDates {
    /// Most recent completed session.
    pub base: NaiveDate,
    /// The session before `base`.
    pub previous: NaiveDate,
}

/// Result of the readiness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateDecision {
    /// Nothing new to report: the last completed session is not yesterday.
    NotReady {
        /// Market-local date of `now`.
        today: NaiveDate,
        /// Most recent business day on or before the as-of date.
        last_session: NaiveDate,
    },
    /// Compare these two sessions.
    Compare(ComparisonDates),
}

/// The date whose session is known to have closed at `now`.
///
/// Before `close_cutoff` the current session is still open, so the as-of date
/// is yesterday. Without a cutoff it is always today.
pub fn as_of_date<Tz: TimeZone>(now: &DateTime<Tz>, close_cutoff: Option<NaiveTime>) -> NaiveDate {
    let today = now.trading_date();
    match close_cutoff {
        Some(cutoff) if now.time() < cutoff => today.pred_opt().unwrap_or(today),
        _ => today,
    }
}

/// Decides whether a run at `now` should compare closes, and which ones.
///
/// The run proceeds only when the most recent business day on or before the
/// as-of date is exactly one day before today. Base and previous dates are then
/// one and two business days before today, skipping weekends and holidays.
pub fn select_dates<Tz: TimeZone>(
    calendar: &BusinessCalendar,
    now: &DateTime<Tz>,
    close_cutoff: Option<NaiveTime>,
) -> DateDecision {
    let today = now.trading_date();
    let last_session = calendar.most_recent_business_day(as_of_date(now, close_cutoff));

    if days_between(last_session, today) != 1 {
        return DateDecision::NotReady {
            today,
            last_session,
        };
    }

    DateDecision::Compare(ComparisonDates {
        base: calendar.shift_by_business_days(today, 1, true, true),
        previous: calendar.shift_by_business_days(today, 2, true, true),
    })
}
