//! Trading-day arithmetic.
//!
//! A [`BusinessCalendar`] pairs a weekend mask with an immutable holiday set.
//! Every operation works on the calendar date only: datetimes are reduced to
//! their local date (see [`TradingDate`]) before anything else happens.
//!
//! Note that [`BusinessCalendar::is_business_day`] and
//! [`BusinessCalendar::most_recent_business_day`] only look at the weekend
//! mask, while [`BusinessCalendar::shift_by_business_days`] can also skip
//! holidays. Use [`BusinessCalendar::is_trading_day`] when both matter.

mod holidays;

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, TimeZone, Weekday};

use crate::core::AlertError;

/// Anything that can be reduced to a calendar date in its own timezone.
pub trait TradingDate {
    /// The local calendar date, with any time-of-day dropped.
    fn trading_date(&self) -> NaiveDate;
}

impl TradingDate for NaiveDate {
    fn trading_date(&self) -> NaiveDate {
        *self
    }
}

impl TradingDate for NaiveDateTime {
    fn trading_date(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> TradingDate for DateTime<Tz> {
    fn trading_date(&self) -> NaiveDate {
        self.date_naive()
    }
}

/// The set of weekdays on which the market trades.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekMask(u8);

impl WeekMask {
    /// Monday through Friday.
    pub const WEEKDAYS: Self = Self(0b001_1111);
    /// Every day of the week.
    pub const ALL: Self = Self(0b111_1111);

    /// Builds a mask from an explicit list of open days.
    pub fn from_days(days: &[Weekday]) -> Self {
        Self(
            days.iter()
                .fold(0, |acc, d| acc | (1 << d.num_days_from_monday())),
        )
    }

    /// Whether the market is open on `weekday`.
    #[must_use]
    pub fn contains(self, weekday: Weekday) -> bool {
        self.0 & (1 << weekday.num_days_from_monday()) != 0
    }

    const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Weekend mask plus holiday set, built once and never mutated.
#[derive(Debug, Clone)]
pub struct BusinessCalendar {
    weekmask: WeekMask,
    holidays: BTreeMap<NaiveDate, &'static str>,
}

impl BusinessCalendar {
    /// Monday–Friday calendar with US federal holidays from 1970 through 2200.
    pub fn us_federal() -> Self {
        let (sy, sm, sd) = holidays::DEFAULT_START;
        let (ey, em, ed) = holidays::DEFAULT_END;
        let start = NaiveDate::from_ymd_opt(sy, sm, sd).unwrap_or(NaiveDate::MIN);
        let end = NaiveDate::from_ymd_opt(ey, em, ed).unwrap_or(NaiveDate::MAX);
        Self::us_federal_between(start, end)
    }

    /// Monday–Friday calendar with US federal holidays observed within `start..=end`.
    pub fn us_federal_between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            weekmask: WeekMask::WEEKDAYS,
            holidays: holidays::expand(holidays::US_FEDERAL, start, end),
        }
    }

    /// A calendar with an explicit mask and holiday list.
    ///
    /// # Errors
    ///
    /// Returns `AlertError::Config` if `weekmask` has no open days.
    pub fn new<I>(weekmask: WeekMask, holidays: I) -> Result<Self, AlertError>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        if weekmask.is_empty() {
            return Err(AlertError::Config("week mask has no trading days".into()));
        }
        Ok(Self {
            weekmask,
            holidays: holidays.into_iter().map(|d| (d, "holiday")).collect(),
        })
    }

    /// The weekend mask used by this calendar.
    #[must_use]
    pub const fn weekmask(&self) -> WeekMask {
        self.weekmask
    }

    /// Whether `date` is a listed holiday.
    pub fn is_holiday(&self, date: impl TradingDate) -> bool {
        self.holidays.contains_key(&date.trading_date())
    }

    /// Name of the holiday on `date`, if any.
    pub fn holiday_name(&self, date: impl TradingDate) -> Option<&'static str> {
        self.holidays.get(&date.trading_date()).copied()
    }

    /// `true` iff `date` falls on an open day of the week. Holidays are not consulted.
    pub fn is_business_day(&self, date: impl TradingDate) -> bool {
        self.weekmask.contains(date.trading_date().weekday())
    }

    /// `true` iff `date` is an open weekday and not a holiday.
    pub fn is_trading_day(&self, date: impl TradingDate) -> bool {
        let date = date.trading_date();
        self.is_business_day(date) && !self.is_holiday(date)
    }

    /// Rolls `date` back to the closest business day on or before it.
    /// Only the weekend mask is applied.
    pub fn most_recent_business_day(&self, date: impl TradingDate) -> NaiveDate {
        let mut day = date.trading_date();
        while !self.is_business_day(day) {
            match day.pred_opt() {
                Some(prev) => day = prev,
                None => break,
            }
        }
        day
    }

    /// Moves `date` back by `n` days.
    ///
    /// With both flags off this is plain calendar subtraction. Otherwise it walks
    /// back `n` open days, where weekends only close the market if
    /// `skip_weekends` is set and holidays only if `skip_holidays` is set. A
    /// starting date that is itself closed rolls back to the previous open day
    /// as the first step. `n == 0` returns `date` unchanged.
    pub fn shift_by_business_days(
        &self,
        date: impl TradingDate,
        n: u32,
        skip_weekends: bool,
        skip_holidays: bool,
    ) -> NaiveDate {
        let start = date.trading_date();

        if !skip_weekends && !skip_holidays {
            return start
                .checked_sub_days(Days::new(u64::from(n)))
                .unwrap_or(NaiveDate::MIN);
        }

        let mask = if skip_weekends {
            self.weekmask
        } else {
            WeekMask::ALL
        };
        let is_open = |d: NaiveDate| {
            mask.contains(d.weekday()) && !(skip_holidays && self.holidays.contains_key(&d))
        };

        let mut day = start;
        let mut remaining = n;
        while remaining > 0 {
            let Some(prev) = day.pred_opt() else {
                break;
            };
            day = prev;
            if is_open(day) {
                remaining -= 1;
            }
        }
        day
    }
}

/// Signed day count `end - start` on the date portion only.
pub fn days_between(start: impl TradingDate, end: impl TradingDate) -> i64 {
    (end.trading_date() - start.trading_date()).num_days()
}
