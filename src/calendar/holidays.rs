//! US federal holiday rules.
//!
//! Dates are generated from rules rather than listed, so any year in the
//! configured range is covered. Fixed-date holidays that land on a weekend are
//! observed on the nearest weekday (Saturday → Friday, Sunday → Monday), which
//! can pull New Year's Day back into the previous December.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// How a fixed-date holiday moves when it falls on a weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Observance {
    /// Saturday → preceding Friday, Sunday → following Monday.
    NearestWorkday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DayRule {
    Fixed {
        month: u32,
        day: u32,
        observance: Observance,
    },
    NthWeekday {
        month: u32,
        weekday: Weekday,
        nth: u8,
    },
    LastWeekday {
        month: u32,
        weekday: Weekday,
    },
}

/// One named holiday and the first year it applies.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HolidayRule {
    pub(crate) name: &'static str,
    rule: DayRule,
    /// Observed dates before this are ignored.
    since: Option<(i32, u32, u32)>,
}

const fn fixed(name: &'static str, month: u32, day: u32) -> HolidayRule {
    HolidayRule {
        name,
        rule: DayRule::Fixed {
            month,
            day,
            observance: Observance::NearestWorkday,
        },
        since: None,
    }
}

const fn nth(name: &'static str, month: u32, weekday: Weekday, nth: u8) -> HolidayRule {
    HolidayRule {
        name,
        rule: DayRule::NthWeekday {
            month,
            weekday,
            nth,
        },
        since: None,
    }
}

const fn since(mut rule: HolidayRule, year: i32, month: u32, day: u32) -> HolidayRule {
    rule.since = Some((year, month, day));
    rule
}

pub(crate) const US_FEDERAL: &[HolidayRule] = &[
    fixed("New Year's Day", 1, 1),
    since(nth("Martin Luther King Jr. Day", 1, Weekday::Mon, 3), 1986, 1, 1),
    since(nth("Presidents Day", 2, Weekday::Mon, 3), 1971, 1, 1),
    since(
        HolidayRule {
            name: "Memorial Day",
            rule: DayRule::LastWeekday {
                month: 5,
                weekday: Weekday::Mon,
            },
            since: None,
        },
        1971,
        1,
        1,
    ),
    since(fixed("Juneteenth National Independence Day", 6, 19), 2021, 6, 18),
    fixed("Independence Day", 7, 4),
    nth("Labor Day", 9, Weekday::Mon, 1),
    nth("Columbus Day", 10, Weekday::Mon, 2),
    fixed("Veterans Day", 11, 11),
    nth("Thanksgiving Day", 11, Weekday::Thu, 4),
    fixed("Christmas Day", 12, 25),
];

/// First date covered by the default calendar.
pub(crate) const DEFAULT_START: (i32, u32, u32) = (1970, 1, 1);
/// Last date covered by the default calendar.
pub(crate) const DEFAULT_END: (i32, u32, u32) = (2200, 12, 31);

impl HolidayRule {
    /// Observed date of this holiday for `year`, if the rule yields one.
    fn observed_in(&self, year: i32) -> Option<NaiveDate> {
        match self.rule {
            DayRule::Fixed {
                month,
                day,
                observance,
            } => {
                let date = NaiveDate::from_ymd_opt(year, month, day)?;
                Some(observe(date, observance))
            }
            DayRule::NthWeekday {
                month,
                weekday,
                nth,
            } => NaiveDate::from_weekday_of_month_opt(year, month, weekday, nth),
            DayRule::LastWeekday { month, weekday } => last_weekday_of_month(year, month, weekday),
        }
    }

    fn since_date(&self) -> Option<NaiveDate> {
        self.since
            .and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
    }
}

fn observe(date: NaiveDate, observance: Observance) -> NaiveDate {
    match observance {
        Observance::NearestWorkday => match date.weekday() {
            Weekday::Sat => date - Days::new(1),
            Weekday::Sun => date + Days::new(1),
            _ => date,
        },
    }
}

fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let last = first_of_next.pred_opt()?;
    let back = (7 + last.weekday().num_days_from_monday() - weekday.num_days_from_monday()) % 7;
    last.checked_sub_days(Days::new(u64::from(back)))
}

/// Expands `rules` into observed dates within `start..=end`.
pub(crate) fn expand(
    rules: &[HolidayRule],
    start: NaiveDate,
    end: NaiveDate,
) -> BTreeMap<NaiveDate, &'static str> {
    let mut out = BTreeMap::new();
    if start > end {
        return out;
    }

    // One year of slack each side: observance can cross a year boundary.
    for year in (start.year() - 1)..=(end.year() + 1) {
        for rule in rules {
            let Some(date) = rule.observed_in(year) else {
                continue;
            };
            let lower = rule.since_date().map_or(start, |s| s.max(start));
            if date >= lower && date <= end {
                out.insert(date, rule.name);
            }
        }
    }
    out
}
