use crate::errors::{JournalError, JournalResult};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));

/// Date constraints of one query, as given by the caller.
///
/// `last_days` and `since`/`before` may all be present; they are AND-ed when filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateQuery {
    pub last_days: Option<u32>,
    pub since: Option<NaiveDate>,
    pub before: Option<NaiveDate>,
}

/// `[start, end)` range used to pick monthly files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateQuery {
    /// Builds a query from raw tool parameters. Dates must be `YYYY-MM-DD`.
    pub fn from_params(
        last_days: Option<u32>,
        since: Option<&str>,
        before: Option<&str>,
    ) -> JournalResult<Self> {
        Ok(Self {
            last_days,
            since: parse_date_param("since", since)?,
            before: parse_date_param("before", before)?,
        })
    }

    /// Without any constraint the query means "the last `default_last_days` days".
    pub fn or_default_days(self, default_last_days: u32) -> Self {
        if self.last_days.is_none() && self.since.is_none() && self.before.is_none() {
            Self {
                last_days: Some(default_last_days),
                ..self
            }
        } else {
            self
        }
    }

    /// `now - last_days`, or `None` without `last_days`.
    pub fn cutoff(&self, now: NaiveDateTime) -> JournalResult<Option<NaiveDateTime>> {
        self.last_days.map(|days| days_before(now, days)).transpose()
    }

    pub fn since_start(&self) -> Option<NaiveDateTime> {
        self.since.map(start_of_day)
    }

    pub fn before_start(&self) -> Option<NaiveDateTime> {
        self.before.map(start_of_day)
    }
}

impl DateWindow {
    /// `last_days` decides the start when present, otherwise `since`, otherwise 2020-01-01.
    /// The end is `before`, or one day after `now`.
    ///
    /// # Errors
    ///
    /// [`JournalError::DaysOutOfRange`] when `now - last_days` is not a representable date.
    pub fn resolve(query: &DateQuery, now: NaiveDateTime) -> JournalResult<Self> {
        let start = match (query.cutoff(now)?, query.since_start()) {
            (Some(cutoff), _) => cutoff,
            (None, Some(since)) => since,
            (None, None) => epoch_floor(),
        };
        let end = query.before_start().unwrap_or_else(|| {
            now.checked_add_signed(Duration::days(1))
                .unwrap_or(NaiveDateTime::MAX)
        });
        Ok(Self { start, end })
    }

    /// First day of every calendar month from `start`'s month through `end`'s month, inclusive.
    /// Empty when `start` is after `end`.
    pub fn months(&self) -> Vec<NaiveDate> {
        let mut months = Vec::new();
        let (Some(mut current), Some(last)) =
            (self.start.date().with_day(1), self.end.date().with_day(1))
        else {
            return months;
        };
        while current <= last {
            months.push(current);
            match next_month(current) {
                Some(next) => current = next,
                None => break,
            }
        }
        months
    }
}

/// Oldest instant a `before`-only query looks at.
pub fn epoch_floor() -> NaiveDateTime {
    start_of_day(NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date"))
}

fn days_before(now: NaiveDateTime, days: u32) -> JournalResult<NaiveDateTime> {
    now.checked_sub_signed(Duration::days(i64::from(days)))
        .ok_or(JournalError::DaysOutOfRange { days })
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).expect("midnight is always valid")
}

fn next_month(first: NaiveDate) -> Option<NaiveDate> {
    if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    }
}

fn parse_date_param(param: &'static str, input: Option<&str>) -> JournalResult<Option<NaiveDate>> {
    let Some(input) = input else {
        return Ok(None);
    };
    let invalid = || JournalError::InvalidDateFormat {
        param,
        input: input.to_string(),
    };
    if !ISO_DATE_RE.is_match(input) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| invalid())
}
