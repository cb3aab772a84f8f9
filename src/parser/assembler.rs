//! Combines the resolved date, time and title into an event
//!
//! | date | time | result                                              |
//! |------|------|-----------------------------------------------------|
//! | yes  | yes  | start on that date                                  |
//! | yes  | no   | unresolved                                          |
//! | no   | yes  | next occurrence of the time after the reference     |
//! | no   | no   | unresolved                                          |
//!
//! An end earlier than its start is moved to the following day.

use super::error::{FailureKind, ParseFailure};
use super::tags::{LabeledWord, Tag};
use super::time_resolver::TimeRange;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use log::debug;
use serde::{Deserialize, Serialize};

/// Longest default duration accepted, one week
pub const MAX_DEFAULT_DURATION_MINUTES: i64 = 7 * 24 * 60;

/// Default duration outside `1..=MAX_DEFAULT_DURATION_MINUTES`
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Default duration must be between 1 and {max} minutes, got {0}", max = MAX_DEFAULT_DURATION_MINUTES)]
pub struct InvalidDuration(pub i64);

/// Check a default duration before it is applied
pub fn check_default_duration(minutes: i64) -> Result<i64, InvalidDuration> {
    if (1..=MAX_DEFAULT_DURATION_MINUTES).contains(&minutes) {
        Ok(minutes)
    } else {
        Err(InvalidDuration(minutes))
    }
}

/// A successfully parsed calendar event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedEvent {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
}

impl ParsedEvent {
    /// Fill a missing end with `start + minutes`; an explicit end is kept
    pub fn with_default_duration(mut self, minutes: i64) -> Result<Self, InvalidDuration> {
        let minutes = check_default_duration(minutes)?;
        if self.end.is_none() {
            let end = Duration::try_minutes(minutes)
                .and_then(|length| self.start.checked_add_signed(length))
                .ok_or(InvalidDuration(minutes))?;
            self.end = Some(end);
        }
        Ok(self)
    }
}

/// An event together with the tagging that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOutcome {
    #[serde(flatten)]
    pub event: ParsedEvent,
    pub tokens: Vec<String>,
    pub labels: Vec<Tag>,
}

/// Start and optional end instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventWindow {
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
}

/// Turn a date and a time range into concrete instants
pub fn assemble_window(
    date: Option<NaiveDate>,
    time: Option<TimeRange>,
    reference: NaiveDateTime,
) -> Option<EventWindow> {
    let window = match (date, time) {
        (Some(date), Some(range)) => {
            let start = date.and_time(range.start);
            Some(EventWindow { start, end: end_after(start, range.end) })
        }
        (None, Some(range)) => {
            let mut start = reference.date().and_time(range.start);
            if start <= reference {
                start += Duration::days(1);
            }
            Some(EventWindow { start, end: end_after(start, range.end) })
        }
        (Some(date), None) => {
            debug!("Date {} resolved but no time of day", date);
            None
        }
        (None, None) => None,
    };
    debug!("Assembled window: {:?}", window);
    window
}

/// Place `end` on the start's date, rolling past midnight when needed
fn end_after(start: NaiveDateTime, end: Option<NaiveTime>) -> Option<NaiveDateTime> {
    let mut end = start.date().and_time(end?);
    if end < start {
        end += Duration::days(1);
    }
    Some(end)
}

/// Package a title and window as an outcome, or fail with diagnostics
pub fn assemble_event(
    title: Option<String>,
    window: Option<EventWindow>,
    words: &[LabeledWord],
) -> Result<ParseOutcome, ParseFailure> {
    let Some(window) = window else {
        return Err(ParseFailure::from_labeled(FailureKind::MissingDateTime, words));
    };
    let Some(title) = title.filter(|t| !t.trim().is_empty()) else {
        return Err(ParseFailure::from_labeled(FailureKind::MissingTitle, words));
    };

    Ok(ParseOutcome {
        event: ParsedEvent { title, start: window.start, end: window.end },
        tokens: words.iter().map(|lw| lw.word.clone()).collect(),
        labels: words.iter().map(|lw| lw.tag).collect(),
    })
}
