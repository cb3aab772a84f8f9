//! Time-of-day extraction from the time section of a sentence
//!
//! The time section starts at the first `TimeStartBegin` word and runs through
//! untagged connectors ("от 10 до 12"), so a range keeps its "до".

use super::lexicon::{HOUR_MARKER, HOUR_MARKER_REWRITES, RANGE_MARKER};
use super::tags::{LabeledWord, Tag};
use chrono::NaiveTime;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// "10:30" or "10.30"
static CLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([0-9]{1,2})[:.]([0-9]{1,2})\b").unwrap());

/// "18", "18 ч", "18ч"
static HOUR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"\b([0-9]{{1,2}})\s*{}?\b", HOUR_MARKER)).unwrap());

/// A start time with an optional end time, both without a date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: Option<NaiveTime>,
}

impl TimeRange {
    pub fn starting(start: NaiveTime) -> Self {
        Self { start, end: None }
    }
}

/// Collect the contiguous run of words that starts at the first time tag
///
/// Accumulation continues through `Other` and `TimeStartBegin` words and stops
/// for good at the first word with any other tag.
pub fn collect_time_section(words: &[LabeledWord]) -> Vec<&str> {
    words
        .iter()
        .skip_while(|lw| lw.tag != Tag::TimeStartBegin)
        .take_while(|lw| matches!(lw.tag, Tag::TimeStartBegin | Tag::Other))
        .map(|lw| lw.word.as_str())
        .collect()
}

/// Lowercase, join and collapse hour abbreviations into [`HOUR_MARKER`]
pub fn normalize_time_text(words: &[&str]) -> String {
    let mut raw = words.join(" ").to_lowercase().trim().to_string();
    for (from, to) in HOUR_MARKER_REWRITES {
        raw = raw.replace(from, to);
    }
    raw
}

/// Resolve the time section into a start and optional end time
///
/// Exactly one time gives a start. Exactly two times give a range only when
/// the text contains the range marker. Anything else is ambiguous and yields
/// `None`.
pub fn resolve_time(section: &[&str]) -> Option<TimeRange> {
    if section.is_empty() {
        return None;
    }
    let raw = normalize_time_text(section);
    let times = scan_times(&raw);
    debug!("Time candidates in '{}': {:?}", raw, times);

    match times.as_slice() {
        [start] => Some(TimeRange::starting(*start)),
        [start, end] if has_range_marker(&raw) => Some(TimeRange { start: *start, end: Some(*end) }),
        _ => None,
    }
}

/// The marker has to stand on its own; a plain substring test would read
/// "дори" or "додаде" as a range.
fn has_range_marker(raw: &str) -> bool {
    raw.split_whitespace().any(|word| word == RANGE_MARKER)
}

/// Find every time in document order
///
/// Clock matches claim their character span; a bare hour starting inside a
/// claimed span is skipped.
fn scan_times(raw: &str) -> Vec<NaiveTime> {
    let mut found: Vec<(usize, NaiveTime)> = Vec::new();
    let mut claimed: Vec<(usize, usize)> = Vec::new();

    for caps in CLOCK_RE.captures_iter(raw) {
        let Some(whole) = caps.get(0) else { continue };
        let (Ok(hour), Ok(minute)) = (caps[1].parse::<u32>(), caps[2].parse::<u32>()) else {
            continue;
        };
        if let Some(time) = time_of_day(hour, minute) {
            found.push((whole.start(), time));
            claimed.push((whole.start(), whole.end()));
        }
    }

    for caps in HOUR_RE.captures_iter(raw) {
        let Some(whole) = caps.get(0) else { continue };
        let pos = whole.start();
        if claimed.iter().any(|(start, end)| *start <= pos && pos < *end) {
            continue;
        }
        let Ok(hour) = caps[1].parse::<u32>() else { continue };
        if let Some(time) = time_of_day(hour, 0) {
            found.push((pos, time));
        }
    }

    found.sort_by_key(|(pos, _)| *pos);
    found.into_iter().map(|(_, time)| time).collect()
}

fn time_of_day(hour: u32, minute: u32) -> Option<NaiveTime> {
    if hour <= 23 && minute <= 59 { NaiveTime::from_hms_opt(hour, minute, 0) } else { None }
}
