//! Coarse time-of-day from day-part words ("сутринта", "вечерта", ...)
//!
//! Only consulted when no explicit time was found. Never parses numerals.

use super::lexicon::daytime_hint;
use super::tags::LabeledWord;
use chrono::NaiveTime;
use log::debug;

/// First day-part hint among the day-tagged words
pub fn resolve_daytime_hint(words: &[LabeledWord]) -> Option<NaiveTime> {
    let hint = words
        .iter()
        .filter(|lw| lw.tag.is_day())
        .find_map(|lw| daytime_hint(&lw.word).map(|time| (lw.word.as_str(), time)));
    if let Some((word, time)) = hint {
        debug!("Using daytime hint '{}' as {}", word, time);
    }
    hint.map(|(_, time)| time)
}
