//! Fixed Bulgarian lexicons used by the resolvers
//!
//! These tables are part of the parser's behaviour: changing an entry changes
//! which sentences resolve and how.

use chrono::NaiveTime;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Weekday names mapped to `0 = Monday` through `6 = Sunday`.
///
/// Capitalised and trailing-period variants are listed explicitly, so an
/// exact lookup and a lowercase lookup can give different answers.
pub static WEEKDAYS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert("понеделник", 0);
    map.insert("вторник", 1);
    map.insert("сряда", 2);
    map.insert("четвъртък", 3);
    map.insert("петък", 4);
    map.insert("събота", 5);
    map.insert("неделя", 6);

    map.insert("събота.", 5);
    map.insert("неделя.", 6);

    map.insert("Понеделник", 0);
    map.insert("Вторник", 1);
    map.insert("Сряда", 2);
    map.insert("Четвъртък", 3);
    map.insert("Петък", 4);
    map.insert("Събота", 5);
    map.insert("Неделя", 6);
    map
});

/// Relative day words mapped to a day offset from the reference date
pub static RELATIVE_DAYS: Lazy<HashMap<&'static str, i64>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert("днес", 0);
    map.insert("утре", 1);
    map.insert("вдругиден", 2);
    map
});

/// Day-part words mapped to a representative time of day
pub static DAYTIME_HINTS: Lazy<HashMap<&'static str, NaiveTime>> = Lazy::new(|| {
    let hm = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN);
    let mut map = HashMap::new();
    map.insert("сутринта", hm(9, 0));
    map.insert("обед", hm(12, 0));
    map.insert("наобед", hm(12, 0));
    map.insert("следобед", hm(15, 0));
    map.insert("вечерта", hm(19, 0));
    map.insert("вечер", hm(19, 0));
    map
});

/// Canonical hour marker that hour abbreviations collapse into
pub const HOUR_MARKER: &str = "ч";

/// Hour marker spellings, replaced in order
pub const HOUR_MARKER_REWRITES: &[(&str, &str)] =
    &[("ч.", "ч"), ("часа", "ч"), (" часа", "ч"), (" h", "ч")];

/// Word that turns two times into a start/end range
pub const RANGE_MARKER: &str = "до";

/// Preposition introducing a companion ("with")
pub const WITH_PREPOSITION: &str = "с";

/// Nouns that belong to a title even when the classifier leaves them untagged
pub const TITLE_NOUNS: &[&str] = &["клас", "колелета", "тате", "офис", "мол"];

/// Temporal words stripped out of an anchored title span
pub const SPAN_TEMPORAL_MARKERS: &[&str] =
    &["сутринта", "вечерта", "следобед", "утре", "днес", "вдругиден"];

/// Connectors stripped out of an anchored title span
pub const SPAN_CONNECTORS: &[&str] = &["на", "от", "до"];

/// Words after which a bare numeral reads as a time of day
pub const TIME_CONNECTORS: &[&str] = &["в", "от", "до"];

/// Connectors stripped when the title falls back to every non-temporal word
pub const REMAINDER_CONNECTORS: &[&str] = &["на", "в", "с", "от", "до"];

/// Exact lookup first, then lowercase
pub fn weekday_index(word: &str) -> Option<u32> {
    WEEKDAYS.get(word).or_else(|| WEEKDAYS.get(word.to_lowercase().as_str())).copied()
}

pub fn is_weekday(word: &str) -> bool {
    weekday_index(word).is_some()
}

/// Case-insensitive relative day lookup
pub fn relative_offset(word: &str) -> Option<i64> {
    RELATIVE_DAYS.get(word.to_lowercase().as_str()).copied()
}

/// Case-insensitive day-part lookup
pub fn daytime_hint(word: &str) -> Option<NaiveTime> {
    DAYTIME_HINTS.get(word.to_lowercase().as_str()).copied()
}

/// True when `word`, lowercased, is one of `list`
pub fn contains_lowercase(list: &[&str], word: &str) -> bool {
    let lower = word.to_lowercase();
    list.iter().any(|entry| *entry == lower)
}
