//! Date resolution for day-tagged words
//!
//! Three rules are tried in order and the first one that fires wins:
//! relative day words, weekday names, then a bare day-of-month numeral.

use super::lexicon::{relative_offset, weekday_index};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches "20", "20.", "20ти", "1-ви", "2ри", "7ми."
static DAY_OF_MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{1,2})(?:-?(?:ви|ри|ти|ми))?\.?$").unwrap());

/// How many months past the reference month a past day-of-month may roll
const DAY_OF_MONTH_LOOKAHEAD: u32 = 2;

/// Resolve the day-tagged words to a calendar date
pub fn resolve_date(day_words: &[&str], reference: NaiveDateTime) -> Option<NaiveDate> {
    if day_words.is_empty() {
        return None;
    }
    let today = reference.date();

    if let Some(offset) = day_words.iter().find_map(|w| relative_offset(w)) {
        let date = today + Duration::days(offset);
        debug!("Resolved relative day (+{}) to {}", offset, date);
        return Some(date);
    }

    if let Some(weekday) = day_words.iter().find_map(|w| weekday_index(w)) {
        let date = next_weekday(today, weekday);
        debug!("Resolved weekday {} to {}", weekday, date);
        return Some(date);
    }

    let day_number = day_words.iter().find_map(|word| {
        let caps = DAY_OF_MONTH_RE.captures(word)?;
        caps[1].parse::<u32>().ok().map(|day| (*word, day))
    });
    if let Some((word, day)) = day_number {
        let date = day_of_month(day, today);
        debug!("Resolved day of month '{}' to {:?}", word, date);
        return date;
    }

    None
}

/// Next occurrence of `weekday` (0 = Monday), 1 to 7 days after `from`
pub fn next_weekday(from: NaiveDate, weekday: u32) -> NaiveDate {
    let current = from.weekday().num_days_from_monday() as i64;
    let mut days_ahead = weekday as i64 - current;
    if days_ahead <= 0 {
        days_ahead += 7;
    }
    from + Duration::days(days_ahead)
}

/// Place a bare day number in the reference month or a following one
///
/// A day missing from the reference month moves to the next month. A day
/// already past moves forward at most [`DAY_OF_MONTH_LOOKAHEAD`] months; if
/// none of those months has the day, the past date is kept.
fn day_of_month(day: u32, today: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = (today.year(), today.month());
    let mut candidate = NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
        let (y, m) = add_months(year, month, 1);
        NaiveDate::from_ymd_opt(y, m, day)
    })?;

    if candidate < today {
        if candidate.month() == 12 {
            if let Some(next) = NaiveDate::from_ymd_opt(candidate.year() + 1, 1, day) {
                candidate = next;
            }
        } else {
            for ahead in 1..=DAY_OF_MONTH_LOOKAHEAD {
                let (y, m) = add_months(year, month, ahead);
                if let Some(next) = NaiveDate::from_ymd_opt(y, m, day) {
                    candidate = next;
                    break;
                }
            }
        }
    }
    Some(candidate)
}

fn add_months(year: i32, month: u32, ahead: u32) -> (i32, u32) {
    let zero_based = month - 1 + ahead;
    (year + (zero_based / 12) as i32, zero_based % 12 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use test_case::test_case;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(10, 30, 0).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_no_words_no_date() {
        assert_eq!(resolve_date(&[], at(2026, 10, 18)), None);
    }

    #[test]
    fn test_non_ascii_digits_do_not_stop_the_day_scan() {
        // Arabic-Indic three, then an ordinary day number
        assert_eq!(resolve_date(&["٣", "20"], at(2026, 10, 18)), Some(ymd(2026, 10, 20)));
        assert_eq!(resolve_date(&["٢٠"], at(2026, 10, 18)), None);
    }

    #[test_case("днес", 0)]
    #[test_case("утре", 1)]
    #[test_case("Утре", 1)]
    #[test_case("вдругиден", 2)]
    fn test_relative_days(word: &str, offset: i64) {
        let reference = at(2026, 10, 18);
        assert_eq!(resolve_date(&[word], reference), Some(reference.date() + Duration::days(offset)));
    }

    #[test]
    fn test_tomorrow_is_independent_of_weekday() {
        for d in 1..=14 {
            let reference = at(2026, 3, d);
            assert_eq!(resolve_date(&["утре"], reference), Some(reference.date() + Duration::days(1)));
        }
    }

    #[test]
    fn test_weekday_is_always_one_to_seven_days_ahead() {
        let names = ["понеделник", "вторник", "сряда", "четвъртък", "петък", "събота", "неделя"];
        for d in 1..=14 {
            let reference = at(2026, 6, d);
            for (index, name) in names.iter().enumerate() {
                let date = resolve_date(&[*name], reference).unwrap();
                let ahead = (date - reference.date()).num_days();
                assert!((1..=7).contains(&ahead), "{} from {} was {} days ahead", name, reference, ahead);
                assert_eq!(date.weekday().num_days_from_monday(), index as u32);
            }
        }
    }

    #[test]
    fn test_same_weekday_moves_a_full_week() {
        // 2026-10-18 is a Sunday
        let reference = at(2026, 10, 18);
        assert_eq!(reference.date().weekday(), Weekday::Sun);
        assert_eq!(resolve_date(&["Неделя"], reference), Some(ymd(2026, 10, 25)));
    }

    #[test]
    fn test_relative_beats_weekday() {
        let reference = at(2026, 10, 18);
        assert_eq!(resolve_date(&["петък", "утре"], reference), Some(ymd(2026, 10, 19)));
    }

    #[test_case("25", 2026, 10, 25 ; "plain numeral")]
    #[test_case("25.", 2026, 10, 25 ; "trailing period")]
    #[test_case("20ти", 2026, 10, 20 ; "ordinal suffix")]
    #[test_case("1-ви", 2026, 11, 1 ; "hyphenated ordinal rolls to next month")]
    #[test_case("18", 2026, 10, 18 ; "today is not in the past")]
    fn test_day_of_month(word: &str, y: i32, m: u32, d: u32) {
        assert_eq!(resolve_date(&[word], at(2026, 10, 18)), Some(ymd(y, m, d)));
    }

    #[test]
    fn test_missing_day_rolls_to_next_month() {
        // September has 30 days
        assert_eq!(resolve_date(&["31"], at(2026, 9, 5)), Some(ymd(2026, 10, 31)));
    }

    #[test]
    fn test_past_day_in_december_rolls_into_next_year() {
        assert_eq!(day_of_month(31, ymd(2026, 12, 1)), Some(ymd(2026, 12, 31)));
        assert_eq!(resolve_date(&["5"], at(2026, 12, 20)), Some(ymd(2027, 1, 5)));
    }

    #[test]
    fn test_past_day_skips_months_without_it() {
        // 30 January has passed and February has no 30th
        assert_eq!(resolve_date(&["30"], at(2026, 1, 31)), Some(ymd(2026, 3, 30)));
    }

    #[test]
    fn test_past_day_in_november_moves_to_december() {
        assert_eq!(resolve_date(&["3"], at(2026, 11, 20)), Some(ymd(2026, 12, 3)));
    }

    #[test]
    fn test_impossible_day_resolves_nothing() {
        assert_eq!(resolve_date(&["45"], at(2026, 10, 18)), None);
        assert_eq!(resolve_date(&["0"], at(2026, 10, 18)), None);
    }

    #[test]
    fn test_non_matching_words_resolve_nothing() {
        assert_eq!(resolve_date(&["следващата", "седмица"], at(2026, 10, 18)), None);
    }

    #[test]
    fn test_add_months_wraps_year() {
        assert_eq!(add_months(2026, 11, 2), (2027, 1));
        assert_eq!(add_months(2026, 12, 1), (2027, 1));
        assert_eq!(add_months(2026, 3, 1), (2026, 4));
    }
}
