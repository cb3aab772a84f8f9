//! Post-processing of raw classifier labels
//!
//! The model misses weekday names often enough that a lexical override is
//! safer than trusting it. No other words are retagged here; relative days and
//! day-part words are found later by direct lookup regardless of their tag.

use super::lexicon::WEEKDAYS;
use super::tags::{LabeledWord, Tag};
use log::debug;

/// Retag weekday names the classifier labeled `Other` as `DayBegin`
pub fn correct_labels(words: Vec<LabeledWord>) -> Vec<LabeledWord> {
    words
        .into_iter()
        .map(|mut lw| {
            if lw.tag == Tag::Other && WEEKDAYS.contains_key(lw.lowercase().as_str()) {
                debug!("Retagging weekday '{}' as {}", lw.word, Tag::DayBegin);
                lw.tag = Tag::DayBegin;
            }
            lw
        })
        .collect()
}
