//! Sentence to event orchestration
//!
//! ```text
//! sentence -> words -> classifier tags -> label correction
//!          -> { date, time (or daytime hint), title } -> assembler
//! ```

use super::assembler::{assemble_event, assemble_window, ParseOutcome};
use super::classifier::{ClassifierError, TokenClassifier};
use super::corrector::correct_labels;
use super::daytime::resolve_daytime_hint;
use super::date_resolver::resolve_date;
use super::error::{FailureKind, ParseFailure};
use super::tags::{label_words, Tag};
use super::time_resolver::{collect_time_section, resolve_time, TimeRange};
use super::title::extract_title;
use chrono::NaiveDateTime;
use log::{debug, warn};

/// Parses sentences with an injected token classifier
pub struct EventParser<C: TokenClassifier> {
    classifier: C,
}

impl<C: TokenClassifier> EventParser<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Classify `sentence` and resolve it against `reference`
    pub fn parse(
        &self,
        sentence: &str,
        reference: NaiveDateTime,
    ) -> Result<ParseOutcome, ParseFailure> {
        let words = split_words(sentence);
        if words.is_empty() {
            return Err(ParseFailure::new(FailureKind::EmptyInput, Vec::new(), Vec::new()));
        }

        let tags = self.classifier.classify(&words).and_then(|tags| {
            if tags.len() == words.len() {
                Ok(tags)
            } else {
                Err(ClassifierError::LengthMismatch { words: words.len(), tags: tags.len() })
            }
        });
        match tags {
            Ok(tags) => resolve(&words, &tags, reference),
            Err(e) => {
                warn!("Token classification failed: {}", e);
                Err(ParseFailure::new(FailureKind::ClassifierUnavailable, words, Vec::new())
                    .with_detail(e.to_string()))
            }
        }
    }
}

/// Whitespace split, original casing kept
pub fn split_words(sentence: &str) -> Vec<String> {
    sentence.split_whitespace().map(String::from).collect()
}

/// Resolve already-classified words into an event
///
/// Pure function of its inputs: feeding a failure's tokens and labels back in
/// yields the same failure.
pub fn resolve(
    words: &[String],
    tags: &[Tag],
    reference: NaiveDateTime,
) -> Result<ParseOutcome, ParseFailure> {
    if words.is_empty() {
        return Err(ParseFailure::new(FailureKind::EmptyInput, Vec::new(), Vec::new()));
    }
    if words.len() != tags.len() {
        let mismatch = ClassifierError::LengthMismatch { words: words.len(), tags: tags.len() };
        let failure =
            ParseFailure::new(FailureKind::ClassifierUnavailable, words.to_vec(), tags.to_vec());
        return Err(failure.with_detail(mismatch.to_string()));
    }

    let labeled = correct_labels(label_words(words, tags));
    debug!(
        "Corrected tags: {}",
        labeled.iter().map(|lw| format!("{}[{}]", lw.word, lw.tag)).collect::<Vec<_>>().join(" | ")
    );

    let day_words: Vec<&str> =
        labeled.iter().filter(|lw| lw.tag.is_day()).map(|lw| lw.word.as_str()).collect();
    let date = resolve_date(&day_words, reference);

    let section = collect_time_section(&labeled);
    let time = resolve_time(&section)
        .or_else(|| resolve_daytime_hint(&labeled).map(TimeRange::starting));

    let title = extract_title(&labeled);
    let window = assemble_window(date, time, reference);

    assemble_event(title, window, &labeled)
}
