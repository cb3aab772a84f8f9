//! Token classifier boundary
//!
//! The classifier turns whitespace words into one [`Tag`] each. It is an
//! injected capability: tests and replays use [`FixedClassifier`], offline use
//! falls back to [`LexiconClassifier`], and [`InferenceApiClassifier`] talks to
//! a hosted token-classification model.

use super::lexicon::{
    contains_lowercase, daytime_hint, is_weekday, relative_offset, REMAINDER_CONNECTORS,
    TIME_CONNECTORS,
};
use super::tags::Tag;
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

/// Errors raised at the classifier boundary
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("Classifier unavailable: {0}")]
    Unavailable(String),
    #[error("Unexpected classifier response: {0}")]
    Response(String),
    #[error("Classifier returned {tags} tags for {words} words")]
    LengthMismatch { words: usize, tags: usize },
}

/// Synchronous `words -> tags` capability
pub trait TokenClassifier: Send + Sync {
    /// One tag per word, in order
    fn classify(&self, words: &[String]) -> Result<Vec<Tag>, ClassifierError>;
}

impl<C: TokenClassifier + ?Sized> TokenClassifier for Box<C> {
    fn classify(&self, words: &[String]) -> Result<Vec<Tag>, ClassifierError> {
        (**self).classify(words)
    }
}

/// Returns a pre-recorded tag sequence
#[derive(Debug, Clone)]
pub struct FixedClassifier {
    tags: Vec<Tag>,
}

impl FixedClassifier {
    pub fn new(tags: Vec<Tag>) -> Self {
        Self { tags }
    }
}

impl TokenClassifier for FixedClassifier {
    fn classify(&self, words: &[String]) -> Result<Vec<Tag>, ClassifierError> {
        if words.len() != self.tags.len() {
            return Err(ClassifierError::LengthMismatch { words: words.len(), tags: self.tags.len() });
        }
        Ok(self.tags.clone())
    }
}

static CLOCK_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{1,2}:[0-9]{2}(?:ч\.?)?$").unwrap());

static NUMERAL_TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{1,2}(?:[:.][0-9]{1,2})?(?:ч\.?)?$").unwrap());

static ORDINAL_DAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{1,2}(?:-?(?:ви|ри|ти|ми)\.?|\.)$").unwrap());

/// Offline tagger built from the lexicons
///
/// Day words and day-part words become day tags and ordinal numerals a day of
/// month. `HH:MM` is always a time; a bare numeral is a time only right after
/// a day word, another time or one of `в`/`от`/`до`, so quantities such as
/// "2 хляба" stay in the title. Connectors stay `Other` and everything else is
/// treated as part of the title.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconClassifier;

impl TokenClassifier for LexiconClassifier {
    fn classify(&self, words: &[String]) -> Result<Vec<Tag>, ClassifierError> {
        let mut tags: Vec<Tag> = Vec::with_capacity(words.len());
        for (index, word) in words.iter().enumerate() {
            let previous = tags.last().copied();
            let is_day_word =
                is_weekday(word) || relative_offset(word).is_some() || daytime_hint(word).is_some();
            let tag = if is_day_word {
                if previous.is_some_and(|t| t.is_day()) { Tag::DayInside } else { Tag::DayBegin }
            } else if ORDINAL_DAY_RE.is_match(word) {
                Tag::DayBegin
            } else if CLOCK_WORD_RE.is_match(word) {
                Tag::TimeStartBegin
            } else if NUMERAL_TIME_RE.is_match(word) {
                let after_marker = previous.is_some_and(|t| t.is_temporal())
                    || (index > 0 && contains_lowercase(TIME_CONNECTORS, &words[index - 1]));
                if after_marker { Tag::TimeStartBegin } else { Tag::Other }
            } else if contains_lowercase(REMAINDER_CONNECTORS, word) || word == "часа" {
                Tag::Other
            } else {
                Tag::TitleBegin
            };
            tags.push(tag);
        }
        debug!("Lexicon tags: {:?}", tags);
        Ok(tags)
    }
}

/// One entity from a token-classification endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct EntityPrediction {
    /// Per-token label, e.g. `B-WHEN_DAY`
    #[serde(default)]
    pub entity: Option<String>,
    /// Aggregated label, e.g. `WHEN_DAY`
    #[serde(default)]
    pub entity_group: Option<String>,
    #[serde(default)]
    pub word: String,
    pub start: usize,
    pub end: usize,
    #[serde(default)]
    pub score: f32,
}

impl EntityPrediction {
    fn label(&self) -> Option<&str> {
        self.entity.as_deref().or(self.entity_group.as_deref())
    }

    fn is_aggregated(&self) -> bool {
        self.entity.is_none() && self.entity_group.is_some()
    }
}

/// Hosted token-classification model (Hugging Face inference API style)
pub struct InferenceApiClassifier {
    client: reqwest::blocking::Client,
    endpoint: String,
    token: Option<String>,
}

impl InferenceApiClassifier {
    pub fn new(
        endpoint: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ClassifierError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClassifierError::Unavailable(e.to_string()))?;
        Ok(Self { client, endpoint: endpoint.into(), token })
    }
}

impl TokenClassifier for InferenceApiClassifier {
    fn classify(&self, words: &[String]) -> Result<Vec<Tag>, ClassifierError> {
        let sentence = words.join(" ");
        debug!("Querying classifier at {} for '{}'", self.endpoint, sentence);

        let mut request = self.client.post(&self.endpoint).json(&json!({ "inputs": sentence }));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| ClassifierError::Unavailable(e.to_string()))?;
        let predictions: Vec<EntityPrediction> =
            response.json().map_err(|e| ClassifierError::Response(e.to_string()))?;

        Ok(align_predictions(words, &predictions))
    }
}

/// Map character-offset predictions back onto whitespace words
///
/// Offsets count characters, not bytes. Each word takes the label of the
/// first prediction starting inside it; words inside an aggregated day span
/// continue it as `DayInside`. Anything else is `Other`.
pub fn align_predictions(words: &[String], predictions: &[EntityPrediction]) -> Vec<Tag> {
    let mut tags = Vec::with_capacity(words.len());
    let mut offset = 0;
    let mut open_day_span: Option<usize> = None;

    for word in words {
        let (start, end) = (offset, offset + word.chars().count());
        offset = end + 1;

        let hit = predictions.iter().find(|p| p.start >= start && p.start < end);
        let tag = match hit {
            Some(prediction) => {
                let tag = parse_prediction_label(prediction);
                open_day_span =
                    (prediction.is_aggregated() && tag == Tag::DayBegin).then_some(prediction.end);
                tag
            }
            None => match open_day_span {
                Some(span_end) if span_end > start => Tag::DayInside,
                _ => {
                    open_day_span = None;
                    Tag::Other
                }
            },
        };
        tags.push(tag);
    }
    tags
}

fn parse_prediction_label(prediction: &EntityPrediction) -> Tag {
    match prediction.label().map(str::parse::<Tag>) {
        Some(Ok(tag)) => tag,
        Some(Err(e)) => {
            warn!("{} for '{}', treating as {}", e, prediction.word, Tag::Other);
            Tag::Other
        }
        None => Tag::Other,
    }
}
