//! Tag vocabulary for the token classifier
//!
//! The classifier emits one tag per whitespace word using a BIO scheme.
//! Only the day category has an "inside" variant; every other category is a
//! single-word "begin" tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic tag attached to a single word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    Other,
    TitleBegin,
    PersonBegin,
    PlaceBegin,
    DayBegin,
    DayInside,
    TimeStartBegin,
}

impl Tag {
    /// Every tag in vocabulary order
    pub const ALL: [Tag; 7] = [
        Tag::Other,
        Tag::TitleBegin,
        Tag::PersonBegin,
        Tag::PlaceBegin,
        Tag::DayBegin,
        Tag::DayInside,
        Tag::TimeStartBegin,
    ];

    /// Vocabulary spelling used on the wire and in diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Other => "Other",
            Tag::TitleBegin => "TitleBegin",
            Tag::PersonBegin => "PersonBegin",
            Tag::PlaceBegin => "PlaceBegin",
            Tag::DayBegin => "DayBegin",
            Tag::DayInside => "DayInside",
            Tag::TimeStartBegin => "TimeStartBegin",
        }
    }

    /// BIO label as emitted by the classifier model
    pub fn as_bio(&self) -> &'static str {
        match self {
            Tag::Other => "O",
            Tag::TitleBegin => "B-TITLE",
            Tag::PersonBegin => "B-PERSON",
            Tag::PlaceBegin => "B-PLACE",
            Tag::DayBegin => "B-WHEN_DAY",
            Tag::DayInside => "I-WHEN_DAY",
            Tag::TimeStartBegin => "B-WHEN_START",
        }
    }

    pub fn is_day(&self) -> bool {
        matches!(self, Tag::DayBegin | Tag::DayInside)
    }

    /// Day or time tags, i.e. words that carry "when" information
    pub fn is_temporal(&self) -> bool {
        matches!(self, Tag::DayBegin | Tag::DayInside | Tag::TimeStartBegin)
    }

    /// Tags that anchor the title span
    pub fn is_title_anchor(&self) -> bool {
        matches!(self, Tag::TitleBegin | Tag::PersonBegin | Tag::PlaceBegin)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown tag label: '{0}'")]
pub struct TagParseError(pub String);

impl FromStr for Tag {
    type Err = TagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        match label {
            "Other" | "O" => Ok(Tag::Other),
            "TitleBegin" | "B-TITLE" | "TITLE" => Ok(Tag::TitleBegin),
            "PersonBegin" | "B-PERSON" | "PERSON" => Ok(Tag::PersonBegin),
            "PlaceBegin" | "B-PLACE" | "PLACE" => Ok(Tag::PlaceBegin),
            "DayBegin" | "B-WHEN_DAY" | "WHEN_DAY" => Ok(Tag::DayBegin),
            "DayInside" | "I-WHEN_DAY" => Ok(Tag::DayInside),
            "TimeStartBegin" | "B-WHEN_START" | "WHEN_START" => Ok(Tag::TimeStartBegin),
            _ => Err(TagParseError(label.to_string())),
        }
    }
}

/// Parse a comma separated label list such as `"B-TITLE,O,B-WHEN_DAY"`
pub fn parse_label_list(input: &str) -> Result<Vec<Tag>, TagParseError> {
    input.split(',').filter(|s| !s.trim().is_empty()).map(str::parse).collect()
}

/// A word paired with its current tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledWord {
    pub word: String,
    pub tag: Tag,
}

impl LabeledWord {
    pub fn new(word: impl Into<String>, tag: Tag) -> Self {
        Self { word: word.into(), tag }
    }

    pub fn lowercase(&self) -> String {
        self.word.to_lowercase()
    }
}

/// Zip words and tags into labeled words
///
/// Callers guarantee equal lengths; extra entries on either side are dropped.
pub fn label_words(words: &[String], tags: &[Tag]) -> Vec<LabeledWord> {
    words.iter().zip(tags).map(|(word, tag)| LabeledWord::new(word.clone(), *tag)).collect()
}
