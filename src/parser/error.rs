//! Typed failures returned by the event parser
//!
//! Every failure carries the words and corrected tags that produced it so the
//! user can be told what was understood and asked to rephrase.

use super::tags::{LabeledWord, Tag};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a sentence did not become an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    #[serde(rename = "empty text")]
    EmptyInput,
    #[serde(rename = "classifier unavailable")]
    ClassifierUnavailable,
    #[serde(rename = "missing datetime")]
    MissingDateTime,
    #[serde(rename = "missing title")]
    MissingTitle,
}

impl FailureKind {
    /// Short note used in diagnostics
    pub fn note(&self) -> &'static str {
        match self {
            FailureKind::EmptyInput => "empty text",
            FailureKind::ClassifierUnavailable => "classifier unavailable",
            FailureKind::MissingDateTime => "missing datetime",
            FailureKind::MissingTitle => "missing title",
        }
    }

    /// Message shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            FailureKind::EmptyInput => "Не е подаден текст.",
            FailureKind::ClassifierUnavailable => "Класификаторът не е достъпен.",
            FailureKind::MissingDateTime => "Не можах да разбера датата/часа.",
            FailureKind::MissingTitle => "Не успях да разбера текста. Опитай да преформулираш.",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.note())
    }
}

/// What the parser saw when it gave up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub tokens: Vec<String>,
    pub labels: Vec<Tag>,
    pub note: FailureKind,
    /// Underlying cause, e.g. the classifier transport error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// A parse that did not produce an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseFailure {
    pub error: String,
    pub debug: Diagnostics,
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.error, self.debug.note)
    }
}

impl std::error::Error for ParseFailure {}

impl ParseFailure {
    pub fn new(kind: FailureKind, tokens: Vec<String>, labels: Vec<Tag>) -> Self {
        Self {
            error: kind.message().to_string(),
            debug: Diagnostics { tokens, labels, note: kind, detail: None },
        }
    }

    /// Failure built from the labeled words of a sentence
    pub fn from_labeled(kind: FailureKind, words: &[LabeledWord]) -> Self {
        let (tokens, labels) = words.iter().map(|lw| (lw.word.clone(), lw.tag)).unzip();
        Self::new(kind, tokens, labels)
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.debug.detail = Some(detail.into());
        self
    }

    pub fn kind(&self) -> FailureKind {
        self.debug.note
    }

    pub fn tokens(&self) -> &[String] {
        &self.debug.tokens
    }

    pub fn labels(&self) -> &[Tag] {
        &self.debug.labels
    }
}
