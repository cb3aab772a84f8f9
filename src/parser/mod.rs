//! Kalendar parser module
//!
//! Turns a sentence and the token classifier's per-word tags into a calendar
//! event. Every component below is a pure function of its inputs; the
//! classifier is the only collaborator and is injected.

pub mod assembler;
pub mod classifier;
pub mod corrector;
pub mod date_resolver;
pub mod daytime;
pub mod error;
pub mod event_parser;
pub mod lexicon;
pub mod tags;
pub mod time_resolver;
pub mod title;

pub use assembler::{InvalidDuration, ParseOutcome, ParsedEvent};
pub use classifier::{
    ClassifierError, FixedClassifier, InferenceApiClassifier, LexiconClassifier, TokenClassifier,
};
pub use error::{Diagnostics, FailureKind, ParseFailure};
pub use event_parser::{resolve, split_words, EventParser};
pub use tags::{LabeledWord, Tag};

use crate::config::ClassifierConfig;
use anyhow::Result;
use log::info;

/// Factory for creating the configured token classifier
pub struct ClassifierFactory;

impl ClassifierFactory {
    /// Remote classifier when an endpoint is configured, lexicon tagger otherwise
    pub fn create_classifier(config: &ClassifierConfig) -> Result<Box<dyn TokenClassifier>> {
        match &config.endpoint {
            Some(endpoint) => {
                info!("Creating inference API classifier for {}", endpoint);
                let classifier =
                    InferenceApiClassifier::new(endpoint.clone(), config.token(), config.timeout())?;
                Ok(Box::new(classifier))
            }
            None => {
                info!("No classifier endpoint configured, using lexicon classifier");
                Ok(Box::new(LexiconClassifier))
            }
        }
    }
}
