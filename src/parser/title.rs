//! Title extraction
//!
//! The title is chosen by an ordered list of strategies; the first one that
//! produces a non-empty title wins. Extraction only looks at words and tags,
//! never at resolved dates or times.

use super::lexicon::{
    contains_lowercase, is_weekday, REMAINDER_CONNECTORS, SPAN_CONNECTORS, SPAN_TEMPORAL_MARKERS,
    TITLE_NOUNS, WEEKDAYS, WITH_PREPOSITION,
};
use super::tags::{LabeledWord, Tag};
use log::debug;

/// One way of deriving a title from the labeled words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleStrategy {
    /// Span between the first and last anchor word, minus temporal words and connectors
    AnchoredSpan,
    /// Words tagged `TitleBegin`, used only when the sentence has no anchor
    TaggedTitle,
    /// Every word without a day or time tag, minus connectors
    UntaggedRemainder,
}

/// Strategies in the order they are tried
pub const TITLE_STRATEGIES: [TitleStrategy; 3] =
    [TitleStrategy::AnchoredSpan, TitleStrategy::TaggedTitle, TitleStrategy::UntaggedRemainder];

impl TitleStrategy {
    /// Title produced by this strategy, `None` when it does not apply or comes out empty
    pub fn extract(&self, words: &[LabeledWord]) -> Option<String> {
        let title = match self {
            TitleStrategy::AnchoredSpan => {
                let (first, last) = anchor_bounds(words)?;
                join(words[first..=last].iter().filter(|lw| !is_span_noise(&lw.word)))
            }
            TitleStrategy::TaggedTitle => {
                if anchor_bounds(words).is_some() {
                    return None;
                }
                join(words.iter().filter(|lw| lw.tag == Tag::TitleBegin))
            }
            TitleStrategy::UntaggedRemainder => join(
                words
                    .iter()
                    .filter(|lw| !lw.tag.is_temporal())
                    .filter(|lw| !contains_lowercase(REMAINDER_CONNECTORS, &lw.word)),
            ),
        };
        if title.is_empty() { None } else { Some(title) }
    }
}

/// Run the strategies in order and return the first non-empty title
pub fn extract_title(words: &[LabeledWord]) -> Option<String> {
    TITLE_STRATEGIES.iter().find_map(|strategy| {
        let title = strategy.extract(words)?;
        debug!("Title '{}' from {:?}", title, strategy);
        Some(title)
    })
}

/// First and last index of a word that anchors the title
pub fn anchor_bounds(words: &[LabeledWord]) -> Option<(usize, usize)> {
    let mut anchors = (0..words.len()).filter(|&i| is_anchor(words, i));
    let first = anchors.next()?;
    let last = anchors.last().unwrap_or(first);
    Some((first, last))
}

fn is_anchor(words: &[LabeledWord], i: usize) -> bool {
    let lw = &words[i];
    if lw.tag.is_title_anchor() || contains_lowercase(TITLE_NOUNS, &lw.word) {
        return true;
    }
    // Whoever follows "с" is a companion, unless it is a day or a number
    i > 0
        && words[i - 1].lowercase() == WITH_PREPOSITION
        && !WEEKDAYS.contains_key(lw.word.as_str())
        && !is_numeric(&lw.word)
}

fn is_span_noise(word: &str) -> bool {
    contains_lowercase(SPAN_TEMPORAL_MARKERS, word)
        || is_weekday(word)
        || contains_lowercase(SPAN_CONNECTORS, word)
}

fn is_numeric(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_numeric)
}

fn join<'a>(words: impl Iterator<Item = &'a LabeledWord>) -> String {
    words.map(|lw| lw.word.as_str()).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn labeled(pairs: &[(&str, Tag)]) -> Vec<LabeledWord> {
        pairs.iter().map(|(w, t)| LabeledWord::new(*w, *t)).collect()
    }

    #[test]
    fn test_span_between_anchors_keeps_inner_words() {
        let words = labeled(&[
            ("Вечеря", Tag::TitleBegin),
            ("с", Tag::Other),
            ("Гери", Tag::PersonBegin),
            ("в", Tag::Other),
            ("Неделя", Tag::DayBegin),
            ("от", Tag::Other),
            ("18", Tag::TimeStartBegin),
        ]);
        assert_eq!(anchor_bounds(&words), Some((0, 2)));
        assert_eq!(extract_title(&words).as_deref(), Some("Вечеря с Гери"));
    }

    #[test]
    fn test_word_after_with_is_an_anchor() {
        let words = labeled(&[
            ("Вечеря", Tag::TitleBegin),
            ("с", Tag::Other),
            ("гери", Tag::Other),
            ("в", Tag::Other),
            ("неделя", Tag::DayBegin),
        ]);
        assert_eq!(extract_title(&words).as_deref(), Some("Вечеря с гери"));
    }

    #[test]
    fn test_weekday_or_number_after_with_is_not_an_anchor() {
        let words = labeled(&[("Среща", Tag::TitleBegin), ("с", Tag::Other), ("Петък", Tag::DayBegin)]);
        assert_eq!(anchor_bounds(&words), Some((0, 0)));
        let words = labeled(&[("Среща", Tag::TitleBegin), ("с", Tag::Other), ("5", Tag::Other)]);
        assert_eq!(anchor_bounds(&words), Some((0, 0)));
    }

    #[test]
    fn test_domain_nouns_extend_the_span() {
        let words = labeled(&[
            ("тренировка", Tag::TitleBegin),
            ("с", Tag::Other),
            ("тате", Tag::Other),
            ("с", Tag::Other),
            ("колелета", Tag::Other),
            ("в", Tag::Other),
            ("събота", Tag::DayBegin),
            ("в", Tag::Other),
            ("9", Tag::TimeStartBegin),
        ]);
        assert_eq!(extract_title(&words).as_deref(), Some("тренировка с тате с колелета"));
    }

    #[test]
    fn test_span_drops_temporal_words_and_connectors() {
        let words = labeled(&[
            ("Лекция", Tag::TitleBegin),
            ("утре", Tag::DayBegin),
            ("на", Tag::Other),
            ("петък", Tag::DayBegin),
            ("до", Tag::Other),
            ("офис", Tag::Other),
        ]);
        assert_eq!(extract_title(&words).as_deref(), Some("Лекция офис"));
    }

    #[test]
    fn test_span_of_only_noise_falls_to_remainder() {
        let words = labeled(&[("утре", Tag::TitleBegin), ("Кино", Tag::Other), ("в", Tag::Other)]);
        assert_eq!(TitleStrategy::AnchoredSpan.extract(&words), None);
        assert_eq!(TitleStrategy::TaggedTitle.extract(&words), None);
        assert_eq!(extract_title(&words).as_deref(), Some("утре Кино"));
    }

    #[test]
    fn test_remainder_without_any_anchor() {
        let words = labeled(&[
            ("Футбол", Tag::Other),
            ("неделя", Tag::DayBegin),
            ("от", Tag::Other),
            ("19", Tag::TimeStartBegin),
        ]);
        assert_eq!(anchor_bounds(&words), None);
        assert_eq!(extract_title(&words).as_deref(), Some("Футбол"));
    }

    #[test]
    fn test_nothing_left_means_no_title() {
        let words = labeled(&[("в", Tag::Other), ("неделя", Tag::DayBegin), ("18", Tag::TimeStartBegin)]);
        assert_eq!(extract_title(&words), None);
    }
}
