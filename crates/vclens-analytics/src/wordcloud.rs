//! Word-cloud source data: stop-word filtered token frequencies plus a
//! palette choice. Drawing is delegated to the consumer of the payload.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use rand::seq::IndexedRandom;
use serde::Serialize;

use vclens_core::EnrichedComment;

/// Color palettes a renderer can map to; one is picked at random per
/// generation.
pub(crate) const PALETTES: &[&str] = &["pastel1", "pastel2", "cool", "spring"];

/// Standard English stop words plus the short Russian function words common
/// in this comment corpus.
pub(crate) const STOPWORDS: &[&str] = &[
    // English
    "a", "about", "after", "all", "also", "an", "and", "any", "are", "as", "at", "be", "because",
    "been", "but", "by", "can", "could", "did", "do", "does", "for", "from", "had", "has", "have",
    "he", "her", "him", "his", "how", "i", "if", "in", "into", "is", "it", "its", "just", "like",
    "me", "more", "most", "my", "no", "not", "of", "on", "one", "only", "or", "other", "our",
    "out", "over", "she", "so", "some", "such", "than", "that", "the", "their", "them", "then",
    "there", "these", "they", "this", "to", "up", "us", "was", "we", "were", "what", "when",
    "which", "who", "will", "with", "would", "you", "your",
    // Russian
    "это", "как", "в", "на", "я", "с", "что", "он", "она", "мы", "вы", "у", "к", "от", "до",
    "за", "по", "из", "под", "без", "для", "и", "но", "да", "или", "то", "же", "бы", "быть",
    "их", "так", "тоже", "очень", "еще",
];

static STOPWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS.iter().copied().collect());

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequency {
    pub word: String,
    pub weight: usize,
}

/// The payload handed to an external word-cloud renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCloud {
    pub words: Vec<WordFrequency>,
    pub palette: String,
}

/// Tokenize all non-null cleaned texts on whitespace, drop stop words
/// case-insensitively, and count the survivors.
///
/// Frequencies are ordered by weight descending, then alphabetically so the
/// output is deterministic, and truncated to `max_words`.
#[must_use]
pub fn word_frequencies(rows: &[EnrichedComment], max_words: usize) -> Vec<WordFrequency> {
    let text = rows
        .iter()
        .filter_map(|r| r.clean_text.as_deref())
        .collect::<Vec<_>>()
        .join(" ");

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in text.split_whitespace() {
        if STOPWORD_SET.contains(token.to_lowercase().as_str()) {
            continue;
        }
        *counts.entry(token).or_insert(0) += 1;
    }

    let mut frequencies: Vec<WordFrequency> = counts
        .into_iter()
        .map(|(word, weight)| WordFrequency {
            word: word.to_string(),
            weight,
        })
        .collect();
    frequencies.sort_by(|a, b| b.weight.cmp(&a.weight).then_with(|| a.word.cmp(&b.word)));
    frequencies.truncate(max_words);
    frequencies
}

/// Build a full word-cloud payload with a freshly picked palette.
#[must_use]
pub fn build_word_cloud(rows: &[EnrichedComment], max_words: usize) -> WordCloud {
    let palette = PALETTES
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or("pastel1");
    WordCloud {
        words: word_frequencies(rows, max_words),
        palette: palette.to_string(),
    }
}
