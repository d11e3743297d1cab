//! Word-lexicon scorer for interview comment sentiment.

use vclens_core::SentimentLabel;

/// Word weights, mixed Russian/English to match the comment corpus.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. The final score is clamped to `[-1.0, 1.0]`.
pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("great", 0.4),
    ("good", 0.3),
    ("best", 0.5),
    ("love", 0.5),
    ("loved", 0.5),
    ("amazing", 0.5),
    ("awesome", 0.5),
    ("interesting", 0.3),
    ("funny", 0.3),
    ("thanks", 0.4),
    ("respect", 0.4),
    ("отлично", 0.5),
    ("супер", 0.5),
    ("класс", 0.4),
    ("круто", 0.4),
    ("люблю", 0.5),
    ("нравится", 0.4),
    ("спасибо", 0.4),
    ("умница", 0.5),
    ("красота", 0.4),
    ("лучшее", 0.5),
    ("молодец", 0.5),
    ("интересно", 0.3),
    // Negative signals
    ("bad", -0.4),
    ("worst", -0.6),
    ("terrible", -0.6),
    ("awful", -0.6),
    ("boring", -0.4),
    ("hate", -0.6),
    ("fake", -0.4),
    ("cringe", -0.4),
    ("lies", -0.5),
    ("shame", -0.5),
    ("ужас", -0.6),
    ("ужасно", -0.6),
    ("отвратительно", -0.7),
    ("позор", -0.6),
    ("ложь", -0.5),
    ("врет", -0.5),
    ("скучно", -0.4),
    ("мерзко", -0.6),
    ("стыд", -0.5),
    ("дно", -0.5),
];

const POSITIVE_THRESHOLD: f32 = 0.1;
const NEGATIVE_THRESHOLD: f32 = -0.1;

/// Score a text string using the lexicon.
///
/// Splits text into lowercase words, sums matching weights, and clamps
/// the result to `[-1.0, 1.0]`. Returns `0.0` for empty or unknown text.
#[must_use]
pub fn lexicon_score(text: &str) -> f32 {
    let mut score = 0.0_f32;
    for word in text.split_whitespace() {
        let w = word
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();
        for &(lex_word, weight) in LEXICON {
            if w == lex_word {
                score += weight;
                break;
            }
        }
    }
    score.clamp(-1.0, 1.0)
}

/// Map a lexicon score to a sentiment label.
#[must_use]
pub fn label_for_score(score: f32) -> SentimentLabel {
    if score >= POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if score <= NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}
