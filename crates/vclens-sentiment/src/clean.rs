//! Comment text cleanup.
//!
//! `textDisplay` values arrive with HTML markup (`<br>`, `<a href=...>`) and
//! a handful of character entities. The cleaned form is what the lexicon
//! scores and what the word cloud tokenizes.

use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"));

/// Strip markup, decode common entities, collapse whitespace, and lowercase.
#[must_use]
pub fn clean_text(raw: &str) -> String {
    let without_tags = TAG_RE.replace_all(raw, " ");
    let decoded = without_tags
        .replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    decoded
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
