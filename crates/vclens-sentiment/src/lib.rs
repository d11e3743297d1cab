mod clean;
mod label;
mod lexicon;

pub use clean::clean_text;
pub use label::{label_comment, LabeledComment};
pub use lexicon::{label_for_score, lexicon_score};
