use std::ops::RangeInclusive;

pub const ALPHABET_LEN: u8 = 26;
pub const DIGIT_LEN: u8 = 10;

/// Shifts tried when the key is unknown. Zero is the identity and is skipped.
pub const CANDIDATE_SHIFTS: RangeInclusive<i64> = 1..=25;

pub const DIGRAPH_WEIGHT: f64 = 0.5;
pub const TRIGRAPH_WEIGHT: f64 = 1.0;
pub const THREE_LETTER_WEIGHT: f64 = 2.0;
pub const FOUR_LETTER_WEIGHT: f64 = 3.0;

lazy_static! {
    /// Common English digraphs. Weakest signal, they show up in almost any text.
    pub static ref DIGRAPHS: Vec<&'static str> = vec![
        "th", "er", "on", "an", "re", "he", "in", "ed", "nd", "ha", "at", "en", "es", "of", "or",
        "nt", "ea", "ti", "to", "it", "st", "io", "le", "is", "ou", "ar", "as", "de", "rt", "ve",
    ];

    pub static ref TRIGRAPHS: Vec<&'static str> = vec![
        "the", "and", "tha", "ent", "ion", "tio", "for", "nde", "has", "nce", "edt", "tis", "oft",
        "sth", "men",
    ];

    pub static ref THREE_LETTER_WORDS: Vec<&'static str> = vec![
        "the", "and", "for", "are", "but", "not", "you", "all", "any", "can", "had", "her", "was",
        "one", "our", "out", "day", "get", "has", "him", "his", "how", "man", "new", "now", "old",
        "see", "two", "way", "who", "boy", "did", "its", "let", "put", "say", "she", "too", "use",
    ];

    // A few five-letter words ride along in this list; they carry the same weight.
    pub static ref FOUR_LETTER_WORDS: Vec<&'static str> = vec![
        "that", "have", "this", "with", "from", "they", "which", "will", "there", "about", "these",
        "other", "some", "into", "than", "more", "time",
    ];
}
