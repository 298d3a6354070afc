//! Brute-force cracking for Caesar ciphertext of unknown shift.
//!
//! Every non-zero shift is tried and each candidate plaintext is scored by
//! how many entries of a small English lexicon it contains:
//! - trigraphs (1.0)
//! - digraphs (0.5)
//! - three-letter words (2.0)
//! - four-letter words (3.0)
//!
//! Scores are ordinal only. They rank candidates of one ciphertext against
//! each other and mean nothing across ciphertexts.

use tracing::{debug, trace};

use crate::algos::ceasar::decrypt;
use crate::constants::{
    CANDIDATE_SHIFTS, DIGRAPHS, DIGRAPH_WEIGHT, FOUR_LETTER_WEIGHT, FOUR_LETTER_WORDS,
    THREE_LETTER_WEIGHT, THREE_LETTER_WORDS, TRIGRAPHS, TRIGRAPH_WEIGHT,
};
use crate::structs::{CandidateSet, CrackReport, ScoredCandidate};

/// Distinct lexicon entries found in a candidate, per category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexiconHits {
    pub digraphs: usize,
    pub trigraphs: usize,
    pub three_letter_words: usize,
    pub four_letter_words: usize,
}

impl LexiconHits {
    pub fn weighted(&self) -> f64 {
        self.trigraphs as f64 * TRIGRAPH_WEIGHT
            + self.digraphs as f64 * DIGRAPH_WEIGHT
            + self.three_letter_words as f64 * THREE_LETTER_WEIGHT
            + self.four_letter_words as f64 * FOUR_LETTER_WEIGHT
    }
}

fn count_present(text: &str, entries: &[&str]) -> usize {
    entries.iter().filter(|entry| text.contains(**entry)).count()
}

pub fn score_breakdown(candidate: &str) -> LexiconHits {
    let text = candidate.to_ascii_lowercase();

    LexiconHits {
        digraphs: count_present(&text, &DIGRAPHS),
        trigraphs: count_present(&text, &TRIGRAPHS),
        three_letter_words: count_present(&text, &THREE_LETTER_WORDS),
        four_letter_words: count_present(&text, &FOUR_LETTER_WORDS),
    }
}

/// Confidence that `candidate` is English plaintext.
///
/// Matching is case-insensitive substring containment, so an entry found
/// inside a longer word still counts. Each entry counts at most once.
pub fn score(candidate: &str) -> f64 {
    score_breakdown(candidate).weighted()
}

/// Decrypts `ciphertext` under every shift in 1..=25.
pub fn generate_all_shifts(ciphertext: &str) -> CandidateSet {
    CANDIDATE_SHIFTS
        .map(|shift| (shift, decrypt(ciphertext, shift)))
        .collect()
}

/// Picks the highest-scoring candidate.
///
/// Candidates are visited in ascending shift order and only a strictly
/// greater score replaces the current best, so ties go to the lowest shift.
pub fn select_best(candidates: &CandidateSet) -> Option<ScoredCandidate> {
    let mut best: Option<ScoredCandidate> = None;

    for (shift, text) in candidates.iter() {
        let confidence = score(text);
        trace!(shift, confidence, "scored candidate");

        if best.as_ref().map_or(true, |b| confidence > b.score) {
            best = Some(ScoredCandidate {
                shift,
                text: text.to_string(),
                score: confidence,
            });
        }
    }

    if let Some(b) = &best {
        debug!(shift = b.shift, score = b.score, "selected best candidate");
    }

    best
}

/// Every candidate scored, best first. Equal scores keep ascending shift order.
pub fn rank(candidates: &CandidateSet) -> Vec<ScoredCandidate> {
    let mut ranked: Vec<ScoredCandidate> = candidates
        .iter()
        .map(|(shift, text)| ScoredCandidate {
            shift,
            text: text.to_string(),
            score: score(text),
        })
        .collect();

    // Stable sort; the input is already in shift order.
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

pub fn crack(ciphertext: &str) -> CrackReport {
    let candidates = generate_all_shifts(ciphertext);
    debug!(count = candidates.len(), "generated candidates");

    let best = select_best(&candidates);

    CrackReport { best, candidates }
}
