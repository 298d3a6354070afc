use std::collections::BTreeMap;

/// A keyed Caesar cipher. Implements [`Encryptor`](crate::traits::Encryptor)
/// and [`Decryptor`](crate::traits::Decryptor).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Caesar {
    pub shift: i64,
}

/// Decryptions of one ciphertext keyed by the shift that produced them.
///
/// Backed by a `BTreeMap`, so iteration is always in ascending shift order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidateSet {
    by_shift: BTreeMap<i64, String>,
}

impl CandidateSet {
    pub fn len(&self) -> usize {
        self.by_shift.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_shift.is_empty()
    }

    pub fn get(&self, shift: i64) -> Option<&str> {
        self.by_shift.get(&shift).map(String::as_str)
    }

    pub fn shifts(&self) -> impl Iterator<Item = i64> + '_ {
        self.by_shift.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, &str)> + '_ {
        self.by_shift
            .iter()
            .map(|(shift, text)| (*shift, text.as_str()))
    }
}

impl FromIterator<(i64, String)> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = (i64, String)>>(iter: I) -> Self {
        CandidateSet {
            by_shift: iter.into_iter().collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScoredCandidate {
    pub shift: i64,
    pub text: String,
    pub score: f64,
}

/// Outcome of cracking one ciphertext: the best guess plus every candidate.
#[derive(Clone, Debug, PartialEq)]
pub struct CrackReport {
    pub best: Option<ScoredCandidate>,
    pub candidates: CandidateSet,
}
