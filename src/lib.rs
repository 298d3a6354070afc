#[macro_use]
extern crate lazy_static;

pub mod algos;
pub mod constants;
pub mod error;
pub mod logging;
pub mod menu;
pub mod structs;
pub mod traits;
pub mod utils;

pub use algos::ceasar::{decrypt, encrypt};
pub use algos::scoring::{crack, generate_all_shifts, score, select_best};
pub use structs::{Caesar, CandidateSet, CrackReport, ScoredCandidate};
