pub mod ceasar;
pub mod keyed;
pub mod scoring;
