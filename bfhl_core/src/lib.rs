#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Token classification: partitions a token list into odd numbers, even
//! numbers, alphabetic words and special tokens, and derives the numeric sum
//! and the reversed alternating-caps concatenation of the letters.

pub mod classifier;
pub mod token;

pub use classifier::{ClassificationResult, Classifier, classify, reverse_alternating_caps};
pub use token::{NumberToken, Token};
