use serde::{Deserialize, Serialize};

use crate::token::Token;

/// Output of one classification pass.
///
/// Field names are the wire names used by the HTTP envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub odd_numbers: Vec<String>,
    pub even_numbers: Vec<String>,
    pub alphabets: Vec<String>,
    pub special_characters: Vec<String>,
    pub sum: String,
    pub concat_string: String,
}

impl ClassificationResult {
    /// Total number of tokens across the four category lists.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.odd_numbers.len()
            + self.even_numbers.len()
            + self.alphabets.len()
            + self.special_characters.len()
    }
}

/// Accumulates tokens in input order and produces a [`ClassificationResult`].
#[derive(Debug, Default)]
pub struct Classifier {
    result: ClassificationResult,
    sum: i128,
    letters: String,
}

impl Classifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Route one token to its category.
    pub fn push(&mut self, raw: &str) {
        let token = Token::classify(raw);
        let verbatim = token.raw().to_string();
        match token {
            Token::Number(number) => {
                if number.is_even {
                    self.result.even_numbers.push(verbatim);
                } else {
                    self.result.odd_numbers.push(verbatim);
                }
                self.sum = self.sum.saturating_add(number.value);
            }
            Token::Alpha(word) => {
                self.result.alphabets.push(word.to_ascii_uppercase());
                self.letters.push_str(word);
            }
            Token::Special(_) => self.result.special_characters.push(verbatim),
        }
    }

    /// Compute the derived fields and return the result.
    #[must_use]
    pub fn finish(mut self) -> ClassificationResult {
        self.result.sum = self.sum.to_string();
        self.result.concat_string = reverse_alternating_caps(&self.letters);
        self.result
    }
}

/// Classify `tokens` in order.
///
/// Total over any finite input: an empty sequence yields empty lists,
/// `sum == "0"` and an empty `concat_string`.
#[must_use]
pub fn classify<I, S>(tokens: I) -> ClassificationResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut classifier = Classifier::new();
    for token in tokens {
        classifier.push(token.as_ref());
    }
    classifier.finish()
}

/// Reverse `letters`, then upper-case even positions and lower-case odd ones.
#[must_use]
pub fn reverse_alternating_caps(letters: &str) -> String {
    letters
        .chars()
        .rev()
        .enumerate()
        .map(|(i, c)| {
            if i % 2 == 0 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}
