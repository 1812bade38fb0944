//! # Alphabet
//!
//! The `Alphabet` struct holds the ordered set of symbols candidates are
//! drawn from. It is immutable for the duration of a run. Duplicate symbols
//! are permitted and bias sampling proportionally to their multiplicity.

use crate::error::{Result, SearchError};
use crate::rng::RandomNumberGenerator;

/// An ordered, non-empty sequence of symbols for candidate generation and
/// mutation.
///
/// Emptiness is rejected at construction, so every `Alphabet` value can be
/// sampled from. Uniqueness is not required: an alphabet of `"aab"` draws
/// `'a'` twice as often as `'b'`.
///
/// # Examples
///
/// ```rust
/// use genseek::alphabet::Alphabet;
///
/// let alphabet = Alphabet::new("abc").unwrap();
/// assert_eq!(alphabet.len(), 3);
///
/// assert!(Alphabet::new("").is_err());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Creates a new `Alphabet` from the characters of `symbols`.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Configuration` if `symbols` is empty.
    pub fn new(symbols: &str) -> Result<Self> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.is_empty() {
            return Err(SearchError::Configuration(
                "alphabet must contain at least one symbol".to_string(),
            ));
        }
        Ok(Self { symbols })
    }

    /// Creates the printable ASCII alphabet: letters, digits, and
    /// punctuation.
    ///
    /// This is the conventional character set for password-style targets.
    pub fn printable_ascii() -> Self {
        let symbols = ('!'..='~').collect();
        Self { symbols }
    }

    /// Returns the number of symbols, counting duplicates.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the alphabet has no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the symbols in order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Draws one symbol uniformly at random.
    pub fn choose(&self, rng: &mut RandomNumberGenerator) -> char {
        self.symbols[rng.gen_index(self.symbols.len())]
    }

    /// Returns whether `symbol` occurs in the alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_alphabet_rejected() {
        let result = Alphabet::new("");

        match result {
            Err(SearchError::Configuration(msg)) => {
                assert!(msg.contains("alphabet"));
            }
            _ => panic!("Expected Configuration error"),
        }
    }

    #[test]
    fn test_duplicates_preserved() {
        let alphabet = Alphabet::new("aab").unwrap();

        assert_eq!(alphabet.len(), 3);
        assert_eq!(alphabet.symbols(), &['a', 'a', 'b']);
    }

    #[test]
    fn test_choose_stays_in_alphabet() {
        let alphabet = Alphabet::new("xyz").unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        for _ in 0..100 {
            assert!(alphabet.contains(alphabet.choose(&mut rng)));
        }
    }

    #[test]
    fn test_single_symbol_alphabet() {
        let alphabet = Alphabet::new("a").unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        assert_eq!(alphabet.choose(&mut rng), 'a');
    }

    #[test]
    fn test_printable_ascii_bounds() {
        let alphabet = Alphabet::printable_ascii();

        assert!(alphabet.contains('a'));
        assert!(alphabet.contains('Z'));
        assert!(alphabet.contains('0'));
        assert!(alphabet.contains('!'));
        assert!(alphabet.contains('~'));
        assert!(!alphabet.contains(' '));
        assert_eq!(alphabet.len(), 94);
    }
}
