//! # Candidate
//!
//! The `Candidate` struct represents one proposed solution string in the
//! search population: a fixed-length sequence of symbols drawn from an
//! [`Alphabet`](crate::alphabet::Alphabet). Candidates are value types with
//! no identity beyond their content, and every variation operator returns a
//! new candidate rather than mutating in place.
//!
//! ## Example
//!
//! ```rust
//! use genseek::alphabet::Alphabet;
//! use genseek::candidate::Candidate;
//! use genseek::rng::RandomNumberGenerator;
//!
//! let alphabet = Alphabet::new("ab").unwrap();
//! let mut rng = RandomNumberGenerator::from_seed(42);
//!
//! let candidate = Candidate::random(4, &alphabet, &mut rng);
//! assert_eq!(candidate.len(), 4);
//! ```

use std::fmt;

use crate::alphabet::Alphabet;
use crate::rng::RandomNumberGenerator;

/// One proposed solution string in the search population.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    genes: Vec<char>,
}

impl Candidate {
    /// Generates a random candidate of the given length.
    ///
    /// Each position is drawn uniformly and independently from `alphabet`,
    /// with replacement, so duplicate alphabet symbols bias the draw
    /// proportionally to their multiplicity.
    pub fn random(length: usize, alphabet: &Alphabet, rng: &mut RandomNumberGenerator) -> Self {
        let genes = (0..length).map(|_| alphabet.choose(rng)).collect();
        Self { genes }
    }

    /// Returns the candidate's length in symbols.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` if the candidate has no symbols.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Returns the candidate's symbols in order.
    pub fn genes(&self) -> &[char] {
        &self.genes
    }

    /// Scores this candidate against `target`: the number of positions where
    /// both hold the same symbol.
    ///
    /// The maximum value equals the target length and is the exact success
    /// threshold of the search. Both sequences must have the same length;
    /// the engine only ever constructs candidates at the target's length, so
    /// a mismatch is an internal invariant violation.
    pub fn fitness(&self, target: &[char]) -> usize {
        debug_assert_eq!(self.genes.len(), target.len());
        self.genes
            .iter()
            .zip(target)
            .filter(|(gene, expected)| gene == expected)
            .count()
    }

    /// Produces a child by single-point crossover.
    ///
    /// The split index is drawn uniformly from `1..=len-1`; the child takes
    /// this candidate's prefix up to the split and `other`'s suffix from it.
    /// Neither parent is modified. Both parents must share a length of at
    /// least 2; the engine skips crossover for single-symbol targets.
    pub fn crossover(&self, other: &Self, rng: &mut RandomNumberGenerator) -> Self {
        debug_assert_eq!(self.genes.len(), other.genes.len());
        debug_assert!(self.genes.len() >= 2);

        let split = 1 + rng.gen_index(self.genes.len() - 1);
        let mut genes = self.genes[..split].to_vec();
        genes.extend_from_slice(&other.genes[split..]);
        Self { genes }
    }

    /// Produces a copy with each position independently redrawn from
    /// `alphabet` with probability `rate`.
    ///
    /// A rate of 0.0 returns an equal candidate; a rate of 1.0 redraws every
    /// position, which may still reproduce the original symbols by chance.
    ///
    /// # Panics
    ///
    /// Panics if `rate` is not in `[0.0, 1.0]`; the engine validates the
    /// rate before any generation runs.
    pub fn mutated(
        &self,
        alphabet: &Alphabet,
        rate: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Self {
        let genes = self
            .genes
            .iter()
            .map(|&gene| {
                if rng.gen_bool(rate) {
                    alphabet.choose(rng)
                } else {
                    gene
                }
            })
            .collect();
        Self { genes }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for gene in &self.genes {
            write!(f, "{}", gene)?;
        }
        Ok(())
    }
}

impl From<&str> for Candidate {
    fn from(value: &str) -> Self {
        Self {
            genes: value.chars().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_random_candidate_length_and_symbols() {
        let alphabet = Alphabet::new("abc").unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let candidate = Candidate::random(8, &alphabet, &mut rng);

        assert_eq!(candidate.len(), 8);
        for &gene in candidate.genes() {
            assert!(alphabet.contains(gene));
        }
    }

    #[test]
    fn test_fitness_counts_positional_matches() {
        let candidate = Candidate::from("abcd");

        assert_eq!(candidate.fitness(&chars("abcd")), 4);
        assert_eq!(candidate.fitness(&chars("abXX")), 2);
        assert_eq!(candidate.fitness(&chars("dcba")), 0);
        // "ab" vs "ba" share symbols but no positions
        assert_eq!(Candidate::from("ab").fitness(&chars("ba")), 0);
    }

    #[test]
    fn test_fitness_against_self_is_length() {
        for value in ["a", "ab", "hello world", "aaaa"] {
            let candidate = Candidate::from(value);
            assert_eq!(candidate.fitness(&chars(value)), value.chars().count());
        }
    }

    #[test]
    fn test_crossover_is_prefix_plus_suffix() {
        let parent_a = Candidate::from("aaaa");
        let parent_b = Candidate::from("bbbb");

        for seed in 0..50 {
            let mut rng = RandomNumberGenerator::from_seed(seed);
            let child = parent_a.crossover(&parent_b, &mut rng);

            assert_eq!(child.len(), 4);
            let genes = child.genes();
            let split = genes.iter().take_while(|&&g| g == 'a').count();
            assert!((1..=3).contains(&split));
            assert!(genes[split..].iter().all(|&g| g == 'b'));
        }

        // Parents are untouched
        assert_eq!(parent_a, Candidate::from("aaaa"));
        assert_eq!(parent_b, Candidate::from("bbbb"));
    }

    #[test]
    fn test_mutated_rate_zero_is_identity() {
        let alphabet = Alphabet::new("abc").unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);
        let candidate = Candidate::from("abcabc");

        let mutated = candidate.mutated(&alphabet, 0.0, &mut rng);

        assert_eq!(mutated, candidate);
    }

    #[test]
    fn test_mutated_rate_one_redraws_every_position() {
        // A disjoint alphabet makes every redraw observable.
        let alphabet = Alphabet::new("xyz").unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);
        let candidate = Candidate::from("abcabc");

        let mutated = candidate.mutated(&alphabet, 1.0, &mut rng);

        assert_eq!(mutated.len(), candidate.len());
        for &gene in mutated.genes() {
            assert!(alphabet.contains(gene));
        }
    }

    #[test]
    fn test_mutated_does_not_alias_input() {
        let alphabet = Alphabet::new("z").unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);
        let candidate = Candidate::from("aa");

        let mutated = candidate.mutated(&alphabet, 1.0, &mut rng);

        assert_eq!(candidate, Candidate::from("aa"));
        assert_eq!(mutated, Candidate::from("zz"));
    }

    #[test]
    fn test_display_round_trips() {
        let candidate = Candidate::from("hello");

        assert_eq!(candidate.to_string(), "hello");
    }
}
