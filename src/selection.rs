//! # Tournament Selection
//!
//! Parent selection by tournament: a small group of candidates is sampled
//! uniformly at random without replacement, and the fittest member of the
//! group becomes the parent. Smaller tournaments mean more exploration,
//! larger tournaments more selection pressure.

use crate::candidate::Candidate;
use crate::error::{Result, SearchError};
use crate::rng::RandomNumberGenerator;

/// A selection strategy that picks one parent per tournament.
///
/// Each call samples `tournament_size` distinct candidates from the
/// population and returns the one with the highest fitness against the
/// target. Repeated calls on the same population draw independent
/// tournaments.
///
/// When several sampled candidates share the top fitness, the one sampled
/// earliest wins.
///
/// # Examples
///
/// ```rust
/// use genseek::candidate::Candidate;
/// use genseek::rng::RandomNumberGenerator;
/// use genseek::selection::TournamentSelector;
///
/// let population = vec![
///     Candidate::from("ax"),
///     Candidate::from("ab"),
///     Candidate::from("xx"),
/// ];
/// let target: Vec<char> = "ab".chars().collect();
/// let mut rng = RandomNumberGenerator::from_seed(42);
///
/// let selector = TournamentSelector::new(3).unwrap();
/// let parent = selector.select(&population, &target, &mut rng).unwrap();
///
/// // The tournament covers the whole population, so the exact match wins.
/// assert_eq!(parent.to_string(), "ab");
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct TournamentSelector {
    tournament_size: usize,
}

impl TournamentSelector {
    /// Creates a new `TournamentSelector` with the specified tournament size.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Configuration` if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(SearchError::Configuration(
                "tournament size must be at least 1".to_string(),
            ));
        }
        Ok(Self { tournament_size })
    }

    /// Returns the number of candidates drawn into each tournament.
    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs one tournament and returns the winner.
    ///
    /// Samples `tournament_size` distinct candidates uniformly without
    /// replacement and returns the one with the highest fitness against
    /// `target`; ties go to the earliest-sampled candidate.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::EmptyPopulation` if the population is empty,
    /// or `SearchError::Configuration` if it holds fewer candidates than
    /// the tournament size.
    pub fn select<'a>(
        &self,
        population: &'a [Candidate],
        target: &[char],
        rng: &mut RandomNumberGenerator,
    ) -> Result<&'a Candidate> {
        if population.is_empty() {
            return Err(SearchError::EmptyPopulation);
        }

        if population.len() < self.tournament_size {
            return Err(SearchError::Configuration(format!(
                "population size ({}) is smaller than the tournament size ({})",
                population.len(),
                self.tournament_size
            )));
        }

        let participants = rng.sample_indices(population.len(), self.tournament_size);

        let mut winner = &population[participants[0]];
        let mut winner_fitness = winner.fitness(target);

        for &index in &participants[1..] {
            let contender = &population[index];
            let contender_fitness = contender.fitness(target);
            if contender_fitness > winner_fitness {
                winner = contender;
                winner_fitness = contender_fitness;
            }
        }

        Ok(winner)
    }
}

impl Default for TournamentSelector {
    /// Creates a selector with the standard tournament size of 5.
    fn default() -> Self {
        Self { tournament_size: 5 }
    }
}
