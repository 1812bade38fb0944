//! # SearchConfig
//!
//! The `SearchConfig` struct carries everything a search run needs: the
//! target string, the alphabet, and the numeric knobs of the generation
//! loop. Defaults follow the conventional values for this kind of search:
//! a population of 100, a budget of 1000 generations, a 1% per-symbol
//! mutation rate, tournaments of 5, and 10 elites.
//!
//! ## Example
//!
//! ```rust
//! use genseek::alphabet::Alphabet;
//! use genseek::search::SearchConfig;
//!
//! let alphabet = Alphabet::new("abcdefgh").unwrap();
//!
//! // Defaults
//! let config = SearchConfig::new("cafe", alphabet.clone());
//! assert_eq!(config.get_population_size(), 100);
//!
//! // Builder for custom parameters
//! let config = SearchConfig::builder("cafe", alphabet)
//!     .population_size(50)
//!     .max_generations(200)
//!     .mutation_rate(0.05)
//!     .build();
//! assert_eq!(config.get_max_generations(), 200);
//! ```

use crate::alphabet::Alphabet;
use crate::error::{Result, SearchError};

/// Default population size per generation.
pub const DEFAULT_POPULATION_SIZE: usize = 100;
/// Default cap on the number of generations.
pub const DEFAULT_MAX_GENERATIONS: usize = 1000;
/// Default per-symbol mutation probability.
pub const DEFAULT_MUTATION_RATE: f64 = 0.01;
/// Default number of candidates per tournament.
pub const DEFAULT_TOURNAMENT_SIZE: usize = 5;
/// Default number of elites carried over unchanged each generation.
pub const DEFAULT_ELITE_COUNT: usize = 10;

/// Smallest population the engine accepts, regardless of tournament size.
const MIN_POPULATION_SIZE: usize = 10;

/// Configuration options for one search run.
///
/// The target and alphabet are fixed for the duration of the run. All
/// parameters are checked by [`validate`](SearchConfig::validate) before any
/// generation executes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct SearchConfig {
    target: String,
    alphabet: Alphabet,
    population_size: usize,
    max_generations: usize,
    mutation_rate: f64,
    tournament_size: usize,
    elite_count: usize,
}

impl SearchConfig {
    /// Creates a configuration for `target` over `alphabet` with default
    /// loop parameters.
    pub fn new(target: impl Into<String>, alphabet: Alphabet) -> Self {
        Self {
            target: target.into(),
            alphabet,
            population_size: DEFAULT_POPULATION_SIZE,
            max_generations: DEFAULT_MAX_GENERATIONS,
            mutation_rate: DEFAULT_MUTATION_RATE,
            tournament_size: DEFAULT_TOURNAMENT_SIZE,
            elite_count: DEFAULT_ELITE_COUNT,
        }
    }

    /// Returns a builder for a configuration with custom loop parameters.
    pub fn builder(target: impl Into<String>, alphabet: Alphabet) -> SearchConfigBuilder {
        SearchConfigBuilder {
            target: target.into(),
            alphabet,
            population_size: None,
            max_generations: None,
            mutation_rate: None,
            tournament_size: None,
            elite_count: None,
        }
    }

    pub fn get_target(&self) -> &str {
        &self.target
    }

    pub fn get_alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_max_generations(&self) -> usize {
        self.max_generations
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_tournament_size(&self) -> usize {
        self.tournament_size
    }

    pub fn get_elite_count(&self) -> usize {
        self.elite_count
    }

    /// Checks every parameter of the configuration.
    ///
    /// Called by the engine before any generation runs, so invalid
    /// configurations are signaled synchronously and never discovered
    /// mid-loop.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Configuration` naming the offending parameter
    /// if:
    /// - the target is empty
    /// - the tournament size is 0, or exceeds the population size
    /// - the population size is below 10
    /// - the elite count exceeds the population size
    /// - the mutation rate is not a finite value in `[0.0, 1.0]`
    /// - the generation cap is 0
    pub fn validate(&self) -> Result<()> {
        if self.target.is_empty() {
            return Err(SearchError::Configuration(
                "target must not be empty".to_string(),
            ));
        }

        if self.tournament_size < 1 {
            return Err(SearchError::Configuration(
                "tournament size must be at least 1".to_string(),
            ));
        }

        let population_floor = MIN_POPULATION_SIZE.max(self.tournament_size);
        if self.population_size < population_floor {
            return Err(SearchError::Configuration(format!(
                "population size ({}) must be at least {}",
                self.population_size, population_floor
            )));
        }

        if self.elite_count > self.population_size {
            return Err(SearchError::Configuration(format!(
                "elite count ({}) cannot exceed population size ({})",
                self.elite_count, self.population_size
            )));
        }

        if !self.mutation_rate.is_finite() || !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(SearchError::Configuration(format!(
                "mutation rate ({}) must be within [0.0, 1.0]",
                self.mutation_rate
            )));
        }

        if self.max_generations < 1 {
            return Err(SearchError::Configuration(
                "maximum generations must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for `SearchConfig`.
///
/// Unset parameters fall back to the crate defaults in
/// [`build`](SearchConfigBuilder::build).
#[derive(Debug, Clone)]
pub struct SearchConfigBuilder {
    target: String,
    alphabet: Alphabet,
    population_size: Option<usize>,
    max_generations: Option<usize>,
    mutation_rate: Option<f64>,
    tournament_size: Option<usize>,
    elite_count: Option<usize>,
}

impl SearchConfigBuilder {
    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the cap on the number of generations.
    pub fn max_generations(mut self, value: usize) -> Self {
        self.max_generations = Some(value);
        self
    }

    /// Sets the per-symbol mutation probability.
    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    /// Sets the tournament size.
    pub fn tournament_size(mut self, value: usize) -> Self {
        self.tournament_size = Some(value);
        self
    }

    /// Sets the number of elites carried over each generation.
    pub fn elite_count(mut self, value: usize) -> Self {
        self.elite_count = Some(value);
        self
    }

    /// Builds the `SearchConfig` instance.
    ///
    /// Validation happens when the engine runs, not here, so a builder can
    /// describe an invalid configuration for error-path testing.
    pub fn build(self) -> SearchConfig {
        SearchConfig {
            target: self.target,
            alphabet: self.alphabet,
            population_size: self.population_size.unwrap_or(DEFAULT_POPULATION_SIZE),
            max_generations: self.max_generations.unwrap_or(DEFAULT_MAX_GENERATIONS),
            mutation_rate: self.mutation_rate.unwrap_or(DEFAULT_MUTATION_RATE),
            tournament_size: self.tournament_size.unwrap_or(DEFAULT_TOURNAMENT_SIZE),
            elite_count: self.elite_count.unwrap_or(DEFAULT_ELITE_COUNT),
        }
    }
}
