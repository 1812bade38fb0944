//! # SearchEngine
//!
//! The generation loop. The engine builds a random initial population, then
//! repeats evaluate/select/recombine/mutate until the target is matched
//! exactly or the generation budget runs out. Elitism carries the best
//! candidates into the next generation unchanged, so the retained best
//! fitness never decreases.
//!
//! ## Example
//!
//! ```rust
//! use genseek::alphabet::Alphabet;
//! use genseek::rng::RandomNumberGenerator;
//! use genseek::search::{SearchConfig, SearchEngine};
//!
//! let alphabet = Alphabet::new("ab").unwrap();
//! let config = SearchConfig::builder("ab", alphabet)
//!     .population_size(20)
//!     .max_generations(50)
//!     .build();
//!
//! let engine = SearchEngine::new(config);
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let result = engine.run(&mut rng).unwrap();
//!
//! // Success and exhaustion share one shape; the caller compares against
//! // the target to tell them apart.
//! assert!(result.generations <= 50);
//! ```

use std::cmp::Reverse;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info};

use crate::candidate::Candidate;
use crate::error::Result;
use crate::rng::RandomNumberGenerator;
use crate::selection::TournamentSelector;

use super::config::SearchConfig;

/// The outcome of a search run: the best candidate found and the number of
/// generations it took.
///
/// On an exact match, `generations` is the 0-based index of the generation
/// whose best candidate equals the target. On exhaustion it equals the
/// configured generation cap and `best` is the best candidate seen across
/// the whole run. There is no separate success flag; callers needing one
/// compare `best` against the target.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The best candidate found, rendered as a string.
    pub best: String,
    /// The number of generations used.
    pub generations: usize,
}

/// A per-generation snapshot handed to the progress callback of
/// [`SearchEngine::run_with_stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationStats {
    /// 0-based generation index.
    pub generation: usize,
    /// Fitness of the generation's best candidate.
    pub best_fitness: usize,
}

/// Owns one search configuration and runs the generation loop for it.
///
/// A single run executes synchronously on the calling thread and owns its
/// population exclusively; independent engines may run concurrently without
/// shared state.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    config: SearchConfig,
}

impl SearchEngine {
    /// Creates a new `SearchEngine` for the given configuration.
    ///
    /// The configuration is validated when a run starts, not here.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Returns the engine's configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs the search to completion.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Configuration` if the configuration is invalid;
    /// the error is raised before any generation executes. A valid
    /// configuration cannot fail mid-run: the loop terminates within the
    /// generation cap by construction, and non-convergence yields the
    /// best-so-far candidate rather than an error.
    pub fn run(&self, rng: &mut RandomNumberGenerator) -> Result<SearchResult> {
        self.run_loop(rng, None, &mut |_| {})
    }

    /// Runs the search, polling `cancel` once per generation boundary.
    ///
    /// The flag is read between the termination check and breeding. When it
    /// is set, the run stops and returns the best candidate so far together
    /// with the index of the generation at which cancellation was observed.
    /// The engine owns no concurrency primitives; the flag belongs to the
    /// host, which typically runs this method on a worker thread.
    ///
    /// # Errors
    ///
    /// Same as [`run`](SearchEngine::run).
    pub fn run_cancellable(
        &self,
        rng: &mut RandomNumberGenerator,
        cancel: &AtomicBool,
    ) -> Result<SearchResult> {
        self.run_loop(rng, Some(cancel), &mut |_| {})
    }

    /// Runs the search, invoking `on_generation` once per evaluated
    /// generation with the generation index and its best fitness.
    ///
    /// # Errors
    ///
    /// Same as [`run`](SearchEngine::run).
    pub fn run_with_stats<F>(
        &self,
        rng: &mut RandomNumberGenerator,
        mut on_generation: F,
    ) -> Result<SearchResult>
    where
        F: FnMut(GenerationStats),
    {
        self.run_loop(rng, None, &mut on_generation)
    }

    fn run_loop(
        &self,
        rng: &mut RandomNumberGenerator,
        cancel: Option<&AtomicBool>,
        on_generation: &mut dyn FnMut(GenerationStats),
    ) -> Result<SearchResult> {
        self.config.validate()?;

        let target: Vec<char> = self.config.get_target().chars().collect();
        let length = target.len();
        let alphabet = self.config.get_alphabet();
        let population_size = self.config.get_population_size();
        let elite_count = self.config.get_elite_count();
        let mutation_rate = self.config.get_mutation_rate();
        let selector = TournamentSelector::new(self.config.get_tournament_size())?;

        let mut population: Vec<Candidate> = (0..population_size)
            .map(|_| Candidate::random(length, alphabet, rng))
            .collect();
        let mut best = population[0].clone();

        for generation in 0..self.config.get_max_generations() {
            // Fitness is recomputed per sort, never stored across generations.
            population.sort_by_cached_key(|candidate| Reverse(candidate.fitness(&target)));

            best = population[0].clone();
            let best_fitness = best.fitness(&target);
            debug!(generation, best_fitness, "generation evaluated");
            on_generation(GenerationStats {
                generation,
                best_fitness,
            });

            if best_fitness == length {
                info!(generation, "target matched");
                return Ok(SearchResult {
                    best: best.to_string(),
                    generations: generation,
                });
            }

            if let Some(flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    info!(generation, "search cancelled");
                    return Ok(SearchResult {
                        best: best.to_string(),
                        generations: generation,
                    });
                }
            }

            let mut next_population = population[..elite_count].to_vec();
            while next_population.len() < population_size {
                let first = selector.select(&population, &target, rng)?;
                let second = selector.select(&population, &target, rng)?;
                // Single-symbol targets have no defined split point, so the
                // child starts as a copy of the first parent.
                let child = if length < 2 {
                    first.clone()
                } else {
                    first.crossover(second, rng)
                };
                next_population.push(child.mutated(alphabet, mutation_rate, rng));
            }

            population = next_population;
        }

        let generations = self.config.get_max_generations();
        info!(generations, "generation budget exhausted");
        Ok(SearchResult {
            best: best.to_string(),
            generations,
        })
    }
}
