pub mod alphabet;
pub mod candidate;
pub mod error;
pub mod rng;
pub mod search;
pub mod selection;

// Re-export commonly used types for convenience
pub use alphabet::Alphabet;
pub use candidate::Candidate;
pub use error::{Result, SearchError};
pub use rng::RandomNumberGenerator;
pub use search::{GenerationStats, SearchConfig, SearchEngine, SearchResult};
pub use selection::TournamentSelector;
