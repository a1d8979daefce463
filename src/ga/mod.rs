//! Genetic-algorithm scheduling.
//!
//! # Encoding
//!
//! Chromosomes use the permutation-with-repetition encoding: a sequence of
//! job IDs where the k-th occurrence of job `j` denotes `j`'s k-th
//! operation. Every permutation of the multiset is precedence-feasible, so
//! no operator needs a repair step.
//!
//! # Submodules
//!
//! - [`operators`]: Runtime-selectable crossover and mutation strategies
//!
//! # Reference
//! - Cheng et al. (1996), "A Tutorial Survey of JSSP using GA"
//! - Bierwirth (1995), "A generalized permutation approach to JSSP"

mod chromosome;
mod decoder;
mod engine;
pub mod operators;
mod scheduler;

pub use chromosome::{
    job_crossover, linear_order_crossover, nearby_swap_mutation, shift_mutation, Chromosome,
};
pub use decoder::decode;
pub use engine::{GaConfig, GaProblem, GaResult, GaRunner, GenerationStats, Individual};
pub use operators::{CrossoverType, GeneticOperators, MutationType};
pub use scheduler::{GaOutcome, GeneticScheduler};
