//! Generic generational GA engine.
//!
//! The engine knows nothing about scheduling: a [`GaProblem`] supplies
//! initialization, evaluation, crossover, and mutation, and the engine
//! runs the generational loop — tournament selection, offspring
//! production, elitist carry-over, and best-so-far tracking — for a fixed
//! number of generations. Lower fitness is better (minimization).
//!
//! Evaluation is fallible by design: a decode failure signals a broken
//! operator invariant and aborts the run instead of being repaired.

use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::error::SchedulerError;

/// A candidate solution carrying its own fitness.
pub trait Individual: Clone {
    /// Current fitness (lower = better; `f64::INFINITY` = unevaluated).
    fn fitness(&self) -> f64;

    /// Stores the fitness computed by [`GaProblem::evaluate`].
    fn set_fitness(&mut self, fitness: f64);
}

/// Defines a GA optimization problem.
pub trait GaProblem {
    /// The solution type for this problem.
    type Individual: Individual;

    /// Creates a random (valid) individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual.
    ///
    /// An error here is a bug signal (infeasible genome), not an expected
    /// runtime condition, and aborts the run.
    fn evaluate(&self, individual: &Self::Individual) -> Result<f64, SchedulerError>;

    /// Produces two offspring by recombining two parents.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        rng: &mut R,
    ) -> (Self::Individual, Self::Individual);

    /// Mutates an individual in place.
    fn mutate<R: Rng>(&self, individual: &mut Self::Individual, rng: &mut R);
}

/// GA engine parameters.
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of individuals per generation (>= 2).
    pub population_size: usize,
    /// Number of generations to run (>= 1).
    pub max_generations: usize,
    /// Per-child mutation probability (0.0..=1.0).
    pub mutation_rate: f64,
    /// Tournament size for parent selection (>= 1).
    pub tournament_size: usize,
    /// RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Emit per-generation progress at `info` level instead of `debug`.
    pub verbose: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 100,
            mutation_rate: 0.05,
            tournament_size: 3,
            seed: None,
            verbose: false,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the generation count.
    pub fn with_max_generations(mut self, generations: usize) -> Self {
        self.max_generations = generations;
        self
    }

    /// Sets the per-child mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, size: usize) -> Self {
        self.tournament_size = size;
        self
    }

    /// Fixes the RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables per-generation progress reporting.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Checks parameter bounds.
    pub fn validate(&self) -> Result<(), SchedulerError> {
        if self.population_size < 2 {
            return Err(SchedulerError::configuration(format!(
                "total_population must be >= 2, got {}",
                self.population_size
            )));
        }
        if self.max_generations < 1 {
            return Err(SchedulerError::configuration(
                "max_generation must be >= 1",
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(SchedulerError::configuration(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.tournament_size < 1 {
            return Err(SchedulerError::configuration(
                "tournament_size must be >= 1",
            ));
        }
        Ok(())
    }
}

/// Per-generation summary.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationStats {
    /// Generation number (1-based).
    pub generation: usize,
    /// Best fitness seen so far (monotonically non-increasing).
    pub best_fitness: f64,
    /// Mean fitness of the generation's population.
    pub mean_fitness: f64,
}

/// Outcome of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult<I> {
    /// Best individual found.
    pub best: I,
    /// Fitness of the best individual.
    pub best_fitness: f64,
    /// Generations executed.
    pub generations: usize,
    /// Wall-clock time spent in the loop.
    pub elapsed: Duration,
    /// Per-generation statistics.
    pub history: Vec<GenerationStats>,
}

/// Runs the generational loop for a [`GaProblem`].
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA to completion.
    ///
    /// Termination is purely generation-count-based. The single best
    /// individual seen so far is carried unchanged into every next
    /// population (elitism), so the best fitness never regresses.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Individual>, SchedulerError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let start = Instant::now();

        // Initial population.
        let mut population = Vec::with_capacity(config.population_size);
        for _ in 0..config.population_size {
            let mut individual = problem.create_individual(&mut rng);
            let fitness = problem.evaluate(&individual)?;
            individual.set_fitness(fitness);
            population.push(individual);
        }

        let mut best = Self::best_of(&population).clone();
        debug!(
            population = config.population_size,
            initial_best = best.fitness(),
            "population initialized"
        );

        let mut history = Vec::with_capacity(config.max_generations);
        for generation in 1..=config.max_generations {
            let mut next = Vec::with_capacity(config.population_size);
            // Elitist carry-over: cached fitness, no re-evaluation.
            next.push(best.clone());

            while next.len() < config.population_size {
                let p1 = Self::tournament(&population, config.tournament_size, &mut rng);
                let p2 = Self::tournament(&population, config.tournament_size, &mut rng);
                let (c1, c2) = problem.crossover(p1, p2, &mut rng);

                for mut child in [c1, c2] {
                    if next.len() >= config.population_size {
                        break;
                    }
                    if rng.random_bool(config.mutation_rate) {
                        problem.mutate(&mut child, &mut rng);
                    }
                    let fitness = problem.evaluate(&child)?;
                    child.set_fitness(fitness);
                    next.push(child);
                }
            }

            population = next;

            let generation_best = Self::best_of(&population);
            if generation_best.fitness() < best.fitness() {
                best = generation_best.clone();
            }

            let mean = population.iter().map(|i| i.fitness()).sum::<f64>()
                / population.len() as f64;
            if config.verbose {
                info!(
                    generation,
                    best = best.fitness(),
                    mean,
                    "generation complete"
                );
            } else {
                debug!(
                    generation,
                    best = best.fitness(),
                    mean,
                    "generation complete"
                );
            }
            history.push(GenerationStats {
                generation,
                best_fitness: best.fitness(),
                mean_fitness: mean,
            });
        }

        let best_fitness = best.fitness();
        Ok(GaResult {
            best,
            best_fitness,
            generations: config.max_generations,
            elapsed: start.elapsed(),
            history,
        })
    }

    /// Tournament selection: sample `k` uniformly with replacement,
    /// keep the fittest.
    fn tournament<'a, I: Individual, R: Rng>(
        population: &'a [I],
        k: usize,
        rng: &mut R,
    ) -> &'a I {
        let mut winner = &population[rng.random_range(0..population.len())];
        for _ in 1..k {
            let challenger = &population[rng.random_range(0..population.len())];
            if challenger.fitness() < winner.fitness() {
                winner = challenger;
            }
        }
        winner
    }

    fn best_of<I: Individual>(population: &[I]) -> &I {
        population
            .iter()
            .min_by(|a, b| a.fitness().total_cmp(&b.fitness()))
            .expect("population is never empty")
    }
}
