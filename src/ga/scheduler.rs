//! Genetic scheduler: the public entry point.
//!
//! [`GeneticScheduler`] owns the problem instance and drives the
//! generational loop: it seeds a population of random feasible
//! chromosomes, evaluates fitness by schedule decoding, breeds the next
//! generation through tournament selection, crossover, and mutation, and
//! carries the best chromosome found so far unchanged into each new
//! population. It reports the best makespan together with the wall-clock
//! time spent searching.

use std::time::Duration;

use rand::Rng;
use tracing::info;

use super::chromosome::Chromosome;
use super::decoder::decode;
use super::engine::{GaConfig, GaProblem, GaRunner, GenerationStats, Individual};
use super::operators::GeneticOperators;
use crate::error::SchedulerError;
use crate::models::{Instance, Job, Machine, Schedule};

/// Result of one `run_genetic` call.
#[derive(Debug, Clone)]
pub struct GaOutcome {
    /// Wall-clock time spent in the generational loop.
    pub elapsed: Duration,
    /// Best makespan found.
    pub best_makespan: i64,
    /// Decoded schedule achieving the best makespan.
    pub best_schedule: Schedule,
    /// Per-generation progress.
    pub history: Vec<GenerationStats>,
}

/// Genetic job-shop scheduler.
///
/// # Example
///
/// ```
/// use jobshop_ga::ga::GeneticScheduler;
/// use jobshop_ga::models::{Job, Machine};
///
/// let jobs = vec![
///     Job::new(0).with_operation(0, 3).with_operation(1, 2),
///     Job::new(1).with_operation(1, 2).with_operation(0, 4),
/// ];
/// let machines = vec![Machine::new(0), Machine::new(1)];
///
/// let scheduler = GeneticScheduler::new(machines, jobs).with_seed(42);
/// let outcome = scheduler.run_genetic(20, 50, false).unwrap();
/// assert_eq!(outcome.best_makespan, 7);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticScheduler {
    instance: Instance,
    operators: GeneticOperators,
    mutation_rate: f64,
    tournament_size: usize,
    seed: Option<u64>,
}

impl GeneticScheduler {
    /// Creates a scheduler over the given machines and jobs.
    ///
    /// The scheduler takes ownership of both lists; decoding never
    /// mutates them, so one scheduler can run any number of searches.
    pub fn new(machines: Vec<Machine>, jobs: Vec<Job>) -> Self {
        Self {
            instance: Instance::new(jobs, machines),
            operators: GeneticOperators::default(),
            mutation_rate: 0.05,
            tournament_size: 3,
            seed: None,
        }
    }

    /// Selects the crossover and mutation strategies.
    pub fn with_operators(mut self, operators: GeneticOperators) -> Self {
        self.operators = operators;
        self
    }

    /// Sets the per-child mutation probability (default 0.05).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the tournament size (default 3).
    pub fn with_tournament_size(mut self, size: usize) -> Self {
        self.tournament_size = size;
        self
    }

    /// Fixes the RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The problem instance this scheduler searches.
    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    /// Runs the genetic search.
    ///
    /// Evolves `total_population` chromosomes for exactly `max_generation`
    /// generations and returns the best schedule found plus the wall-clock
    /// time spent. `verbose` raises per-generation progress events from
    /// `debug` to `info` level; it does not change the returned values.
    ///
    /// # Errors
    /// [`SchedulerError::Configuration`] if `total_population < 2` or
    /// `max_generation < 1`.
    pub fn run_genetic(
        &self,
        total_population: usize,
        max_generation: usize,
        verbose: bool,
    ) -> Result<GaOutcome, SchedulerError> {
        let config = GaConfig::default()
            .with_population_size(total_population)
            .with_max_generations(max_generation)
            .with_mutation_rate(self.mutation_rate)
            .with_tournament_size(self.tournament_size)
            .with_verbose(verbose);
        let config = match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        };

        let result = GaRunner::run(self, &config)?;
        let best_schedule = decode(&self.instance, &result.best)?;
        let best_makespan = best_schedule.makespan();

        if verbose {
            info!(
                best_makespan,
                generations = result.generations,
                elapsed_ms = result.elapsed.as_millis() as u64,
                "genetic search finished"
            );
        }

        Ok(GaOutcome {
            elapsed: result.elapsed,
            best_makespan,
            best_schedule,
            history: result.history,
        })
    }
}

impl Individual for Chromosome {
    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

impl GaProblem for GeneticScheduler {
    type Individual = Chromosome;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Chromosome {
        Chromosome::random(&self.instance.jobs, rng)
    }

    fn evaluate(&self, individual: &Chromosome) -> Result<f64, SchedulerError> {
        let schedule = decode(&self.instance, individual)?;
        Ok(schedule.makespan() as f64)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &Chromosome,
        parent2: &Chromosome,
        rng: &mut R,
    ) -> (Chromosome, Chromosome) {
        self.operators
            .crossover(parent1, parent2, &self.instance.jobs, rng)
    }

    fn mutate<R: Rng>(&self, individual: &mut Chromosome, rng: &mut R) {
        self.operators.mutate(individual, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// J0 = [(M0,3),(M1,2)], J1 = [(M1,2),(M0,4)]: optimum makespan 7.
    fn toy_scheduler() -> GeneticScheduler {
        let jobs = vec![
            Job::new(0).with_operation(0, 3).with_operation(1, 2),
            Job::new(1).with_operation(1, 2).with_operation(0, 4),
        ];
        let machines = vec![Machine::new(0), Machine::new(1)];
        GeneticScheduler::new(machines, jobs)
    }

    #[test]
    fn test_population_below_two_is_configuration_error() {
        let scheduler = toy_scheduler();
        let err = scheduler.run_genetic(1, 50, false).unwrap_err();
        assert!(matches!(err, SchedulerError::Configuration(_)));
    }

    #[test]
    fn test_zero_generations_is_configuration_error() {
        let scheduler = toy_scheduler();
        let err = scheduler.run_genetic(20, 0, false).unwrap_err();
        assert!(matches!(err, SchedulerError::Configuration(_)));
    }

    #[test]
    fn test_finds_toy_optimum() {
        let scheduler = toy_scheduler().with_seed(42);
        let outcome = scheduler.run_genetic(20, 50, false).unwrap();
        assert_eq!(outcome.best_makespan, 7);
        assert_eq!(outcome.history.len(), 50);
    }

    #[test]
    fn test_never_beats_lower_bound() {
        let scheduler = toy_scheduler();
        let bound = scheduler.instance().lower_bound();
        for seed in 0..10 {
            let outcome = toy_scheduler()
                .with_seed(seed)
                .run_genetic(10, 5, false)
                .unwrap();
            assert!(outcome.best_makespan >= bound);
        }
    }

    #[test]
    fn test_best_schedule_matches_makespan() {
        let scheduler = toy_scheduler().with_seed(3);
        let outcome = scheduler.run_genetic(10, 10, false).unwrap();
        assert_eq!(outcome.best_schedule.makespan(), outcome.best_makespan);
        assert_eq!(
            outcome.best_schedule.assignment_count(),
            scheduler.instance().total_operations()
        );
    }

    #[test]
    fn test_seeded_runs_reproduce() {
        let a = toy_scheduler().with_seed(99).run_genetic(16, 12, false).unwrap();
        let b = toy_scheduler().with_seed(99).run_genetic(16, 12, false).unwrap();
        assert_eq!(a.best_makespan, b.best_makespan);
        assert_eq!(a.best_schedule, b.best_schedule);
        assert_eq!(a.history, b.history);
    }
}
