//! Configurable genetic operators.
//!
//! Provides runtime-selectable crossover and mutation strategies via
//! [`GeneticOperators`], so callers can switch operators without touching
//! the generational loop. All strategies preserve genome feasibility.

use rand::Rng;

use super::chromosome::{
    job_crossover, linear_order_crossover, nearby_swap_mutation, shift_mutation, Chromosome,
};
use crate::models::Job;

/// Crossover strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossoverType {
    /// Job-based precedence-preserving crossover (Bierwirth et al., 1996).
    JobBased,
    /// Linear order crossover (Falkenauer & Bouffouix, 1991).
    LinearOrder,
}

/// Mutation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationType {
    /// Swap a gene with a nearby gene of a different job.
    NearbySwap,
    /// Remove a gene and reinsert it at a random position.
    Shift,
}

/// Runtime-selectable genetic operators.
#[derive(Debug, Clone)]
pub struct GeneticOperators {
    /// Crossover strategy.
    pub crossover_type: CrossoverType,
    /// Mutation strategy.
    pub mutation_type: MutationType,
}

impl Default for GeneticOperators {
    fn default() -> Self {
        Self {
            crossover_type: CrossoverType::JobBased,
            mutation_type: MutationType::NearbySwap,
        }
    }
}

impl GeneticOperators {
    /// Performs crossover using the configured strategy.
    pub fn crossover<R: Rng>(
        &self,
        p1: &Chromosome,
        p2: &Chromosome,
        jobs: &[Job],
        rng: &mut R,
    ) -> (Chromosome, Chromosome) {
        match self.crossover_type {
            CrossoverType::JobBased => job_crossover(p1, p2, jobs, rng),
            CrossoverType::LinearOrder => linear_order_crossover(p1, p2, rng),
        }
    }

    /// Performs mutation using the configured strategy.
    pub fn mutate<R: Rng>(&self, chromosome: &mut Chromosome, rng: &mut R) {
        match self.mutation_type {
            MutationType::NearbySwap => nearby_swap_mutation(chromosome, rng),
            MutationType::Shift => shift_mutation(chromosome, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn sample_jobs() -> Vec<Job> {
        vec![
            Job::new(0).with_operation(0, 3).with_operation(1, 2),
            Job::new(1).with_operation(1, 2).with_operation(0, 4),
        ]
    }

    #[test]
    fn test_default_operators() {
        let ops = GeneticOperators::default();
        assert_eq!(ops.crossover_type, CrossoverType::JobBased);
        assert_eq!(ops.mutation_type, MutationType::NearbySwap);
    }

    #[test]
    fn test_crossover_dispatch() {
        let jobs = sample_jobs();
        let mut rng = SmallRng::seed_from_u64(42);
        let p1 = Chromosome::random(&jobs, &mut rng);
        let p2 = Chromosome::random(&jobs, &mut rng);

        for crossover_type in [CrossoverType::JobBased, CrossoverType::LinearOrder] {
            let ops = GeneticOperators {
                crossover_type,
                mutation_type: MutationType::NearbySwap,
            };
            let (c1, c2) = ops.crossover(&p1, &p2, &jobs, &mut rng);
            assert!(c1.is_valid(&jobs));
            assert!(c2.is_valid(&jobs));
        }
    }

    #[test]
    fn test_mutation_dispatch() {
        let jobs = sample_jobs();
        let mut rng = SmallRng::seed_from_u64(42);

        for mutation_type in [MutationType::NearbySwap, MutationType::Shift] {
            let ops = GeneticOperators {
                crossover_type: CrossoverType::JobBased,
                mutation_type,
            };
            let mut ch = Chromosome::random(&jobs, &mut rng);
            ops.mutate(&mut ch, &mut rng);
            assert!(ch.is_valid(&jobs));
        }
    }
}
