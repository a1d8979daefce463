//! Operation-sequence chromosome for the job-shop GA.
//!
//! # Encoding
//!
//! A chromosome is a permutation of job IDs with repetition: job `j`
//! appears once per operation, and the k-th occurrence of `j` denotes
//! `j`'s k-th operation. Every permutation of this multiset respects each
//! job's internal precedence, so initialization, crossover, and mutation
//! all produce feasible genomes without repair.
//!
//! # Reference
//! Bierwirth (1995), "A generalized permutation approach to JSSP"

use std::collections::{HashMap, HashSet};

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::models::Job;

/// Operation-sequence chromosome.
///
/// Lower fitness = better schedule (minimization convention). Fitness is
/// `f64::INFINITY` until the chromosome has been decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome {
    /// Job IDs in priority order; k-th occurrence = k-th operation.
    pub genes: Vec<usize>,
    /// Decoded makespan (lower = better).
    pub fitness: f64,
}

impl Chromosome {
    /// Wraps an existing gene sequence with unset fitness.
    pub fn from_genes(genes: Vec<usize>) -> Self {
        Self {
            genes,
            fitness: f64::INFINITY,
        }
    }

    /// Creates a random precedence-respecting chromosome.
    ///
    /// Repeatedly draws a random job among those with remaining operations
    /// and appends its ID, until every job's operation queue is exhausted.
    pub fn random<R: Rng>(jobs: &[Job], rng: &mut R) -> Self {
        let total: usize = jobs.iter().map(|j| j.operation_count()).sum();
        let mut remaining: Vec<(usize, usize)> = jobs
            .iter()
            .filter(|j| j.operation_count() > 0)
            .map(|j| (j.id, j.operation_count()))
            .collect();

        let mut genes = Vec::with_capacity(total);
        while !remaining.is_empty() {
            let slot = rng.random_range(0..remaining.len());
            genes.push(remaining[slot].0);
            remaining[slot].1 -= 1;
            if remaining[slot].1 == 0 {
                remaining.swap_remove(slot);
            }
        }

        Self::from_genes(genes)
    }

    /// Number of genes (total operations encoded).
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the chromosome encodes no operations.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Validates gene-count conservation against the job list.
    ///
    /// Each job ID must occur exactly as often as the job has operations.
    pub fn is_valid(&self, jobs: &[Job]) -> bool {
        let mut counts: HashMap<usize, usize> = HashMap::new();
        for &gene in &self.genes {
            *counts.entry(gene).or_insert(0) += 1;
        }
        let mut expected: HashMap<usize, usize> = HashMap::new();
        for job in jobs {
            if job.operation_count() > 0 {
                expected.insert(job.id, job.operation_count());
            }
        }
        counts == expected
    }
}

// ======================== Crossover operators ========================

/// Job-based precedence-preserving crossover.
///
/// Partitions the jobs into a random subset and its complement: each child
/// keeps the subset jobs' genes in their positions from one parent and
/// fills the remaining positions with the complement jobs' genes in their
/// relative order from the other parent.
///
/// # Reference
/// Bierwirth et al. (1996), POX
pub fn job_crossover<R: Rng>(
    p1: &Chromosome,
    p2: &Chromosome,
    jobs: &[Job],
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let job_ids: Vec<usize> = jobs
        .iter()
        .filter(|j| j.operation_count() > 0)
        .map(|j| j.id)
        .collect();
    if job_ids.is_empty() {
        return (p1.clone(), p2.clone());
    }

    let set_size = rng.random_range(1..=job_ids.len());
    let selected: HashSet<usize> = job_ids
        .choose_multiple(rng, set_size)
        .copied()
        .collect();

    let child1 = build_child(&p1.genes, &p2.genes, &selected);
    let child2 = build_child(&p2.genes, &p1.genes, &selected);
    (Chromosome::from_genes(child1), Chromosome::from_genes(child2))
}

fn build_child(template: &[usize], donor: &[usize], selected: &HashSet<usize>) -> Vec<usize> {
    let mut child = Vec::with_capacity(template.len());
    let mut donor_iter = donor.iter().filter(|g| !selected.contains(g));

    for &gene in template {
        if selected.contains(&gene) {
            child.push(gene);
        } else if let Some(&g) = donor_iter.next() {
            child.push(g);
        }
    }
    child
}

/// Linear order crossover: each child keeps a random segment of one parent
/// in place and fills the remaining positions from the other parent in
/// relative order, skipping the segment's gene multiset.
///
/// # Reference
/// Falkenauer & Bouffouix (1991), LOX
pub fn linear_order_crossover<R: Rng>(
    p1: &Chromosome,
    p2: &Chromosome,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let len = p1.len();
    if len < 2 {
        return (p1.clone(), p2.clone());
    }
    let mut i = rng.random_range(0..len);
    let mut j = rng.random_range(0..len);
    if i > j {
        std::mem::swap(&mut i, &mut j);
    }

    let child1 = lox_child(&p1.genes, &p2.genes, i, j);
    let child2 = lox_child(&p2.genes, &p1.genes, i, j);
    (Chromosome::from_genes(child1), Chromosome::from_genes(child2))
}

fn lox_child(template: &[usize], donor: &[usize], i: usize, j: usize) -> Vec<usize> {
    // Multiset of genes pinned by the segment.
    let mut pinned: HashMap<usize, usize> = HashMap::new();
    for &gene in &template[i..=j] {
        *pinned.entry(gene).or_insert(0) += 1;
    }

    // Donor genes with the pinned multiset removed, in relative order.
    let mut filler = donor.iter().filter(|&&g| {
        match pinned.get_mut(&g) {
            Some(count) if *count > 0 => {
                *count -= 1;
                false
            }
            _ => true,
        }
    });

    let mut child = Vec::with_capacity(template.len());
    for (pos, &gene) in template.iter().enumerate() {
        if pos >= i && pos <= j {
            child.push(gene);
        } else if let Some(&g) = filler.next() {
            child.push(g);
        }
    }
    child
}

// ======================== Mutation operators ========================

/// How far ahead a swap partner may sit in the genome.
const SWAP_WINDOW: usize = 3;

/// Swaps a random gene with a nearby gene of a different job.
///
/// Same-job swaps are skipped: under the repetition encoding they would be
/// no-ops, and cross-job swaps are always feasible because occurrence
/// counting re-indexes each job's operations.
pub fn nearby_swap_mutation<R: Rng>(chromosome: &mut Chromosome, rng: &mut R) {
    let len = chromosome.genes.len();
    if len < 2 {
        return;
    }
    let i = rng.random_range(0..len - 1);
    let upper = (i + 1 + SWAP_WINDOW).min(len);
    for j in i + 1..upper {
        if chromosome.genes[j] != chromosome.genes[i] {
            chromosome.genes.swap(i, j);
            return;
        }
    }
}

/// Removes a random gene and reinserts it at a random position.
pub fn shift_mutation<R: Rng>(chromosome: &mut Chromosome, rng: &mut R) {
    let len = chromosome.genes.len();
    if len < 2 {
        return;
    }
    let from = rng.random_range(0..len);
    let to = rng.random_range(0..len);
    let gene = chromosome.genes.remove(from);
    chromosome.genes.insert(to, gene);
}
