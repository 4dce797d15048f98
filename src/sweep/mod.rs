//! Parameter sweep over the operator library and GA settings.
//!
//! Each grid combination is scored by running the engine once per sampled
//! reward matrix and averaging the best fitness. Combinations are
//! independent units of work, so they are spread across a rayon pool; the
//! only shared state is the read-only matrix set.

use crate::config::{ConfigSection, EvolutionConfig, SweepConfig};
use crate::engine::matrix::RewardMatrix;
use crate::engine::operators::SelectionOp;
use crate::engine::progress::NoopProgress;
use crate::engine::EvolutionEngine;
use crate::error::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::Serialize;

/// One scored grid combination.
#[derive(Debug, Clone, Serialize)]
pub struct SweepOutcome {
    pub config: EvolutionConfig,
    pub mean_best_fitness: f64,
}

/// Evaluate every grid combination and return them ranked by mean best
/// fitness, descending.
pub fn grid_search(sweep: &SweepConfig) -> Result<Vec<SweepOutcome>> {
    sweep.validate()?;

    let combinations = expand_grid(sweep);
    log::info!("Sweeping {} parameter combinations", combinations.len());

    let mut matrix_rng = StdRng::seed_from_u64(sweep.matrix_seed);
    let matrices: Vec<RewardMatrix> = (0..sweep.iterations)
        .map(|_| RewardMatrix::random(&mut matrix_rng))
        .collect();

    let mut outcomes: Vec<SweepOutcome> = combinations
        .into_par_iter()
        .map(|config| evaluate_combination(config, &matrices))
        .collect::<Result<_>>()?;

    outcomes.sort_by(|a, b| {
        b.mean_best_fitness
            .partial_cmp(&a.mean_best_fitness)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    Ok(outcomes)
}

fn evaluate_combination(config: EvolutionConfig, matrices: &[RewardMatrix]) -> Result<SweepOutcome> {
    let mut total = 0i64;
    for matrix in matrices {
        let mut engine = EvolutionEngine::new(config.clone(), matrix.clone())?;
        let result = engine.run(&mut NoopProgress)?;
        total += result.best_fitness;
    }
    let mean_best_fitness = total as f64 / matrices.len() as f64;
    log::debug!("{:?} -> mean best fitness {:.1}", config.selection, mean_best_fitness);
    Ok(SweepOutcome {
        config,
        mean_best_fitness,
    })
}

/// Cartesian product of the grid. Tournament sizes only fan out selectors
/// that actually hold one; other selectors appear once per remaining axis
/// combination, the redundancy the original search filtered out.
fn expand_grid(sweep: &SweepConfig) -> Vec<EvolutionConfig> {
    let selectors: Vec<SelectionOp> = sweep
        .selectors
        .iter()
        .flat_map(|selector| match selector {
            SelectionOp::Tournament { .. } => sweep
                .tournament_sizes
                .iter()
                .map(|&size| SelectionOp::Tournament { size })
                .collect::<Vec<_>>(),
            other => vec![*other],
        })
        .collect();

    let mut combinations = Vec::new();
    for &population_size in &sweep.population_sizes {
        for &generations in &sweep.generations {
            for &selection in &selectors {
                for &crossover in &sweep.crossovers {
                    for &mutation in &sweep.mutations {
                        for &elite_size in &sweep.elite_sizes {
                            for &p_crossover in &sweep.crossover_probs {
                                for &p_mutation in &sweep.mutation_probs {
                                    for &seed in &sweep.seeds {
                                        combinations.push(EvolutionConfig {
                                            population_size,
                                            generations,
                                            selection,
                                            crossover,
                                            mutation,
                                            elite_size,
                                            p_crossover,
                                            p_mutation,
                                            seed: Some(seed),
                                        });
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
    combinations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::operators::{CrossoverOp, MutationOp};

    fn tiny_sweep() -> SweepConfig {
        SweepConfig {
            iterations: 2,
            matrix_seed: 1,
            population_sizes: vec![10],
            generations: vec![2],
            selectors: vec![
                SelectionOp::RouletteWheel,
                SelectionOp::Tournament { size: 3 },
            ],
            crossovers: vec![CrossoverOp::Order],
            mutations: vec![MutationOp::Swap],
            tournament_sizes: vec![3, 5],
            elite_sizes: vec![1],
            crossover_probs: vec![0.9],
            mutation_probs: vec![0.1],
            seeds: vec![7],
        }
    }

    #[test]
    fn tournament_sizes_only_fan_out_tournament_selectors() {
        let combos = expand_grid(&tiny_sweep());
        // Roulette once, tournament once per size.
        assert_eq!(combos.len(), 3);
    }

    #[test]
    fn outcomes_are_ranked_descending() {
        let outcomes = grid_search(&tiny_sweep()).unwrap();
        assert_eq!(outcomes.len(), 3);
        for pair in outcomes.windows(2) {
            assert!(pair[0].mean_best_fitness >= pair[1].mean_best_fitness);
        }
    }
}
