use super::traits::ConfigSection;
use crate::engine::operators::{CrossoverOp, MutationOp, SelectionOp};
use crate::error::{GeorouteError, Result};
use serde::{Deserialize, Serialize};

/// Parameter grid for the sweep driver. Every combination of the listed
/// values is evaluated over `iterations` freshly sampled reward matrices;
/// tournament sizes only multiply combinations whose selector is actually
/// a tournament.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Runs (and sampled matrices) per combination.
    pub iterations: usize,
    /// Seed for sampling the shared reward matrices.
    pub matrix_seed: u64,
    pub population_sizes: Vec<usize>,
    pub generations: Vec<usize>,
    pub selectors: Vec<SelectionOp>,
    pub crossovers: Vec<CrossoverOp>,
    pub mutations: Vec<MutationOp>,
    pub tournament_sizes: Vec<usize>,
    pub elite_sizes: Vec<usize>,
    pub crossover_probs: Vec<f64>,
    pub mutation_probs: Vec<f64>,
    pub seeds: Vec<u64>,
}

impl Default for SweepConfig {
    // The grid the original search ran over.
    fn default() -> Self {
        Self {
            iterations: 15,
            matrix_seed: 0,
            population_sizes: vec![20, 50, 100],
            generations: vec![5, 10, 20],
            selectors: vec![
                SelectionOp::RouletteWheel,
                SelectionOp::Tournament { size: 5 },
                SelectionOp::SelfAdaptiveTournament,
                SelectionOp::LinearRanking { pressure: 1.5 },
                SelectionOp::ExponentialRanking { k: 1.0 },
            ],
            crossovers: vec![
                CrossoverOp::Order,
                CrossoverOp::Position,
                CrossoverOp::Cycle,
                CrossoverOp::Pmx,
                CrossoverOp::ModifiedPmx,
            ],
            mutations: vec![
                MutationOp::Swap,
                MutationOp::Scramble,
                MutationOp::Displacement,
                MutationOp::Thrors,
                MutationOp::Inversion,
            ],
            tournament_sizes: vec![5, 10, 15],
            elite_sizes: vec![0, 1, 2],
            crossover_probs: vec![0.8, 0.9, 0.95],
            mutation_probs: vec![0.05, 0.1, 0.2],
            seeds: vec![0, 1],
        }
    }
}

impl ConfigSection for SweepConfig {
    fn section_name() -> &'static str {
        "sweep"
    }

    fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(GeorouteError::Configuration(
                "Sweep iterations must be positive".to_string(),
            ));
        }
        let lists: [(&str, bool); 9] = [
            ("population_sizes", self.population_sizes.is_empty()),
            ("generations", self.generations.is_empty()),
            ("selectors", self.selectors.is_empty()),
            ("crossovers", self.crossovers.is_empty()),
            ("mutations", self.mutations.is_empty()),
            ("elite_sizes", self.elite_sizes.is_empty()),
            ("crossover_probs", self.crossover_probs.is_empty()),
            ("mutation_probs", self.mutation_probs.is_empty()),
            ("seeds", self.seeds.is_empty()),
        ];
        for (name, empty) in lists {
            if empty {
                return Err(GeorouteError::Configuration(format!(
                    "Sweep grid '{}' must not be empty",
                    name
                )));
            }
        }
        let wants_tournament = self
            .selectors
            .iter()
            .any(|s| matches!(s, SelectionOp::Tournament { .. }));
        if wants_tournament && self.tournament_sizes.is_empty() {
            return Err(GeorouteError::Configuration(
                "Sweep grid 'tournament_sizes' must not be empty when a tournament selector is listed"
                    .to_string(),
            ));
        }
        Ok(())
    }
}
