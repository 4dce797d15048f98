use super::traits::ConfigSection;
use crate::engine::operators::{CrossoverOp, MutationOp, SelectionOp};
use crate::error::{GeorouteError, Result};
use serde::{Deserialize, Serialize};

/// Parameters of a single evolution run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub generations: usize,
    pub selection: SelectionOp,
    pub crossover: CrossoverOp,
    pub mutation: MutationOp,
    /// Fittest individuals copied unchanged into each new generation.
    pub elite_size: usize,
    /// Probability of recombining a parent pair instead of copying it.
    pub p_crossover: f64,
    /// Per-child probability of a structural mutation.
    pub p_mutation: f64,
    /// Fixed seed for reproducible runs; `None` seeds from entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    // The best combination found by the original parameter sweep.
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 20,
            selection: SelectionOp::Tournament { size: 5 },
            crossover: CrossoverOp::Position,
            mutation: MutationOp::Displacement,
            elite_size: 0,
            p_crossover: 0.95,
            p_mutation: 0.2,
            seed: Some(1),
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeorouteError::Configuration(
                "Population size must be positive".to_string(),
            ));
        }
        if self.generations == 0 {
            return Err(GeorouteError::Configuration(
                "Generation count must be positive".to_string(),
            ));
        }
        if self.elite_size > self.population_size {
            return Err(GeorouteError::Configuration(format!(
                "Elite size {} exceeds population size {}",
                self.elite_size, self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.p_crossover) {
            return Err(GeorouteError::Configuration(
                "Crossover probability must be between 0 and 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.p_mutation) {
            return Err(GeorouteError::Configuration(
                "Mutation probability must be between 0 and 1".to_string(),
            ));
        }
        if let SelectionOp::Tournament { size } = self.selection {
            if size == 0 || size > self.population_size {
                return Err(GeorouteError::Configuration(format!(
                    "Tournament size {} must be in 1..={}",
                    size, self.population_size
                )));
            }
        }
        if let SelectionOp::LinearRanking { pressure } = self.selection {
            if !(1.0..=2.0).contains(&pressure) {
                return Err(GeorouteError::Configuration(
                    "Selection pressure must be between 1 and 2".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(EvolutionConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_population_is_rejected() {
        let config = EvolutionConfig {
            population_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn oversized_tournament_is_rejected() {
        let config = EvolutionConfig {
            population_size: 10,
            selection: SelectionOp::Tournament { size: 11 },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
