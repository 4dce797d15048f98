use crate::config::{ConfigSection, EvolutionConfig};
use crate::engine::constraints::{repair_alternate, violates};
use crate::engine::fitness::evaluate_population;
use crate::engine::matrix::RewardMatrix;
use crate::engine::population::generate_population;
use crate::engine::progress::ProgressCallback;
use crate::engine::route::Route;
use crate::error::{GeorouteError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Offspring-admission budget per open population slot. Exhausting it
/// means the operator/constraint combination cannot produce legal
/// children, which is reported instead of looping forever.
const ADMISSION_ATTEMPTS_PER_SLOT: usize = 1_000;

/// How often two identical parents are re-drawn before the loop proceeds
/// with them anyway.
const DUPLICATE_PARENT_RETRIES: usize = 5;

/// Outcome of a full evolution run.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    /// Best route of the final population (ties broken by first
    /// occurrence), with an elided King's Station stripped out.
    pub best_route: Route,
    pub best_fitness: i64,
    /// Best fitness per generation, generation 0 included. Non-decreasing
    /// whenever `elite_size >= 1`; without elitism it may regress.
    pub trajectory: Vec<i64>,
}

/// Generational GA over constrained routes. Owns the population, the
/// reward matrix, and a single seeded random source threaded through every
/// operator call, so a run is fully determined by (config, matrix, seed).
pub struct EvolutionEngine {
    config: EvolutionConfig,
    matrix: RewardMatrix,
    rng: StdRng,
}

impl EvolutionEngine {
    pub fn new(config: EvolutionConfig, matrix: RewardMatrix) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { config, matrix, rng })
    }

    pub fn run<C: ProgressCallback>(&mut self, callback: &mut C) -> Result<RunResult> {
        let pop_size = self.config.population_size;

        let mut population = generate_population(pop_size, &self.matrix, &mut self.rng)?;
        let mut fitnesses = evaluate_population(&population, &self.matrix);

        let mut trajectory = vec![best_of(&fitnesses)];
        callback.on_generation_complete(0, trajectory[0]);

        for generation in 1..=self.config.generations {
            let mut offspring = self.elites(&population, &fitnesses);

            let budget = pop_size.saturating_sub(offspring.len()) * ADMISSION_ATTEMPTS_PER_SLOT;
            let mut attempts = 0;
            while offspring.len() < pop_size {
                attempts += 1;
                if attempts > budget {
                    return Err(GeorouteError::UnsatisfiableConstraints { attempts });
                }

                let (p1, p2) = self.draw_parents(&population, &fitnesses);

                let (c1, c2) = if self.rng.gen::<f64>() <= self.config.p_crossover {
                    self.config.crossover.apply(&p1, &p2, &mut self.rng)
                } else {
                    (p1.clone(), p2.clone())
                };

                let c1 = self.config.mutation.apply(&c1, self.config.p_mutation, &mut self.rng);
                let c2 = self.config.mutation.apply(&c2, self.config.p_mutation, &mut self.rng);

                for mut child in [c1, c2] {
                    repair_alternate(&mut child, &self.matrix);
                    if !violates(&child) {
                        offspring.push(child);
                    }
                }
            }
            offspring.truncate(pop_size);

            population = offspring;
            fitnesses = evaluate_population(&population, &self.matrix);

            let best = best_of(&fitnesses);
            trajectory.push(best);
            callback.on_generation_complete(generation, best);
        }

        // Highest fitness, first occurrence on ties.
        let mut winner = 0;
        for (i, &fit) in fitnesses.iter().enumerate() {
            if fit > fitnesses[winner] {
                winner = i;
            }
        }

        Ok(RunResult {
            best_route: population[winner].stripped(),
            best_fitness: fitnesses[winner],
            trajectory,
        })
    }

    /// The `elite_size` fittest individuals, stable-sorted descending so
    /// equal-fitness elites keep their population order.
    fn elites(&self, population: &[Route], fitnesses: &[i64]) -> Vec<Route> {
        if self.config.elite_size == 0 {
            return Vec::new();
        }
        let mut order: Vec<usize> = (0..population.len()).collect();
        order.sort_by(|&a, &b| fitnesses[b].cmp(&fitnesses[a]));
        order
            .into_iter()
            .take(self.config.elite_size)
            .map(|i| population[i].clone())
            .collect()
    }

    /// Two parents from the configured selector, re-drawn a bounded number
    /// of times while both draws carry the same route value.
    fn draw_parents(&mut self, population: &[Route], fitnesses: &[i64]) -> (Route, Route) {
        let (mut p1, mut p2) = self.config.selection.select(population, fitnesses, &mut self.rng);
        let mut retries = 0;
        while p1 == p2 && retries < DUPLICATE_PARENT_RETRIES {
            let redraw = self.config.selection.select(population, fitnesses, &mut self.rng);
            p1 = redraw.0;
            p2 = redraw.1;
            retries += 1;
        }
        (p1, p2)
    }
}

fn best_of(fitnesses: &[i64]) -> i64 {
    fitnesses.iter().copied().max().unwrap_or(0)
}
