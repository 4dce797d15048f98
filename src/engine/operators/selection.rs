use crate::engine::route::Route;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Parent-selection strategies. Every variant carries its own parameters,
/// so the evolution loop never has to special-case one operator over
/// another: `select` has a uniform signature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SelectionOp {
    /// Probability proportional to fitness. Negative fitnesses count as
    /// zero on the wheel; a non-positive total degrades to uniform
    /// sampling.
    RouletteWheel,
    /// Best of `size` individuals drawn without replacement.
    Tournament { size: usize },
    /// Tournament whose size follows population diversity: uniform
    /// populations get small tournaments, spread-out ones large.
    SelfAdaptiveTournament,
    /// Rank-weighted sampling with linear weights controlled by a
    /// selection-pressure parameter in [1, 2].
    LinearRanking { pressure: f64 },
    /// Rank-weighted sampling with weights `1 - exp(-rank / k)`.
    ExponentialRanking { k: f64 },
}

impl SelectionOp {
    /// Draw two parents (with replacement) from the population.
    pub fn select<R: Rng>(
        &self,
        population: &[Route],
        fitnesses: &[i64],
        rng: &mut R,
    ) -> (Route, Route) {
        match *self {
            SelectionOp::RouletteWheel => {
                let weights: Vec<f64> = fitnesses.iter().map(|&f| f.max(0) as f64).collect();
                (
                    population[spin_wheel(&weights, rng)].clone(),
                    population[spin_wheel(&weights, rng)].clone(),
                )
            }
            SelectionOp::Tournament { size } => (
                tournament_winner(population, fitnesses, size, rng).clone(),
                tournament_winner(population, fitnesses, size, rng).clone(),
            ),
            SelectionOp::SelfAdaptiveTournament => {
                let size = adaptive_tournament_size(fitnesses);
                (
                    tournament_winner(population, fitnesses, size, rng).clone(),
                    tournament_winner(population, fitnesses, size, rng).clone(),
                )
            }
            SelectionOp::LinearRanking { pressure } => {
                let n = population.len() as f64;
                ranked_pair(population, fitnesses, rng, |rank| {
                    (2.0 - pressure) / n + 2.0 * (rank - 1.0) * (pressure - 1.0) / (n * (n - 1.0))
                })
            }
            SelectionOp::ExponentialRanking { k } => {
                ranked_pair(population, fitnesses, rng, |rank| 1.0 - (-rank / k).exp())
            }
        }
    }
}

/// Classic wheel spin. Falls back to a uniform draw when every weight is
/// zero (the degenerate all-non-positive fitness state).
fn spin_wheel<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return rng.gen_range(0..weights.len());
    }
    let mut spin = rng.gen::<f64>() * total;
    for (i, w) in weights.iter().enumerate() {
        spin -= w;
        if spin <= 0.0 {
            return i;
        }
    }
    weights.len() - 1
}

/// Best-of-`size` draw without replacement. Size is clamped to the
/// population, so a degenerate `size == len` tournament deterministically
/// returns the fittest individual.
fn tournament_winner<'a, R: Rng>(
    population: &'a [Route],
    fitnesses: &[i64],
    size: usize,
    rng: &mut R,
) -> &'a Route {
    let size = size.clamp(1, population.len());
    let entrants = rand::seq::index::sample(rng, population.len(), size);
    let winner = entrants
        .iter()
        .max_by_key(|&i| fitnesses[i])
        .unwrap_or(0);
    &population[winner]
}

/// Tournament size scaled by fitness diversity: `2 + (n - 2) * diversity`.
fn adaptive_tournament_size(fitnesses: &[i64]) -> usize {
    let n = fitnesses.len();
    let size = (2.0 + (n as f64 - 2.0) * diversity(fitnesses)) as usize;
    size.clamp(2.min(n), n)
}

/// Mean absolute deviation of fitness from the mean, normalized by half
/// the fitness range (by one half when the range collapses to zero).
fn diversity(fitnesses: &[i64]) -> f64 {
    let n = fitnesses.len() as f64;
    let mean = fitnesses.iter().sum::<i64>() as f64 / n;
    let spread: f64 = fitnesses.iter().map(|&f| (f as f64 - mean).abs()).sum();
    let range = (fitnesses.iter().max().unwrap_or(&0) - fitnesses.iter().min().unwrap_or(&0)) as f64;
    if range == 0.0 {
        spread / (n * 0.5)
    } else {
        spread / (n * range / 2.0)
    }
}

/// Sort descending by fitness, weight each rank (1 = best) through
/// `weight_of`, and spin the wheel twice over the ranked population.
fn ranked_pair<R: Rng>(
    population: &[Route],
    fitnesses: &[i64],
    rng: &mut R,
    weight_of: impl Fn(f64) -> f64,
) -> (Route, Route) {
    let mut order: Vec<usize> = (0..population.len()).collect();
    order.sort_by(|&a, &b| fitnesses[b].cmp(&fitnesses[a]));

    let weights: Vec<f64> = (1..=order.len()).map(|rank| weight_of(rank as f64)).collect();
    (
        population[order[spin_wheel(&weights, rng)]].clone(),
        population[order[spin_wheel(&weights, rng)]].clone(),
    )
}
