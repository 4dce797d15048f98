use crate::engine::route::Route;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Structural mutation strategies. Each fires with probability `rate` and
/// otherwise hands back an unchanged copy; the origin caps are never
/// touched, only interior positions move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationOp {
    /// Exchange two random interior positions.
    Swap,
    /// Shuffle the values of a random subset of interior positions among
    /// themselves.
    Scramble,
    /// Cut a contiguous segment (at most half the route) and reinsert it
    /// whole somewhere else in the interior.
    Displacement,
    /// Rotate the values of three increasing interior indices by one.
    Thrors,
    /// Reverse a contiguous interior segment of length at least two.
    Inversion,
}

impl MutationOp {
    pub fn apply<R: Rng>(&self, route: &Route, rate: f64, rng: &mut R) -> Route {
        let mut mutated = route.clone();
        if rng.gen::<f64>() >= rate {
            return mutated;
        }

        let len = route.len();
        let genes = mutated.genes_mut();
        match self {
            MutationOp::Swap => {
                let picks = rand::seq::index::sample(rng, len - 2, 2);
                genes.swap(picks.index(0) + 1, picks.index(1) + 1);
            }
            MutationOp::Scramble => {
                let count = rng.gen_range(1..=len - 2);
                let positions: Vec<usize> = rand::seq::index::sample(rng, len - 2, count)
                    .iter()
                    .map(|i| i + 1)
                    .collect();
                let mut values: Vec<_> = positions.iter().map(|&i| genes[i]).collect();
                values.shuffle(rng);
                for (&i, value) in positions.iter().zip(values) {
                    genes[i] = value;
                }
            }
            MutationOp::Displacement => {
                let segment_len = rng.gen_range(1..=len / 2);
                let start = rng.gen_range(1..=len - 1 - segment_len);
                let insert_at = rng.gen_range(1..=len - 1 - segment_len);

                let segment: Vec<_> = genes[start..start + segment_len].to_vec();
                let mut rest: Vec<_> = genes[..start].to_vec();
                rest.extend_from_slice(&genes[start + segment_len..]);
                rest.splice(insert_at..insert_at, segment);
                genes.copy_from_slice(&rest);
            }
            MutationOp::Thrors => {
                let first = rng.gen_range(1..=len - 4);
                let second = rng.gen_range(first + 1..=len - 3);
                let third = rng.gen_range(second + 1..=len - 2);
                // first <- third, second <- first, third <- second.
                let (a, b, c) = (genes[first], genes[second], genes[third]);
                genes[first] = c;
                genes[second] = a;
                genes[third] = b;
            }
            MutationOp::Inversion => {
                let start = rng.gen_range(1..=len - 4);
                let end = rng.gen_range(start + 2..=len - 2);
                genes[start..end].reverse();
            }
        }
        mutated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::area::Area;
    use crate::engine::route::INTERIOR_LEN;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    const ALL_OPS: [MutationOp; 5] = [
        MutationOp::Swap,
        MutationOp::Scramble,
        MutationOp::Displacement,
        MutationOp::Thrors,
        MutationOp::Inversion,
    ];

    fn fixture() -> Route {
        Route::from_interior(Route::gene_pool())
    }

    #[test]
    fn rate_zero_is_the_identity() {
        let route = fixture();
        let mut rng = StdRng::seed_from_u64(5);
        for op in ALL_OPS {
            assert_eq!(op.apply(&route, 0.0, &mut rng), route);
        }
    }

    #[test]
    fn rate_one_always_mutates_without_breaking_the_route() {
        let route = fixture();
        let mut rng = StdRng::seed_from_u64(6);
        for op in ALL_OPS {
            for _ in 0..100 {
                let mutated = op.apply(&route, 1.0, &mut rng);
                assert_eq!(mutated.len(), route.len());
                assert_eq!(mutated.genes()[0], Area::D);
                assert_eq!(mutated.genes()[route.len() - 1], Area::D);

                let genes: HashSet<Area> = mutated.interior().iter().copied().collect();
                assert_eq!(genes.len(), INTERIOR_LEN, "{:?} produced {}", op, mutated);
            }
        }
    }

    #[test]
    fn swap_at_rate_one_moves_exactly_two_genes() {
        let route = fixture();
        let mut rng = StdRng::seed_from_u64(7);
        let mutated = MutationOp::Swap.apply(&route, 1.0, &mut rng);
        let moved = route
            .genes()
            .iter()
            .zip(mutated.genes())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(moved, 2);
    }

    #[test]
    fn inversion_reverses_a_contiguous_segment() {
        let route = fixture();
        let mut rng = StdRng::seed_from_u64(8);
        let mutated = MutationOp::Inversion.apply(&route, 1.0, &mut rng);

        let orig = route.genes();
        let new = mutated.genes();
        let start = (0..orig.len()).find(|&i| orig[i] != new[i]);
        let end = (0..orig.len()).rfind(|&i| orig[i] != new[i]);
        if let (Some(start), Some(end)) = (start, end) {
            let mut segment = orig[start..=end].to_vec();
            segment.reverse();
            assert_eq!(&new[start..=end], segment.as_slice());
        }
    }

    #[test]
    fn mutation_returns_a_fresh_copy() {
        let route = fixture();
        let mut rng = StdRng::seed_from_u64(9);
        let copy = MutationOp::Scramble.apply(&route, 0.0, &mut rng);
        assert_eq!(copy, route);
        // The original is untouched by later mutations of the copy.
        let mut copy = copy;
        copy.genes_mut().swap(1, 2);
        assert_ne!(copy, route);
    }
}
