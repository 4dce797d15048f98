use crate::engine::constraints::{repair_alternate, violates};
use crate::engine::matrix::RewardMatrix;
use crate::engine::route::Route;
use crate::error::{GeorouteError, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// Attempt budget per individual before the constraint set is declared
/// unsatisfiable. Legal shuffles are plentiful for this constraint set, so
/// hitting the budget means the matrix or constraints are broken, not bad
/// luck.
pub const MAX_GENERATION_ATTEMPTS: usize = 10_000;

/// Draw one legal route: shuffle the nine non-origin areas, cap with the
/// origin, repair the KS/PH alternate, and resample until the constraint
/// check passes.
pub fn generate_route<R: Rng>(matrix: &RewardMatrix, rng: &mut R) -> Result<Route> {
    for _ in 0..MAX_GENERATION_ATTEMPTS {
        let mut interior = Route::gene_pool();
        interior.shuffle(rng);
        let mut route = Route::from_interior(interior);
        repair_alternate(&mut route, matrix);
        if !violates(&route) {
            return Ok(route);
        }
    }
    Err(GeorouteError::UnsatisfiableConstraints {
        attempts: MAX_GENERATION_ATTEMPTS,
    })
}

/// Produce `size` legal routes.
pub fn generate_population<R: Rng>(
    size: usize,
    matrix: &RewardMatrix,
    rng: &mut R,
) -> Result<Vec<Route>> {
    (0..size).map(|_| generate_route(matrix, rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::area::Area;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn generated_routes_are_legal_permutations() {
        let matrix = RewardMatrix::sample();
        let mut rng = StdRng::seed_from_u64(3);
        let population = generate_population(50, &matrix, &mut rng).unwrap();
        assert_eq!(population.len(), 50);

        for route in &population {
            assert!(!violates(route));
            assert_eq!(route.genes()[0], Area::D);
            assert_eq!(route.genes()[route.len() - 1], Area::D);

            let interior: HashSet<Area> = route.interior().iter().copied().collect();
            assert_eq!(interior.len(), route.interior().len());
            assert!(!(interior.contains(&Area::Ks) && interior.contains(&Area::Ph)));
        }
    }
}
