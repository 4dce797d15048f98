use crate::engine::matrix::RewardMatrix;
use crate::engine::route::Route;

/// Total reward collected along a route's effective path (placeholder
/// stripped, consecutive-pair edges summed).
pub fn route_gains(route: &Route, matrix: &RewardMatrix) -> i64 {
    let path = route.effective_path();
    path.windows(2)
        .map(|pair| matrix.reward(pair[0], pair[1]))
        .sum()
}

/// Fitness of every individual, in population order.
pub fn evaluate_population(population: &[Route], matrix: &RewardMatrix) -> Vec<i64> {
    population
        .iter()
        .map(|route| route_gains(route, matrix))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::area::Area;

    #[test]
    fn gains_sum_consecutive_edges() {
        let matrix = RewardMatrix::sample();
        let route = Route::from_interior(Route::gene_pool());
        let mut expected = 0;
        let genes = route.genes();
        for pair in genes.windows(2) {
            expected += matrix.reward(pair[0], pair[1]);
        }
        assert_eq!(route_gains(&route, &matrix), expected);
    }

    #[test]
    fn placeholder_contributes_no_edge() {
        let matrix = RewardMatrix::sample();
        let mut elided = Route::from_interior(Route::gene_pool());
        elided.substitute(Area::Ks, Area::Ph);

        let path = elided.effective_path();
        let expected: i64 = path
            .windows(2)
            .map(|pair| matrix.reward(pair[0], pair[1]))
            .sum();
        assert_eq!(route_gains(&elided, &matrix), expected);
    }

    #[test]
    fn population_fitness_preserves_order() {
        let matrix = RewardMatrix::sample();
        let a = Route::from_interior(Route::gene_pool());
        let mut b = Route::from_interior(Route::gene_pool());
        b.genes_mut().swap(1, 2);

        let fits = evaluate_population(&[a.clone(), b.clone()], &matrix);
        assert_eq!(fits[0], route_gains(&a, &matrix));
        assert_eq!(fits[1], route_gains(&b, &matrix));
    }
}
