use crate::engine::area::{Area, AREAS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Chromosome length: origin, the nine other areas, origin again.
pub const ROUTE_LEN: usize = 11;

/// Number of genes between the origin caps.
pub const INTERIOR_LEN: usize = ROUTE_LEN - 2;

/// A candidate visiting order. Always origin-capped: the first and last
/// entries are `Area::D`, and the interior holds each non-origin area
/// exactly once, with King's Station possibly elided as `Area::Ph`.
///
/// Routes are value-like: operators take them by reference and hand back
/// fresh ones, so no two individuals ever share storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route(Vec<Area>);

impl Route {
    /// Wrap an interior gene sequence with the origin at both ends.
    pub fn from_interior(interior: Vec<Area>) -> Self {
        debug_assert_eq!(interior.len(), INTERIOR_LEN);
        let mut genes = Vec::with_capacity(ROUTE_LEN);
        genes.push(Area::D);
        genes.extend(interior);
        genes.push(Area::D);
        Route(genes)
    }

    /// The nine non-origin areas in canonical order, the gene pool every
    /// interior is a permutation of (modulo the KS/PH alternate).
    pub fn gene_pool() -> Vec<Area> {
        AREAS[1..].to_vec()
    }

    pub fn genes(&self) -> &[Area] {
        &self.0
    }

    pub fn genes_mut(&mut self) -> &mut [Area] {
        &mut self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Genes between the origin caps.
    pub fn interior(&self) -> &[Area] {
        &self.0[1..self.0.len() - 1]
    }

    /// First index holding `area`, if present.
    pub fn position_of(&self, area: Area) -> Option<usize> {
        self.0.iter().position(|&g| g == area)
    }

    pub fn contains(&self, area: Area) -> bool {
        self.0.contains(&area)
    }

    /// Replace the first occurrence of `from` with `to`. Returns whether a
    /// substitution happened.
    pub fn substitute(&mut self, from: Area, to: Area) -> bool {
        match self.position_of(from) {
            Some(i) => {
                self.0[i] = to;
                true
            }
            None => false,
        }
    }

    /// The path actually walked: the route with the placeholder dropped.
    pub fn effective_path(&self) -> Vec<Area> {
        self.0
            .iter()
            .copied()
            .filter(|a| !a.is_placeholder())
            .collect()
    }

    /// Reported form of the route: placeholder stripped.
    pub fn stripped(&self) -> Route {
        Route(self.effective_path())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<&str> = self.0.iter().map(|a| a.code()).collect();
        write!(f, "{}", codes.join(" -> "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_interior_caps_with_origin() {
        let route = Route::from_interior(Route::gene_pool());
        assert_eq!(route.len(), ROUTE_LEN);
        assert_eq!(route.genes()[0], Area::D);
        assert_eq!(route.genes()[ROUTE_LEN - 1], Area::D);
        assert_eq!(route.interior().len(), INTERIOR_LEN);
    }

    #[test]
    fn effective_path_drops_placeholder() {
        let mut route = Route::from_interior(Route::gene_pool());
        assert!(route.substitute(Area::Ks, Area::Ph));
        let path = route.effective_path();
        assert_eq!(path.len(), ROUTE_LEN - 1);
        assert!(!path.contains(&Area::Ph));
    }
}
