use crate::engine::area::Area;
use crate::engine::route::Route;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Permutation-preserving recombination strategies. Each variant produces
/// two children by recombining the interiors of two parents and re-capping
/// them with the origin: `(child(p1, p2), child(p2, p1))` with the cut
/// points (or position set) shared between the two orderings.
///
/// Cycle and both PMX variants normalize the placeholder back to KS on
/// local working copies before recombining, so their index bookkeeping
/// never has to special-case an elided gene. Order and position crossover
/// instead treat the alternate as a substitutable token: if the fill list
/// comes up one gene short, the first parent's alternate is appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossoverOp {
    Order,
    Position,
    Cycle,
    Pmx,
    ModifiedPmx,
}

impl CrossoverOp {
    pub fn apply<R: Rng>(&self, p1: &Route, p2: &Route, rng: &mut R) -> (Route, Route) {
        let a = p1.interior().to_vec();
        let b = p2.interior().to_vec();
        match self {
            CrossoverOp::Order => {
                let (cut1, cut2) = cut_points(a.len(), rng);
                (
                    Route::from_interior(order_child(&a, &b, cut1, cut2)),
                    Route::from_interior(order_child(&b, &a, cut1, cut2)),
                )
            }
            CrossoverOp::Position => {
                let positions = position_set(a.len(), rng);
                (
                    Route::from_interior(position_child(&a, &b, &positions)),
                    Route::from_interior(position_child(&b, &a, &positions)),
                )
            }
            CrossoverOp::Cycle => {
                let a = normalize_alternate(a);
                let b = normalize_alternate(b);
                (
                    Route::from_interior(cycle_child(&a, &b)),
                    Route::from_interior(cycle_child(&b, &a)),
                )
            }
            CrossoverOp::Pmx => {
                let a = normalize_alternate(a);
                let b = normalize_alternate(b);
                let (cut1, cut2) = cut_points(a.len(), rng);
                (
                    Route::from_interior(pmx_child(&a, &b, cut1, cut2)),
                    Route::from_interior(pmx_child(&b, &a, cut1, cut2)),
                )
            }
            CrossoverOp::ModifiedPmx => {
                let a = normalize_alternate(a);
                let b = normalize_alternate(b);
                let (cut1, cut2) = cut_points(a.len(), rng);
                (
                    Route::from_interior(modified_pmx_child(&a, &b, cut1, cut2, rng)),
                    Route::from_interior(modified_pmx_child(&b, &a, cut1, cut2, rng)),
                )
            }
        }
    }
}

/// Two cut points strictly inside the interior, `cut1 < cut2`, leaving at
/// least one slot after the segment.
fn cut_points<R: Rng>(len: usize, rng: &mut R) -> (usize, usize) {
    let cut1 = rng.gen_range(0..len - 1);
    let cut2 = rng.gen_range(cut1 + 1..len);
    (cut1, cut2)
}

/// Random non-empty proper subset of interior positions.
fn position_set<R: Rng>(len: usize, rng: &mut R) -> Vec<usize> {
    let count = rng.gen_range(1..len);
    rand::seq::index::sample(rng, len, count).into_vec()
}

/// An elided King's Station is put back for operators whose bookkeeping
/// assumes both parents draw from the same gene pool.
fn normalize_alternate(mut interior: Vec<Area>) -> Vec<Area> {
    if let Some(i) = interior.iter().position(|&g| g == Area::Ph) {
        interior[i] = Area::Ks;
    }
    interior
}

fn placed(child: &[Option<Area>], gene: Area) -> bool {
    child.iter().any(|slot| *slot == Some(gene))
}

/// The KS/PH token the first parent carries, appended when the second
/// parent's fill list is one alternate short.
fn missing_alternate(p1: &[Area]) -> Area {
    if p1.contains(&Area::Ph) {
        Area::Ph
    } else {
        Area::Ks
    }
}

fn fill_gaps(child: Vec<Option<Area>>, remaining: Vec<Area>) -> Vec<Area> {
    debug_assert_eq!(
        child.iter().filter(|slot| slot.is_none()).count(),
        remaining.len()
    );
    let mut filler = remaining.into_iter();
    child
        .into_iter()
        .map(|slot| {
            slot.or_else(|| filler.next())
                .expect("fill list shorter than the open child slots")
        })
        .collect()
}

/// Order crossover: p1's segment verbatim, the rest in p2's relative order.
fn order_child(p1: &[Area], p2: &[Area], cut1: usize, cut2: usize) -> Vec<Area> {
    let mut child: Vec<Option<Area>> = vec![None; p1.len()];
    for i in cut1..cut2 {
        child[i] = Some(p1[i]);
    }

    let outside: Vec<Area> = p1[..cut1].iter().chain(&p1[cut2..]).copied().collect();
    let mut remaining: Vec<Area> = p2.iter().copied().filter(|g| outside.contains(g)).collect();
    if remaining.len() < outside.len() {
        remaining.push(missing_alternate(p1));
    }

    fill_gaps(child, remaining)
}

/// Position-based crossover: p1's genes pinned at the chosen positions, the
/// rest in p2's relative order.
fn position_child(p1: &[Area], p2: &[Area], positions: &[usize]) -> Vec<Area> {
    let mut child: Vec<Option<Area>> = vec![None; p1.len()];
    for &i in positions {
        child[i] = Some(p1[i]);
    }

    let mut remaining: Vec<Area> = p2
        .iter()
        .copied()
        .filter(|&g| p1.contains(&g) && !placed(&child, g))
        .collect();
    if remaining.len() < p1.len() - positions.len() {
        remaining.push(missing_alternate(p1));
    }

    fill_gaps(child, remaining)
}

/// Cycle crossover: follow the value cycle between the parents from index
/// 0, copying p1's values along it; everything off the cycle comes from p2.
fn cycle_child(p1: &[Area], p2: &[Area]) -> Vec<Area> {
    let mut child: Vec<Option<Area>> = vec![None; p1.len()];
    let mut cursor = 0;

    loop {
        child[cursor] = Some(p1[cursor]);
        // Where does p2's value at the cursor live in p1?
        let next = p1
            .iter()
            .position(|&g| g == p2[cursor])
            .unwrap_or(cursor);
        cursor = next;
        if child[cursor].is_some() {
            break;
        }
    }

    child
        .iter()
        .enumerate()
        .map(|(i, slot)| slot.unwrap_or(p2[i]))
        .collect()
}

/// Partially-mapped crossover: p1's segment verbatim; displaced p2 genes
/// chase the p1 -> p2 mapping to an empty slot; the rest comes from p2.
fn pmx_child(p1: &[Area], p2: &[Area], cut1: usize, cut2: usize) -> Vec<Area> {
    let mut child: Vec<Option<Area>> = vec![None; p1.len()];
    for i in cut1..cut2 {
        child[i] = Some(p1[i]);
    }

    for i in cut1..cut2 {
        if placed(&child, p2[i]) {
            continue;
        }
        let mut slot = p2.iter().position(|&g| g == p1[i]).unwrap_or(i);
        while child[slot].is_some() {
            slot = p2.iter().position(|&g| g == p1[slot]).unwrap_or(slot);
        }
        child[slot] = Some(p2[i]);
    }

    child
        .iter()
        .enumerate()
        .map(|(i, slot)| slot.unwrap_or(p2[i]))
        .collect()
}

/// Modified PMX: p1's segment verbatim, conflict-free p2 genes in place,
/// and the leftovers scattered into the remaining slots in random order.
fn modified_pmx_child<R: Rng>(
    p1: &[Area],
    p2: &[Area],
    cut1: usize,
    cut2: usize,
    rng: &mut R,
) -> Vec<Area> {
    let mut child: Vec<Option<Area>> = vec![None; p1.len()];
    for i in cut1..cut2 {
        child[i] = Some(p1[i]);
    }

    for i in 0..child.len() {
        if child[i].is_none() && !placed(&child, p2[i]) {
            child[i] = Some(p2[i]);
        }
    }

    let mut remaining: Vec<Area> = p1.iter().copied().filter(|&g| !placed(&child, g)).collect();
    remaining.shuffle(rng);

    fill_gaps(child, remaining)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::route::{Route, INTERIOR_LEN};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn parents() -> (Route, Route) {
        use Area::*;
        let p1 = Route::from_interior(vec![Fc, G, Qs, Dv, Qg, Sn, Cs, Ks, Rg]);
        let p2 = Route::from_interior(vec![G, Fc, Qg, Sn, Cs, Qs, Dv, Ph, Rg]);
        (p1, p2)
    }

    fn assert_valid_child(child: &Route) {
        assert_eq!(child.len(), INTERIOR_LEN + 2);
        assert_eq!(child.genes()[0], Area::D);
        assert_eq!(child.genes()[child.len() - 1], Area::D);

        let interior: HashSet<Area> = child.interior().iter().copied().collect();
        assert_eq!(interior.len(), INTERIOR_LEN, "duplicate gene in {}", child);
        assert!(
            !(interior.contains(&Area::Ks) && interior.contains(&Area::Ph)),
            "both alternates in {}",
            child
        );
    }

    #[test]
    fn all_operators_produce_valid_children() {
        let (p1, p2) = parents();
        let ops = [
            CrossoverOp::Order,
            CrossoverOp::Position,
            CrossoverOp::Cycle,
            CrossoverOp::Pmx,
            CrossoverOp::ModifiedPmx,
        ];
        let mut rng = StdRng::seed_from_u64(42);
        for op in ops {
            for _ in 0..50 {
                let (c1, c2) = op.apply(&p1, &p2, &mut rng);
                assert_valid_child(&c1);
                assert_valid_child(&c2);
            }
        }
    }

    #[test]
    fn order_crossover_keeps_first_parent_segment() {
        let (p1, p2) = parents();
        let child = order_child(p1.interior(), p2.interior(), 2, 5);
        assert_eq!(&child[2..5], &p1.interior()[2..5]);
    }

    #[test]
    fn cycle_crossover_positions_come_from_one_parent_each() {
        let (p1, p2) = parents();
        let a = normalize_alternate(p1.interior().to_vec());
        let b = normalize_alternate(p2.interior().to_vec());
        let child = cycle_child(&a, &b);
        for (i, gene) in child.iter().enumerate() {
            assert!(*gene == a[i] || *gene == b[i]);
        }
    }

    #[test]
    fn pmx_keeps_segment_and_stays_a_permutation() {
        let (p1, p2) = parents();
        let a = normalize_alternate(p1.interior().to_vec());
        let b = normalize_alternate(p2.interior().to_vec());
        let child = pmx_child(&a, &b, 3, 6);
        assert_eq!(&child[3..6], &a[3..6]);
        let unique: HashSet<Area> = child.iter().copied().collect();
        assert_eq!(unique.len(), child.len());
    }

    #[test]
    fn children_only_carry_genes_from_the_parent_pool() {
        use Area::*;
        // Both parents elide KS: no child may conjure a KS out of thin air.
        let p1 = Route::from_interior(vec![Ph, G, Fc, Qg, Sn, Cs, Qs, Dv, Rg]);
        let p2 = Route::from_interior(vec![Fc, G, Qs, Dv, Qg, Sn, Cs, Ph, Rg]);
        let mut rng = StdRng::seed_from_u64(13);
        for op in [CrossoverOp::Order, CrossoverOp::Position] {
            for _ in 0..50 {
                let (c1, c2) = op.apply(&p1, &p2, &mut rng);
                for child in [c1, c2] {
                    assert!(child.contains(Area::Ph), "lost the alternate in {}", child);
                    assert!(!child.contains(Area::Ks), "fabricated KS in {}", child);
                    assert_valid_child(&child);
                }
            }
        }
    }

    #[test]
    fn mixed_alternate_parents_stay_mutually_exclusive() {
        use Area::*;
        // p1 carries PH, p2 carries KS.
        let p1 = Route::from_interior(vec![Ph, G, Fc, Qg, Sn, Cs, Qs, Dv, Rg]);
        let p2 = Route::from_interior(vec![Fc, G, Qs, Dv, Qg, Sn, Cs, Ks, Rg]);
        let mut rng = StdRng::seed_from_u64(9);
        for op in [CrossoverOp::Order, CrossoverOp::Position] {
            for _ in 0..50 {
                let (c1, c2) = op.apply(&p1, &p2, &mut rng);
                assert_valid_child(&c1);
                assert_valid_child(&c2);
            }
        }
    }
}
