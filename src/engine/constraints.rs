use crate::engine::area::Area;
use crate::engine::fitness::route_gains;
use crate::engine::matrix::RewardMatrix;
use crate::engine::route::Route;

/// Pure legality predicate. True iff the route breaks any ordering rule:
///   - City Storerooms directly after Queen's Gardens (also when the
///     placeholder sits between them);
///   - Resting Grounds at or before the midpoint (it belongs strictly to
///     the second half);
///   - a repeated non-origin area;
///   - King's Station and the placeholder present at the same time.
pub fn violates(route: &Route) -> bool {
    let pos = |area: Area| route.position_of(area);

    if let (Some(cs), Some(qg)) = (pos(Area::Cs), pos(Area::Qg)) {
        if cs == qg + 1 {
            return true;
        }
        if let Some(ph) = pos(Area::Ph) {
            if ph == qg + 1 && cs == ph + 1 {
                return true;
            }
        }
    }

    match pos(Area::Rg) {
        Some(rg) if rg <= route.len() / 2 => return true,
        Some(_) => {}
        None => return true,
    }

    let interior = route.interior();
    for (i, a) in interior.iter().enumerate() {
        if interior[i + 1..].contains(a) {
            return true;
        }
    }

    route.contains(Area::Ks) && route.contains(Area::Ph)
}

/// Decide whether the King's Station shortcut is worth taking and commit
/// the better variant in place.
///
/// When Distant Village comes directly after Queen's Station the shortcut
/// becomes optional: the route is compared with KS present and with KS
/// elided (as the placeholder), and the strictly higher-scoring form wins.
/// Anywhere else the shortcut is mandatory, so an elided KS is restored.
///
/// Run this before [`violates`]; the original folded it into the
/// constraint check itself, which made the predicate mutate its argument.
pub fn repair_alternate(route: &mut Route, matrix: &RewardMatrix) {
    let dv_after_qs = match (route.position_of(Area::Dv), route.position_of(Area::Qs)) {
        (Some(dv), Some(qs)) => dv == qs + 1,
        _ => false,
    };

    if dv_after_qs {
        try_substitution(route, Area::Ks, Area::Ph, matrix);
        try_substitution(route, Area::Ph, Area::Ks, matrix);
    } else if route.contains(Area::Ph) {
        route.substitute(Area::Ph, Area::Ks);
    }
}

/// Swap `from` for `to` when that strictly raises the route's gains.
fn try_substitution(route: &mut Route, from: Area, to: Area, matrix: &RewardMatrix) {
    if !route.contains(from) {
        return;
    }
    let mut candidate = route.clone();
    candidate.substitute(from, to);
    if route_gains(&candidate, matrix) > route_gains(route, matrix) {
        *route = candidate;
    }
}
