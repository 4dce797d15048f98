use serde::{Deserialize, Serialize};
use std::fmt;

/// The ten areas of the map, in the canonical order used to index the
/// reward matrix. `D` (Dirtmouth) is the origin every route starts and
/// ends at. `Ks` (King's Station) is a shortcut waypoint that a route may
/// elide; an elided King's Station is carried in the chromosome as the
/// placeholder `Ph`, which maps to no matrix row and contributes no edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Area {
    D,
    Fc,
    G,
    Qs,
    Qg,
    Cs,
    Ks,
    Rg,
    Dv,
    Sn,
    Ph,
}

/// Matrix order: every real area, origin first.
pub const AREAS: [Area; 10] = [
    Area::D,
    Area::Fc,
    Area::G,
    Area::Qs,
    Area::Qg,
    Area::Cs,
    Area::Ks,
    Area::Rg,
    Area::Dv,
    Area::Sn,
];

impl Area {
    /// Row/column of this area in the reward matrix. `None` for the
    /// placeholder, which has no physical position.
    pub fn matrix_index(self) -> Option<usize> {
        match self {
            Area::Ph => None,
            real => Some(real as usize),
        }
    }

    pub fn is_placeholder(self) -> bool {
        self == Area::Ph
    }

    pub fn code(self) -> &'static str {
        match self {
            Area::D => "D",
            Area::Fc => "FC",
            Area::G => "G",
            Area::Qs => "QS",
            Area::Qg => "QG",
            Area::Cs => "CS",
            Area::Ks => "KS",
            Area::Rg => "RG",
            Area::Dv => "DV",
            Area::Sn => "SN",
            Area::Ph => "PH",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_indices_follow_canonical_order() {
        for (i, area) in AREAS.iter().enumerate() {
            assert_eq!(area.matrix_index(), Some(i));
        }
        assert_eq!(Area::Ph.matrix_index(), None);
    }
}
