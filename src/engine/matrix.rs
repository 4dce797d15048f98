use crate::engine::area::Area;
use crate::error::{GeorouteError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const AREA_COUNT: usize = 10;

/// Index of the Greenpath -> Forgotten Crossroads edge, the one the random
/// generator deliberately weakens.
const WEAK_EDGE: (usize, usize) = (2, 1);

/// Directed reward table: `rewards[a][b]` is the (possibly negative) number
/// of points earned by moving from area `a` to area `b`, in canonical area
/// order. Asymmetric by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardMatrix {
    rewards: [[i64; AREA_COUNT]; AREA_COUNT],
}

impl RewardMatrix {
    pub fn new(rewards: [[i64; AREA_COUNT]; AREA_COUNT]) -> Self {
        Self { rewards }
    }

    /// Build from a row-major nested vec, checking its shape.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self> {
        if rows.len() != AREA_COUNT {
            return Err(GeorouteError::InvalidMatrix(format!(
                "expected {} rows, got {}",
                AREA_COUNT,
                rows.len()
            )));
        }
        let mut rewards = [[0i64; AREA_COUNT]; AREA_COUNT];
        for (i, row) in rows.iter().enumerate() {
            if row.len() != AREA_COUNT {
                return Err(GeorouteError::InvalidMatrix(format!(
                    "row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    AREA_COUNT
                )));
            }
            rewards[i].copy_from_slice(row);
        }
        Ok(Self { rewards })
    }

    /// The fixed example matrix from the original data set.
    pub fn sample() -> Self {
        Self::new([
            [0, 10, 120, -230, 342, 10, 101, 432, -20, 243],
            [47, 0, 82, 103, 96, 231, -10, 34, 136, 109],
            [18, 2, 0, 621, 64, 107, 3, 97, 71, 234],
            [166, 336, 409, 0, 352, 49, 100, 392, 184, 249],
            [-38, 202, 213, 210, 0, 14, -17, 216, 141, 215],
            [284, 275, 394, 350, 285, 0, 340, 292, 330, 296],
            [451, 494, 48, 381, 335, 269, 0, 550, 845, 173],
            [342, -55, -76, 377, 12, 38, 56, 0, -81, 229],
            [228, 219, 129, 346, 172, 222, 257, 213, 0, 146],
            [39, 98, 76, 69, 43, 66, 58, 45, 59, 0],
        ])
    }

    /// Random matrix with entries in -500..=500, except that the G->FC
    /// reward is lowered by 3.2% of the smallest positive reward elsewhere
    /// (floored at zero), modelling a deliberately weak edge.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut rewards = [[0i64; AREA_COUNT]; AREA_COUNT];
        for row in rewards.iter_mut() {
            for cell in row.iter_mut() {
                *cell = rng.gen_range(-500..=500);
            }
        }

        let min_positive = rewards
            .iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter().enumerate().map(move |(j, &v)| ((i, j), v)))
            .filter(|&(pos, v)| v > 0 && pos != WEAK_EDGE)
            .map(|(_, v)| v)
            .min();

        if let Some(min_positive) = min_positive {
            let adjustment = 0.032 * min_positive as f64;
            let weakened = (rewards[WEAK_EDGE.0][WEAK_EDGE.1] as f64 - adjustment).max(0.0);
            rewards[WEAK_EDGE.0][WEAK_EDGE.1] = weakened as i64;
        }

        Self { rewards }
    }

    /// Reward for moving `from` -> `to`. Callers never pass the placeholder;
    /// it is stripped from the path before edges are summed.
    pub fn reward(&self, from: Area, to: Area) -> i64 {
        debug_assert!(!from.is_placeholder() && !to.is_placeholder());
        let from = from.matrix_index().unwrap_or(0);
        let to = to.matrix_index().unwrap_or(0);
        self.rewards[from][to]
    }
}
