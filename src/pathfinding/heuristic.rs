//! Distance heuristics for the A* search.

use crate::core::GridCoord;
use serde::{Deserialize, Serialize};

/// Heuristic used to estimate remaining cost to the goal.
///
/// A* only guarantees optimal paths when the heuristic never overestimates
/// the true remaining cost under the configured movement model. Octile is
/// the tightest admissible choice for 8-directional movement with a sqrt(2)
/// diagonal cost and is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    /// `|dx| + |dy|` - admissible only without diagonal movement
    Manhattan,
    /// `sqrt(dx^2 + dy^2)` - always admissible, not always tight
    Euclidean,
    /// `min(|dx|,|dy|) * diagonal_cost + (max(|dx|,|dy|) - min(|dx|,|dy|))`
    #[default]
    Octile,
}

impl Heuristic {
    /// Estimate the cost between two cells, in cell units.
    ///
    /// Strictly non-negative. `diagonal_cost` only affects [`Heuristic::Octile`].
    #[inline]
    pub fn estimate(&self, from: GridCoord, to: GridCoord, diagonal_cost: f32) -> f32 {
        let dx = (from.x - to.x).abs() as f32;
        let dy = (from.y - to.y).abs() as f32;

        match self {
            Heuristic::Manhattan => dx + dy,
            Heuristic::Euclidean => (dx * dx + dy * dy).sqrt(),
            Heuristic::Octile => {
                let min = dx.min(dy);
                let max = dx.max(dy);
                min * diagonal_cost + (max - min)
            }
        }
    }

    /// Whether this heuristic stays admissible under the given movement
    /// model.
    ///
    /// Manhattan overestimates as soon as diagonal movement is enabled
    /// (a diagonal step covers |dx|+|dy| = 2 for a cost of sqrt(2)).
    #[inline]
    pub fn is_admissible(&self, allow_diagonal: bool) -> bool {
        match self {
            Heuristic::Manhattan => !allow_diagonal,
            Heuristic::Euclidean | Heuristic::Octile => true,
        }
    }
}
