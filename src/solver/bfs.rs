use grid_util::Point;

use crate::{frontier::Queue, solver::GridSolver};

/// Breadth-first search: expands cells in the order they were discovered. As every
/// move costs the same, the first path to the goal has the fewest moves.
#[derive(Clone, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    type Frontier = Queue<Point, i32>;

    fn heuristic(&self, _: &Point, _: &Point) -> i32 {
        0
    }

    fn priority(&self, cost: i32, _: i32) -> i32 {
        cost
    }
}
