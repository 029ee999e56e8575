use grid_util::Point;

use crate::{frontier::PriorityQueue, solver::GridSolver};

/// Uniform-cost search: expands the cell with the lowest accumulated cost. Equivalent
/// to A* with a zero heuristic.
#[derive(Clone, Debug, Default)]
pub struct UniformCostSolver;

impl GridSolver for UniformCostSolver {
    type Frontier = PriorityQueue<Point, i32>;

    fn heuristic(&self, _: &Point, _: &Point) -> i32 {
        0
    }

    fn priority(&self, cost: i32, _: i32) -> i32 {
        cost
    }
}
