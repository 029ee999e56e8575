use grid_util::Point;

use crate::{frontier::PriorityQueue, manhattan_distance, solver::GridSolver};

/// A* search ordered on accumulated cost plus the Manhattan distance to the goal.
/// With the default heuristic factor of 1.0 the heuristic is consistent and the
/// returned paths are shortest; larger factors trade optimality for fewer expansions.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> Self {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    type Frontier = PriorityQueue<Point, i32>;

    /// Just the Manhattan distance times a heuristic factor.
    fn heuristic(&self, p1: &Point, p2: &Point) -> i32 {
        (manhattan_distance(p1, p2) as f32 * self.heuristic_factor) as i32
    }

    fn priority(&self, cost: i32, heuristic: i32) -> i32 {
        cost + heuristic
    }
}
