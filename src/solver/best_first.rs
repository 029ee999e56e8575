use grid_util::Point;

use crate::{frontier::HeuristicQueue, manhattan_distance, solver::GridSolver};

/// Greedy best-first search: expands the cell that looks closest to the goal by
/// Manhattan distance, ignoring the cost paid so far. Cells that look equally close
/// are taken in row then column order. Fast on open mazes but gives no guarantee on
/// path length.
#[derive(Clone, Debug, Default)]
pub struct BestFirstSolver;

impl GridSolver for BestFirstSolver {
    type Frontier = HeuristicQueue<Point, i32>;

    fn heuristic(&self, p1: &Point, p2: &Point) -> i32 {
        manhattan_distance(p1, p2)
    }

    fn priority(&self, _: i32, heuristic: i32) -> i32 {
        heuristic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Maze;
    use crate::solver::astar::AstarSolver;

    /// (1, 2) and (2, 1) are equally close to the goal; the upper one is taken.
    #[test]
    fn equal_distance_prefers_smaller_cell() {
        let maze: Maze = "
1111111
1000001
1011101
1010001
1010101
1000101
1111111"
            .parse()
            .unwrap();
        let start = Point::new(1, 1);
        let goal = Point::new(5, 5);
        let path = BestFirstSolver
            .get_path_single_goal(&maze, start, goal)
            .unwrap();
        let expected = [(1, 1), (1, 2), (1, 3), (1, 4), (1, 5), (2, 5), (3, 5), (4, 5), (5, 5)]
            .map(|(x, y)| Point::new(x, y));
        assert_eq!(path, expected);
    }

    /// Heads along the top row towards the goal's column and gets led into the long
    /// way round.
    #[test]
    fn greedy_detour() {
        let maze: Maze = "
000000
000000
011010
001001
000000"
            .parse()
            .unwrap();
        let start = Point::new(0, 0);
        let goal = Point::new(4, 5);
        let greedy = BestFirstSolver
            .get_path_single_goal(&maze, start, goal)
            .unwrap();
        let optimal = AstarSolver::new()
            .get_path_single_goal(&maze, start, goal)
            .unwrap();
        assert!(maze.is_valid_path(&greedy, &start, &goal));
        assert_eq!(greedy.len(), 14);
        assert_eq!(optimal.len(), 10);
        assert_eq!(greedy[6], Point::new(1, 5));
    }
}
