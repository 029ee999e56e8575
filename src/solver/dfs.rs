use grid_util::Point;

use crate::{frontier::Stack, solver::GridSolver};

/// Depth-first search: always expands the most recently discovered cell.
/// Finds some path if one exists, not necessarily a short one.
#[derive(Clone, Debug, Default)]
pub struct DfsSolver;

impl GridSolver for DfsSolver {
    type Frontier = Stack<Point, i32>;

    fn heuristic(&self, _: &Point, _: &Point) -> i32 {
        0
    }

    fn priority(&self, cost: i32, _: i32) -> i32 {
        cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Maze;
    use crate::OPEN;

    /// Right is pushed last and left after down, so an open room is swept
    /// row by row in a snake.
    #[test]
    fn follows_last_pushed_neighbour() {
        let maze = Maze::new(3, 3, OPEN);
        let start = Point::new(0, 0);
        let goal = Point::new(2, 2);
        let path = DfsSolver.get_path_single_goal(&maze, start, goal).unwrap();
        assert_eq!(
            path,
            vec![
                start,
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 2),
                Point::new(1, 1),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(2, 1),
                goal
            ]
        );
    }

    /// Diving right first makes the search overshoot a goal just below the start.
    #[test]
    fn not_shortest() {
        let maze = Maze::new(2, 3, OPEN);
        let start = Point::new(0, 0);
        let goal = Point::new(1, 0);
        let path = DfsSolver.get_path_single_goal(&maze, start, goal).unwrap();
        assert!(maze.is_valid_path(&path, &start, &goal));
        assert_eq!(path.len(), 6);
    }
}
