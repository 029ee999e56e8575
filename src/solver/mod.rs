use crate::frontier::Frontier;
use crate::maze::Maze;
use crate::search::graph_search;
use crate::manhattan_distance;
use grid_util::Point;
use itertools::Itertools;
use log::debug;

pub mod astar;
pub mod best_first;
pub mod bfs;
pub mod dfs;
pub mod uniform_cost;

/// Runs the shared search loop with the solver's frontier discipline and priority.
fn solve<S, FH, FS>(
    solver: &S,
    maze: &Maze,
    start: &Point,
    mut heuristic: FH,
    success: FS,
) -> Option<Vec<Point>>
where
    S: GridSolver + ?Sized,
    FH: FnMut(&Point) -> i32,
    FS: FnMut(&Point) -> bool,
{
    graph_search(
        start,
        S::Frontier::default(),
        |node| maze.neighbours_and_cost(node),
        |node, cost| solver.priority(cost, heuristic(node)),
        success,
    )
    .map(|(path, _cost)| path)
}

/// A search strategy on a 4-connected [Maze]. Implementors pick the frontier
/// discipline and how cost and heuristic combine into the frontier ordering; the
/// path queries are shared.
pub trait GridSolver {
    type Frontier: Frontier<Point, i32>;

    /// Estimated remaining cost from `p1` to `p2`.
    fn heuristic(&self, p1: &Point, p2: &Point) -> i32;

    /// Key a priority frontier orders on, given the accumulated cost of a node and
    /// its heuristic value. Stack and queue frontiers ignore it.
    fn priority(&self, cost: i32, heuristic: i32) -> i32;

    /// Sum of the unit move costs along `path`.
    fn get_path_cost(&self, path: &[Point]) -> i32 {
        path.iter()
            .tuple_windows()
            .map(|(p1, p2)| manhattan_distance(p1, p2))
            .sum()
    }

    /// Computes a path from start to goal, both included. Returns [None] if the
    /// frontier runs out before the goal is expanded.
    fn get_path_single_goal(&self, maze: &Maze, start: Point, goal: Point) -> Option<Vec<Point>> {
        debug!("Searching for a path from {} to {}", start, goal);
        solve(
            self,
            maze,
            &start,
            |point| self.heuristic(point, &goal),
            |point| *point == goal,
        )
    }

    /// Computes a path to the goal or to any cell next to it, whichever is expanded
    /// first. Useful when the goal itself is a wall.
    fn get_path_single_goal_approximate(
        &self,
        maze: &Maze,
        start: Point,
        goal: Point,
    ) -> Option<Vec<Point>> {
        debug!("Searching for a path from {} to next to {}", start, goal);
        solve(
            self,
            maze,
            &start,
            |point| self.heuristic(point, &goal),
            |point| manhattan_distance(point, &goal) <= 1,
        )
    }

    /// Computes a path from the start to one of the given goals and returns the selected
    /// goal in addition to the found path. The heuristic value of a cell is the smallest
    /// one over all goals.
    fn get_path_multiple_goals(
        &self,
        maze: &Maze,
        start: Point,
        goals: &[Point],
    ) -> Option<(Point, Vec<Point>)> {
        if goals.is_empty() {
            return None;
        }
        let path = solve(
            self,
            maze,
            &start,
            |point| {
                goals
                    .iter()
                    .map(|goal| self.heuristic(point, goal))
                    .min()
                    .unwrap_or(0)
            },
            |point| goals.contains(point),
        )?;
        let goal = *path.last()?;
        Some((goal, path))
    }
}
