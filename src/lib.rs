//! # maze_search
//!
//! Route finding on 4-connected grid mazes with five interchangeable strategies:
//! [depth-first](https://en.wikipedia.org/wiki/Depth-first_search),
//! [breadth-first](https://en.wikipedia.org/wiki/Breadth-first_search),
//! uniform-cost,
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) and
//! [greedy best-first](https://en.wikipedia.org/wiki/Best-first_search) search.
//! All moves cost one step and go up, down, left or right; diagonal moves are not allowed.
//!
//! Every strategy runs the same loop and differs only in the order its frontier hands
//! out cells: a cell is expanded at most once, the goal is recognised when it is
//! expanded (not when it is discovered) and the path is rebuilt from parent links.
//! Breadth-first, uniform-cost and A* return shortest paths; depth-first and greedy
//! best-first only guarantee that the path is valid.
//!
//! ```
//! use maze_search::{maze::Maze, Point, Strategy};
//!
//! let maze: Maze = "
//! 1111111
//! 1000001
//! 1011101
//! 1111111"
//!     .parse()
//!     .unwrap();
//! let path = Strategy::AStar
//!     .search(&maze, Point::new(1, 1), Point::new(1, 5))
//!     .unwrap();
//! assert_eq!(path.len(), 5);
//! ```
pub mod frontier;
pub mod maze;
pub mod search;
pub mod solver;

use crate::maze::Maze;
use crate::solver::{
    astar::AstarSolver, best_first::BestFirstSolver, bfs::BfsSolver, dfs::DfsSolver,
    uniform_cost::UniformCostSolver, GridSolver,
};
use core::fmt;
use std::error::Error;
use std::str::FromStr;

/// Maze cells are [Point]s with `x` as the row and `y` as the column.
pub use grid_util::Point;

/// Marker of a passable cell.
pub const OPEN: char = '0';
/// Conventional marker of a wall. Any marker other than the open one blocks.
pub const WALL: char = '1';
/// A cell has at most four neighbours.
pub const N_SMALLVEC_SIZE: usize = 4;

/// Sum of the absolute coordinate differences: the number of unit moves between two
/// cells on an empty 4-connected grid.
pub fn manhattan_distance(p1: &Point, p2: &Point) -> i32 {
    (p1.x - p2.x).abs() + (p1.y - p2.y).abs()
}

/// The search strategies a caller can pick from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
    UniformCost,
    AStar,
    BestFirst,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::UniformCost,
        Strategy::AStar,
        Strategy::BestFirst,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::DepthFirst => "Depth-First Search",
            Strategy::BreadthFirst => "Breadth-First Search",
            Strategy::UniformCost => "Uniform Cost Search",
            Strategy::AStar => "A* Search",
            Strategy::BestFirst => "Best-First Search",
        }
    }

    /// Whether the strategy always returns a path with the fewest moves.
    pub fn is_optimal(&self) -> bool {
        matches!(
            self,
            Strategy::BreadthFirst | Strategy::UniformCost | Strategy::AStar
        )
    }

    /// Computes a path from `start` to `goal`, both included, or [None] if the goal
    /// cannot be reached.
    pub fn search(&self, maze: &Maze, start: Point, goal: Point) -> Option<Vec<Point>> {
        match self {
            Strategy::DepthFirst => DfsSolver.get_path_single_goal(maze, start, goal),
            Strategy::BreadthFirst => BfsSolver.get_path_single_goal(maze, start, goal),
            Strategy::UniformCost => UniformCostSolver.get_path_single_goal(maze, start, goal),
            Strategy::AStar => AstarSolver::new().get_path_single_goal(maze, start, goal),
            Strategy::BestFirst => BestFirstSolver.get_path_single_goal(maze, start, goal),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names none of the [Strategy] variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown search strategy \"{}\", expected one of dfs, bfs, ucs, astar, best-first",
            self.0
        )
    }
}

impl Error for UnknownStrategy {}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" => Ok(Strategy::DepthFirst),
            "bfs" => Ok(Strategy::BreadthFirst),
            "ucs" => Ok(Strategy::UniformCost),
            "astar" => Ok(Strategy::AStar),
            "best-first" => Ok(Strategy::BestFirst),
            _ => Err(UnknownStrategy(s.to_owned())),
        }
    }
}

/// Computes a path from `start` to `goal` in `maze` with the given strategy.
/// See [Strategy::search].
pub fn search(strategy: Strategy, maze: &Maze, start: Point, goal: Point) -> Option<Vec<Point>> {
    strategy.search(maze, start, goal)
}
