use maze_search::maze::Maze;
use maze_search::solver::{astar::AstarSolver, GridSolver};
use maze_search::{Point, OPEN, WALL};

// In this example a path is found to one of two goals on a 3x3 maze with shape
//  ___
// |S G|
// | # |
// |  G|
//  ___
// where
// - \# marks a wall
// - S marks the start
// - G marks a goal
// The found path moves to the closest goal, which is the top one.

fn main() {
    let mut maze = Maze::new(3, 3, OPEN);
    maze.set(&Point::new(1, 1), WALL);
    println!("{}", maze);
    let start = Point::new(0, 0);
    let goals = [Point::new(0, 2), Point::new(2, 2)];
    let (selected_goal, path) = AstarSolver::new()
        .get_path_multiple_goals(&maze, start, &goals)
        .expect("Both goals are reachable");
    println!("Selected goal: {:?}\n", selected_goal);
    println!("Path:");
    for p in path {
        println!("{:?}", p);
    }
}
