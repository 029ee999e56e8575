use maze_search::maze::Maze;
use maze_search::solver::{astar::AstarSolver, GridSolver};
use maze_search::{Point, OPEN, WALL};

// The heuristic_factor can be set to scale the heuristic, causing cells that are closer to the goal (ignoring walls)
// to be expanded sooner than in normal operation. This is called Weighted A* and it can speed up the search,
// at the price of sometimes returning a longer path.

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    const N: i32 = 30;
    let mut maze = Maze::new(N as usize, N as usize, OPEN);
    for x in 8..16 {
        for y in 8..16 {
            maze.set(&Point::new(x, y), WALL);
        }
    }
    for x in 3..N - 1 {
        maze.set(&Point::new(x, 20), WALL);
    }
    let start = Point::new(1, 1);
    let end = Point::new(N - 3, N - 3);
    for heuristic_factor in [1.0, 1.3, 3.0] {
        let solver = AstarSolver { heuristic_factor };
        let path = solver
            .get_path_single_goal(&maze, start, end)
            .expect("Goal is reachable");
        println!(
            "Heuristic factor {}: {} moves",
            heuristic_factor,
            solver.get_path_cost(&path)
        );
    }
}
