use maze_search::maze::Maze;
use maze_search::solver::{bfs::BfsSolver, GridSolver};
use maze_search::{Point, Strategy};

// The goal G sits on a wall marker, so no strategy can expand it:
//
// 1 1 1 1 1 1 1
// 1 S 0 0 0 0 1
// 1 0 1 1 1 0 1
// 1 0 1 0 0 0 1
// 1 0 1 0 G 0 1
// 1 0 0 0 1 0 1
// 1 1 1 1 1 1 1
//
// An approximate query settles for the closest open cell next to it instead.

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let maze: Maze = "
1111111
1000001
1011101
1010001
1010101
1000101
1111111"
        .parse()
        .expect("Maze is not rectangular");
    let start = Point::new(1, 1);
    let goal = Point::new(4, 4);
    for strategy in Strategy::ALL {
        let found = strategy.search(&maze, start, goal).is_some();
        println!("{strategy}: path found: {found}");
    }
    let path = BfsSolver
        .get_path_single_goal_approximate(&maze, start, goal)
        .expect("A neighbour of the goal is reachable");
    println!("\nApproximate path:");
    println!("{}", maze.render_path(Some(&path[..]), &start, &goal));
}
