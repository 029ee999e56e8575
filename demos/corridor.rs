use maze_search::maze::Maze;
use maze_search::{Point, Strategy};

// Solves the following maze from S to G with every strategy, or only with the strategy
// named on the command line (dfs, bfs, ucs, astar or best-first):
//
// 1 1 1 1 1 1 1
// 1 S 0 0 0 G 1
// 1 0 1 1 1 0 1
// 1 0 1 0 0 0 1
// 1 0 1 0 1 0 1
// 1 0 0 0 1 0 1
// 1 1 1 1 1 1 1
//
// Run with RUST_LOG=debug to see how many cells each search expands.

const MAZE: &str = "
1111111
1000001
1011101
1010001
1010101
1000101
1111111";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let strategies = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<Strategy>() {
            Ok(strategy) => vec![strategy],
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        None => Strategy::ALL.to_vec(),
    };
    let maze: Maze = MAZE.parse().expect("Maze is not rectangular");
    let start = Point::new(1, 1);
    let goal = Point::new(1, 5);
    for strategy in strategies {
        println!("{strategy}:");
        match strategy.search(&maze, start, goal) {
            Some(path) => {
                println!("{}", maze.render_path(Some(&path[..]), &start, &goal));
                println!("Path found with {} moves.\n", path.len() - 1);
            }
            None => {
                println!("{}", maze.render_path(None, &start, &goal));
                println!("No path found.\n");
            }
        }
    }
}
