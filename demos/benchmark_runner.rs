use maze_search::maze::Maze;
use maze_search::{Point, Strategy};
use maze_search_benchmark::*;
use std::time::{Duration, Instant};

fn main() {
    let benchmark_names = get_benchmark_names();
    let mut total_time = Duration::ZERO;
    for name in benchmark_names {
        println!("Benchmark name: {}", name);

        let (maze_str, scenarios) = get_benchmark(name);
        let maze: Maze = maze_str.parse().expect("Benchmark maze is not rectangular");
        for strategy in Strategy::ALL {
            let number_of_scenarios = scenarios.len() as u32;
            let before = Instant::now();
            let moves = run_scenarios(&maze, strategy, &scenarios);
            let elapsed = before.elapsed();
            println!(
                "\t{}: elapsed time: {:.2?}; per scenario: {:.2?}; total moves: {}",
                strategy,
                elapsed,
                elapsed / number_of_scenarios.max(1),
                moves
            );
            total_time += elapsed;
        }
    }
    println!("\tTotal benchmark time: {:.2?}", total_time);
}

pub fn run_scenarios(maze: &Maze, strategy: Strategy, scenarios: &[ScenarioCase]) -> usize {
    let mut moves = 0;
    for (start, goal, distance) in scenarios {
        let path: Option<Vec<Point>> = strategy.search(maze, *start, *goal);
        assert_eq!(path.is_some(), distance.is_some());
        moves += path.map_or(0, |p| p.len() - 1);
    }
    moves
}
