//! Loads the benchmark mazes under `mazes/` and their scenarios under `scenarios/`,
//! both relative to the working directory.
//!
//! A maze file holds one row of markers per line. A scenario file starts with a
//! version line followed by tab separated records; a distance of `-1` marks a goal
//! that cannot be reached.
use csv::ReaderBuilder;
use grid_util::Point;
use serde::Deserialize;
use std::fs::{self, File};
use std::io::{self, BufRead};
use std::path::Path;
use walkdir::WalkDir;

#[allow(unused)]
#[derive(Debug, Deserialize)]
struct Scenario {
    id: u32,
    file_name: String,
    rows: u32,
    cols: u32,
    start_row: u32,
    start_col: u32,
    goal_row: u32,
    goal_col: u32,
    distance: i64,
}

/// Start, goal and the number of moves on a shortest path, [None] if the goal is unreachable.
pub type ScenarioCase = (Point, Point, Option<usize>);

fn load_benchmark(name: &str) -> (String, Vec<ScenarioCase>) {
    let maze_str = fs::read_to_string(Path::new(&format!("./mazes/{}.maze", name)))
        .expect("Could not read maze file");

    let file = File::open(Path::new(&format!("./scenarios/{}.maze.scen", name)))
        .expect("Could not open scenario file");

    let reader = io::BufReader::new(file);
    let mut lines = reader.lines();

    // Skip the version line
    lines.next();

    let remaining_data = lines
        .collect::<Result<Vec<_>, _>>()
        .expect("Could not read scenario file")
        .join("\n");

    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_reader(remaining_data.as_bytes());

    let mut cases: Vec<ScenarioCase> = Vec::new();
    for result in csv_reader.deserialize() {
        let record: Scenario = result.expect("Could not parse scenario record");
        let start = Point::new(record.start_row as i32, record.start_col as i32);
        let goal = Point::new(record.goal_row as i32, record.goal_col as i32);
        let distance = usize::try_from(record.distance).ok();
        cases.push((start, goal, distance));
    }
    (maze_str, cases)
}

/// Names of all available benchmarks as `<set>/<maze>`, sorted.
pub fn get_benchmark_names() -> Vec<String> {
    let root = Path::new("mazes/");
    let root = root
        .canonicalize()
        .expect("Failed to canonicalize root path");
    let mut names = Vec::new();
    for entry in WalkDir::new(&root).into_iter() {
        let entry = entry.expect("Could not get dir entry");
        let rel_path = entry
            .path()
            .strip_prefix(&root)
            .expect("Entry outside of maze directory");
        if rel_path.components().count() >= 2 {
            if let Some((name, _)) = rel_path.to_str().and_then(|p| p.split_once('.')) {
                names.push(name.replace('\\', "/"));
            }
        }
    }
    names.sort();
    names
}

/// The maze text and scenarios of the named benchmark.
pub fn get_benchmark(name: String) -> (String, Vec<ScenarioCase>) {
    let benchmark_names = get_benchmark_names();
    if benchmark_names.contains(&name) {
        load_benchmark(name.as_str())
    } else {
        panic!("Could not load benchmark {name}!");
    }
}
