use crate::{manhattan_distance, N_SMALLVEC_SIZE, OPEN};
use core::fmt;
use grid_util::Point;
use itertools::Itertools;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;
use std::error::Error;
use std::str::FromStr;

/// Errors that can occur when building a [Maze] from rows of markers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MazeError {
    /// No rows were given, or the rows contain no markers.
    Empty,
    /// A row has a different number of markers than the first row.
    InconsistentSize {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::Empty => write!(f, "maze has no cells"),
            MazeError::InconsistentSize {
                row,
                expected,
                found,
            } => write!(
                f,
                "maze row {} has {} markers, expected {}",
                row, found, expected
            ),
        }
    }
}

impl Error for MazeError {}

/// A rectangular maze of single character markers, stored row-major.
///
/// Cells are addressed with [Point] where `x` is the row and `y` the column.
/// A cell is open when its marker equals the open marker ([OPEN] unless
/// changed with [with_open_marker](Self::with_open_marker)), every other
/// marker is a wall.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    markers: Vec<char>,
    rows: usize,
    cols: usize,
    open: char,
}

impl Maze {
    /// Creates a `rows` by `cols` maze where every cell holds `marker`.
    pub fn new(rows: usize, cols: usize, marker: char) -> Maze {
        Maze {
            markers: vec![marker; rows * cols],
            rows,
            cols,
            open: OPEN,
        }
    }

    /// Builds a maze from rows of markers. Every row must have the same length.
    pub fn from_rows<I, R>(rows: I) -> Result<Maze, MazeError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = char>,
    {
        let mut markers = Vec::new();
        let mut width: Option<usize> = None;
        let mut height = 0;
        for (row, line) in rows.into_iter().enumerate() {
            let before = markers.len();
            markers.extend(line);
            let found = markers.len() - before;
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(MazeError::InconsistentSize {
                        row,
                        expected,
                        found,
                    })
                }
                _ => {}
            }
            height += 1;
        }
        match width {
            Some(cols) if cols > 0 => Ok(Maze {
                markers,
                rows: height,
                cols,
                open: OPEN,
            }),
            _ => Err(MazeError::Empty),
        }
    }

    /// Uses `open` as the marker of passable cells instead of [OPEN].
    pub fn with_open_marker(mut self, open: char) -> Maze {
        self.open = open;
        self
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn open_marker(&self) -> char {
        self.open
    }

    pub fn in_bounds(&self, p: &Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.rows && (p.y as usize) < self.cols
    }

    fn ix(&self, p: &Point) -> usize {
        p.x as usize * self.cols + p.y as usize
    }

    /// The marker at `p`, or [None] if `p` lies outside the maze.
    pub fn get(&self, p: &Point) -> Option<char> {
        if self.in_bounds(p) {
            Some(self.markers[self.ix(p)])
        } else {
            None
        }
    }

    /// Overwrites the marker at `p`. Points outside the maze are ignored.
    pub fn set(&mut self, p: &Point, marker: char) {
        if self.in_bounds(p) {
            let ix = self.ix(p);
            self.markers[ix] = marker;
        }
    }

    /// True iff `p` lies inside the maze and holds the open marker.
    pub fn is_passable(&self, p: &Point) -> bool {
        self.get(p) == Some(self.open)
    }

    /// The passable cells among up, down, left and right of `p`, in that order.
    pub fn neighbours(&self, p: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        [
            Point::new(p.x - 1, p.y),
            Point::new(p.x + 1, p.y),
            Point::new(p.x, p.y - 1),
            Point::new(p.x, p.y + 1),
        ]
        .into_iter()
        .filter(|n| self.is_passable(n))
        .collect()
    }

    /// [neighbours](Self::neighbours) paired with the unit cost of moving there.
    pub fn neighbours_and_cost(&self, p: &Point) -> SmallVec<[(Point, i32); N_SMALLVEC_SIZE]> {
        self.neighbours(p).into_iter().map(|n| (n, 1)).collect()
    }

    /// Links every passable cell to its passable 4-neighbours in a [UnionFind]
    /// indexed row-major.
    pub fn generate_components(&self) -> UnionFind<usize> {
        let mut components = UnionFind::new(self.rows * self.cols);
        for x in 0..self.rows as i32 {
            for y in 0..self.cols as i32 {
                let point = Point::new(x, y);
                if !self.is_passable(&point) {
                    continue;
                }
                let parent_ix = self.ix(&point);
                for n in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                    if self.is_passable(&n) {
                        components.union(parent_ix, self.ix(&n));
                    }
                }
            }
        }
        components
    }

    /// Checks whether `goal` can be reached from `start` through passable cells.
    /// Both endpoints have to be passable themselves.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        if !self.is_passable(start) || !self.is_passable(goal) {
            return false;
        }
        self.generate_components()
            .equiv(self.ix(start), self.ix(goal))
    }

    /// Checks that `path` runs from `start` to `goal` over distinct passable cells,
    /// each one step away from the previous one.
    pub fn is_valid_path(&self, path: &[Point], start: &Point, goal: &Point) -> bool {
        path.first() == Some(start)
            && path.last() == Some(goal)
            && path.iter().all(|p| self.is_passable(p))
            && path
                .iter()
                .tuple_windows()
                .all(|(a, b)| manhattan_distance(a, b) == 1)
            && path.iter().all_unique()
    }

    /// Draws the maze with path cells as `*`, the start as `S` and the goal as `G`.
    pub fn render_path(&self, path: Option<&[Point]>, start: &Point, goal: &Point) -> String {
        let mut markers = self.markers.clone();
        for p in path.into_iter().flatten() {
            if self.in_bounds(p) {
                markers[self.ix(p)] = '*';
            }
        }
        for (p, marker) in [(start, 'S'), (goal, 'G')] {
            if self.in_bounds(p) {
                markers[self.ix(p)] = marker;
            }
        }
        markers
            .chunks(self.cols.max(1))
            .map(|row| row.iter().join(" "))
            .join("\n")
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    /// One row per line. Whitespace around the whole maze is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Maze::from_rows(
            s.trim()
                .lines()
                .map(|line| line.trim_end_matches('\r').chars()),
        )
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.markers.chunks(self.cols.max(1)) {
            writeln!(f, "{}", row.iter().collect::<String>())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WALL;

    const CORRIDOR: &str = "
1111111
1000001
1011101
1010001
1010101
1000101
1111111";

    #[test]
    fn parse_dimensions() {
        let maze: Maze = CORRIDOR.parse().unwrap();
        assert_eq!(maze.rows(), 7);
        assert_eq!(maze.cols(), 7);
        assert_eq!(maze.get(&Point::new(1, 1)), Some('0'));
        assert_eq!(maze.get(&Point::new(0, 3)), Some('1'));
        assert_eq!(maze.get(&Point::new(7, 0)), None);
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let result = "000\n00\n000".parse::<Maze>();
        assert_eq!(
            result,
            Err(MazeError::InconsistentSize {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!("".parse::<Maze>(), Err(MazeError::Empty));
        assert_eq!(Maze::from_rows(Vec::<Vec<char>>::new()), Err(MazeError::Empty));
    }

    #[test]
    fn passable_cells() {
        let maze: Maze = CORRIDOR.parse().unwrap();
        assert!(maze.is_passable(&Point::new(1, 1)));
        assert!(!maze.is_passable(&Point::new(2, 2)));
        // Outside the maze in every direction
        for p in [
            Point::new(-1, 1),
            Point::new(1, -1),
            Point::new(7, 1),
            Point::new(1, 7),
        ] {
            assert!(!maze.is_passable(&p));
        }
    }

    #[test]
    fn open_marker_is_configurable() {
        let maze = Maze::from_rows(vec![vec!['.', '#'], vec!['.', '.']])
            .unwrap()
            .with_open_marker('.');
        assert!(maze.is_passable(&Point::new(0, 0)));
        assert!(!maze.is_passable(&Point::new(0, 1)));
        assert_eq!(maze.open_marker(), '.');
    }

    /// Neighbours come out as up, down, left, right.
    #[test]
    fn neighbour_order() {
        let maze = Maze::new(3, 3, OPEN);
        let centre = Point::new(1, 1);
        assert_eq!(
            maze.neighbours(&centre).into_vec(),
            vec![
                Point::new(0, 1),
                Point::new(2, 1),
                Point::new(1, 0),
                Point::new(1, 2)
            ]
        );
        let corner = Point::new(0, 0);
        assert_eq!(
            maze.neighbours_and_cost(&corner).into_vec(),
            vec![(Point::new(1, 0), 1), (Point::new(0, 1), 1)]
        );
    }

    #[test]
    fn walls_split_components() {
        //  ___
        // | # |
        // | # |
        //  ___
        let mut maze = Maze::new(2, 3, OPEN);
        maze.set(&Point::new(0, 1), WALL);
        maze.set(&Point::new(1, 1), WALL);
        assert!(maze.reachable(&Point::new(0, 0), &Point::new(1, 0)));
        assert!(!maze.reachable(&Point::new(0, 0), &Point::new(0, 2)));
        assert!(!maze.reachable(&Point::new(0, 0), &Point::new(0, 1)));
    }

    /// Diagonal contact does not connect two cells.
    #[test]
    fn diagonal_is_not_adjacent() {
        //  __
        // | #|
        // |# |
        //  __
        let maze: Maze = "01\n10".parse().unwrap();
        assert!(!maze.reachable(&Point::new(0, 0), &Point::new(1, 1)));
    }

    #[test]
    fn path_validation() {
        let maze: Maze = CORRIDOR.parse().unwrap();
        let start = Point::new(1, 1);
        let goal = Point::new(1, 3);
        let path = vec![start, Point::new(1, 2), goal];
        assert!(maze.is_valid_path(&path, &start, &goal));
        // Skips a cell
        assert!(!maze.is_valid_path(&[start, goal], &start, &goal));
        // Revisits a cell
        let back_and_forth = vec![start, Point::new(1, 2), start, Point::new(1, 2), goal];
        assert!(!maze.is_valid_path(&back_and_forth, &start, &goal));
        // Walks through a wall
        let through_wall = vec![start, Point::new(2, 1), Point::new(2, 2)];
        assert!(!maze.is_valid_path(&through_wall, &start, &Point::new(2, 2)));
        assert!(!maze.is_valid_path(&[], &start, &goal));
    }

    #[test]
    fn render_marks_path() {
        let maze: Maze = "000\n010".parse().unwrap();
        let start = Point::new(1, 0);
        let goal = Point::new(1, 2);
        let path = vec![
            start,
            Point::new(0, 0),
            Point::new(0, 1),
            Point::new(0, 2),
            goal,
        ];
        assert_eq!(
            maze.render_path(Some(&path[..]), &start, &goal),
            "* * *\nS 1 G"
        );
        assert_eq!(maze.render_path(None, &start, &goal), "0 0 0\nS 1 G");
        assert_eq!(maze.to_string(), "000\n010\n");
    }
}
