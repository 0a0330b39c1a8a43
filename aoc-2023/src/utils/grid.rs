//! Rectangular character grids and the four compass directions

use aoc_solver::ParseError;
use std::ops::{Index, IndexMut};

/// `(x, y)` with `x` the column and `y` the row, origin top-left
pub type Pos = (usize, usize);

/// One of the four axis-aligned directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions, clockwise from north
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn turn_right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub fn opposite(self) -> Self {
        self.turn_right().turn_right()
    }

    /// Unit step as `(dx, dy)`; north decreases `y`
    pub fn offset(self) -> (i64, i64) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// Index into [`Direction::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Row-major rectangular grid
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Parse one row per non-empty line, mapping every character with `cell`.
    ///
    /// Rows must all have the same width and there must be at least one.
    pub fn parse<F>(input: &str, mut cell: F) -> Result<Self, ParseError>
    where
        F: FnMut(char) -> Result<T, ParseError>,
    {
        let mut width = None;
        let mut height = 0;
        let mut cells = Vec::new();

        for (row, line) in input.lines().map(str::trim_end).filter(|l| !l.is_empty()).enumerate() {
            let before = cells.len();
            for c in line.chars() {
                cells.push(cell(c)?);
            }
            let row_width = cells.len() - before;
            match width {
                None => width = Some(row_width),
                Some(w) if w != row_width => {
                    return Err(ParseError::InvalidFormat(format!(
                        "row {} has width {row_width}, expected {w}",
                        row + 1
                    )));
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.ok_or_else(|| ParseError::MissingData("empty grid".into()))?;
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, (x, y): Pos) -> bool {
        x < self.width && y < self.height
    }

    pub fn get(&self, pos: Pos) -> Option<&T> {
        self.contains(pos).then(|| &self.cells[pos.1 * self.width + pos.0])
    }

    pub fn row(&self, y: usize) -> &[T] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.cells.chunks(self.width)
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pos, &T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| ((i % self.width, i / self.width), cell))
    }

    /// Neighbour of `pos` in `dir`, or `None` when it would leave the grid
    pub fn step(&self, (x, y): Pos, dir: Direction) -> Option<Pos> {
        let (dx, dy) = dir.offset();
        let nx = x.checked_add_signed(dx as isize)?;
        let ny = y.checked_add_signed(dy as isize)?;
        self.contains((nx, ny)).then_some((nx, ny))
    }

    /// The up to eight in-bounds cells surrounding `pos`
    pub fn neighbors8(&self, (x, y): Pos) -> impl Iterator<Item = Pos> + use<T> {
        let (width, height) = (self.width, self.height);
        (-1isize..=1)
            .flat_map(|dy| (-1isize..=1).map(move |dx| (dx, dy)))
            .filter(|&d| d != (0, 0))
            .filter_map(move |(dx, dy)| {
                let nx = x.checked_add_signed(dx)?;
                let ny = y.checked_add_signed(dy)?;
                (nx < width && ny < height).then_some((nx, ny))
            })
    }

    /// Position of the first cell matching `pred`, scanning row by row
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<Pos> {
        self.cells
            .iter()
            .position(|cell| pred(cell))
            .map(|i| (i % self.width, i / self.width))
    }
}

impl<T> Index<Pos> for Grid<T> {
    type Output = T;

    fn index(&self, (x, y): Pos) -> &T {
        assert!(x < self.width && y < self.height, "({x}, {y}) outside grid");
        &self.cells[y * self.width + x]
    }
}

impl<T> IndexMut<Pos> for Grid<T> {
    fn index_mut(&mut self, (x, y): Pos) -> &mut T {
        assert!(x < self.width && y < self.height, "({x}, {y}) outside grid");
        &mut self.cells[y * self.width + x]
    }
}

impl Grid<char> {
    /// Grid of the raw characters
    pub fn parse_chars(input: &str) -> Result<Self, ParseError> {
        Self::parse(input, Ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_index() {
        let grid = Grid::parse_chars("ab\ncd\nef\n").unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid[(1, 2)], 'f');
        assert_eq!(grid.get((2, 0)), None);
        assert_eq!(grid.row(1), &['c', 'd']);
        assert_eq!(grid.find(|&c| c == 'd'), Some((1, 1)));
    }

    #[test]
    fn test_parse_rejects_ragged_and_empty() {
        assert!(matches!(
            Grid::parse_chars("abc\nab"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Grid::parse_chars("\n\n"),
            Err(ParseError::MissingData(_))
        ));
    }

    #[test]
    fn test_step_stays_in_bounds() {
        let grid = Grid::parse_chars("...\n...").unwrap();
        assert_eq!(grid.step((0, 0), Direction::North), None);
        assert_eq!(grid.step((0, 0), Direction::West), None);
        assert_eq!(grid.step((0, 0), Direction::East), Some((1, 0)));
        assert_eq!(grid.step((2, 1), Direction::South), None);
        assert_eq!(grid.step((2, 1), Direction::North), Some((2, 0)));
    }

    #[test]
    fn test_neighbors8_corner_and_center() {
        let grid = Grid::parse_chars("...\n...\n...").unwrap();
        assert_eq!(grid.neighbors8((0, 0)).count(), 3);
        assert_eq!(grid.neighbors8((1, 1)).count(), 8);
    }

    #[test]
    fn test_direction_turns() {
        for dir in Direction::ALL {
            assert_ne!(dir.turn_right(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
            let (dx, dy) = dir.offset();
            assert_eq!(dir.opposite().offset(), (-dx, -dy));
        }
        assert_eq!(Direction::North.turn_right(), Direction::East);
        assert_eq!(Direction::West.index(), 3);
    }
}
