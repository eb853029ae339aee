use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::word::Word;

/// Integer cell position. The coordinate space is unbounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Per-step offset. Up/Down move along y, Left/Right along x.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Direction after the quarter turn applied by [`Grid::rotate_quarter`].
    pub fn rotated_quarter(self) -> Direction {
        match self {
            Direction::Right => Direction::Up,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Up => Direction::Left,
        }
    }

    pub fn perpendicular(self) -> [Direction; 2] {
        if self.is_horizontal() {
            [Direction::Up, Direction::Down]
        } else {
            [Direction::Left, Direction::Right]
        }
    }
}

/// A placed character plus the direction of the word that claimed it.
/// Filler cells carry no direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub direction: Option<Direction>,
}

/// Inclusive bounding box over every occupied coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Bounds {
    fn point(c: Coord) -> Self {
        Self {
            min_x: c.x,
            max_x: c.x,
            min_y: c.y,
            max_y: c.y,
        }
    }

    fn include(&mut self, c: Coord) {
        self.min_x = self.min_x.min(c.x);
        self.max_x = self.max_x.max(c.x);
        self.min_y = self.min_y.min(c.y);
        self.max_y = self.max_y.max(c.y);
    }

    pub fn width(&self) -> usize {
        (self.max_x as i64 - self.min_x as i64 + 1) as usize
    }

    pub fn height(&self) -> usize {
        (self.max_y as i64 - self.min_y as i64 + 1) as usize
    }
}

#[inline]
fn pack(c: Coord) -> u64 {
    ((c.x as u32 as u64) << 32) | c.y as u32 as u64
}

/// Sparse occupy-once character grid.
///
/// Cells live in insertion order; a packed `(x, y)` key indexes into them.
/// Once a coordinate holds a character it never changes.
#[derive(Clone, Debug, Default)]
pub struct Grid {
    cells: Vec<(Coord, Cell)>,
    index: HashMap<u64, usize>,
    bounds: Option<Bounds>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `ch` at `(x, y)` if the cell is empty. Returns false and leaves
    /// the grid untouched when the cell is already occupied, whatever it holds.
    pub fn add_char(&mut self, x: i32, y: i32, ch: char, direction: Option<Direction>) -> bool {
        let c = Coord::new(x, y);
        let key = pack(c);
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key, self.cells.len());
        self.cells.push((c, Cell { ch, direction }));
        match &mut self.bounds {
            Some(b) => b.include(c),
            None => self.bounds = Some(Bounds::point(c)),
        }
        true
    }

    #[inline]
    pub fn get_cell(&self, x: i32, y: i32) -> Option<Cell> {
        self.index
            .get(&pack(Coord::new(x, y)))
            .map(|&i| self.cells[i].1)
    }

    #[inline]
    pub fn get_char(&self, x: i32, y: i32) -> Option<char> {
        self.get_cell(x, y).map(|cell| cell.ch)
    }

    #[inline]
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.index.contains_key(&pack(Coord::new(x, y)))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn width(&self) -> usize {
        self.bounds.map_or(0, |b| b.width())
    }

    pub fn height(&self) -> usize {
        self.bounds.map_or(0, |b| b.height())
    }

    /// Occupied coordinates in insertion order.
    pub fn coords(&self) -> impl ExactSizeIterator<Item = Coord> + '_ {
        self.cells.iter().map(|(c, _)| *c)
    }

    /// Coordinate at insertion position `i`.
    pub fn coord_at(&self, i: usize) -> Option<Coord> {
        self.cells.get(i).map(|(c, _)| *c)
    }

    pub fn cells(&self) -> impl ExactSizeIterator<Item = (Coord, Cell)> + '_ {
        self.cells.iter().copied()
    }

    /// Copy of this grid with every coordinate and direction tag mapped,
    /// keeping insertion order.
    fn remapped(&self, f: impl Fn(Coord) -> Coord, turn: impl Fn(Direction) -> Direction) -> Grid {
        let mut out = Grid::new();
        out.cells.reserve(self.cells.len());
        for (c, cell) in &self.cells {
            let n = f(*c);
            out.add_char(n.x, n.y, cell.ch, cell.direction.map(&turn));
        }
        out
    }

    /// Re-express the grid with its bounding box starting at (0, 0).
    pub fn normalize(&self) -> Grid {
        let (dx, dy) = self.origin_shift();
        self.remapped(|c| Coord::new(c.x + dx, c.y + dy), |d| d)
    }

    /// Apply the same shift as [`Grid::normalize`] to word paths. Must be
    /// called on the pre-normalization grid.
    pub fn normalize_words(&self, words: &[Word]) -> Vec<Word> {
        let (dx, dy) = self.origin_shift();
        words.iter().map(|w| w.shifted(dx, dy)).collect()
    }

    fn origin_shift(&self) -> (i32, i32) {
        self.bounds.map_or((0, 0), |b| (-b.min_x, -b.min_y))
    }

    /// Quarter turn of a normalized grid: `(x, y) -> (y, width - 1 - x)`.
    /// Direction tags turn with it.
    pub fn rotate_quarter(&self) -> Grid {
        let w = self.width() as i32;
        self.remapped(|c| Coord::new(c.y, w - 1 - c.x), Direction::rotated_quarter)
    }

    /// Dense rows over the bounding box; empty cells render as a space.
    pub fn rows(&self) -> Vec<String> {
        let Some(b) = self.bounds else {
            return Vec::new();
        };
        (b.min_y..=b.max_y)
            .map(|y| {
                (b.min_x..=b.max_x)
                    .map(|x| self.get_char(x, y).unwrap_or(' '))
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
