use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{RenderError, Result};

pub const EMPTY: char = ' ';

/// Scene used when no map is configured.
pub const DEFAULT_MAP: [&str; 16] = [
    "0000222222220000",
    "1              0",
    "1      11111   0",
    "1     0        0",
    "0     0  1110000",
    "0     3        0",
    "0   10000      0",
    "0   0   11100  0",
    "0   0   0      0",
    "0   0   1  00000",
    "0       1      0",
    "2       1      0",
    "0       0      0",
    "0 0000000      0",
    "0              0",
    "0002222222200000",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// Palette index taken from the wall digit.
    Wall(u8),
}

impl Cell {
    fn parse(ch: char, x: usize, y: usize) -> Result<Self> {
        match ch {
            EMPTY => Ok(Cell::Empty),
            '0'..='9' => Ok(Cell::Wall(ch as u8 - b'0')),
            _ => Err(RenderError::MapCell { ch, x, y }),
        }
    }
}

/// Immutable row-major tile grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Map {
    /// Builds a map from its rows concatenated into one string.
    pub fn parse(width: usize, height: usize, data: &str) -> Result<Self> {
        let chars: Vec<char> = data.chars().collect();
        if chars.len() != width * height {
            return Err(RenderError::MapSize {
                width,
                height,
                found: chars.len(),
            });
        }
        let cells = chars
            .iter()
            .enumerate()
            .map(|(i, &ch)| Cell::parse(ch, i % width.max(1), i / width.max(1)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { width, height, cells })
    }

    /// Rows must all share the width of the first one.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
        let data: String = rows.iter().map(|r| r.as_ref()).collect();
        Self::parse(width, height, &data)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `None` outside the grid.
    #[inline]
    pub fn cell(&self, x: i64, y: i64) -> Option<Cell> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.cells[x as usize + y as usize * self.width])
    }

    /// Walls in row-major order as `(x, y, palette index)`.
    pub fn walls(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, cell)| match *cell {
            Cell::Wall(d) => Some((i % self.width, i / self.width, d)),
            Cell::Empty => None,
        })
    }

    /// Highest wall digit, if the map has any wall.
    pub fn max_wall_index(&self) -> Option<u8> {
        self.walls().map(|(_, _, d)| d).max()
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::from_rows(&DEFAULT_MAP).unwrap_or_else(|_| unreachable!("default map is well formed"))
    }
}

/// Reads a map from a text file, one row per line. Short rows are padded
/// with empty cells up to the widest row; blank lines are ignored.
pub fn load_map<P: AsRef<Path>>(path: P) -> Result<Map> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut grid: Vec<String> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let row = line.trim_end_matches('\r');
        if !row.is_empty() {
            grid.push(row.to_string());
        }
    }

    let maxw = grid.iter().map(|r| r.chars().count()).max().unwrap_or(0);
    for r in &mut grid {
        let missing = maxw - r.chars().count();
        r.extend(std::iter::repeat(EMPTY).take(missing));
    }

    Map::from_rows(&grid)
}
