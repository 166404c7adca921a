pub mod csv;

use clustering::{ClusteringError, Point};
use log::warn;

pub struct Row {
    // 1-based line in the source, header included
    pub line: usize,
    pub name: String,
    pub point: Point,
}

pub trait Input {
    // Return true if there are more rows to read
    fn has_next(&self) -> bool;

    // Return the next row, or the reason it can't be turned into a point
    fn next(&mut self) -> Result<Row, ClusteringError>;

    // Reset the state of the input to the beginning
    fn reset(&mut self);

    // Return the number of rows in the input, header excluded
    fn num_rows(&self) -> usize;
}

/// Country name → point, in first-seen order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CountryTable {
    entries: Vec<(String, Point)>,
}

impl CountryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads every row of `input`. Malformed rows are logged, skipped and returned
    /// alongside the table so the caller can report them.
    pub fn load(input: &mut impl Input) -> (Self, Vec<ClusteringError>) {
        let mut table = Self::new();
        let mut errors = vec![];
        while input.has_next() {
            match input.next() {
                Ok(row) => table.insert(row.name, row.point),
                Err(e) => {
                    warn!("Skipping row: {}", e);
                    errors.push(e);
                }
            }
        }
        (table, errors)
    }

    /// A repeated name overwrites the earlier point but keeps its position.
    pub fn insert(&mut self, name: String, point: Point) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = point,
            None => self.entries.push((name, point)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Point> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, p)| p)
    }

    pub fn points(&self) -> Vec<Point> {
        self.entries.iter().map(|(_, p)| *p).collect()
    }

    /// Names whose point appears in `points`, in table order. Matching is by value,
    /// so countries sharing coordinates can't be told apart.
    pub fn countries_in(&self, points: &[Point]) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, p)| points.contains(p))
            .map(|(n, _)| n.as_str())
            .collect()
    }
}
