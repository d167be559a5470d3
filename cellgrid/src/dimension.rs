use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::Error;

/// Side length `n` of a square `n × n` grid.
///
/// Always a positive power of two, and `n * n` always fits in `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dimension(usize);

impl Dimension {
    pub fn new(n: usize) -> Result<Self, Error> {
        if !n.is_power_of_two() {
            return Err(Error::InvalidDimension(n));
        }
        if n.checked_mul(n).is_none() {
            return Err(Error::DimensionTooLarge(n));
        }
        Ok(Dimension(n))
    }

    /// Recovers the dimension of a grid holding `count` cells.
    ///
    /// Accepts exactly the powers of four (`1, 4, 16, 64, ...`), which are the
    /// cell counts of square grids with a power-of-two side.
    pub fn from_cell_count(count: usize) -> Option<Self> {
        let n = count.isqrt();
        if n * n != count || !n.is_power_of_two() {
            return None;
        }
        Some(Dimension(n))
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Number of cells in the grid, `n * n`.
    pub fn cell_count(self) -> usize {
        self.0 * self.0
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Dimension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n = s
            .trim()
            .parse::<usize>()
            .map_err(|_| Error::NotANumber(s.to_string()))?;
        Dimension::new(n)
    }
}

impl TryFrom<usize> for Dimension {
    type Error = Error;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Dimension::new(n)
    }
}

/// Translation applied to a pattern before it is placed on the grid.
///
/// `x` dead columns and `y` dead rows are prepended to the pattern; the grid
/// itself always spans `[0, n) × [0, n)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub x: usize,
    pub y: usize,
}

impl Offset {
    pub fn new(x: usize, y: usize) -> Self {
        Offset { x, y }
    }
}
