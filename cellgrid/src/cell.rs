use std::fmt::{Display, Formatter};

const DEAD_CHAR: char = '.';
const ALIVE_CHAR: char = 'O';

const DEAD_BYTE: u8 = 0x00;
const ALIVE_BYTE: u8 = 0x01;

/// State of a single grid position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// `.` in plaintext, `0x00` in a binary grid
    #[default]
    Dead,
    /// `O` in plaintext, `0x01` in a binary grid
    Alive,
}

impl Cell {
    /// Returns the cell a plaintext character stands for, if any.
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            DEAD_CHAR => Some(Cell::Dead),
            ALIVE_CHAR => Some(Cell::Alive),
            _ => None,
        }
    }

    /// Returns the cell a binary grid byte stands for, if any.
    pub fn from_byte(b: u8) -> Option<Cell> {
        match b {
            DEAD_BYTE => Some(Cell::Dead),
            ALIVE_BYTE => Some(Cell::Alive),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Cell::Dead => DEAD_CHAR,
            Cell::Alive => ALIVE_CHAR,
        }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Cell::Dead => DEAD_BYTE,
            Cell::Alive => ALIVE_BYTE,
        }
    }

    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}
