pub mod error;

use std::fmt::{Display, Formatter};

use cellgrid::Cell;
use error::Error;

const COMMENT_PREFIX: char = '!';

/*
ref: https://conwaylife.com/wiki/Plaintext
*/

/// A content row of a plaintext pattern.
///
/// Characters are kept as written; they are only checked when a cell is read,
/// so anything a grid never reaches is never validated.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Row {
    line: usize, // 1-based line in the source text
    chars: Vec<char>,
}

/// A plaintext (`.cells`) pattern.
///
/// Comment lines (starting with `!`) and blank lines are dropped on parse.
/// Rows may have unequal lengths; cells beyond the end of a row, and rows
/// beyond the last one, are dead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pattern {
    rows: Vec<Row>,
}

impl Pattern {
    pub fn parse(s: &str) -> Self {
        let rows = split_lines(s)
            .into_iter()
            .enumerate()
            .filter(|(_, line)| !is_ignored(line))
            .map(|(i, line)| Row {
                line: i + 1,
                chars: line.chars().collect(),
            })
            .collect::<Vec<_>>();
        let pattern = Pattern { rows };
        tracing::debug!(
            height = pattern.height(),
            width = pattern.width(),
            "parsed plaintext pattern"
        );
        pattern
    }

    /// Builds a pattern from rows of cells, one content row per item.
    pub fn from_cells<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = Cell>,
    {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| Row {
                line: i + 1,
                chars: row.into_iter().map(Cell::as_char).collect(),
            })
            .collect();
        Pattern { rows }
    }

    /// Number of content rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest content row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.chars.len()).max().unwrap_or(0)
    }

    /// Content rows as written, without comments or blank lines.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.rows.iter().map(|r| r.chars.iter().collect())
    }

    /// Returns the cell at `(row, column)` of the pattern.
    ///
    /// Positions outside the pattern are dead. A position holding anything
    /// but `.` or `O` is an error.
    pub fn cell(&self, row: usize, column: usize) -> Result<Cell, Error> {
        let Some(r) = self.rows.get(row) else {
            return Ok(Cell::Dead);
        };
        match r.chars.get(column) {
            Some(&c) => Cell::from_char(c).ok_or(Error::InvalidCharacter {
                character: c,
                line: r.line,
                column: column + 1,
            }),
            None => Ok(Cell::Dead),
        }
    }

    /// Checks every character of every content row.
    pub fn validate(&self) -> Result<(), Error> {
        for (row, r) in self.rows.iter().enumerate() {
            for column in 0..r.chars.len() {
                self.cell(row, column)?;
            }
        }
        Ok(())
    }
}

impl From<&str> for Pattern {
    fn from(s: &str) -> Self {
        Pattern::parse(s)
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.rows.iter() {
            for c in row.chars.iter() {
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits on every line break, a bare `\r` included; `\r\n` counts once.
fn split_lines(s: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = s.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&s[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                start = j + 1;
            }
        }
    }
    if start < s.len() {
        lines.push(&s[start..]);
    }
    lines
}

fn is_ignored(line: &str) -> bool {
    line.starts_with(COMMENT_PREFIX) || line.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use cellgrid::Cell;

    use crate::Error;
    use crate::Pattern;

    const GLIDER: &str = r"!Name: Glider
!
.O
..O
OOO
";
    const GLIDER_CRLF: &str = "!Name: Glider\r\n.O\r\n..O\r\nOOO\r\n";
    const SPACED: &str = r"
.O

!between rows
O.

";
    const BLINKER_NO_TRAILING_NEWLINE: &str = "OOO";

    #[rstest(
        input,
        expected_rows,
        case(GLIDER, vec![".O", "..O", "OOO"]),
        case(GLIDER_CRLF, vec![".O", "..O", "OOO"]),
        case(SPACED, vec![".O", "O."]),
        case(BLINKER_NO_TRAILING_NEWLINE, vec!["OOO"]),
        case("!c\r.O\rO.\r", vec![".O", "O."]),
        case(".O\x0cO.\u{2028}OO\u{85}..", vec![".O", "O.", "OO", ".."]),
        case("\r\r\n.O\r\n\rO.", vec![".O", "O."]),
        case("", vec![]),
        case("!only a comment\n\n   \n", vec![])
    )]
    fn test_pattern_parse(input: &str, expected_rows: Vec<&str>) {
        let pattern = Pattern::parse(input);
        let rows = pattern.rows().collect::<Vec<_>>();
        assert_eq!(expected_rows, rows);
    }

    #[rstest(
        input,
        expected_height,
        expected_width,
        case(GLIDER, 3, 3),
        case(SPACED, 2, 2),
        case("", 0, 0)
    )]
    fn test_pattern_extent(input: &str, expected_height: usize, expected_width: usize) {
        let pattern = Pattern::parse(input);
        assert_eq!(expected_height, pattern.height());
        assert_eq!(expected_width, pattern.width());
    }

    #[rstest(
        row,
        column,
        expected,
        case(0, 0, Cell::Dead),
        case(0, 1, Cell::Alive),
        case(0, 2, Cell::Dead),
        case(2, 2, Cell::Alive),
        case(3, 0, Cell::Dead),
        case(100, 100, Cell::Dead)
    )]
    fn test_pattern_cell(row: usize, column: usize, expected: Cell) {
        let pattern = Pattern::parse(GLIDER);
        assert_eq!(expected, pattern.cell(row, column).unwrap());
    }

    #[rstest(
        input,
        row,
        column,
        expected,
        case("O*", 0, 1, Error::InvalidCharacter { character: '*', line: 1, column: 2 }),
        case("!c\n\n.O\no.", 1, 0, Error::InvalidCharacter { character: 'o', line: 4, column: 1 }),
        case(" O", 0, 0, Error::InvalidCharacter { character: ' ', line: 1, column: 1 })
    )]
    fn test_pattern_cell_with_error(input: &str, row: usize, column: usize, expected: Error) {
        let pattern = Pattern::parse(input);
        assert_eq!(expected, pattern.cell(row, column).unwrap_err());
    }

    #[test]
    fn test_bare_cr_line_numbers() {
        let pattern = Pattern::parse("!c\r.O\r\nO*\r");
        assert_eq!(
            Err(Error::InvalidCharacter {
                character: '*',
                line: 3,
                column: 2
            }),
            pattern.validate()
        );
    }

    #[test]
    fn test_invalid_character_only_seen_when_read() {
        let pattern = Pattern::parse(".O#");
        assert_eq!(Cell::Alive, pattern.cell(0, 1).unwrap());
        assert_eq!(
            Err(Error::InvalidCharacter {
                character: '#',
                line: 1,
                column: 3
            }),
            pattern.validate()
        );
    }

    #[test]
    fn test_from_cells_display() {
        let pattern = Pattern::from_cells(vec![
            vec![Cell::Dead, Cell::Alive],
            vec![Cell::Alive, Cell::Dead],
        ]);
        assert!(pattern.validate().is_ok());
        assert_eq!(".O\nO.\n", pattern.to_string());
        assert_eq!(pattern, Pattern::parse(&pattern.to_string()));
    }

    #[test]
    fn test_display_drops_comments() {
        let pattern = Pattern::from(GLIDER);
        assert_eq!(".O\n..O\nOOO\n", pattern.to_string());
    }
}
