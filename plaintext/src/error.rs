use thiserror::Error;

/// Errors that can occur when reading a plaintext pattern.
///
/// Content rows may only contain `.` (dead) and `O` (alive). Positions are
/// 1-based and refer to the source text, comment and blank lines included.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A content row holds a character other than `.` or `O`
    #[error("invalid pattern character {character:?} at line {line}, column {column}")]
    InvalidCharacter {
        character: char,
        line: usize,
        column: usize,
    },
}
