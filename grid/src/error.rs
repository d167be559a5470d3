use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Byte count of a grid file is not a power of four
    #[error("grid size is not a power of 4 (size = {0})")]
    InvalidGridSize(usize),

    /// A grid byte is neither 0x00 nor 0x01
    #[error("invalid cell byte 0x{byte:02x} at row {row}, column {column}")]
    InvalidCellByte { byte: u8, row: usize, column: usize },

    #[error("pattern: {0}")]
    Pattern(#[from] plaintext::error::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
