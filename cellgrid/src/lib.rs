//! # cellgrid
//!
//! Core vocabulary shared by the cellgrid pattern toolkit.
//!
//! This crate defines the cell states, the grid dimension and placement
//! offset types, and the `Decoder` and `Encoder` traits that establish the
//! type-safe conversion pattern used by the `plaintext` and `grid` crates.
//!
//! ## Overview
//!
//! The conversion pattern flows like this:
//! ```text
//! .cells text → Pattern → Grid → Vec<u8>
//! Vec<u8> → Grid → Pattern → .cells text
//! ```
//!
//! Each step uses the `Decoder` trait to convert from one type to the next,
//! and the `Encoder` trait to convert in the reverse direction. Compiling a
//! pattern needs a target dimension and offset, so that step is an ordinary
//! constructor on `Grid` rather than a trait conversion.
//!
//! ## Example
//!
//! ```ignore
//! use cellgrid::decoder::Decoder;
//! use grid::Grid;
//! use plaintext::Pattern;
//!
//! let bytes = vec![0x00, 0x01, 0x01, 0x00];
//! let grid: Grid = bytes.decode().unwrap();
//! let pattern: Pattern = grid.decode().unwrap();
//! assert_eq!(pattern.to_string(), ".O\nO.\n");
//! ```

#![forbid(unsafe_code)]

pub mod cell;
pub mod decoder;
pub mod dimension;
pub mod encoder;
pub mod error;

pub use cell::Cell;
pub use dimension::{Dimension, Offset};
pub use error::Error;
