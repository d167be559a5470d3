//! Decoder trait for type-safe conversions.
//!
//! The `Decoder` trait enables converting from a source type `T` to a
//! destination type `D` in a type-safe manner. It is used throughout
//! cellgrid to convert between raw bytes, binary grids and plaintext
//! patterns.
//!
//! # Design Pattern
//!
//! The decoder uses a two-trait pattern:
//!
//! 1. `Decoder<T, D>` - Performs the actual conversion
//! 2. `DecodableFrom<T>` - Marker trait constraining valid conversions
//!
//! # Implementation Guide
//!
//! ```no_run
//! use cellgrid::decoder::{Decoder, DecodableFrom};
//!
//! struct SourceType(Vec<u8>);
//! struct DestType(usize);
//!
//! #[derive(Debug)]
//! struct MyError;
//!
//! impl DecodableFrom<SourceType> for DestType {}
//!
//! impl Decoder<SourceType, DestType> for SourceType {
//!     type Error = MyError;
//!
//!     fn decode(&self) -> Result<DestType, Self::Error> {
//!         Ok(DestType(self.0.len()))
//!     }
//! }
//! ```

/// Decoder trait for converting from type `T` to type `D`.
///
/// This trait is implemented by the source type `T`. The destination type
/// must implement `DecodableFrom<T>`.
///
/// ```ignore
/// use cellgrid::decoder::Decoder;
/// use grid::Grid;
///
/// let bytes = vec![0x00, 0x01, 0x01, 0x00];
/// let grid: Grid = bytes.decode().unwrap();
/// ```
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    ///
    /// # Errors
    ///
    /// Returns an error if the conversion fails. The specific error
    /// conditions depend on the implementing type.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait indicating that type `D` can be decoded from type `T`.
///
/// It has no methods. Implement it for destination types that can be
/// decoded from a source type:
///
/// ```no_run
/// use cellgrid::decoder::DecodableFrom;
///
/// struct MySourceType;
/// struct MyDestType;
///
/// impl DecodableFrom<MySourceType> for MyDestType {}
/// ```
pub trait DecodableFrom<T> {}
