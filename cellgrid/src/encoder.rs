/// Encoder trait for converting `T` into its serialized form `E`.
///
/// The reverse of [`crate::decoder::Decoder`]: a `Grid` encodes to the raw
/// bytes of the binary grid file.
pub trait Encoder<T, E: EncodableTo<T>> {
    type Error;

    fn encode(&self) -> Result<E, Self::Error>;
}

/// Marker trait indicating that `Self` is a valid encoding of `T`.
pub trait EncodableTo<T> {}
