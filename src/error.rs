//! Error module
use std::borrow::Cow;
use thiserror::Error;

/// A unified error enum for everything that can go wrong while decoding a
/// temporal field out of a row image.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error(
        "Truncated input: field needs {} bytes, only {} available",
        needed,
        available
    )]
    /// The buffer ends before the field does.
    Truncated {
        /// The number of bytes the field occupies.
        needed: usize,
        /// The number of bytes left in the buffer.
        available: usize,
    },
    #[error("Invalid fractional seconds precision: {} (expected 0..=6)", _0)]
    /// The declared fractional seconds precision is outside of `0..=6`.
    Precision(u8),
    #[error("Column type {} is not a fractional temporal type", _0)]
    /// The column type byte does not name `TIMESTAMP2`, `DATETIME2` or `TIME2`.
    UnknownColumnType(u8),
    #[error("Invalid integer width: {} bytes (expected 1..=8)", _0)]
    /// A big-endian integer read was asked for a width that does not fit a
    /// `u64`.
    IntegerWidth(usize),
    #[error("Conversion error: {}", _0)]
    /// A decoded value has no representation in the requested calendar type.
    Conversion(Cow<'static, str>),
}

impl From<time::error::ComponentRange> for Error {
    fn from(e: time::error::ComponentRange) -> Self {
        Self::Conversion(format!("Error converting a temporal value: {}", e).into())
    }
}
