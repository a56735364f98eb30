//! Decoding of the fractional-seconds temporal column encodings found in
//! MySQL binlog row images: `TIMESTAMP2`, `DATETIME2` and `TIME2`.
//!
//! Every decoder takes a slice positioned at the start of a field and the
//! column's fractional seconds precision, and returns the value in the
//! server's canonical text form together with the number of bytes the field
//! occupied, so the caller can advance its cursor.
//!
//! ```
//! let data = [0x99, 0xb2, 0x5e, 0x31, 0x05, 0x01, 0xe2, 0x40];
//! let (value, consumed) = calico::decode_datetime(&data, 6)?;
//!
//! assert_eq!("2024-01-15 03:04:05.123456", value);
//! assert_eq!(8, consumed);
//! # Ok::<(), calico::error::Error>(())
//! ```
//!
//! Typed values are available through [`decode_column`] and the per-type
//! modules, and [`RowImageReader`] reads consecutive fields from any
//! [`bytes::Buf`].
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
mod macros;

pub mod error;
mod protocol;
mod sync_reader;

pub use error::Error;
pub use protocol::{
    Precision, reader, temporal,
    wire::{ColumnType, TemporalValue, datetime2, decode_column, time2, timestamp2},
};
pub use sync_reader::RowImageReader;

/// An alias for a result that holds this module's error type as the error.
pub type Result<T> = std::result::Result<T, Error>;

/// Decodes a `TIMESTAMP2` field into `YYYY-MM-DD HH:MM:SS[.f...]` (UTC) and
/// the number of bytes consumed, `4` plus up to `3` fraction bytes.
pub fn decode_timestamp(data: &[u8], precision: u8) -> Result<(String, usize)> {
    decode_to_string(ColumnType::Timestamp2, data, precision)
}

/// Decodes a `DATETIME2` field into `YYYY-MM-DD HH:MM:SS[.f...]` and the
/// number of bytes consumed, `5` plus up to `3` fraction bytes.
pub fn decode_datetime(data: &[u8], precision: u8) -> Result<(String, usize)> {
    decode_to_string(ColumnType::Datetime2, data, precision)
}

/// Decodes a `TIME2` field into `[-]HH:MM:SS[.ffffff]` and the number of
/// bytes consumed, `3` plus up to `3` fraction bytes.
pub fn decode_time_of_day(data: &[u8], precision: u8) -> Result<(String, usize)> {
    decode_to_string(ColumnType::Time2, data, precision)
}

fn decode_to_string(ty: ColumnType, data: &[u8], precision: u8) -> Result<(String, usize)> {
    let (value, n) = decode_column(ty, data, Precision::try_from(precision)?)?;
    Ok((value.to_string(), n))
}
