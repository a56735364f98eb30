//! Cursor-style decoding of temporal fields out of a row image buffer.
//!
//! This module provides `RowImageReader`, an extension trait over any
//! [`bytes::Buf`]. Each read decodes one field at the cursor and advances past
//! it, so consecutive columns of a row image can be read in order.

use crate::protocol::{
    Precision,
    wire::{ColumnType, TemporalValue, decode_column},
};
use crate::Error;
use bytes::Buf;

/// Typed temporal reads over a byte buffer.
///
/// A failed read leaves the cursor where it was.
pub trait RowImageReader: Buf {
    /// Decodes the field of type `ty` at the cursor and advances past it.
    fn read_temporal(&mut self, ty: ColumnType, precision: u8) -> crate::Result<TemporalValue> {
        let precision = Precision::try_from(precision)?;
        let len = ty.field_len(precision);

        if self.remaining() < len {
            return Err(Error::Truncated {
                needed: len,
                available: self.remaining(),
            });
        }

        let value = if self.chunk().len() >= len {
            let (value, n) = decode_column(ty, &self.chunk()[..len], precision)?;
            self.advance(n);
            value
        } else {
            // the field straddles two chunks
            let field = self.copy_to_bytes(len);
            decode_column(ty, &field, precision)?.0
        };

        Ok(value)
    }

    /// Reads a `TIMESTAMP2` field as its canonical string.
    fn read_timestamp2(&mut self, precision: u8) -> crate::Result<String> {
        Ok(self.read_temporal(ColumnType::Timestamp2, precision)?.to_string())
    }

    /// Reads a `DATETIME2` field as its canonical string.
    fn read_datetime2(&mut self, precision: u8) -> crate::Result<String> {
        Ok(self.read_temporal(ColumnType::Datetime2, precision)?.to_string())
    }

    /// Reads a `TIME2` field as its canonical string.
    fn read_time2(&mut self, precision: u8) -> crate::Result<String> {
        Ok(self.read_temporal(ColumnType::Time2, precision)?.to_string())
    }
}

impl<B: Buf + ?Sized> RowImageReader for B {}
