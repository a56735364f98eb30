//! Fixed-width big-endian integer reads over a row image slice.

use crate::Error;
use byteorder::{BigEndian, ByteOrder};

/// Fails with [`Error::Truncated`] unless `data` holds at least `needed` bytes.
#[inline]
pub(crate) fn ensure_len(data: &[u8], needed: usize) -> crate::Result<()> {
    if data.len() < needed {
        return Err(Error::Truncated {
            needed,
            available: data.len(),
        });
    }

    Ok(())
}

/// Reads the first `width` bytes of `data` as a big-endian unsigned integer.
///
/// Binlog row images store their packed temporal integers in 3, 4, 5 or 6
/// byte widths; any width from 1 to 8 is accepted, others fail with
/// [`Error::IntegerWidth`]. No sign is interpreted here, bias handling
/// belongs to the caller.
pub fn read_uint_be(data: &[u8], width: usize) -> crate::Result<u64> {
    if !(1..=8).contains(&width) {
        return Err(Error::IntegerWidth(width));
    }

    ensure_len(data, width)?;

    Ok(BigEndian::read_uint(&data[..width], width))
}

#[inline]
pub(crate) fn read_u16_be(data: &[u8]) -> crate::Result<u16> {
    ensure_len(data, 2)?;
    Ok(BigEndian::read_u16(data))
}

#[inline]
pub(crate) fn read_u32_be(data: &[u8]) -> crate::Result<u32> {
    ensure_len(data, 4)?;
    Ok(BigEndian::read_u32(data))
}
