use super::reader::{read_u16_be, read_uint_be};
use crate::Error;
use std::convert::TryFrom;
use std::fmt;

/// Extra bytes holding the fractional part, indexed by precision.
const FRACTION_BYTES: [usize; 7] = [0, 1, 1, 2, 2, 3, 3];

/// Multiplier taking the raw fractional integer to microseconds, indexed by
/// precision.
const MICROS_SCALE: [u32; 7] = [0, 10_000, 10_000, 100, 100, 1, 1];

/// The fractional seconds precision (`fsp`) of a temporal column, the number
/// of decimal digits after the seconds, `0..=6`.
///
/// The only way to get one is through [`TryFrom<u8>`], so every lookup keyed
/// by a `Precision` is in bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precision(u8);

impl Precision {
    /// The largest precision a column can declare.
    pub const MAX: Precision = Precision(6);

    /// Number of fractional digits.
    #[inline]
    pub fn digits(self) -> u8 {
        self.0
    }

    /// Number of bytes following the integer part that encode the fraction.
    #[inline]
    pub fn fraction_bytes(self) -> usize {
        FRACTION_BYTES[self.0 as usize]
    }

    /// Scales a raw fractional field of this precision to microseconds.
    #[inline]
    pub fn scale_to_micros(self, raw: u32) -> u32 {
        raw * MICROS_SCALE[self.0 as usize]
    }
}

impl TryFrom<u8> for Precision {
    type Error = Error;

    fn try_from(n: u8) -> crate::Result<Self> {
        if n > Self::MAX.0 {
            return Err(Error::Precision(n));
        }

        Ok(Precision(n))
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reads the raw fractional field starting at `offset`, without scaling.
pub(crate) fn read_raw_fraction(
    data: &[u8],
    offset: usize,
    precision: Precision,
) -> crate::Result<u32> {
    let rest = data.get(offset..).unwrap_or_default();

    let raw = match precision.fraction_bytes() {
        0 => 0,
        1 => *rest.first().ok_or(Error::Truncated {
            needed: offset + 1,
            available: data.len(),
        })? as u32,
        2 => read_u16_be(rest).map_err(|_| Error::Truncated {
            needed: offset + 2,
            available: data.len(),
        })? as u32,
        _ => read_uint_be(rest, 3).map_err(|_| Error::Truncated {
            needed: offset + 3,
            available: data.len(),
        })? as u32,
    };

    Ok(raw)
}

/// Reads the fractional field starting at `offset`, in microseconds.
pub(crate) fn read_fraction(
    data: &[u8],
    offset: usize,
    precision: Precision,
) -> crate::Result<u32> {
    let raw = read_raw_fraction(data, offset, precision)?;
    Ok(precision.scale_to_micros(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fsp(n: u8) -> Precision {
        Precision::try_from(n).unwrap()
    }

    #[test]
    fn precision_out_of_range() {
        assert_eq!(Err(Error::Precision(7)), Precision::try_from(7u8));
        assert_eq!(Err(Error::Precision(255)), Precision::try_from(255u8));
    }

    #[test]
    fn fraction_bytes_per_precision() {
        let widths: Vec<usize> = (0..=6u8).map(|n| fsp(n).fraction_bytes()).collect();
        assert_eq!(vec![0, 1, 1, 2, 2, 3, 3], widths);
    }

    #[test]
    fn scale_one_byte() {
        assert_eq!(500_000, fsp(1).scale_to_micros(50));
        assert_eq!(990_000, fsp(2).scale_to_micros(99));
    }

    #[test]
    fn scale_two_bytes() {
        assert_eq!(924_000, fsp(3).scale_to_micros(9240));
        assert_eq!(924_500, fsp(4).scale_to_micros(9245));
    }

    #[test]
    fn scale_three_bytes_is_identity() {
        assert_eq!(123_456, fsp(5).scale_to_micros(123_456));
        assert_eq!(123_456, fsp(6).scale_to_micros(123_456));
    }

    #[test]
    fn zero_precision_has_no_fraction() {
        assert_eq!(0, read_fraction(&[0, 0, 0, 0], 4, fsp(0)).unwrap());
    }

    #[test]
    fn read_fraction_at_offset() {
        let data = [0, 0, 0, 0, 0x24, 0x18];
        assert_eq!(924_000, read_fraction(&data, 4, fsp(3)).unwrap());

        let data = [0, 0, 0, 0, 0, 0x01, 0xe2, 0x40];
        assert_eq!(123_456, read_fraction(&data, 5, fsp(6)).unwrap());
    }

    #[test]
    fn read_fraction_truncated() {
        let data = [0, 0, 0, 0, 0x24];
        assert_eq!(
            Err(Error::Truncated {
                needed: 6,
                available: 5
            }),
            read_fraction(&data, 4, fsp(4))
        );
    }

    #[test]
    fn read_fraction_offset_past_end() {
        assert_eq!(
            Err(Error::Truncated {
                needed: 4,
                available: 2
            }),
            read_fraction(&[0, 0], 3, fsp(2))
        );
    }
}
