use crate::protocol::{
    Precision,
    precision::read_fraction,
    reader::{ensure_len, read_uint_be},
    temporal::{DateTimeParts, FracTime},
};
use tracing::{Level, event};

/// Width of the packed integer part.
const INT_BYTES: usize = 5;

/// Bias added to the packed integer part before storing.
const INT_OFFSET: i64 = 0x80_0000_0000;

/// Bytes a `DATETIME2` of the given precision occupies.
#[inline]
pub fn field_len(precision: Precision) -> usize {
    INT_BYTES + precision.fraction_bytes()
}

/// Decodes a `DATETIME2` field.
///
/// The integer part is a biased 40 bit value packing, from the high end,
/// `year * 13 + month` (17 bits), day (5 bits), hour (5 bits), minute
/// (6 bits) and second (6 bits). A zero integer part is the zero date. The
/// calendar fields are not validated.
pub fn decode(data: &[u8], precision: Precision) -> crate::Result<(FracTime, usize)> {
    let n = field_len(precision);
    ensure_len(data, n)?;

    let int_part = read_uint_be(data, INT_BYTES)? as i64 - INT_OFFSET;
    let frac = read_fraction(data, INT_BYTES, precision)?;

    if int_part == 0 {
        return Ok((FracTime::zero(frac, precision), n));
    }

    let packed = (int_part << 24) | frac as i64;

    // the format has no negative datetimes
    if packed < 0 {
        event!(
            Level::WARN,
            packed,
            "DATETIME2 below its bias, decoding the absolute value"
        );
    }

    let ymdhms = packed.unsigned_abs() >> 24;

    let ymd = ymdhms >> 17;
    let ym = ymd >> 5;
    let hms = ymdhms % (1 << 17);

    let parts = DateTimeParts {
        year: (ym / 13) as u32,
        month: (ym % 13) as u32,
        day: (ymd % (1 << 5)) as u32,
        hour: (hms >> 12) as u32,
        minute: ((hms >> 6) % (1 << 6)) as u32,
        second: (hms % (1 << 6)) as u32,
    };

    Ok((FracTime::new(parts, frac, precision), n))
}
