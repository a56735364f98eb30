use crate::protocol::{
    Precision,
    precision::read_raw_fraction,
    reader::{ensure_len, read_uint_be},
    temporal::TimeOfDay,
};

/// Width of the packed integer part when the fraction is stored separately.
const INT_BYTES: usize = 3;

/// Bias of the three byte integer part.
const INT_OFFSET: i64 = 0x80_0000;

/// Bias of the combined six byte integer and fraction, precision 5 and 6.
const TIME_OFFSET: i64 = 0x8000_0000_0000;

/// Bytes a `TIME2` of the given precision occupies.
#[inline]
pub fn field_len(precision: Precision) -> usize {
    INT_BYTES + precision.fraction_bytes()
}

/// The stored fraction is always non-negative. For a negative integer part
/// it counts up from the next lower whole second, so shift the integer part
/// one towards zero and give the fraction the integer's sign.
#[inline]
fn borrow_fraction(int_part: i64, frac: i64, modulus: i64) -> (i64, i64) {
    if int_part < 0 && frac > 0 {
        (int_part + 1, frac - modulus)
    } else {
        (int_part, frac)
    }
}

/// Decodes a `TIME2` field.
///
/// The packed value is `hms << 24 | micros`, with `hms` holding hours
/// (10 bits), minutes (6 bits) and seconds (6 bits). Precisions up to 4 store
/// a biased three byte `hms` followed by the fraction, precision 5 and 6
/// store the whole packed value biased in six bytes.
pub fn decode(data: &[u8], precision: Precision) -> crate::Result<(TimeOfDay, usize)> {
    let n = field_len(precision);
    ensure_len(data, n)?;

    let (int_part, tmp) = match precision.fraction_bytes() {
        0 => {
            let int_part = read_uint_be(data, INT_BYTES)? as i64 - INT_OFFSET;
            (int_part, int_part << 24)
        }
        1 => {
            let int_part = read_uint_be(data, INT_BYTES)? as i64 - INT_OFFSET;
            let raw = read_raw_fraction(data, INT_BYTES, precision)? as i64;
            let (int_part, frac) = borrow_fraction(int_part, raw, 0x100);

            (int_part, (int_part << 24) + frac * 10_000)
        }
        2 => {
            let int_part = read_uint_be(data, INT_BYTES)? as i64 - INT_OFFSET;
            let raw = read_raw_fraction(data, INT_BYTES, precision)? as i64;
            let (int_part, frac) = borrow_fraction(int_part, raw, 0x1_0000);

            (int_part, (int_part << 24) + frac * 100)
        }
        _ => {
            // no separate integer part, the zero check runs on the whole value
            let tmp = read_uint_be(data, INT_BYTES + 3)? as i64 - TIME_OFFSET;
            (tmp, tmp)
        }
    };

    if int_part == 0 {
        return Ok((TimeOfDay::ZERO, n));
    }

    let negative = tmp < 0;
    let tmp = tmp.abs();

    let hms = tmp >> 24;

    let hour = (hms >> 12) % (1 << 10);
    let minute = (hms >> 6) % (1 << 6);
    let second = hms % (1 << 6);
    let micros = tmp % (1 << 24);

    let time = TimeOfDay::new(
        negative,
        hour as u32,
        minute as u32,
        second as u32,
        micros as u32,
    );

    Ok((time, n))
}
