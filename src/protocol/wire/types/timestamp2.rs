use crate::protocol::{
    Precision,
    precision::read_fraction,
    reader::{ensure_len, read_u32_be},
    temporal::{FracTime, time::parts_from_unix},
};

/// Width of the seconds part.
const INT_BYTES: usize = 4;

/// Bytes a `TIMESTAMP2` of the given precision occupies.
#[inline]
pub fn field_len(precision: Precision) -> usize {
    INT_BYTES + precision.fraction_bytes()
}

/// Decodes a `TIMESTAMP2` field: big-endian unsigned seconds since the unix
/// epoch followed by the fraction. Zero seconds is the zero date.
pub fn decode(data: &[u8], precision: Precision) -> crate::Result<(FracTime, usize)> {
    let n = field_len(precision);
    ensure_len(data, n)?;

    let secs = read_u32_be(data)?;
    let micros = read_fraction(data, INT_BYTES, precision)?;

    if secs == 0 {
        return Ok((FracTime::zero(micros, precision), n));
    }

    let parts = parts_from_unix(secs)?;

    Ok((FracTime::new(parts, micros, precision), n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn fsp(n: u8) -> Precision {
        Precision::try_from(n).unwrap()
    }

    #[test]
    fn zero_timestamp() {
        let (ts, n) = decode(&[0, 0, 0, 0], fsp(0)).unwrap();
        assert!(ts.is_zero());
        assert_eq!("0000-00-00 00:00:00", ts.to_string());
        assert_eq!(4, n);
    }

    #[test]
    fn zero_timestamp_with_fraction() {
        let (ts, n) = decode(&[0, 0, 0, 0, 0x24, 0x18], fsp(3)).unwrap();
        assert_eq!("0000-00-00 00:00:00.924", ts.to_string());
        assert_eq!(6, n);
    }

    #[test]
    fn epoch_plus_one_second() {
        let (ts, _) = decode(&[0, 0, 0, 1], fsp(0)).unwrap();
        assert_eq!("1970-01-01 00:00:01", ts.to_string());
    }

    #[test]
    fn timestamp_with_micros() {
        let data = [0x65, 0x53, 0xf1, 0x00, 0x01, 0xe2, 0x40];
        let (ts, n) = decode(&data, fsp(6)).unwrap();
        assert_eq!("2023-11-14 22:13:20.123456", ts.to_string());
        assert_eq!(7, n);
    }

    #[test]
    fn one_byte_fraction() {
        let data = [0x65, 0x53, 0xf1, 0x00, 0x05];
        let (ts, n) = decode(&data, fsp(2)).unwrap();
        assert_eq!("2023-11-14 22:13:20.05", ts.to_string());
        assert_eq!(5, n);
    }

    #[test]
    fn trailing_bytes_are_not_consumed() {
        let data = [0x65, 0x53, 0xf1, 0x00, 0xaa, 0xbb];
        let (ts, n) = decode(&data, fsp(0)).unwrap();
        assert_eq!("2023-11-14 22:13:20", ts.to_string());
        assert_eq!(4, n);
    }

    #[test]
    fn truncated_fraction() {
        let data = [0x65, 0x53, 0xf1, 0x00, 0x01];
        assert_eq!(
            Err(Error::Truncated {
                needed: 7,
                available: 5
            }),
            decode(&data, fsp(5))
        );
    }
}
