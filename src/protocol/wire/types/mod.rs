pub mod datetime2;
pub mod time2;
pub mod timestamp2;

use super::ColumnType;
use crate::protocol::{
    Precision,
    temporal::{FracTime, TimeOfDay},
};
use std::fmt::{self, Display, Formatter};
use tracing::{Level, event};

/// A decoded temporal column value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TemporalValue {
    /// `TIMESTAMP2`, in UTC.
    Timestamp(FracTime),
    /// `DATETIME2`.
    DateTime(FracTime),
    /// `TIME2`.
    Time(TimeOfDay),
}

impl TemporalValue {
    /// The column type this value was decoded from.
    pub fn column_type(&self) -> ColumnType {
        match self {
            TemporalValue::Timestamp(_) => ColumnType::Timestamp2,
            TemporalValue::DateTime(_) => ColumnType::Datetime2,
            TemporalValue::Time(_) => ColumnType::Time2,
        }
    }
}

impl Display for TemporalValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TemporalValue::Timestamp(t) | TemporalValue::DateTime(t) => t.fmt(f),
            TemporalValue::Time(t) => t.fmt(f),
        }
    }
}

/// Decodes one field of type `ty` from the start of `data`, returning the
/// value and the number of bytes it occupied.
pub fn decode_column(
    ty: ColumnType,
    data: &[u8],
    precision: Precision,
) -> crate::Result<(TemporalValue, usize)> {
    let (value, n) = match ty {
        ColumnType::Timestamp2 => {
            let (t, n) = timestamp2::decode(data, precision)?;
            (TemporalValue::Timestamp(t), n)
        }
        ColumnType::Datetime2 => {
            let (t, n) = datetime2::decode(data, precision)?;
            (TemporalValue::DateTime(t), n)
        }
        ColumnType::Time2 => {
            let (t, n) = time2::decode(data, precision)?;
            (TemporalValue::Time(t), n)
        }
    };

    event!(
        Level::TRACE,
        "Decoded {}({}) from {} bytes: {}",
        ty,
        precision,
        n,
        value,
    );

    Ok((value, n))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fsp(n: u8) -> Precision {
        Precision::try_from(n).unwrap()
    }

    #[test]
    fn dispatch_by_type() {
        let (v, n) = decode_column(ColumnType::Time2, &[0x7f, 0xef, 0x7d], fsp(0)).unwrap();
        assert!(matches!(v, TemporalValue::Time(_)));
        assert_eq!("-01:02:03", v.to_string());
        assert_eq!(3, n);

        let (v, n) = decode_column(ColumnType::Timestamp2, &[0, 0, 0, 0, 0], fsp(1)).unwrap();
        assert!(matches!(v, TemporalValue::Timestamp(_)));
        assert_eq!("0000-00-00 00:00:00.0", v.to_string());
        assert_eq!(5, n);
    }

    #[test]
    fn value_knows_its_type() {
        let data = [0x99, 0xb2, 0x5e, 0x31, 0x05];
        let (v, _) = decode_column(ColumnType::Datetime2, &data, fsp(0)).unwrap();
        assert_eq!(ColumnType::Datetime2, v.column_type());
    }

    #[test]
    fn consumed_matches_field_len() {
        let data = [0x80u8; 8];

        for ty in [ColumnType::Timestamp2, ColumnType::Datetime2, ColumnType::Time2] {
            for n in 0..=6u8 {
                let (_, consumed) = decode_column(ty, &data, fsp(n)).unwrap();
                assert_eq!(ty.field_len(fsp(n)), consumed, "{}({})", ty, n);
            }
        }
    }
}
