use super::types::{datetime2, time2, timestamp2};
use crate::{Error, protocol::Precision};
use std::convert::TryFrom;
use std::fmt;

uint_enum! {
    /// Binlog column type codes of the fractional seconds temporal types, as
    /// found in the table map event.
    #[repr(u8)]
    pub enum ColumnType {
        Timestamp2 = 17,
        Datetime2 = 18,
        Time2 = 19,
    }
}

impl ColumnType {
    /// Parses a column type byte, failing for anything that is not a
    /// fractional seconds temporal type.
    pub fn from_u8(n: u8) -> crate::Result<Self> {
        Self::try_from(n).map_err(|_| Error::UnknownColumnType(n))
    }

    /// Bytes a field of this type occupies in a row image.
    pub fn field_len(self, precision: Precision) -> usize {
        match self {
            ColumnType::Timestamp2 => timestamp2::field_len(precision),
            ColumnType::Datetime2 => datetime2::field_len(precision),
            ColumnType::Time2 => time2::field_len(precision),
        }
    }

    pub(crate) fn type_name(self) -> &'static str {
        match self {
            ColumnType::Timestamp2 => "timestamp",
            ColumnType::Datetime2 => "datetime",
            ColumnType::Time2 => "time",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
