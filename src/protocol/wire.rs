mod column_type;
pub(crate) mod types;

pub use column_type::*;
pub use types::{TemporalValue, datetime2, decode_column, time2, timestamp2};
