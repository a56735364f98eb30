//! Mappings between decoded values and chrono types (with `chrono` feature
//! flag enabled).

pub use ::chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use super::{FracTime, TimeOfDay};
use crate::Error;

impl FracTime {
    /// The value as a [`NaiveDateTime`], `None` for the zero date.
    ///
    /// Fails with [`Error::Conversion`] when the stored fields do not form a
    /// valid calendar date.
    pub fn to_naive_date_time(&self) -> crate::Result<Option<NaiveDateTime>> {
        let parts = match self.parts() {
            None => return Ok(None),
            Some(parts) => parts,
        };

        let date = i32::try_from(parts.year)
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, parts.month, parts.day))
            .ok_or_else(|| {
                Error::Conversion(
                    format!(
                        "invalid date {:04}-{:02}-{:02}",
                        parts.year, parts.month, parts.day
                    )
                    .into(),
                )
            })?;

        let time =
            NaiveTime::from_hms_micro_opt(parts.hour, parts.minute, parts.second, self.micros())
                .ok_or_else(|| {
                    Error::Conversion(
                        format!(
                            "invalid time {:02}:{:02}:{:02}",
                            parts.hour, parts.minute, parts.second
                        )
                        .into(),
                    )
                })?;

        Ok(Some(NaiveDateTime::new(date, time)))
    }
}

impl TimeOfDay {
    /// The signed elapsed time this value stands for.
    pub fn to_chrono_duration(&self) -> TimeDelta {
        let secs = self.hour() as i64 * 3600 + self.minute() as i64 * 60 + self.second() as i64;
        let d = TimeDelta::seconds(secs) + TimeDelta::microseconds(self.micros() as i64);

        if self.is_negative() { -d } else { d }
    }
}
