//! Mappings between decoded values and the time crate types.
//!
//! The time library offers better ergonomy and is recommended when the
//! decoded values need arithmetic rather than display.

pub use time::{Date, Duration, Month, PrimitiveDateTime, Time};

use super::{DateTimeParts, FracTime, TimeOfDay};
use crate::Error;
use std::convert::TryFrom;

#[inline]
fn to_date(parts: &DateTimeParts) -> crate::Result<Date> {
    let year = i32::try_from(parts.year)
        .map_err(|_| Error::Conversion(format!("year {} out of range", parts.year).into()))?;
    let month = u8::try_from(parts.month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or_else(|| Error::Conversion(format!("month {} out of range", parts.month).into()))?;
    let day = u8::try_from(parts.day)
        .map_err(|_| Error::Conversion(format!("day {} out of range", parts.day).into()))?;

    Ok(Date::from_calendar_date(year, month, day)?)
}

#[inline]
fn to_time(parts: &DateTimeParts, micros: u32) -> crate::Result<Time> {
    let field = |v: u32, name: &str| {
        u8::try_from(v)
            .map_err(|_| Error::Conversion(format!("{} {} out of range", name, v).into()))
    };

    Ok(Time::from_hms_micro(
        field(parts.hour, "hour")?,
        field(parts.minute, "minute")?,
        field(parts.second, "second")?,
        micros,
    )?)
}

/// Splits a UTC unix timestamp into calendar fields.
pub(crate) fn parts_from_unix(secs: u32) -> crate::Result<DateTimeParts> {
    let dt = time::OffsetDateTime::from_unix_timestamp(secs as i64)?;

    Ok(DateTimeParts {
        year: dt.year() as u32,
        month: dt.month() as u32,
        day: dt.day() as u32,
        hour: dt.hour() as u32,
        minute: dt.minute() as u32,
        second: dt.second() as u32,
    })
}

impl FracTime {
    /// The value as a [`PrimitiveDateTime`], `None` for the zero date.
    ///
    /// Fails with [`Error::Conversion`] when the stored fields do not form a
    /// valid calendar date, e.g. a zero month or day.
    pub fn to_primitive_date_time(&self) -> crate::Result<Option<PrimitiveDateTime>> {
        match self.parts() {
            None => Ok(None),
            Some(parts) => {
                let date = to_date(&parts)?;
                let time = to_time(&parts, self.micros())?;

                Ok(Some(PrimitiveDateTime::new(date, time)))
            }
        }
    }
}

impl TimeOfDay {
    /// The signed elapsed time this value stands for.
    pub fn to_duration(&self) -> Duration {
        let secs = self.hour() as i64 * 3600 + self.minute() as i64 * 60 + self.second() as i64;
        let d = Duration::seconds(secs) + Duration::microseconds(self.micros() as i64);

        if self.is_negative() { -d } else { d }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Precision;

    fn fsp(n: u8) -> Precision {
        Precision::try_from(n).unwrap()
    }

    #[test]
    fn unix_epoch_parts() {
        let p = parts_from_unix(0).unwrap();
        assert_eq!(
            (1970, 1, 1, 0, 0, 0),
            (p.year, p.month, p.day, p.hour, p.minute, p.second)
        );
    }

    #[test]
    fn unix_parts_max() {
        let p = parts_from_unix(u32::MAX).unwrap();
        assert_eq!(
            (2106, 2, 7, 6, 28, 15),
            (p.year, p.month, p.day, p.hour, p.minute, p.second)
        );
    }

    #[test]
    fn zero_date_has_no_primitive() {
        assert_eq!(None, FracTime::zero(0, fsp(0)).to_primitive_date_time().unwrap());
    }

    #[test]
    fn valid_parts_convert() {
        let parts = DateTimeParts {
            year: 2024,
            month: 1,
            day: 15,
            hour: 3,
            minute: 4,
            second: 5,
        };
        let dt = FracTime::new(parts, 123_456, fsp(6))
            .to_primitive_date_time()
            .unwrap()
            .unwrap();

        assert_eq!(2024, dt.year());
        assert_eq!(Month::January, dt.month());
        assert_eq!(15, dt.day());
        assert_eq!(123_456, dt.microsecond());
    }

    #[test]
    fn zero_month_fails_conversion() {
        let parts = DateTimeParts {
            year: 2024,
            month: 0,
            day: 1,
            ..Default::default()
        };
        let res = FracTime::new(parts, 0, fsp(0)).to_primitive_date_time();
        assert!(matches!(res, Err(Error::Conversion(_))));
    }

    #[test]
    fn negative_duration() {
        let t = TimeOfDay::new(true, 1, 2, 3, 500_000);
        assert_eq!(-Duration::milliseconds(3_723_500), t.to_duration());
    }
}
