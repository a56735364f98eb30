//! Decoded temporal values and their canonical text form.
//!
//! [`FracTime`] holds a `TIMESTAMP2` or `DATETIME2` value together with the
//! column precision, [`TimeOfDay`] holds a signed `TIME2` duration. Both
//! render through [`Display`](std::fmt::Display) exactly the way the server
//! prints them: `YYYY-MM-DD HH:MM:SS[.f...]` with the fraction truncated to
//! the column precision, and `[-]HH:MM:SS[.ffffff]` for durations.
//!
//! Conversions into the `time` crate are always available; conversions into
//! `chrono` need the `chrono` feature flag.

#[cfg(feature = "chrono")]
#[cfg_attr(docsrs, doc(cfg(feature = "chrono")))]
pub mod chrono;
pub mod time;

use crate::protocol::Precision;
use std::fmt::{self, Display, Formatter};

const ZERO_DATE: &str = "0000-00-00 00:00:00";

/// Divides microseconds down to the leading `precision` digits, indexed by
/// precision.
const FRACTION_DIVISORS: [u32; 7] = [1_000_000, 100_000, 10_000, 1_000, 100, 10, 1];

/// Calendar fields of a datetime, as packed in the row image.
///
/// The fields are not validated: a month of 0 or a 31st of February is kept
/// as stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateTimeParts {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

/// A datetime with a fractional seconds part and the precision it is
/// displayed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FracTime {
    /// `None` is the zero date.
    parts: Option<DateTimeParts>,
    micros: u32,
    precision: Precision,
}

impl FracTime {
    /// A calendar value with `micros` microseconds.
    pub fn new(parts: DateTimeParts, micros: u32, precision: Precision) -> Self {
        Self {
            parts: Some(parts),
            micros,
            precision,
        }
    }

    /// The zero date `0000-00-00 00:00:00`. The fraction is kept, the server
    /// prints it after the zero date.
    pub fn zero(micros: u32, precision: Precision) -> Self {
        Self {
            parts: None,
            micros,
            precision,
        }
    }

    /// True for the zero date.
    pub fn is_zero(&self) -> bool {
        self.parts.is_none()
    }

    /// The calendar fields, `None` for the zero date.
    pub fn parts(&self) -> Option<DateTimeParts> {
        self.parts
    }

    /// The fractional part in microseconds, `0..=999_999` for well-formed input.
    pub fn micros(&self) -> u32 {
        self.micros
    }

    /// The column precision.
    pub fn precision(&self) -> Precision {
        self.precision
    }
}

impl Display for FracTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.parts {
            None => f.write_str(ZERO_DATE)?,
            Some(p) => write!(
                f,
                "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                p.year, p.month, p.day, p.hour, p.minute, p.second
            )?,
        }

        write_fraction(f, self.micros, self.precision)
    }
}

/// Writes `.` and the leading `precision` digits of the six digit
/// microsecond value. Nothing for precision 0.
fn write_fraction(f: &mut Formatter<'_>, micros: u32, precision: Precision) -> fmt::Result {
    let digits = precision.digits() as usize;

    if digits == 0 {
        return Ok(());
    }

    // a malformed fraction above 999_999 must not widen the output
    let micros = micros % 1_000_000;
    let truncated = micros / FRACTION_DIVISORS[digits];

    write!(f, ".{:0width$}", truncated, width = digits)
}

/// A signed `TIME2` value. Hours go beyond 23, the type stores elapsed time
/// rather than a wall clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TimeOfDay {
    negative: bool,
    hour: u32,
    minute: u32,
    second: u32,
    micros: u32,
}

impl TimeOfDay {
    /// `00:00:00`
    pub const ZERO: TimeOfDay = TimeOfDay {
        negative: false,
        hour: 0,
        minute: 0,
        second: 0,
        micros: 0,
    };

    pub fn new(negative: bool, hour: u32, minute: u32, second: u32, micros: u32) -> Self {
        Self {
            negative,
            hour,
            minute,
            second,
            micros,
        }
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    /// The fractional part in microseconds.
    pub fn micros(&self) -> u32 {
        self.micros
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }

        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;

        if self.micros != 0 {
            write!(f, ".{:06}", self.micros)?;
        }

        Ok(())
    }
}
