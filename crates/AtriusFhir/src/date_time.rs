use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use atrius_fhir_support::{FhirPrimitive, ModelError, PrimitiveValue};
use chrono::{DateTime as ChronoDateTime, NaiveDate, NaiveTime, Utc};

/// Precision levels for FHIR Date values.
///
/// FHIR dates support partial precision, allowing year-only, year-month,
/// or full date specifications. This enum tracks which components are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePrecision {
    /// Year only (YYYY)
    Year,
    /// Year and month (YYYY-MM)
    YearMonth,
    /// Full date (YYYY-MM-DD)
    Full,
}

/// Precision levels for FHIR Time values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimePrecision {
    /// Hour only (HH)
    Hour,
    /// Hour and minute (HH:MM)
    HourMinute,
    /// Hour, minute, and second (HH:MM:SS)
    HourMinuteSecond,
    /// Full time with sub-second precision (HH:MM:SS.sss)
    Millisecond,
}

/// Precision levels for FHIR DateTime values.
///
/// FHIR datetimes support partial precision from year-only through
/// sub-second precision with optional timezone information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DateTimePrecision {
    /// Year only (YYYY)
    Year,
    /// Year and month (YYYY-MM)
    YearMonth,
    /// Date only (YYYY-MM-DD)
    Date,
    /// Date with hour (YYYY-MM-DDTHH)
    DateHour,
    /// Date with hour and minute (YYYY-MM-DDTHH:MM)
    DateHourMinute,
    /// Date with time to seconds (YYYY-MM-DDTHH:MM:SS)
    DateHourMinuteSecond,
    /// Full datetime with sub-second precision (YYYY-MM-DDTHH:MM:SS.sss)
    Full,
}

// Exactly `len` ASCII digits.
fn fixed_digits(s: &str, len: usize) -> Option<u32> {
    if s.len() != len || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Precision-aware FHIR Date type.
///
/// This type preserves the original precision and string representation
/// of FHIR date values while providing typed access to date components.
///
/// # FHIR Date Formats
/// - `YYYY` - Year only
/// - `YYYY-MM` - Year and month
/// - `YYYY-MM-DD` - Full date
///
/// # Examples
/// ```rust
/// use atrius_fhir_lib::{PrecisionDate, DatePrecision};
///
/// let year_date = PrecisionDate::from_year(2023);
/// assert_eq!(year_date.precision(), DatePrecision::Year);
/// assert_eq!(year_date.original_string(), "2023");
///
/// let full_date: PrecisionDate = "2023-03-15".parse().unwrap();
/// assert_eq!(full_date.precision(), DatePrecision::Full);
/// assert!("2023-02-30".parse::<PrecisionDate>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrecisionDate {
    year: i32,
    month: Option<u32>,
    day: Option<u32>,
    precision: DatePrecision,
    original_string: Arc<str>,
}

impl PrecisionDate {
    /// Creates a year-only precision date.
    pub fn from_year(year: i32) -> Self {
        Self {
            year,
            month: None,
            day: None,
            precision: DatePrecision::Year,
            original_string: Arc::from(format!("{:04}", year)),
        }
    }

    /// Creates a year-month precision date.
    pub fn from_year_month(year: i32, month: u32) -> Self {
        Self {
            year,
            month: Some(month),
            day: None,
            precision: DatePrecision::YearMonth,
            original_string: Arc::from(format!("{:04}-{:02}", year, month)),
        }
    }

    /// Creates a full precision date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month: Some(month),
            day: Some(day),
            precision: DatePrecision::Full,
            original_string: Arc::from(format!("{:04}-{:02}-{:02}", year, month, day)),
        }
    }

    /// Parses a FHIR date string, preserving precision.
    pub fn parse(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.split('-').collect();
        let year = fixed_digits(parts.first()?, 4)? as i32;
        if year == 0 {
            return None;
        }
        match parts.len() {
            1 => Some(Self {
                year,
                month: None,
                day: None,
                precision: DatePrecision::Year,
                original_string: Arc::from(s),
            }),
            2 => {
                let month = fixed_digits(parts[1], 2)?;
                if !(1..=12).contains(&month) {
                    return None;
                }
                Some(Self {
                    year,
                    month: Some(month),
                    day: None,
                    precision: DatePrecision::YearMonth,
                    original_string: Arc::from(s),
                })
            }
            3 => {
                let month = fixed_digits(parts[1], 2)?;
                let day = fixed_digits(parts[2], 2)?;
                // rejects 2023-02-30 and friends
                NaiveDate::from_ymd_opt(year, month, day)?;
                Some(Self {
                    year,
                    month: Some(month),
                    day: Some(day),
                    precision: DatePrecision::Full,
                    original_string: Arc::from(s),
                })
            }
            _ => None,
        }
    }

    /// Returns the precision level of this date.
    pub fn precision(&self) -> DatePrecision {
        self.precision
    }

    /// Returns the original string representation.
    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month component if present.
    pub fn month(&self) -> Option<u32> {
        self.month
    }

    /// Returns the day component if present.
    pub fn day(&self) -> Option<u32> {
        self.day
    }

    /// Converts to a NaiveDate, using the first month / day for missing components.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.unwrap_or(1), self.day.unwrap_or(1))
    }

    /// Compares two dates considering precision.
    /// Returns None if comparison is indeterminate due to precision differences.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match self.year.cmp(&other.year) {
            Ordering::Equal => match (self.month, other.month) {
                (None, None) => Some(Ordering::Equal),
                (None, Some(_)) | (Some(_), None) => None,
                (Some(m1), Some(m2)) => match m1.cmp(&m2) {
                    Ordering::Equal => match (self.day, other.day) {
                        (None, None) => Some(Ordering::Equal),
                        (None, Some(_)) | (Some(_), None) => None,
                        (Some(d1), Some(d2)) => Some(d1.cmp(&d2)),
                    },
                    other => Some(other),
                },
            },
            other => Some(other),
        }
    }
}

/// Precision-aware FHIR Time type.
///
/// FHIR times never carry a timezone.
///
/// # FHIR Time Formats
/// - `HH:MM:SS` - Hour, minute, and second (second `60` is a leap second)
/// - `HH:MM:SS.fffffffff` - Fractional seconds, kept to milliseconds
///
/// `parse` only accepts these forms. The hour and hour:minute precisions are
/// reachable through [`PrecisionTime::from_hour`] and [`PrecisionTime::from_hm`].
///
/// # Examples
/// ```rust
/// use atrius_fhir_lib::{PrecisionTime, TimePrecision};
///
/// let full_time = PrecisionTime::from_hms_milli(14, 30, 45, 123);
/// assert_eq!(full_time.precision(), TimePrecision::Millisecond);
/// assert_eq!(full_time.original_string(), "14:30:45.123");
///
/// assert!("14:30:45Z".parse::<PrecisionTime>().is_err());
/// assert!("14:30".parse::<PrecisionTime>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrecisionTime {
    hour: u32,
    minute: Option<u32>,
    second: Option<u32>,
    millisecond: Option<u32>,
    precision: TimePrecision,
    original_string: Arc<str>,
}

impl PrecisionTime {
    /// Creates an hour-only precision time.
    pub fn from_hour(hour: u32) -> Self {
        Self {
            hour,
            minute: None,
            second: None,
            millisecond: None,
            precision: TimePrecision::Hour,
            original_string: Arc::from(format!("{:02}", hour)),
        }
    }

    /// Creates an hour-minute precision time.
    pub fn from_hm(hour: u32, minute: u32) -> Self {
        Self {
            hour,
            minute: Some(minute),
            second: None,
            millisecond: None,
            precision: TimePrecision::HourMinute,
            original_string: Arc::from(format!("{:02}:{:02}", hour, minute)),
        }
    }

    /// Creates an hour-minute-second precision time.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute: Some(minute),
            second: Some(second),
            millisecond: None,
            precision: TimePrecision::HourMinuteSecond,
            original_string: Arc::from(format!("{:02}:{:02}:{:02}", hour, minute, second)),
        }
    }

    /// Creates a full precision time with milliseconds.
    pub fn from_hms_milli(hour: u32, minute: u32, second: u32, millisecond: u32) -> Self {
        Self {
            hour,
            minute: Some(minute),
            second: Some(second),
            millisecond: Some(millisecond),
            precision: TimePrecision::Millisecond,
            original_string: Arc::from(format!(
                "{:02}:{:02}:{:02}.{:03}",
                hour, minute, second, millisecond
            )),
        }
    }

    /// Parses a FHIR time string, preserving precision.
    pub fn parse(s: &str) -> Option<Self> {
        if s.contains(['+', '-', 'Z']) {
            return None;
        }

        // hh:mm:ss[.fraction]
        let [hour, minute, seconds] = s.split(':').collect::<Vec<_>>()[..] else {
            return None;
        };
        let hour = fixed_digits(hour, 2)?;
        let minute = fixed_digits(minute, 2)?;
        let (second, millisecond, precision) = match seconds.split_once('.') {
            Some((sec, fraction)) => {
                if !(1..=9).contains(&fraction.len())
                    || !fraction.bytes().all(|b| b.is_ascii_digit())
                {
                    return None;
                }
                // Pad or truncate the fraction to milliseconds
                let ms_str: String = fraction.chars().chain("00".chars()).take(3).collect();
                let ms = ms_str.parse::<u32>().ok()?;
                (fixed_digits(sec, 2)?, Some(ms), TimePrecision::Millisecond)
            }
            None => (fixed_digits(seconds, 2)?, None, TimePrecision::HourMinuteSecond),
        };
        // second 60 is a leap second
        if hour > 23 || minute > 59 || second > 60 {
            return None;
        }
        Some(Self {
            hour,
            minute: Some(minute),
            second: Some(second),
            millisecond,
            precision,
            original_string: Arc::from(s),
        })
    }

    /// Returns the precision level of this time.
    pub fn precision(&self) -> TimePrecision {
        self.precision
    }

    /// Returns the original string representation.
    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    /// Converts to a NaiveTime, using zero for missing components.
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        let millisecond = self.millisecond.unwrap_or(0);
        // chrono represents a leap second as 59 with 1000+ milliseconds
        let (second, millisecond) = match self.second.unwrap_or(0) {
            60 => (59, millisecond + 1000),
            second => (second, millisecond),
        };
        NaiveTime::from_hms_milli_opt(self.hour, self.minute.unwrap_or(0), second, millisecond)
    }

    /// Compares two times considering precision.
    /// Seconds and milliseconds are treated as a single precision level.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match self.hour.cmp(&other.hour) {
            Ordering::Equal => match (self.minute, other.minute) {
                (None, None) => Some(Ordering::Equal),
                (None, Some(_)) | (Some(_), None) => None,
                (Some(m1), Some(m2)) => match m1.cmp(&m2) {
                    Ordering::Equal => match (self.second, other.second) {
                        (None, None) => Some(Ordering::Equal),
                        (None, Some(_)) | (Some(_), None) => None,
                        (Some(s1), Some(s2)) => {
                            let total1 = s1 * 1000 + self.millisecond.unwrap_or(0);
                            let total2 = s2 * 1000 + other.millisecond.unwrap_or(0);
                            Some(total1.cmp(&total2))
                        }
                    },
                    other => Some(other),
                },
            },
            other => Some(other),
        }
    }
}

/// Precision-aware FHIR DateTime type.
///
/// This type preserves the original precision and string representation
/// of FHIR datetime values, including timezone information when present.
///
/// # FHIR DateTime Formats
/// - `YYYY`, `YYYY-MM`, `YYYY-MM-DD` - partial dates
/// - `YYYY-MM-DDTHH:MM:SS[.sss](Z|+HH:MM|-HH:MM)` - a time always carries a timezone
///
/// # Examples
/// ```rust
/// use atrius_fhir_lib::{PrecisionDateTime, DateTimePrecision};
///
/// let date_dt = PrecisionDateTime::from_date(2023, 3, 15);
/// assert_eq!(date_dt.precision(), DateTimePrecision::Date);
///
/// let full_dt: PrecisionDateTime = "2023-03-15T14:30:45.123Z".parse().unwrap();
/// assert_eq!(full_dt.precision(), DateTimePrecision::Full);
/// assert_eq!(full_dt.timezone_offset(), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrecisionDateTime {
    date: PrecisionDate,
    time: Option<PrecisionTime>,
    /// Timezone offset in minutes from UTC
    timezone_offset: Option<i32>,
    precision: DateTimePrecision,
    original_string: Arc<str>,
}

impl PrecisionDateTime {
    /// Creates a year-only datetime.
    pub fn from_year(year: i32) -> Self {
        Self::from_precision_date(PrecisionDate::from_year(year))
    }

    /// Creates a year-month datetime.
    pub fn from_year_month(year: i32, month: u32) -> Self {
        Self::from_precision_date(PrecisionDate::from_year_month(year, month))
    }

    /// Creates a date-only datetime.
    pub fn from_date(year: i32, month: u32, day: u32) -> Self {
        Self::from_precision_date(PrecisionDate::from_ymd(year, month, day))
    }

    /// Creates a PrecisionDateTime from a PrecisionDate.
    pub fn from_precision_date(date: PrecisionDate) -> Self {
        let precision = match date.precision {
            DatePrecision::Year => DateTimePrecision::Year,
            DatePrecision::YearMonth => DateTimePrecision::YearMonth,
            DatePrecision::Full => DateTimePrecision::Date,
        };
        Self {
            original_string: date.original_string.clone(),
            date,
            time: None,
            timezone_offset: None,
            precision,
        }
    }

    /// Parses a FHIR datetime string, preserving precision and timezone.
    pub fn parse(s: &str) -> Option<Self> {
        let Some((date_part, time_and_tz)) = s.split_once('T') else {
            let date = PrecisionDate::parse(s)?;
            return Some(Self::from_precision_date(date));
        };

        let date = PrecisionDate::parse(date_part)?;
        if date.precision != DatePrecision::Full {
            return None;
        }

        // The time part itself never contains 'Z', '+' or '-'
        let tz_start = time_and_tz.find(['Z', '+', '-'])?;
        let (time_part, tz) = time_and_tz.split_at(tz_start);
        let timezone_offset = Self::parse_timezone_offset(tz)?;

        let time = PrecisionTime::parse(time_part)?;
        let precision = match time.precision {
            TimePrecision::Hour => DateTimePrecision::DateHour,
            TimePrecision::HourMinute => DateTimePrecision::DateHourMinute,
            TimePrecision::HourMinuteSecond => DateTimePrecision::DateHourMinuteSecond,
            TimePrecision::Millisecond => DateTimePrecision::Full,
        };

        Some(Self {
            date,
            time: Some(time),
            timezone_offset: Some(timezone_offset),
            precision,
            original_string: Arc::from(s),
        })
    }

    /// Parses `Z`, `+HH:MM` or `-HH:MM` into minutes east of UTC.
    fn parse_timezone_offset(s: &str) -> Option<i32> {
        if s == "Z" {
            return Some(0);
        }
        let (sign, rest) = match s.split_at_checked(1)? {
            ("+", rest) => (1, rest),
            ("-", rest) => (-1, rest),
            _ => return None,
        };
        let (hours, minutes) = rest.split_once(':')?;
        let hours = fixed_digits(hours, 2)? as i32;
        let minutes = fixed_digits(minutes, 2)? as i32;
        if hours > 14 || minutes > 59 {
            return None;
        }
        Some(sign * (hours * 60 + minutes))
    }

    /// Returns the precision level of this datetime.
    pub fn precision(&self) -> DateTimePrecision {
        self.precision
    }

    /// Returns the original string representation.
    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    pub fn date(&self) -> &PrecisionDate {
        &self.date
    }

    pub fn time(&self) -> Option<&PrecisionTime> {
        self.time.as_ref()
    }

    pub fn timezone_offset(&self) -> Option<i32> {
        self.timezone_offset
    }

    /// Converts to a chrono DateTime<Utc>, using defaults for missing components.
    /// Values without a timezone are taken as UTC.
    pub fn to_chrono_datetime(&self) -> Option<ChronoDateTime<Utc>> {
        let naive_date = self.date.to_naive_date()?;
        let naive_time = match &self.time {
            Some(t) => t.to_naive_time()?,
            None => NaiveTime::from_hms_opt(0, 0, 0)?,
        };
        let naive_dt = naive_date.and_time(naive_time);
        let offset = chrono::Duration::minutes(i64::from(self.timezone_offset.unwrap_or(0)));
        Some(ChronoDateTime::<Utc>::from_naive_utc_and_offset(
            naive_dt - offset,
            Utc,
        ))
    }

    /// Compares two datetimes considering precision and timezones.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        if self.time.is_none() != other.time.is_none() {
            return None;
        }

        if self.timezone_offset.is_some() && other.timezone_offset.is_some() {
            // Seconds and milliseconds are one precision level
            let normalize = |p| match p {
                DateTimePrecision::Full => DateTimePrecision::DateHourMinuteSecond,
                p => p,
            };
            if normalize(self.precision) != normalize(other.precision) {
                return None;
            }
            return Some(self.to_chrono_datetime()?.cmp(&other.to_chrono_datetime()?));
        }

        match self.date.compare(&other.date) {
            Some(Ordering::Equal) => match (&self.time, &other.time) {
                (None, None) => Some(Ordering::Equal),
                (Some(t1), Some(t2)) => t1.compare(t2),
                _ => None,
            },
            other => other,
        }
    }
}

/// A FHIR instant: a datetime with at least second precision and a timezone.
///
/// ```rust
/// use atrius_fhir_lib::PrecisionInstant;
///
/// assert!("2024-05-01T10:15:00Z".parse::<PrecisionInstant>().is_ok());
/// assert!("2024-05-01T10:15Z".parse::<PrecisionInstant>().is_err());
/// assert!("2024-05-01".parse::<PrecisionInstant>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrecisionInstant {
    inner: PrecisionDateTime,
}

impl PrecisionInstant {
    /// Parses a FHIR instant string.
    pub fn parse(s: &str) -> Option<Self> {
        let dt = PrecisionDateTime::parse(s)?;
        if dt.precision < DateTimePrecision::DateHourMinuteSecond || dt.timezone_offset.is_none() {
            return None;
        }
        Some(PrecisionInstant { inner: dt })
    }

    /// Returns the original string representation
    pub fn original_string(&self) -> &str {
        self.inner.original_string()
    }

    pub fn as_datetime(&self) -> &PrecisionDateTime {
        &self.inner
    }

    pub fn to_chrono_datetime(&self) -> Option<ChronoDateTime<Utc>> {
        self.inner.to_chrono_datetime()
    }
}

impl From<ChronoDateTime<Utc>> for PrecisionInstant {
    fn from(value: ChronoDateTime<Utc>) -> Self {
        let text = value.to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let date = PrecisionDate::from_ymd(
            chrono::Datelike::year(&value),
            chrono::Datelike::month(&value),
            chrono::Datelike::day(&value),
        );
        let time = PrecisionTime::from_hms_milli(
            chrono::Timelike::hour(&value),
            chrono::Timelike::minute(&value),
            chrono::Timelike::second(&value),
            value.timestamp_subsec_millis(),
        );
        Self {
            inner: PrecisionDateTime {
                date,
                time: Some(time),
                timezone_offset: Some(0),
                precision: DateTimePrecision::Full,
                original_string: Arc::from(text),
            },
        }
    }
}

macro_rules! precision_primitive {
    ($ty:ty, $type_name:literal, $variant:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.original_string())
            }
        }

        impl FromStr for $ty {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty>::parse(s).ok_or_else(|| ModelError::invalid_primitive($type_name, s))
            }
        }

        impl FhirPrimitive for $ty {
            const TYPE_NAME: &'static str = $type_name;

            fn primitive_value(&self) -> PrimitiveValue<'_> {
                PrimitiveValue::$variant(self.original_string())
            }
        }
    };
}

precision_primitive!(PrecisionDate, "date", Date);
precision_primitive!(PrecisionDateTime, "dateTime", DateTime);
precision_primitive!(PrecisionTime, "time", Time);
precision_primitive!(PrecisionInstant, "instant", Instant);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_requires_fixed_width_components() {
        assert!(PrecisionDate::parse("2024-1-05").is_none());
        assert!(PrecisionDate::parse("24").is_none());
        assert_eq!(
            PrecisionDate::parse("2024-02").map(|d| d.precision()),
            Some(DatePrecision::YearMonth)
        );
    }

    #[test]
    fn datetime_with_time_needs_timezone() {
        assert!(PrecisionDateTime::parse("2024-05-01T10:15:00").is_none());
        let dt = PrecisionDateTime::parse("2024-05-01T10:15:00+05:30").unwrap();
        assert_eq!(dt.timezone_offset(), Some(330));
        assert_eq!(dt.precision(), DateTimePrecision::DateHourMinuteSecond);
    }

    #[test]
    fn negative_offsets() {
        let dt = PrecisionDateTime::parse("2024-05-01T10:15:00-04:00").unwrap();
        assert_eq!(dt.timezone_offset(), Some(-240));
    }

    #[test]
    fn comparison_across_timezones() {
        let a = PrecisionDateTime::parse("2024-05-01T10:00:00Z").unwrap();
        let b = PrecisionDateTime::parse("2024-05-01T12:00:00+02:00").unwrap();
        assert_eq!(a.compare(&b), Some(Ordering::Equal));
    }

    #[test]
    fn mixed_precision_is_indeterminate() {
        let a = PrecisionDateTime::parse("2024-05").unwrap();
        let b = PrecisionDateTime::parse("2024-05-01").unwrap();
        assert_eq!(a.compare(&b), None);
        let c = PrecisionDateTime::parse("2023-12-31").unwrap();
        assert_eq!(c.compare(&b), Some(Ordering::Less));
    }

    #[test]
    fn fractional_seconds_are_kept_to_millis() {
        let t = PrecisionTime::parse("08:30:15.5").unwrap();
        assert_eq!(t.precision(), TimePrecision::Millisecond);
        assert_eq!(t.to_naive_time(), NaiveTime::from_hms_milli_opt(8, 30, 15, 500));
        assert_eq!(t.original_string(), "08:30:15.5");
    }

    #[test]
    fn instant_from_chrono() {
        let now = ChronoDateTime::parse_from_rfc3339("2024-05-01T10:15:30.250Z")
            .unwrap()
            .with_timezone(&Utc);
        let instant = PrecisionInstant::from(now);
        assert_eq!(instant.original_string(), "2024-05-01T10:15:30.250Z");
        assert_eq!(instant.to_chrono_datetime(), Some(now));
    }

    #[test]
    fn year_zero_is_rejected() {
        assert!(PrecisionDate::parse("0000").is_none());
        assert!(PrecisionDate::parse("0000-01-01").is_none());
        assert!("0000".parse::<PrecisionDateTime>().is_err());
        assert!(PrecisionDate::parse("0001").is_some());
    }

    #[test]
    fn time_requires_seconds() {
        for short in ["08", "08:30", "08:30:", "8:30:00", "08:30:00."] {
            assert!(PrecisionTime::parse(short).is_none(), "{short}");
        }
        for short in ["2024-05-01T10Z", "2024-05-01T10:30Z", "2024-05-01T10:30+01:00"] {
            assert!(PrecisionDateTime::parse(short).is_none(), "{short}");
        }
        assert!(PrecisionTime::parse("08:30:00.123456789").is_some());
        assert!(PrecisionTime::parse("08:30:00.1234567890").is_none());
    }

    #[test]
    fn leap_second_is_accepted() {
        let t = PrecisionTime::parse("23:59:60").unwrap();
        assert_eq!(t.precision(), TimePrecision::HourMinuteSecond);
        assert_eq!(
            t.compare(&PrecisionTime::parse("23:59:59").unwrap()),
            Some(Ordering::Greater)
        );
        assert!(t.to_naive_time().is_some());

        let dt = PrecisionDateTime::parse("2016-12-31T23:59:60Z").unwrap();
        assert_eq!(dt.precision(), DateTimePrecision::DateHourMinuteSecond);
        assert!(dt.to_chrono_datetime().is_some());
        assert!(PrecisionTime::parse("23:59:61").is_none());
    }
}
