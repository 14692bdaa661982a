//! R5 primitive data types.
//!
//! Each primitive is an [`Element`] over the Rust type that holds its value. Rules
//! the value type cannot express (the `code` pattern, `positiveInt >= 1`) are applied
//! by the validation generated for the elements that use the alias.

use crate::date_time::{PrecisionDate, PrecisionDateTime, PrecisionInstant, PrecisionTime};
use crate::element::Element;
use crate::precise_decimal::PreciseDecimal;
use crate::r5::complex_types::Extension;

/// A stream of bytes, base64 encoded on the wire.
pub type Base64Binary = Element<Vec<u8>, Extension>;

/// Value of "true" or "false".
pub type Boolean = Element<bool, Extension>;

/// A URI that refers to a resource by its canonical URL, optionally with `|version`.
pub type Canonical = Element<std::string::String, Extension>;

/// A string restricted to `[^\s]+( [^\s]+)*`.
///
/// Elements with a required binding use `Code<TheValueSetEnum>`; the default parameter
/// is the plain string form used by codes with weaker bindings.
pub type Code<V = std::string::String> = Element<V, Extension>;

/// A date or partial date (`2024`, `2024-03`, `2024-03-15`) without a time zone.
pub type Date = Element<PrecisionDate, Extension>;

/// A date, date-time or partial date. Times require a time zone.
pub type DateTime = Element<PrecisionDateTime, Extension>;

/// A rational number with implicit precision.
pub type Decimal = Element<PreciseDecimal, Extension>;

/// Any combination of letters, numerals, "-" and ".", with a length limit of 64.
pub type Id = Element<std::string::String, Extension>;

/// An instant in time, known at least to the second and always with a time zone.
pub type Instant = Element<PrecisionInstant, Extension>;

/// A signed 32-bit integer.
pub type Integer = Element<i32, Extension>;

/// A signed 64-bit integer.
pub type Integer64 = Element<i64, Extension>;

/// A string that may contain GitHub Flavored Markdown syntax.
pub type Markdown = Element<std::string::String, Extension>;

/// An OID represented as a URI (`urn:oid:1.2.3.4.5`).
pub type Oid = Element<std::string::String, Extension>;

/// An integer with a value that is positive (e.g. >0).
pub type PositiveInt = Element<i32, Extension>;

/// A sequence of Unicode characters.
pub type String = Element<std::string::String, Extension>;

/// A time during the day, with no date and no time zone.
pub type Time = Element<PrecisionTime, Extension>;

/// An integer with a value that is not negative (e.g. >= 0).
pub type UnsignedInt = Element<i32, Extension>;

/// String of characters used to identify a name or a resource.
pub type Uri = Element<std::string::String, Extension>;

/// A URI that is a literal reference.
pub type Url = Element<std::string::String, Extension>;

/// A UUID, represented as a URI (`urn:uuid:...`).
pub type Uuid = Element<std::string::String, Extension>;

/// XHTML content restricted to a single namespaced `div`.
pub type Xhtml = Element<std::string::String, Extension>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_from_str_slice() {
        let s = String::from("hello");
        assert_eq!(s.value.as_deref(), Some("hello"));
        assert!(s.extension.is_empty());
    }

    #[test]
    fn parse_date_time_alias() {
        let dt: DateTime = "2024-03-15T10:30:00Z".parse().unwrap();
        assert_eq!(
            dt.value.map(|v| v.original_string().to_string()),
            Some("2024-03-15T10:30:00Z".to_string())
        );
        assert!("2024-03-15T10:30:00".parse::<DateTime>().is_err());
    }

    #[test]
    fn parse_decimal_alias_keeps_scale() {
        let d: Decimal = "1.50".parse().unwrap();
        assert_eq!(d.value.unwrap().original_string(), "1.50");
    }
}
