use std::fmt;

use rust_decimal::Decimal;

use crate::validation_support;

/// A borrowed view of a primitive value, as reported to [`crate::Visitor::visit_value`].
///
/// Date and time values are carried in their original lexical form so that partial
/// precision (`2024`, `2024-03`) survives the trip through a visitor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrimitiveValue<'a> {
    Boolean(bool),
    Integer(i32),
    Integer64(i64),
    Decimal(Decimal),
    String(&'a str),
    /// A code from a required value set binding.
    Code(&'a str),
    Date(&'a str),
    DateTime(&'a str),
    Time(&'a str),
    Instant(&'a str),
    Base64Binary(&'a [u8]),
}

impl<'a> PrimitiveValue<'a> {
    /// Returns the textual form for string-like values.
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            PrimitiveValue::String(s)
            | PrimitiveValue::Code(s)
            | PrimitiveValue::Date(s)
            | PrimitiveValue::DateTime(s)
            | PrimitiveValue::Time(s)
            | PrimitiveValue::Instant(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for PrimitiveValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveValue::Boolean(b) => write!(f, "{}", b),
            PrimitiveValue::Integer(i) => write!(f, "{}", i),
            PrimitiveValue::Integer64(i) => write!(f, "{}", i),
            PrimitiveValue::Decimal(d) => write!(f, "{}", d),
            PrimitiveValue::Base64Binary(bytes) => write!(f, "<{} bytes>", bytes.len()),
            other => f.write_str(other.as_str().unwrap_or_default()),
        }
    }
}

/// Bridge between a Rust value type and the FHIR primitive it backs.
///
/// Implemented for the plain Rust types used inside `Element<V, E>` and for the
/// precision-aware date, time and decimal types of the model crate.
pub trait FhirPrimitive {
    /// FHIR name of the primitive type (`boolean`, `string`, `dateTime`).
    const TYPE_NAME: &'static str;

    fn primitive_value(&self) -> PrimitiveValue<'_>;

    /// Intrinsic lexical check applied to every value of this type.
    fn check_value(&self) -> Result<(), String> {
        Ok(())
    }
}

impl FhirPrimitive for bool {
    const TYPE_NAME: &'static str = "boolean";

    fn primitive_value(&self) -> PrimitiveValue<'_> {
        PrimitiveValue::Boolean(*self)
    }
}

impl FhirPrimitive for i32 {
    const TYPE_NAME: &'static str = "integer";

    fn primitive_value(&self) -> PrimitiveValue<'_> {
        PrimitiveValue::Integer(*self)
    }
}

impl FhirPrimitive for i64 {
    const TYPE_NAME: &'static str = "integer64";

    fn primitive_value(&self) -> PrimitiveValue<'_> {
        PrimitiveValue::Integer64(*self)
    }
}

impl FhirPrimitive for String {
    const TYPE_NAME: &'static str = "string";

    fn primitive_value(&self) -> PrimitiveValue<'_> {
        PrimitiveValue::String(self)
    }

    fn check_value(&self) -> Result<(), String> {
        validation_support::check_string(self)
    }
}

impl FhirPrimitive for Vec<u8> {
    const TYPE_NAME: &'static str = "base64Binary";

    fn primitive_value(&self) -> PrimitiveValue<'_> {
        PrimitiveValue::Base64Binary(self)
    }
}
