use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use atrius_fhir_support::{FhirPrimitive, ModelError, PrimitiveValue};
use rust_decimal::Decimal;

/// High-precision decimal type that preserves original string representation.
///
/// FHIR requires that decimal values maintain their original precision.
/// This type stores both the parsed `Decimal` value for comparisons and
/// arithmetic and the original string, so `12.340` keeps its trailing zero.
///
/// Equality, ordering and hashing use the numeric value: `10.0 == 10.00`.
///
/// # Examples
///
/// ```rust
/// use atrius_fhir_lib::PreciseDecimal;
/// use rust_decimal::Decimal;
///
/// let precise = PreciseDecimal::from(Decimal::new(12340, 3));
/// assert_eq!(precise.original_string(), "12.340");
///
/// let a: PreciseDecimal = "10.0".parse().unwrap();
/// let b: PreciseDecimal = "10.00".parse().unwrap();
/// assert_eq!(a, b);
/// assert_eq!(b.original_string(), "10.00");
/// ```
#[derive(Debug, Clone)]
pub struct PreciseDecimal {
    value: Decimal,
    original_string: Arc<str>,
}

impl PartialEq for PreciseDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for PreciseDecimal {}

// Decimal hashes its normalized form, which keeps Hash consistent with Eq
impl Hash for PreciseDecimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialOrd for PreciseDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PreciseDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PreciseDecimal {
    /// Parses a FHIR decimal string, with or without an exponent.
    ///
    /// The FHIR lexical form forbids a leading `+`, leading zeros in the integer part
    /// and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        if !is_decimal_lexical(s) {
            return None;
        }
        let value = parse_decimal_string(s)?;
        Some(Self {
            value,
            original_string: Arc::from(s),
        })
    }

    /// Returns the parsed decimal value.
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns the original string representation.
    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    /// Number of digits after the decimal point in the original string.
    ///
    /// ```rust
    /// use atrius_fhir_lib::PreciseDecimal;
    ///
    /// assert_eq!("1.500".parse::<PreciseDecimal>().unwrap().scale(), 3);
    /// assert_eq!("42".parse::<PreciseDecimal>().unwrap().scale(), 0);
    /// ```
    pub fn scale(&self) -> usize {
        let mantissa = self
            .original_string
            .split(['e', 'E'])
            .next()
            .unwrap_or_default();
        mantissa
            .split_once('.')
            .map_or(0, |(_, fraction)| fraction.len())
    }
}

// -?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?
fn is_decimal_lexical(s: &str) -> bool {
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
        None => (s, None),
    };
    let unsigned = mantissa.strip_prefix('-').unwrap_or(mantissa);
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };
    let all_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());

    if !all_digits(integer) || (integer.len() > 1 && integer.starts_with('0')) {
        return false;
    }
    if fraction.is_some_and(|f| !all_digits(f)) {
        return false;
    }
    match exponent {
        Some(e) => all_digits(e.strip_prefix(['+', '-']).unwrap_or(e)),
        None => true,
    }
}

fn parse_decimal_string(s: &str) -> Option<Decimal> {
    let normalized = s.replace('E', "e");

    if normalized.contains('e') {
        Decimal::from_scientific(&normalized).ok()
    } else {
        normalized.parse::<Decimal>().ok()
    }
}

/// Converts a `Decimal`, deriving the string representation from its `Display` output.
impl From<Decimal> for PreciseDecimal {
    fn from(value: Decimal) -> Self {
        Self {
            original_string: Arc::from(value.to_string()),
            value,
        }
    }
}

impl From<i32> for PreciseDecimal {
    fn from(value: i32) -> Self {
        Decimal::from(value).into()
    }
}

impl FromStr for PreciseDecimal {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ModelError::invalid_primitive("decimal", s))
    }
}

impl fmt::Display for PreciseDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_string)
    }
}

impl FhirPrimitive for PreciseDecimal {
    const TYPE_NAME: &'static str = "decimal";

    fn primitive_value(&self) -> PrimitiveValue<'_> {
        PrimitiveValue::Decimal(self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashSet;

    #[test]
    fn lexical_form_is_enforced() {
        for ok in ["0", "-0.5", "12.340", "1e3", "1.5E-2", "100"] {
            assert!(PreciseDecimal::parse(ok).is_some(), "{ok}");
        }
        for bad in ["+1", "01", ".5", "1.", " 1", "1e", "abc", ""] {
            assert!(PreciseDecimal::parse(bad).is_none(), "{bad}");
        }
    }

    #[test]
    fn scientific_notation_value() {
        let d = PreciseDecimal::parse("1.5E2").unwrap();
        assert_eq!(d.value(), dec!(150));
        assert_eq!(d.to_string(), "1.5E2");
    }

    #[test]
    fn hash_follows_value_equality() {
        let set: HashSet<PreciseDecimal> = ["2.0", "2.00", "2"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn equality_ignores_trailing_zeros() {
        let a: PreciseDecimal = "12.340".parse().unwrap();
        let b = PreciseDecimal::from(dec!(12.34));
        assert_eq!(a, b);
        assert_eq!(a.original_string(), "12.340");
        assert_eq!(b.original_string(), "12.34");
    }
}
