use std::any::Any;
use std::str::FromStr;

use atrius_fhir_support::validate::{Validate, ValidationContext};
use atrius_fhir_support::visitor::{accept_list, Visitable, Visitor};
use atrius_fhir_support::FhirPrimitive;

/// Generic element container supporting FHIR's extension mechanism.
///
/// In FHIR, primitive elements can carry an `id` and `extension`s alongside (or
/// instead of) their value. Every R5 primitive type is an alias of this container
/// over its Rust value type:
///
/// ```rust,ignore
/// pub type Boolean = Element<bool, Extension>;
/// pub type DateTime = Element<PrecisionDateTime, Extension>;
/// pub type Code<V = std::string::String> = Element<V, Extension>;
/// ```
///
/// # Type Parameters
///
/// * `V` - The value type (e.g., `String`, `i32`, `PreciseDecimal`)
/// * `E` - The extension type (the model's `Extension` struct)
///
/// # Examples
///
/// ```rust
/// use atrius_fhir_lib::r5::{Extension, String};
///
/// // Simple primitive value
/// let simple = String::from("Hello World");
/// assert_eq!(simple.value.as_deref(), Some("Hello World"));
///
/// // Extended primitive with an element id
/// let with_id = String::from("Hello World").with_id("text-1");
/// assert!(!with_id.is_empty());
/// ```
///
/// An element with neither a value nor extensions violates ele-1 and fails
/// validation.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Element<V, E> {
    /// Optional element identifier for referencing within the resource
    pub id: Option<String>,
    /// Extensions providing additional metadata
    pub extension: Vec<E>,
    /// The actual primitive value
    pub value: Option<V>,
}

impl<V, E> Default for Element<V, E> {
    fn default() -> Self {
        Self {
            id: None,
            extension: Vec::new(),
            value: None,
        }
    }
}

impl<V, E> Element<V, E> {
    pub fn new(value: V) -> Self {
        Self {
            id: None,
            extension: Vec::new(),
            value: Some(value),
        }
    }

    /// An element that only carries extensions, e.g. a data-absent-reason.
    pub fn from_extensions(extension: impl IntoIterator<Item = E>) -> Self {
        Self {
            id: None,
            extension: extension.into_iter().collect(),
            value: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_extension(mut self, extension: E) -> Self {
        self.extension.push(extension);
        self
    }

    /// Returns `true` if no value, id, or extensions are present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.id.is_none() && self.extension.is_empty()
    }
}

impl<V, E> From<V> for Element<V, E> {
    fn from(value: V) -> Self {
        Self::new(value)
    }
}

impl<E> From<&str> for Element<String, E> {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

/// Parses the value from its FHIR lexical form.
///
/// ```rust
/// use atrius_fhir_lib::r5::Date;
///
/// let date: Date = "2024-03".parse().unwrap();
/// assert_eq!(date.value.unwrap().to_string(), "2024-03");
/// assert!("2024-13".parse::<Date>().is_err());
/// ```
impl<V: FromStr, E> FromStr for Element<V, E> {
    type Err = V::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self::new)
    }
}

impl<V, E> Visitable for Element<V, E>
where
    V: FhirPrimitive + 'static,
    E: Visitable + 'static,
{
    fn type_name(&self) -> &'static str {
        V::TYPE_NAME
    }

    fn accept(&self, element_name: &str, element_index: Option<usize>, visitor: &mut dyn Visitor) {
        if !visitor.pre_visit(self) {
            return;
        }
        visitor.visit_start(element_name, element_index, self);
        if visitor.visit(element_name, element_index, self) {
            if let Some(value) = &self.value {
                visitor.visit_value(element_name, value.primitive_value());
            }
            if let Some(id) = &self.id {
                id.accept("id", None, visitor);
            }
            accept_list(&self.extension, "extension", visitor);
        }
        visitor.visit_end(element_name, element_index, self);
        visitor.post_visit(self);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<V, E> Validate for Element<V, E>
where
    V: FhirPrimitive + 'static,
    E: Validate + 'static,
{
    fn validate_into(&self, path: &str, ctx: &mut ValidationContext<'_>) {
        ctx.check_has_children(path, self.value.is_some() || !self.extension.is_empty());
        if let Some(value) = &self.value {
            ctx.lexical(path, value.check_value());
        }
        if let Some(id) = &self.id {
            id.validate_into(&format!("{}.id", path), ctx);
        }
        for (i, extension) in self.extension.iter().enumerate() {
            extension.validate_into(&format!("{}.extension[{}]", path, i), ctx);
        }
    }
}
