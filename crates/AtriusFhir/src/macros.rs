/// Declares the Rust enum for a required value set binding.
///
/// ```rust,ignore
/// fhir_code_enum! {
///     /// The status of the episode of care.
///     EpisodeOfCareStatus, "http://hl7.org/fhir/ValueSet/episode-of-care-status" {
///         Planned => "planned",
///         Active => "active",
///     }
/// }
/// ```
///
/// The generated enum implements `as_str`, `FromStr`, `Display` and `FhirPrimitive`,
/// so `Code<EpisodeOfCareStatus>` can only hold members of the value set.
macro_rules! fhir_code_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $value_set:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Canonical URL of the bound value set.
            pub const VALUE_SET: &'static str = $value_set;

            /// Every member of the value set, in definition order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $code, )+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::atrius_fhir_support::ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $code => Ok($name::$variant), )+
                    _ => Err(::atrius_fhir_support::ModelError::InvalidCode {
                        value_set: $value_set,
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::atrius_fhir_support::FhirPrimitive for $name {
            const TYPE_NAME: &'static str = "code";

            fn primitive_value(&self) -> ::atrius_fhir_support::PrimitiveValue<'_> {
                ::atrius_fhir_support::PrimitiveValue::Code(self.as_str())
            }
        }
    };
}
