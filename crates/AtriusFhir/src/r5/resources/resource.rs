use std::fmt;
use std::str::FromStr;

use atrius_fhir_support::ModelError;
use atrius_macros::{FhirValidate, FhirVisit};

use crate::r5::*;

/// Any of the resources defined by this model.
///
/// Used for `contained` resources and wherever a resource of unknown type is handled.
/// The enum is transparent to visitors and validation: it reports the wrapped resource.
///
/// ```rust
/// use atrius_fhir_lib::r5::{
///     NutritionProduct, NutritionProductStatus, Resource, ResourceType,
/// };
///
/// let product = NutritionProduct::builder()
///     .id("formula-1")
///     .status(NutritionProductStatus::Active)
///     .build()
///     .unwrap();
/// let resource = Resource::from(product);
///
/// assert_eq!(resource.resource_type(), ResourceType::NutritionProduct);
/// assert_eq!(resource.id(), Some("formula-1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate)]
pub enum Resource {
    EpisodeOfCare(EpisodeOfCare),
    ManufacturedItemDefinition(ManufacturedItemDefinition),
    MedicationDispense(MedicationDispense),
    NutritionProduct(NutritionProduct),
    PaymentReconciliation(PaymentReconciliation),
}

macro_rules! resource_accessors {
    ($($variant:ident),+ $(,)?) => {
        impl Resource {
            pub fn resource_type(&self) -> ResourceType {
                match self {
                    $(Self::$variant(_) => ResourceType::$variant,)+
                }
            }

            /// Logical id of the wrapped resource.
            pub fn id(&self) -> Option<&str> {
                match self {
                    $(Self::$variant(r) => r.id().and_then(|id| id.value.as_deref()),)+
                }
            }

            pub fn meta(&self) -> Option<&Meta> {
                match self {
                    $(Self::$variant(r) => r.meta(),)+
                }
            }

            pub fn text(&self) -> Option<&Narrative> {
                match self {
                    $(Self::$variant(r) => r.text(),)+
                }
            }

            pub fn contained(&self) -> &[Resource] {
                match self {
                    $(Self::$variant(r) => r.contained(),)+
                }
            }

            pub fn extension(&self) -> &[Extension] {
                match self {
                    $(Self::$variant(r) => r.extension(),)+
                }
            }

            pub fn modifier_extension(&self) -> &[Extension] {
                match self {
                    $(Self::$variant(r) => r.modifier_extension(),)+
                }
            }
        }

        $(
            impl From<$variant> for Resource {
                fn from(resource: $variant) -> Self {
                    Resource::$variant(resource)
                }
            }
        )+

        /// The resource types this model defines.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ResourceType {
            $($variant,)+
        }

        impl ResourceType {
            pub const ALL: &'static [ResourceType] = &[$(ResourceType::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(ResourceType::$variant => stringify!($variant),)+
                }
            }
        }

        impl FromStr for ResourceType {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($variant) => Ok(ResourceType::$variant),)+
                    _ => Err(ModelError::UnknownResourceType(s.to_string())),
                }
            }
        }
    };
}

resource_accessors!(
    EpisodeOfCare,
    ManufacturedItemDefinition,
    MedicationDispense,
    NutritionProduct,
    PaymentReconciliation,
);

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrius_fhir_support::reference::is_resource_type;

    #[test]
    fn resource_type_names_are_r5_types() {
        for rt in ResourceType::ALL {
            assert!(is_resource_type(rt.as_str()), "{rt}");
            assert_eq!(rt.as_str().parse::<ResourceType>().unwrap(), *rt);
        }
    }

    #[test]
    fn unknown_resource_type() {
        let err = "Patient".parse::<ResourceType>().unwrap_err();
        assert!(matches!(err, ModelError::UnknownResourceType(name) if name == "Patient"));
    }

    #[test]
    fn equal_resources_hash_alike() {
        use std::collections::HashSet;

        let product = || {
            NutritionProduct::builder()
                .id("np1")
                .status(NutritionProductStatus::Active)
                .build()
                .unwrap()
        };
        let set: HashSet<Resource> = [Resource::from(product()), Resource::from(product())]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);

        let inactive = product()
            .to_builder()
            .status(NutritionProductStatus::Inactive)
            .build()
            .unwrap();
        assert_ne!(Resource::from(product()), Resource::from(inactive));
    }
}
