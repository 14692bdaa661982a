use atrius_macros::{FhirBuilder, FhirValidate, FhirVisit, TypeInfo};

use crate::r5::*;

/// A reference to a code defined by a terminology system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
pub struct Coding {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    /// Identity of the terminology system
    #[fhir(summary)]
    system: Option<Uri>,
    /// Version of the system - if relevant
    #[fhir(summary)]
    version: Option<String>,
    /// Symbol in syntax defined by the system
    #[fhir(summary)]
    code: Option<Code>,
    /// Representation defined by the system
    #[fhir(summary)]
    display: Option<String>,
    /// If this coding was chosen directly by the user
    #[fhir(summary)]
    user_selected: Option<Boolean>,
}

impl Coding {
    /// Shorthand for a coding with a system and code.
    pub fn from_system_code(system: &str, code: &str) -> Self {
        Coding {
            id: None,
            extension: Vec::new(),
            system: Some(Uri::from(system)),
            version: None,
            code: Some(Code::from(code)),
            display: None,
            user_selected: None,
        }
    }
}
