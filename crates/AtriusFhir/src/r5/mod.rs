//! FHIR R5 (5.0.0) model types.
//!
//! Everything is re-exported flat, so `atrius_fhir_lib::r5::Reference` and
//! `atrius_fhir_lib::r5::MedicationDispense` live side by side.

pub mod codes;
pub mod complex_types;
pub mod primitives;
pub mod resources;

pub use codes::*;
pub use complex_types::*;
pub use primitives::*;
pub use resources::*;
