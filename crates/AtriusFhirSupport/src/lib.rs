//! # FHIR Model Support Types
//!
//! This crate provides the traits and runtime helpers shared by every generated FHIR
//! model type. The derive macros in `atrius-macros` emit code against these
//! interfaces, and the model crate implements them for its primitive containers.
//!
//! ## Overview
//!
//! - [`visitor`] - depth-first traversal of resource trees ([`Visitable`], [`Visitor`])
//! - [`validate`] - issue collection, the [`Validate`] trait and constraint declarations
//! - [`validation_support`] - lexical rules for primitives and reference target checks
//! - [`config`] - process-wide [`ModelConfig`] controlling which checks run
//! - [`reference`] - literal reference parsing and the R5 resource type list
//! - [`primitive`] - the [`FhirPrimitive`] bridge from Rust values to visited values
//!
//! ## Usage Example
//!
//! ```rust
//! use atrius_fhir_support::validation_support::check_id;
//!
//! assert!(check_id("example-1").is_ok());
//! assert!(check_id("not valid").is_err());
//! ```

pub mod config;
pub mod error;
pub mod primitive;
pub mod reference;
pub mod type_info;
pub mod validate;
pub mod validation_support;
pub mod visitor;

pub use config::ModelConfig;
pub use error::ModelError;
pub use primitive::{FhirPrimitive, PrimitiveValue};
pub use type_info::{ChoiceElement, TypeInfo};
pub use validate::*;
pub use visitor::{CollectingVisitor, PathAwareVisitor, PathVisit, Visitable, Visitor};
