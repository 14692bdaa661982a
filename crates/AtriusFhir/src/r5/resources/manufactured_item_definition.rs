use atrius_macros::{FhirBuilder, FhirChoice, FhirValidate, FhirVisit, TypeInfo};

use crate::r5::*;

/// Choice of types for the value\[x\] field in ManufacturedItemDefinitionProperty
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirChoice)]
#[fhir(choice = "value")]
pub enum ManufacturedItemDefinitionPropertyValue {
    /// Variant accepting the CodeableConcept type.
    CodeableConcept(CodeableConcept),
    /// Variant accepting the Quantity type.
    Quantity(Quantity),
    /// Variant accepting the Date type.
    Date(Date),
    /// Variant accepting the Boolean type.
    Boolean(Boolean),
    /// Variant accepting the Markdown type.
    Markdown(Markdown),
    /// Variant accepting the Attachment type.
    Attachment(Attachment),
    /// Variant accepting the Reference type.
    #[fhir(reference = "Binary")]
    Reference(Reference),
}

/// General characteristics of this item
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
#[fhir(type_name = "ManufacturedItemDefinition.property")]
pub struct ManufacturedItemDefinitionProperty {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    /// A code expressing the type of characteristic
    #[fhir(summary)]
    r#type: CodeableConcept,
    /// A value for the characteristic
    #[fhir(summary, choice)]
    value: Option<ManufacturedItemDefinitionPropertyValue>,
}

/// A reference to a constituent of the manufactured item as a whole, linked here so that its component location within the item can be indicated. This not where the item's ingredient are primarily stated (for which see Ingredient.for or ManufacturedItemDefinition.ingredient)
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
#[fhir(type_name = "ManufacturedItemDefinition.component.constituent")]
pub struct ManufacturedItemDefinitionComponentConstituent {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    /// The measurable amount of the substance, expressable in different ways (e.g. by mass or volume)
    #[fhir(summary)]
    amount: Vec<Quantity>,
    /// The physical location of the constituent/ingredient within the component
    #[fhir(summary)]
    location: Vec<CodeableConcept>,
    /// The function of this constituent within the component e.g. binder
    #[fhir(summary)]
    function: Vec<CodeableConcept>,
    /// The ingredient that is the constituent of the given component
    #[fhir(summary, reference = "Ingredient")]
    has_ingredient: Vec<CodeableReference>,
}

/// Physical parts of the manufactured item, that it is intrisically made from. This is distinct from the ingredients that are part of its chemical makeup
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
#[fhir(type_name = "ManufacturedItemDefinition.component")]
pub struct ManufacturedItemDefinitionComponent {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    /// Defining type of the component e.g. shell, layer, ink
    #[fhir(summary)]
    r#type: CodeableConcept,
    /// The function of this component within the item e.g. delivers active ingredient, masks taste
    #[fhir(summary)]
    function: Vec<CodeableConcept>,
    /// The measurable amount of total quantity of all substances in the component, expressable in different ways (e.g. by mass or volume)
    #[fhir(summary)]
    amount: Vec<Quantity>,
    /// A reference to a constituent of the manufactured item as a whole, linked here so that its component location within the item can be indicated. This not where the item's ingredient are primarily stated (for which see Ingredient.for or ManufacturedItemDefinition.ingredient)
    #[fhir(summary)]
    constituent: Vec<ManufacturedItemDefinitionComponentConstituent>,
    /// General characteristics of this item
    #[fhir(summary)]
    property: Vec<ManufacturedItemDefinitionProperty>,
    /// A component that this component contains or is made from
    #[fhir(summary)]
    component: Vec<ManufacturedItemDefinitionComponent>,
}

/// The definition and characteristics of a medicinal manufactured item, such as a tablet or capsule, as contained in a packaged medicinal product
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
#[fhir(resource)]
#[fhir_invariant(key = "dom-2", severity = "error", human = "If the resource is contained in another resource, it SHALL NOT contain nested Resources", expr = "contained.contained.empty()", path = "ManufacturedItemDefinition")]
#[fhir_invariant(key = "dom-3", severity = "error", human = "If the resource is contained in another resource, it SHALL be referred to from elsewhere in the resource or SHALL refer to the containing resource", expr = "contained.where((('#'+id in (%resource.descendants().reference | %resource.descendants().ofType(canonical) | %resource.descendants().ofType(uri) | %resource.descendants().ofType(url))) or descendants().where(reference = '#').exists() or descendants().where(ofType(canonical) = '#').exists() or descendants().where(ofType(canonical) = '#').exists()).not()).trace('unmatched', id).empty()", path = "ManufacturedItemDefinition")]
#[fhir_invariant(key = "dom-4", severity = "error", human = "If a resource is contained in another resource, it SHALL NOT have a meta.versionId or a meta.lastUpdated", expr = "contained.meta.versionId.empty() and contained.meta.lastUpdated.empty()", path = "ManufacturedItemDefinition")]
#[fhir_invariant(key = "dom-5", severity = "error", human = "If a resource is contained in another resource, it SHALL NOT have a security label", expr = "contained.meta.security.empty()", path = "ManufacturedItemDefinition")]
#[fhir_invariant(key = "dom-6", severity = "warning", human = "A resource should have narrative for robust management", expr = "text.`div`.exists()", path = "ManufacturedItemDefinition")]
pub struct ManufacturedItemDefinition {
    /// Logical id of this artifact
    #[fhir(summary)]
    id: Option<Id>,
    /// Metadata about the resource
    #[fhir(summary)]
    meta: Option<Meta>,
    /// A set of rules under which this content was created
    #[fhir(summary)]
    implicit_rules: Option<Uri>,
    /// Language of the resource content
    language: Option<Code>,
    /// Text summary of the resource, for human interpretation
    text: Option<Narrative>,
    /// Contained, inline Resources
    contained: Vec<Resource>,
    /// Additional content defined by implementations
    extension: Vec<Extension>,
    /// Extensions that cannot be ignored
    #[fhir(summary)]
    modifier_extension: Vec<Extension>,
    /// Unique identifier
    #[fhir(summary)]
    identifier: Vec<Identifier>,
    /// draft | active | retired | unknown
    #[fhir(summary)]
    status: Code<PublicationStatus>,
    /// A descriptive name applied to this item
    #[fhir(summary)]
    name: Option<String>,
    /// Dose form as manufactured (before any necessary transformation)
    #[fhir(summary)]
    manufactured_dose_form: CodeableConcept,
    /// The “real-world” units in which the quantity of the item is described
    #[fhir(summary)]
    unit_of_presentation: Option<CodeableConcept>,
    /// Manufacturer of the item, one of several possible
    #[fhir(summary, reference = "Organization")]
    manufacturer: Vec<Reference>,
    /// Allows specifying that an item is on the market for sale, or that it is not available, and the dates and locations associated
    #[fhir(summary)]
    marketing_status: Vec<MarketingStatus>,
    /// The ingredients of this manufactured item. Only needed if these are not specified by incoming references from the Ingredient resource
    #[fhir(summary)]
    ingredient: Vec<CodeableConcept>,
    /// General characteristics of this item
    #[fhir(summary)]
    property: Vec<ManufacturedItemDefinitionProperty>,
    /// Physical parts of the manufactured item, that it is intrisically made from. This is distinct from the ingredients that are part of its chemical makeup
    #[fhir(summary)]
    component: Vec<ManufacturedItemDefinitionComponent>,
}
