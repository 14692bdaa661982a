use atrius_macros::{FhirBuilder, FhirChoice, FhirValidate, FhirVisit, TypeInfo};

use crate::r5::*;

/// The product's nutritional information expressed by the nutrients
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
#[fhir(type_name = "NutritionProduct.nutrient")]
pub struct NutritionProductNutrient {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    /// The (relevant) nutrients in the product
    #[fhir(reference = "Substance")]
    item: Option<CodeableReference>,
    /// The amount of nutrient expressed in one or more units: X per pack / per serving / per dose
    amount: Vec<Ratio>,
}

/// Ingredients contained in this product
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
#[fhir(type_name = "NutritionProduct.ingredient")]
pub struct NutritionProductIngredient {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    /// The ingredient contained in the product
    #[fhir(summary, reference = "NutritionProduct")]
    item: CodeableReference,
    /// The amount of ingredient that is in the product
    #[fhir(summary)]
    amount: Vec<Ratio>,
}

/// Choice of types for the value\[x\] field in NutritionProductCharacteristic
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirChoice)]
#[fhir(choice = "value")]
pub enum NutritionProductCharacteristicValue {
    /// Variant accepting the CodeableConcept type.
    CodeableConcept(CodeableConcept),
    /// Variant accepting the String type.
    String(String),
    /// Variant accepting the Quantity type.
    Quantity(Quantity),
    /// Variant accepting the Base64Binary type.
    Base64Binary(Base64Binary),
    /// Variant accepting the Attachment type.
    Attachment(Attachment),
    /// Variant accepting the Boolean type.
    Boolean(Boolean),
}

/// Specifies descriptive properties of the nutrition product
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
#[fhir(type_name = "NutritionProduct.characteristic")]
pub struct NutritionProductCharacteristic {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    /// Code specifying the type of characteristic
    r#type: CodeableConcept,
    /// The value of the characteristic
    #[fhir(choice)]
    value: NutritionProductCharacteristicValue,
}

/// One or several physical instances or occurrences of the nutrition product
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
#[fhir(type_name = "NutritionProduct.instance")]
pub struct NutritionProductInstance {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    /// The amount of items or instances
    quantity: Option<SimpleQuantity>,
    /// The identifier for the physical instance, typically a serial number or manufacturer number
    #[fhir(summary)]
    identifier: Vec<Identifier>,
    /// The name for the specific product
    #[fhir(summary)]
    name: Option<String>,
    /// The identification of the batch or lot of the product
    #[fhir(summary)]
    lot_number: Option<String>,
    /// The expiry date or date and time for the product
    #[fhir(summary)]
    expiry: Option<DateTime>,
    /// The date until which the product is expected to be good for consumption
    #[fhir(summary)]
    use_by: Option<DateTime>,
    /// An identifier that supports traceability to the event during which material in this product from one or more biological entities was obtained or pooled
    #[fhir(summary)]
    biological_source_event: Option<Identifier>,
}

/// A product used for nutritional purposes (i.e. food or supplement)
///
/// A food or supplement that is consumed by patients.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
#[fhir(resource)]
#[fhir_invariant(key = "dom-2", severity = "error", human = "If the resource is contained in another resource, it SHALL NOT contain nested Resources", expr = "contained.contained.empty()", path = "NutritionProduct")]
#[fhir_invariant(key = "dom-3", severity = "error", human = "If the resource is contained in another resource, it SHALL be referred to from elsewhere in the resource or SHALL refer to the containing resource", expr = "contained.where((('#'+id in (%resource.descendants().reference | %resource.descendants().ofType(canonical) | %resource.descendants().ofType(uri) | %resource.descendants().ofType(url))) or descendants().where(reference = '#').exists() or descendants().where(ofType(canonical) = '#').exists() or descendants().where(ofType(canonical) = '#').exists()).not()).trace('unmatched', id).empty()", path = "NutritionProduct")]
#[fhir_invariant(key = "dom-4", severity = "error", human = "If a resource is contained in another resource, it SHALL NOT have a meta.versionId or a meta.lastUpdated", expr = "contained.meta.versionId.empty() and contained.meta.lastUpdated.empty()", path = "NutritionProduct")]
#[fhir_invariant(key = "dom-5", severity = "error", human = "If a resource is contained in another resource, it SHALL NOT have a security label", expr = "contained.meta.security.empty()", path = "NutritionProduct")]
#[fhir_invariant(key = "dom-6", severity = "warning", human = "A resource should have narrative for robust management", expr = "text.`div`.exists()", path = "NutritionProduct")]
pub struct NutritionProduct {
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
    /// A code that can identify the detailed nutrients and ingredients in a specific food product
    #[fhir(summary)]
    code: Option<CodeableConcept>,
    /// active | inactive | entered-in-error
    #[fhir(summary)]
    status: Code<NutritionProductStatus>,
    /// Broad product groups or categories used to classify the product, such as Legume and Legume Products, Beverages, or Beef Products
    #[fhir(summary)]
    category: Vec<CodeableConcept>,
    /// Manufacturer, representative or officially responsible for the product
    #[fhir(reference = "Organization")]
    manufacturer: Vec<Reference>,
    /// The product's nutritional information expressed by the nutrients
    nutrient: Vec<NutritionProductNutrient>,
    /// Ingredients contained in this product
    ingredient: Vec<NutritionProductIngredient>,
    /// Known or suspected allergens that are a part of this product
    #[fhir(summary, reference = "Substance")]
    known_allergen: Vec<CodeableReference>,
    /// Specifies descriptive properties of the nutrition product
    characteristic: Vec<NutritionProductCharacteristic>,
    /// One or several physical instances or occurrences of the nutrition product
    instance: Vec<NutritionProductInstance>,
    /// Comments made about the product
    note: Vec<Annotation>,
}
