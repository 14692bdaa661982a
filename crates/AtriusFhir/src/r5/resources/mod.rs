pub mod episode_of_care;
pub use episode_of_care::*;

pub mod manufactured_item_definition;
pub use manufactured_item_definition::*;

pub mod medication_dispense;
pub use medication_dispense::*;

pub mod nutrition_product;
pub use nutrition_product::*;

pub mod payment_reconciliation;
pub use payment_reconciliation::*;

pub mod resource;
pub use resource::*;
