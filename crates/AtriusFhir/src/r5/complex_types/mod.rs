pub mod annotation;
pub use annotation::*;

pub mod attachment;
pub use attachment::*;

pub mod codeable_concept;
pub use codeable_concept::*;

pub mod codeable_reference;
pub use codeable_reference::*;

pub mod coding;
pub use coding::*;

pub mod dosage;
pub use dosage::*;

pub mod extension;
pub use extension::*;

pub mod identifier;
pub use identifier::*;

pub mod marketing_status;
pub use marketing_status::*;

pub mod meta;
pub use meta::*;

pub mod money;
pub use money::*;

pub mod narrative;
pub use narrative::*;

pub mod period;
pub use period::*;

pub mod quantity;
pub use quantity::*;

pub mod range;
pub use range::*;

pub mod ratio;
pub use ratio::*;

pub mod reference;
pub use reference::*;

pub mod timing;
pub use timing::*;
