//! Value objects - Immutable objects defined by their attributes

mod ad_unit_id;
mod consent;
mod placement_name;
mod reward;

pub use ad_unit_id::AdUnitId;
pub use consent::{ChildDirectedTreatment, ConsentStatus};
pub use placement_name::PlacementName;
pub use reward::Reward;
