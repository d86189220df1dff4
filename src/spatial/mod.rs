//! Spatial selection module
//!
//! Defines the seam between the report core and the external spatial-query
//! collaborator: opaque geometry handles, the [`SpatialEngine`] contract, and
//! the [`SpatialSelector`] that extracts attribute values from reference
//! features intersecting an input polygon.

mod engine;
mod selector;
mod types;

pub use engine::{EngineError, SpatialEngine};
pub use selector::{SelectError, SpatialSelector};
pub use types::{AttributeValue, Extent, FeatureHandle, Point, Polygon};
