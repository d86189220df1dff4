//! Spatial-query collaborator contract.
//!
//! The core delegates all geometry work (intersection tests, centroids,
//! extents) to an external engine behind this trait. Implementations wrap
//! whatever GIS backend hosts the reference layers; the crate itself ships
//! none and the integration tests use an in-memory bounding-box engine.

use thiserror::Error;

use super::types::{AttributeValue, Extent, FeatureHandle, Point, Polygon};

/// Errors reported by a spatial engine backend.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The named reference layer is not registered with the engine.
    #[error("Unknown reference layer '{0}'")]
    UnknownLayer(String),

    /// The polygon handle was not minted by this engine.
    #[error("Unknown polygon handle {0}")]
    UnknownPolygon(u64),

    /// Backend-specific failure (I/O, driver, projection).
    #[error("Spatial engine backend error: {0}")]
    Backend(String),
}

/// Contract for the external geometry/spatial-query collaborator.
///
/// All methods are synchronous; any internal selection state an engine keeps
/// while answering `intersecting` must be scoped so that concurrent requests
/// in a hosting process cannot observe each other (the caller additionally
/// clears selections via [`clear_selection`](SpatialEngine::clear_selection)
/// after every query).
pub trait SpatialEngine: Send + Sync {
    /// Handles of all features in `layer` whose geometry intersects `polygon`.
    ///
    /// Order is the engine's iteration order; no ordering is guaranteed.
    /// Zero matches is a valid result, not an error.
    fn intersecting(
        &self,
        polygon: Polygon,
        layer: &str,
    ) -> Result<Vec<FeatureHandle>, EngineError>;

    /// Whether `field` exists on the named layer's attribute table.
    fn field_exists(&self, layer: &str, field: &str) -> Result<bool, EngineError>;

    /// Read one attribute of one feature.
    fn attribute(
        &self,
        layer: &str,
        feature: FeatureHandle,
        field: &str,
    ) -> Result<AttributeValue, EngineError>;

    /// Centroid of the polygon, in the engine's projected units.
    fn centroid(&self, polygon: Polygon) -> Result<Point, EngineError>;

    /// Axis-aligned bounding extent of the polygon.
    fn bounding_extent(&self, polygon: Polygon) -> Result<Extent, EngineError>;

    /// Discard any selection state held for the named layer.
    ///
    /// Must be idempotent; clearing a layer with no active selection is a
    /// no-op, not an error.
    fn clear_selection(&self, layer: &str) -> Result<(), EngineError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_layer_display() {
        let err = EngineError::UnknownLayer("counties".to_string());
        assert_eq!(err.to_string(), "Unknown reference layer 'counties'");
    }

    #[test]
    fn test_unknown_polygon_display() {
        let err = EngineError::UnknownPolygon(9);
        assert_eq!(err.to_string(), "Unknown polygon handle 9");
    }

    #[test]
    fn test_backend_display() {
        let err = EngineError::Backend("driver timeout".to_string());
        assert_eq!(err.to_string(), "Spatial engine backend error: driver timeout");
    }

    #[test]
    fn test_trait_is_object_safe() {
        fn _assert(_: &dyn SpatialEngine) {}
    }
}
