//! Attribute selection over a polygon/layer intersection.
//!
//! [`SpatialSelector`] is the only component that talks to the spatial
//! engine during report production: it resolves which reference features a
//! polygon overlaps and pulls one named attribute from each match.

use std::sync::Arc;

use thiserror::Error;

use super::engine::{EngineError, SpatialEngine};
use super::types::{AttributeValue, Polygon};

/// Errors from attribute selection.
#[derive(Debug, Error)]
pub enum SelectError {
    /// The requested attribute field does not exist on the reference layer.
    #[error("Field '{field}' not found on reference layer '{layer}'")]
    FieldNotFound { layer: String, field: String },

    /// The engine failed while answering the query.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Selects attribute values of reference features intersecting a polygon.
///
/// Stateless apart from the engine handle; `select` may be called any number
/// of times and always leaves the engine's selection state cleared, so calls
/// are idempotent and re-entrant across requests.
#[derive(Clone)]
pub struct SpatialSelector {
    engine: Arc<dyn SpatialEngine>,
}

impl SpatialSelector {
    /// Create a selector over the given engine.
    pub fn new(engine: Arc<dyn SpatialEngine>) -> Self {
        Self { engine }
    }

    /// Attribute values of all features in `layer` intersecting `polygon`.
    ///
    /// Values come back in the engine's match iteration order; callers that
    /// need determinism sort downstream. Zero matches yields an empty vec.
    ///
    /// # Errors
    ///
    /// [`SelectError::FieldNotFound`] if `field` is absent from the layer's
    /// attribute table; engine failures are passed through. The layer's
    /// selection state is cleared before returning in every case.
    pub fn select(
        &self,
        polygon: Polygon,
        layer: &str,
        field: &str,
    ) -> Result<Vec<AttributeValue>, SelectError> {
        let result = self.select_inner(polygon, layer, field);
        // Selection state must not outlive the call, even on failure.
        if let Err(clear_err) = self.engine.clear_selection(layer) {
            tracing::warn!(layer, error = %clear_err, "failed to clear selection state");
            if result.is_ok() {
                return Err(clear_err.into());
            }
        }
        result
    }

    fn select_inner(
        &self,
        polygon: Polygon,
        layer: &str,
        field: &str,
    ) -> Result<Vec<AttributeValue>, SelectError> {
        if !self.engine.field_exists(layer, field)? {
            return Err(SelectError::FieldNotFound {
                layer: layer.to_string(),
                field: field.to_string(),
            });
        }

        let matches = self.engine.intersecting(polygon, layer)?;
        tracing::debug!(layer, field, count = matches.len(), "spatial selection");

        let mut values = Vec::with_capacity(matches.len());
        for feature in matches {
            values.push(self.engine.attribute(layer, feature, field)?);
        }
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::types::{Extent, FeatureHandle, Point};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Engine stub with a fixed set of matches and a clear counter.
    struct StubEngine {
        field: &'static str,
        values: Vec<AttributeValue>,
        clears: AtomicUsize,
    }

    impl StubEngine {
        fn new(field: &'static str, values: Vec<AttributeValue>) -> Self {
            Self {
                field,
                values,
                clears: AtomicUsize::new(0),
            }
        }
    }

    impl SpatialEngine for StubEngine {
        fn intersecting(
            &self,
            _polygon: Polygon,
            _layer: &str,
        ) -> Result<Vec<FeatureHandle>, EngineError> {
            Ok((0..self.values.len() as u64)
                .map(FeatureHandle::from_raw)
                .collect())
        }

        fn field_exists(&self, _layer: &str, field: &str) -> Result<bool, EngineError> {
            Ok(field == self.field)
        }

        fn attribute(
            &self,
            _layer: &str,
            feature: FeatureHandle,
            _field: &str,
        ) -> Result<AttributeValue, EngineError> {
            Ok(self.values[feature.raw() as usize].clone())
        }

        fn centroid(&self, _polygon: Polygon) -> Result<Point, EngineError> {
            Ok(Point { x: 0.0, y: 0.0 })
        }

        fn bounding_extent(&self, _polygon: Polygon) -> Result<Extent, EngineError> {
            Ok(Extent {
                min_x: 0.0,
                min_y: 0.0,
                max_x: 1.0,
                max_y: 1.0,
            })
        }

        fn clear_selection(&self, _layer: &str) -> Result<(), EngineError> {
            self.clears.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_select_returns_values_in_match_order() {
        let engine = Arc::new(StubEngine::new(
            "NAME",
            vec![
                AttributeValue::Text("Boulder".to_string()),
                AttributeValue::Text("Larimer".to_string()),
            ],
        ));
        let selector = SpatialSelector::new(engine);

        let values = selector
            .select(Polygon::from_raw(1), "counties", "NAME")
            .expect("selection should succeed");

        assert_eq!(
            values,
            vec![
                AttributeValue::Text("Boulder".to_string()),
                AttributeValue::Text("Larimer".to_string()),
            ]
        );
    }

    #[test]
    fn test_select_empty_match_is_not_an_error() {
        let engine = Arc::new(StubEngine::new("NAME", vec![]));
        let selector = SpatialSelector::new(engine);

        let values = selector
            .select(Polygon::from_raw(1), "counties", "NAME")
            .expect("empty selection is valid");
        assert!(values.is_empty());
    }

    #[test]
    fn test_select_missing_field_fails() {
        let engine = Arc::new(StubEngine::new("NAME", vec![]));
        let selector = SpatialSelector::new(engine);

        let err = selector
            .select(Polygon::from_raw(1), "counties", "NO_SUCH_FIELD")
            .unwrap_err();
        assert!(matches!(err, SelectError::FieldNotFound { .. }));
        assert_eq!(
            err.to_string(),
            "Field 'NO_SUCH_FIELD' not found on reference layer 'counties'"
        );
    }

    #[test]
    fn test_select_clears_selection_on_success_and_failure() {
        let engine = Arc::new(StubEngine::new("NAME", vec![]));
        let selector = SpatialSelector::new(Arc::clone(&engine) as Arc<dyn SpatialEngine>);

        let _ = selector.select(Polygon::from_raw(1), "counties", "NAME");
        let _ = selector.select(Polygon::from_raw(1), "counties", "MISSING");

        assert_eq!(engine.clears.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_select_is_repeatable() {
        let engine = Arc::new(StubEngine::new(
            "NAME",
            vec![AttributeValue::Text("Weld".to_string())],
        ));
        let selector = SpatialSelector::new(engine);

        let first = selector
            .select(Polygon::from_raw(1), "counties", "NAME")
            .unwrap();
        let second = selector
            .select(Polygon::from_raw(1), "counties", "NAME")
            .unwrap();
        assert_eq!(first, second);
    }
}
