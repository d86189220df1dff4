//! Value types shared across the spatial seam.

use std::fmt;

/// Opaque handle to a polygon owned by the spatial engine.
///
/// The core never inspects or mutates the geometry behind the handle; it only
/// passes it back to the engine for intersection, centroid, and extent queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Polygon(u64);

impl Polygon {
    /// Wrap a raw engine-assigned id.
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// The raw engine-assigned id.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Opaque handle to a single feature within a reference layer.
///
/// Handles are only meaningful to the engine that minted them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureHandle(u64);

impl FeatureHandle {
    /// Wrap a raw engine-assigned id.
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// The raw engine-assigned id.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// A planar coordinate pair, in the engine's projected units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Easting (x) in projected units.
    pub x: f64,
    /// Northing (y) in projected units.
    pub y: f64,
}

/// An axis-aligned bounding extent in the engine's projected units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// West edge.
    pub min_x: f64,
    /// South edge.
    pub min_y: f64,
    /// East edge.
    pub max_x: f64,
    /// North edge.
    pub max_y: f64,
}

impl Extent {
    /// East-west span of the extent.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// North-south span of the extent.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Whether a point falls inside the extent (edges inclusive).
    pub fn contains(&self, point: &Point) -> bool {
        (self.min_x..=self.max_x).contains(&point.x) && (self.min_y..=self.max_y).contains(&point.y)
    }

    /// Whether two extents overlap (edges inclusive).
    pub fn intersects(&self, other: &Extent) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }
}

/// A single attribute value read from a reference feature.
///
/// Reference layers carry one attribute of interest per use case (county
/// label, quad name, PLSS code, UTM zone id); the engine reports whichever
/// storage type the source data uses and formatting stringifies it.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Text attribute (county name, quad name, PLSS code).
    Text(String),
    /// Integer attribute (UTM zone stored numerically).
    Integer(i64),
    /// Floating-point attribute.
    Real(f64),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Text(s) => write!(f, "{}", s),
            AttributeValue::Integer(n) => write!(f, "{}", n),
            AttributeValue::Real(x) => write!(f, "{}", x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_roundtrip() {
        let polygon = Polygon::from_raw(42);
        assert_eq!(polygon.raw(), 42);
    }

    #[test]
    fn test_feature_handle_equality() {
        let a = FeatureHandle::from_raw(7);
        let b = FeatureHandle::from_raw(7);
        let c = FeatureHandle::from_raw(8);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_extent_dimensions() {
        let extent = Extent {
            min_x: 100.0,
            min_y: 200.0,
            max_x: 150.0,
            max_y: 280.0,
        };
        assert_eq!(extent.width(), 50.0);
        assert_eq!(extent.height(), 80.0);
    }

    #[test]
    fn test_extent_contains() {
        let extent = Extent {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 10.0,
            max_y: 10.0,
        };
        assert!(extent.contains(&Point { x: 5.0, y: 5.0 }));
        assert!(extent.contains(&Point { x: 0.0, y: 10.0 }));
        assert!(!extent.contains(&Point { x: -1.0, y: 5.0 }));
    }

    #[test]
    fn test_extent_intersects_overlapping() {
        let a = Extent {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 10.0,
            max_y: 10.0,
        };
        let b = Extent {
            min_x: 5.0,
            min_y: 5.0,
            max_x: 15.0,
            max_y: 15.0,
        };
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_extent_intersects_disjoint() {
        let a = Extent {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 10.0,
            max_y: 10.0,
        };
        let b = Extent {
            min_x: 20.0,
            min_y: 20.0,
            max_x: 30.0,
            max_y: 30.0,
        };
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_attribute_value_display() {
        assert_eq!(AttributeValue::Text("Larimer".to_string()).to_string(), "Larimer");
        assert_eq!(AttributeValue::Integer(13).to_string(), "13");
        assert_eq!(AttributeValue::Real(1.5).to_string(), "1.5");
    }
}
