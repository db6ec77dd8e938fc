use serde::{Deserialize, Serialize};

/// A 2D coordinate in the virtual canvas space
///
/// Serializes as a two-element array `[x, y]`, which is also the shape
/// stored in the `points` column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point(pub f64, pub f64);

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self(x, y)
    }

    pub fn x(&self) -> f64 {
        self.0
    }

    pub fn y(&self) -> f64 {
        self.1
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }

    /// Euclidean distance to another point in the same space
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.0 - other.0).hypot(self.1 - other.1)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_serializes_as_pair() {
        let json = serde_json::to_string(&Point::new(5.0, 10.5)).unwrap();
        assert_eq!(json, "[5.0,10.5]");
    }

    #[test]
    fn test_point_deserializes_from_integer_pair() {
        let point: Point = serde_json::from_str("[0, 10]").unwrap();
        assert_eq!(point, Point::new(0.0, 10.0));
    }

    #[test]
    fn test_point_rejects_wrong_arity() {
        assert!(serde_json::from_str::<Point>("[1, 2, 3]").is_err());
        assert!(serde_json::from_str::<Point>("[1]").is_err());
    }

    #[test]
    fn test_distance_to() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
    }
}
