//! # Points and distances
//!
//! A [`Point`] is an immutable, named location tagged with the
//! [`CoordinateSystem`] its two coordinates live in. All distances go through
//! [`CoordinateSystem::distance`], so planar and geographic instances share a
//! single dispatch point.
//!
//! A [`PointSet`] is the validated, fixed set of points a run works over. It
//! precomputes the pairwise distance matrix once so tour evaluation is a
//! table lookup.
//!
//! ## Example
//!
//! ```rust
//! use evotsp::point::{Point, PointSet};
//!
//! let set = PointSet::new(vec![
//!     Point::planar("a", 0.0, 0.0),
//!     Point::planar("b", 3.0, 4.0),
//! ])
//! .unwrap();
//!
//! assert_eq!(set.distance(0, 1), 5.0);
//! ```

use std::fmt;

use crate::error::{GeneticError, Result};

/// Mean Earth radius used by the haversine formula, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// The coordinate system a point's coordinates are expressed in.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateSystem {
    /// Cartesian `(x, y)` coordinates, measured with the Euclidean norm.
    Planar,
    /// `(latitude, longitude)` in degrees, measured along the great circle.
    Geographic,
}

impl CoordinateSystem {
    /// Distance between two coordinate pairs under this system.
    ///
    /// For `Geographic` the pairs are `(lat, lon)` in degrees and the result
    /// is in kilometres.
    pub fn distance(self, a: (f64, f64), b: (f64, f64)) -> f64 {
        match self {
            CoordinateSystem::Planar => {
                let dx = a.0 - b.0;
                let dy = a.1 - b.1;
                (dx * dx + dy * dy).sqrt()
            }
            CoordinateSystem::Geographic => haversine(a, b),
        }
    }
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateSystem::Planar => write!(f, "planar"),
            CoordinateSystem::Geographic => write!(f, "geographic"),
        }
    }
}

fn haversine(a: (f64, f64), b: (f64, f64)) -> f64 {
    let lat1 = a.0.to_radians();
    let lat2 = b.0.to_radians();
    let dlat = (b.0 - a.0).to_radians();
    let dlon = (b.1 - a.1).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push h a hair above 1 for antipodal points.
    let h = h.clamp(0.0, 1.0);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// An immutable named location.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    name: String,
    first: f64,
    second: f64,
    system: CoordinateSystem,
}

impl Point {
    /// Creates a planar point at `(x, y)`.
    pub fn planar(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            first: x,
            second: y,
            system: CoordinateSystem::Planar,
        }
    }

    /// Creates a geographic point at `(lat, lon)`, both in degrees.
    pub fn geographic(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            first: lat,
            second: lon,
            system: CoordinateSystem::Geographic,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw coordinate pair: `(x, y)` or `(lat, lon)`.
    pub fn coordinates(&self) -> (f64, f64) {
        (self.first, self.second)
    }

    pub fn system(&self) -> CoordinateSystem {
        self.system
    }

    /// Distance to `other`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::MixedCoordinateSystems`] if the two points are
    /// tagged with different coordinate systems.
    pub fn distance_to(&self, other: &Point) -> Result<f64> {
        if self.system != other.system {
            return Err(GeneticError::MixedCoordinateSystems);
        }
        Ok(self.system.distance(self.coordinates(), other.coordinates()))
    }

    fn validate(&self) -> Result<()> {
        if !self.first.is_finite() || !self.second.is_finite() {
            return Err(GeneticError::InvalidNumericValue(format!(
                "point '{}' has non-finite coordinates ({}, {})",
                self.name, self.first, self.second
            )));
        }
        if self.system == CoordinateSystem::Geographic
            && (!(-90.0..=90.0).contains(&self.first) || !(-180.0..=180.0).contains(&self.second))
        {
            return Err(GeneticError::InvalidNumericValue(format!(
                "point '{}' has latitude/longitude ({}, {}) outside [-90, 90] x [-180, 180]",
                self.name, self.first, self.second
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.first, self.second)
    }
}

/// A validated set of at least two points sharing one coordinate system.
#[derive(Debug, Clone)]
pub struct PointSet {
    points: Vec<Point>,
    system: CoordinateSystem,
    /// Row-major `len * len` matrix of pairwise distances.
    distances: Vec<f64>,
}

impl PointSet {
    /// Validates `points` and precomputes their pairwise distances.
    ///
    /// # Errors
    ///
    /// - [`GeneticError::TooFewPoints`] if fewer than two points are given.
    /// - [`GeneticError::MixedCoordinateSystems`] if the points disagree on
    ///   their coordinate system.
    /// - [`GeneticError::InvalidNumericValue`] for non-finite coordinates, or
    ///   geographic coordinates out of range.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < 2 {
            return Err(GeneticError::TooFewPoints {
                found: points.len(),
            });
        }

        let system = points[0].system;
        if points.iter().any(|p| p.system != system) {
            return Err(GeneticError::MixedCoordinateSystems);
        }
        for point in &points {
            point.validate()?;
        }

        let n = points.len();
        let mut distances = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = system.distance(points[i].coordinates(), points[j].coordinates());
                distances[i * n + j] = d;
                distances[j * n + i] = d;
            }
        }

        Ok(Self {
            points,
            system,
            distances,
        })
    }

    /// Distance between the points at indices `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        let n = self.points.len();
        assert!(a < n && b < n, "point index out of bounds");
        self.distances[a * n + b]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: a valid set holds at least two points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn system(&self) -> CoordinateSystem {
        self.system
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    #[test]
    fn test_planar_distance() {
        let a = Point::planar("a", 0.0, 0.0);
        let b = Point::planar("b", 3.0, 4.0);
        assert_eq!(a.distance_to(&b).unwrap(), 5.0);
    }

    #[test]
    fn test_planar_symmetry_and_identity() {
        let points = [
            Point::planar("a", -1.5, 2.25),
            Point::planar("b", 10.0, -3.0),
            Point::planar("c", 0.0, 0.0),
        ];
        for a in &points {
            assert_eq!(a.distance_to(a).unwrap(), 0.0);
            for b in &points {
                assert_eq!(a.distance_to(b).unwrap(), b.distance_to(a).unwrap());
            }
        }
    }

    #[test]
    fn test_geographic_symmetry_and_identity() {
        let points = [
            Point::geographic("berlin", 52.52, 13.405),
            Point::geographic("lisbon", 38.7223, -9.1393),
            Point::geographic("sydney", -33.8688, 151.2093),
        ];
        for a in &points {
            assert_eq!(a.distance_to(a).unwrap(), 0.0);
            for b in &points {
                assert!(close(
                    a.distance_to(b).unwrap(),
                    b.distance_to(a).unwrap(),
                    1e-9
                ));
            }
        }
    }

    #[test]
    fn test_haversine_known_distances() {
        // A quarter of the equator.
        let a = Point::geographic("a", 0.0, 0.0);
        let b = Point::geographic("b", 0.0, 90.0);
        let quarter = std::f64::consts::PI * EARTH_RADIUS_KM / 2.0;
        assert!(close(a.distance_to(&b).unwrap(), quarter, 1e-6));

        // One degree of latitude is about 111.19 km.
        let c = Point::geographic("c", 1.0, 0.0);
        assert!(close(a.distance_to(&c).unwrap(), 111.19, 0.01));
    }

    #[test]
    fn test_haversine_antipodal() {
        let a = Point::geographic("a", 0.0, 0.0);
        let b = Point::geographic("b", 0.0, 180.0);
        let half = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!(close(a.distance_to(&b).unwrap(), half, 1e-6));
    }

    #[test]
    fn test_mixed_systems_rejected() {
        let a = Point::planar("a", 0.0, 0.0);
        let b = Point::geographic("b", 0.0, 0.0);
        assert!(matches!(
            a.distance_to(&b),
            Err(GeneticError::MixedCoordinateSystems)
        ));
        assert!(matches!(
            PointSet::new(vec![a, b]),
            Err(GeneticError::MixedCoordinateSystems)
        ));
    }

    #[test]
    fn test_point_set_too_few_points() {
        assert!(matches!(
            PointSet::new(vec![]),
            Err(GeneticError::TooFewPoints { found: 0 })
        ));
        assert!(matches!(
            PointSet::new(vec![Point::planar("only", 1.0, 1.0)]),
            Err(GeneticError::TooFewPoints { found: 1 })
        ));
    }

    #[test]
    fn test_point_set_rejects_non_finite() {
        let result = PointSet::new(vec![
            Point::planar("a", 0.0, 0.0),
            Point::planar("b", f64::NAN, 1.0),
        ]);
        assert!(matches!(result, Err(GeneticError::InvalidNumericValue(_))));
    }

    #[test]
    fn test_point_set_rejects_out_of_range_latitude() {
        let result = PointSet::new(vec![
            Point::geographic("a", 0.0, 0.0),
            Point::geographic("b", 91.0, 0.0),
        ]);
        assert!(matches!(result, Err(GeneticError::InvalidNumericValue(_))));
    }

    #[test]
    fn test_point_set_matrix_matches_points() {
        let points = vec![
            Point::planar("a", 0.0, 0.0),
            Point::planar("b", 0.0, 1.0),
            Point::planar("c", 1.0, 1.0),
        ];
        let set = PointSet::new(points.clone()).unwrap();

        assert_eq!(set.len(), 3);
        assert_eq!(set.system(), CoordinateSystem::Planar);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(set.distance(i, j), points[i].distance_to(&points[j]).unwrap());
            }
        }
    }

    #[test]
    fn test_display() {
        let p = Point::planar("depot", 1.5, -2.0);
        assert_eq!(p.to_string(), "depot (1.5, -2)");
        assert_eq!(CoordinateSystem::Geographic.to_string(), "geographic");
    }
}
