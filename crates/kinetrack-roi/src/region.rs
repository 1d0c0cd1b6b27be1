//! Regions of interest: named 1D/2D geometric regions with spatial queries.
//!
//! A [`RegionOfInterest`] wraps a [`geo`] line string or polygon by
//! composition and exposes a fixed set of queries: containment, distance,
//! nearest point, approach vector, and the allocentric/egocentric angles
//! derived from them. The wrapped geometry is never exposed mutably, so a
//! region is fixed for its whole lifetime.
//!
//! A region includes both its boundary and (for polygons) its filled
//! interior. Points inside a region therefore have zero distance to it and a
//! null approach vector. When the distance to the *edge* of a region is
//! wanted instead, every query takes a `boundary_only` flag that restricts
//! the computation to the region's boundary: the exterior and interior rings
//! of a polygon, or the two endpoints of an open polyline. A closed 1D loop
//! has an empty boundary, so boundary-only queries against it are rejected.

use std::fmt;
use std::iter::once;
use std::str::FromStr;

use geo::{Closest, ClosestPoint, Contains, EuclideanDistance, Intersects, LineString, Point, Polygon};
use ndarray::{Array2, Array3, ArrayD, Axis, Ix2, Ix3, IxDyn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use kinetrack_core::PoseDataset;

use crate::broadcast::{map_points_to_scalar, map_points_to_vector};
use crate::kinematics::{forward_vector_angle, CameraView, ForwardRotation};
use crate::vector::{signed_angle_2d, AngleError, ZERO_NORM_TOLERANCE};
use crate::{Result, RoiError};

/// Name reported for regions that were not given one.
pub const DEFAULT_REGION_NAME: &str = "Un-named region";

/// Errors raised while constructing or querying a region of interest.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RegionError {
    /// Too few points for the requested dimensionality
    #[error("Need at least {required} points to define a {dimensions}D region (got {actual})")]
    TooFewPoints {
        /// Dimensionality of the region being constructed
        dimensions: usize,
        /// Minimum number of points required
        required: usize,
        /// Number of points provided
        actual: usize,
    },

    /// A closed 1D region was requested from fewer than 3 points
    #[error("Cannot create a loop from a single line segment")]
    SingleSegmentLoop,

    /// An interior hole needs at least 3 points
    #[error("Need at least 3 points to define an interior hole (got {actual})")]
    TooFewHolePoints {
        /// Number of points provided for the hole
        actual: usize,
    },

    /// A query point does not carry 2 or 3 coordinates
    #[error("Expected a point with 2 or 3 spatial coordinates, but got {actual}")]
    PointDimensions {
        /// Number of coordinates provided
        actual: usize,
    },

    /// Boundary-only query against a closed loop, whose boundary is empty
    #[error("A closed loop has an empty boundary; boundary-only queries are undefined for it")]
    ClosedLoopBoundary,
}

/// The wrapped geometry of a region.
///
/// Kept private so the underlying `geo` objects can only be reached through
/// the query methods.
#[derive(Debug, Clone, Serialize)]
enum RegionShape {
    /// Open polyline (1D)
    Line(LineString<f64>),
    /// Closed polyline, first point equal to last (1D)
    Loop(LineString<f64>),
    /// Filled polygon, possibly with holes (2D)
    Area(Polygon<f64>),
}

/// A named 1- or 2-dimensional region of interest.
#[derive(Debug, Clone, Serialize)]
pub struct RegionOfInterest {
    shape: RegionShape,
    name: Option<String>,
}

impl RegionOfInterest {
    /// Creates a 1D region from a sequence of (x, y) points.
    ///
    /// With `closed`, the final point is joined back to the first, forming a
    /// loop. A region whose first and last input points coincide is treated
    /// as closed either way.
    ///
    /// # Errors
    ///
    /// Returns an error for fewer than 2 points, or when `closed` is
    /// requested with fewer than 3 points.
    pub fn line(points: &[(f64, f64)], closed: bool) -> Result<Self> {
        if points.len() < 2 {
            return Err(RegionError::TooFewPoints {
                dimensions: 1,
                required: 2,
                actual: points.len(),
            }
            .into());
        }
        if closed && points.len() < 3 {
            return Err(RegionError::SingleSegmentLoop.into());
        }

        let mut line = LineString::from(points.to_vec());
        if closed {
            line.close();
        }
        let shape = if line.is_closed() {
            RegionShape::Loop(line)
        } else {
            RegionShape::Line(line)
        };
        debug!(points = points.len(), closed, "constructed 1D region");
        Ok(Self { shape, name: None })
    }

    /// Creates a 2D polygonal region from an exterior boundary and optional
    /// interior holes.
    ///
    /// # Errors
    ///
    /// Returns an error when the exterior or any hole has fewer than 3
    /// points.
    pub fn polygon(exterior: &[(f64, f64)], holes: &[Vec<(f64, f64)>]) -> Result<Self> {
        if exterior.len() < 3 {
            return Err(RegionError::TooFewPoints {
                dimensions: 2,
                required: 3,
                actual: exterior.len(),
            }
            .into());
        }
        for hole in holes {
            if hole.len() < 3 {
                return Err(RegionError::TooFewHolePoints { actual: hole.len() }.into());
            }
        }

        let polygon = Polygon::new(
            LineString::from(exterior.to_vec()),
            holes.iter().map(|hole| LineString::from(hole.clone())).collect(),
        );
        debug!(
            points = exterior.len(),
            holes = holes.len(),
            "constructed 2D region"
        );
        Ok(Self {
            shape: RegionShape::Area(polygon),
            name: None,
        })
    }

    /// Attaches a human-readable name to the region.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The region's name, or `"Un-named region"` when none was given.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_REGION_NAME)
    }

    /// Dimensionality of the region: 1 for polylines/loops, 2 for polygons.
    #[must_use]
    pub fn dimensions(&self) -> usize {
        match self.shape {
            RegionShape::Line(_) | RegionShape::Loop(_) => 1,
            RegionShape::Area(_) => 2,
        }
    }

    /// Whether the region is closed: polygons always are, a 1D region is
    /// closed when its first point equals its last.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        !matches!(self.shape, RegionShape::Line(_))
    }

    /// The (x, y) points defining the region.
    ///
    /// For polygons these are the exterior boundary coordinates; the closing
    /// duplicate point is included for closed geometries.
    #[must_use]
    pub fn coords(&self) -> Vec<(f64, f64)> {
        self.defining_line().coords().map(|c| (c.x, c.y)).collect()
    }

    /// Number of interior holes (always 0 for 1D regions).
    #[must_use]
    pub fn hole_count(&self) -> usize {
        match &self.shape {
            RegionShape::Area(polygon) => polygon.interiors().len(),
            _ => 0,
        }
    }

    fn defining_line(&self) -> &LineString<f64> {
        match &self.shape {
            RegionShape::Line(line) | RegionShape::Loop(line) => line,
            RegionShape::Area(polygon) => polygon.exterior(),
        }
    }

    /// Rejects boundary-only queries where no boundary exists.
    fn boundary_supported(&self, boundary_only: bool) -> Result<()> {
        if boundary_only && matches!(self.shape, RegionShape::Loop(_)) {
            return Err(RegionError::ClosedLoopBoundary.into());
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Single-point queries
    // -------------------------------------------------------------------------

    /// Whether `position` (`[x, y]` or `[x, y, z]`, z ignored) lies in the
    /// region.
    ///
    /// With `include_boundary`, containment at every level of the boundary
    /// hierarchy is unioned in: a polygon's rings, then an open polyline's
    /// endpoints, until no further boundary exists.
    ///
    /// # Errors
    ///
    /// Returns an error when `position` does not have 2 or 3 coordinates.
    pub fn contains_point(&self, position: &[f64], include_boundary: bool) -> Result<bool> {
        let point = point_from(position)?;
        Ok(self.contains_xy(point, include_boundary))
    }

    /// Euclidean distance from `point` to the region (or its boundary).
    ///
    /// Zero for points belonging to the region, unless `boundary_only`.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed points, or for a boundary-only query
    /// against a closed loop.
    pub fn distance_to(&self, point: &[f64], boundary_only: bool) -> Result<f64> {
        self.boundary_supported(boundary_only)?;
        let point = point_from(point)?;
        Ok(self.distance_xy(point, boundary_only))
    }

    /// Coordinates of the region (or boundary) point closest to `position`.
    ///
    /// # Errors
    ///
    /// See [`distance_to`](Self::distance_to).
    pub fn nearest_point_to(&self, position: &[f64], boundary_only: bool) -> Result<[f64; 2]> {
        self.boundary_supported(boundary_only)?;
        let point = point_from(position)?;
        let nearest = self.nearest_xy(point, boundary_only);
        Ok([nearest.x(), nearest.y()])
    }

    /// The approach vector: from `point` towards the nearest region (or
    /// boundary) point.
    ///
    /// With `unit`, the vector is normalized to length 1 — except the zero
    /// vector, which is returned as-is rather than divided by zero.
    ///
    /// # Errors
    ///
    /// See [`distance_to`](Self::distance_to).
    pub fn approach_vector(
        &self,
        point: &[f64],
        boundary_only: bool,
        unit: bool,
    ) -> Result<[f64; 2]> {
        self.boundary_supported(boundary_only)?;
        let point = point_from(point)?;
        Ok(self.approach_xy(point, boundary_only, unit))
    }

    // -------------------------------------------------------------------------
    // Broadcast queries
    // -------------------------------------------------------------------------

    /// [`contains_point`](Self::contains_point) broadcast over every spatial
    /// lane of `positions` (trailing axis of length 2 or 3).
    ///
    /// # Errors
    ///
    /// Returns an error when the trailing axis is not a spatial axis.
    pub fn contains_points(
        &self,
        positions: &ArrayD<f64>,
        include_boundary: bool,
    ) -> Result<ArrayD<bool>> {
        Ok(map_points_to_scalar(positions, |p| {
            self.contains_xy(Point::new(p[0], p[1]), include_boundary)
        })?)
    }

    /// [`distance_to`](Self::distance_to) broadcast over every spatial lane.
    ///
    /// # Errors
    ///
    /// As for [`contains_points`](Self::contains_points), plus the closed-loop
    /// boundary restriction.
    pub fn distances_to(&self, positions: &ArrayD<f64>, boundary_only: bool) -> Result<ArrayD<f64>> {
        self.boundary_supported(boundary_only)?;
        Ok(map_points_to_scalar(positions, |p| {
            self.distance_xy(Point::new(p[0], p[1]), boundary_only)
        })?)
    }

    /// [`nearest_point_to`](Self::nearest_point_to) broadcast over every
    /// spatial lane; the output gains a trailing axis of length 2.
    ///
    /// # Errors
    ///
    /// As for [`distances_to`](Self::distances_to).
    pub fn nearest_points_to(
        &self,
        positions: &ArrayD<f64>,
        boundary_only: bool,
    ) -> Result<ArrayD<f64>> {
        self.boundary_supported(boundary_only)?;
        Ok(map_points_to_vector(positions, 2, |p| {
            let nearest = self.nearest_xy(Point::new(p[0], p[1]), boundary_only);
            vec![nearest.x(), nearest.y()]
        })?)
    }

    /// [`approach_vector`](Self::approach_vector) broadcast over every
    /// spatial lane; the output gains a trailing axis of length 2.
    ///
    /// # Errors
    ///
    /// As for [`distances_to`](Self::distances_to).
    pub fn approach_vectors(
        &self,
        positions: &ArrayD<f64>,
        boundary_only: bool,
        unit: bool,
    ) -> Result<ArrayD<f64>> {
        self.boundary_supported(boundary_only)?;
        Ok(map_points_to_vector(positions, 2, |p| {
            self.approach_xy(Point::new(p[0], p[1]), boundary_only, unit).to_vec()
        })?)
    }

    // -------------------------------------------------------------------------
    // Keypoint-centroid queries and angles
    // -------------------------------------------------------------------------

    /// Evaluates a vector-valued query from the centroid of the named
    /// keypoints, per frame and individual.
    ///
    /// Position data is averaged over the selected keypoints (a no-op for a
    /// single keypoint) and the query chosen by `query` is applied to each
    /// centroid. Output is `[frame, individual, 2]` with the trailing axis
    /// holding x, y components.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown keypoints, non-2D position data, or the
    /// closed-loop boundary restriction.
    pub fn vector_from_centroid(
        &self,
        data: &PoseDataset,
        keypoints: &[&str],
        query: CentroidQuery,
    ) -> Result<Array3<f64>> {
        self.boundary_supported(query.boundary_only())?;
        let centroid = keypoint_centroid(data, keypoints)?;

        let vectors = map_points_to_vector(&centroid.into_dyn(), 2, |p| {
            let point = Point::new(p[0], p[1]);
            match query {
                CentroidQuery::ApproachVector { boundary_only, unit } => {
                    self.approach_xy(point, boundary_only, unit).to_vec()
                }
                CentroidQuery::NearestPoint { boundary_only } => {
                    let nearest = self.nearest_xy(point, boundary_only);
                    vec![nearest.x(), nearest.y()]
                }
            }
        })?;
        vectors
            .into_dimensionality::<Ix3>()
            .map_err(|e| RoiError::Internal {
                message: format!("centroid query output should be [frame, individual, 2]: {e}"),
            })
    }

    /// The allocentric angle: signed angle between the approach vector and a
    /// world-fixed reference vector, per frame and individual.
    ///
    /// The approach vector runs from the centroid of `position_keypoints` to
    /// the region. `angle_rotates` picks the left operand of the rotation;
    /// the two choices produce angles of opposite sign. `reference_vector`
    /// defaults to `(1, 0)`. Output is `[frame, individual]`, in degrees
    /// unless `in_radians`.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown keypoints, non-2D position data, or the
    /// closed-loop boundary restriction.
    pub fn allocentric_angle(
        &self,
        data: &PoseDataset,
        position_keypoints: &[&str],
        angle_rotates: AngleRotation,
        boundary_only: bool,
        in_radians: bool,
        reference_vector: Option<[f64; 2]>,
    ) -> Result<Array2<f64>> {
        let reference = reference_vector.unwrap_or([1.0, 0.0]);
        let approach = self.vector_from_centroid(
            data,
            position_keypoints,
            CentroidQuery::ApproachVector {
                boundary_only,
                unit: false,
            },
        )?;

        let reference = ArrayD::from_shape_vec(IxDyn(&[2]), reference.to_vec())
            .map_err(|e| RoiError::Internal {
                message: format!("reference vector should have 2 components: {e}"),
            })?;
        let angles = signed_angle_2d(
            &approach.into_dyn(),
            &reference,
            angle_rotates == AngleRotation::RefToApproach,
        )?;
        let mut angles = angles.into_dimensionality::<Ix2>().map_err(|e| {
            RoiError::Internal {
                message: format!("angle field should be [frame, individual]: {e}"),
            }
        })?;
        if !in_radians {
            angles.mapv_inplace(f64::to_degrees);
        }
        Ok(angles)
    }

    /// The egocentric angle: signed angle between the approach vector and
    /// the individual's forward-facing direction, per frame and individual.
    ///
    /// The forward vector is derived from `left_keypoint`, `right_keypoint`
    /// and `camera_view` (see [`crate::kinematics::forward_vector`]); the
    /// approach vector starts at the centroid of `position_keypoints`, which
    /// defaults to the midpoint of the left/right pair. Output is
    /// `[frame, individual]`, in degrees unless `in_radians`.
    ///
    /// # Errors
    ///
    /// As for [`allocentric_angle`](Self::allocentric_angle).
    #[allow(clippy::too_many_arguments)]
    pub fn egocentric_angle(
        &self,
        data: &PoseDataset,
        left_keypoint: &str,
        right_keypoint: &str,
        angle_rotates: EgocentricRotation,
        boundary_only: bool,
        camera_view: CameraView,
        in_radians: bool,
        position_keypoints: Option<&[&str]>,
    ) -> Result<Array2<f64>> {
        let default_keypoints = [left_keypoint, right_keypoint];
        let keypoints = position_keypoints.unwrap_or(&default_keypoints);

        let approach = self.vector_from_centroid(
            data,
            keypoints,
            CentroidQuery::ApproachVector {
                boundary_only,
                unit: false,
            },
        )?;

        // Same rotation, expressed in the vocabulary of the forward-vector
        // primitive: the approach vector plays the reference role there.
        let rotation = match angle_rotates {
            EgocentricRotation::ApproachToForward => ForwardRotation::RefToForward,
            EgocentricRotation::ForwardToApproach => ForwardRotation::ForwardToRef,
        };
        forward_vector_angle(
            data,
            left_keypoint,
            right_keypoint,
            &approach.into_dyn(),
            camera_view,
            in_radians,
            rotation,
        )
    }

    // -------------------------------------------------------------------------
    // Geometry internals
    // -------------------------------------------------------------------------

    fn contains_xy(&self, point: Point<f64>, include_boundary: bool) -> bool {
        match &self.shape {
            RegionShape::Area(polygon) => {
                let inside = polygon.contains(&point);
                if include_boundary {
                    inside
                        || polygon.exterior().intersects(&point)
                        || polygon.interiors().iter().any(|ring| ring.intersects(&point))
                } else {
                    inside
                }
            }
            // A closed curve has an empty boundary: every on-curve point is
            // interior, regardless of the flag.
            RegionShape::Loop(ring) => ring.intersects(&point),
            RegionShape::Line(line) => {
                let on_line = line.intersects(&point);
                if include_boundary {
                    on_line
                } else {
                    on_line && !is_endpoint(line, point)
                }
            }
        }
    }

    fn distance_xy(&self, point: Point<f64>, boundary_only: bool) -> f64 {
        if !boundary_only && self.contains_xy(point, true) {
            return 0.0;
        }
        point.euclidean_distance(&self.nearest_xy(point, boundary_only))
    }

    fn nearest_xy(&self, point: Point<f64>, boundary_only: bool) -> Point<f64> {
        match &self.shape {
            RegionShape::Area(polygon) => {
                if !boundary_only && self.contains_xy(point, true) {
                    return point;
                }
                let mut best = point;
                let mut best_distance = f64::INFINITY;
                for ring in once(polygon.exterior()).chain(polygon.interiors().iter()) {
                    if let Some(candidate) = closest_on_line(ring, point) {
                        let distance = point.euclidean_distance(&candidate);
                        if distance < best_distance {
                            best = candidate;
                            best_distance = distance;
                        }
                    }
                }
                best
            }
            // boundary_only is rejected upfront for loops.
            RegionShape::Loop(ring) => closest_on_line(ring, point).unwrap_or(point),
            RegionShape::Line(line) => {
                if boundary_only {
                    nearest_endpoint(line, point)
                } else {
                    closest_on_line(line, point).unwrap_or(point)
                }
            }
        }
    }

    fn approach_xy(&self, point: Point<f64>, boundary_only: bool, unit: bool) -> [f64; 2] {
        let nearest = self.nearest_xy(point, boundary_only);
        let mut vx = nearest.x() - point.x();
        let mut vy = nearest.y() - point.y();
        if unit {
            let norm = (vx * vx + vy * vy).sqrt();
            // The zero vector cannot be normalized.
            if norm > ZERO_NORM_TOLERANCE {
                vx /= norm;
                vy /= norm;
            }
        }
        [vx, vy]
    }
}

impl fmt::Display for RegionOfInterest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coords = self.coords();
        let segments = coords.len().saturating_sub(1);
        let kind = if self.dimensions() == 2 {
            "-gon"
        } else {
            " line segment(s)"
        };
        writeln!(f, "RegionOfInterest {} ({segments}{kind})", self.name())?;
        let chain = coords
            .iter()
            .map(|(x, y)| format!("({x}, {y})"))
            .collect::<Vec<_>>()
            .join(" -> ");
        write!(f, "{chain}")
    }
}

/// Which vector-valued query [`RegionOfInterest::vector_from_centroid`]
/// evaluates.
///
/// A closed enumeration: only the listed queries can be selected, there is no
/// dispatch on free-form method names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CentroidQuery {
    /// Approach vector from the centroid to the region
    ApproachVector {
        /// Restrict the query to the region's boundary
        boundary_only: bool,
        /// Normalize the result to unit length (zero vectors excepted)
        unit: bool,
    },
    /// Nearest region point to the centroid
    NearestPoint {
        /// Restrict the query to the region's boundary
        boundary_only: bool,
    },
}

impl CentroidQuery {
    fn boundary_only(self) -> bool {
        match self {
            Self::ApproachVector { boundary_only, .. } | Self::NearestPoint { boundary_only } => {
                boundary_only
            }
        }
    }
}

/// Operand order for the allocentric angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AngleRotation {
    /// Rotate from the approach vector onto the reference vector
    #[default]
    ApproachToRef,
    /// Rotate from the reference vector onto the approach vector
    RefToApproach,
}

impl FromStr for AngleRotation {
    type Err = AngleError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "approach to ref" => Ok(Self::ApproachToRef),
            "ref to approach" => Ok(Self::RefToApproach),
            other => Err(AngleError::UnknownConvention {
                kind: "angle convention",
                value: other.to_string(),
            }),
        }
    }
}

/// Operand order for the egocentric angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EgocentricRotation {
    /// Rotate from the approach vector onto the forward vector
    #[default]
    ApproachToForward,
    /// Rotate from the forward vector onto the approach vector
    ForwardToApproach,
}

impl FromStr for EgocentricRotation {
    type Err = AngleError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "approach to forward" => Ok(Self::ApproachToForward),
            "forward to approach" => Ok(Self::ForwardToApproach),
            other => Err(AngleError::UnknownConvention {
                kind: "angle convention",
                value: other.to_string(),
            }),
        }
    }
}

fn point_from(position: &[f64]) -> std::result::Result<Point<f64>, RegionError> {
    match position.len() {
        // The geometry backend is planar; a third coordinate is accepted and
        // ignored.
        2 | 3 => Ok(Point::new(position[0], position[1])),
        n => Err(RegionError::PointDimensions { actual: n }),
    }
}

fn closest_on_line(line: &LineString<f64>, point: Point<f64>) -> Option<Point<f64>> {
    match line.closest_point(&point) {
        Closest::Intersection(p) | Closest::SinglePoint(p) => Some(p),
        Closest::Indeterminate => None,
    }
}

fn is_endpoint(line: &LineString<f64>, point: Point<f64>) -> bool {
    line.0.first().is_some_and(|c| Point::from(*c) == point)
        || line.0.last().is_some_and(|c| Point::from(*c) == point)
}

fn nearest_endpoint(line: &LineString<f64>, point: Point<f64>) -> Point<f64> {
    let first = Point::from(line.0[0]);
    let last = Point::from(line.0[line.0.len() - 1]);
    if point.euclidean_distance(&first) <= point.euclidean_distance(&last) {
        first
    } else {
        last
    }
}

/// Averages position data over the named keypoints, yielding
/// `[frame, individual, 2]`.
fn keypoint_centroid(data: &PoseDataset, keypoints: &[&str]) -> Result<Array3<f64>> {
    if keypoints.is_empty() {
        return Err(RoiError::EmptyKeypointSelection);
    }
    if data.space_dimensions() != 2 {
        return Err(RoiError::SpaceDimensions {
            actual: data.space_dimensions(),
        });
    }

    let mut indices = Vec::with_capacity(keypoints.len());
    for name in keypoints {
        indices.push(
            data.keypoint_index(name)
                .ok_or_else(|| RoiError::KeypointNotFound {
                    name: (*name).to_string(),
                })?,
        );
    }

    let position = data.position();
    let mut centroid =
        Array3::<f64>::zeros((data.frame_count(), data.individual_count(), 2));
    for &index in &indices {
        centroid += &position.index_axis(Axis(2), index);
    }
    centroid /= indices.len() as f64;
    Ok(centroid)
}
