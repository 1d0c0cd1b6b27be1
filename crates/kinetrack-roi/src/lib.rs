//! # kinetrack-roi
//!
//! Region-of-interest geometry for animal-tracking data.
//!
//! This crate answers spatial questions about tracked positions relative to
//! named 1D/2D regions (arena walls, nest sites, odor ports):
//!
//! - **Regions**: [`RegionOfInterest`] wraps a polyline, loop, or polygon
//!   (with optional holes) and keeps it immutable for its whole lifetime.
//! - **Queries**: containment, distance, nearest point, and approach vector,
//!   on single points or broadcast across the time/individual/keypoint axes
//!   of a position array.
//! - **Angles**: allocentric (approach vector vs. a world-fixed reference)
//!   and egocentric (approach vector vs. an individual's forward direction)
//!   signed angles over a validated [`PoseDataset`](kinetrack_core::PoseDataset).
//! - **Utilities**: explicit broadcasting helpers and signed-angle/vector
//!   primitives shared by the above.
//!
//! # Example
//!
//! ```rust
//! use kinetrack_roi::RegionOfInterest;
//!
//! let nest = RegionOfInterest::polygon(
//!     &[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)],
//!     &[],
//! )
//! .unwrap()
//! .with_name("nest");
//!
//! assert!(nest.contains_point(&[5.0, 5.0], true).unwrap());
//! assert_eq!(nest.approach_vector(&[-5.0, 5.0], false, true).unwrap(), [1.0, 0.0]);
//! ```

#![forbid(unsafe_code)]

pub mod broadcast;
pub mod kinematics;
pub mod region;
pub mod vector;

// Re-export main types for convenience
pub use broadcast::{map_points_to_scalar, map_points_to_vector, BroadcastError};
pub use kinematics::{forward_vector, forward_vector_angle, CameraView, ForwardRotation};
pub use region::{
    AngleRotation, CentroidQuery, EgocentricRotation, RegionError, RegionOfInterest,
    DEFAULT_REGION_NAME,
};
pub use vector::{magnitude, normalize, signed_angle_2d, AngleError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common result type for region-of-interest operations
pub type Result<T> = std::result::Result<T, RoiError>;

/// Unified error type for region-of-interest operations
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RoiError {
    /// Region construction or query error
    #[error("Region error: {0}")]
    Region(#[from] region::RegionError),

    /// Broadcasting error
    #[error("Broadcast error: {0}")]
    Broadcast(#[from] broadcast::BroadcastError),

    /// Angle/vector computation error
    #[error("Angle error: {0}")]
    Angle(#[from] vector::AngleError),

    /// A keypoint name is not present in the dataset
    #[error("Keypoint '{name}' is not present in the dataset")]
    KeypointNotFound {
        /// The unknown keypoint name
        name: String,
    },

    /// A keypoint selection was empty
    #[error("At least one keypoint is required")]
    EmptyKeypointSelection,

    /// The dataset does not hold 2D positions
    #[error("Expected position data with 2 spatial coordinates, but got {actual}")]
    SpaceDimensions {
        /// Actual spatial axis length
        actual: usize,
    },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::kinematics::{CameraView, ForwardRotation};
    pub use crate::region::{
        AngleRotation, CentroidQuery, EgocentricRotation, RegionOfInterest,
    };
    pub use crate::{Result, RoiError};
}
