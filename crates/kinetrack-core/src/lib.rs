//! # kinetrack-core
//!
//! Validated dataset model for animal-tracking data.
//!
//! Pose estimation and tracking tools (DeepLabCut, SLEAP, LightningPose,
//! VIA-tracks and friends) export loosely structured arrays. This crate turns
//! those raw arrays into datasets with guaranteed invariants:
//!
//! - **[`PoseDataset`]**: positions shaped
//!   `[frame, individual, keypoint, space(2|3)]`, confidence scores shaped
//!   `[frame, individual, keypoint]`, and matching name lists.
//!
//! - **[`BboxesDataset`]**: bounding-box centroids and width/height extents
//!   with a trailing spatial axis of exactly 2 and unique `id_<N>`
//!   identities.
//!
//! - **Error types**: eager, descriptive validation failures via the
//!   [`error`] module; recoverable anomalies (missing confidence, missing
//!   names, invalid fps) are corrected with defaults and a logged warning
//!   instead of failing.
//!
//! Downstream consumers (kinematics, region-of-interest queries, plotting)
//! can rely on these invariants without re-validating.
//!
//! ## Example
//!
//! ```rust
//! use kinetrack_core::PoseDataset;
//! use ndarray::Array;
//!
//! let position = Array::zeros((100, 1, 4, 2)).into_dyn();
//! let ds = PoseDataset::builder()
//!     .position(position)
//!     .keypoint_names(vec!["snout", "left_ear", "right_ear", "tail_base"])
//!     .fps(50.0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(ds.frame_count(), 100);
//! assert_eq!(ds.keypoint_index("snout"), Some(0));
//! ```

#![forbid(unsafe_code)]

pub mod dataset;
pub mod error;
pub mod names;

// Re-export commonly used types at the crate root
pub use dataset::{BboxesDataset, BboxesDatasetBuilder, PoseDataset, PoseDatasetBuilder};
pub use error::{CoreError, CoreResult, ValidationError};
pub use names::{parse_bbox_id, NameList};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Required rank of a pose position array: frame, individual, keypoint, space
pub const POSE_ARRAY_NDIM: usize = 4;

/// Required trailing axis length for bounding-box arrays
pub const BBOX_SPATIAL_DIMS: usize = 2;

/// Source-software tag that restricts a dataset to a single individual
pub const LIGHTNING_POSE: &str = "LightningPose";

/// Prelude module for convenient imports.
///
/// ```rust
/// use kinetrack_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::dataset::{BboxesDataset, PoseDataset};
    pub use crate::error::{CoreError, CoreResult, ValidationError};
    pub use crate::names::NameList;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_valid() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_constants() {
        assert_eq!(POSE_ARRAY_NDIM, 4);
        assert_eq!(BBOX_SPATIAL_DIMS, 2);
        assert_eq!(LIGHTNING_POSE, "LightningPose");
    }
}
