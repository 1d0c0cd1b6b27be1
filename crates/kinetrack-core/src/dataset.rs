//! Validated datasets for pose and bounding-box tracking data.
//!
//! Raw arrays from third-party trackers arrive with loose guarantees. The
//! builders in this module run every structural and value check eagerly and
//! hand back an immutable dataset whose invariants downstream code can rely
//! on without re-validation:
//!
//! - [`PoseDataset`]: positions per frame/individual/keypoint, shape
//!   `[frame, individual, keypoint, space(2|3)]`.
//! - [`BboxesDataset`]: bounding-box centroids and extents, trailing axis
//!   fixed at 2.
//!
//! Construction is two-phase: a builder collects the raw inputs untouched,
//! then `build()` validates them and fills in the documented defaults
//! (NaN confidence, generated names), emitting a warning for every value it
//! substitutes.
//!
//! # Example
//!
//! ```rust
//! use kinetrack_core::PoseDataset;
//! use ndarray::Array;
//!
//! let position = Array::zeros((10, 2, 3, 2)).into_dyn();
//! let ds = PoseDataset::builder()
//!     .position(position)
//!     .individual_names(vec!["a", "b"])
//!     .fps(30.0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(ds.keypoint_names(), ["keypoint_0", "keypoint_1", "keypoint_2"]);
//! assert!(ds.confidence().iter().all(|c| c.is_nan()));
//! ```

use ndarray::{Array3, Array4, ArrayD, Ix3, Ix4};
use serde::Serialize;
use tracing::warn;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::names::{
    default_bbox_names, default_individual_names, default_keypoint_names, parse_bbox_id, NameList,
};
use crate::{BBOX_SPATIAL_DIMS, LIGHTNING_POSE, POSE_ARRAY_NDIM};

/// Returns `fps` unchanged when it is a positive, finite number.
///
/// Anything else is reset to `None` with a warning; an unusable frame rate is
/// never an error.
fn normalize_fps(fps: Option<f64>) -> Option<f64> {
    match fps {
        Some(value) if value.is_finite() && value > 0.0 => Some(value),
        Some(value) => {
            warn!(
                fps = value,
                "Invalid fps value. Expected a positive number. Setting fps to None."
            );
            None
        }
        None => None,
    }
}

fn validate_name_count(
    field: &'static str,
    names: &[String],
    expected: usize,
) -> Result<(), ValidationError> {
    if names.len() != expected {
        return Err(ValidationError::NameCount {
            field,
            expected,
            actual: names.len(),
        });
    }
    Ok(())
}

fn validate_confidence_shape(
    confidence: &ArrayD<f64>,
    position_shape: &[usize],
) -> Result<(), ValidationError> {
    let expected = &position_shape[..position_shape.len() - 1];
    if confidence.shape() != expected {
        return Err(ValidationError::ShapeMismatch {
            field: "confidence",
            expected: expected.to_vec(),
            actual: confidence.shape().to_vec(),
        });
    }
    Ok(())
}

fn default_confidence(position_shape: &[usize]) -> ArrayD<f64> {
    warn!("Confidence array was not provided. Setting to an array of NaNs.");
    ArrayD::from_elem(&position_shape[..position_shape.len() - 1], f64::NAN)
}

// =============================================================================
// Pose dataset
// =============================================================================

/// A validated pose-tracking dataset.
///
/// Immutable after construction: the arrays and labels can be read but never
/// modified, so every consumer observes the invariants established by
/// [`PoseDatasetBuilder::build`].
#[derive(Debug, Clone, Serialize)]
pub struct PoseDataset {
    position: Array4<f64>,
    confidence: Array3<f64>,
    individual_names: Vec<String>,
    keypoint_names: Vec<String>,
    fps: Option<f64>,
    source_software: Option<String>,
}

impl PoseDataset {
    /// Creates a builder for a pose dataset.
    #[must_use]
    pub fn builder() -> PoseDatasetBuilder {
        PoseDatasetBuilder::default()
    }

    /// Position array `[frame, individual, keypoint, space]`.
    #[must_use]
    pub fn position(&self) -> &Array4<f64> {
        &self.position
    }

    /// Confidence array `[frame, individual, keypoint]`.
    #[must_use]
    pub fn confidence(&self) -> &Array3<f64> {
        &self.confidence
    }

    /// Ordered individual labels, one per entry of axis 1.
    #[must_use]
    pub fn individual_names(&self) -> &[String] {
        &self.individual_names
    }

    /// Ordered keypoint labels, one per entry of axis 2.
    #[must_use]
    pub fn keypoint_names(&self) -> &[String] {
        &self.keypoint_names
    }

    /// Frames per second of the source video, when known.
    #[must_use]
    pub fn fps(&self) -> Option<f64> {
        self.fps
    }

    /// Provenance tag of the tracking software, when known.
    #[must_use]
    pub fn source_software(&self) -> Option<&str> {
        self.source_software.as_deref()
    }

    /// Number of frames (axis 0).
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.position.shape()[0]
    }

    /// Number of tracked individuals (axis 1).
    #[must_use]
    pub fn individual_count(&self) -> usize {
        self.position.shape()[1]
    }

    /// Number of keypoints per individual (axis 2).
    #[must_use]
    pub fn keypoint_count(&self) -> usize {
        self.position.shape()[2]
    }

    /// Number of spatial coordinates (axis 3): 2 or 3.
    #[must_use]
    pub fn space_dimensions(&self) -> usize {
        self.position.shape()[3]
    }

    /// Index of the named individual along axis 1.
    #[must_use]
    pub fn individual_index(&self, name: &str) -> Option<usize> {
        self.individual_names.iter().position(|n| n == name)
    }

    /// Index of the named keypoint along axis 2.
    #[must_use]
    pub fn keypoint_index(&self, name: &str) -> Option<usize> {
        self.keypoint_names.iter().position(|n| n == name)
    }
}

/// Builder holding raw, unvalidated pose inputs.
///
/// All checks run in [`build`](Self::build); nothing is validated while the
/// builder is being populated.
#[derive(Debug, Default)]
pub struct PoseDatasetBuilder {
    position: Option<ArrayD<f64>>,
    confidence: Option<ArrayD<f64>>,
    individual_names: Option<NameList>,
    keypoint_names: Option<NameList>,
    fps: Option<f64>,
    source_software: Option<String>,
}

impl PoseDatasetBuilder {
    /// Sets the position array `[frame, individual, keypoint, space]`.
    #[must_use]
    pub fn position(mut self, position: ArrayD<f64>) -> Self {
        self.position = Some(position);
        self
    }

    /// Sets the point-wise confidence array `[frame, individual, keypoint]`.
    #[must_use]
    pub fn confidence(mut self, confidence: ArrayD<f64>) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Sets the individual labels.
    #[must_use]
    pub fn individual_names(mut self, names: impl Into<NameList>) -> Self {
        self.individual_names = Some(names.into());
        self
    }

    /// Sets the keypoint labels.
    #[must_use]
    pub fn keypoint_names(mut self, names: impl Into<NameList>) -> Self {
        self.keypoint_names = Some(names.into());
        self
    }

    /// Sets the frame rate of the source video.
    #[must_use]
    pub fn fps(mut self, fps: f64) -> Self {
        self.fps = Some(fps);
        self
    }

    /// Sets the provenance tag of the tracking software.
    #[must_use]
    pub fn source_software(mut self, source_software: impl Into<String>) -> Self {
        self.source_software = Some(source_software.into());
        self
    }

    /// Validates the collected inputs and finalizes the dataset.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] wrapped in [`CoreError`] when:
    ///
    /// - `position` is missing, does not have exactly 4 dimensions, or its
    ///   trailing axis is not of length 2 or 3;
    /// - `confidence` is given and its shape is not `position.shape()[..3]`;
    /// - a resolved name list does not match the corresponding axis length
    ///   (for `source_software == "LightningPose"`, exactly one individual
    ///   name is required).
    pub fn build(self) -> CoreResult<PoseDataset> {
        let position = self
            .position
            .ok_or(ValidationError::MissingField { field: "position" })?;

        if position.ndim() != POSE_ARRAY_NDIM {
            return Err(ValidationError::WrongDimensions {
                field: "position",
                expected: POSE_ARRAY_NDIM,
                actual: position.ndim(),
            }
            .into());
        }
        let space = position.shape()[POSE_ARRAY_NDIM - 1];
        if space != 2 && space != 3 {
            return Err(ValidationError::SpatialAxis {
                field: "position",
                expected: "2 or 3",
                actual: space,
            }
            .into());
        }

        if let Some(confidence) = &self.confidence {
            validate_confidence_shape(confidence, position.shape())?;
        }

        let individual_count = position.shape()[1];
        let keypoint_count = position.shape()[2];

        // LightningPose output is single-animal; a multi-name list is a
        // caller mistake rather than something to silently truncate.
        let expected_individuals = if self.source_software.as_deref() == Some(LIGHTNING_POSE) {
            1
        } else {
            individual_count
        };

        let individual_names = match self.individual_names {
            Some(names) => {
                let names = names.into_names("individual_names");
                validate_name_count("individual_names", &names, expected_individuals)?;
                names
            }
            None => {
                let names = default_individual_names(expected_individuals);
                warn!(
                    names = ?names,
                    "Individual names were not provided. Setting to defaults."
                );
                names
            }
        };

        let keypoint_names = match self.keypoint_names {
            Some(names) => {
                let names = names.into_names("keypoint_names");
                validate_name_count("keypoint_names", &names, keypoint_count)?;
                names
            }
            None => {
                let names = default_keypoint_names(keypoint_count);
                warn!(
                    names = ?names,
                    "Keypoint names were not provided. Setting to defaults."
                );
                names
            }
        };

        let confidence = match self.confidence {
            Some(confidence) => confidence,
            None => default_confidence(position.shape()),
        };

        let position = position
            .into_dimensionality::<Ix4>()
            .map_err(|e| CoreError::internal(format!("position rank already checked: {e}")))?;
        let confidence = confidence
            .into_dimensionality::<Ix3>()
            .map_err(|e| CoreError::internal(format!("confidence rank already checked: {e}")))?;

        Ok(PoseDataset {
            position,
            confidence,
            individual_names,
            keypoint_names,
            fps: normalize_fps(self.fps),
            source_software: self.source_software,
        })
    }
}

// =============================================================================
// Bounding-box dataset
// =============================================================================

/// A validated bounding-box tracking dataset.
///
/// `position` holds centroids and `shape` holds width/height extents; both
/// carry a trailing spatial axis of exactly 2. The remaining rank is
/// deliberately unconstrained.
#[derive(Debug, Clone, Serialize)]
pub struct BboxesDataset {
    position: ArrayD<f64>,
    shape: ArrayD<f64>,
    confidence: ArrayD<f64>,
    individual_names: Vec<String>,
    fps: Option<f64>,
    source_software: Option<String>,
}

impl BboxesDataset {
    /// Creates a builder for a bounding-box dataset.
    #[must_use]
    pub fn builder() -> BboxesDatasetBuilder {
        BboxesDatasetBuilder::default()
    }

    /// Centroid array, trailing axis `[x, y]`.
    #[must_use]
    pub fn position(&self) -> &ArrayD<f64> {
        &self.position
    }

    /// Extent array, trailing axis `[width, height]`.
    #[must_use]
    pub fn shape(&self) -> &ArrayD<f64> {
        &self.shape
    }

    /// Confidence array matching `position.shape()[..-1]`.
    #[must_use]
    pub fn confidence(&self) -> &ArrayD<f64> {
        &self.confidence
    }

    /// Ordered identity labels, each of the form `id_<N>`.
    #[must_use]
    pub fn individual_names(&self) -> &[String] {
        &self.individual_names
    }

    /// The integers extracted from the identity labels, in order.
    #[must_use]
    pub fn individual_ids(&self) -> Vec<u64> {
        self.individual_names
            .iter()
            .filter_map(|name| parse_bbox_id(name))
            .collect()
    }

    /// Frames per second of the source video, when known.
    #[must_use]
    pub fn fps(&self) -> Option<f64> {
        self.fps
    }

    /// Provenance tag of the tracking software, when known.
    #[must_use]
    pub fn source_software(&self) -> Option<&str> {
        self.source_software.as_deref()
    }

    /// Number of frames (axis 0).
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.position.shape()[0]
    }

    /// Number of tracked boxes (axis 1).
    #[must_use]
    pub fn individual_count(&self) -> usize {
        self.position.shape()[1]
    }

    /// Index of the named identity along axis 1.
    #[must_use]
    pub fn individual_index(&self, name: &str) -> Option<usize> {
        self.individual_names.iter().position(|n| n == name)
    }
}

/// Builder holding raw, unvalidated bounding-box inputs.
#[derive(Debug, Default)]
pub struct BboxesDatasetBuilder {
    position: Option<ArrayD<f64>>,
    shape: Option<ArrayD<f64>>,
    confidence: Option<ArrayD<f64>>,
    individual_names: Option<NameList>,
    fps: Option<f64>,
    source_software: Option<String>,
}

impl BboxesDatasetBuilder {
    /// Sets the centroid array, trailing axis `[x, y]`.
    #[must_use]
    pub fn position(mut self, position: ArrayD<f64>) -> Self {
        self.position = Some(position);
        self
    }

    /// Sets the extent array, trailing axis `[width, height]`.
    #[must_use]
    pub fn shape(mut self, shape: ArrayD<f64>) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Sets the box-wise confidence array.
    #[must_use]
    pub fn confidence(mut self, confidence: ArrayD<f64>) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Sets the identity labels (`id_<N>` each).
    #[must_use]
    pub fn individual_names(mut self, names: impl Into<NameList>) -> Self {
        self.individual_names = Some(names.into());
        self
    }

    /// Sets the frame rate of the source video.
    #[must_use]
    pub fn fps(mut self, fps: f64) -> Self {
        self.fps = Some(fps);
        self
    }

    /// Sets the provenance tag of the tracking software.
    #[must_use]
    pub fn source_software(mut self, source_software: impl Into<String>) -> Self {
        self.source_software = Some(source_software.into());
        self
    }

    /// Validates the collected inputs and finalizes the dataset.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] wrapped in [`CoreError`] when:
    ///
    /// - `position` or `shape` is missing, has fewer than 2 dimensions, or
    ///   its trailing axis is not of length exactly 2;
    /// - `confidence` is given and its shape is not `position.shape()[..-1]`;
    /// - the identity count does not match `position.shape()[1]`, the
    ///   identities are not pairwise unique, or any identity does not fully
    ///   match `id_<integer>`.
    pub fn build(self) -> CoreResult<BboxesDataset> {
        let position = self
            .position
            .ok_or(ValidationError::MissingField { field: "position" })?;
        let shape = self
            .shape
            .ok_or(ValidationError::MissingField { field: "shape" })?;

        for (field, array) in [("position", &position), ("shape", &shape)] {
            // The individual axis (1) must exist; beyond that the leading
            // rank is unconstrained.
            if array.ndim() < 2 {
                return Err(ValidationError::WrongDimensions {
                    field,
                    expected: 2,
                    actual: array.ndim(),
                }
                .into());
            }
            let trailing = array.shape()[array.ndim() - 1];
            if trailing != BBOX_SPATIAL_DIMS {
                return Err(ValidationError::SpatialAxis {
                    field,
                    expected: "2",
                    actual: trailing,
                }
                .into());
            }
        }

        if let Some(confidence) = &self.confidence {
            validate_confidence_shape(confidence, position.shape())?;
        }

        let individual_count = position.shape()[1];
        let individual_names = match self.individual_names {
            Some(names) => {
                let names = names.into_names("individual_names");
                validate_name_count("individual_names", &names, individual_count)?;
                validate_bbox_names(&names)?;
                names
            }
            None => {
                let names = default_bbox_names(individual_count);
                warn!(
                    names = ?names,
                    "Individual names for the bounding boxes were not provided. \
                     Setting to 1-based IDs."
                );
                names
            }
        };

        let confidence = match self.confidence {
            Some(confidence) => confidence,
            None => default_confidence(position.shape()),
        };

        Ok(BboxesDataset {
            position,
            shape,
            confidence,
            individual_names,
            fps: normalize_fps(self.fps),
            source_software: self.source_software,
        })
    }
}

fn validate_bbox_names(names: &[String]) -> Result<(), ValidationError> {
    let unique: std::collections::HashSet<&String> = names.iter().collect();
    if unique.len() != names.len() {
        return Err(ValidationError::DuplicateNames {
            field: "individual_names",
            total: names.len(),
            unique: unique.len(),
        });
    }
    for name in names {
        if parse_bbox_id(name).is_none() {
            return Err(ValidationError::MalformedId { name: name.clone() });
        }
    }
    Ok(())
}
