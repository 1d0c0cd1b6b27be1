//! Forward-vector kinematics for tracked individuals.
//!
//! An individual's heading is derived from two bilaterally symmetric
//! keypoints (for example the ears): the forward vector is perpendicular to
//! the left↔right axis, pointing away from the body midline in the direction
//! of travel implied by the camera view. The egocentric angle computation
//! uses these vectors as its rotating reference frame.

use std::str::FromStr;

use ndarray::{Array2, Array3, ArrayD, Ix2};
use serde::{Deserialize, Serialize};

use kinetrack_core::PoseDataset;

use crate::vector::{signed_angle_2d, AngleError, ZERO_NORM_TOLERANCE};
use crate::{Result, RoiError};

/// Where the camera sits relative to the tracked plane.
///
/// The view decides which perpendicular of the left↔right axis counts as
/// "forward": seen from above, the image y-axis points down, so the two views
/// are mirror images of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CameraView {
    /// Camera above the individuals, looking down
    #[default]
    TopDown,
    /// Camera below the individuals, looking up
    BottomUp,
}

impl FromStr for CameraView {
    type Err = AngleError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "top_down" => Ok(Self::TopDown),
            "bottom_up" => Ok(Self::BottomUp),
            other => Err(AngleError::UnknownConvention {
                kind: "camera view",
                value: other.to_string(),
            }),
        }
    }
}

/// Which operand of the forward-vector angle is the left operand of the
/// rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ForwardRotation {
    /// Rotate from the forward vector onto the reference vector
    #[default]
    ForwardToRef,
    /// Rotate from the reference vector onto the forward vector
    RefToForward,
}

impl FromStr for ForwardRotation {
    type Err = AngleError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "forward to ref" => Ok(Self::ForwardToRef),
            "ref to forward" => Ok(Self::RefToForward),
            other => Err(AngleError::UnknownConvention {
                kind: "angle convention",
                value: other.to_string(),
            }),
        }
    }
}

/// Computes per-frame, per-individual unit forward vectors.
///
/// With `r = left − right` (the vector from the right keypoint to the left
/// keypoint), the forward vector is `(r_y, −r_x)` under a top-down view and
/// `(−r_y, r_x)` under a bottom-up view, normalized to unit length. Frames
/// where the two keypoints coincide produce the zero vector, which is left
/// unnormalized.
///
/// # Errors
///
/// Returns an error when the dataset does not hold 2D positions or a
/// keypoint name is unknown.
pub fn forward_vector(
    data: &PoseDataset,
    left_keypoint: &str,
    right_keypoint: &str,
    camera_view: CameraView,
) -> Result<Array3<f64>> {
    if data.space_dimensions() != 2 {
        return Err(RoiError::SpaceDimensions {
            actual: data.space_dimensions(),
        });
    }
    let left = data
        .keypoint_index(left_keypoint)
        .ok_or_else(|| RoiError::KeypointNotFound {
            name: left_keypoint.to_string(),
        })?;
    let right = data
        .keypoint_index(right_keypoint)
        .ok_or_else(|| RoiError::KeypointNotFound {
            name: right_keypoint.to_string(),
        })?;

    let position = data.position();
    let frames = data.frame_count();
    let individuals = data.individual_count();

    let mut forward = Array3::<f64>::zeros((frames, individuals, 2));
    for f in 0..frames {
        for i in 0..individuals {
            let rx = position[[f, i, left, 0]] - position[[f, i, right, 0]];
            let ry = position[[f, i, left, 1]] - position[[f, i, right, 1]];
            let (fx, fy) = match camera_view {
                CameraView::TopDown => (ry, -rx),
                CameraView::BottomUp => (-ry, rx),
            };
            let norm = (fx * fx + fy * fy).sqrt();
            if norm > ZERO_NORM_TOLERANCE {
                forward[[f, i, 0]] = fx / norm;
                forward[[f, i, 1]] = fy / norm;
            } else {
                forward[[f, i, 0]] = fx;
                forward[[f, i, 1]] = fy;
            }
        }
    }
    Ok(forward)
}

/// Computes the signed angle between the forward vectors and a reference.
///
/// `reference_vectors` is either a single vector (shape `[2]`) or a field
/// matching `[frame, individual, 2]`. The rotation operand order follows
/// `rotation`; output is `[frame, individual]`, in degrees unless
/// `in_radians`.
///
/// # Errors
///
/// Returns an error when the forward vectors cannot be computed (see
/// [`forward_vector`]) or the reference shape is incompatible.
pub fn forward_vector_angle(
    data: &PoseDataset,
    left_keypoint: &str,
    right_keypoint: &str,
    reference_vectors: &ArrayD<f64>,
    camera_view: CameraView,
    in_radians: bool,
    rotation: ForwardRotation,
) -> Result<Array2<f64>> {
    let forward = forward_vector(data, left_keypoint, right_keypoint, camera_view)?;

    let angles = signed_angle_2d(
        &forward.into_dyn(),
        reference_vectors,
        rotation == ForwardRotation::RefToForward,
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
