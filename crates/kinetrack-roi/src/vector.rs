//! Signed-angle and vector-field utilities.
//!
//! These primitives operate on arrays whose trailing axis holds 2D vector
//! components, broadcasting across any leading axes. They back the
//! allocentric/egocentric angle computations and share a single sign
//! convention: a positive angle rotates the left operand counter-clockwise
//! onto the right operand.

use ndarray::{ArrayD, Axis, IxDyn};
use thiserror::Error;

/// Norm below which a vector is treated as the zero vector.
///
/// The zero vector cannot be normalized and has no direction; operations
/// leave it untouched rather than dividing by (almost) zero.
pub const ZERO_NORM_TOLERANCE: f64 = 1e-8;

/// Errors raised by the angle/vector utilities.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AngleError {
    /// The input array has no axes at all
    #[error("Cannot operate on a 0-dimensional array")]
    ScalarInput,

    /// The trailing (component) axis does not hold 2D vectors
    #[error("Expected the last axis to have length 2, but got {actual}")]
    ComponentAxis {
        /// Actual trailing axis length
        actual: usize,
    },

    /// The two vector fields cannot be broadcast against each other
    #[error("Vector fields have incompatible shapes: {left:?} vs {right:?}")]
    ShapeMismatch {
        /// Shape of the left operand
        left: Vec<usize>,
        /// Shape of the right operand
        right: Vec<usize>,
    },

    /// A rotation convention or camera view string was not recognized
    #[error("Unknown {kind}: '{value}'")]
    UnknownConvention {
        /// What was being parsed ("angle convention" or "camera view")
        kind: &'static str,
        /// The offending input
        value: String,
    },
}

fn check_components(vectors: &ArrayD<f64>) -> Result<(), AngleError> {
    if vectors.ndim() == 0 {
        return Err(AngleError::ScalarInput);
    }
    let len = vectors.shape()[vectors.ndim() - 1];
    if len != 2 {
        return Err(AngleError::ComponentAxis { actual: len });
    }
    Ok(())
}

/// Computes the signed angle between two 2D vector fields, in radians.
///
/// For each pair of vectors the result is `atan2(u × v, u · v)`: positive
/// when `v` lies counter-clockwise of `u`, i.e. with `u` as the left operand
/// of the rotation. Passing `v_as_left_operand = true` makes `v` the left
/// operand instead, which negates every angle.
///
/// `v` may either match `u`'s shape exactly or be a single vector (shape
/// `[2]`) applied across all of `u`'s leading axes. Angles involving a zero
/// vector come out as 0, never NaN.
///
/// # Errors
///
/// Returns [`AngleError`] when either trailing axis is not of length 2 or
/// the shapes are otherwise incompatible.
pub fn signed_angle_2d(
    u: &ArrayD<f64>,
    v: &ArrayD<f64>,
    v_as_left_operand: bool,
) -> Result<ArrayD<f64>, AngleError> {
    check_components(u)?;
    check_components(v)?;

    let sign = if v_as_left_operand { -1.0 } else { 1.0 };
    let angle = |(ux, uy): (f64, f64), (vx, vy): (f64, f64)| {
        let cross = ux * vy - uy * vx;
        let dot = ux * vx + uy * vy;
        sign * cross.atan2(dot)
    };

    let lane_axis = Axis(u.ndim() - 1);
    let leading = &u.shape()[..u.ndim() - 1];
    let mut angles = Vec::with_capacity(u.len() / 2);

    if v.ndim() == 1 {
        let fixed = (v[[0]], v[[1]]);
        for lane in u.lanes(lane_axis) {
            angles.push(angle((lane[0], lane[1]), fixed));
        }
    } else {
        if v.shape() != u.shape() {
            return Err(AngleError::ShapeMismatch {
                left: u.shape().to_vec(),
                right: v.shape().to_vec(),
            });
        }
        for (u_lane, v_lane) in u.lanes(lane_axis).into_iter().zip(v.lanes(lane_axis)) {
            angles.push(angle((u_lane[0], u_lane[1]), (v_lane[0], v_lane[1])));
        }
    }

    ArrayD::from_shape_vec(IxDyn(leading), angles).map_err(|_| AngleError::ShapeMismatch {
        left: u.shape().to_vec(),
        right: v.shape().to_vec(),
    })
}

/// Computes the Euclidean norm over the trailing component axis.
///
/// # Errors
///
/// Returns [`AngleError::ScalarInput`] for a 0-dimensional input.
pub fn magnitude(vectors: &ArrayD<f64>) -> Result<ArrayD<f64>, AngleError> {
    if vectors.ndim() == 0 {
        return Err(AngleError::ScalarInput);
    }
    let lane_axis = Axis(vectors.ndim() - 1);
    Ok((vectors * vectors).sum_axis(lane_axis).mapv(f64::sqrt))
}

/// Scales every vector in the field to unit length.
///
/// Vectors with norm below [`ZERO_NORM_TOLERANCE`] are left as they are.
///
/// # Errors
///
/// Returns [`AngleError::ScalarInput`] for a 0-dimensional input.
pub fn normalize(vectors: &ArrayD<f64>) -> Result<ArrayD<f64>, AngleError> {
    if vectors.ndim() == 0 {
        return Err(AngleError::ScalarInput);
    }
    let lane_axis = Axis(vectors.ndim() - 1);
    let mut out = vectors.clone();
    for mut lane in out.lanes_mut(lane_axis) {
        let norm = lane.iter().map(|c| c * c).sum::<f64>().sqrt();
        if norm > ZERO_NORM_TOLERANCE {
            lane.mapv_inplace(|c| c / norm);
        }
    }
    Ok(out)
}
