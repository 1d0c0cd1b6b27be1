//! Broadcasting of single-point operations over position arrays.
//!
//! Geometry queries are defined on one spatial point at a time, while
//! tracking data carries arbitrary leading axes (time, individuals,
//! keypoints) ahead of a trailing spatial axis of length 2 or 3. The helpers
//! here apply a point operation independently across every spatial lane and
//! stack the results back into an array with the same leading shape —
//! explicit higher-order functions, not reflection or macros.

use ndarray::{ArrayD, Axis, IxDyn};
use thiserror::Error;

/// Errors raised while broadcasting a point operation over an array.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BroadcastError {
    /// The input array has no axes at all
    #[error("Cannot broadcast over a 0-dimensional array")]
    ScalarInput,

    /// The trailing (spatial) axis has an unsupported length
    #[error("Expected the spatial axis to have length 2 or 3, but got {actual}")]
    SpatialAxisSize {
        /// Actual trailing axis length
        actual: usize,
    },

    /// A vector-valued operation produced the wrong number of components
    #[error("Expected the operation to produce {expected} components, but got {actual}")]
    VectorLength {
        /// Expected component count
        expected: usize,
        /// Actual component count
        actual: usize,
    },

    /// The broadcast results could not be assembled into an array
    #[error("Failed to assemble broadcast result: {0}")]
    Assemble(#[from] ndarray::ShapeError),
}

fn spatial_axis_len(positions: &ArrayD<f64>) -> Result<usize, BroadcastError> {
    if positions.ndim() == 0 {
        return Err(BroadcastError::ScalarInput);
    }
    let len = positions.shape()[positions.ndim() - 1];
    if len != 2 && len != 3 {
        return Err(BroadcastError::SpatialAxisSize { actual: len });
    }
    Ok(len)
}

/// Applies a scalar-valued point operation to every spatial lane.
///
/// The trailing axis of `positions` must have length 2 or 3; `op` receives
/// each lane as a slice of that length. The output drops the spatial axis and
/// keeps the leading shape (a 1-dimensional input yields a 0-dimensional
/// result).
///
/// # Errors
///
/// Returns [`BroadcastError`] when `positions` has no axes or its trailing
/// axis is not of length 2 or 3.
pub fn map_points_to_scalar<T, F>(
    positions: &ArrayD<f64>,
    mut op: F,
) -> Result<ArrayD<T>, BroadcastError>
where
    F: FnMut(&[f64]) -> T,
{
    let spatial = spatial_axis_len(positions)?;
    let lane_axis = Axis(positions.ndim() - 1);

    let mut results = Vec::with_capacity(positions.len() / spatial);
    let mut lane_buf = [0.0_f64; 3];
    for lane in positions.lanes(lane_axis) {
        for (slot, value) in lane_buf.iter_mut().zip(lane.iter()) {
            *slot = *value;
        }
        results.push(op(&lane_buf[..spatial]));
    }

    let leading = &positions.shape()[..positions.ndim() - 1];
    Ok(ArrayD::from_shape_vec(IxDyn(leading), results)?)
}

/// Applies a vector-valued point operation to every spatial lane.
///
/// Like [`map_points_to_scalar`], but `op` returns `out_len` components per
/// lane and the output gains a new trailing axis of that length.
///
/// # Errors
///
/// Returns [`BroadcastError`] when the input is rejected (see
/// [`map_points_to_scalar`]) or when `op` returns a vector whose length is
/// not `out_len`.
pub fn map_points_to_vector<F>(
    positions: &ArrayD<f64>,
    out_len: usize,
    mut op: F,
) -> Result<ArrayD<f64>, BroadcastError>
where
    F: FnMut(&[f64]) -> Vec<f64>,
{
    let spatial = spatial_axis_len(positions)?;
    let lane_axis = Axis(positions.ndim() - 1);

    let mut components = Vec::with_capacity((positions.len() / spatial) * out_len);
    let mut lane_buf = [0.0_f64; 3];
    for lane in positions.lanes(lane_axis) {
        for (slot, value) in lane_buf.iter_mut().zip(lane.iter()) {
            *slot = *value;
        }
        let result = op(&lane_buf[..spatial]);
        if result.len() != out_len {
            return Err(BroadcastError::VectorLength {
                expected: out_len,
                actual: result.len(),
            });
        }
        components.extend_from_slice(&result);
    }

    let mut out_shape: Vec<usize> = positions.shape()[..positions.ndim() - 1].to_vec();
    out_shape.push(out_len);
    Ok(ArrayD::from_shape_vec(IxDyn(&out_shape), components)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, Array};

    #[test]
    fn test_scalar_broadcast_keeps_leading_shape() {
        let positions = Array::from_shape_fn((4, 2, 3, 2), |(f, i, k, s)| {
            (f + i + k + s) as f64
        })
        .into_dyn();
        let sums = map_points_to_scalar(&positions, |p| p[0] + p[1]).unwrap();
        assert_eq!(sums.shape(), &[4, 2, 3]);
        assert_eq!(sums[[0, 0, 0]], 1.0);
        assert_eq!(sums[[3, 1, 2]], 13.0);
    }

    #[test]
    fn test_single_point_yields_zero_dim_result() {
        let point = arr1(&[3.0, 4.0]).into_dyn();
        let norm = map_points_to_scalar(&point, |p| (p[0] * p[0] + p[1] * p[1]).sqrt()).unwrap();
        assert_eq!(norm.ndim(), 0);
        assert_eq!(norm.first().copied(), Some(5.0));
    }

    #[test]
    fn test_three_coordinate_lanes_are_passed_whole() {
        let positions = Array::from_elem((2, 3), 1.0).into_dyn();
        let lens = map_points_to_scalar(&positions, |p| p.len()).unwrap();
        assert!(lens.iter().all(|&l| l == 3));
    }

    #[test]
    fn test_vector_broadcast_appends_axis() {
        let positions = Array::zeros((5, 2)).into_dyn();
        let flipped = map_points_to_vector(&positions, 2, |p| vec![p[1], p[0]]).unwrap();
        assert_eq!(flipped.shape(), &[5, 2]);

        let positions = Array::zeros((5, 3, 2)).into_dyn();
        let flipped = map_points_to_vector(&positions, 2, |p| vec![p[1], p[0]]).unwrap();
        assert_eq!(flipped.shape(), &[5, 3, 2]);
    }

    #[test]
    fn test_rejects_bad_spatial_axis() {
        let positions = Array::zeros((5, 4)).into_dyn();
        assert!(matches!(
            map_points_to_scalar(&positions, |_| 0.0),
            Err(BroadcastError::SpatialAxisSize { actual: 4 })
        ));

        let scalar = Array::from_elem(IxDyn(&[]), 1.0);
        assert!(matches!(
            map_points_to_scalar(&scalar, |_| 0.0),
            Err(BroadcastError::ScalarInput)
        ));
    }

    #[test]
    fn test_vector_length_mismatch_is_reported() {
        let positions = Array::zeros((2, 2)).into_dyn();
        assert!(matches!(
            map_points_to_vector(&positions, 2, |_| vec![0.0]),
            Err(BroadcastError::VectorLength { expected: 2, actual: 1 })
        ));
    }
}
