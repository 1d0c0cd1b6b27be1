//! End-to-end tests for region-of-interest geometry against tracked data.
//!
//! These exercise the full pipeline: validated pose datasets in, broadcast
//! containment/distance queries and signed angles out.

use approx::assert_relative_eq;
use ndarray::{Array, ArrayD};

use kinetrack_core::PoseDataset;
use kinetrack_roi::{
    AngleRotation, CameraView, CentroidQuery, EgocentricRotation, RegionOfInterest,
};

fn unit_square() -> RegionOfInterest {
    RegionOfInterest::polygon(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)], &[])
        .unwrap()
        .with_name("arena")
}

/// One individual, two ear keypoints, positions chosen per frame.
///
/// `ears` lists (left, right) coordinate pairs, one entry per frame.
fn ear_dataset(ears: &[((f64, f64), (f64, f64))]) -> PoseDataset {
    let mut position = Array::zeros((ears.len(), 1, 2, 2));
    for (f, (left, right)) in ears.iter().enumerate() {
        position[[f, 0, 0, 0]] = left.0;
        position[[f, 0, 0, 1]] = left.1;
        position[[f, 0, 1, 0]] = right.0;
        position[[f, 0, 1, 1]] = right.1;
    }
    PoseDataset::builder()
        .position(position.into_dyn())
        .keypoint_names(vec!["left_ear", "right_ear"])
        .individual_names(vec!["subject"])
        .fps(30.0)
        .build()
        .unwrap()
}

#[test]
fn occupancy_over_a_full_position_array() {
    let square = unit_square();

    // [frame, individual, keypoint, space]: one tracked point per frame,
    // stepping from outside the arena to inside it.
    let mut position: ArrayD<f64> = Array::zeros((4, 1, 1, 2)).into_dyn();
    for (f, x) in [-5.0, 0.0, 5.0, 15.0].into_iter().enumerate() {
        position[[f, 0, 0, 0]] = x;
        position[[f, 0, 0, 1]] = 5.0;
    }

    let inside = square.contains_points(&position, true).unwrap();
    assert_eq!(inside.shape(), &[4, 1, 1]);
    assert!(!inside[[0, 0, 0]]);
    assert!(inside[[1, 0, 0]]); // on the left edge
    assert!(inside[[2, 0, 0]]);
    assert!(!inside[[3, 0, 0]]);

    // Excluding the boundary flips only the edge frame.
    let strict = square.contains_points(&position, false).unwrap();
    assert!(!strict[[1, 0, 0]]);

    let distances = square.distances_to(&position, false).unwrap();
    assert_relative_eq!(distances[[0, 0, 0]], 5.0, epsilon = 1e-9);
    assert_relative_eq!(distances[[2, 0, 0]], 0.0, epsilon = 1e-9);
    assert_relative_eq!(distances[[3, 0, 0]], 5.0, epsilon = 1e-9);
}

#[test]
fn approach_vectors_broadcast_with_trailing_axis() {
    let square = unit_square();

    let mut position: ArrayD<f64> = Array::zeros((2, 1, 1, 2)).into_dyn();
    position[[0, 0, 0, 0]] = -5.0;
    position[[0, 0, 0, 1]] = 5.0;
    position[[1, 0, 0, 0]] = 5.0;
    position[[1, 0, 0, 1]] = 5.0;

    let vectors = square.approach_vectors(&position, false, true).unwrap();
    assert_eq!(vectors.shape(), &[2, 1, 1, 2]);
    assert_relative_eq!(vectors[[0, 0, 0, 0]], 1.0, epsilon = 1e-9);
    assert_relative_eq!(vectors[[0, 0, 0, 1]], 0.0, epsilon = 1e-9);
    // Interior point: zero vector survives the unit flag untouched.
    assert_eq!(vectors[[1, 0, 0, 0]], 0.0);
    assert_eq!(vectors[[1, 0, 0, 1]], 0.0);
}

#[test]
fn allocentric_angle_conventions_are_negatives() {
    let square = unit_square();
    // Frame 0: due west of the arena; frame 1: due south of it.
    let data = ear_dataset(&[
        ((-5.0, 5.0), (-5.0, 5.0)),
        ((5.0, -5.0), (5.0, -5.0)),
    ]);

    let approach_to_ref = square
        .allocentric_angle(
            &data,
            &["left_ear"],
            AngleRotation::ApproachToRef,
            false,
            false,
            None,
        )
        .unwrap();
    let ref_to_approach = square
        .allocentric_angle(
            &data,
            &["left_ear"],
            AngleRotation::RefToApproach,
            false,
            false,
            None,
        )
        .unwrap();

    assert_eq!(approach_to_ref.shape(), &[2, 1]);
    // Approach vector (1, 0) is aligned with the default reference.
    assert_relative_eq!(approach_to_ref[[0, 0]], 0.0, epsilon = 1e-9);
    // Approach vector (0, 1) sits a quarter turn counter-clockwise of it.
    assert_relative_eq!(approach_to_ref[[1, 0]], -90.0, epsilon = 1e-9);

    for f in 0..2 {
        assert_relative_eq!(approach_to_ref[[f, 0]], -ref_to_approach[[f, 0]], epsilon = 1e-9);
    }
}

#[test]
fn allocentric_angle_in_radians_and_custom_reference() {
    let square = unit_square();
    let data = ear_dataset(&[((-5.0, 5.0), (-5.0, 5.0))]);

    let radians = square
        .allocentric_angle(
            &data,
            &["left_ear"],
            AngleRotation::ApproachToRef,
            false,
            true,
            Some([0.0, 1.0]),
        )
        .unwrap();
    // Approach (1, 0) to reference (0, 1): quarter turn counter-clockwise.
    assert_relative_eq!(radians[[0, 0]], std::f64::consts::FRAC_PI_2, epsilon = 1e-9);
}

#[test]
fn egocentric_angle_zero_when_facing_the_region() {
    let square = unit_square();
    // Ears straddle the midline at x = -5; the animal faces +x, straight at
    // the arena.
    let data = ear_dataset(&[((-5.0, 6.0), (-5.0, 4.0))]);

    let facing = square
        .egocentric_angle(
            &data,
            "left_ear",
            "right_ear",
            EgocentricRotation::ApproachToForward,
            false,
            CameraView::TopDown,
            false,
            None,
        )
        .unwrap();
    assert_eq!(facing.shape(), &[1, 1]);
    assert_relative_eq!(facing[[0, 0]], 0.0, epsilon = 1e-9);

    // Seen from below, the same ears mean the animal faces away: the
    // approach vector now sits half a turn from the forward vector.
    let away = square
        .egocentric_angle(
            &data,
            "left_ear",
            "right_ear",
            EgocentricRotation::ApproachToForward,
            false,
            CameraView::BottomUp,
            false,
            None,
        )
        .unwrap();
    assert_relative_eq!(away[[0, 0]].abs(), 180.0, epsilon = 1e-9);
}

#[test]
fn egocentric_rotation_conventions_are_negatives() {
    let square = unit_square();
    // Animal south of the arena, facing +x: the approach vector (0, 1) is a
    // quarter turn off the forward vector (1, 0).
    let data = ear_dataset(&[((5.0, -4.0), (5.0, -6.0))]);

    let a2f = square
        .egocentric_angle(
            &data,
            "left_ear",
            "right_ear",
            EgocentricRotation::ApproachToForward,
            false,
            CameraView::TopDown,
            false,
            None,
        )
        .unwrap();
    let f2a = square
        .egocentric_angle(
            &data,
            "left_ear",
            "right_ear",
            EgocentricRotation::ForwardToApproach,
            false,
            CameraView::TopDown,
            false,
            None,
        )
        .unwrap();

    assert_relative_eq!(a2f[[0, 0]], -f2a[[0, 0]], epsilon = 1e-9);
    assert_relative_eq!(a2f[[0, 0]].abs(), 90.0, epsilon = 1e-9);
}

#[test]
fn centroid_query_averages_keypoints() {
    let square = unit_square();
    // Ears 2 apart, centroid at (-5, 5).
    let data = ear_dataset(&[((-5.0, 6.0), (-5.0, 4.0))]);

    let vectors = square
        .vector_from_centroid(
            &data,
            &["left_ear", "right_ear"],
            CentroidQuery::ApproachVector {
                boundary_only: false,
                unit: false,
            },
        )
        .unwrap();
    assert_eq!(vectors.shape(), &[1, 1, 2]);
    assert_relative_eq!(vectors[[0, 0, 0]], 5.0, epsilon = 1e-9);
    assert_relative_eq!(vectors[[0, 0, 1]], 0.0, epsilon = 1e-9);

    let nearest = square
        .vector_from_centroid(
            &data,
            &["left_ear", "right_ear"],
            CentroidQuery::NearestPoint {
                boundary_only: false,
            },
        )
        .unwrap();
    assert_relative_eq!(nearest[[0, 0, 0]], 0.0, epsilon = 1e-9);
    assert_relative_eq!(nearest[[0, 0, 1]], 5.0, epsilon = 1e-9);
}

#[test]
fn unknown_keypoints_and_conventions_fail_descriptively() {
    let square = unit_square();
    let data = ear_dataset(&[((-5.0, 5.0), (-5.0, 5.0))]);

    let err = square
        .allocentric_angle(
            &data,
            &["tail"],
            AngleRotation::ApproachToRef,
            false,
            false,
            None,
        )
        .unwrap_err();
    assert!(err.to_string().contains("'tail'"));

    let err = "widdershins".parse::<AngleRotation>().unwrap_err();
    assert!(err.to_string().contains("'widdershins'"));
}

#[test]
fn boundary_distance_matches_known_square() {
    let square = unit_square();
    assert_relative_eq!(square.distance_to(&[5.0, 5.0], true).unwrap(), 5.0, epsilon = 1e-9);
    assert_relative_eq!(square.distance_to(&[5.0, 1.0], true).unwrap(), 1.0, epsilon = 1e-9);
    assert_relative_eq!(square.distance_to(&[12.0, 5.0], true).unwrap(), 2.0, epsilon = 1e-9);
}
