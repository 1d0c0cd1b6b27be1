//! Validation behavior exercised through the public API, the way a file
//! loader would drive it.

use kinetrack_core::prelude::*;
use ndarray::Array;

#[test]
fn loader_roundtrip_for_poses() {
    // A SLEAP-style export: 50 frames, 2 animals, 3 keypoints, 2D.
    let position = Array::from_shape_fn((50, 2, 3, 2), |(f, i, k, s)| {
        f as f64 + 0.1 * i as f64 + 0.01 * k as f64 + 0.001 * s as f64
    })
    .into_dyn();
    let confidence = Array::from_elem((50, 2, 3), 0.9).into_dyn();

    let ds = PoseDataset::builder()
        .position(position)
        .confidence(confidence)
        .individual_names(vec!["animal_a", "animal_b"])
        .keypoint_names(vec!["snout", "centroid", "tail_base"])
        .fps(25.0)
        .source_software("SLEAP")
        .build()
        .unwrap();

    assert_eq!(ds.frame_count(), 50);
    assert_eq!(ds.individual_count(), 2);
    assert_eq!(ds.keypoint_count(), 3);
    assert_eq!(ds.space_dimensions(), 2);
    assert_eq!(ds.fps(), Some(25.0));
    assert_eq!(ds.source_software(), Some("SLEAP"));
    assert_eq!(ds.individual_index("animal_b"), Some(1));
    assert_eq!(ds.keypoint_index("tail_base"), Some(2));
    assert_eq!(ds.keypoint_index("nose"), None);
}

#[test]
fn poses_structural_errors_fire_before_value_errors() {
    // Wrong rank is reported even though the names would also be wrong.
    let err = PoseDataset::builder()
        .position(Array::zeros((50, 2, 2)).into_dyn())
        .individual_names(vec!["only_one"])
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        CoreError::Validation(ValidationError::WrongDimensions { .. })
    ));
}

#[test]
fn poses_confidence_defaults_to_nan_of_leading_shape() {
    let ds = PoseDataset::builder()
        .position(Array::zeros((7, 3, 4, 3)).into_dyn())
        .build()
        .unwrap();
    assert_eq!(ds.confidence().shape(), &[7, 3, 4]);
    assert!(ds.confidence().iter().all(|c| c.is_nan()));
}

#[test]
fn bboxes_loader_roundtrip() {
    let ds = BboxesDataset::builder()
        .position(Array::zeros((20, 2, 2)).into_dyn())
        .shape(Array::ones((20, 2, 2)).into_dyn())
        .individual_names(vec!["id_1", "id_2"])
        .source_software("VIA-tracks")
        .build()
        .unwrap();

    assert_eq!(ds.individual_ids(), vec![1, 2]);
    assert_eq!(ds.individual_index("id_2"), Some(1));
    assert_eq!(ds.frame_count(), 20);
}

#[test]
fn bboxes_reject_malformed_and_duplicate_identities() {
    let build = |names: Vec<&str>| {
        BboxesDataset::builder()
            .position(Array::zeros((5, 2, 2)).into_dyn())
            .shape(Array::ones((5, 2, 2)).into_dyn())
            .individual_names(names)
            .build()
    };

    assert!(matches!(
        build(vec!["id_1", "id_1"]).unwrap_err(),
        CoreError::Validation(ValidationError::DuplicateNames { .. })
    ));
    assert!(matches!(
        build(vec!["id_1", "box_2"]).unwrap_err(),
        CoreError::Validation(ValidationError::MalformedId { .. })
    ));
    assert!(build(vec!["id_1", "id_2"]).is_ok());
}

#[test]
fn name_list_accepts_many_input_shapes() {
    let owned: NameList = vec!["a".to_string(), "b".to_string()].into();
    let borrowed: NameList = vec!["a", "b"].into();
    assert_eq!(owned, borrowed);

    // A bare string is a valid (coerced) input for a single-individual set.
    let ds = PoseDataset::builder()
        .position(Array::zeros((5, 1, 1, 2)).into_dyn())
        .individual_names("solo")
        .build()
        .unwrap();
    assert_eq!(ds.individual_names(), ["solo"]);
}
