use super::*;

fn ordered(markers: &Markers) -> bool {
    markers.positions().windows(2).all(|w| w[0] <= w[1])
}

#[test]
fn seeds_evenly_including_endpoints() {
    let markers = Markers::new(6, 100.0);
    let expected = [0.0, 20.0, 40.0, 60.0, 80.0, 100.0];
    for (pos, want) in markers.positions().iter().zip(expected) {
        assert!((pos - want).abs() < 1e-9, "expected {want}, got {pos}");
    }
}

#[test]
fn minimum_of_two_markers() {
    let markers = Markers::new(0, 50.0);
    assert!(!markers.is_empty());
    assert_eq!(markers.len(), 2);
    assert!((markers.positions()[1] - 50.0).abs() < 1e-9);
}

#[test]
fn hit_window_is_asymmetric() {
    let mut markers = Markers::new(6, 100.0);
    markers.seed(vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    // Window around 40 is [36, 46].
    assert_eq!(markers.hit_test(36.0), Some(2));
    assert_eq!(markers.hit_test(46.0), Some(2));
    assert_eq!(markers.hit_test(35.9), None);
    assert_eq!(markers.hit_test(46.1), None);
}

#[test]
fn hit_test_returns_first_match() {
    let mut markers = Markers::new(3, 100.0);
    // Overlapping windows: both 50 and 53 cover pixel 49.
    markers.seed(vec![50.0, 53.0, 100.0]);
    assert_eq!(markers.hit_test(49.0), Some(0));
}

#[test]
fn begin_drag_captures_one_marker() {
    let mut markers = Markers::new(6, 100.0);
    assert_eq!(markers.begin_drag(20.0), Some(1));
    // A second press elsewhere does not steal the capture.
    assert_eq!(markers.begin_drag(60.0), Some(1));
    markers.end_drag();
    assert_eq!(markers.active(), None);
    markers.end_drag(); // idempotent
    assert_eq!(markers.active(), None);
    assert_eq!(markers.begin_drag(60.0), Some(3));
}

#[test]
fn move_rejected_at_right_neighbor() {
    // Marker at 40, neighbors 20 and 60: candidate 60 must be rejected,
    // 59.999 accepted.
    let mut markers = Markers::new(6, 100.0);
    markers.seed(vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    assert!(!markers.try_move(2, 60.0));
    assert!((markers.positions()[2] - 40.0).abs() < 1e-9, "rejection must not move");
    assert!(markers.try_move(2, 59.999));
    assert!((markers.positions()[2] - 59.999).abs() < 1e-9);
}

#[test]
fn move_rejected_at_left_neighbor() {
    let mut markers = Markers::new(6, 100.0);
    markers.seed(vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    assert!(!markers.try_move(2, 20.0));
    assert!(!markers.try_move(2, 15.0));
    assert!(markers.try_move(2, 20.001));
}

#[test]
fn first_marker_bounded_by_domain_floor() {
    let mut markers = Markers::new(6, 100.0);
    markers.seed(vec![5.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    assert!(!markers.try_move(0, 0.0));
    assert!(!markers.try_move(0, -1.0));
    assert!(markers.try_move(0, 0.5));
}

#[test]
fn last_marker_bounded_by_width() {
    let mut markers = Markers::new(6, 100.0);
    markers.seed(vec![0.0, 20.0, 40.0, 60.0, 80.0, 95.0]);
    assert!(!markers.try_move(5, 100.0));
    assert!(!markers.try_move(5, 120.0));
    assert!(markers.try_move(5, 99.9));
}

#[test]
fn out_of_range_index_rejected() {
    let mut markers = Markers::new(6, 100.0);
    assert!(!markers.try_move(6, 50.0));
}

#[test]
fn ordering_holds_after_any_move_sequence() {
    let mut markers = Markers::new(6, 100.0);
    let attempts = [
        (2, 59.0),
        (2, 61.0),
        (0, 19.5),
        (4, 99.5),
        (5, 99.4),
        (1, 19.4),
        (3, 3.0),
        (3, 59.4),
        (2, -10.0),
    ];
    for (index, candidate) in attempts {
        markers.try_move(index, candidate);
        assert!(
            ordered(&markers),
            "ordering broken after move({index}, {candidate}): {:?}",
            markers.positions()
        );
    }
}

#[test]
fn rescale_is_proportional() {
    let mut markers = Markers::new(6, 100.0);
    markers.try_move(2, 50.0);
    markers.rescale(200.0);
    assert!((markers.positions()[2] - 100.0).abs() < 1e-9);
    assert!((markers.positions()[5] - 200.0).abs() < 1e-9);
    assert!((markers.width() - 200.0).abs() < 1e-9);
    assert!(ordered(&markers));
}

#[test]
fn rescale_from_degenerate_width_reseeds() {
    let mut markers = Markers::new(6, 0.0);
    markers.rescale(100.0);
    assert!((markers.positions()[0]).abs() < 1e-9);
    assert!((markers.positions()[5] - 100.0).abs() < 1e-9);
    assert!(ordered(&markers));
}

#[test]
fn scores_convert_through_scale() {
    let scale = Scale::new(50.0, 100.0);
    let markers = Markers::new(6, 100.0);
    let scores = markers.scores(&scale);
    let expected = [0.0, 10.0, 20.0, 30.0, 40.0, 50.0];
    for (score, want) in scores.iter().zip(expected) {
        assert!((score - want).abs() < 1e-9, "expected {want}, got {score}");
    }
}
