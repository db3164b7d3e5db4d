use weather_graph::api::detect_trend_changes;

#[test]
fn monotonic_series_has_no_trend_changes() {
    let rising: Vec<f64> = (0..24).map(f64::from).collect();
    assert!(detect_trend_changes(&rising, 3).iter().all(|flag| !flag));

    let falling: Vec<f64> = rising.iter().rev().copied().collect();
    assert!(detect_trend_changes(&falling, 3).iter().all(|flag| !flag));
}

#[test]
fn endpoints_are_never_flagged() {
    let flags = detect_trend_changes(&[5.0, 1.0, 5.0, 1.0, 5.0], 1);
    assert!(!flags[0]);
    assert!(!flags[4]);
    assert_eq!(flags, vec![false, true, true, true, false]);
}

#[test]
fn flags_are_throttled_by_min_distance() {
    let zigzag = [0.0, 3.0, 0.0, 3.0, 0.0, 3.0, 0.0, 3.0, 0.0];
    let flags = detect_trend_changes(&zigzag, 3);
    let flagged: Vec<usize> = flags
        .iter()
        .enumerate()
        .filter(|(_, flag)| **flag)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(flagged, vec![1, 4, 7]);
}

#[test]
fn flat_run_is_not_a_trend_change() {
    assert!(detect_trend_changes(&[2.0, 2.0, 2.0, 2.0], 0).iter().all(|flag| !flag));
}
