use weather_graph::interaction::{ColumnSnapshot, nearest_column};

#[test]
fn empty_columns_resolve_to_none() {
    assert_eq!(nearest_column(&[], 10.0), None);
    assert_eq!(ColumnSnapshot::default().nearest(10.0), None);
}

#[test]
fn single_column_always_wins() {
    assert_eq!(nearest_column(&[42.0], -1_000.0), Some(0));
    assert_eq!(nearest_column(&[42.0], 42.0), Some(0));
    assert_eq!(nearest_column(&[42.0], 1_000.0), Some(0));
}

#[test]
fn queries_outside_clamp_to_the_ends() {
    let columns = [0.0, 100.0, 200.0, 300.0];
    assert_eq!(nearest_column(&columns, -5.0), Some(0));
    assert_eq!(nearest_column(&columns, 0.0), Some(0));
    assert_eq!(nearest_column(&columns, 300.0), Some(3));
    assert_eq!(nearest_column(&columns, 10_000.0), Some(3));
}

#[test]
fn picks_the_closer_neighbor() {
    let columns = [0.0, 100.0, 200.0, 300.0];
    assert_eq!(nearest_column(&columns, 49.0), Some(0));
    assert_eq!(nearest_column(&columns, 51.0), Some(1));
    assert_eq!(nearest_column(&columns, 249.9), Some(2));
    assert_eq!(nearest_column(&columns, 250.1), Some(3));
}

#[test]
fn exact_midpoint_goes_to_the_lower_index() {
    let columns = [0.0, 100.0, 200.0, 300.0];
    assert_eq!(nearest_column(&columns, 50.0), Some(0));
    assert_eq!(nearest_column(&columns, 150.0), Some(1));
    assert_eq!(nearest_column(&columns, 250.0), Some(2));
}

#[test]
fn duplicate_columns_resolve_to_the_first_of_the_run() {
    let columns = [0.0, 133.0, 133.0, 133.0, 266.0, 400.0, 400.0];
    assert_eq!(nearest_column(&columns, 133.0), Some(1));
    assert_eq!(nearest_column(&columns, 150.0), Some(1));
    assert_eq!(nearest_column(&columns, 390.0), Some(5));
    assert_eq!(nearest_column(&columns, 500.0), Some(5));
}

#[test]
fn snapshot_clones_share_columns() {
    let snapshot = ColumnSnapshot::new(vec![0.0, 10.0, 20.0]);
    let clone = snapshot.clone();
    assert_eq!(clone, snapshot);
    assert_eq!(clone.len(), 3);
    assert_eq!(clone.nearest(14.0), Some(1));
    assert_eq!(clone.x_at(2), Some(20.0));
    assert_eq!(clone.x_at(3), None);
    assert_eq!(clone.as_slice(), &[0.0, 10.0, 20.0]);
}
