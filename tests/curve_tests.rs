use weather_graph::core::curve::{CATMULL_ROM_STEPS, catmull_rom_point};
use weather_graph::core::{CurveStrategy, PathCommand, Point, build_curve, control_point};

fn zigzag() -> Vec<Point> {
    vec![
        Point::new(0.0, 50.0),
        Point::new(10.0, 20.0),
        Point::new(20.0, 60.0),
        Point::new(30.0, 40.0),
        Point::new(40.0, 45.0),
    ]
}

#[test]
fn empty_input_gives_empty_path_for_every_strategy() {
    for strategy in CurveStrategy::ALL {
        assert!(build_curve(&[], 0.2, strategy).is_empty(), "{strategy:?}");
    }
}

#[test]
fn single_point_gives_lone_move_for_every_strategy() {
    let point = Point::new(3.0, 4.0);
    for strategy in CurveStrategy::ALL {
        let path = build_curve(&[point], 0.2, strategy);
        assert_eq!(path.commands(), &[PathCommand::MoveTo { to: point }], "{strategy:?}");
    }
}

#[test]
fn every_strategy_starts_at_first_and_ends_at_last_point() {
    let points = zigzag();
    for strategy in CurveStrategy::ALL {
        let path = build_curve(&points, 0.2, strategy);
        assert_eq!(path.first_point(), Some(points[0]), "{strategy:?}");
        let end = path.current_point().expect("non-empty path");
        assert!((end.x - 40.0).abs() <= 1e-9, "{strategy:?}");
        assert!((end.y - 45.0).abs() <= 1e-9, "{strategy:?}");
        assert_eq!(path.subpath_count(), 1, "{strategy:?}");
    }
}

#[test]
fn tangent_strategies_emit_one_segment_per_gap() {
    let points = zigzag();
    let cubic = build_curve(&points, 0.2, CurveStrategy::CubicTangent);
    assert_eq!(cubic.len(), points.len());
    assert!(
        cubic.commands()[1..]
            .iter()
            .all(|c| matches!(c, PathCommand::CubicTo { .. }))
    );
    let data_points: Vec<Point> = cubic.points().collect();
    assert_eq!(data_points, points);

    let quad = build_curve(&points, 0.2, CurveStrategy::QuadraticMidpoint);
    assert_eq!(quad.len(), points.len());
    assert!(
        quad.commands()[1..]
            .iter()
            .all(|c| matches!(c, PathCommand::QuadTo { .. }))
    );
}

#[test]
fn quadratic_control_point_averages_cubic_controls() {
    let points = zigzag();
    let cubic = build_curve(&points, 0.3, CurveStrategy::CubicTangent);
    let quad = build_curve(&points, 0.3, CurveStrategy::QuadraticMidpoint);

    for (c, q) in cubic.commands().iter().zip(quad.commands()).skip(1) {
        let (PathCommand::CubicTo { ctrl1, ctrl2, .. }, PathCommand::QuadTo { ctrl, .. }) = (c, q)
        else {
            panic!("unexpected commands {c:?} / {q:?}");
        };
        assert!((ctrl.x - (ctrl1.x + ctrl2.x) / 2.0).abs() <= 1e-9);
        assert!((ctrl.y - (ctrl1.y + ctrl2.y) / 2.0).abs() <= 1e-9);
    }
}

#[test]
fn uniform_bezier_pins_last_sample_with_degenerate_cubic() {
    let points = zigzag();
    let path = build_curve(&points, 0.2, CurveStrategy::CubicUniformBezier);
    assert_eq!(path.len(), points.len() + 1);

    let last = points[points.len() - 1];
    assert_eq!(
        path.commands().last(),
        Some(&PathCommand::CubicTo {
            ctrl1: last,
            ctrl2: last,
            to: last
        })
    );

    // First segment has no point before the previous one, so p0 == p1.
    let PathCommand::CubicTo { ctrl1, ctrl2, to } = path.commands()[1] else {
        panic!("expected cubic");
    };
    assert_eq!(ctrl1, points[0]);
    assert_eq!(ctrl2, points[0]);
    assert!((to.x - (5.0 * 0.0 + 10.0) / 6.0).abs() <= 1e-9);
    assert!((to.y - (5.0 * 50.0 + 20.0) / 6.0).abs() <= 1e-9);
}

#[test]
fn catmull_rom_emits_fixed_steps_and_passes_through_samples() {
    let points = zigzag();
    let path = build_curve(&points, 0.2, CurveStrategy::CatmullRom);
    assert_eq!(path.len(), 1 + (points.len() - 1) * CATMULL_ROM_STEPS);

    let ends: Vec<Point> = path.points().collect();
    for (segment, expected) in points.iter().enumerate().skip(1) {
        let at = ends[segment * CATMULL_ROM_STEPS];
        assert!((at.x - expected.x).abs() <= 1e-9);
        assert!((at.y - expected.y).abs() <= 1e-9);
    }
}

#[test]
fn catmull_rom_point_interpolates_span_ends() {
    let [p0, p1, p2, p3] = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 2.0),
        Point::new(2.0, -1.0),
        Point::new(3.0, 0.0),
    ];
    assert_eq!(catmull_rom_point(p0, p1, p2, p3, 0.0), p1);
    let end = catmull_rom_point(p0, p1, p2, p3, 1.0);
    assert!((end.x - p2.x).abs() <= 1e-12 && (end.y - p2.y).abs() <= 1e-12);
}

#[test]
fn control_point_follows_neighbor_direction() {
    let current = Point::new(10.0, 10.0);
    let forward = control_point(
        current,
        Some(Point::new(0.0, 10.0)),
        Some(Point::new(20.0, 10.0)),
        false,
        0.25,
    );
    assert!((forward.x - 15.0).abs() <= 1e-9 && (forward.y - 10.0).abs() <= 1e-9);

    let backward = control_point(
        current,
        Some(Point::new(0.0, 10.0)),
        Some(Point::new(20.0, 10.0)),
        true,
        0.25,
    );
    assert!((backward.x - 5.0).abs() <= 1e-9 && (backward.y - 10.0).abs() <= 1e-9);
}

#[test]
fn missing_neighbors_collapse_control_point_onto_current() {
    let current = Point::new(7.0, -3.0);
    let cp = control_point(current, None, None, true, 0.5);
    assert!((cp.x - current.x).abs() <= 1e-12 && (cp.y - current.y).abs() <= 1e-12);
}
