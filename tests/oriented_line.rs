use dgeom::{BigCoord, Coordinate, LineError, Orientation, OrientedLine, Point2};

#[test]
fn horizontal_scenario() {
    let line = OrientedLine::new(Point2::new(0i32, 0), Point2::new(10, 0)).unwrap();
    assert_eq!(line.signed_distance(&Point2::new(5, 5)), 50);
    assert_eq!(line.signed_distance(&Point2::new(5, -5)), -50);
    assert_eq!(line.orientation(&Point2::new(5, 5)), Orientation::CounterClockwise);
    assert_eq!(line.orientation(&Point2::new(5, -5)), Orientation::Clockwise);
    assert_eq!(line.checked_signed_distance(&Point2::new(5, 5)), Ok(50));
}

#[test]
fn equal_points_do_not_make_a_line() {
    let res = OrientedLine::new(Point2::new(3i32, 3), Point2::new(3, 3));
    assert!(matches!(res, Err(LineError::Degenerate { .. })));

    let res: Result<OrientedLine<i64>, _> = (Point2::new(3i64, 3), Point2::new(3, 3)).try_into();
    assert_eq!(
        res.unwrap_err().to_string(),
        "degenerate line: both defining points are (3, 3)"
    );
}

#[test]
fn constructed_lines_are_valid() {
    let line: OrientedLine<i16> = (Point2::new(3i16, 3), Point2::new(3, 4)).try_into().unwrap();
    assert!(line.is_valid());
    assert!(line.reversed().is_valid());
}

#[test]
fn accessors_and_direction() {
    let line = OrientedLine::new(Point2::new(-2i32, 7), Point2::new(5, 1)).unwrap();
    assert_eq!(*line.first(), Point2::new(-2, 7));
    assert_eq!(*line.second(), Point2::new(5, 1));
    let d = line.direction();
    assert_eq!((d.x, d.y), (7, -6));
}

#[test]
fn copies_are_independent_values() {
    let a = OrientedLine::new(Point2::new(0i32, 0), Point2::new(1, 1)).unwrap();
    let mut b = a;
    assert_eq!(a, b);
    b = b.reversed();
    assert_ne!(a, b);
    assert_eq!(*a.first(), Point2::new(0, 0));
}

#[test]
fn display_includes_both_points() {
    let line = OrientedLine::new(Point2::new(1i8, -2), Point2::new(-3, 4)).unwrap();
    let text = line.to_string();
    assert!(text.contains("(1, -2)"));
    assert!(text.contains("(-3, 4)"));
    assert!(format!("{line:?}").contains("first"));
}

fn check_extremes<C>(min: C, max: C)
where
    C: Coordinate + Copy + Into<BigCoord>,
    C::Wide: Into<BigCoord>,
{
    let (lo, hi): (BigCoord, BigCoord) = (min.into(), max.into());
    let span = &hi - &lo;
    let full = &span * &span;

    let diagonal = OrientedLine::new(Point2::new(min, min), Point2::new(max, max)).unwrap();
    let left: BigCoord = diagonal.signed_distance(&Point2::new(min, max)).into();
    let right: BigCoord = diagonal.signed_distance(&Point2::new(max, min)).into();
    assert_eq!(left, full);
    assert_eq!(right, -full.clone());

    let vertical = OrientedLine::new(Point2::new(min, min), Point2::new(min, max)).unwrap();
    let right: BigCoord = vertical.signed_distance(&Point2::new(max, min)).into();
    assert_eq!(right, -full);

    assert!(matches!(
        diagonal.checked_signed_distance(&Point2::new(min, max)),
        Err(LineError::Overflow { .. })
    ));
}

#[test]
fn no_overflow_at_type_extremes() {
    check_extremes(i8::MIN, i8::MAX);
    check_extremes(i16::MIN, i16::MAX);
    check_extremes(i32::MIN, i32::MAX);
    check_extremes(i64::MIN, i64::MAX);
    check_extremes(isize::MIN, isize::MAX);
    check_extremes(i128::MIN, i128::MAX);
}

#[test]
fn arbitrary_precision_coordinates() {
    let huge = BigCoord::from(i128::MAX);
    let huger = &huge * &huge;
    let line = OrientedLine::new(
        Point2::new(BigCoord::from(0), BigCoord::from(0)),
        Point2::new(huger.clone(), BigCoord::from(0)),
    )
    .unwrap();
    let p = Point2::new(BigCoord::from(1), huger.clone());
    assert_eq!(line.signed_distance(&p), &huger * &huger);
    assert_eq!(line.checked_signed_distance(&p), Ok(&huger * &huger));
    assert!(line.contains(&Point2::new(-huger.clone(), BigCoord::from(0))));
}

#[test]
fn shared_across_threads() {
    let line = OrientedLine::new(Point2::new(0i64, 0), Point2::new(1, 3)).unwrap();
    let results: Vec<Orientation> = std::thread::scope(|s| {
        let handles: Vec<_> = (-2..=2)
            .map(|x| {
                let line = &line;
                s.spawn(move || line.orientation(&Point2::new(x, 0)))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(
        results,
        vec![
            Orientation::CounterClockwise,
            Orientation::CounterClockwise,
            Orientation::Collinear,
            Orientation::Clockwise,
            Orientation::Clockwise,
        ]
    );
}
