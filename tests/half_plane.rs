use dgeom::draw::{DisplayList, Drawable};
use dgeom::{HalfPlane, Point2};

// Counter-clockwise convex polygon as an intersection of left half-planes.
fn polygon(vertices: &[(i32, i32)]) -> Vec<HalfPlane<i32>> {
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(&a, &b)| HalfPlane::through(a.into(), b.into()).unwrap())
        .collect()
}

fn inside(planes: &[HalfPlane<i32>], p: Point2<i32>) -> bool {
    planes.iter().all(|h| h.contains(&p))
}

#[test]
fn lattice_points_in_triangle() {
    let tri = polygon(&[(0, 0), (4, 0), (0, 4)]);
    let count = (-1..=5)
        .flat_map(|x| (-1..=5).map(move |y| Point2::new(x, y)))
        .filter(|&p| inside(&tri, p))
        .count();
    // x, y >= 0 and x + y <= 4
    assert_eq!(count, 15);
}

#[test]
fn clockwise_polygon_contains_nothing_interior() {
    let cw = polygon(&[(0, 0), (0, 4), (4, 4), (4, 0)]);
    assert!(!inside(&cw, Point2::new(2, 2)));

    let ccw: Vec<_> = cw.iter().map(HalfPlane::complement).collect();
    assert!(inside(&ccw, Point2::new(2, 2)));
    assert!(inside(&ccw, Point2::new(4, 0)));
    assert!(!inside(&ccw, Point2::new(5, 2)));
}

#[test]
fn drawing_a_polygon_emits_its_edges() {
    let square = polygon(&[(0, 0), (2, 0), (2, 2), (0, 2)]);
    let mut board = DisplayList::new();
    for h in &square {
        h.draw(&mut board);
    }
    let ends: Vec<_> = board.strokes().iter().map(|s| (s.from, s.to)).collect();
    assert_eq!(
        ends,
        vec![
            (Point2::new(0, 0), Point2::new(2, 0)),
            (Point2::new(2, 0), Point2::new(2, 2)),
            (Point2::new(2, 2), Point2::new(0, 2)),
            (Point2::new(0, 2), Point2::new(0, 0)),
        ]
    );
}
