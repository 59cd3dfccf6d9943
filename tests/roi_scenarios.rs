#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use roiline::roi::SessionStore;
use roiline::{
    BoundaryEditor, BoundarySegment, OffsetStyle, Point2, RenderSink, RoiParams, RoiSession,
    RoiState,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn seg(a: (f64, f64), b: (f64, f64)) -> BoundarySegment {
    BoundarySegment::new(Point2::new(a.0, a.1), Point2::new(b.0, b.1))
}

fn three_point_session() -> RoiSession {
    let mut session = RoiSession::new();
    session.add_point(Point2::new(0.0, 0.0));
    session.add_point(Point2::new(10.0, 0.0));
    session.add_point(Point2::new(20.0, 0.0));
    session
}

#[test]
fn linear_scenario() {
    init_tracing();
    let mut session = three_point_session();
    let roi = session
        .create_roi_from_input("1", "5", OffsetStyle::Linear)
        .unwrap()
        .unwrap();

    assert_relative_eq!(roi.normal().slope, 0.0, epsilon = 1e-12);
    assert_relative_eq!(roi.normal().normal.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(roi.normal().normal.y, 1.0, epsilon = 1e-12);
    assert_eq!(
        roi.segments(),
        &[
            seg((0.0, 0.0), (0.0, 5.0)),
            seg((0.0, 5.0), (20.0, 5.0)),
            seg((20.0, 5.0), (20.0, 0.0)),
        ]
    );
}

#[test]
fn parallel_curve_scenario() {
    init_tracing();
    let mut session = three_point_session();
    let roi = session
        .create_roi_from_input("1", "5", OffsetStyle::ParallelCurve)
        .unwrap()
        .unwrap();

    assert_eq!(
        roi.offset_points().unwrap(),
        &[
            Point2::new(0.0, 5.0),
            Point2::new(10.0, 5.0),
            Point2::new(20.0, 5.0),
        ]
    );
    assert_eq!(
        roi.segments(),
        &[seg((0.0, 0.0), (0.0, 5.0)), seg((20.0, 0.0), (20.0, 5.0))]
    );
}

#[test]
fn reset_then_clear_lifecycle() {
    init_tracing();
    let mut session = three_point_session();
    session.build_offset(RoiParams::default()).unwrap();
    assert_eq!(session.state(), RoiState::Bounded);

    session.reset();
    assert_eq!(session.state(), RoiState::Drafting);
    assert_eq!(session.points().len(), 3);

    session.build_offset(RoiParams::default()).unwrap();
    session.clear();
    assert_eq!(session.state(), RoiState::Empty);
    assert!(session.points().is_empty());
}

#[test]
fn fit_curve_endpoints_and_fallback() {
    init_tracing();
    let mut session = RoiSession::new();
    for (x, y) in [(3.0, 4.0), (15.0, 9.0), (28.0, 2.0), (40.0, 11.0), (52.0, 6.0)] {
        session.add_point(Point2::new(x, y));
    }
    let curve = session.fit_curve().unwrap();
    assert!(!curve.is_fallback());
    let first = curve.points()[0];
    let last = curve.points()[curve.points().len() - 1];
    assert_relative_eq!(first.x, 3.0, epsilon = 1e-9);
    assert_relative_eq!(first.y, 4.0, epsilon = 1e-9);
    assert_relative_eq!(last.x, 52.0, epsilon = 1e-9);
    assert_relative_eq!(last.y, 6.0, epsilon = 1e-9);

    // A double click places the same point twice in a row.
    session.add_point(Point2::new(52.0, 6.0));
    let curve = session.fit_curve().unwrap();
    assert!(curve.is_fallback());
    assert_eq!(curve.points(), session.points());
}

#[test]
fn vertical_boundary_still_builds() {
    init_tracing();
    let mut session = RoiSession::new();
    for y in [0.0, 10.0, 20.0] {
        session.add_point(Point2::new(7.0, y));
    }
    let roi = session.create_roi().unwrap();
    let n = roi.normal().normal;
    assert!(n.x.is_finite() && n.y.is_finite());
    assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-12);
}

#[derive(Default)]
struct Counts {
    points: usize,
    polylines: usize,
    segments: usize,
}

impl RenderSink for Counts {
    fn point(&mut self, _p: Point2) {
        self.points += 1;
    }

    fn polyline(&mut self, _points: &[Point2], _kind: roiline::roi::PolylineKind) {
        self.polylines += 1;
    }

    fn segment(&mut self, _segment: &BoundarySegment) {
        self.segments += 1;
    }
}

#[test]
fn store_drives_independent_clients() {
    init_tracing();
    let mut store = SessionStore::new();
    let linear = store.open();
    let parallel = store.open();

    for id in [linear, parallel] {
        let session = store.session_mut(id).unwrap();
        session.add_point(Point2::new(0.0, 0.0));
        session.add_point(Point2::new(10.0, 3.0));
        session.add_point(Point2::new(20.0, 0.0));
    }
    store
        .session_mut(linear)
        .unwrap()
        .create_roi_from_input("2", "3", OffsetStyle::Linear)
        .unwrap();
    store
        .session_mut(parallel)
        .unwrap()
        .create_roi_from_input("2", "3", OffsetStyle::ParallelCurve)
        .unwrap();

    let mut a = Counts::default();
    store.session(linear).unwrap().render(&mut a);
    assert_eq!((a.points, a.polylines, a.segments), (3, 1, 3));

    let mut b = Counts::default();
    store.session(parallel).unwrap().render(&mut b);
    assert_eq!((b.points, b.polylines, b.segments), (3, 2, 2));

    store.session_mut(linear).unwrap().clear();
    assert_eq!(store.session(linear).unwrap().state(), RoiState::Empty);
    assert_eq!(store.session(parallel).unwrap().state(), RoiState::Bounded);
}
