#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use approx::assert_abs_diff_eq;
use sweetspot::math::distance_3d;
use sweetspot::measurement::RejectReason;
use sweetspot::{
    GuidanceKind, LogLevel, Logger, MeasurementSession, Point3, RecordOutcome, SessionConfig,
    Statistics, TriangleEngine, Units,
};

#[derive(Default)]
struct RecordingLogger(Mutex<Vec<(&'static str, String)>>);

impl Logger for RecordingLogger {
    fn log(&self, _level: LogLevel, component: &'static str, message: &str) {
        self.0.lock().unwrap().push((component, message.to_owned()));
    }
}

#[test]
fn guide_listener_into_sweet_spot() {
    let logger = Arc::new(RecordingLogger::default());
    let mut engine = TriangleEngine::new().with_logger(logger.clone());

    engine
        .set_speakers(&[
            Point3::new(-2.0, 0.0, -2.0),
            Point3::new(2.0, 0.0, -2.0),
            Point3::new(0.0, 0.0, 5.0),
        ])
        .unwrap();
    assert_eq!(engine.positioning_guidance().kind, GuidanceKind::Info);

    engine.set_listener_position(Point3::new(0.0, 0.0, 3.0)).unwrap();
    let optimum = engine.optimal_listener().unwrap();
    assert_abs_diff_eq!(
        distance_3d(&optimum, &Point3::new(-2.0, 0.0, -2.0)),
        4.0,
        epsilon = 1e-6
    );
    assert_abs_diff_eq!(
        distance_3d(&optimum, &Point3::new(2.0, 0.0, -2.0)),
        4.0,
        epsilon = 1e-6
    );

    let far = engine.triangle_quality();
    let guidance = engine.positioning_guidance();
    assert_eq!(guidance.kind, GuidanceKind::Guidance);
    assert!(guidance.message.ends_with("forward"), "{}", guidance.message);

    engine.set_listener_position(optimum).unwrap();
    assert!(engine.triangle_quality() > far);
    assert_eq!(engine.triangle_quality(), 100);
    assert_eq!(engine.positioning_guidance().kind, GuidanceKind::Success);

    let messages = logger.0.lock().unwrap();
    assert!(messages
        .iter()
        .any(|(c, m)| *c == "triangle" && m.contains("ignoring 1 speakers")));
}

#[test]
fn quality_stays_within_bounds() {
    let mut engine = TriangleEngine::new();
    engine
        .set_speakers(&[Point3::new(0.0, 1.0, 0.0), Point3::new(3.0, 1.0, 0.0)])
        .unwrap();
    for step in 0..40 {
        let z = -10.0 + f64::from(step) * 0.5;
        engine.set_listener_position(Point3::new(1.5, 1.0, z)).unwrap();
        let quality = engine.triangle_quality();
        assert!(quality <= 100);
        if !engine.is_equilateral(1.0) {
            assert_eq!(quality, 0);
        }
        let err = engine.position_error().unwrap();
        assert_eq!(err.is_optimal, err.distance < 0.10);
    }
}

#[test]
fn measure_a_room_outline() {
    let snapshots: Arc<Mutex<Vec<Statistics>>> = Arc::default();
    let sink = Arc::clone(&snapshots);

    let mut session = MeasurementSession::new(SessionConfig::polyline());
    session.set_on_stats_update(move |stats| sink.lock().unwrap().push(stats.clone()));
    session.activate();

    let corners = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(4.0, 0.0, 0.0),
        Point3::new(4.0, 0.0, 3.0),
    ];
    for corner in corners {
        assert!(session.record_point(corner).unwrap().is_accepted());
    }

    let stats = session.statistics();
    assert_eq!(stats.point_count, 3);
    assert_eq!(stats.line_count, 2);
    assert_abs_diff_eq!(stats.total_distance, 7.0, epsilon = 1e-10);
    assert_eq!(stats.formatted_total_distance, "7.00 m");

    session.toggle_units();
    let labels: Vec<_> = session
        .segment_labels()
        .into_iter()
        .map(|l| l.text)
        .collect();
    assert_eq!(labels, ["13.12'", "9.84'"]);
    assert_eq!(session.units(), Units::Imperial);

    session.deactivate();
    assert_eq!(
        session.record_point(Point3::new(0.0, 0.0, 3.0)).unwrap(),
        RecordOutcome::Rejected(RejectReason::Inactive)
    );
    assert_eq!(session.statistics().point_count, 3);

    session.clear_all();
    let last = snapshots.lock().unwrap().last().cloned().unwrap();
    assert_eq!((last.point_count, last.line_count), (0, 0));
    assert_eq!(last.total_distance, 0.0);
}

#[test]
fn single_pair_measurement_cycle() {
    let mut session = MeasurementSession::new(SessionConfig::single_pair());
    session.activate();
    session.record_point(Point3::new(0.0, 0.0, 0.0)).unwrap();
    session.record_point(Point3::new(0.0, 0.0, 0.5)).unwrap();
    assert_eq!(session.statistics().formatted_total_distance, "50.0 cm");

    assert_eq!(
        session.record_point(Point3::new(9.0, 9.0, 9.0)).unwrap(),
        RecordOutcome::Rejected(RejectReason::MeasurementComplete)
    );
    assert_eq!(session.points().len(), 2);

    session.undo_last_point();
    assert_eq!(session.points().len(), 1);
    assert!(session.segments().is_empty());
}
