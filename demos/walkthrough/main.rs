//! Scripted walkthrough of both front ends.
//!
//! Usage:
//! ```text
//! cargo run --example walkthrough
//! RUST_LOG=sweetspot=trace cargo run --example walkthrough
//! ```

use sweetspot::{MeasurementSession, Point3, Result, SessionConfig, TriangleEngine};

fn main() -> Result<()> {
    // Default: WARN for everything, DEBUG for sweetspot.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("sweetspot=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut engine = TriangleEngine::new();
    engine.set_speakers(&[Point3::new(-2.0, 0.0, -2.0), Point3::new(2.0, 0.0, -2.0)])?;

    for listener in [
        Point3::new(1.0, 0.0, 3.0),
        Point3::new(0.4, 0.0, 2.0),
        Point3::new(0.0, 0.0, 1.47),
    ] {
        engine.set_listener_position(listener)?;
        let guidance = engine.positioning_guidance();
        println!(
            "listener ({:.2}, {:.2}, {:.2}): quality {:>3}, {}: {}",
            listener.x,
            listener.y,
            listener.z,
            engine.triangle_quality(),
            guidance.kind,
            guidance.message
        );
    }

    let mut session = MeasurementSession::new(SessionConfig::polyline());
    session.set_on_stats_update(|stats| {
        println!(
            "{} points, {} lines, total {}",
            stats.point_count, stats.line_count, stats.formatted_total_distance
        );
    });
    session.activate();
    for tap in [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(0.6, 0.0, 0.0),
        Point3::new(0.6, 0.0, 2.4),
    ] {
        session.record_point(tap)?;
    }
    session.toggle_units();
    for label in session.segment_labels() {
        println!("segment {}: {}", label.segment, label.text);
    }
    session.undo_last_point();
    session.clear_all();

    Ok(())
}
