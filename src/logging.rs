//! Injected diagnostics for engines and sessions.
//!
//! Every [`TriangleEngine`](crate::engine::TriangleEngine) and
//! [`MeasurementSession`](crate::measurement::MeasurementSession) owns an
//! `Arc<dyn Logger>`. The default forwards to `tracing`; hosts that want
//! silence or capture inject their own implementation.

use std::sync::Arc;

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
}

/// Sink for diagnostic messages emitted by engines and sessions.
pub trait Logger: Send + Sync {
    /// Records one message. `component` names the emitting front end
    /// (`"triangle"` or `"measurement"`).
    fn log(&self, level: LogLevel, component: &'static str, message: &str);
}

/// Forwards messages to the `tracing` ecosystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, component: &'static str, message: &str) {
        match level {
            LogLevel::Trace => tracing::trace!(component, "{message}"),
            LogLevel::Debug => tracing::debug!(component, "{message}"),
            LogLevel::Info => tracing::info!(component, "{message}"),
            LogLevel::Warn => tracing::warn!(component, "{message}"),
        }
    }
}

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&self, _level: LogLevel, _component: &'static str, _message: &str) {}
}

/// Returns the logger used when none is injected.
#[must_use]
pub fn default_logger() -> Arc<dyn Logger> {
    Arc::new(TracingLogger)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Capture(Mutex<Vec<(LogLevel, &'static str, String)>>);

    impl Logger for Capture {
        fn log(&self, level: LogLevel, component: &'static str, message: &str) {
            self.0
                .lock()
                .unwrap()
                .push((level, component, message.to_owned()));
        }
    }

    #[test]
    fn injected_logger_receives_messages() {
        let capture = Arc::new(Capture::default());
        let logger: Arc<dyn Logger> = capture.clone();
        logger.log(LogLevel::Info, "measurement", "cleared");
        let seen = capture.0.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], (LogLevel::Info, "measurement", "cleared".to_owned()));
    }

    #[test]
    fn tracing_logger_without_subscriber_is_silent() {
        // No subscriber installed: events are dropped, nothing panics.
        TracingLogger.log(LogLevel::Warn, "triangle", "ignored");
        NullLogger.log(LogLevel::Warn, "triangle", "ignored");
    }
}
