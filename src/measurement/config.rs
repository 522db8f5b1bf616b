use super::Units;

/// How a session turns points into segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MeasurementMode {
    /// One two-point measurement at a time. Further points are dropped until
    /// the pair is undone or cleared.
    SinglePair,
    /// Unbounded chain; each new point connects to its predecessor.
    #[default]
    Polyline,
}

impl MeasurementMode {
    /// Maximum number of points the mode accepts, if bounded.
    #[must_use]
    pub fn point_limit(self) -> Option<usize> {
        match self {
            Self::SinglePair => Some(2),
            Self::Polyline => None,
        }
    }
}

/// Settings for a [`MeasurementSession`](super::MeasurementSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    pub mode: MeasurementMode,
    /// Initial display units.
    pub units: Units,
    /// Deactivate once a single-pair measurement is complete. Ignored in
    /// polyline mode.
    pub auto_deactivate: bool,
}

impl SessionConfig {
    /// Single-pair measurement that deactivates once complete.
    #[must_use]
    pub fn single_pair() -> Self {
        Self {
            mode: MeasurementMode::SinglePair,
            units: Units::Metric,
            auto_deactivate: true,
        }
    }

    /// Chained polyline measurement.
    #[must_use]
    pub fn polyline() -> Self {
        Self {
            mode: MeasurementMode::Polyline,
            units: Units::Metric,
            auto_deactivate: false,
        }
    }

    #[must_use]
    pub fn with_units(mut self, units: Units) -> Self {
        self.units = units;
        self
    }

    #[must_use]
    pub fn with_auto_deactivate(mut self, auto_deactivate: bool) -> Self {
        self.auto_deactivate = auto_deactivate;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        assert_eq!(SessionConfig::default(), SessionConfig::polyline());
        assert!(SessionConfig::single_pair().auto_deactivate);
        assert_eq!(MeasurementMode::SinglePair.point_limit(), Some(2));
        assert_eq!(MeasurementMode::Polyline.point_limit(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    #[allow(clippy::unwrap_used)]
    fn config_uses_snake_case_tags_and_defaults() {
        let config = SessionConfig::polyline().with_units(Units::Imperial);
        assert_eq!(
            serde_json::to_value(config).unwrap(),
            serde_json::json!({
                "mode": "polyline",
                "units": "imperial",
                "auto_deactivate": false,
            })
        );

        let partial: SessionConfig =
            serde_json::from_str(r#"{ "mode": "single_pair" }"#).unwrap();
        assert_eq!(partial.mode, MeasurementMode::SinglePair);
        assert_eq!(partial.units, Units::Metric);
        assert!(!partial.auto_deactivate);
    }
}
