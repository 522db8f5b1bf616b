/// Offsets below this many meters count as the optimal listening position.
pub const OPTIMAL_DISTANCE_THRESHOLD: f64 = 0.10;

/// Listener offset, in meters, at which the quality score reaches zero.
pub const QUALITY_SCORE_CEILING: f64 = 2.0;

/// Relative side deviation accepted by the quality score's shape gate.
///
/// At `1.0` the gate accepts sides deviating from their mean by up to 100%,
/// which lets nearly every triangle through.
pub const QUALITY_SHAPE_TOLERANCE: f64 = 1.0;

/// Minimum magnitude of a direction component before guidance mentions it.
pub const GUIDANCE_AXIS_THRESHOLD: f64 = 0.1;

/// Tunables for a [`TriangleEngine`](super::TriangleEngine).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TriangleConfig {
    /// See [`OPTIMAL_DISTANCE_THRESHOLD`].
    pub optimal_threshold: f64,
    /// See [`QUALITY_SCORE_CEILING`].
    pub score_ceiling: f64,
    /// See [`QUALITY_SHAPE_TOLERANCE`].
    pub shape_tolerance: f64,
    /// See [`GUIDANCE_AXIS_THRESHOLD`].
    pub guidance_axis_threshold: f64,
}

impl Default for TriangleConfig {
    fn default() -> Self {
        Self {
            optimal_threshold: OPTIMAL_DISTANCE_THRESHOLD,
            score_ceiling: QUALITY_SCORE_CEILING,
            shape_tolerance: QUALITY_SHAPE_TOLERANCE,
            guidance_axis_threshold: GUIDANCE_AXIS_THRESHOLD,
        }
    }
}

impl TriangleConfig {
    #[must_use]
    pub fn with_optimal_threshold(mut self, meters: f64) -> Self {
        self.optimal_threshold = meters;
        self
    }

    #[must_use]
    pub fn with_score_ceiling(mut self, meters: f64) -> Self {
        self.score_ceiling = meters;
        self
    }

    #[must_use]
    pub fn with_shape_tolerance(mut self, tolerance: f64) -> Self {
        self.shape_tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn with_guidance_axis_threshold(mut self, threshold: f64) -> Self {
        self.guidance_axis_threshold = threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = TriangleConfig::default();
        assert_eq!(config.optimal_threshold, 0.10);
        assert_eq!(config.score_ceiling, 2.0);
        assert_eq!(config.shape_tolerance, 1.0);
        assert_eq!(config.guidance_axis_threshold, 0.1);
    }

    #[test]
    fn builders_override_single_fields() {
        let config = TriangleConfig::default()
            .with_optimal_threshold(0.05)
            .with_shape_tolerance(0.2);
        assert_eq!(config.optimal_threshold, 0.05);
        assert_eq!(config.shape_tolerance, 0.2);
        assert_eq!(config.score_ceiling, QUALITY_SCORE_CEILING);
    }

    #[cfg(feature = "serde")]
    #[test]
    #[allow(clippy::unwrap_used)]
    fn missing_fields_fall_back_to_defaults() {
        let config: TriangleConfig = serde_json::from_str(r#"{ "score_ceiling": 3.0 }"#).unwrap();
        assert_eq!(config, TriangleConfig::default().with_score_ceiling(3.0));
    }
}
