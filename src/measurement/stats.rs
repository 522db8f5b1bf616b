use super::{MeasurementSegment, Units};

/// Snapshot of a session's totals, handed to the stats-update callback.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
    pub point_count: usize,
    /// Number of segments.
    pub line_count: usize,
    /// Sum of segment lengths, in meters.
    pub total_distance: f64,
    /// `total_distance` in the session's display units.
    pub formatted_total_distance: String,
    /// Mean segment length in meters, `0.0` without segments.
    pub average_distance: f64,
    pub units: Units,
}

impl Statistics {
    pub(crate) fn compute(point_count: usize, segments: &[MeasurementSegment], units: Units) -> Self {
        let line_count = segments.len();
        // `Sum for f64` starts at -0.0, which would format as "-0.0 cm".
        let total_distance = segments
            .iter()
            .map(MeasurementSegment::distance)
            .fold(0.0, |acc, d| acc + d);
        #[allow(clippy::cast_precision_loss)]
        let average_distance = if line_count == 0 {
            0.0
        } else {
            total_distance / line_count as f64
        };
        Self {
            point_count,
            line_count,
            total_distance,
            formatted_total_distance: units.format(total_distance),
            average_distance,
            units,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_session_has_zero_totals() {
        let stats = Statistics::compute(0, &[], Units::Metric);
        assert_eq!(stats.line_count, 0);
        assert_eq!(stats.total_distance, 0.0);
        assert_eq!(stats.average_distance, 0.0);
        assert_eq!(stats.formatted_total_distance, "0.0 cm");
        assert!(stats.total_distance.is_sign_positive());

        let stats = Statistics::compute(0, &[], Units::Imperial);
        assert_eq!(stats.formatted_total_distance, "0.0\"");
    }

    #[test]
    fn totals_and_average() {
        let segments = [
            MeasurementSegment::new(0, 1, 1.0),
            MeasurementSegment::new(1, 2, 2.0),
        ];
        let stats = Statistics::compute(3, &segments, Units::Imperial);
        assert_eq!(stats.point_count, 3);
        assert_eq!(stats.line_count, 2);
        assert_eq!(stats.total_distance, 3.0);
        assert_eq!(stats.average_distance, 1.5);
        assert_eq!(stats.formatted_total_distance, "9.84'");
        assert_eq!(stats.units, Units::Imperial);
    }

    #[cfg(feature = "serde")]
    #[test]
    #[allow(clippy::unwrap_used)]
    fn statistics_serialize_with_lowercase_units() {
        let segments = [MeasurementSegment::new(0, 1, 1.5)];
        let stats = Statistics::compute(2, &segments, Units::Imperial);

        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["units"], "imperial");
        assert_eq!(value["line_count"], 1);
        assert_eq!(value["formatted_total_distance"], "4.92'");

        let back: Statistics = serde_json::from_value(value).unwrap();
        assert_eq!(back, stats);
    }
}
