use std::fmt;

/// Feet per meter.
pub const FEET_PER_METER: f64 = 3.280_84;

/// Inches per foot.
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Display unit system. Stored distances are always meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    /// Returns the other unit system.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Metric => Self::Imperial,
            Self::Imperial => Self::Metric,
        }
    }

    /// Formats a distance given in meters.
    ///
    /// Metric shows centimeters (1 decimal) below one meter and meters
    /// (2 decimals) otherwise. Imperial shows inches (1 decimal, `"`) below one
    /// foot and feet (2 decimals, `'`) otherwise.
    #[must_use]
    pub fn format(self, meters: f64) -> String {
        match self {
            Self::Metric if meters < 1.0 => format!("{:.1} cm", meters * 100.0),
            Self::Metric => format!("{meters:.2} m"),
            Self::Imperial => {
                let feet = meters * FEET_PER_METER;
                if feet < 1.0 {
                    format!("{:.1}\"", feet * INCHES_PER_FOOT)
                } else {
                    format!("{feet:.2}'")
                }
            }
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        })
    }
}

/// Formats `meters` in the given unit system. See [`Units::format`].
#[must_use]
pub fn format_distance(meters: f64, units: Units) -> String {
    units.format(meters)
}
