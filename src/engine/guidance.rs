use std::fmt;

use crate::operations::query::PositionError;

/// Tier of a positioning hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GuidanceKind {
    /// Not enough data to guide yet.
    Info,
    /// The listener is at the optimum.
    Success,
    /// The listener should move.
    Guidance,
}

impl GuidanceKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Guidance => "guidance",
        }
    }
}

impl fmt::Display for GuidanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human-readable positioning hint for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Guidance {
    pub kind: GuidanceKind,
    pub message: String,
}

impl Guidance {
    /// Builds the hint for an optional position error.
    ///
    /// Lateral (`x`) and depth (`z`) words are only included when the
    /// corresponding direction component exceeds `axis_threshold` in
    /// magnitude. Negative `z` is forward.
    #[must_use]
    pub fn from_position_error(error: Option<&PositionError>, axis_threshold: f64) -> Self {
        let Some(error) = error else {
            return Self {
                kind: GuidanceKind::Info,
                message: "set listener position first".to_owned(),
            };
        };
        if error.is_optimal {
            return Self {
                kind: GuidanceKind::Success,
                message: "perfect position".to_owned(),
            };
        }

        let mut words = vec!["move".to_owned(), format!("{:.1}m", error.distance)];
        let dir = &error.direction;
        if dir.x.abs() > axis_threshold {
            words.push(if dir.x > 0.0 { "right" } else { "left" }.to_owned());
        }
        if dir.z.abs() > axis_threshold {
            words.push(if dir.z < 0.0 { "forward" } else { "backward" }.to_owned());
        }
        Self {
            kind: GuidanceKind::Guidance,
            message: words.join(" "),
        }
    }
}
