//! Animation cadence.

use serde::Deserialize;

/// Global animation cadence.
///
/// The effects advance their clocks by a fixed step per frame, so cadence is
/// controlled by how often frames are produced rather than by scaling the
/// step itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl AnimationSpeed {
    /// Frame budget in milliseconds at this cadence.
    pub fn frame_budget_ms(&self) -> u64 {
        match self {
            Self::Slow => 50,
            Self::Medium => 33,
            Self::Fast => 16,
        }
    }

    /// Cycle to the next cadence.
    pub fn next(&self) -> Self {
        match self {
            Self::Slow => Self::Medium,
            Self::Medium => Self::Fast,
            Self::Fast => Self::Slow,
        }
    }

    /// Short label for the help line.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Medium => "medium",
            Self::Fast => "fast",
        }
    }
}
