//! Reduced-motion preference detection.

/// Environment variable checked for the reduced-motion preference.
pub const REDUCED_MOTION_ENV: &str = "PADO_REDUCED_MOTION";

/// The user's motion preference for decorative animation.
///
/// Terminals have no media-query equivalent, so the preference is read from
/// the environment, with an optional configuration override taking priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MotionPreference {
    /// No stated preference; animations run.
    #[default]
    NoPreference,
    /// The user prefers minimal animation.
    Reduce,
}

impl MotionPreference {
    /// Detect the preference from the environment. Pure query, no side
    /// effects beyond the environment read.
    pub fn detect() -> Self {
        match std::env::var(REDUCED_MOTION_ENV) {
            Ok(value) => Self::from_env_value(&value),
            Err(_) => Self::NoPreference,
        }
    }

    /// Interpret an environment variable value.
    pub fn from_env_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Self::Reduce,
            _ => Self::NoPreference,
        }
    }

    /// Apply a configuration override on top of the detected preference.
    pub fn with_override(self, override_value: Option<bool>) -> Self {
        match override_value {
            Some(true) => Self::Reduce,
            Some(false) => Self::NoPreference,
            None => self,
        }
    }

    /// True when decorative animation should be skipped.
    pub fn is_reduced(&self) -> bool {
        *self == Self::Reduce
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_value() {
        assert_eq!(MotionPreference::from_env_value("1"), MotionPreference::Reduce);
        assert_eq!(MotionPreference::from_env_value("TRUE"), MotionPreference::Reduce);
        assert_eq!(MotionPreference::from_env_value(" yes "), MotionPreference::Reduce);
        assert_eq!(MotionPreference::from_env_value("0"), MotionPreference::NoPreference);
        assert_eq!(MotionPreference::from_env_value(""), MotionPreference::NoPreference);
    }

    #[test]
    fn test_override_wins() {
        let detected = MotionPreference::Reduce;
        assert!(!detected.with_override(Some(false)).is_reduced());
        assert!(MotionPreference::NoPreference.with_override(Some(true)).is_reduced());
        assert!(detected.with_override(None).is_reduced());
    }
}
