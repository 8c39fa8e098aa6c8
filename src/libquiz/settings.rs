use thiserror::Error;

pub const DEFAULT_PASS_THRESHOLD: f64 = 75.0;

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("pass threshold {0} is outside of 0..=100")]
    ThresholdOutOfRange(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuizSettings {
    /// Minimum score percentage, inclusive, for a run to count as passed.
    pub pass_threshold: f64,
}

impl QuizSettings {
    pub fn with_pass_threshold(pass_threshold: f64) -> Result<Self, SettingsError> {
        if !(0.0..=100.0).contains(&pass_threshold) {
            return Err(SettingsError::ThresholdOutOfRange(pass_threshold));
        }
        Ok(Self { pass_threshold })
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            pass_threshold: DEFAULT_PASS_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_seventy_five() {
        assert_eq!(QuizSettings::default().pass_threshold, 75.0);
    }

    #[test]
    fn accepts_bounds() {
        assert!(QuizSettings::with_pass_threshold(0.0).is_ok());
        assert!(QuizSettings::with_pass_threshold(100.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            QuizSettings::with_pass_threshold(100.5),
            Err(SettingsError::ThresholdOutOfRange(100.5))
        );
        assert!(QuizSettings::with_pass_threshold(-1.0).is_err());
        assert!(QuizSettings::with_pass_threshold(f64::NAN).is_err());
    }
}
