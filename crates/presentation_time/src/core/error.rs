/// Errors raised while resolving zones or converting a presentation time
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PresentationTimeError {
    #[error("Invalid {argument}: {value}. Expected a value between 0 and {max}")]
    InvalidArgument {
        argument: &'static str,
        value: i32,
        max: u32,
    },
    #[error("Timezone database has no entry for: {timezone}")]
    TimeZoneDatabaseUnavailable { timezone: String },
    #[error("Failed to initialize logging: {0}")]
    LoggingInitialization(String),
}

impl PresentationTimeError {
    pub(crate) fn invalid_argument(argument: &'static str, value: i32, max: u32) -> Self {
        PresentationTimeError::InvalidArgument {
            argument,
            value,
            max,
        }
    }

    /// Whether the error came from caller input rather than the environment
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PresentationTimeError::InvalidArgument { .. })
    }
}

pub type PresentationTimeResult<T> = Result<T, PresentationTimeError>;

#[cfg(test)]
mod tests {
    use super::PresentationTimeError;

    #[test]
    fn test_error_messages() {
        let error = PresentationTimeError::invalid_argument("hour", 24, 23);
        assert_eq!(
            error.to_string(),
            "Invalid hour: 24. Expected a value between 0 and 23"
        );
        assert!(error.is_invalid_argument());

        let error = PresentationTimeError::TimeZoneDatabaseUnavailable {
            timezone: "Mars/Olympus_Mons".to_string(),
        };
        assert!(error.to_string().contains("Mars/Olympus_Mons"));
        assert!(!error.is_invalid_argument());
    }
}
