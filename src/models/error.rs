/// Local form validation failures. `Display` is the exact text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter both email and password")]
    MissingCredentials,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please select a team")]
    NoTeam,

    #[error("At least one month/year selection is required")]
    NoPeriods,

    /// Carries the 1-based row number.
    #[error("Please fill in both month and year for selection {0}")]
    IncompletePeriod(usize),

    #[error("Month must be between 1 and 12")]
    MonthOutOfRange,

    #[error("Please enter a valid year")]
    YearOutOfRange,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Backend error {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    Backend { status: u16, message: Option<String> },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    DecodeError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A DOM or browser API call failed.
    #[error("Browser error: {0}")]
    BrowserError(String),
}

impl AppError {
    /// The message to show the user: validation text, the backend's own
    /// `error` field when it sent one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Validation(e) => e.to_string(),
            AppError::Backend {
                message: Some(msg), ..
            } if !msg.trim().is_empty() => msg.clone(),
            _ => fallback.to_string(),
        }
    }

    /// True when the request never reached the backend.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, AppError::Network(_))
    }
}
