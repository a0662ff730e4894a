use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumerologyError {
    #[error("Missing input: {field}")]
    MissingInput { field: String },

    #[error("Invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Io,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl NumerologyError {
    pub fn missing(field: &str) -> Self {
        Self::MissingInput {
            field: field.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingInput { .. } | Self::InvalidDate { .. } => ErrorCategory::Input,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::Io,
            Self::CsvError(_) | Self::SerializationError(_) => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MissingInput { field } => match field.as_str() {
                "name" => "Please enter a name".to_string(),
                "birth_date" => "Please enter a birth date".to_string(),
                other => format!("Please enter a value for '{}'", other),
            },
            Self::InvalidDate { value, .. } => {
                format!("'{}' is not a valid birth date", value)
            }
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::CsvError(e) => format!("The CSV input could not be processed: {}", e),
            Self::SerializationError(e) => format!("Could not serialize results: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::MissingInput { field } => {
                format!("Provide a non-empty value for '{}'", field)
            }
            Self::InvalidDate { .. } => "Use the ISO format YYYY-MM-DD, e.g. 1990-07-23".to_string(),
            Self::IoError(_) => "Check that the path exists and is writable".to_string(),
            Self::CsvError(_) => {
                "Make sure the file has a 'name,birth_date' header row".to_string()
            }
            Self::SerializationError(_) => "Re-run with --verbose and report the output".to_string(),
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => {
                "Check the command line flags and the TOML configuration file".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, NumerologyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_medium_severity() {
        let err = NumerologyError::missing("name");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.recovery_suggestion().contains("name"));
    }

    #[test]
    fn test_missing_input_message_names_the_field() {
        assert_eq!(
            NumerologyError::missing("name").user_friendly_message(),
            "Please enter a name"
        );
        assert_eq!(
            NumerologyError::missing("birth_date").user_friendly_message(),
            "Please enter a birth date"
        );
    }

    #[test]
    fn test_invalid_date_message() {
        let err = NumerologyError::InvalidDate {
            value: "2024-13-01".to_string(),
            reason: "input is out of range".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid date '2024-13-01': input is out of range"
        );
        assert!(err.user_friendly_message().contains("2024-13-01"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err = NumerologyError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "gone",
        ));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
