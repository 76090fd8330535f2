use thiserror::Error;

#[derive(Error, Debug)]
pub enum RsvpError {
    #[error("Invalid RSVP response: {value}")]
    InvalidResponseValue { value: String },

    #[error("Invalid participant {field} '{value}': {reason}")]
    InvalidParticipant {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Malformed row at line {line}: {reason}")]
    InvalidRow { line: u64, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} '{value}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 使用者輸入 (名字、回覆)
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 程序結束碼；輸入被拒絕為 2
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl RsvpError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RsvpError::InvalidResponseValue { .. }
            | RsvpError::InvalidParticipant { .. }
            | RsvpError::InvalidRow { .. } => ErrorCategory::Input,
            RsvpError::ConfigValidationError { .. } | RsvpError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            RsvpError::IoError(_) | RsvpError::CsvError(_) | RsvpError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 單筆回覆被拒絕，其他資料不受影響
            RsvpError::InvalidResponseValue { .. }
            | RsvpError::InvalidParticipant { .. }
            | RsvpError::InvalidRow { .. } => ErrorSeverity::Medium,
            RsvpError::ConfigValidationError { .. } | RsvpError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            RsvpError::CsvError(_) => ErrorSeverity::High,
            RsvpError::IoError(_) | RsvpError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            RsvpError::InvalidResponseValue { .. } => {
                "Use one of the recognized responses: Yes, No, Maybe".to_string()
            }
            RsvpError::InvalidParticipant { field, .. } => {
                format!("Provide a non-empty participant {}", field)
            }
            RsvpError::InvalidRow { .. } => {
                "Each CSV row needs exactly a name and a response".to_string()
            }
            RsvpError::ConfigValidationError { field, .. }
            | RsvpError::InvalidConfigValueError { field, .. } => {
                format!("Check the '{}' setting in your configuration", field)
            }
            RsvpError::IoError(_) => {
                "Check that the file exists and that you have permission to access it".to_string()
            }
            RsvpError::CsvError(_) => {
                "Make sure the CSV file has a 'name,response' header row".to_string()
            }
            RsvpError::SerializationError(_) => "Retry; this is likely an internal bug".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RsvpError::InvalidResponseValue { value } => {
                format!("'{}' is not a valid RSVP response", value)
            }
            RsvpError::InvalidParticipant { reason, .. } => {
                format!("The participant could not be accepted: {}", reason)
            }
            RsvpError::IoError(e) => format!("Could not read or write a file: {}", e),
            RsvpError::CsvError(e) => format!("Could not read the RSVP list: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RsvpError>;
