use thiserror::Error;

#[derive(Error, Debug)]
pub enum CcrmError {
    #[error("student '{id}' not found")]
    StudentNotFound { id: String },

    #[error("course '{code}' not found")]
    CourseNotFound { code: String },

    #[error("student '{student_id}' is already enrolled in '{course_code}'")]
    DuplicateEnrollment {
        student_id: String,
        course_code: String,
    },

    #[error("enrolling in '{course_code}' would put student '{student_id}' at {attempted} credits (cap is {max_credits})")]
    CreditLimitExceeded {
        student_id: String,
        course_code: String,
        attempted: u32,
        max_credits: u32,
    },

    #[error("a student with id '{id}' already exists")]
    DuplicateStudent { id: String },

    #[error("student '{student_id}' has no enrollment in '{course_code}'")]
    EnrollmentNotFound {
        student_id: String,
        course_code: String,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

/// How bad a failure is from the process' point of view. Drives the CLI
/// exit code; every enrollment rule violation is user-recoverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CcrmError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CcrmError::StudentNotFound { .. }
            | CcrmError::CourseNotFound { .. }
            | CcrmError::DuplicateEnrollment { .. }
            | CcrmError::CreditLimitExceeded { .. }
            | CcrmError::DuplicateStudent { .. }
            | CcrmError::EnrollmentNotFound { .. }
            | CcrmError::ValidationError { .. } => ErrorSeverity::Low,
            CcrmError::ConfigError { .. }
            | CcrmError::InvalidConfigValueError { .. }
            | CcrmError::MissingConfigError { .. } => ErrorSeverity::Medium,
            CcrmError::CsvError(_) | CcrmError::SerializationError(_) => ErrorSeverity::High,
            CcrmError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CcrmError::StudentNotFound { id } => {
                format!("No student record exists for id '{}'.", id)
            }
            CcrmError::CourseNotFound { code } => {
                format!("No course '{}' is present in the catalog.", code)
            }
            CcrmError::DuplicateEnrollment { course_code, .. } => {
                format!("The student is already enrolled in '{}'.", course_code)
            }
            CcrmError::CreditLimitExceeded {
                attempted,
                max_credits,
                ..
            } => format!(
                "Enrollment refused: {} credits would exceed the {}-credit cap.",
                attempted, max_credits
            ),
            CcrmError::DuplicateStudent { id } => {
                format!("A student with id '{}' is already registered.", id)
            }
            CcrmError::EnrollmentNotFound { course_code, .. } => {
                format!("The student holds no enrollment in '{}'.", course_code)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CcrmError::StudentNotFound { .. } => {
                "Check the student id, or create the record first".to_string()
            }
            CcrmError::CourseNotFound { .. } => {
                "Check the course code against the catalog listing".to_string()
            }
            CcrmError::DuplicateEnrollment { .. } => {
                "Pick a course the student is not yet enrolled in".to_string()
            }
            CcrmError::CreditLimitExceeded { .. } => {
                "Drop the request or raise max_credits in the configuration".to_string()
            }
            CcrmError::DuplicateStudent { .. } => {
                "Use a fresh student id; existing records are never replaced".to_string()
            }
            CcrmError::EnrollmentNotFound { .. } => {
                "Enroll the student before recording a grade".to_string()
            }
            CcrmError::ConfigError { .. }
            | CcrmError::InvalidConfigValueError { .. }
            | CcrmError::MissingConfigError { .. } => {
                "Fix the configuration file or command-line flags and retry".to_string()
            }
            CcrmError::CsvError(_) | CcrmError::SerializationError(_) => {
                "Inspect the export data for malformed fields".to_string()
            }
            CcrmError::IoError(_) => {
                "Check that the data folder exists and is writable".to_string()
            }
            CcrmError::ValidationError { .. } => "Correct the rejected field value".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CcrmError>;
