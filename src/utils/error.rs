use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Required column '{column}' not found in dataset header")]
    MissingColumnError { column: String },

    #[error("Malformed record at line {line}, column '{column}' (value '{value}'): {reason}")]
    MalformedRecordError {
        line: u64,
        column: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl DashboardError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DashboardError::ConfigValidationError { .. }
            | DashboardError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            DashboardError::CsvError(_)
            | DashboardError::MissingColumnError { .. }
            | DashboardError::MalformedRecordError { .. } => ErrorCategory::Data,
            DashboardError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 進程結束碼：設定錯誤 1、資料錯誤 2、系統錯誤 3
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DashboardError::CsvError(_) => {
                "Check that the dataset is a valid comma-separated file with a header row".to_string()
            }
            DashboardError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "Check the --data path or the [data] path entry in the config file".to_string()
            }
            DashboardError::IoError(e) if e.kind() == std::io::ErrorKind::AddrInUse => {
                "Another process is using the port; pass a different --port".to_string()
            }
            DashboardError::IoError(_) => "Check file permissions and available resources".to_string(),
            DashboardError::ConfigValidationError { .. } => {
                "Check the TOML config file syntax and section names".to_string()
            }
            DashboardError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the config file or CLI flags", field)
            }
            DashboardError::MissingColumnError { .. } => {
                "The dataset header must contain Make, Model, Year and Rating".to_string()
            }
            DashboardError::MalformedRecordError { line, .. } => {
                format!("Fix or remove line {} of the dataset", line)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Data => format!("Could not load the ratings dataset: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
