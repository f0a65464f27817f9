use crate::domain::model::Category;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Content-Type must be application/json")]
    BadContentType,

    #[error("Request body must be valid JSON")]
    MalformedBody { reason: String },

    #[error("title must be a non-empty string")]
    InvalidTitle,

    #[error("category must be one of the allowed values: {}", Category::allowed_labels())]
    InvalidCategory,

    #[error("execMonth must be an integer between 1 and 12")]
    InvalidExecMonth,

    #[error("{name} is missing")]
    MissingConfiguration { name: &'static str },

    #[error("{message}")]
    Upstream { message: String },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl IntakeError {
    /// HTTP status reported to the caller for this failure.
    pub fn status_code(&self) -> u16 {
        match self {
            IntakeError::MethodNotAllowed => 405,
            IntakeError::BadContentType
            | IntakeError::MalformedBody { .. }
            | IntakeError::InvalidTitle
            | IntakeError::InvalidCategory
            | IntakeError::InvalidExecMonth => 400,
            IntakeError::MissingConfiguration { .. }
            | IntakeError::Upstream { .. }
            | IntakeError::Transport(_)
            | IntakeError::InvalidConfigValue { .. } => 500,
        }
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

pub type Result<T> = std::result::Result<T, IntakeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_4xx() {
        assert_eq!(IntakeError::MethodNotAllowed.status_code(), 405);
        assert_eq!(IntakeError::InvalidTitle.status_code(), 400);
        assert!(IntakeError::InvalidExecMonth.is_client_error());
        assert!(IntakeError::BadContentType.is_client_error());
    }

    #[test]
    fn test_server_faults_map_to_500() {
        let missing = IntakeError::MissingConfiguration {
            name: "NOTION_DATABASE_ID",
        };
        assert_eq!(missing.status_code(), 500);
        assert_eq!(missing.to_string(), "NOTION_DATABASE_ID is missing");

        let upstream = IntakeError::Upstream {
            message: "Could not find database".to_string(),
        };
        assert!(!upstream.is_client_error());
        assert_eq!(upstream.to_string(), "Could not find database");
    }

    #[test]
    fn test_invalid_config_value_names_field_and_reason() {
        let err = IntakeError::InvalidConfigValue {
            field: "bind".to_string(),
            value: "localhost".to_string(),
            reason: "invalid socket address syntax".to_string(),
        };
        assert_eq!(err.status_code(), 500);
        assert_eq!(
            err.to_string(),
            "Invalid value for bind (localhost): invalid socket address syntax"
        );
    }

    #[test]
    fn test_invalid_category_lists_allowed_values() {
        assert_eq!(
            IntakeError::InvalidCategory.to_string(),
            "category must be one of the allowed values: 買い物, Private, Works, 処理済(待ち)"
        );
    }
}
