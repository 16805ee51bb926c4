use thiserror::Error;

use super::compile::CompileError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Compile error: {0}")]
    Compile(#[from] CompileError),

    #[error("Settings error: {0}")]
    Settings(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_compile_error_conversion() {
        let err: AppError = CompileError::Render {
            code: 1,
            stderr: "bad graph".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::Compile(_)));
        assert!(err.to_string().contains("bad graph"));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Settings("invalid renderer path".to_string());
        assert_eq!(err.to_string(), "Settings error: invalid renderer path");
    }
}
