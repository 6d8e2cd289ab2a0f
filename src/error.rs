use std::fmt;

use crate::classify::ClassifyError;

#[derive(Debug)]
pub enum AppError {
    Classify(ClassifyError),
    Session(String),
    Config(String),
    IO(std::io::Error),
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Classify(err) => write!(f, "Classification error: {}", err),
            AppError::Session(msg) => write!(f, "Session error: {}", msg),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::IO(err) => write!(f, "IO error: {}", err),
            AppError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Classify(err) => Some(err),
            AppError::IO(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ClassifyError> for AppError {
    fn from(err: ClassifyError) -> Self {
        AppError::Classify(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IO(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Session(err.to_string())
    }
}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Other(msg)
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
