/// Application error kinds. Inputs are local and trusted, so the set stays small.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    DataError(String),
    RenderingError(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::DataError(msg) => write!(f, "Data Error: {}", msg),
            AppError::RenderingError(msg) => write!(f, "Rendering Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::DataError(error.to_string())
    }
}

pub type DataResult<T> = Result<T, AppError>;
pub type RenderingResult<T> = Result<T, AppError>;
