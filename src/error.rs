use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecheckError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("invalid question bank: {0}")]
    InvalidQuestionBank(String),

    #[error("invalid text table: {0}")]
    InvalidTextTable(String),

    #[error("invalid answer: {0}")]
    InvalidAnswer(String),

    #[error("pdf encoding failed: {0}")]
    PdfEncode(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RecheckError>;
