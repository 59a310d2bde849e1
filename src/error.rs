use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChallengeListError {
    #[error("invalid challenge status '{0}'")]
    InvalidStatus(String),

    #[error("invalid sort column '{0}'")]
    InvalidSortColumn(String),

    #[error("invalid sort order '{0}', expected 'asc' or 'desc'")]
    InvalidSortOrder(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChallengeListError>;
