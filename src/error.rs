use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("invalid user id '{0}'")]
    InvalidUserId(String),

    #[error("profile for user '{0}' not found")]
    NotFound(String),

    #[error("Request failed with status code {}", .0.as_u16())]
    Status(reqwest::StatusCode),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl ProfileError {
    /// The backend answered but has no profile for the identifier
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProfileError::NotFound(_))
    }

    /// Failures worth trying again later: transport errors and 5xx answers
    pub fn is_transient(&self) -> bool {
        match self {
            ProfileError::Status(status) => status.is_server_error(),
            ProfileError::Http(err) => {
                err.is_timeout()
                    || err.is_connect()
                    || err.status().is_some_and(|s| s.is_server_error())
            }
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;
