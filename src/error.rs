use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("http error: {0}")]
    Http(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("check failed: {0}")]
    Check(String),
}

pub type Result<T> = std::result::Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_each_variant() {
        let err = ProbeError::Config("x".to_string());
        assert!(format!("{err}").contains("configuration error"));
        let err = ProbeError::Check("invalid_url: unexpected error occurred.".to_string());
        assert_eq!(
            err.to_string(),
            "check failed: invalid_url: unexpected error occurred."
        );
    }
}
