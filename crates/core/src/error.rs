use crate::validation::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum Fp17Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("claim failed validation:\n{0}")]
    Validation(ValidationErrors),
    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("translation error: {0}")]
    Translation(String),
    #[error("failed to read claim file: {0}")]
    FileRead(std::io::Error),
}

pub type Fp17Result<T> = std::result::Result<T, Fp17Error>;
