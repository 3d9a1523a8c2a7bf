use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmiCalcError {
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for EmiCalcError {
    fn from(e: serde_json::Error) -> Self {
        EmiCalcError::Serialization(e.to_string())
    }
}
