use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },
    #[error("validation error: {0}")]
    Validation(String),
    #[error("seed error: {0}")]
    Seed(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &'static str, id: i64) -> Self { Self::NotFound { entity, id } }

    pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound { .. }) }
}
