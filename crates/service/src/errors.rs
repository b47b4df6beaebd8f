use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// True for caller mistakes (bad polymorphic reference and the like),
    /// false for storage failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Model(models::errors::ModelError::Validation(_)))
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::ServiceError;
    use models::errors::ModelError;

    #[test]
    fn only_model_validation_is_a_caller_mistake() {
        assert!(ServiceError::Model(ModelError::Validation("movieId or seriesId is required".into())).is_validation());
        assert!(!ServiceError::Model(ModelError::Db("locked".into())).is_validation());
        assert!(!ServiceError::not_found("review").is_validation());
        assert!(!ServiceError::from(sea_orm::DbErr::Custom("boom".into())).is_validation());
    }
}
