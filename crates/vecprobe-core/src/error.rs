use crate::PointId;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("collection name must not be empty")]
    EmptyName,

    #[error("invalid collection name '{0}': use letters, digits, '_' or '-'")]
    InvalidName(String),

    #[error("vector dimension must be greater than zero")]
    ZeroDimension,

    #[error("point {id} has {actual} dimensions, collection expects {expected}")]
    DimensionMismatch {
        id: PointId,
        expected: usize,
        actual: usize,
    },

    #[error("duplicate point id {0} in batch")]
    DuplicateId(PointId),

    #[error("invalid configuration: {0}")]
    Config(String),
}
