use thiserror::Error;

use crate::core::DomainType;

pub type AxisResult<T> = Result<T, AxisError>;

#[derive(Debug, Error)]
pub enum AxisError {
    #[error("invalid axis configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Tick values whose type cannot be resolved for the axis domain type.
    #[error("tick value `{value}` cannot be coerced for a {domain_type} axis")]
    DomainTypeMismatch {
        value: String,
        domain_type: DomainType,
    },

    #[error("renderer failure: {0}")]
    Renderer(String),
}
