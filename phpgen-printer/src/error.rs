use thiserror::Error;

/// Result type for render operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while rendering.
///
/// The printer itself never fails on a well-formed model; every variant
/// originates in the literal serializer and is propagated unchanged.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("cannot represent {value} as a PHP literal")]
    UnrepresentableValue { value: String },

    #[error("nesting level too deep (more than {limit} levels)")]
    NestingTooDeep { limit: usize },
}
