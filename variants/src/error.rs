use thiserror::Error;

/// Raised when a variant is parsed from text and the text does not name a
/// known value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariantError {
    #[error("unknown {field} `{value}`")]
    UnknownValue { field: &'static str, value: String },

    #[error("unknown variant key `{0}`")]
    UnknownKey(String),

    #[error("expected `key=value`, got `{0}`")]
    MalformedPair(String),
}
