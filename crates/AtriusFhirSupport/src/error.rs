use thiserror::Error;

/// Errors raised while constructing model values outside of builder validation.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A primitive could not be parsed from its lexical form.
    #[error("invalid {type_name} value '{value}'")]
    InvalidPrimitive {
        type_name: &'static str,
        value: String,
    },

    /// A code is not a member of the value set bound to the element.
    #[error("'{value}' is not a valid code for value set {value_set}")]
    InvalidCode {
        value_set: &'static str,
        value: String,
    },

    #[error("unknown resource type '{0}'")]
    UnknownResourceType(String),

    #[error("invalid model configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl ModelError {
    pub fn invalid_primitive(type_name: &'static str, value: impl Into<String>) -> Self {
        ModelError::InvalidPrimitive {
            type_name,
            value: value.into(),
        }
    }
}
