use crate::param::ParameterKind;
use thiserror::Error;

/// Error types for the L-system engine
///
/// Parameter and width errors describe grammar-construction defects. The
/// panicking accessors raise them as panics; the `try_*` variants hand them
/// back as values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LsysError {
    /// More than 255 parameters of a single kind were requested
    #[error("Too many {kind} parameters: {count} (maximum is 255)")]
    TooManyParameters { kind: ParameterKind, count: usize },

    /// A parameter index at or beyond the declared count for its kind
    #[error("Out of bounds {kind} parameter access: index {index}, but only {count} declared")]
    ParameterOutOfBounds {
        kind: ParameterKind,
        index: u8,
        count: u8,
    },

    /// A custom blob whose length differs from the symbol type's custom width
    #[error("Invalid custom data size: expected {expected} bytes, got {actual}")]
    CustomWidthMismatch { expected: u8, actual: usize },

    /// A copy directive that does not fit the predecessor or output type
    #[error("Invalid copy directive in rule '{rule}' at output {position}: {message}")]
    InvalidCopyDirective {
        rule: String,
        position: usize,
        message: String,
    },

    /// Two symbol types share an identity key but disagree on their parameters
    #[error("Conflicting definitions for symbol type '{symbol}': {message}")]
    ConflictingSymbolType { symbol: String, message: String },

    /// A caller-supplied safety bound was hit
    #[error("Resource limit exceeded: {limit_name} (limit: {limit_value}, actual: {actual_value}). {suggestion}")]
    ResourceLimitExceeded {
        limit_name: String,
        limit_value: String,
        actual_value: String,
        suggestion: String,
    },

    /// Export of a symbol sequence failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Multiple errors collected together
    #[error("{}", format_multiple(.0))]
    MultipleErrors(Vec<LsysError>),
}

fn format_multiple(errors: &[LsysError]) -> String {
    let mut out = String::from("Multiple errors:");
    for (i, error) in errors.iter().enumerate() {
        out.push_str(&format!("\n  {}. {}", i + 1, error));
    }
    out
}

impl LsysError {
    /// Collapse a list of errors: none is `Ok`, one is returned as-is
    pub fn collect(mut errors: Vec<LsysError>) -> Result<(), LsysError> {
        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(LsysError::MultipleErrors(errors)),
        }
    }
}

impl From<serde_json::Error> for LsysError {
    fn from(err: serde_json::Error) -> Self {
        LsysError::Serialization(err.to_string())
    }
}
