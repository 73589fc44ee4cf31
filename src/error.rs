use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors raised at the configuration surface.
///
/// The numerical core itself never errors: shape mismatches and degenerate
/// geometry degrade to empty or zero results instead.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed.
    #[error("config json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Explicit shape error for callers of `try_multiply`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("empty operand")]
    EmptyOperand,

    #[error("shape mismatch: {a_rows}x{a_cols} * {b_rows}x{b_cols}")]
    ShapeMismatch {
        a_rows: usize,
        a_cols: usize,
        b_rows: usize,
        b_cols: usize,
    },
}
