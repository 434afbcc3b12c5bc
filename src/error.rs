//! Crate-wide error type.

use thiserror::Error;

/// Everything that can go wrong turning an input stream into a [`crate::ast::Formula`].
#[derive(Debug, Error)]
pub enum PropSatError {
    #[error("token '{token}' exceeds the {max}-byte token limit")]
    TokenTooLong { token: String, max: usize },

    #[error("'{token}' is not a variable, connective, or recognized token")]
    InvalidToken { token: String },

    #[error("'{op}' found too few operands on the stack")]
    StackUnderflow { op: &'static str },

    #[error("parsing left {remaining} items on the stack, expected exactly 1")]
    TrailingOperands { remaining: usize },

    #[error("no tokens to parse")]
    EmptyInput,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PropSatError>;
