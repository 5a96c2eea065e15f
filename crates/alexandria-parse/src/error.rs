//! Error types for the interpreter layer.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Every
//! [`InterpreterError`] is a contract violation by the operator-stream
//! producer and converts to [`ExtractError::Interpreter`].

use alexandria_core::ExtractError;
use thiserror::Error;

/// A malformed operator stream.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpreterError {
    /// A composite construct-path record reached the interpreter.
    #[error("constructPath at operator #{index} must be flattened before interpretation")]
    UnflattenedPath {
        /// Position of the record in the page's stream.
        index: usize,
    },

    /// A construct-path payload named an opcode that is not a path primitive.
    #[error("opcode {opcode} is not a path primitive and cannot appear in constructPath")]
    UnknownPathOperator {
        /// Numeric opcode.
        opcode: u16,
    },

    /// A record carried a different number of arguments than its opcode takes.
    #[error("opcode {opcode} expects {expected} arguments, got {actual}")]
    ArityMismatch {
        /// Numeric opcode.
        opcode: u16,
        /// Fixed argument count of the opcode.
        expected: usize,
        /// Argument count actually present.
        actual: usize,
    },
}

impl From<InterpreterError> for ExtractError {
    fn from(err: InterpreterError) -> Self {
        ExtractError::Interpreter(err.to_string())
    }
}
