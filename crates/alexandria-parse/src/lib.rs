//! alexandria-parse: operator-stream interpretation and the page-data
//! collaborator interface.
//!
//! This crate models the flattened drawing operators a renderer emits,
//! replays them to recover figure bounding boxes, and defines the
//! [`DocumentSource`] trait through which extraction reads pages. It
//! depends on alexandria-core for shared data types.

pub mod error;
pub mod interpreter;
pub mod interpreter_state;
pub mod memory_backend;
pub mod operator;
pub mod source;

pub use alexandria_core;
pub use error::InterpreterError;
pub use interpreter::{FigureInterpreter, Figures, iterate_figures};
pub use interpreter_state::InterpreterState;
pub use memory_backend::{MemoryDocument, MemoryError, MemoryPage};
pub use operator::{Opcode, OperatorRecord, flatten_construct_path};
pub use source::{DocumentSource, PageDimensions};
