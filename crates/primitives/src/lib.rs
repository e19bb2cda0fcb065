//! Core value types for the caret command engine: selections and buffers.

/// Selection type and the offset arithmetic primitives.
pub mod selection;

pub use ropey::{Rope, RopeSlice};
pub use selection::{CharIdx, CharLen, Selection, SelectionError};
