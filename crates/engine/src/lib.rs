//! Modal command engine for caret.
//!
//! The engine is a pure transformation: [`EditorState::apply`] takes the
//! current state plus one command string and returns the next state. Nothing
//! is retained between calls; the caller owns the single live state and
//! decides when a returned state becomes current.

pub mod command;
pub mod segment;
pub mod state;

pub use command::Command;
pub use segment::Segment;
pub use state::{EditorState, Mode};
