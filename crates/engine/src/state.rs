//! Editor state and the outermost command dispatch.

use caret_primitives::{Rope, Selection, SelectionError};
use tracing::debug;

use crate::command::Command;

/// The logical editing mode, derived from the two state flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
	/// Motions move the cursor; edits act around it.
	Normal,
	/// Motions reshape the selection instead of moving the cursor.
	Selecting,
	/// The next command string is committed as literal text.
	Entering,
}

impl Mode {
	/// Returns a short display label for the mode.
	pub fn name(&self) -> &'static str {
		match self {
			Mode::Normal => "NORMAL",
			Mode::Selecting => "SELECT",
			Mode::Entering => "ENTER",
		}
	}
}

/// One immutable editor state.
///
/// Every [`apply`](Self::apply) produces a wholly new state and leaves the
/// previous one valid; rope clones share their backing storage, so this is
/// cheap. States the engine produces always satisfy
/// `selection.end() <= text.len_chars()`.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
	/// The text being edited.
	pub text: Rope,
	/// Current selection; zero length denotes a pure cursor.
	pub selection: Selection,
	/// Whether motions extend the selection (`e` toggles this).
	pub selecting: bool,
	/// Whether the next command string is literal text (`t` toggles this).
	pub entering: bool,
}

impl EditorState {
	/// Creates a state over `text` with a cursor at the origin and both
	/// flags off.
	pub fn new(text: &str) -> Self {
		Self {
			text: Rope::from_str(text),
			selection: Selection::point(0),
			selecting: false,
			entering: false,
		}
	}

	/// Creates a state with an explicit selection, verifying it fits the
	/// text.
	pub fn try_new(
		text: &str,
		selection: Selection,
		selecting: bool,
		entering: bool,
	) -> Result<Self, SelectionError> {
		let text = Rope::from_str(text);
		let selection = Selection::checked(selection.start, selection.length, text.len_chars())?;
		Ok(Self { text, selection, selecting, entering })
	}

	/// Returns the buffer length in characters.
	pub fn len_chars(&self) -> usize {
		self.text.len_chars()
	}

	/// Returns the mode derived from the two flags.
	///
	/// While entering, the selecting flag is preserved but not consulted.
	pub fn mode(&self) -> Mode {
		if self.entering {
			Mode::Entering
		} else if self.selecting {
			Mode::Selecting
		} else {
			Mode::Normal
		}
	}

	/// Returns a copy of this state with a different selection.
	pub fn with_selection(&self, selection: Selection) -> Self {
		Self { selection, ..self.clone() }
	}

	/// Applies one command string and returns the resulting state.
	///
	/// If the incoming state is entering, the whole string is committed as
	/// literal text. Otherwise the string is parsed into operations which
	/// fold over the state left to right; a toggle does not stop the fold,
	/// it only flips the flag seen by the operations after it.
	pub fn apply(&self, input: &str) -> Self {
		if self.entering {
			debug!(chars = input.chars().count(), "committing literal text");
			return self.commit_text(input);
		}

		let commands = Command::parse(input);
		debug!(recognized = commands.len(), "folding command string");
		commands.iter().fold(self.clone(), |state, command| command.apply(&state))
	}

	/// Replaces the selection with `literal` and leaves entering mode.
	///
	/// The cursor lands after the inserted text; on a previously empty
	/// buffer that is simply the length of the inserted text. The
	/// selecting flag survives the commit.
	fn commit_text(&self, literal: &str) -> Self {
		let was_empty = self.text.len_chars() == 0;
		let mut text = self.text.clone();
		let start = self.selection.start.min(text.len_chars());
		let end = self.selection.end().min(text.len_chars());
		text.remove(start..end);
		text.insert(start, literal);

		let inserted = literal.chars().count();
		let position = if was_empty { inserted } else { start + inserted };
		Self {
			text,
			selection: Selection::point(position),
			selecting: self.selecting,
			entering: false,
		}
	}
}
