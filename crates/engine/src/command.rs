//! The command alphabet, parsing, and per-operation semantics.

use caret_primitives::{Rope, Selection};
use smallvec::SmallVec;

use crate::state::EditorState;

/// Parsed operation list; command strings are short in practice.
pub type CommandSeq = SmallVec<[Command; 16]>;

/// One recognized editing or motion operation.
///
/// Commands are plain values: each reads the flags of the state it is
/// applied to and picks its own sub-behavior, so dispatch stays a match
/// over variants rather than a trait hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
	/// `a` — widen left while selecting, otherwise move the cursor left.
	MotionLeft,
	/// `s` — shrink from the left while selecting, otherwise move right.
	MotionRight,
	/// `d` — give back one character on the right, regardless of mode.
	ShrinkRight,
	/// `f` — take one more character on the right, regardless of mode.
	WidenRight,
	/// `z` — delete the selection, or the character before the cursor.
	DeleteLeft,
	/// `x` — delete the selection, or the character under the cursor.
	DeleteRight,
	/// `e` — toggle the selecting flag.
	ToggleSelect,
	/// `t` — toggle the entering flag.
	ToggleEnter,
}

impl Command {
	/// Maps one character of the alphabet to its operation.
	///
	/// Anything outside the eight-character alphabet is `None`.
	pub fn from_char(c: char) -> Option<Self> {
		match c {
			'a' => Some(Self::MotionLeft),
			's' => Some(Self::MotionRight),
			'd' => Some(Self::ShrinkRight),
			'f' => Some(Self::WidenRight),
			'z' => Some(Self::DeleteLeft),
			'x' => Some(Self::DeleteRight),
			'e' => Some(Self::ToggleSelect),
			't' => Some(Self::ToggleEnter),
			_ => None,
		}
	}

	/// Parses a command string, silently dropping unrecognized characters.
	pub fn parse(input: &str) -> CommandSeq {
		input.chars().filter_map(Self::from_char).collect()
	}

	/// Applies this operation to a state, producing the next state.
	pub fn apply(self, state: &EditorState) -> EditorState {
		let len = state.len_chars();
		match self {
			Self::MotionLeft => {
				let selection = if state.selecting {
					state.selection.widen_left()
				} else {
					state.selection.move_left()
				};
				state.with_selection(selection)
			}
			Self::MotionRight => {
				let selection = if state.selecting {
					state.selection.shrink_left()
				} else {
					state.selection.move_right(len)
				};
				state.with_selection(selection)
			}
			Self::ShrinkRight => state.with_selection(state.selection.shrink_right()),
			Self::WidenRight => state.with_selection(state.selection.widen_right(len)),
			Self::DeleteLeft => delete_left(state),
			Self::DeleteRight => delete_right(state),
			Self::ToggleSelect => EditorState { selecting: !state.selecting, ..state.clone() },
			Self::ToggleEnter => EditorState { entering: !state.entering, ..state.clone() },
		}
	}
}

/// Removes the selected range, collapsing the selection to its start.
///
/// Mode flags are untouched; both deletions share this path whenever the
/// selection is non-empty.
fn delete_selection(state: &EditorState) -> EditorState {
	let mut text = state.text.clone();
	let end = state.selection.end().min(text.len_chars());
	text.remove(state.selection.start..end);
	EditorState {
		text,
		selection: Selection::point(state.selection.start),
		..state.clone()
	}
}

fn delete_left(state: &EditorState) -> EditorState {
	if !state.selection.is_empty() {
		return delete_selection(state);
	}

	// A one-character buffer empties outright, cursor back at the origin.
	if state.len_chars() == 1 {
		return EditorState {
			text: Rope::new(),
			selection: Selection::point(0),
			..state.clone()
		};
	}

	let position = state.selection.start.saturating_sub(1);
	let mut text = state.text.clone();
	text.remove(position..state.selection.start.min(text.len_chars()));
	EditorState {
		text,
		selection: Selection::point(position),
		..state.clone()
	}
}

fn delete_right(state: &EditorState) -> EditorState {
	if !state.selection.is_empty() {
		return delete_selection(state);
	}

	let len = state.len_chars();

	// On the last character the buffer truncates and the cursor steps back,
	// saturating at the origin when the buffer empties.
	if len > 0 && state.selection.start == len - 1 {
		let mut text = state.text.clone();
		text.remove(state.selection.start..len);
		return EditorState {
			text,
			selection: Selection::point(state.selection.start.saturating_sub(1)),
			..state.clone()
		};
	}

	let position = (state.selection.start + 1).min(len.saturating_sub(1));
	let mut text = state.text.clone();
	text.remove(state.selection.start.min(position)..position);
	EditorState { text, ..state.clone() }
}
