//! Splitting a buffer into highlightable pieces.

use crate::state::EditorState;

/// One run of characters with a uniform highlight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
	/// The characters of this run.
	pub text: String,
	/// Whether a renderer should draw this run highlighted.
	pub selected: bool,
}

impl EditorState {
	/// Splits the buffer into before / highlighted / after runs.
	///
	/// The highlight covers the selection plus the cell after it, so a pure
	/// cursor still lights up the character it sits on. The extra cell is
	/// clamped at the buffer end, which leaves a cursor past the last
	/// character with an empty highlight. An empty buffer yields no
	/// segments at all.
	pub fn segments(&self) -> Vec<Segment> {
		let len = self.len_chars();
		if len == 0 {
			return Vec::new();
		}

		let start = self.selection.start.min(len);
		let highlight_end = (self.selection.end() + 1).min(len);

		vec![
			Segment {
				text: self.text.slice(..start).to_string(),
				selected: false,
			},
			Segment {
				text: self.text.slice(start..highlight_end).to_string(),
				selected: true,
			},
			Segment {
				text: self.text.slice(highlight_end..).to_string(),
				selected: false,
			},
		]
	}
}
