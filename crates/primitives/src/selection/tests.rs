use proptest::prelude::*;

use super::*;

#[test]
fn point_is_empty() {
	let sel = Selection::point(5);
	assert!(sel.is_empty());
	assert_eq!(sel.start, 5);
	assert_eq!(sel.end(), 5);
}

#[test]
fn end_is_start_plus_length() {
	let sel = Selection::new(3, 4);
	assert_eq!(sel.end(), 7);
	assert!(!sel.is_empty());
}

#[test]
fn default_is_origin_cursor() {
	assert_eq!(Selection::default(), Selection::point(0));
}

#[test]
fn checked_accepts_fitting_selection() {
	assert_eq!(Selection::checked(2, 3, 5), Ok(Selection::new(2, 3)));
}

#[test]
fn checked_rejects_overlong_selection() {
	let err = Selection::checked(2, 4, 5).unwrap_err();
	assert_eq!(err, SelectionError { end: 6, len: 5 });
}

#[test]
fn widen_left_moves_start_back() {
	assert_eq!(Selection::new(2, 1).widen_left(), Selection::new(1, 2));
}

#[test]
fn widen_left_noop_at_buffer_start() {
	let sel = Selection::new(0, 3);
	assert_eq!(sel.widen_left(), sel);
}

#[test]
fn shrink_left_moves_start_forward() {
	assert_eq!(Selection::new(1, 2).shrink_left(), Selection::new(2, 1));
}

#[test]
fn shrink_left_noop_on_cursor() {
	let sel = Selection::point(4);
	assert_eq!(sel.shrink_left(), sel);
}

#[test]
fn shrink_left_reaches_right_edge() {
	// (1,1) shrinks to the cursor at its own end, then stops.
	let sel = Selection::new(1, 1).shrink_left();
	assert_eq!(sel, Selection::point(2));
	assert_eq!(sel.shrink_left(), sel);
}

#[test]
fn widen_right_grows_length() {
	assert_eq!(Selection::new(1, 1).widen_right(8), Selection::new(1, 2));
}

#[test]
fn widen_right_noop_at_buffer_end() {
	let sel = Selection::new(6, 2);
	assert_eq!(sel.widen_right(8), sel);
}

#[test]
fn widen_right_may_reach_buffer_end() {
	assert_eq!(Selection::new(6, 1).widen_right(8), Selection::new(6, 2));
}

#[test]
fn shrink_right_gives_back_length() {
	assert_eq!(Selection::new(1, 2).shrink_right(), Selection::new(1, 1));
}

#[test]
fn shrink_right_noop_on_cursor() {
	let sel = Selection::point(3);
	assert_eq!(sel.shrink_right(), sel);
}

#[test]
fn move_left_collapses_and_clamps() {
	assert_eq!(Selection::new(3, 2).move_left(), Selection::point(2));
	assert_eq!(Selection::point(0).move_left(), Selection::point(0));
}

#[test]
fn move_right_collapses_and_clamps() {
	assert_eq!(Selection::new(2, 2).move_right(8), Selection::point(5));
	assert_eq!(Selection::new(7, 1).move_right(8), Selection::point(8));
	assert_eq!(Selection::point(8).move_right(8), Selection::point(8));
}

proptest! {
	#[test]
	fn arithmetic_preserves_bounds(
		start in 0usize..24,
		length in 0usize..24,
		len in 0usize..48,
	) {
		prop_assume!(start + length <= len);
		let sel = Selection::new(start, length);
		let results = [
			sel.widen_left(),
			sel.shrink_left(),
			sel.widen_right(len),
			sel.shrink_right(),
			sel.move_left(),
			sel.move_right(len),
		];
		for next in results {
			prop_assert!(next.end() <= len, "{next:?} escapes buffer of {len}");
		}
	}

	#[test]
	fn moves_always_yield_cursors(
		start in 0usize..24,
		length in 0usize..24,
		len in 0usize..48,
	) {
		prop_assume!(start + length <= len);
		let sel = Selection::new(start, length);
		prop_assert!(sel.move_left().is_empty());
		prop_assert!(sel.move_right(len).is_empty());
	}
}
