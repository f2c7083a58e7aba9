use super::super::{State, COLUMNS, ROWS, SLICES, SLICE_SIZE};

/// Slice offset for each lane, indexed by `column + COLUMNS * row`.
pub const SHIFT_LANES_PARAM: [usize; SLICE_SIZE] = [
	19, 13, 21, 10, 24, 15, 2, 9, 3,
	14, 0, 6, 5, 1, 25, 22, 23, 20,
	7, 17, 26, 12, 8, 18, 16, 11, 4,
];

pub fn shift_lanes(state: &mut State) {
	let mut new_state = State::new();

	for slice in 0 .. SLICES {
		for row in 0 .. ROWS {
			for column in 0 .. COLUMNS {
				let offset = SHIFT_LANES_PARAM[column + COLUMNS * row];
				let new_slice = (slice + offset) % SLICES;

				*new_state.get_mut(new_slice, row, column) = state.get(slice, row, column);
			}
		}
	}

	*state = new_state;
}

#[test]
fn lane_offsets_are_distinct() {
	let mut seen = [false; SLICES];

	for &offset in &SHIFT_LANES_PARAM {
		assert!(offset < SLICES);
		assert!(!seen[offset]);
		seen[offset] = true;
	}
}

#[test]
fn moves_lanes_across_slices() {
	use crate::Trit;

	let mut state = State::new();
	*state.get_mut(0, 0, 0) = Trit::ONE;
	*state.get_mut(20, 2, 2) = Trit::TWO;

	shift_lanes(&mut state);

	assert_eq!(state.get(19, 0, 0), Trit::ONE);
	// offset 26 wraps slice 20 around to slice 19
	assert_eq!(state.get(19, 2, 2), Trit::TWO);
	assert_eq!(state.trits().iter().filter(|&&trit| trit != Trit::ZERO).count(), 2);
}
