use super::super::{State, COLUMNS, ROWS, SLICES};

/// Row `r` of every slice is rotated right by `3 * SHIFT_ROWS_PARAM[r]` columns.
pub const SHIFT_ROWS_PARAM: [usize; ROWS] = [0, 1, 2];

pub fn shift_rows(state: &mut State) {
	let mut new_state = State::new();

	for slice in 0 .. SLICES {
		for row in 0 .. ROWS {
			for column in 0 .. COLUMNS {
				let new_column = (column + 3 * SHIFT_ROWS_PARAM[row]) % COLUMNS;

				*new_state.get_mut(slice, row, new_column) = state.get(slice, row, column);
			}
		}
	}

	*state = new_state;
}

#[test]
fn rotates_rows_by_multiples_of_three() {
	use crate::Trit;

	let mut state = State::new();
	*state.get_mut(4, 0, 1) = Trit::ONE;
	*state.get_mut(4, 1, 7) = Trit::TWO;
	*state.get_mut(4, 2, 8) = Trit::ONE;

	shift_rows(&mut state);

	assert_eq!(state.get(4, 0, 1), Trit::ONE);
	assert_eq!(state.get(4, 1, 1), Trit::TWO);
	assert_eq!(state.get(4, 2, 5), Trit::ONE);
	assert_eq!(state.trits().iter().filter(|&&trit| trit != Trit::ZERO).count(), 3);
}
