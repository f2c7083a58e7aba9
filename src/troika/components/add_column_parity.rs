use super::super::{State, COLUMNS, ROWS, SLICES};
use crate::Trit;

pub fn add_column_parity(state: &mut State) {
	let mut parities = [[Trit::ZERO; COLUMNS]; SLICES];

	for slice in 0 .. SLICES {
		for column in 0 .. COLUMNS {
			parities[slice][column] = state.column_parity(slice, column);
		}
	}

	for slice in 0 .. SLICES {
		let next_slice = (slice + 1) % SLICES;

		for column in 0 .. COLUMNS {
			let left = (column + COLUMNS - 1) % COLUMNS;
			let right = (column + 1) % COLUMNS;

			let crossed_parities = parities[slice][left] + parities[next_slice][right];

			for row in 0 .. ROWS {
				*state.get_mut(slice, row, column) += crossed_parities;
			}
		}
	}
}

#[test]
fn spreads_parity_to_neighbouring_columns() {
	let mut state = State::new();
	*state.get_mut(3, 1, 4) = Trit::ONE;

	add_column_parity(&mut state);

	for row in 0 .. ROWS {
		// same slice, column to the right
		assert_eq!(state.get(3, row, 5), Trit::ONE);
		// previous slice, column to the left
		assert_eq!(state.get(2, row, 3), Trit::ONE);
	}

	assert_eq!(state.get(3, 1, 4), Trit::ONE);
	assert_eq!(state.trits().iter().filter(|&&trit| trit != Trit::ZERO).count(), 7);
}

#[test]
fn parity_wraps_around_the_cube() {
	let mut state = State::new();
	*state.get_mut(0, 0, 0) = Trit::TWO;

	add_column_parity(&mut state);

	assert_eq!(state.get(0, 2, 1), Trit::TWO);
	assert_eq!(state.get(26, 2, 8), Trit::TWO);
}
