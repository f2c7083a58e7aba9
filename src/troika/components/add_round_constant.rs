use super::super::{State, COLUMNS, ROUND_CONSTANTS, SLICES};
use crate::Trit;

pub fn add_round_constant(state: &mut State, round_number: usize) {
	let constants = &ROUND_CONSTANTS[round_number];

	for slice in 0 .. SLICES {
		for column in 0 .. COLUMNS {
			let constant = Trit::from_u8_reduced(constants[slice * COLUMNS + column]);

			*state.get_mut(slice, 0, column) += constant;
		}
	}
}

#[test]
fn round_constant_table_shape() {
	use super::super::NUM_ROUNDS;

	assert_eq!(ROUND_CONSTANTS.len(), NUM_ROUNDS);

	for row in &ROUND_CONSTANTS {
		assert_eq!(row.len(), COLUMNS * SLICES);
		assert!(row.iter().all(|&val| val < 3));
	}
}

#[test]
fn only_touches_the_first_row() {
	let mut state = State::new();
	add_round_constant(&mut state, 0);

	for slice in 0 .. SLICES {
		for column in 0 .. COLUMNS {
			let expected = Trit::from_u8_reduced(ROUND_CONSTANTS[0][slice * COLUMNS + column]);

			assert_eq!(state.get(slice, 0, column), expected);
			assert_eq!(state.get(slice, 1, column), Trit::ZERO);
			assert_eq!(state.get(slice, 2, column), Trit::ZERO);
		}
	}
}
