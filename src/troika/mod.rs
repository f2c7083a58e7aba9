//! The troika permutation: a substitution-permutation network over a
//! 729-trit state, used as the sponge function behind [`sponge::hash`].

use log::{log_enabled, trace, Level};

use crate::Trit;

mod round_constants;
mod state;

use round_constants::ROUND_CONSTANTS;

pub use state::State;

mod components {
	pub mod add_column_parity;
	pub mod add_round_constant;
	pub mod shift_lanes;
	pub mod shift_rows;
	pub mod sub_trytes;
}

use components::add_column_parity::add_column_parity;
use components::add_round_constant::add_round_constant;
use components::shift_lanes::shift_lanes;
use components::shift_rows::shift_rows;
use components::sub_trytes::sub_trytes;

pub mod sponge;

pub const COLUMNS: usize = 9;
pub const ROWS: usize = 3;
pub const SLICES: usize = 27;
pub const SLICE_SIZE: usize = COLUMNS * ROWS;
pub const STATE_SIZE: usize = SLICE_SIZE * SLICES;

/// Number of 3-trit s-boxes applied per round.
pub const NUM_SBOXES: usize = STATE_SIZE / 3;

/// Full round count, also the largest count [`permute`] accepts.
pub const NUM_ROUNDS: usize = 24;

/// Trits of state exposed to the message and digest per sponge step.
pub const RATE: usize = 243;

/// Trit written right after the last message trit when padding.
pub const PADDING: Trit = Trit::ONE;

fn round(state: &mut State, round_number: usize) {
	sub_trytes(state);
	shift_rows(state);
	shift_lanes(state);
	add_column_parity(state);
	add_round_constant(state, round_number);
}

/// Applies the first `num_rounds` rounds of troika to `state`.
///
/// # Panics
///
/// Panics if `num_rounds` exceeds [`NUM_ROUNDS`]; there are no constants for
/// further rounds.
pub fn permute(state: &mut State, num_rounds: usize) {
	assert!(
		num_rounds <= NUM_ROUNDS,
		"troika supports at most {} rounds, got {}",
		NUM_ROUNDS,
		num_rounds,
	);

	for round_number in 0 .. num_rounds {
		round(state, round_number);
	}

	if log_enabled!(Level::Trace) {
		trace!("troika state after {} rounds:\n{}", num_rounds, state);
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	fn arb_state() -> impl Strategy<Value = State> {
		proptest::collection::vec(0u8 .. 3, STATE_SIZE).prop_map(|vals| {
			let mut state = State::new();

			for (trit, val) in state.trits_mut().iter_mut().zip(vals) {
				*trit = Trit::from_u8_reduced(val);
			}

			state
		})
	}

	#[test]
	fn zero_rounds_is_identity() {
		let mut state = State::new();
		state[5] = Trit::TWO;
		let before = state.clone();

		permute(&mut state, 0);
		assert_eq!(state, before);
	}

	#[test]
	#[should_panic(expected = "at most 24 rounds")]
	fn too_many_rounds_panics() {
		permute(&mut State::new(), NUM_ROUNDS + 1);
	}

	#[test]
	fn padded_zero_state_permutation() {
		let mut state = State::new();
		state[0] = PADDING;
		permute(&mut state, NUM_ROUNDS);

		let expected = "\
			200102102122212001021120110021100111112121202112200101102220222011012002121211120022120100000211212211122212220220222121020110001211220120211202110202201000021221002021001012100112110121011000020220000220121020111000221020022010112112112212020\
			111210012120021111001001122002011112001200200021021202012212111221121122111112122112212222001122221222100112200112010000001111200111111102011022121102220122122200120110111002002202020112011200021021102111100111200022200002202222002120122011111100\
			120021122011002212010210121021020100011012120100110101212222110102221101111000122002012220102020201101011112021221010112222212111100012102020020220112121221000012121101012011120001002001201001112000002010122211002101010002022020021222121201";

		let actual: String = state.trits().iter().map(|trit| char::from(b'0' + trit.value())).collect();
		assert_eq!(actual, expected);
	}

	proptest! {
		#[test]
		fn rounds_compose(start in arb_state(), (r1, r2) in (0 .. NUM_ROUNDS).prop_flat_map(|r1| (Just(r1), r1 + 1 ..= NUM_ROUNDS))) {
			let mut split = start.clone();
			permute(&mut split, r1);

			for round_number in r1 .. r2 {
				round(&mut split, round_number);
			}

			let mut whole = start;
			permute(&mut whole, r2);

			prop_assert_eq!(split, whole);
		}

		#[test]
		fn permute_keeps_trits_in_range(mut state in arb_state()) {
			permute(&mut state, NUM_ROUNDS);
			prop_assert!(state.trits().iter().all(|trit| trit.value() < 3));
		}
	}
}
