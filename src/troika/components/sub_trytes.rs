use super::super::{State, NUM_SBOXES};
use crate::trit::Tryte;

/// The troika s-box. A permutation of `0 .. 27`.
pub const SBOX_LOOKUP: [u8; 27] = [
	6, 25, 17, 5, 15, 10, 4, 20, 24,
	0, 1, 2, 9, 22, 26, 18, 16, 14,
	3, 13, 23, 7, 11, 12, 8, 21, 19,
];

const fn compute_sbox() -> [Tryte; 27] {
	let mut out = [Tryte::ZERO; 27];

	let mut i = 0;

	while i < 27 {
		out[i] = match Tryte::new(SBOX_LOOKUP[i]) {
			Some(tryte) => tryte,
			None => panic!("s-box entry out of tryte range"),
		};

		i += 1;
	}

	out
}

const SBOX: [Tryte; 27] = compute_sbox();

pub fn sub_trytes(state: &mut State) {
	let trits = state.trits_mut();

	for sbox in 0 .. NUM_SBOXES {
		let chunk = &mut trits[3 * sbox ..][.. 3];

		let input = Tryte::from_trits([chunk[0], chunk[1], chunk[2]]);
		let output = SBOX[usize::from(input.value())];

		chunk.copy_from_slice(&output.to_trits());
	}
}

#[test]
fn sbox_is_a_permutation() {
	let mut seen = [false; 27];

	for &entry in &SBOX_LOOKUP {
		assert!(!seen[usize::from(entry)]);
		seen[usize::from(entry)] = true;
	}

	assert!(seen.iter().all(|&hit| hit));
}

#[test]
fn substitutes_each_tryte() {
	use crate::Trit;

	let mut state = State::new();
	// tryte 0 maps to 6 = (0, 2, 0), tryte 1 = (0, 0, 1) maps to 25 = (2, 2, 1)
	state[5] = Trit::ONE;

	sub_trytes(&mut state);

	let first: [u8; 6] = core::array::from_fn(|i| state[i].value());
	assert_eq!(first, [0, 2, 0, 2, 2, 1]);
	assert_eq!(state[726].value(), 0);
	assert_eq!(state[727].value(), 2);
}
