//! Sponge mode over the troika permutation.
//!
//! The final padded block is written into the state but not permuted by
//! [`absorb`]; the first permutation of [`squeeze`] takes care of it. A
//! message whose length is a multiple of the rate still gets a block holding
//! only the padding trit.

use log::trace;

use super::{permute, State, NUM_ROUNDS, PADDING, RATE, STATE_SIZE};
use crate::Trit;

fn check_parameters(rate: usize, num_rounds: usize) {
	assert!(rate > 0 && rate <= STATE_SIZE, "invalid sponge rate {}", rate);
	assert!(
		num_rounds <= NUM_ROUNDS,
		"troika supports at most {} rounds, got {}",
		NUM_ROUNDS,
		num_rounds,
	);
}

/// Absorbs `message` into `state`, `rate` trits at a time, and leaves the
/// padded final block in the front of the state.
///
/// # Panics
///
/// Panics if `rate` is zero or larger than the state, or if `num_rounds`
/// exceeds [`NUM_ROUNDS`].
pub fn absorb(state: &mut State, rate: usize, message: &[Trit], num_rounds: usize) {
	check_parameters(rate, num_rounds);

	let mut blocks = message.chunks_exact(rate);

	for block in &mut blocks {
		state.trits_mut()[.. rate].copy_from_slice(block);
		permute(state, num_rounds);
	}

	let remainder = blocks.remainder();
	let last_block = &mut state.trits_mut()[.. rate];

	last_block[.. remainder.len()].copy_from_slice(remainder);
	last_block[remainder.len()] = PADDING;
	last_block[remainder.len() + 1 ..].fill(Trit::ZERO);
}

/// Fills `output` from the front `rate` trits of `state`, permuting before
/// every block. An empty `output` leaves the state untouched.
///
/// # Panics
///
/// Same conditions as [`absorb`].
pub fn squeeze(output: &mut [Trit], rate: usize, state: &mut State, num_rounds: usize) {
	check_parameters(rate, num_rounds);

	for block in output.chunks_mut(rate) {
		permute(state, num_rounds);
		block.copy_from_slice(&state.trits()[.. block.len()]);
	}
}

fn hash_with_rounds(output: &mut [Trit], input: &[Trit], num_rounds: usize) {
	trace!(
		"troika: hashing {} trits into {} trits with {} rounds",
		input.len(),
		output.len(),
		num_rounds,
	);

	let mut state = State::new();

	absorb(&mut state, RATE, input, num_rounds);
	squeeze(output, RATE, &mut state, num_rounds);
}

/// Hashes `input` into `output` using the full round count. The digest can
/// have any length.
pub fn hash(output: &mut [Trit], input: &[Trit]) {
	hash_with_rounds(output, input, NUM_ROUNDS);
}

/// Returns a digest of one rate block.
pub fn digest(input: &[Trit]) -> [Trit; RATE] {
	let mut out = [Trit::ZERO; RATE];
	hash(&mut out, input);

	out
}

/// Like [`hash`], but with a reduced number of rounds. Only meant for
/// cryptanalysis and testing, so it needs the `reduced-rounds` feature.
///
/// # Panics
///
/// Panics if `num_rounds` exceeds [`NUM_ROUNDS`].
#[cfg(any(test, feature = "reduced-rounds"))]
pub fn hash_var_rounds(output: &mut [Trit], input: &[Trit], num_rounds: usize) {
	hash_with_rounds(output, input, num_rounds);
}

#[cfg(test)]
fn pattern(len: usize, f: impl Fn(usize) -> usize) -> Vec<Trit> {
	(0 .. len).map(|i| Trit::from_u8_reduced((f(i) % 3) as u8)).collect()
}

#[cfg(test)]
fn format_trits(trits: &[Trit]) -> String {
	use std::fmt::Write;

	let mut out = String::new();

	for trit in trits {
		write!(out, "{}", trit).unwrap();
	}

	out
}

#[cfg(test)]
fn hash_to_string(output_len: usize, input: &[Trit]) -> String {
	let mut out = vec![Trit::ZERO; output_len];
	hash(&mut out, input);

	format_trits(&out)
}

#[test]
fn test_empty_input() {
	assert_eq!(
		format_trits(&digest(&[])),
		"200102102122212001021120110021100111112121202112200101102220222011012002121211120022120100000211212211122212220220222121020110001211220120211202110202201000021221002021001012100112110121011000020220000220121020111000221020022010112112112212020",
	);
}

#[test]
fn test_short_input() {
	assert_eq!(
		hash_to_string(RATE, &pattern(100, |i| i)),
		"011102101102120111202101110022000011122200002222010120120120102212000021212022101120210220111202211021021121122010021212221012022112021200121120020111211110112220120222120210110211122111012010011011200101000201122020121122121012102110120220221",
	);

	assert_eq!(
		hash_to_string(81, &[Trit::TWO; 5]),
		"100222222211001210111112101102100011220222010021112022220020221210111222210110121",
	);
}

#[test]
fn test_single_block_input() {
	assert_eq!(
		hash_to_string(RATE, &pattern(RATE, |i| i * i)),
		"200221021200010201110120021012112002222001022210000120120001012110112120020202222100110202212200120012100112212112221220000100222010111002110201111010011112022002010201202212012120011221021220112111222021201222010212021011111111010122120200210",
	);
}

#[test]
fn test_multi_block_input() {
	let input = pattern(600, |i| i / 2);

	assert_eq!(
		hash_to_string(RATE, &input),
		"021001001220012210021201002201200022200110110110122112200021012201001210122201222111020221011011111111222011110212001021100002200020020210020102221012022200212120002002111000000011000000011100200201000022101100011002022210101221020120011210020",
	);

	// a longer digest starts with the shorter one
	let long = hash_to_string(300, &input);

	assert_eq!(
		long,
		"021001001220012210021201002201200022200110110110122112200021012201001210122201222111020221011011111111222011110212001021100002200020020210020102221012022200212120002002111000000011000000011100200201000022101100011002022210101221020120011210020201110111001110011011101100020112221201002121011022222212",
	);
	assert_eq!(&long[.. RATE], hash_to_string(RATE, &input));
}

#[test]
fn test_reduced_rounds() {
	let input = pattern(100, |i| i);
	let mut out = [Trit::ZERO; RATE];

	hash_var_rounds(&mut out, &input, 1);
	assert_eq!(
		format_trits(&out),
		"020120100111202120102201120201120101101200120122222120122000210101102010121122010020221012101102020121122020210020012221002020221022021211122022201100020201000021122221102202200011201100012110200012212000021011200020101211002011001121110211121",
	);

	// without rounds the digest is just the padded block
	hash_var_rounds(&mut out, &input, 0);
	let mut expected = input.clone();
	expected.push(PADDING);
	expected.resize(RATE, Trit::ZERO);
	assert_eq!(&out[..], &expected[..]);
}

#[test]
fn test_empty_output() {
	let mut out: [Trit; 0] = [];
	hash(&mut out, &pattern(10, |i| i));

	let mut state = State::new();
	absorb(&mut state, RATE, &pattern(10, |i| i), NUM_ROUNDS);
	let before = state.clone();

	squeeze(&mut out, RATE, &mut state, NUM_ROUNDS);
	assert_eq!(state, before);
}

#[test]
fn test_block_aligned_message_gets_padding_block() {
	let message = pattern(2 * RATE, |i| i + 1);

	let mut state = State::new();
	absorb(&mut state, RATE, &message, NUM_ROUNDS);

	let mut expected = State::new();
	for block in message.chunks(RATE) {
		expected.trits_mut()[.. RATE].copy_from_slice(block);
		permute(&mut expected, NUM_ROUNDS);
	}
	expected[0] = PADDING;
	expected.trits_mut()[1 .. RATE].fill(Trit::ZERO);

	assert_eq!(state, expected);
}

#[test]
fn test_empty_input_is_padded_zero_state() {
	let mut expected = State::new();
	expected[0] = PADDING;
	permute(&mut expected, NUM_ROUNDS);

	assert_eq!(digest(&[])[..], expected.trits()[.. RATE]);
}

#[test]
#[should_panic(expected = "at most 24 rounds")]
fn test_too_many_rounds_fails_before_absorbing() {
	let mut out = [Trit::ZERO; RATE];
	hash_var_rounds(&mut out, &[], NUM_ROUNDS + 1);
}

#[test]
#[should_panic(expected = "invalid sponge rate")]
fn test_zero_rate() {
	absorb(&mut State::new(), 0, &[], NUM_ROUNDS);
}

#[cfg(test)]
mod properties {
	use proptest::prelude::*;

	use super::*;

	fn arb_trits(max_len: usize) -> impl Strategy<Value = Vec<Trit>> {
		proptest::collection::vec((0u8 .. 3).prop_map(Trit::from_u8_reduced), 0 ..= max_len)
	}

	proptest! {
		#![proptest_config(ProptestConfig::with_cases(64))]

		#[test]
		fn hashing_is_deterministic(input in arb_trits(3 * RATE), output_len in 0usize .. 2 * RATE) {
			let mut first = vec![Trit::ZERO; output_len];
			let mut second = vec![Trit::ZERO; output_len];

			hash(&mut first, &input);
			hash(&mut second, &input);

			prop_assert_eq!(first, second);
		}

		#[test]
		fn single_trit_change_avalanches(
			(input, position) in arb_trits(2 * RATE)
				.prop_filter("input must not be empty", |input| !input.is_empty())
				.prop_flat_map(|input| {
					let len = input.len();
					(Just(input), 0 .. len)
				}),
			delta in 1u8 .. 3,
		) {
			let mut flipped = input.clone();
			flipped[position] += Trit::from_u8_reduced(delta);

			let original = digest(&input);
			let changed = digest(&flipped);

			let differing = original.iter().zip(changed.iter()).filter(|(a, b)| a != b).count();

			// about two thirds of the trits should differ
			prop_assert!(differing > 110, "only {} of {} trits changed", differing, RATE);
		}

		#[test]
		fn digests_have_valid_trits(input in arb_trits(RATE + 10)) {
			prop_assert!(digest(&input).iter().all(|trit| trit.value() < 3));
		}
	}
}
