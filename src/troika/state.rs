use core::fmt;
use core::ops::{Index, IndexMut};

use super::{COLUMNS, ROWS, SLICES, SLICE_SIZE, STATE_SIZE};
use crate::trit::Trit;

/// The 729-trit troika state, viewed as 27 slices of 3 rows by 9 columns.
#[derive(Clone, PartialEq, Eq)]
pub struct State {
	trits: [Trit; STATE_SIZE],
}

impl State {
	pub const fn new() -> Self {
		Self {trits: [Trit::ZERO; STATE_SIZE]}
	}

	pub const fn position(slice: usize, row: usize, column: usize) -> usize {
		SLICE_SIZE * slice + COLUMNS * row + column
	}

	pub fn get(&self, slice: usize, row: usize, column: usize) -> Trit {
		self.trits[Self::position(slice, row, column)]
	}

	pub fn get_mut(&mut self, slice: usize, row: usize, column: usize) -> &mut Trit {
		&mut self.trits[Self::position(slice, row, column)]
	}

	pub fn trits(&self) -> &[Trit; STATE_SIZE] {
		&self.trits
	}

	pub fn trits_mut(&mut self) -> &mut [Trit; STATE_SIZE] {
		&mut self.trits
	}

	/// Sum of the three rows of a column, modulo 3.
	pub fn column_parity(&self, slice: usize, column: usize) -> Trit {
		let mut parity = Trit::ZERO;

		for row in 0 .. ROWS {
			parity += self.get(slice, row, column);
		}

		parity
	}
}

impl Default for State {
	fn default() -> Self {
		Self::new()
	}
}

impl Index<usize> for State {
	type Output = Trit;

	fn index(&self, idx: usize) -> &Trit {
		&self.trits[idx]
	}
}

impl IndexMut<usize> for State {
	fn index_mut(&mut self, idx: usize) -> &mut Trit {
		&mut self.trits[idx]
	}
}

impl fmt::Debug for State {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("State(")?;

		for trit in &self.trits {
			write!(f, "{}", trit)?;
		}

		f.write_str(")")
	}
}

// prints every slice as a grid, followed by its column parities
impl fmt::Display for State {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for slice in 0 .. SLICES {
			writeln!(f, "#### Slice {} ####", slice)?;

			for row in 0 .. ROWS {
				for column in 0 .. COLUMNS {
					write!(f, "{} ", self.get(slice, row, column))?;
				}

				writeln!(f)?;
			}

			writeln!(f, "------------------")?;

			for column in 0 .. COLUMNS {
				write!(f, "{} ", self.column_parity(slice, column))?;
			}

			writeln!(f)?;
		}

		Ok(())
	}
}

#[test]
fn positions_cover_the_state_once() {
	let mut seen = [false; STATE_SIZE];

	for slice in 0 .. SLICES {
		for row in 0 .. ROWS {
			for column in 0 .. COLUMNS {
				let position = State::position(slice, row, column);
				assert!(!seen[position]);
				seen[position] = true;
			}
		}
	}

	assert_eq!(State::position(1, 2, 3), 27 + 18 + 3);
}

#[test]
fn display_shows_parity_row() {
	let mut state = State::new();
	*state.get_mut(0, 0, 4) = Trit::TWO;
	*state.get_mut(0, 1, 4) = Trit::TWO;

	let dump = format!("{}", state);
	let mut lines = dump.lines();

	assert_eq!(lines.next(), Some("#### Slice 0 ####"));
	assert_eq!(lines.next(), Some("0 0 0 0 2 0 0 0 0 "));
	assert_eq!(lines.next(), Some("0 0 0 0 2 0 0 0 0 "));
	assert_eq!(lines.next(), Some("0 0 0 0 0 0 0 0 0 "));
	assert_eq!(lines.next(), Some("------------------"));
	assert_eq!(lines.next(), Some("0 0 0 0 1 0 0 0 0 "));
	assert_eq!(dump.lines().count(), SLICES * 6);
}
