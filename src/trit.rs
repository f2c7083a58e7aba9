//! Unbalanced ternary digits, stored as `0`, `1` or `2`.

use core::fmt;
use core::ops::{Add, AddAssign};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TritError {
	#[error("{0} is not a trit, expected 0, 1 or 2")]
	OutOfRange(u8),
	#[error("{0:?} is not a trit digit, expected '0', '1' or '2'")]
	InvalidDigit(char),
}

/// A single ternary digit. The wrapped value is always below 3.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Trit(u8);

impl Trit {
	pub const ZERO: Self = Self(0);
	pub const ONE: Self = Self(1);
	pub const TWO: Self = Self(2);

	/// Reduces any byte modulo 3.
	pub const fn from_u8_reduced(val: u8) -> Self {
		Self(val % 3)
	}

	pub const fn value(self) -> u8 {
		self.0
	}
}

impl TryFrom<u8> for Trit {
	type Error = TritError;

	fn try_from(val: u8) -> Result<Self, Self::Error> {
		if val < 3 {
			Ok(Self(val))
		} else {
			Err(TritError::OutOfRange(val))
		}
	}
}

impl TryFrom<char> for Trit {
	type Error = TritError;

	fn try_from(digit: char) -> Result<Self, Self::Error> {
		match digit {
			'0' => Ok(Self::ZERO),
			'1' => Ok(Self::ONE),
			'2' => Ok(Self::TWO),
			_ => Err(TritError::InvalidDigit(digit)),
		}
	}
}

impl From<Trit> for u8 {
	fn from(trit: Trit) -> Self {
		trit.0
	}
}

impl Add for Trit {
	type Output = Self;

	fn add(self, other: Self) -> Self {
		// both operands are below 3, so the sum never exceeds 4
		Self((self.0 + other.0) % 3)
	}
}

impl AddAssign for Trit {
	fn add_assign(&mut self, other: Self) {
		*self = *self + other;
	}
}

impl fmt::Display for Trit {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Three trits read as one base-3 number in `0 .. 27`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tryte(u8);

impl Tryte {
	pub const ZERO: Self = Self(0);

	pub const fn new(val: u8) -> Option<Self> {
		if val < 27 {
			Some(Self(val))
		} else {
			None
		}
	}

	/// The first trit is the most significant.
	pub const fn from_trits(trits: [Trit; 3]) -> Self {
		Self(9 * trits[0].0 + 3 * trits[1].0 + trits[2].0)
	}

	/// Inverse of [`Tryte::from_trits`]: the least significant digit lands in
	/// the last position.
	pub const fn to_trits(self) -> [Trit; 3] {
		let mut val = self.0;

		let low = val % 3;
		val /= 3;
		let mid = val % 3;
		val /= 3;

		[Trit(val % 3), Trit(mid), Trit(low)]
	}

	pub const fn value(self) -> u8 {
		self.0
	}
}

#[test]
fn trit_addition_wraps() {
	assert_eq!(Trit::TWO + Trit::TWO, Trit::ONE);
	assert_eq!(Trit::TWO + Trit::ONE, Trit::ZERO);
	assert_eq!(Trit::ZERO + Trit::ONE, Trit::ONE);

	let mut trit = Trit::ONE;
	trit += Trit::TWO;
	assert_eq!(trit, Trit::ZERO);
}

#[test]
fn trit_conversions_reject_bad_values() {
	assert_eq!(Trit::try_from(2u8), Ok(Trit::TWO));
	assert_eq!(Trit::try_from(3u8), Err(TritError::OutOfRange(3)));
	assert_eq!(Trit::try_from('1'), Ok(Trit::ONE));
	assert_eq!(Trit::try_from('9'), Err(TritError::InvalidDigit('9')));
	assert_eq!(Trit::from_u8_reduced(7), Trit::ONE);
}

#[test]
fn tryte_digit_order() {
	for val in 0 .. 27 {
		let tryte = Tryte::new(val).unwrap();
		assert_eq!(Tryte::from_trits(tryte.to_trits()), tryte);
	}

	let [high, mid, low] = Tryte::new(11).unwrap().to_trits();
	assert_eq!((high, mid, low), (Trit::ONE, Trit::ZERO, Trit::TWO));
	assert_eq!(Tryte::new(27), None);
}
