#![cfg_attr(not(feature = "std"), no_std)]

//! An implementation of the troika ternary hash function.
//!
//! Messages and digests are sequences of [`Trit`]s. [`hash`] fills an output
//! buffer of any length; [`digest`] returns a single 243-trit block.

// to prevent broken links when building documentation in #![no_std] mode
#[cfg(all(not(feature = "std"), doc))]
extern crate std;

pub mod trit;
pub mod troika;

#[doc(inline)]
pub use trit::{Trit, TritError, Tryte};

#[doc(inline)]
pub use troika::sponge::{digest, hash};

#[cfg(feature = "reduced-rounds")]
#[doc(inline)]
pub use troika::sponge::hash_var_rounds;
