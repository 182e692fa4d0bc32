//! Karatsuba multiplication over digit strings in an arbitrary radix,
//! with a replayable trace of every recursive step.
//!
//! Two digit strings are decoded, multiplied with the divide-and-conquer
//! Karatsuba scheme, and re-encoded; along the way every split, base
//! case, and combine is appended to an ordered log so a presentation
//! layer can walk the recursion one step at a time.
//!
//! All arithmetic is arbitrary precision, so results stay exact for
//! operands of any length.

pub mod codec;
pub mod engine;
pub mod error;
pub mod trace;

pub use engine::{KaratsubaResult, compute_karatsuba, multiply};
pub use error::KaratsubaError;
pub use trace::{Step, StepKind, Trace};
