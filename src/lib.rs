#![deny(missing_docs)]

//! Golden-model generator for the Dilithium number-theoretic transform.
//!
//! Computes forward and inverse NTTs of length-256 coefficient vectors over
//! the prime q = 8380417, with the butterfly twiddle multiply running either
//! on plain modular arithmetic or on a fast-multiplication domain
//! (Montgomery or Plantard), and renders results in the memory-dump text
//! layout used for byte-for-byte comparison against hardware traces.
//!
//! All constant data (twiddle tables, domain constants, the addressing
//! permutation) is derived once from the prime and the base root of unity;
//! nothing is mutated after construction, so one [`ntt::NttTable`] can be
//! shared across threads.

pub mod dump;
pub mod modulus;
pub mod ntt;

mod error;

pub use error::NttError;
