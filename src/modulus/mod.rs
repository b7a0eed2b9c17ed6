//! Fixed-prime moduli with fast-multiplication domains.
//!
//! Both schemes replace the division in `a * b mod q` with multiplies and
//! shifts by the radix `2^D`, at the cost of carrying operands in a
//! transformed domain. Montgomery ends with a conditional subtract; Plantard
//! is branchless but requires `q < 2^D / φ`.

mod montgomery;
mod plantard;

pub use montgomery::{MontgomeryElement, MontgomeryModulus};
pub use plantard::{PlantardElement, PlantardModulus};

/// The Dilithium prime, q = 2^23 - 2^13 + 1.
pub const Q: u32 = 8_380_417;

/// Reduction radix width in bits, fixed by the hardware word size.
///
/// Independent of the bit width of [`Q`]: Montgomery reduces modulo `2^D`,
/// Plantard modulo `2^(2*D)`.
pub const D: u32 = 32;

/// `q^(-1) mod 2^64` for odd `q`, by Hensel lifting.
///
/// Each step doubles the number of correct low bits, so five steps starting
/// from the 3-bit-exact seed `q` cover 64 bits.
pub(crate) fn inv_mod_pow2(q: u32) -> u64 {
    debug_assert!(q & 1 == 1);
    let q = u64::from(q);
    let mut inv = q;
    for _ in 0..5 {
        inv = inv.wrapping_mul(2u64.wrapping_sub(q.wrapping_mul(inv)));
    }
    inv
}

/// `(a + b) mod q` for operands already in `[0, q)`.
#[inline]
pub(crate) const fn add_mod(a: u32, b: u32, q: u32) -> u32 {
    let s = a + b;
    if s >= q {
        s - q
    } else {
        s
    }
}

/// `(a - b) mod q` for operands already in `[0, q)`.
#[inline]
pub(crate) const fn sub_mod(a: u32, b: u32, q: u32) -> u32 {
    let s = a + q - b;
    if s >= q {
        s - q
    } else {
        s
    }
}

/// `(a * b) mod q` through a widened intermediate.
#[inline]
pub(crate) const fn mul_mod(a: u32, b: u32, q: u32) -> u32 {
    (a as u64 * b as u64 % q as u64) as u32
}

/// `base^exp mod q` by square-and-multiply.
pub(crate) const fn pow_mod(base: u32, mut exp: u32, q: u32) -> u32 {
    let mut acc = 1u32;
    let mut base = base % q;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mul_mod(acc, base, q);
        }
        base = mul_mod(base, base, q);
        exp >>= 1;
    }
    acc
}

/// `a^(-1) mod q` for prime `q`, via Fermat's little theorem.
pub(crate) const fn inv_mod(a: u32, q: u32) -> u32 {
    pow_mod(a, q - 2, q)
}
