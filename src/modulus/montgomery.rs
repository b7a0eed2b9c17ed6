use crate::modulus::{inv_mod_pow2, D};
use crate::NttError;

/// A field element scaled by the Montgomery factor `2^D mod q`.
///
/// The newtype keeps Montgomery-domain values out of plain arithmetic:
/// the only way to combine them is [`MontgomeryModulus::mul`] or an explicit
/// conversion, so a domain mix-up is a type error instead of a silent
/// numeric bug.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MontgomeryElement(u32);

impl MontgomeryElement {
    /// Returns the raw representative in `[0, q)`.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}

/// A modulus using Montgomery reduction with radix `2^D`.
///
/// The struct stores the modulus and the precomputed constant
/// `neg_inv = (-q)^(-1) mod 2^D`. It's efficient if many reductions are
/// performed with a single modulus.
#[derive(Debug, Clone, Copy)]
pub struct MontgomeryModulus {
    value: u32,
    neg_inv: u32,
}

impl MontgomeryModulus {
    /// Constructs a [`MontgomeryModulus`].
    ///
    /// * `value` must be odd, otherwise no inverse modulo `2^D` exists.
    #[inline]
    pub fn new(value: u32) -> Self {
        debug_assert!(value & 1 == 1);
        let neg_inv = (inv_mod_pow2(value) as u32).wrapping_neg();
        Self { value, neg_inv }
    }

    /// Returns the modulus value.
    #[inline]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Returns `(-q)^(-1) mod 2^D`.
    #[inline]
    pub const fn neg_inv(&self) -> u32 {
        self.neg_inv
    }

    /// Converts `a` into the Montgomery domain, computing `a * 2^D mod q`.
    ///
    /// # Errors
    ///
    /// [`NttError::OutOfRange`] if `a >= q^2`.
    pub fn convert(&self, a: u64) -> Result<MontgomeryElement, NttError> {
        let bound = u64::from(self.value) * u64::from(self.value);
        if a >= bound {
            return Err(NttError::OutOfRange {
                domain: "montgomery conversion",
                value: u128::from(a),
                bound: u128::from(bound),
            });
        }
        Ok(MontgomeryElement(
            ((u128::from(a) << D) % u128::from(self.value)) as u32,
        ))
    }

    /// Multiplies two Montgomery-domain elements; the result stays in the
    /// Montgomery domain.
    #[inline]
    pub fn mul(&self, a: MontgomeryElement, b: MontgomeryElement) -> MontgomeryElement {
        MontgomeryElement(self.reduce_mul(a.0, b.0))
    }

    /// Multiplies a plain element by a Montgomery-domain element.
    ///
    /// Exactly one operand carries the domain factor, so the reduction
    /// cancels it and the result is the plain product `a * b mod q`.
    #[inline]
    pub fn mul_into_plain(&self, a: u32, b: MontgomeryElement) -> u32 {
        self.reduce_mul(a, b.0)
    }

    /// Converts a Montgomery-domain element back to the plain domain.
    #[inline]
    pub fn retrieve(&self, a: MontgomeryElement) -> u32 {
        self.reduce_mul(a.0, 1)
    }

    /// The Montgomery reduction kernel: `a * b * 2^(-D) mod q`, in `[0, q)`.
    ///
    /// Domain-agnostic by construction; which domain the result carries is
    /// determined by how many operands carried the factor `2^D`. The result
    /// is canonical provided `a * b < q * 2^D`, which holds whenever at
    /// least one operand is below `q`. The sum `a*b + t*q` can exceed
    /// 64 bits for operands near `2^D`, hence the widened accumulation.
    #[inline]
    pub(crate) fn reduce_mul(&self, a: u32, b: u32) -> u32 {
        let c = u64::from(a) * u64::from(b);
        let t = (c as u32).wrapping_mul(self.neg_inv);
        let r = ((u128::from(c) + u128::from(t) * u128::from(self.value)) >> D) as u32;
        if r >= self.value {
            r - self.value
        } else {
            r
        }
    }
}
