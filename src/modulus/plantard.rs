use crate::modulus::{inv_mod_pow2, D};
use crate::NttError;

/// Largest modulus Plantard reduction supports with radix `2^D`:
/// `floor(2^32 / φ)` where φ is the golden ratio.
const PHI_BOUND: u32 = 2_654_435_769;

/// A field element scaled by the Plantard factor `-2^(2*D) mod q`.
///
/// Like [`MontgomeryElement`](crate::modulus::MontgomeryElement), the newtype
/// makes cross-domain arithmetic a type error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlantardElement(u32);

impl PlantardElement {
    /// Returns the raw representative in `[0, q)`.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}

/// A modulus using Plantard reduction with radix `2^(2*D)`.
///
/// Stores the modulus and the precomputed constant `inv = q^(-1) mod 2^(2*D)`.
/// The reduction is branchless: the tighter `q < 2^D / φ` bound makes the
/// single correction step of the algorithm exact, which is why the hardware
/// favors it over Montgomery's conditional subtract.
#[derive(Debug, Clone, Copy)]
pub struct PlantardModulus {
    value: u32,
    inv: u64,
}

impl PlantardModulus {
    /// Constructs a [`PlantardModulus`].
    ///
    /// # Errors
    ///
    /// [`NttError::OutOfRange`] if `value` does not satisfy the φ-bound
    /// `value < 2^D / φ`.
    pub fn new(value: u32) -> Result<Self, NttError> {
        debug_assert!(value & 1 == 1);
        if value >= PHI_BOUND {
            return Err(NttError::OutOfRange {
                domain: "plantard modulus",
                value: u128::from(value),
                bound: u128::from(PHI_BOUND),
            });
        }
        Ok(Self {
            value,
            inv: inv_mod_pow2(value),
        })
    }

    /// Returns the modulus value.
    #[inline]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Returns `q^(-1) mod 2^(2*D)`.
    #[inline]
    pub const fn inv(&self) -> u64 {
        self.inv
    }

    /// Converts `a` into the Plantard domain, computing `-a * 2^(2*D) mod q`.
    ///
    /// # Errors
    ///
    /// [`NttError::OutOfRange`] if `a > q`.
    pub fn convert(&self, a: u32) -> Result<PlantardElement, NttError> {
        if a > self.value {
            return Err(NttError::OutOfRange {
                domain: "plantard conversion",
                value: u128::from(a),
                bound: u128::from(self.value) + 1,
            });
        }
        let neg = (self.value - a % self.value) % self.value;
        Ok(PlantardElement(
            ((u128::from(neg) << (2 * D)) % u128::from(self.value)) as u32,
        ))
    }

    /// Multiplies two Plantard-domain elements; the result stays in the
    /// Plantard domain.
    #[inline]
    pub fn mul(&self, a: PlantardElement, b: PlantardElement) -> PlantardElement {
        PlantardElement(self.reduce_mul(a.0, b.0))
    }

    /// Multiplies a plain element by a Plantard-domain element, yielding the
    /// plain product `a * b mod q` (the one-factor composition rule, as with
    /// Montgomery).
    #[inline]
    pub fn mul_into_plain(&self, a: u32, b: PlantardElement) -> u32 {
        self.reduce_mul(a, b.0)
    }

    /// Converts a Plantard-domain element back to the plain domain.
    #[inline]
    pub fn retrieve(&self, a: PlantardElement) -> u32 {
        self.reduce_mul(a.0, 1)
    }

    /// The Plantard reduction kernel: `a * b * (-2^(-2*D)) mod q`.
    ///
    /// `c` is the low `2*D` bits of `a * b * inv`; the `+ 1` correction and
    /// the final multiply-shift land the result in `[0, q)` without a
    /// conditional subtract, given the φ-bound on the modulus.
    #[inline]
    pub(crate) fn reduce_mul(&self, a: u32, b: u32) -> u32 {
        let c = (u128::from(a) * u128::from(b)).wrapping_mul(u128::from(self.inv)) as u64;
        let c = (c >> D) + 1;
        ((c * u64::from(self.value)) >> D) as u32
    }
}
