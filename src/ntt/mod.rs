//! Layered radix-2 NTT engine over the Dilithium prime.
//!
//! The forward transform is a Cooley–Tukey decimation-in-frequency network
//! taking natural-order input to bit-reversed-twiddle NTT order; the inverse
//! is the dual Gentleman–Sande network followed by an `N^(-1)` rescale. Both
//! run the butterfly twiddle multiply either on plain modular arithmetic or
//! on the Montgomery kernel with a pre-converted twiddle table, with
//! identical results.

mod zetas;

pub use zetas::{
    generate_zeta_order, generate_zetas, zeta_order_intt, ROOT, ZETAS, ZETA_ORDER,
};

use once_cell::sync::Lazy;

use crate::modulus::{add_mod, inv_mod, mul_mod, sub_mod, MontgomeryModulus, Q};
use crate::NttError;

/// Number of coefficients in a polynomial.
pub const N: usize = 256;

/// Which multiplication kernel drives the butterfly twiddle multiply.
///
/// The coefficient vector stays in the plain domain either way: in the
/// Montgomery variant only the twiddles carry the domain factor, and the
/// reduction cancels it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// Plain modular multiplication.
    Plain,
    /// Montgomery reduction against the pre-converted twiddle table.
    Montgomery,
}

/// Execution depth of the forward transform.
///
/// The partial depths mirror a hardware pipeline that runs the transform in
/// several passes; their outputs are intermediate checkpoints, not final NTT
/// results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NttDepth {
    /// Layers len = 128..16 only.
    Layers4,
    /// Layers len = 128..8 only.
    Layers5,
    /// All 8 layers, down to len = 1.
    Full,
}

impl NttDepth {
    /// Smallest layer size the forward loop still executes.
    const fn floor_len(self) -> usize {
        match self {
            NttDepth::Layers4 => 16,
            NttDepth::Layers5 => 8,
            NttDepth::Full => 1,
        }
    }
}

/// Execution depth of the inverse transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InttDepth {
    /// Layers len = 1..4 only. The checkpoint is left unnormalized: no
    /// `N^(-1)` rescale is applied, matching the reference pipeline stage.
    Layers3,
    /// All 8 layers plus the final `N^(-1)` rescale.
    Full,
}

impl InttDepth {
    /// Layer size at which the inverse loop stops.
    const fn ceiling_len(self) -> usize {
        match self {
            InttDepth::Layers3 => 8,
            InttDepth::Full => N,
        }
    }
}

/// Precomputed twiddle data for the 256-point transform.
///
/// All variants are derived once from [`ZETAS`]: the Montgomery conversion
/// for the forward engine, the negated table for the inverse engine (the
/// inverse uses `-zeta` where the forward used `+zeta`), the ninv-folded
/// inverse table (slot 1 pre-multiplied by `N^(-1)`), and the Montgomery
/// conversions of both. Read-only after construction and safe to share
/// across threads.
pub struct NttTable {
    montgomery: MontgomeryModulus,
    ninv: u32,
    zetas: [u32; N],
    zetas_montgomery: [u32; N],
    zetas_intt: [u32; N],
    zetas_intt_montgomery: [u32; N],
    zetas_intt_folded: [u32; N],
    zetas_intt_montgomery_folded: [u32; N],
}

impl NttTable {
    /// Derives every twiddle variant from the base table.
    ///
    /// # Errors
    ///
    /// Propagates [`NttError::OutOfRange`] from the domain conversions;
    /// cannot occur for the fixed tables, which are canonical by
    /// construction.
    pub fn new() -> Result<Self, NttError> {
        let montgomery = MontgomeryModulus::new(Q);
        let ninv = inv_mod(N as u32, Q);

        let zetas = ZETAS;
        let zetas_intt = zetas::negate_zetas(&zetas);

        let mut zetas_intt_folded = zetas_intt;
        zetas_intt_folded[1] = mul_mod(zetas_intt[1], ninv, Q);

        let convert = |table: &[u32; N]| -> Result<[u32; N], NttError> {
            let mut out = [0u32; N];
            for (m, &z) in out.iter_mut().zip(table.iter()) {
                *m = montgomery.convert(u64::from(z))?.value();
            }
            Ok(out)
        };

        Ok(Self {
            montgomery,
            ninv,
            zetas,
            zetas_montgomery: convert(&zetas)?,
            zetas_intt_montgomery: convert(&zetas_intt)?,
            zetas_intt_montgomery_folded: convert(&zetas_intt_folded)?,
            zetas_intt,
            zetas_intt_folded,
        })
    }

    /// Returns `N^(-1) mod q`.
    #[inline]
    pub fn ninv(&self) -> u32 {
        self.ninv
    }

    /// Returns the base twiddle table.
    #[inline]
    pub fn zetas(&self) -> &[u32; N] {
        &self.zetas
    }

    /// Returns the Montgomery-domain twiddle table.
    #[inline]
    pub fn zetas_montgomery(&self) -> &[u32; N] {
        &self.zetas_montgomery
    }

    /// Returns the negated twiddle table used by the inverse transform.
    #[inline]
    pub fn zetas_intt(&self) -> &[u32; N] {
        &self.zetas_intt
    }

    /// Returns the inverse table with `N^(-1)` folded into slot 1.
    #[inline]
    pub fn zetas_intt_folded(&self) -> &[u32; N] {
        &self.zetas_intt_folded
    }

    /// Performs the forward transform in place.
    ///
    /// Input in natural order and canonical in `[0, q)`; output in
    /// bit-reversed-twiddle NTT order (or the corresponding checkpoint for a
    /// partial depth).
    ///
    /// # Errors
    ///
    /// [`NttError::InvalidLength`] if `poly` is not 256 elements long.
    pub fn transform_slice(
        &self,
        poly: &mut [u32],
        domain: Domain,
        depth: NttDepth,
    ) -> Result<(), NttError> {
        check_len(poly)?;
        let floor = depth.floor_len();
        match domain {
            Domain::Plain => forward_layers(poly, &self.zetas, floor, |a, b| mul_mod(a, b, Q)),
            Domain::Montgomery => forward_layers(poly, &self.zetas_montgomery, floor, |a, b| {
                self.montgomery.reduce_mul(a, b)
            }),
        }
        Ok(())
    }

    /// Performs the inverse transform in place.
    ///
    /// Input in NTT order; output in natural order. [`InttDepth::Full`]
    /// rescales every coefficient by `N^(-1)`; [`InttDepth::Layers3`] stops
    /// after the first three layers and applies no rescale.
    ///
    /// # Errors
    ///
    /// [`NttError::InvalidLength`] if `values` is not 256 elements long.
    pub fn inverse_transform_slice(
        &self,
        values: &mut [u32],
        domain: Domain,
        depth: InttDepth,
    ) -> Result<(), NttError> {
        check_len(values)?;
        let ceiling = depth.ceiling_len();
        match domain {
            Domain::Plain => inverse_layers(values, &self.zetas_intt, ceiling, |a, b| {
                mul_mod(a, b, Q)
            }),
            Domain::Montgomery => {
                inverse_layers(values, &self.zetas_intt_montgomery, ceiling, |a, b| {
                    self.montgomery.reduce_mul(a, b)
                })
            }
        }

        if depth == InttDepth::Full {
            for v in values.iter_mut() {
                *v = mul_mod(self.ninv, *v, Q);
            }
        }
        Ok(())
    }

    /// Full inverse transform using the ninv-folded twiddle table.
    ///
    /// The last butterfly layer already multiplies the upper half of the
    /// vector by its single twiddle, so pre-multiplying that twiddle by
    /// `N^(-1)` normalizes those 128 coefficients for free; only the lower
    /// half needs the explicit rescale. Output is identical to
    /// [`Self::inverse_transform_slice`] at [`InttDepth::Full`].
    ///
    /// # Errors
    ///
    /// [`NttError::InvalidLength`] if `values` is not 256 elements long.
    pub fn folded_inverse_transform_slice(
        &self,
        values: &mut [u32],
        domain: Domain,
    ) -> Result<(), NttError> {
        check_len(values)?;
        match domain {
            Domain::Plain => inverse_layers(values, &self.zetas_intt_folded, N, |a, b| {
                mul_mod(a, b, Q)
            }),
            Domain::Montgomery => {
                inverse_layers(values, &self.zetas_intt_montgomery_folded, N, |a, b| {
                    self.montgomery.reduce_mul(a, b)
                })
            }
        }

        for v in values[..N / 2].iter_mut() {
            *v = mul_mod(self.ninv, *v, Q);
        }
        Ok(())
    }
}

/// The process-wide table for the fixed Dilithium modulus, built on first
/// use.
pub fn table() -> &'static NttTable {
    static TABLE: Lazy<NttTable> = Lazy::new(|| {
        NttTable::new().expect("the fixed twiddle tables are canonical")
    });
    &TABLE
}

#[inline]
fn check_len(poly: &[u32]) -> Result<(), NttError> {
    if poly.len() != N {
        return Err(NttError::InvalidLength {
            len: poly.len(),
            expected: N,
        });
    }
    Ok(())
}

/// Cooley–Tukey layers, `len` halving from 128 down to `floor`.
///
/// The twiddle cursor `k` pre-increments per butterfly group and never
/// resets between layers; the block-to-slot mapping is part of the hardware
/// contract.
fn forward_layers<M>(poly: &mut [u32], zetas: &[u32; N], floor: usize, mul: M)
where
    M: Fn(u32, u32) -> u32,
{
    let mut k = 0usize;
    let mut len = 128usize;
    while len >= floor {
        for block in poly.chunks_exact_mut(2 * len) {
            k += 1;
            let zeta = zetas[k];
            let (lo, hi) = block.split_at_mut(len);
            for (i, j) in core::iter::zip(lo, hi) {
                let t = mul(*j, zeta);
                *j = sub_mod(*i, t, Q);
                *i = add_mod(*i, t, Q);
            }
        }
        len >>= 1;
    }
}

/// Gentleman–Sande layers, `len` doubling from 1 up to (excluding)
/// `ceiling`, with the table cursor `m` decrementing from 256.
fn inverse_layers<M>(values: &mut [u32], zetas: &[u32; N], ceiling: usize, mul: M)
where
    M: Fn(u32, u32) -> u32,
{
    let mut m = N;
    let mut len = 1usize;
    while len < ceiling {
        for block in values.chunks_exact_mut(2 * len) {
            m -= 1;
            let zeta = zetas[m];
            let (lo, hi) = block.split_at_mut(len);
            for (i, j) in core::iter::zip(lo, hi) {
                let t = *i;
                *i = add_mod(t, *j, Q);
                *j = mul(zeta, sub_mod(t, *j, Q));
            }
        }
        len <<= 1;
    }
}
