//! Twiddle constants for the 256-point transform and their derivation.
//!
//! The tables are versioned static data: each one is reproducible bit-for-bit
//! by the generator next to it, and the module tests pin the two together.

use crate::modulus::{pow_mod, sub_mod, Q};
use crate::ntt::N;

/// Primitive 512th root of unity modulo [`Q`] (`1753^256 ≡ -1`).
pub const ROOT: u32 = 1753;

/// Words per wide register of the accelerator; fixes the group interleaving
/// of [`ZETA_ORDER`].
const VECTOR_WORDS: usize = 8;

/// The base twiddle table: `ZETAS[k] = ROOT^bitrev8(k) mod Q`.
///
/// Slot 0 is held at zero. The transform pre-increments its cursor and never
/// reads it; it exists as an alignment placeholder in the accelerator's
/// twiddle memory.
pub const ZETAS: [u32; N] = [
           0,  4808194,  3765607,  3761513,  5178923,  5496691,  5234739,  5178987,
     7778734,  3542485,  2682288,  2129892,  3764867,  7375178,   557458,  7159240,
     5010068,  4317364,  2663378,  6705802,  4855975,  7946292,   676590,  7044481,
     5152541,  1714295,  2453983,  1460718,  7737789,  4795319,  2815639,  2283733,
     3602218,  3182878,  2740543,  4793971,  5269599,  2101410,  3704823,  1159875,
      394148,   928749,  1095468,  4874037,  2071829,  4361428,  3241972,  2156050,
     3415069,  1759347,  7562881,  4805951,  3756790,  6444618,  6663429,  4430364,
     5483103,  3192354,   556856,  3870317,  2917338,  1853806,  3345963,  1858416,
     3073009,  1277625,  5744944,  3852015,  4183372,  5157610,  5258977,  8106357,
     2508980,  2028118,  1937570,  4564692,  2811291,  5396636,  7270901,  4158088,
     1528066,   482649,  1148858,  5418153,  7814814,   169688,  2462444,  5046034,
     4213992,  4892034,  1987814,  5183169,  1736313,   235407,  5130263,  3258457,
     5801164,  1787943,  5989328,  6125690,  3482206,  4197502,  7080401,  6018354,
     7062739,  2461387,  3035980,   621164,  3901472,  7153756,  2925816,  3374250,
     1356448,  5604662,  2683270,  5601629,  4912752,  2312838,  7727142,  7921254,
      348812,  8052569,  1011223,  6026202,  4561790,  6458164,  6143691,  1744507,
        1753,  6444997,  5720892,  6924527,  2660408,  6600190,  8321269,  2772600,
     1182243,    87208,   636927,  4415111,  4423672,  6084020,  5095502,  4663471,
     8352605,   822541,  1009365,  5926272,  6400920,  1596822,  4423473,  4620952,
     6695264,  4969849,  2678278,  4611469,  4829411,   635956,  8129971,  5925040,
     4234153,  6607829,  2192938,  6653329,  2387513,  4768667,  8111961,  5199961,
     3747250,  2296099,  1239911,  4541938,  3195676,  2642980,  1254190,  8368000,
     2998219,   141835,  8291116,  2513018,  7025525,   613238,  7070156,  6161950,
     7921677,  6458423,  4040196,  4908348,  2039144,  6500539,  7561656,  6201452,
     6757063,  2105286,  6006015,  6346610,   586241,  7200804,   527981,  5637006,
     6903432,  1994046,  2491325,  6987258,   507927,  7192532,  7655613,  6545891,
     5346675,  8041997,  2647994,  3009748,  5767564,  4148469,   749577,  4357667,
     3980599,  2569011,  6764887,  1723229,  1665318,  2028038,  1163598,  5011144,
     3994671,  8368538,  7009900,  3020393,  3363542,   214880,   545376,  7609976,
     3105558,  7277073,   508145,  7826699,   860144,  3430436,   140244,  6866265,
     6195333,  3123762,  2358373,  6187330,  5365997,  6663603,  2926054,  7987710,
     8077412,  3531229,  4405932,  4606686,  1900052,  7598542,  1054478,  7648983,];

/// The accelerator's twiddle addressing permutation.
///
/// Maps sequential instruction-stream slots to [`ZETAS`] indices. Not
/// consumed by the numeric transform itself; it reproduces the hardware
/// memory layout (slot 0 is the alignment placeholder) and, reversed, yields
/// the inverse-transform ordering.
pub const ZETA_ORDER: [u16; N] = [
       1,    2,    3,    4,    5,    6,    7,    8,    9,   10,   11,   12,   13,
      14,   15,    0,   16,   17,   18,   19,   20,   21,   22,   23,   32,   33,
      34,   35,   36,   37,   38,   39,   40,   41,   42,   43,   44,   45,   46,
      47,   64,   66,   68,   70,   72,   74,   76,   78,   65,   67,   69,   71,
      73,   75,   77,   79,   80,   82,   84,   86,   88,   90,   92,   94,   81,
      83,   85,   87,   89,   91,   93,   95,  128,  132,  136,  140,  144,  148,
     152,  156,  129,  133,  137,  141,  145,  149,  153,  157,  130,  134,  138,
     142,  146,  150,  154,  158,  131,  135,  139,  143,  147,  151,  155,  159,
     160,  164,  168,  172,  176,  180,  184,  188,  161,  165,  169,  173,  177,
     181,  185,  189,  162,  166,  170,  174,  178,  182,  186,  190,  163,  167,
     171,  175,  179,  183,  187,  191,   24,   25,   26,   27,   28,   29,   30,
      31,   48,   49,   50,   51,   52,   53,   54,   55,   56,   57,   58,   59,
      60,   61,   62,   63,   96,   98,  100,  102,  104,  106,  108,  110,   97,
      99,  101,  103,  105,  107,  109,  111,  112,  114,  116,  118,  120,  122,
     124,  126,  113,  115,  117,  119,  121,  123,  125,  127,  192,  196,  200,
     204,  208,  212,  216,  220,  193,  197,  201,  205,  209,  213,  217,  221,
     194,  198,  202,  206,  210,  214,  218,  222,  195,  199,  203,  207,  211,
     215,  219,  223,  224,  228,  232,  236,  240,  244,  248,  252,  225,  229,
     233,  237,  241,  245,  249,  253,  226,  230,  234,  238,  242,  246,  250,
     254,  227,  231,  235,  239,  243,  247,  251,  255,];

/// Regenerates [`ZETAS`] from [`ROOT`] and [`Q`].
pub fn generate_zetas() -> [u32; N] {
    let mut zetas = [0u32; N];
    for (k, zeta) in zetas.iter_mut().enumerate().skip(1) {
        *zeta = pow_mod(ROOT, u32::from((k as u8).reverse_bits()), Q);
    }
    zetas
}

/// Regenerates [`ZETA_ORDER`] from the layer/group structure.
///
/// Pass 1 covers layers len = 128..16, whose 15 twiddles fit one instruction
/// stream; the unused slot 0 pads them to a register-pair boundary. Pass 2
/// runs each half of the vector through layers len = 8..1. Once a butterfly
/// group spans fewer words than a wide register, consecutive register loads
/// cover several groups, so group indices are emitted interleaved with
/// stride `VECTOR_WORDS / (2 * len)`.
pub fn generate_zeta_order() -> [u16; N] {
    let mut order = [0u16; N];
    let mut slot = 0;

    for k in 1..16 {
        order[slot] = k as u16;
        slot += 1;
    }
    // slot 0 placeholder
    slot += 1;

    for half in 0..2 {
        for len in [8usize, 4, 2, 1] {
            let first = 128 / len + half * (64 / len);
            let count = 64 / len;
            let interleave = (VECTOR_WORDS / (2 * len)).max(1);

            let mut base = first;
            while base < first + count {
                for offset in 0..interleave {
                    for word in 0..VECTOR_WORDS {
                        order[slot] = (base + word * interleave + offset) as u16;
                        slot += 1;
                    }
                }
                base += VECTOR_WORDS * interleave;
            }
        }
    }

    debug_assert_eq!(slot, N);
    order
}

/// The addressing permutation of the inverse transform: [`ZETA_ORDER`]
/// reversed, matching the inverse engine's decrementing cursor.
pub fn zeta_order_intt() -> [u16; N] {
    let mut order = ZETA_ORDER;
    order.reverse();
    order
}

/// Negates every twiddle mod [`Q`], yielding the inverse-transform table.
pub(crate) fn negate_zetas(zetas: &[u32; N]) -> [u32; N] {
    zetas.map(|zeta| sub_mod(0, zeta, Q))
}
