use core::{
    fmt::Debug,
    ops::{BitAnd, BitOr, Shl, Shr, Sub},
};

/// Word type used by the table and the scalar adapters.
pub type Word = u64;

/// Bit width of [`Word`].
pub const WORD_BITS: usize = Word::BITS as usize;

/// A fixed-width unsigned machine word that a scalar can be stored in.
///
/// Digits are extracted from slices of limbs, least significant limb first.
pub trait Limb:
    Copy
    + Debug
    + Eq
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Sub<Output = Self>
    + Shl<usize, Output = Self>
    + Shr<usize, Output = Self>
{
    const BITS: usize;
    const ONE: Self;
    const MAX: Self;

    /// Truncating conversion; digits are below `2^window` and index a block.
    fn as_usize(self) -> usize;

    /// Mask of the low `n` bits, `n <= Self::BITS`.
    fn low_mask(n: usize) -> Self {
        if n >= Self::BITS {
            Self::MAX
        } else {
            (Self::ONE << n) - Self::ONE
        }
    }
}

macro_rules! primitive_limb {
    ($t:ident) => {
        impl Limb for $t {
            const BITS: usize = $t::BITS as usize;
            const ONE: Self = 1;
            const MAX: Self = $t::MAX;

            fn as_usize(self) -> usize {
                self as usize
            }
        }
    };
}

primitive_limb!(u8);
primitive_limb!(u16);
primitive_limb!(u32);
primitive_limb!(u64);
