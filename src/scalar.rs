use ff::PrimeFieldBits;
use num_bigint::BigInt;
use num_traits::Signed;

use crate::{
    limb::{Word, WORD_BITS},
    utilities::field_to_words,
};

/// A scalar in the form the table consumes: little-endian magnitude words,
/// the number of meaningful low bits, and a sign.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScalarWords {
    pub words: Vec<Word>,
    pub bit_len: usize,
    pub negative: bool,
}

impl ScalarWords {
    pub fn is_zero(&self) -> bool {
        self.bit_len == 0
    }
}

/// The scalar types a table can multiply by.
#[derive(Debug, Clone, Copy)]
pub enum Scalar<'a, F> {
    Int(i64),
    Field(&'a F),
    Big(&'a BigInt),
}

impl From<i64> for ScalarWords {
    fn from(y: i64) -> Self {
        let magnitude = y.unsigned_abs();
        ScalarWords {
            words: vec![magnitude],
            bit_len: WORD_BITS - magnitude.leading_zeros() as usize,
            negative: y < 0,
        }
    }
}

impl From<&BigInt> for ScalarWords {
    fn from(y: &BigInt) -> Self {
        let (_, words) = y.to_u64_digits();
        ScalarWords {
            words,
            bit_len: y.bits() as usize,
            negative: y.is_negative(),
        }
    }
}

impl ScalarWords {
    /// Field elements are taken by their canonical value and are never
    /// negative.
    pub fn from_field<F: PrimeFieldBits>(y: &F) -> Self {
        let (words, bit_len) = field_to_words(y);
        ScalarWords {
            words,
            bit_len,
            negative: false,
        }
    }
}

impl<F: PrimeFieldBits> Scalar<'_, F> {
    pub fn to_words(&self) -> ScalarWords {
        match *self {
            Scalar::Int(y) => ScalarWords::from(y),
            Scalar::Field(y) => ScalarWords::from_field(y),
            Scalar::Big(y) => ScalarWords::from(y),
        }
    }
}

impl<'a, F> From<&'a BigInt> for Scalar<'a, F> {
    fn from(y: &'a BigInt) -> Self {
        Scalar::Big(y)
    }
}

impl<F> From<i64> for Scalar<'_, F> {
    fn from(y: i64) -> Self {
        Scalar::Int(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pasta_curves::pallas;

    type S<'a> = Scalar<'a, pallas::Scalar>;

    #[test]
    fn test_int() {
        assert_eq!(S::Int(0).to_words(), ScalarWords {
            words: vec![0],
            bit_len: 0,
            negative: false
        });
        assert!(S::Int(0).to_words().is_zero());
        assert_eq!(S::Int(11).to_words(), ScalarWords {
            words: vec![11],
            bit_len: 4,
            negative: false
        });
        assert_eq!(S::Int(-11).to_words(), ScalarWords {
            words: vec![11],
            bit_len: 4,
            negative: true
        });
        assert_eq!(S::Int(i64::MIN).to_words(), ScalarWords {
            words: vec![1 << 63],
            bit_len: 64,
            negative: true
        });
    }

    #[test]
    fn test_field() {
        let y = pallas::Scalar::from(0x1_0000_0001u64);
        let words = S::Field(&y).to_words();
        assert_eq!(words.words, vec![0x1_0000_0001]);
        assert_eq!(words.bit_len, 33);
        assert!(!words.negative);

        assert!(S::Field(&pallas::Scalar::zero()).to_words().is_zero());
    }

    #[test]
    fn test_big() {
        let y = -(BigInt::from(1u8) << 130u32) - 5;
        let words = S::from(&y).to_words();
        assert_eq!(words.words, vec![5, 0, 4]);
        assert_eq!(words.bit_len, 131);
        assert!(words.negative);

        assert!(S::from(&BigInt::from(0)).to_words().is_zero());
    }
}
