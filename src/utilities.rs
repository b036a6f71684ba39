use ff::PrimeFieldBits;

use crate::{
    error::Result,
    limb::{Word, WORD_BITS},
    window::Digits,
};

/// Packs the first `num_bits` bits of a little-endian bit stream into words.
/// Missing bits are zero.
fn pack_bits(bits: impl Iterator<Item = bool>, num_bits: usize) -> Vec<Word> {
    let mut words = vec![0; num_bits.div_ceil(WORD_BITS)];
    for (i, bit) in bits.take(num_bits).enumerate() {
        if bit {
            words[i / WORD_BITS] |= 1 << (i % WORD_BITS);
        }
    }
    words
}

/// Canonical little-endian words of a field element and its significant bit
/// length. The words are trimmed to that length.
pub fn field_to_words<F: PrimeFieldBits>(element: &F) -> (Vec<Word>, usize) {
    let mut words = pack_bits(
        element.to_le_bits().into_iter(),
        F::NUM_BITS as usize,
    );
    while words.last() == Some(&0) {
        words.pop();
    }
    let bit_len = match words.last() {
        Some(top) => (words.len() - 1) * WORD_BITS + (WORD_BITS - top.leading_zeros() as usize),
        None => 0,
    };
    (words, bit_len)
}

/// Decompose a word `alpha` into `window_num_bits` bits (little-endian)
/// For a window size of `w`, this returns [k_0, ..., k_n] where each `k_i`
/// is a `w`-bit value, and `alpha = k_0 + k_1 * 2^w + ... + k_n * 2^(n * w)`.
pub fn decompose_word<F: PrimeFieldBits>(
    word: &F,
    word_num_bits: usize,
    window_num_bits: usize,
) -> Result<Vec<Word>> {
    let words = pack_bits(word.to_le_bits().into_iter(), word_num_bits);
    Ok(Digits::new(&words, word_num_bits, window_num_bits)?.collect())
}
