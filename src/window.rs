use crate::{
    error::{Error, Result},
    limb::Limb,
};

/// Splits the low `bit_len` bits of a little-endian limb slice into
/// `window`-bit digits, least significant digit first.
///
/// The last digit is zero-extended when fewer than `window` bits remain, so
/// `sum(d_i * 2^(i * window))` is exactly the value of the low `bit_len` bits,
/// whatever the limbs hold above them.
#[derive(Debug, Clone)]
pub struct Digits<'a, T: Limb> {
    words: &'a [T],
    remaining: usize,
    window: usize,
    /// Bit offset inside `words[0]`.
    pos: usize,
    mask: T,
}

impl<'a, T: Limb> Digits<'a, T> {
    pub fn new(words: &'a [T], bit_len: usize, window: usize) -> Result<Self> {
        if window == 0 || window > T::BITS {
            return Err(Error::InvalidWindow {
                window,
                max: T::BITS,
            });
        }
        let available = words.len().saturating_mul(T::BITS);
        if bit_len > available {
            return Err(Error::BitLengthOverflow { bit_len, available });
        }

        Ok(Self {
            words,
            remaining: bit_len,
            window,
            pos: 0,
            mask: T::low_mask(window),
        })
    }

    pub fn has_next(&self) -> bool {
        self.remaining > 0
    }

    fn advance_word(&mut self) {
        self.words = &self.words[1..];
    }
}

impl<'a, T: Limb> Iterator for Digits<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        let valid = self.window.min(self.remaining);
        let current = self.words[0];

        let digit = if self.window == T::BITS {
            // whole word per digit
            self.advance_word();
            current
        } else if self.pos + self.window < T::BITS {
            let v = (current >> self.pos) & self.mask;
            self.pos += self.window;
            v
        } else if self.pos + self.remaining <= T::BITS {
            // short trailing digit, nothing left in the next word
            (current >> self.pos) & self.mask
        } else {
            // straddles `words[0]` and `words[1]`; pos > 0 here
            let next = self.words[1];
            let v = ((current >> self.pos) | (next << (T::BITS - self.pos))) & self.mask;
            self.pos = self.pos + self.window - T::BITS;
            self.advance_word();
            v
        };

        self.remaining -= valid;
        Some(digit & T::low_mask(valid))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.div_ceil(self.window);
        (n, Some(n))
    }
}

impl<'a, T: Limb> ExactSizeIterator for Digits<'a, T> {}
