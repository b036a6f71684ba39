use crate::{
    error::{Error, Result},
    limb::WORD_BITS,
};

/// Largest usable window: a block holds `2^window` elements, so the block
/// length has to fit in a `usize`.
pub const MAX_WINDOW: usize = if WORD_BITS < usize::BITS as usize {
    WORD_BITS
} else {
    usize::BITS as usize - 1
};

/// Shape of a precomputed table: the widest scalar it accepts and the number
/// of scalar bits consumed per lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    bit_len: usize,
    window: usize,
}

impl Config {
    pub fn new(bit_len: usize, window: usize) -> Result<Self> {
        if window == 0 || window > MAX_WINDOW {
            return Err(Error::InvalidWindow {
                window,
                max: MAX_WINDOW,
            });
        }
        Ok(Self { bit_len, window })
    }

    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Number of blocks, `(bit_len + window) / window`.
    ///
    /// One more than `ceil(bit_len / window)` whenever `window` divides
    /// `bit_len`; keep it that way, callers rely on the extra block.
    pub fn block_count(&self) -> usize {
        self.bit_len / self.window + 1
    }

    /// Entries per block, `2^window`.
    pub fn block_len(&self) -> usize {
        1 << self.window
    }
}
