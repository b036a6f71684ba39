use ff::PrimeFieldBits;
use num_bigint::BigInt;
use tracing::debug;

use crate::{
    config::Config,
    error::{Error, Result},
    limb::{Limb, Word},
    scalar::{Scalar, ScalarWords},
    traits::WindowGroup,
    window::Digits,
};

/// Precomputed multiples of a fixed base for windowed scalar multiplication.
///
/// Block `i` holds `d * 2^(i * window) * base` at index `d` for every
/// `d < 2^window`, so a scalar is multiplied with one table lookup and at most
/// one addition per digit, and no doublings.
///
/// Building the table needs `&mut self`; multiplying only reads it, so a
/// built table can be shared across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerWindow<G> {
    bit_len: usize,
    window: usize,
    table: Vec<Vec<G>>,
}

impl<G> Default for PowerWindow<G> {
    /// An empty table; only the zero scalar can be multiplied.
    fn default() -> Self {
        Self {
            bit_len: 0,
            window: 0,
            table: Vec::new(),
        }
    }
}

impl<G: WindowGroup> PowerWindow<G> {
    /// Builds a table for scalars of up to `bit_len` bits, consuming
    /// `window` bits per lookup.
    pub fn new(base: &G, bit_len: usize, window: usize) -> Result<Self> {
        Self::with_config(base, Config::new(bit_len, window)?)
    }

    pub fn with_config(base: &G, config: Config) -> Result<Self> {
        let mut table = Self::default();
        table.build(base, config)?;
        Ok(table)
    }

    /// Rebuilds the table in place for a new base and shape. On error the
    /// previous table is left as it was.
    pub fn init(&mut self, base: &G, bit_len: usize, window: usize) -> Result<()> {
        self.build(base, Config::new(bit_len, window)?)
    }

    #[tracing::instrument(skip_all, fields(bit_len = config.bit_len(), window = config.window()))]
    fn build(&mut self, base: &G, config: Config) -> Result<()> {
        let block_count = config.block_count();
        let block_len = config.block_len();
        let too_large = |_| Error::TableTooLarge {
            blocks: block_count,
            block_len,
        };

        let mut table = Vec::new();
        table.try_reserve_exact(block_count).map_err(too_large)?;

        // `t` is `2^(i * window) * base` at the start of block `i`
        let mut t = base.clone();
        for _ in 0..block_count {
            let mut block = Vec::new();
            block.try_reserve_exact(block_len).map_err(too_large)?;
            block.push(G::identity());
            let mut d = 1;
            while d < block_len {
                for j in 0..d {
                    let entry = block[j].add(&t);
                    block.push(entry);
                }
                t = t.double();
                d *= 2;
            }
            table.push(block);
        }

        self.bit_len = config.bit_len();
        self.window = config.window();
        self.table = table;
        debug!(blocks = block_count, entries = block_count * block_len, "built power window table");
        Ok(())
    }

    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn block_count(&self) -> usize {
        self.table.len()
    }

    /// The multiples held by block `index`, indexed by digit.
    pub fn block(&self, index: usize) -> Option<&[G]> {
        self.table.get(index).map(Vec::as_slice)
    }

    pub fn power<F: PrimeFieldBits>(&self, y: &Scalar<'_, F>) -> Result<G> {
        self.power_words(&y.to_words())
    }

    pub fn power_i64(&self, y: i64) -> Result<G> {
        if y == 0 {
            return Ok(G::identity());
        }
        self.power_words(&ScalarWords::from(y))
    }

    pub fn power_field<F: PrimeFieldBits>(&self, y: &F) -> Result<G> {
        self.power_words(&ScalarWords::from_field(y))
    }

    pub fn power_bigint(&self, y: &BigInt) -> Result<G> {
        self.power_words(&ScalarWords::from(y))
    }

    pub fn power_words(&self, y: &ScalarWords) -> Result<G> {
        self.power_array(&y.words, y.bit_len, y.negative)
    }

    /// Multiplies the base by the magnitude held in the low `bit_len` bits of
    /// `words` (least significant word first), negated if `negative`.
    pub fn power_array(&self, words: &[Word], bit_len: usize, negative: bool) -> Result<G> {
        let mut z = G::identity();
        if bit_len == 0 {
            return Ok(z);
        }

        let digits = Digits::new(words, bit_len, self.window).map_err(|err| match err {
            // an empty table has window 0
            Error::InvalidWindow { .. } => self.out_of_range(0, bit_len),
            err => err,
        })?;
        for (i, v) in digits.enumerate() {
            let Some(block) = self.table.get(i) else {
                return Err(self.out_of_range(i, bit_len));
            };
            if v != 0 {
                z = z.add(&block[v.as_usize()]);
            }
        }

        if negative {
            z = z.negate();
        }
        Ok(z)
    }

    fn out_of_range(&self, index: usize, bit_len: usize) -> Error {
        debug!(
            index,
            blocks = self.table.len(),
            bit_len,
            window = self.window,
            "scalar does not fit the power window table"
        );
        Error::ScalarOutOfRange {
            index,
            blocks: self.table.len(),
            bit_len,
            window: self.window,
        }
    }
}
