use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The scalar has more digits than the table has blocks.
    #[error(
        "scalar out of range: block {index} requested but table holds {blocks} blocks \
         (bit length {bit_len}, window {window})"
    )]
    ScalarOutOfRange {
        index: usize,
        blocks: usize,
        bit_len: usize,
        window: usize,
    },

    #[error("window width {window} is outside 1..={max}")]
    InvalidWindow { window: usize, max: usize },

    #[error("table of {blocks} blocks of {block_len} elements cannot be allocated")]
    TableTooLarge { blocks: usize, block_len: usize },

    #[error("bit length {bit_len} exceeds the {available} bits held by the words")]
    BitLengthOverflow { bit_len: usize, available: usize },
}
