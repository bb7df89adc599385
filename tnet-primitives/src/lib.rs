//! TNET chain primitives
//!
//! Hashes, scripts, transactions and blocks in their consensus encoding.
//! These types carry just enough behaviour to build and identify blocks;
//! validation lives elsewhere.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod amount;
pub mod block;
pub mod encode;
pub mod hash;
pub mod merkle;
pub mod script;
pub mod transaction;

pub use amount::{Amount, COIN};
pub use block::{Block, BlockHeader};
pub use encode::Encodable;
pub use hash::{sha256d, Hash256};
pub use merkle::{block_merkle_root, merkle_root};
pub use script::Script;
pub use transaction::{OutPoint, Transaction, TxIn, TxOut};

/// Error types for primitive parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Input contained a character that is not a hex digit
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Input decoded to the wrong number of bytes
    #[error("Invalid length: expected at most {expected} bytes, got {actual}")]
    InvalidLength {
        /// Maximum accepted length
        expected: usize,
        /// Length found in the input
        actual: usize,
    },
}

/// Result type for primitive operations
pub type Result<T> = std::result::Result<T, Error>;
