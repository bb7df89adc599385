//! Block headers and blocks

use crate::encode::Encodable;
use crate::hash::Hash256;
use crate::merkle::block_merkle_root;
use crate::transaction::Transaction;
use serde::{Deserialize, Serialize};

/// 80-byte block header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    /// Block version
    pub version: i32,
    /// Hash of the parent block
    pub prev_blockhash: Hash256,
    /// Merkle root of the block's transactions
    pub merkle_root: Hash256,
    /// Timestamp (Unix epoch)
    pub time: u32,
    /// Difficulty target in compact form
    pub bits: u32,
    /// Proof-of-work nonce
    pub nonce: u32,
}

impl BlockHeader {
    /// Encoded header size in bytes.
    pub const SIZE: usize = 80;

    /// Block hash: double-SHA256 of the 80-byte header.
    pub fn hash(&self) -> Hash256 {
        Hash256::hash(&self.consensus_bytes())
    }
}

impl Encodable for BlockHeader {
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.version.to_le_bytes());
        out.extend_from_slice(self.prev_blockhash.as_bytes());
        out.extend_from_slice(self.merkle_root.as_bytes());
        out.extend_from_slice(&self.time.to_le_bytes());
        out.extend_from_slice(&self.bits.to_le_bytes());
        out.extend_from_slice(&self.nonce.to_le_bytes());
    }
}

/// A block: header plus transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Header
    pub header: BlockHeader,
    /// Transactions, coinbase first
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Hash of the header.
    pub fn hash(&self) -> Hash256 {
        self.header.hash()
    }

    /// Merkle root recomputed from the transactions, independent of the
    /// value stored in the header.
    pub fn compute_merkle_root(&self) -> Hash256 {
        block_merkle_root(self)
    }

    /// Check if the header commits to the transactions it carries
    pub fn has_valid_merkle_root(&self) -> bool {
        self.header.merkle_root == self.compute_merkle_root()
    }
}

impl Encodable for Block {
    fn encode(&self, out: &mut Vec<u8>) {
        self.header.encode(out);
        self.transactions.encode(out);
    }
}
