//! Merkle roots

use crate::block::Block;
use crate::hash::Hash256;

/// Bitcoin merkle root over `hashes`: pairwise double-SHA256, duplicating the
/// last entry of an odd level. An empty list yields zero.
pub fn merkle_root(hashes: &[Hash256]) -> Hash256 {
    if hashes.is_empty() {
        return Hash256::ZERO;
    }

    let mut level: Vec<Hash256> = hashes.to_vec();
    let mut preimage = [0u8; 64];
    while level.len() > 1 {
        if level.len() % 2 == 1 {
            let last = level[level.len() - 1];
            level.push(last);
        }
        let mut next = Vec::with_capacity(level.len() / 2);
        for pair in level.chunks_exact(2) {
            preimage[..32].copy_from_slice(pair[0].as_bytes());
            preimage[32..].copy_from_slice(pair[1].as_bytes());
            next.push(Hash256::hash(&preimage));
        }
        level = next;
    }

    level[0]
}

/// Merkle root of a block's transaction ids.
pub fn block_merkle_root(block: &Block) -> Hash256 {
    let txids: Vec<Hash256> = block.transactions.iter().map(|tx| tx.txid()).collect();
    merkle_root(&txids)
}
