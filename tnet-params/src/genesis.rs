//! Genesis block construction and verification
//!
//! The genesis block's coinbase cannot be spent: its output never entered
//! the UTXO set. Every TNET network shares the same coinbase, so all three
//! genesis blocks have the same merkle root and differ only in header fields.

use crate::network::NetworkType;
use crate::{Error, Result};
use tnet_primitives::script::OP_CHECKSIG;
use tnet_primitives::{Amount, Block, BlockHeader, Hash256, OutPoint, Script, Transaction, TxIn, TxOut};

/// Headline embedded in every genesis coinbase.
pub const GENESIS_TIMESTAMP: &str =
    "The Times 03/Jan/2009 Chancellor on brink of second bailout for banks";

/// Uncompressed public key paid by every genesis coinbase.
pub const GENESIS_OUTPUT_PUBKEY: &str = "04678afdb0fe5548271967f1a67130b7105cd6a828e03909\
a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112\
de5c384df7ba0b8d578a4c702b6bf11d5f";

/// Difficulty bits pushed into the coinbase script. Unrelated to the header's bits.
const COINBASE_SCRIPT_BITS: i64 = 486_604_799;

/// Small marker pushed after the bits.
const COINBASE_SCRIPT_MARKER: i64 = 4;

/// Build a genesis block from its literals.
///
/// The block holds a single coinbase paying `reward` to `output_script`,
/// with `timestamp` embedded in the coinbase script. The header takes
/// `time`, `nonce`, `bits` and `version` verbatim, has a zero parent hash and
/// the merkle root of the coinbase. Nothing is verified here.
pub fn create_genesis_block(
    timestamp: &str,
    output_script: &Script,
    time: u32,
    nonce: u32,
    bits: u32,
    version: i32,
    reward: Amount,
) -> Block {
    let script_sig = Script::new()
        .push_int(COINBASE_SCRIPT_BITS)
        .push_script_num(COINBASE_SCRIPT_MARKER)
        .push_slice(timestamp.as_bytes());

    let coinbase = Transaction {
        version: 1,
        inputs: vec![TxIn {
            previous_output: OutPoint::null(),
            script_sig,
            sequence: u32::MAX,
        }],
        outputs: vec![TxOut {
            value: reward,
            script_pubkey: output_script.clone(),
        }],
        lock_time: 0,
    };

    let mut block = Block {
        header: BlockHeader {
            version,
            prev_blockhash: Hash256::ZERO,
            merkle_root: Hash256::ZERO,
            time,
            bits,
            nonce,
        },
        transactions: vec![coinbase],
    };
    block.header.merkle_root = block.compute_merkle_root();
    block
}

/// Pay-to-pubkey script shared by every genesis coinbase.
pub fn genesis_output_script() -> Result<Script> {
    let pubkey = Script::from_hex(GENESIS_OUTPUT_PUBKEY)?;
    Ok(Script::new()
        .push_slice(pubkey.as_bytes())
        .push_opcode(OP_CHECKSIG))
}

/// Build a genesis block with the shared headline and output script.
pub fn create_default_genesis_block(
    time: u32,
    nonce: u32,
    bits: u32,
    version: i32,
    reward: Amount,
) -> Result<Block> {
    let output_script = genesis_output_script()?;
    Ok(create_genesis_block(
        GENESIS_TIMESTAMP,
        &output_script,
        time,
        nonce,
        bits,
        version,
        reward,
    ))
}

/// Check a freshly built genesis block against the identity it claims.
///
/// Returns the block hash on success.
pub fn verify_genesis(
    network: NetworkType,
    block: &Block,
    expected_hash: &Hash256,
    expected_merkle_root: &Hash256,
) -> Result<Hash256> {
    let hash = block.hash();
    if hash != *expected_hash {
        return Err(Error::GenesisHashMismatch {
            network,
            expected: *expected_hash,
            actual: hash,
        });
    }

    if block.header.merkle_root != *expected_merkle_root {
        return Err(Error::GenesisMerkleRootMismatch {
            network,
            expected: *expected_merkle_root,
            actual: block.header.merkle_root,
        });
    }

    Ok(hash)
}
