//! Transactions in their legacy (pre-segwit) encoding

use crate::amount::Amount;
use crate::encode::Encodable;
use crate::hash::Hash256;
use crate::script::Script;
use serde::{Deserialize, Serialize};

/// Reference to an output of an earlier transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    /// Transaction id
    pub txid: Hash256,
    /// Output index
    pub vout: u32,
}

impl OutPoint {
    /// The reference carried by coinbase inputs: zero txid, index `u32::MAX`.
    pub const fn null() -> Self {
        Self {
            txid: Hash256::ZERO,
            vout: u32::MAX,
        }
    }

    /// Check if this is the coinbase reference
    pub fn is_null(&self) -> bool {
        self.txid.is_zero() && self.vout == u32::MAX
    }
}

impl Encodable for OutPoint {
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.txid.as_bytes());
        out.extend_from_slice(&self.vout.to_le_bytes());
    }
}

/// Transaction input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxIn {
    /// Output being spent
    pub previous_output: OutPoint,
    /// Signature script
    pub script_sig: Script,
    /// Sequence number
    pub sequence: u32,
}

impl Encodable for TxIn {
    fn encode(&self, out: &mut Vec<u8>) {
        self.previous_output.encode(out);
        self.script_sig.encode(out);
        out.extend_from_slice(&self.sequence.to_le_bytes());
    }
}

/// Transaction output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOut {
    /// Value paid
    pub value: Amount,
    /// Locking script
    pub script_pubkey: Script,
}

impl Encodable for TxOut {
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.value.to_sat().to_le_bytes());
        self.script_pubkey.encode(out);
    }
}

/// A transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Format version
    pub version: i32,
    /// Inputs
    pub inputs: Vec<TxIn>,
    /// Outputs
    pub outputs: Vec<TxOut>,
    /// Lock time
    pub lock_time: u32,
}

impl Transaction {
    /// Transaction id: double-SHA256 of the encoding.
    pub fn txid(&self) -> Hash256 {
        Hash256::hash(&self.consensus_bytes())
    }

    /// A coinbase has exactly one input spending the null outpoint.
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].previous_output.is_null()
    }
}

impl Encodable for Transaction {
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.version.to_le_bytes());
        self.inputs.encode(out);
        self.outputs.encode(out);
        out.extend_from_slice(&self.lock_time.to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coinbase() -> Transaction {
        Transaction {
            version: 1,
            inputs: vec![TxIn {
                previous_output: OutPoint::null(),
                script_sig: Script::new().push_int(486_604_799).push_script_num(4),
                sequence: u32::MAX,
            }],
            outputs: vec![TxOut {
                value: Amount::from_coins(50),
                script_pubkey: Script::new(),
            }],
            lock_time: 0,
        }
    }

    #[test]
    fn test_null_outpoint() {
        let null = OutPoint::null();
        assert!(null.is_null());
        assert_eq!(null.consensus_bytes(), [vec![0u8; 32], vec![0xff; 4]].concat());
    }

    #[test]
    fn test_coinbase_detection() {
        let mut tx = coinbase();
        assert!(tx.is_coinbase());

        tx.inputs[0].previous_output.vout = 0;
        assert!(!tx.is_coinbase());
    }

    #[test]
    fn test_encoding_layout() {
        let bytes = coinbase().consensus_bytes();
        // version
        assert_eq!(&bytes[..4], &[1, 0, 0, 0]);
        // one input
        assert_eq!(bytes[4], 1);
        // script_sig length after the 36-byte outpoint
        assert_eq!(bytes[41], 7);
        // lock time
        assert_eq!(&bytes[bytes.len() - 4..], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_txid_changes_with_content() {
        let a = coinbase();
        let mut b = coinbase();
        b.lock_time = 1;
        assert_ne!(a.txid(), b.txid());
        assert_eq!(a.txid(), coinbase().txid());
    }
}
