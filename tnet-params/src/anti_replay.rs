//! Replay-protection marker
//!
//! Transactions carrying an OP_RETURN output with exactly these bytes are
//! refused by the validation layer until the sunset height, so that
//! transactions cannot be replayed across the chain split.

/// The marker text. The commitment is its ASCII bytes, without terminator.
pub const ANTI_REPLAY_COMMITMENT: &str = "Bitcoin Core: Satoshi's True Vision";

/// Commitment bytes carried in `ConsensusParams::anti_replay_op_return_commitment`.
pub fn anti_replay_commitment() -> Vec<u8> {
    ANTI_REPLAY_COMMITMENT.as_bytes().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commitment_bytes() {
        let commitment = anti_replay_commitment();
        assert_eq!(commitment.len(), 35);
        assert_eq!(commitment, b"Bitcoin Core: Satoshi's True Vision".to_vec());
        assert!(commitment.is_ascii());
    }
}
