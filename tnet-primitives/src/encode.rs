//! Consensus serialization

/// Types with a canonical consensus byte encoding.
pub trait Encodable {
    /// Append the consensus encoding of `self` to `out`.
    fn encode(&self, out: &mut Vec<u8>);

    /// Consensus encoding as a fresh buffer.
    fn consensus_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.encode(&mut out);
        out
    }
}

/// Append a Bitcoin-style CompactSize length prefix.
pub fn encode_compact_size(n: u64, out: &mut Vec<u8>) {
    match n {
        0x00..=0xfc => out.push(n as u8),
        0xfd..=0xffff => {
            out.push(0xfd);
            out.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            out.push(0xfe);
            out.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            out.push(0xff);
            out.extend_from_slice(&n.to_le_bytes());
        }
    }
}

impl<T: Encodable> Encodable for Vec<T> {
    fn encode(&self, out: &mut Vec<u8>) {
        encode_compact_size(self.len() as u64, out);
        for item in self {
            item.encode(out);
        }
    }
}
