//! TNET network identities and the identity-related parameter types

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{Ipv6Addr, SocketAddrV6};
use std::str::FromStr;

/// Network type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    /// Production network
    Main,
    /// Public test network
    Test,
    /// Local regression-test network
    Regtest,
}

impl NetworkType {
    /// Every network, in registry order.
    pub const ALL: [NetworkType; 3] = [NetworkType::Main, NetworkType::Test, NetworkType::Regtest];

    /// The configuration name: "main", "test" or "regtest".
    pub const fn name(self) -> &'static str {
        match self {
            NetworkType::Main => "main",
            NetworkType::Test => "test",
            NetworkType::Regtest => "regtest",
        }
    }

    /// Resolve a configuration name. Matching is exact and case-sensitive.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|network| network.name() == name)
            .ok_or_else(|| Error::InvalidNetworkName(name.to_string()))
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NetworkType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

/// Kinds of base58 version prefix an address codec needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Base58Type {
    /// Pay-to-pubkey-hash address
    PubkeyAddress,
    /// Pay-to-script-hash address
    ScriptAddress,
    /// WIF private key
    SecretKey,
    /// BIP-32 extended public key
    ExtPublicKey,
    /// BIP-32 extended private key
    ExtSecretKey,
}

impl Base58Type {
    /// Number of prefix kinds.
    pub const COUNT: usize = 5;

    /// Every prefix kind, in table order.
    pub const ALL: [Base58Type; Self::COUNT] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
    ];

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Base58 version prefixes, one per [`Base58Type`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base58Prefixes([Vec<u8>; Base58Type::COUNT]);

impl Base58Prefixes {
    /// Build the table from each prefix kind.
    pub fn new(
        pubkey_address: Vec<u8>,
        script_address: Vec<u8>,
        secret_key: Vec<u8>,
        ext_public_key: Vec<u8>,
        ext_secret_key: Vec<u8>,
    ) -> Self {
        Self([
            pubkey_address,
            script_address,
            secret_key,
            ext_public_key,
            ext_secret_key,
        ])
    }

    /// Prefix bytes for `kind`.
    pub fn get(&self, kind: Base58Type) -> &[u8] {
        &self.0[kind.index()]
    }
}

/// A DNS seed: a resolver that returns addresses of reachable nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsSeed {
    /// Operator name
    pub name: String,
    /// Hostname to resolve
    pub host: String,
    /// Whether the seeder answers service-bit filtered queries
    pub supports_service_bits_filtering: bool,
}

impl DnsSeed {
    /// Create a DNS seed entry
    pub fn new(name: &str, host: &str, supports_service_bits_filtering: bool) -> Self {
        Self {
            name: name.to_string(),
            host: host.to_string(),
            supports_service_bits_filtering,
        }
    }
}

/// A hardcoded peer address, IPv4 addresses mapped into IPv6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeedSpec6 {
    /// IPv6 (or IPv4-mapped) address bytes
    pub addr: [u8; 16],
    /// TCP port
    pub port: u16,
}

impl SeedSpec6 {
    /// Socket address for connecting to this seed
    pub fn socket_addr(&self) -> SocketAddrV6 {
        SocketAddrV6::new(Ipv6Addr::from(self.addr), self.port, 0, 0)
    }
}
