use std::fmt;
use std::str::FromStr;

use crate::constants::{ADDRESS_LENGTH, ADDRESS_PREFIX, BLS_PUBKEY_LENGTH};
use crate::error::CoreError;

/// Token amount in the smallest unit (wei-like). Amounts larger than 2^256
/// cannot be expressed in a genesis file.
pub type Amount = primitive_types::U256;

// ── Address ──────────────────────────────────────────────────────────────────

/// Fixed-width account address.
///
/// The 32 bytes are the ASCII characters of the canonical address string:
/// `INT3` followed by 28 base58 characters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        // Only constructed from validated ASCII in `from_str`.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl FromStr for Address {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != ADDRESS_LENGTH {
            return Err(CoreError::InvalidAddressLength {
                expected: ADDRESS_LENGTH,
                got: s.len(),
            });
        }
        let body = s
            .strip_prefix(ADDRESS_PREFIX)
            .ok_or_else(|| CoreError::InvalidAddressPrefix {
                prefix: ADDRESS_PREFIX,
                address: s.to_string(),
            })?;
        bs58::decode(body)
            .into_vec()
            .map_err(|_| CoreError::InvalidAddressEncoding(s.to_string()))?;

        let mut arr = [0u8; ADDRESS_LENGTH];
        arr.copy_from_slice(s.as_bytes());
        Ok(Self(arr))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.as_str())
    }
}

// ── BlsPublicKey ─────────────────────────────────────────────────────────────

/// BLS validator public key (128 raw bytes).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BlsPublicKey([u8; BLS_PUBKEY_LENGTH]);

impl BlsPublicKey {
    pub fn from_bytes(b: [u8; BLS_PUBKEY_LENGTH]) -> Self {
        Self(b)
    }

    /// Copy a key out of `bytes`, which must be exactly 128 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CoreError> {
        let arr: [u8; BLS_PUBKEY_LENGTH] =
            bytes
                .try_into()
                .map_err(|_| CoreError::InvalidPublicKeyLength {
                    expected: BLS_PUBKEY_LENGTH,
                    got: bytes.len(),
                })?;
        Ok(Self(arr))
    }

    pub fn as_bytes(&self) -> &[u8; BLS_PUBKEY_LENGTH] {
        &self.0
    }

    /// `0x`-prefixed lowercase hex of the raw key bytes.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for BlsPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for BlsPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlsPublicKey({}…)", &hex::encode(self.0)[..16])
    }
}
