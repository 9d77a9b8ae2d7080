/// ─── IPBFT Protocol Constants ───────────────────────────────────────────────
///
/// Values shared by every node that has to agree on the genesis document.

// ── Addresses ────────────────────────────────────────────────────────────────

/// Every account address starts with this human-readable prefix.
pub const ADDRESS_PREFIX: &str = "INT3";

/// Length of a canonical address string, prefix included.
pub const ADDRESS_LENGTH: usize = 32;

// ── Keys ─────────────────────────────────────────────────────────────────────

/// Raw length of a BLS validator public key.
pub const BLS_PUBKEY_LENGTH: usize = 128;

// ── Consensus ────────────────────────────────────────────────────────────────

pub const CONSENSUS_POS: &str = "pos";
pub const CONSENSUS_POW: &str = "pow";
pub const CONSENSUS_IPBFT: &str = "ipbft";
