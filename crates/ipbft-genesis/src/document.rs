use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::Path;

use chrono::{DateTime, FixedOffset};
use ipbft_core::constants::{CONSENSUS_IPBFT, CONSENSUS_POS, CONSENSUS_POW};
use ipbft_core::types::{Address, Amount, BlsPublicKey};

use crate::codec;
use crate::error::GenesisResult;

// ── ConsensusKind ────────────────────────────────────────────────────────────

/// Consensus engine named by the genesis document.
///
/// Advisory only: values other than `pos`, `pow` and `ipbft` are carried
/// through unchanged. Equality and hashing go by name, so `Other("pos")`
/// equals `Pos`.
#[derive(Clone, Debug)]
pub enum ConsensusKind {
    Pos,
    Pow,
    Ipbft,
    Other(String),
}

impl ConsensusKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pos => CONSENSUS_POS,
            Self::Pow => CONSENSUS_POW,
            Self::Ipbft => CONSENSUS_IPBFT,
            Self::Other(s) => s,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(
            self.as_str(),
            CONSENSUS_POS | CONSENSUS_POW | CONSENSUS_IPBFT
        )
    }
}

impl From<&str> for ConsensusKind {
    fn from(s: &str) -> Self {
        match s {
            CONSENSUS_POS => Self::Pos,
            CONSENSUS_POW => Self::Pow,
            CONSENSUS_IPBFT => Self::Ipbft,
            other => Self::Other(other.to_string()),
        }
    }
}

impl PartialEq for ConsensusKind {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for ConsensusKind {}

impl Hash for ConsensusKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Display for ConsensusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Document ─────────────────────────────────────────────────────────────────

/// The chain's state at block height zero.
///
/// Built once (from JSON or a built-in preset) and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenesisDocument {
    pub chain_id: String,
    pub consensus: ConsensusKind,
    /// Kept with its original offset and sub-second precision.
    pub genesis_time: DateTime<FixedOffset>,
    pub reward_scheme: RewardSchedule,
    pub current_epoch: EpochRecord,
}

/// Chain-wide emission parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewardSchedule {
    pub total_reward: Amount,
    pub reward_first_year: Amount,
    pub epochs_per_year: u64,
    pub total_years: u64,
}

/// The epoch the chain starts in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EpochRecord {
    /// Sequence number; the genesis epoch is 0.
    pub number: u64,
    pub reward_per_block: Amount,
    pub start_block: u64,
    /// Conventionally greater than `start_block`; not enforced.
    pub end_block: u64,
    /// Lifecycle tag, carried as a plain JSON number.
    pub status: i64,
    /// Genesis roster. May be empty, but the file must list it.
    pub validators: Vec<ValidatorEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatorEntry {
    pub account: Address,
    pub public_key: BlsPublicKey,
    pub voting_power: Amount,
    pub name: String,
    pub remaining_epoch: u64,
}

impl GenesisDocument {
    /// Parse and validate a genesis document.
    pub fn from_json(bytes: &[u8]) -> GenesisResult<Self> {
        codec::from_json(bytes)
    }

    /// Encode as tab-indented JSON.
    pub fn to_json(&self) -> GenesisResult<Vec<u8>> {
        codec::to_json(self)
    }

    pub fn load_file(path: impl AsRef<Path>) -> GenesisResult<Self> {
        codec::load_from_file(path.as_ref())
    }

    /// Write the document to `path`, replacing any existing file.
    pub fn save_as(&self, path: impl AsRef<Path>) -> GenesisResult<()> {
        codec::save_to_file(self, path.as_ref())
    }

    pub fn validators(&self) -> &[ValidatorEntry] {
        &self.current_epoch.validators
    }
}

impl EpochRecord {
    /// Sum of the roster's voting power, or `None` if it exceeds 256 bits.
    pub fn total_voting_power(&self) -> Option<Amount> {
        self.validators
            .iter()
            .try_fold(Amount::zero(), |acc, v| acc.checked_add(v.voting_power))
    }

    /// Number of blocks in `[start_block, end_block]`, or 0 when the bounds
    /// are inverted.
    pub fn block_count(&self) -> u64 {
        self.end_block
            .checked_sub(self.start_block)
            .map_or(0, |span| span.saturating_add(1))
    }
}
