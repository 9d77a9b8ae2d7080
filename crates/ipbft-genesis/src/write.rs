//! On-disk shape of the genesis document.
//!
//! Numbers travel as hex quantities, addresses as their canonical string and
//! key material as hex. Converting into a [`GenesisDocument`] is where every
//! required-field and format check happens, so a shape that converts
//! successfully is a complete, valid document.

use chrono::{DateTime, FixedOffset};
use ipbft_core::types::{Address, BlsPublicKey};
use serde::{Deserialize, Deserializer, Serialize};

use crate::document::{EpochRecord, GenesisDocument, RewardSchedule, ValidatorEntry};
use crate::error::{
    GenesisError, PATH_EPOCH, PATH_GENESIS, PATH_REWARD_SCHEME, PATH_VALIDATORS,
};
use crate::hex_codec::{decode_key, HexBig, HexUint64};

fn is_zero(v: &i64) -> bool {
    *v == 0
}

/// Read `null` the same as an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenesisDocWrite {
    #[serde(default, deserialize_with = "null_as_default")]
    pub chain_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub consensus: String,
    pub genesis_time: DateTime<FixedOffset>,
    #[serde(default)]
    pub reward_scheme: Option<RewardSchemeWrite>,
    #[serde(default)]
    pub current_epoch: Option<EpochWrite>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RewardSchemeWrite {
    #[serde(default)]
    pub total_reward: Option<HexBig>,
    #[serde(default)]
    pub reward_first_year: Option<HexBig>,
    #[serde(default)]
    pub epoch_no_per_year: HexUint64,
    #[serde(default)]
    pub total_year: HexUint64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EpochWrite {
    #[serde(default)]
    pub number: HexUint64,
    #[serde(default)]
    pub reward_per_block: Option<HexBig>,
    #[serde(default)]
    pub start_block: HexUint64,
    #[serde(default)]
    pub end_block: HexUint64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub status: i64,
    #[serde(default)]
    pub validators: Option<Vec<ValidatorWrite>>,
}

/// One roster entry as written on disk.
///
/// `address` must be a canonical `INT3…` address; anything else fails the
/// conversion with a format error instead of being stored as raw bytes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidatorWrite {
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pub_key: String,
    #[serde(default)]
    pub amount: Option<HexBig>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub epoch: HexUint64,
}

// ── Domain → write shape ─────────────────────────────────────────────────────

impl From<&GenesisDocument> for GenesisDocWrite {
    fn from(doc: &GenesisDocument) -> Self {
        Self {
            chain_id: doc.chain_id.clone(),
            consensus: doc.consensus.as_str().to_string(),
            genesis_time: doc.genesis_time,
            reward_scheme: Some(RewardSchemeWrite::from(&doc.reward_scheme)),
            current_epoch: Some(EpochWrite::from(&doc.current_epoch)),
        }
    }
}

impl From<&RewardSchedule> for RewardSchemeWrite {
    fn from(rs: &RewardSchedule) -> Self {
        Self {
            total_reward: Some(HexBig(rs.total_reward)),
            reward_first_year: Some(HexBig(rs.reward_first_year)),
            epoch_no_per_year: HexUint64(rs.epochs_per_year),
            total_year: HexUint64(rs.total_years),
        }
    }
}

impl From<&EpochRecord> for EpochWrite {
    fn from(ep: &EpochRecord) -> Self {
        Self {
            number: HexUint64(ep.number),
            reward_per_block: Some(HexBig(ep.reward_per_block)),
            start_block: HexUint64(ep.start_block),
            end_block: HexUint64(ep.end_block),
            status: ep.status,
            validators: Some(ep.validators.iter().map(ValidatorWrite::from).collect()),
        }
    }
}

impl From<&ValidatorEntry> for ValidatorWrite {
    fn from(v: &ValidatorEntry) -> Self {
        Self {
            address: v.account.to_string(),
            pub_key: v.public_key.to_hex(),
            amount: Some(HexBig(v.voting_power)),
            name: v.name.clone(),
            epoch: HexUint64(v.remaining_epoch),
        }
    }
}

// ── Write shape → domain ─────────────────────────────────────────────────────

impl TryFrom<GenesisDocWrite> for GenesisDocument {
    type Error = GenesisError;

    fn try_from(w: GenesisDocWrite) -> Result<Self, Self::Error> {
        if w.chain_id.is_empty() {
            return Err(GenesisError::missing("chain_id", PATH_GENESIS));
        }
        let reward_scheme = w
            .reward_scheme
            .ok_or_else(|| GenesisError::missing("reward_scheme", PATH_GENESIS))?;
        let current_epoch = w
            .current_epoch
            .ok_or_else(|| GenesisError::missing("current_epoch", PATH_GENESIS))?;

        Ok(Self {
            consensus: w.consensus.as_str().into(),
            chain_id: w.chain_id,
            genesis_time: w.genesis_time,
            reward_scheme: reward_scheme.try_into()?,
            current_epoch: current_epoch.try_into()?,
        })
    }
}

impl TryFrom<RewardSchemeWrite> for RewardSchedule {
    type Error = GenesisError;

    fn try_from(w: RewardSchemeWrite) -> Result<Self, Self::Error> {
        let total_reward = w
            .total_reward
            .ok_or_else(|| GenesisError::missing("total_reward", PATH_REWARD_SCHEME))?;
        let reward_first_year = w
            .reward_first_year
            .ok_or_else(|| GenesisError::missing("reward_first_year", PATH_REWARD_SCHEME))?;

        Ok(Self {
            total_reward: total_reward.0,
            reward_first_year: reward_first_year.0,
            epochs_per_year: w.epoch_no_per_year.0,
            total_years: w.total_year.0,
        })
    }
}

impl TryFrom<EpochWrite> for EpochRecord {
    type Error = GenesisError;

    fn try_from(w: EpochWrite) -> Result<Self, Self::Error> {
        let validators = w
            .validators
            .ok_or_else(|| GenesisError::missing("validators", PATH_EPOCH))?
            .into_iter()
            .map(ValidatorEntry::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            number: w.number.0,
            // Absent reward is read as zero; see the codec's load warnings.
            reward_per_block: w.reward_per_block.map(|r| r.0).unwrap_or_default(),
            start_block: w.start_block.0,
            end_block: w.end_block.0,
            status: w.status,
            validators,
        })
    }
}

impl TryFrom<ValidatorWrite> for ValidatorEntry {
    type Error = GenesisError;

    fn try_from(w: ValidatorWrite) -> Result<Self, Self::Error> {
        let account: Address = w
            .address
            .parse()
            .map_err(|e| GenesisError::format("address", PATH_VALIDATORS, e))?;

        let key_bytes =
            decode_key(&w.pub_key).map_err(|e| GenesisError::format("pub_key", PATH_VALIDATORS, e))?;
        let public_key = BlsPublicKey::from_slice(&key_bytes)
            .map_err(|e| GenesisError::format("pub_key", PATH_VALIDATORS, e))?;

        let voting_power = w
            .amount
            .ok_or_else(|| GenesisError::missing("amount", PATH_VALIDATORS))?;

        Ok(Self {
            account,
            public_key,
            voting_power: voting_power.0,
            name: w.name,
            remaining_epoch: w.epoch.0,
        })
    }
}
