//! ipbft-genesis
//!
//! The genesis document of an IPBFT chain: validator roster, reward schedule
//! and initial epoch, plus the hex-aware JSON codec that moves it to and from
//! disk without losing precision.
//!
//! File layout (tab indented when written):
//!
//! ```text
//! chain_id, consensus, genesis_time
//! reward_scheme   total_reward, reward_first_year, epoch_no_per_year, total_year
//! current_epoch   number, reward_per_block, start_block, end_block, [status],
//!                 validators[] { address, pub_key, amount, name, epoch }
//! ```
//!
//! Integers and counters are `0x` hex quantities, `pub_key` is the hex of a
//! 128-byte BLS key, `address` is the canonical `INT3…` string.

pub mod codec;
pub mod document;
pub mod error;
pub mod fixtures;
pub mod hex_codec;
pub mod write;

pub use codec::{from_json, load_from_file, save_to_file, to_json};
pub use document::{ConsensusKind, EpochRecord, GenesisDocument, RewardSchedule, ValidatorEntry};
pub use error::{GenesisError, GenesisResult};
pub use fixtures::{
    builtin_fixture, builtin_fixture_by_name, builtin_json, Network, MAINNET_GENESIS_JSON,
    TESTNET_GENESIS_JSON,
};
pub use write::GenesisDocWrite;
