use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::document::GenesisDocument;
use crate::error::{GenesisError, GenesisResult};

/// Built-in network presets, used when no genesis file is supplied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    pub const ALL: [Network; 2] = [Network::Mainnet, Network::Testnet];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = GenesisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Self::Mainnet),
            "testnet" => Ok(Self::Testnet),
            other => Err(GenesisError::UnknownFixture(other.to_string())),
        }
    }
}

pub const MAINNET_GENESIS_JSON: &str = r#"{
	"chain_id": "intchain",
	"consensus": "ipbft",
	"genesis_time": "2020-05-12T11:46:26.899977+08:00",
	"reward_scheme": {
		"total_reward": "0xa56fa5b99019a5c8000000",
		"reward_first_year": "0x108b2a2c28029094000000",
		"epoch_no_per_year": "0x111c",
		"total_year": "0xa"
	},
	"current_epoch": {
		"number": "0x0",
		"reward_per_block": "0x8cd1dc18de05834",
		"start_block": "0x0",
		"end_block": "0x1c20",
		"validators": [
			{
				"address": "INT3DvvQnnBNcUUeMJfiRi6GKFRjhwaw",
				"pub_key": "0x0604F4712EF4A29EB44CA3F8254BDCD7E9EF8F4A9EE8EABE218D280F3BEC98B6691B8C82A1EE29ED4CB18CC89F77A6CF503A04E3D246FCFEE14696DD1D85FB9B628A846037FAD2074F23F0D0B1F20A8027E0DB8436100BA4C0BCF9FBEB4A96D846945A10F20D0007E42BCC18B745965332FBEBD9FCB5F9F9FA405C5353BAE674",
				"amount": "0x54b40b1f852bda000000",
				"name": "",
				"epoch": "0x0"
			}
		]
	}
}"#;

pub const TESTNET_GENESIS_JSON: &str = r#"{
	"chain_id": "testnet",
	"consensus": "ipbft",
	"genesis_time": "2020-05-14T10:14:38.992192+08:00",
	"reward_scheme": {
		"total_reward": "0xa56fa5b99019a5c8000000",
		"reward_first_year": "0x108b2a2c28029094000000",
		"epoch_no_per_year": "0x111c",
		"total_year": "0xa"
	},
	"current_epoch": {
		"number": "0x0",
		"reward_per_block": "0x8cd1dc18de05834",
		"start_block": "0x0",
		"end_block": "0x1c20",
		"validators": [
			{
				"address": "INT3D5XkATYcApJ8xXqQe1z5K35jj2Tf",
				"pub_key": "0x0F1C02F6CEEF2967E8C255D10A27E78B02252604F963A573CC20BF3861C4160D22FE984FF94F99666B0EAA3E5891599DCEE0E69D03D6071E685C0ADEAF658056174AAD734EF31BE95BAAC16F7D590EFDA01F0CD4228386D50B2377F377CDC59041E422514ADF3B3ABB1BC4E8851617A55703DA5E409E66D521ABB483F21BDA5E",
				"amount": "0x54b40b1f852bda000000",
				"name": "",
				"epoch": "0x0"
			}
		]
	}
}"#;

static MAINNET: Lazy<GenesisDocument> = Lazy::new(|| {
    GenesisDocument::from_json(MAINNET_GENESIS_JSON.as_bytes())
        .expect("built-in mainnet genesis is valid")
});

static TESTNET: Lazy<GenesisDocument> = Lazy::new(|| {
    GenesisDocument::from_json(TESTNET_GENESIS_JSON.as_bytes())
        .expect("built-in testnet genesis is valid")
});

/// The literal preset text for `network`.
pub fn builtin_json(network: Network) -> &'static str {
    match network {
        Network::Mainnet => MAINNET_GENESIS_JSON,
        Network::Testnet => TESTNET_GENESIS_JSON,
    }
}

/// The decoded preset for `network`. Parsed once per process.
pub fn builtin_fixture(network: Network) -> GenesisDocument {
    match network {
        Network::Mainnet => MAINNET.clone(),
        Network::Testnet => TESTNET.clone(),
    }
}

pub fn builtin_fixture_by_name(name: &str) -> GenesisResult<GenesisDocument> {
    name.parse().map(builtin_fixture)
}
