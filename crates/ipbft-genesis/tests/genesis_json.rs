//! Decoding and encoding of complete genesis files.
//!
//! Run with:
//!   cargo test -p ipbft-genesis --test genesis_json

use chrono::DateTime;
use ipbft_core::{Amount, BlsPublicKey};
use ipbft_genesis::{
    builtin_fixture, ConsensusKind, EpochRecord, GenesisDocument, GenesisError, Network,
    RewardSchedule, ValidatorEntry, MAINNET_GENESIS_JSON,
};
use proptest::prelude::*;
use serde_json::{json, Value};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn mainnet_value() -> Value {
    serde_json::from_str(MAINNET_GENESIS_JSON).expect("mainnet text is JSON")
}

fn decode(v: &Value) -> Result<GenesisDocument, GenesisError> {
    GenesisDocument::from_json(v.to_string().as_bytes())
}

fn validator_mut(v: &mut Value) -> &mut serde_json::Map<String, Value> {
    v["current_epoch"]["validators"][0]
        .as_object_mut()
        .expect("validator object")
}

fn assert_missing(err: GenesisError, expected: &str) {
    match err {
        GenesisError::MissingField { field, .. } => assert_eq!(field, expected),
        other => panic!("expected missing field {expected}, got {other:?}"),
    }
}

// ── Fixtures ──────────────────────────────────────────────────────────────────

#[test]
fn mainnet_fixture_decodes() {
    let doc = GenesisDocument::from_json(MAINNET_GENESIS_JSON.as_bytes()).unwrap();
    assert_eq!(doc.chain_id, "intchain");
    assert_eq!(doc.consensus, ConsensusKind::Ipbft);
    assert_eq!(doc.validators().len(), 1);
    assert_eq!(
        doc.current_epoch.reward_per_block,
        Amount::from(0x8cd1dc18de05834u64)
    );
    assert_eq!(doc.current_epoch.end_block, 0x1c20);
    assert_eq!(doc.reward_scheme.epochs_per_year, 0x111c);
    assert_eq!(doc.reward_scheme.total_years, 10);

    let v = &doc.validators()[0];
    assert_eq!(v.account.to_string(), "INT3DvvQnnBNcUUeMJfiRi6GKFRjhwaw");
    assert_eq!(v.voting_power, Amount::from_dec_str("400000000000000000000000").unwrap());
    assert_eq!(v.public_key.as_bytes()[..2], [0x06, 0x04]);
    assert_eq!(v.name, "");
    assert_eq!(v.remaining_epoch, 0);
}

#[test]
fn genesis_time_keeps_offset_and_fraction() {
    let doc = builtin_fixture(Network::Mainnet);
    assert_eq!(
        doc.genesis_time,
        DateTime::parse_from_rfc3339("2020-05-12T11:46:26.899977+08:00").unwrap()
    );
    assert_eq!(doc.genesis_time.offset().local_minus_utc(), 8 * 3600);

    let text = String::from_utf8(doc.to_json().unwrap()).unwrap();
    assert!(text.contains("\"genesis_time\": \"2020-05-12T11:46:26.899977+08:00\""));
}

#[test]
fn builtin_fixture_matches_its_text() {
    let decoded = GenesisDocument::from_json(MAINNET_GENESIS_JSON.as_bytes()).unwrap();
    assert_eq!(builtin_fixture(Network::Mainnet), decoded);
}

// ── Round trips ───────────────────────────────────────────────────────────────

#[test]
fn presets_round_trip_through_json() {
    for network in Network::ALL {
        let doc = builtin_fixture(network);
        let bytes = doc.to_json().unwrap();
        assert_eq!(GenesisDocument::from_json(&bytes).unwrap(), doc);
    }
}

#[test]
fn canonical_output_is_lowercase() {
    let text = String::from_utf8(builtin_fixture(Network::Mainnet).to_json().unwrap()).unwrap();
    assert!(text.contains("\"pub_key\": \"0x0604f4712ef4a29eb44ca3f8254bdcd7"));
    assert!(text.contains("\"amount\": \"0x54b40b1f852bda000000\""));
    assert!(text.contains("\"epoch_no_per_year\": \"0x111c\""));
}

#[test]
fn save_and_load_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("genesis.json");
    let doc = builtin_fixture(Network::Testnet);

    doc.save_as(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("{\n\t\"chain_id\": \"testnet\""));
    assert_eq!(GenesisDocument::load_file(&path).unwrap(), doc);
}

#[test]
fn save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("genesis.json");
    let err = builtin_fixture(Network::Mainnet).save_as(&path).unwrap_err();
    assert!(matches!(err, GenesisError::Io { .. }));
}

// ── Validators list ───────────────────────────────────────────────────────────

#[test]
fn empty_validators_accepted() {
    let mut v = mainnet_value();
    v["current_epoch"]["validators"] = json!([]);
    let doc = decode(&v).unwrap();
    assert!(doc.validators().is_empty());
}

#[test]
fn null_validators_rejected() {
    let mut v = mainnet_value();
    v["current_epoch"]["validators"] = Value::Null;
    let err = decode(&v).unwrap_err();
    assert_eq!(
        err.to_string(),
        "missing required field 'validators' for Genesis/epoch"
    );
}

#[test]
fn absent_validators_rejected() {
    let mut v = mainnet_value();
    v["current_epoch"].as_object_mut().unwrap().remove("validators");
    assert_missing(decode(&v).unwrap_err(), "validators");
}

// ── Public keys ───────────────────────────────────────────────────────────────

#[test]
fn short_and_long_keys_rejected() {
    for len in [127usize, 129, 64] {
        let mut v = mainnet_value();
        validator_mut(&mut v).insert("pub_key".into(), json!(format!("0x{}", "ab".repeat(len))));
        match decode(&v).unwrap_err() {
            GenesisError::Format { field, path, .. } => {
                assert_eq!(field, "pub_key");
                assert_eq!(path, "Genesis/epoch/validators");
            }
            other => panic!("expected format error, got {other:?}"),
        }
    }
}

#[test]
fn key_of_exactly_128_bytes_accepted() {
    let mut v = mainnet_value();
    validator_mut(&mut v).insert("pub_key".into(), json!("cd".repeat(128)));
    let doc = decode(&v).unwrap();
    assert_eq!(doc.validators()[0].public_key.as_bytes(), &[0xcd; 128]);
}

#[test]
fn empty_or_non_hex_key_rejected() {
    for bad in ["", "0x", "zz"] {
        let mut v = mainnet_value();
        validator_mut(&mut v).insert("pub_key".into(), json!(bad));
        assert!(
            matches!(decode(&v).unwrap_err(), GenesisError::Format { field: "pub_key", .. }),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn null_key_is_a_format_error() {
    let mut v = mainnet_value();
    validator_mut(&mut v).insert("pub_key".into(), Value::Null);
    assert!(matches!(
        decode(&v).unwrap_err(),
        GenesisError::Format { field: "pub_key", .. }
    ));
}

// ── Reward scheme ─────────────────────────────────────────────────────────────

#[test]
fn reward_scheme_requires_totals() {
    for field in ["total_reward", "reward_first_year"] {
        let mut v = mainnet_value();
        v["reward_scheme"].as_object_mut().unwrap().remove(field);
        assert_missing(decode(&v).unwrap_err(), field);

        let mut v = mainnet_value();
        v["reward_scheme"][field] = Value::Null;
        assert_missing(decode(&v).unwrap_err(), field);
    }
}

#[test]
fn reward_scheme_counters_default_to_zero() {
    let mut v = mainnet_value();
    let rs = v["reward_scheme"].as_object_mut().unwrap();
    rs.remove("epoch_no_per_year");
    rs.remove("total_year");
    let doc = decode(&v).unwrap();
    assert_eq!(doc.reward_scheme.epochs_per_year, 0);
    assert_eq!(doc.reward_scheme.total_years, 0);
}

#[test]
fn missing_reward_scheme_rejected() {
    let mut v = mainnet_value();
    v.as_object_mut().unwrap().remove("reward_scheme");
    assert_missing(decode(&v).unwrap_err(), "reward_scheme");
}

// ── Validator entries ─────────────────────────────────────────────────────────

#[test]
fn validator_requires_amount() {
    let mut v = mainnet_value();
    validator_mut(&mut v).remove("amount");
    let err = decode(&v).unwrap_err();
    assert_eq!(
        err.to_string(),
        "missing required field 'amount' for Genesis/epoch/validators"
    );

    let mut v = mainnet_value();
    validator_mut(&mut v).insert("amount".into(), Value::Null);
    assert_missing(decode(&v).unwrap_err(), "amount");
}

#[test]
fn validator_optional_fields_default() {
    let mut v = mainnet_value();
    let entry = validator_mut(&mut v);
    entry.remove("name");
    entry.remove("epoch");
    let doc = decode(&v).unwrap();
    assert_eq!(doc.validators()[0].name, "");
    assert_eq!(doc.validators()[0].remaining_epoch, 0);
}

#[test]
fn validator_null_name_reads_as_empty() {
    let mut v = mainnet_value();
    validator_mut(&mut v).insert("name".into(), Value::Null);
    assert_eq!(decode(&v).unwrap().validators()[0].name, "");
}

#[test]
fn validator_null_address_is_a_format_error() {
    let mut v = mainnet_value();
    validator_mut(&mut v).insert("address".into(), Value::Null);
    assert!(matches!(
        decode(&v).unwrap_err(),
        GenesisError::Format { field: "address", .. }
    ));
}

#[test]
fn null_chain_id_is_missing() {
    let mut v = mainnet_value();
    v["chain_id"] = Value::Null;
    assert_missing(decode(&v).unwrap_err(), "chain_id");

    let mut v = mainnet_value();
    v["consensus"] = Value::Null;
    assert_eq!(decode(&v).unwrap().consensus, ConsensusKind::Other(String::new()));
}

// ── Hex quantities ────────────────────────────────────────────────────────────

#[test]
fn quantities_are_case_insensitive() {
    let mut upper = mainnet_value();
    upper["current_epoch"]["reward_per_block"] = json!("0x8CD1DC18DE05834");
    upper["current_epoch"]["end_block"] = json!("0X1C20");
    assert_eq!(decode(&upper).unwrap(), decode(&mainnet_value()).unwrap());
}

#[test]
fn bad_quantities_are_decode_errors() {
    let cases = [
        ("end_block", json!("0xZZ")),
        ("end_block", json!("1c20")),
        ("end_block", json!("0x01c20")),
        ("end_block", json!(7200)),
        ("end_block", Value::Null),
        ("reward_per_block", json!("0x1".to_string() + &"0".repeat(64))),
    ];
    for (field, value) in cases {
        let mut v = mainnet_value();
        v["current_epoch"][field] = value.clone();
        assert!(
            matches!(decode(&v).unwrap_err(), GenesisError::Decode(_)),
            "{field} = {value} should fail to decode"
        );
    }
}

#[test]
fn malformed_json_is_a_decode_error() {
    let truncated = &MAINNET_GENESIS_JSON[..MAINNET_GENESIS_JSON.len() / 2];
    assert!(matches!(
        GenesisDocument::from_json(truncated.as_bytes()).unwrap_err(),
        GenesisError::Decode(_)
    ));
}

// ── Property: encode then decode is the identity ──────────────────────────────

fn arb_amount() -> impl Strategy<Value = Amount> {
    any::<[u8; 32]>().prop_map(|b| Amount::from_big_endian(&b))
}

fn arb_validator() -> impl Strategy<Value = ValidatorEntry> {
    (
        prop::sample::select(vec![
            "INT3DvvQnnBNcUUeMJfiRi6GKFRjhwaw",
            "INT3D5XkATYcApJ8xXqQe1z5K35jj2Tf",
        ]),
        prop::collection::vec(any::<u8>(), 128),
        arb_amount(),
        "[a-z0-9 -]{0,12}",
        any::<u64>(),
    )
        .prop_map(|(addr, key, power, name, remaining)| ValidatorEntry {
            account: addr.parse().unwrap(),
            public_key: BlsPublicKey::from_slice(&key).unwrap(),
            voting_power: power,
            name,
            remaining_epoch: remaining,
        })
}

fn arb_document() -> impl Strategy<Value = GenesisDocument> {
    (
        "[a-z]{1,10}",
        prop::sample::select(vec!["pos", "pow", "ipbft", "raft"]),
        (arb_amount(), arb_amount(), any::<u64>(), any::<u64>()),
        (any::<u64>(), arb_amount(), any::<u64>(), any::<u64>(), -3i64..3),
        prop::collection::vec(arb_validator(), 0..4),
    )
        .prop_map(|(chain_id, consensus, rs, ep, validators)| GenesisDocument {
            chain_id,
            consensus: consensus.into(),
            genesis_time: DateTime::parse_from_rfc3339("2020-05-14T10:14:38.992192+08:00")
                .unwrap(),
            reward_scheme: RewardSchedule {
                total_reward: rs.0,
                reward_first_year: rs.1,
                epochs_per_year: rs.2,
                total_years: rs.3,
            },
            current_epoch: EpochRecord {
                number: ep.0,
                reward_per_block: ep.1,
                start_block: ep.2,
                end_block: ep.3,
                status: ep.4,
                validators,
            },
        })
}

proptest! {
    #[test]
    fn json_round_trip(doc in arb_document()) {
        let bytes = doc.to_json().unwrap();
        prop_assert_eq!(GenesisDocument::from_json(&bytes).unwrap(), doc);
    }
}
