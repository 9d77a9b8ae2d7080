use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::{debug, info, warn};

use crate::document::GenesisDocument;
use crate::error::{GenesisError, GenesisResult};
use crate::write::GenesisDocWrite;

/// Decode a genesis document from JSON bytes.
///
/// Either the whole document is valid or an error is returned; there is no
/// partially decoded result.
pub fn from_json(bytes: &[u8]) -> GenesisResult<GenesisDocument> {
    let shape: GenesisDocWrite = serde_json::from_slice(bytes)?;
    let reward_per_block_absent = shape
        .current_epoch
        .as_ref()
        .is_some_and(|ep| ep.reward_per_block.is_none());

    let doc = GenesisDocument::try_from(shape)?;

    if !doc.consensus.is_known() {
        warn!(consensus = %doc.consensus, "genesis names an unknown consensus engine");
    }
    if reward_per_block_absent {
        warn!(chain_id = %doc.chain_id, "genesis epoch has no reward_per_block, using zero");
    }
    if doc.current_epoch.end_block <= doc.current_epoch.start_block {
        warn!(
            start_block = doc.current_epoch.start_block,
            end_block = doc.current_epoch.end_block,
            "genesis epoch ends at or before its start block"
        );
    }
    debug!(
        chain_id = %doc.chain_id,
        validators = doc.validators().len(),
        "genesis document decoded"
    );
    Ok(doc)
}

/// Encode a genesis document as JSON, indented with tabs.
pub fn to_json(doc: &GenesisDocument) -> GenesisResult<Vec<u8>> {
    let shape = GenesisDocWrite::from(doc);
    let mut out = Vec::with_capacity(1024);
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"\t"));
    shape.serialize(&mut ser)?;
    Ok(out)
}

pub fn load_from_file(path: &Path) -> GenesisResult<GenesisDocument> {
    let bytes = std::fs::read(path).map_err(|source| GenesisError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = from_json(&bytes)?;
    info!(path = %path.display(), chain_id = %doc.chain_id, "genesis loaded");
    Ok(doc)
}

pub fn save_to_file(doc: &GenesisDocument, path: &Path) -> GenesisResult<()> {
    let bytes = to_json(doc)?;
    std::fs::write(path, bytes).map_err(|source| GenesisError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), chain_id = %doc.chain_id, "genesis saved");
    Ok(())
}
