use hadron_core::errors::{ErrorInfo, HadronError};
use sha2::{Digest, Sha256};

use crate::catalog::SpeciesCatalog;

/// Computes the canonical hash of the definition a catalog was built from.
///
/// The definition is hashed in its serialized field and list order, so two
/// catalogs hash equal exactly when they were defined identically.
pub fn canonical_hash(catalog: &SpeciesCatalog) -> Result<String, HadronError> {
    let bytes = serde_json::to_vec(catalog.definition())
        .map_err(|err| HadronError::Serde(ErrorInfo::new("catalog-hash", err.to_string())))?;
    let mut hasher = Sha256::new();
    hasher.update(b"hadron-catalog:v1");
    hasher.update((bytes.len() as u64).to_le_bytes());
    hasher.update(&bytes);
    Ok(format!("{:x}", hasher.finalize()))
}
