use rrpf_types::{Digest, Request};
use sha2::{Digest as _, Sha256};

use crate::canonicalize::canonicalize_request;
use crate::error::CanonicalError;
use crate::json::to_canonical_json;

/// SHA-256 of canonical JSON, rendered as lowercase hex.
pub fn compute_digest(canonical_json: &str) -> Digest {
    Digest::new(hex::encode(Sha256::digest(canonical_json.as_bytes())))
}

/// Canonical JSON of a request together with its digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint {
    pub canonical_json: String,
    pub digest: Digest,
}

/// Canonicalize, serialize and hash a request in one step.
pub fn fingerprint(request: &Request) -> Result<Fingerprint, CanonicalError> {
    let canonical = canonicalize_request(request)?;
    let canonical_json = to_canonical_json(&canonical)?;
    let digest = compute_digest(&canonical_json);
    Ok(Fingerprint {
        canonical_json,
        digest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vector() {
        assert_eq!(
            compute_digest("").as_str(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            compute_digest("{}").as_str(),
            "44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a"
        );
    }

    #[test]
    fn digest_is_well_formed() {
        let digest = compute_digest("{\"a\":1}");
        assert_eq!(digest.as_str().len(), 64);
        assert!(digest.is_well_formed());
    }
}
