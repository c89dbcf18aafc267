//! Content-addressing signatures for ingredient profiles.
//!
//! A signature is `"<items>|<tags>"`, each side lowercased, trimmed, sorted
//! by code point and comma-joined. Reordering or re-casing the input never
//! changes it, so it can key caches of generated recipes. The plain string is
//! the contract: it is variable-length and unhashed.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Deterministic key for an ingredient + tag profile
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signature(String);

impl Signature {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Lowercase hex SHA-256 of the signature string.
    ///
    /// Only for callers that need a fixed-length key; two profiles are the
    /// same iff their signature strings are equal, not their digests.
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(self.0.as_bytes()))
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Signature> for String {
    fn from(signature: Signature) -> Self {
        signature.0
    }
}

/// Builds the signature for a set of ingredient names and tags
pub fn make_signature<I, T>(items: I, tags: T) -> Signature
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    Signature(format!("{}|{}", normalized_segment(items), normalized_segment(tags)))
}

fn normalized_segment<I>(tokens: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut normalized: Vec<String> = tokens
        .into_iter()
        .map(|token| token.as_ref().to_lowercase().trim().to_string())
        .collect();
    normalized.sort();
    normalized.join(",")
}
