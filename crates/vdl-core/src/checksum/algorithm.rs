//! Supported digest algorithms and their textual names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hash function used to verify a download.
///
/// Names parse case-insensitively and ignore `-`/`_` separators, so `SHA-256`,
/// `sha_256` and `sha256` are the same algorithm. `Display` always renders the
/// canonical lowercase form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DigestAlgorithm {
    Sha1,
    Sha224,
    #[default]
    Sha256,
    Sha384,
    Sha512,
}

/// Algorithm name that does not map to any supported digest.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported digest algorithm {0:?} (expected one of sha1, sha224, sha256, sha384, sha512)")]
pub struct UnknownAlgorithm(pub String);

impl DigestAlgorithm {
    pub const ALL: [DigestAlgorithm; 5] = [
        DigestAlgorithm::Sha1,
        DigestAlgorithm::Sha224,
        DigestAlgorithm::Sha256,
        DigestAlgorithm::Sha384,
        DigestAlgorithm::Sha512,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DigestAlgorithm::Sha1 => "sha1",
            DigestAlgorithm::Sha224 => "sha224",
            DigestAlgorithm::Sha256 => "sha256",
            DigestAlgorithm::Sha384 => "sha384",
            DigestAlgorithm::Sha512 => "sha512",
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        DigestAlgorithm::ALL
            .into_iter()
            .find(|alg| alg.as_str() == normalized)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

impl TryFrom<String> for DigestAlgorithm {
    type Error = UnknownAlgorithm;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DigestAlgorithm> for String {
    fn from(alg: DigestAlgorithm) -> Self {
        alg.as_str().to_string()
    }
}
