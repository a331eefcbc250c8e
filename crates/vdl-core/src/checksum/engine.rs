//! Incremental digest accumulator.

use super::DigestAlgorithm;
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

/// Stateful hasher fed chunk by chunk while a download streams.
///
/// `finalize_hex` consumes the engine, so nothing can be fed after the digest
/// has been taken.
#[derive(Clone)]
pub enum DigestEngine {
    Sha1(Sha1),
    Sha224(Sha224),
    Sha256(Sha256),
    Sha384(Sha384),
    Sha512(Sha512),
}

impl DigestEngine {
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        match algorithm {
            DigestAlgorithm::Sha1 => DigestEngine::Sha1(Sha1::new()),
            DigestAlgorithm::Sha224 => DigestEngine::Sha224(Sha224::new()),
            DigestAlgorithm::Sha256 => DigestEngine::Sha256(Sha256::new()),
            DigestAlgorithm::Sha384 => DigestEngine::Sha384(Sha384::new()),
            DigestAlgorithm::Sha512 => DigestEngine::Sha512(Sha512::new()),
        }
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        match self {
            DigestEngine::Sha1(_) => DigestAlgorithm::Sha1,
            DigestEngine::Sha224(_) => DigestAlgorithm::Sha224,
            DigestEngine::Sha256(_) => DigestAlgorithm::Sha256,
            DigestEngine::Sha384(_) => DigestAlgorithm::Sha384,
            DigestEngine::Sha512(_) => DigestAlgorithm::Sha512,
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        match self {
            DigestEngine::Sha1(h) => h.update(data),
            DigestEngine::Sha224(h) => h.update(data),
            DigestEngine::Sha256(h) => h.update(data),
            DigestEngine::Sha384(h) => h.update(data),
            DigestEngine::Sha512(h) => h.update(data),
        }
    }

    /// Finish hashing and return the digest as lowercase hex.
    pub fn finalize_hex(self) -> String {
        match self {
            DigestEngine::Sha1(h) => hex::encode(h.finalize()),
            DigestEngine::Sha224(h) => hex::encode(h.finalize()),
            DigestEngine::Sha256(h) => hex::encode(h.finalize()),
            DigestEngine::Sha384(h) => hex::encode(h.finalize()),
            DigestEngine::Sha512(h) => hex::encode(h.finalize()),
        }
    }
}
