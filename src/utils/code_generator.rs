//! Short code generation.
//!
//! Two interchangeable strategies behind the [`CodeGenerator`] trait:
//!
//! - [`RandomCodeGenerator`] - uniform random base62 codes, input ignored
//! - [`HashCodeGenerator`] - truncated base62 encoding of a SHA-256 digest,
//!   so the same input always yields the same code
//!
//! Generators know nothing about storage. Escaping a collision is the
//! caller's job: retry with a perturbed input (see
//! [`crate::application::services::ShortenerService::create`]).

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use rand::Rng;
use sha2::{Digest, Sha256};

/// The 62 symbols codes are drawn from: digits, upper case, lower case.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Longest hash-derived code. 62^22 exceeds 2^128, so 22 digits hold the
/// whole 128-bit digest prefix.
pub const MAX_HASH_CODE_LENGTH: usize = 22;

/// Errors produced while constructing or running a generator.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("code length must be at least 1")]
    ZeroLength,

    #[error("code length must be at most {max}, got {length}")]
    InvalidLength { length: usize, max: usize },

    #[error("unknown code generator '{0}', expected 'random' or 'hash'")]
    UnknownKind(String),

    #[error("code generation failed: {0}")]
    Failed(String),
}

/// Produces candidate short codes.
///
/// `next` returns a non-empty code of the configured length. It never fails
/// because the code space is "used up"; uniqueness is checked by the store.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Returns a candidate code for `input`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Failed`] on an internal entropy or hashing fault.
    fn next(&self, input: &str) -> Result<String, GeneratorError>;

    /// Length of every code this generator returns.
    fn code_length(&self) -> usize;
}

/// Random base62 codes of a fixed length.
///
/// Each call is independent of the input and of every previous call.
#[derive(Debug, Clone)]
pub struct RandomCodeGenerator {
    length: usize,
}

impl RandomCodeGenerator {
    /// Creates a generator producing codes of `length` symbols.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::ZeroLength`] if `length` is zero.
    pub fn new(length: usize) -> Result<Self, GeneratorError> {
        if length == 0 {
            return Err(GeneratorError::ZeroLength);
        }

        Ok(Self { length })
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn next(&self, _input: &str) -> Result<String, GeneratorError> {
        let mut rng = rand::rng();
        let code = (0..self.length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();

        Ok(code)
    }

    fn code_length(&self) -> usize {
        self.length
    }
}

/// Deterministic codes derived from a SHA-256 digest of the input.
///
/// The first 16 digest bytes are read as a big-endian integer and written out
/// as `length` base62 digits, least significant first. Shorter codes collide
/// sooner; 6 to 10 symbols is the usual range.
#[derive(Debug, Clone)]
pub struct HashCodeGenerator {
    length: usize,
}

impl HashCodeGenerator {
    /// Creates a generator producing codes of `length` symbols.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::ZeroLength`] or
    /// [`GeneratorError::InvalidLength`] unless
    /// `1 <= length <= MAX_HASH_CODE_LENGTH`.
    pub fn new(length: usize) -> Result<Self, GeneratorError> {
        if length == 0 {
            return Err(GeneratorError::ZeroLength);
        }
        if length > MAX_HASH_CODE_LENGTH {
            return Err(GeneratorError::InvalidLength {
                length,
                max: MAX_HASH_CODE_LENGTH,
            });
        }

        Ok(Self { length })
    }
}

impl CodeGenerator for HashCodeGenerator {
    fn next(&self, input: &str) -> Result<String, GeneratorError> {
        let digest = Sha256::digest(input.as_bytes());

        let prefix: [u8; 16] = digest[..16]
            .try_into()
            .map_err(|_| GeneratorError::Failed("digest shorter than 16 bytes".to_string()))?;

        Ok(encode_base62_fixed(u128::from_be_bytes(prefix), self.length))
    }

    fn code_length(&self) -> usize {
        self.length
    }
}

/// Writes exactly `width` base62 digits of `value`, least significant first.
///
/// Digits beyond the magnitude of `value` come out as `'0'`.
fn encode_base62_fixed(mut value: u128, width: usize) -> String {
    let base = ALPHABET.len() as u128;
    let mut code = String::with_capacity(width);

    for _ in 0..width {
        code.push(ALPHABET[(value % base) as usize] as char);
        value /= base;
    }

    code
}

/// Generator strategy selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    Random,
    Hash,
}

impl GeneratorKind {
    /// Builds the configured generator.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::ZeroLength`] or
    /// [`GeneratorError::InvalidLength`] if `length` is out of range for the
    /// selected strategy.
    pub fn build(self, length: usize) -> Result<Arc<dyn CodeGenerator>, GeneratorError> {
        Ok(match self {
            GeneratorKind::Random => Arc::new(RandomCodeGenerator::new(length)?),
            GeneratorKind::Hash => Arc::new(HashCodeGenerator::new(length)?),
        })
    }
}

impl FromStr for GeneratorKind {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(GeneratorKind::Random),
            "hash" => Ok(GeneratorKind::Hash),
            other => Err(GeneratorError::UnknownKind(other.to_string())),
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GeneratorKind::Random => "random",
            GeneratorKind::Hash => "hash",
        })
    }
}
