//! Random id generation for aliases and user ids.
//!
//! Ids are drawn uniformly from a fixed alphanumeric alphabet. Generators
//! carry no state beyond their configuration; services own explicitly
//! constructed instances rather than sharing globals, which keeps tests
//! free to inject deterministic alphabets.

use rand::Rng;

/// Alphabet used for generated ids: upper/lower letters and digits.
pub const ID_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of autogenerated alias ids.
pub const ALIAS_ID_LEN: usize = 8;

/// Length of generated user ids (consumed by the account component).
pub const USER_ID_LEN: usize = 12;

/// Generates fixed-length random ids from a fixed alphabet.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    alphabet: Vec<char>,
    size: usize,
}

impl IdGenerator {
    /// Creates a generator over the given alphabet and id length.
    ///
    /// # Panics
    ///
    /// Panics if the alphabet is empty or the size is zero.
    pub fn new(alphabet: &str, size: usize) -> Self {
        let alphabet: Vec<char> = alphabet.chars().collect();
        assert!(!alphabet.is_empty(), "id alphabet must not be empty");
        assert!(size > 0, "id size must be positive");
        Self { alphabet, size }
    }

    /// Generator for 8-character alias ids.
    pub fn aliases() -> Self {
        Self::new(ID_ALPHABET, ALIAS_ID_LEN)
    }

    /// Generator for 12-character user ids.
    pub fn user_ids() -> Self {
        Self::new(ID_ALPHABET, USER_ID_LEN)
    }

    /// Produces one random id.
    ///
    /// Uniqueness is probabilistic only; callers that persist the id must
    /// handle duplicate-key rejections (see
    /// [`crate::application::services::AliasService::create`]).
    pub fn generate(&self) -> String {
        let mut rng = rand::rng();
        (0..self.size)
            .map(|_| self.alphabet[rng.random_range(0..self.alphabet.len())])
            .collect()
    }

    /// Length of ids this generator produces.
    pub fn size(&self) -> usize {
        self.size
    }
}
