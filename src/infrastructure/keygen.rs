use crate::domain::links::KeyGenerator;
use rand::Rng;

/// 62-symbol alphanumeric alphabet for short keys.
const ALPHANUMERIC: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Fixed length of generated short keys.
const KEY_LENGTH: usize = 7;

/// Draws fixed-length keys uniformly from an alphanumeric alphabet.
///
/// Uses a non-cryptographic random source: the goal is collision resistance
/// over a ~3.5e12 key space, not unpredictability.
#[derive(Clone)]
pub struct RandomKeyGenerator {
    alphabet: Vec<u8>,
    length: usize,
}

impl RandomKeyGenerator {
    pub fn new() -> Self {
        Self {
            alphabet: ALPHANUMERIC.to_vec(),
            length: KEY_LENGTH,
        }
    }

    /// Generator over a custom alphabet and length. Shrinking the key space
    /// this way is how the collision-retry path gets exercised in tests.
    pub fn with_alphabet(alphabet: &[u8], length: usize) -> Self {
        assert!(!alphabet.is_empty());
        Self {
            alphabet: alphabet.to_vec(),
            length,
        }
    }
}

impl Default for RandomKeyGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyGenerator for RandomKeyGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();
        (0..self.length)
            .map(|_| self.alphabet[rng.random_range(0..self.alphabet.len())] as char)
            .collect()
    }
}
