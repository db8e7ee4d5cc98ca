use std::fmt;

use rand::{distributions::Alphanumeric, Rng};

/// Single-use random string for request signing.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Nonce(String);

impl Nonce {
    pub const STR_LEN: usize = 16;

    pub fn new() -> Self {
        let chars = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(Self::STR_LEN)
            .map(char::from)
            .collect();
        Self(chars)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for Nonce {
    fn default() -> Self {
        Self::new()
    }
}

// Fixed nonces are only useful for deterministic signing tests.
impl From<&str> for Nonce {
    fn from(from: &str) -> Self {
        Self(from.to_owned())
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_have_fixed_length() {
        assert_eq!(Nonce::new().as_str().len(), Nonce::STR_LEN);
    }

    #[test]
    fn should_be_alphanumeric() {
        assert!(Nonce::new().as_str().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn should_generate_unique_instances() {
        let n1 = Nonce::new();
        let n2 = Nonce::new();
        assert_ne!(n1, n2);
    }
}
