// File: src/obfuscator.rs
// Purpose: Reversible encoding of database IDs used as option keys

use crate::config::ObfuscatorConfig;
use std::fmt;

/// Encodes and decodes database IDs so they are opaque in rendered markup.
///
/// Controls only call these two methods and never inspect the codes.
pub trait Obfuscator: Send + Sync {
    /// The code for `id`. `None` encodes as the empty string.
    fn encode(&self, id: Option<i64>) -> String;

    /// The ID for `code`, or `None` when the code is empty or not a valid code.
    fn decode(&self, code: &str) -> Option<i64>;
}

/// XORs IDs with a key and writes them as zero padded lowercase hex.
#[derive(Clone)]
pub struct ReferenceObfuscator {
    key: u64,
    length: usize,
}

impl ReferenceObfuscator {
    pub fn new(key: u64, length: usize) -> Self {
        Self { key, length }
    }

    pub fn from_config(config: &ObfuscatorConfig) -> Self {
        Self::new(config.key, config.length)
    }
}

// Keep the key out of logs.
impl fmt::Debug for ReferenceObfuscator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferenceObfuscator")
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

impl Obfuscator for ReferenceObfuscator {
    fn encode(&self, id: Option<i64>) -> String {
        match id {
            Some(id) => format!("{:0width$x}", (id as u64) ^ self.key, width = self.length),
            None => String::new(),
        }
    }

    fn decode(&self, code: &str) -> Option<i64> {
        if code.is_empty() || !code.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        u64::from_str_radix(code, 16)
            .ok()
            .map(|raw| (raw ^ self.key) as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_padded_and_reversible() {
        let obfuscator = ReferenceObfuscator::new(0x5a5a, 8);

        let code = obfuscator.encode(Some(2));
        assert_eq!(code.len(), 8);
        assert_ne!(code, "00000002");
        assert_eq!(obfuscator.decode(&code), Some(2));
    }

    #[test]
    fn test_empty_and_invalid_codes() {
        let obfuscator = ReferenceObfuscator::new(7, 4);

        assert_eq!(obfuscator.encode(None), "");
        assert_eq!(obfuscator.decode(""), None);
        assert_eq!(obfuscator.decode("xyz"), None);
        assert_eq!(obfuscator.decode("+12"), None);
    }

    #[test]
    fn test_debug_hides_key() {
        let obfuscator = ReferenceObfuscator::new(12345, 4);
        assert!(!format!("{:?}", obfuscator).contains("12345"));
    }
}
