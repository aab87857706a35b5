use sha2::{Digest, Sha256};

/// InputFingerprint - order-sensitive SHA-256 digest over restore inputs
///
/// Two restores with byte-identical inputs, supplied in the same order,
/// produce the same fingerprint. Each input is framed with its label and
/// length so that moving bytes between neighbouring inputs changes the digest.
pub struct InputFingerprint {
    hasher: Sha256,
}

impl InputFingerprint {
    pub fn new() -> Self {
        Self {
            hasher: Sha256::new(),
        }
    }

    /// Adds one labelled input to the digest
    pub fn add(&mut self, label: &str, content: &[u8]) -> &mut Self {
        self.hasher.update((label.len() as u64).to_le_bytes());
        self.hasher.update(label.as_bytes());
        self.hasher.update((content.len() as u64).to_le_bytes());
        self.hasher.update(content);
        self
    }

    /// Adds an optional string input; absent and empty hash differently
    pub fn add_optional(&mut self, label: &str, content: Option<&str>) -> &mut Self {
        match content {
            Some(value) => {
                self.hasher.update([1u8]);
                self.add(label, value.as_bytes())
            }
            None => {
                self.hasher.update([0u8]);
                self.add(label, &[])
            }
        }
    }

    /// Consumes the builder and returns the lowercase hex digest
    pub fn finish(self) -> String {
        hex::encode(self.hasher.finalize())
    }
}

impl Default for InputFingerprint {
    fn default() -> Self {
        Self::new()
    }
}
