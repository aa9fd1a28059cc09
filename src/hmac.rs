use sha2::{Digest, Sha256};
use zeroize::Zeroize;

const BLOCK_LEN: usize = 64;

/// HMAC-SHA256 with the key schedule applied up front: the inner and outer
/// pads are absorbed into two independent digests at construction, so PBKDF2
/// can clone one instance per block instead of re-deriving the key.
#[derive(Clone)]
pub(crate) struct HmacSha256 {
    digest: Sha256,
    opad_digest: Sha256,
}

impl core::fmt::Debug for HmacSha256 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("HmacSha256 { ... }")
    }
}

impl HmacSha256 {
    pub fn new_from_slice(key: &[u8]) -> Self {
        let mut buf = key_block(key);
        for b in &mut buf {
            *b ^= 0x36;
        }
        let mut digest = Sha256::new();
        digest.update(buf);
        for b in &mut buf {
            *b ^= 0x36 ^ 0x5c;
        }
        let mut opad_digest = Sha256::new();
        opad_digest.update(buf);
        buf.zeroize();
        Self {
            digest,
            opad_digest,
        }
    }

    pub fn update(&mut self, input: &[u8]) {
        self.digest.update(input);
    }

    #[must_use]
    pub fn finalize_fixed(self) -> [u8; 32] {
        let Self {
            digest,
            mut opad_digest,
        } = self;
        let inner = digest.finalize();
        opad_digest.update(inner);
        opad_digest.finalize().into()
    }
}

// keys longer than the block hash down to the digest size first
fn key_block(key: &[u8]) -> [u8; BLOCK_LEN] {
    let mut block = [0; BLOCK_LEN];
    if key.len() <= BLOCK_LEN {
        block[..key.len()].copy_from_slice(key);
    } else {
        block[..32].copy_from_slice(&Sha256::digest(key));
    }
    block
}
