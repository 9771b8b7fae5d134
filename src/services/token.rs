//! Bearer token derivation.
//!
//! A token is the lowercase hex HMAC-SHA256 of the user id (as a decimal
//! string) under the server secret. The same user always gets the same token
//! for a given secret.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::warn;

use crate::config::AuthConfig;

type HmacSha256 = Hmac<Sha256>;

#[derive(Clone)]
pub struct TokenSigner {
    mac: HmacSha256,
}

impl TokenSigner {
    pub fn new(secret: &[u8]) -> anyhow::Result<Self> {
        let mac = HmacSha256::new_from_slice(secret)
            .map_err(|e| anyhow::anyhow!("HMAC key error: {e}"))?;
        Ok(Self { mac })
    }

    /// Uses the configured secret, or a random per-process one.
    pub fn from_config(config: &AuthConfig) -> anyhow::Result<Self> {
        match config.token_secret.as_deref() {
            Some(secret) => Self::new(secret.as_bytes()),
            None => {
                warn!("No auth.token_secret configured; tokens will not survive a restart");
                let secret: [u8; 32] = rand::random();
                Self::new(&secret)
            }
        }
    }

    #[must_use]
    pub fn sign(&self, user_id: i32) -> String {
        let mut mac = self.mac.clone();
        mac.update(user_id.to_string().as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}
