//! Bearer token issuing and verification.
//!
//! Tokens are self-contained signed strings of the form
//! `v1.<user_id>.<expires_at>.<signature>` where the signature is an
//! HMAC-SHA256 over the preceding payload. Verification is a pure check of the
//! signature and expiry; looking up the subject is the auth guard's job.
//!
//! Malformed, tampered, and expired tokens all verify to "no identity" —
//! callers can never tell the cases apart.

use chrono::{Duration, Utc};
use sha2::{Digest, Sha256};
use std::sync::Arc;

const TOKEN_VERSION: &str = "v1";
const HMAC_BLOCK_SIZE: usize = 64;

/// Issues and verifies bearer credentials.
///
/// Cheap to clone; the signing secret is shared behind an `Arc`.
#[derive(Clone)]
pub struct TokenService {
    secret: Arc<[u8]>,
    ttl: Duration,
}

impl TokenService {
    /// Creates a token service.
    ///
    /// # Arguments
    /// - `secret` - Signing secret shared by all application instances
    /// - `ttl_hours` - Lifetime of newly issued tokens
    pub fn new(secret: impl AsRef<[u8]>, ttl_hours: i64) -> Self {
        Self {
            secret: Arc::from(secret.as_ref()),
            ttl: Duration::hours(ttl_hours),
        }
    }

    /// Issues a signed token for the given subject.
    ///
    /// # Arguments
    /// - `user_id` - Subject the token identifies
    ///
    /// # Returns
    /// - Signed token expiring `ttl` from now
    pub fn issue(&self, user_id: i32) -> String {
        self.issue_until(user_id, (Utc::now() + self.ttl).timestamp())
    }

    fn issue_until(&self, user_id: i32, expires_at: i64) -> String {
        let payload = format!("{}.{}.{}", TOKEN_VERSION, user_id, expires_at);
        let signature = hex::encode(hmac_sha256(&self.secret, payload.as_bytes()));
        format!("{}.{}", payload, signature)
    }

    /// Verifies a token and extracts its subject.
    ///
    /// # Arguments
    /// - `token` - Opaque bearer credential as presented by the caller
    ///
    /// # Returns
    /// - `Some(user_id)` - Signature and expiry check out
    /// - `None` - Malformed, tampered with, or expired
    pub fn verify(&self, token: &str) -> Option<i32> {
        let (payload, signature) = token.rsplit_once('.')?;

        let mut parts = payload.split('.');
        if parts.next()? != TOKEN_VERSION {
            return None;
        }
        let user_id = parts.next()?.parse::<i32>().ok()?;
        let expires_at = parts.next()?.parse::<i64>().ok()?;
        if parts.next().is_some() {
            return None;
        }

        let expected = hex::encode(hmac_sha256(&self.secret, payload.as_bytes()));
        if expected != signature {
            return None;
        }

        if expires_at < Utc::now().timestamp() {
            return None;
        }

        Some(user_id)
    }
}

/// HMAC-SHA256 per RFC 2104.
fn hmac_sha256(key: &[u8], message: &[u8]) -> [u8; 32] {
    let mut key_block = [0u8; HMAC_BLOCK_SIZE];
    if key.len() > HMAC_BLOCK_SIZE {
        let digest = Sha256::digest(key);
        key_block[..digest.len()].copy_from_slice(&digest);
    } else {
        key_block[..key.len()].copy_from_slice(key);
    }

    let mut inner = Sha256::new();
    inner.update(key_block.map(|byte| byte ^ 0x36));
    inner.update(message);
    let inner_hash = inner.finalize();

    let mut outer = Sha256::new();
    outer.update(key_block.map(|byte| byte ^ 0x5c));
    outer.update(inner_hash);
    outer.finalize().into()
}
