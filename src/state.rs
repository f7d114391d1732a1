use sha2::digest::Output;
use sha2::{Digest, Sha256};
use std::sync::Arc;

use crate::rate_limit::RateLimiter;
use crate::store::Store;

// app's shared state
#[derive(Debug)]
pub struct AppState {
    pub store: Store,
    pub limiter: Arc<RateLimiter>,
    api_key_digest: Output<Sha256>,
}

impl AppState {
    pub fn new(limiter: Arc<RateLimiter>, api_key: &str) -> Self {
        Self {
            store: Store::default(),
            limiter,
            api_key_digest: Sha256::digest(api_key.as_bytes()),
        }
    }

    // Compare fixed-length digests so the check does not depend on key length
    pub fn api_key_matches(&self, presented: &[u8]) -> bool {
        Sha256::digest(presented) == self.api_key_digest
    }
}
