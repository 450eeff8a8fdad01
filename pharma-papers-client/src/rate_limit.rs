//! Token bucket rate limiting for NCBI E-utilities
//!
//! NCBI allows 3 requests per second without an API key and 10 with one; clients
//! that exceed this can have their IP blocked.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tokio::time::sleep;
use tracing::{debug, instrument, warn};

use crate::error::{ClientError, Result};

/// Rate limiter shared by all clones of a client
#[derive(Clone)]
pub struct RateLimiter {
    bucket: Arc<Mutex<TokenBucket>>,
}

struct TokenBucket {
    tokens: f64,
    capacity: f64,
    refill_rate: f64, // tokens per second
    last_refill: Instant,
}

impl RateLimiter {
    /// Create a rate limiter allowing `rate` requests per second
    pub fn new(rate: f64) -> Self {
        let capacity = rate.max(1.0);
        Self {
            bucket: Arc::new(Mutex::new(TokenBucket {
                tokens: capacity,
                capacity,
                refill_rate: rate,
                last_refill: Instant::now(),
            })),
        }
    }

    /// Wait until a request may be sent, then take a token
    #[instrument(skip(self))]
    pub async fn acquire(&self) -> Result<()> {
        let wait_time = {
            let mut bucket = self.bucket.lock().await;
            bucket.refill();

            if bucket.tokens >= 1.0 {
                bucket.tokens -= 1.0;
                debug!(remaining_tokens = %bucket.tokens, "Token acquired immediately");
                None
            } else {
                let missing = 1.0 - bucket.tokens;
                Some(Duration::from_secs_f64(missing / bucket.refill_rate))
            }
        };

        if let Some(duration) = wait_time {
            debug!(
                wait_duration_ms = duration.as_millis(),
                "Sleeping to respect rate limit"
            );
            sleep(duration).await;

            let mut bucket = self.bucket.lock().await;
            bucket.refill();

            // Another clone may have taken the refilled token meanwhile
            if bucket.tokens >= 1.0 - f64::EPSILON {
                bucket.tokens = (bucket.tokens - 1.0).max(0.0);
                debug!(remaining_tokens = %bucket.tokens, "Token acquired after waiting");
            } else {
                warn!("Failed to acquire token after waiting");
                return Err(ClientError::RateLimitExceeded);
            }
        }

        Ok(())
    }

    /// Whether a token is available right now, without consuming it
    pub async fn check_available(&self) -> bool {
        let mut bucket = self.bucket.lock().await;
        bucket.refill();
        bucket.tokens >= 1.0
    }

    /// Configured requests per second
    pub async fn rate(&self) -> f64 {
        self.bucket.lock().await.refill_rate
    }
}

impl TokenBucket {
    fn refill(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_refill);
        self.tokens = (self.tokens + elapsed.as_secs_f64() * self.refill_rate).min(self.capacity);
        self.last_refill = now;
    }
}
