//! In-memory rate limiting for access-code requests.
//!
//! DESIGN
//! ======
//! Sliding-window counters backed by `HashMap<String, VecDeque<Instant>>`.
//! Two limits are enforced on `POST /api/auth/email/request-code`:
//! - Per-email: `CODE_REQUEST_LIMIT` requests per window
//! - Global: `CODE_REQUEST_GLOBAL_LIMIT` requests per window
//!
//! TRADE-OFFS
//! ==========
//! State lives in process memory, so limits reset on restart and are not
//! shared between replicas. Email delivery cost is the thing being protected,
//! and a single instance serves the app.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::config::CodeRequestLimits;

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RateLimitError {
    #[error("per-email rate limit exceeded (max {limit} requests/{window_secs}s)")]
    PerEmailExceeded { limit: usize, window_secs: u64 },
    #[error("global rate limit exceeded (max {limit} requests/{window_secs}s)")]
    GlobalExceeded { limit: usize, window_secs: u64 },
}

// =============================================================================
// RATE LIMITER
// =============================================================================

#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<RateLimiterInner>>,
    limits: CodeRequestLimits,
}

struct RateLimiterInner {
    /// Per-email request timestamps.
    email_requests: HashMap<String, VecDeque<Instant>>,
    /// Global request timestamps.
    global_requests: VecDeque<Instant>,
}

impl RateLimiter {
    #[must_use]
    pub fn new(limits: CodeRequestLimits) -> Self {
        Self {
            inner: Arc::new(Mutex::new(RateLimiterInner {
                email_requests: HashMap::new(),
                global_requests: VecDeque::new(),
            })),
            limits,
        }
    }

    /// Check both per-email and global limits, then record the request.
    pub fn check_and_record(&self, email: &str) -> Result<(), RateLimitError> {
        self.check_and_record_at(email, Instant::now())
    }

    /// Internal: check + record with explicit timestamp (for testing).
    fn check_and_record_at(&self, email: &str, now: Instant) -> Result<(), RateLimitError> {
        let mut inner = self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let limits = self.limits;
        let window = Duration::from_secs(limits.window_secs);

        prune_window(&mut inner.global_requests, now, window);
        if inner.global_requests.len() >= limits.global {
            return Err(RateLimitError::GlobalExceeded { limit: limits.global, window_secs: limits.window_secs });
        }

        let email_deque = inner.email_requests.entry(email.to_owned()).or_default();
        prune_window(email_deque, now, window);
        if email_deque.len() >= limits.per_email {
            return Err(RateLimitError::PerEmailExceeded { limit: limits.per_email, window_secs: limits.window_secs });
        }

        email_deque.push_back(now);
        inner.global_requests.push_back(now);

        // Drop idle keys so the map does not grow with every address ever seen.
        inner.email_requests.retain(|_, deque| {
            prune_window(deque, now, window);
            !deque.is_empty()
        });

        Ok(())
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(CodeRequestLimits::default())
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn prune_window(deque: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&front) = deque.front() {
        if now.duration_since(front) > window {
            deque.pop_front();
        } else {
            break;
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;
