//! Per-caller sliding window rate limiter.
//!
//! Each caller key owns a small ring of admit timestamps. A request is admitted
//! when fewer than `max_requests` of those timestamps fall inside the trailing
//! window; rejected attempts are never recorded. Keys whose window has stayed
//! empty for `idle_grace` are dropped by [`RateLimiter::sweep`], which a
//! background task runs periodically.

use dashmap::DashMap;
use prometheus::Gauge;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info, trace};

use crate::clock::Clock;
use crate::error::ConfigError;
use crate::metrics::TRACKED_CALLERS;

pub const DEFAULT_MAX_REQUESTS: usize = 5;
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(60);
pub const DEFAULT_IDLE_GRACE: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Maximum admits per caller inside one window
    pub max_requests: usize,
    /// Length of the trailing window
    pub window: Duration,
    /// How long an empty window is kept before its key is evicted
    pub idle_grace: Duration,
}

impl RateLimitConfig {
    pub fn new(
        max_requests: usize,
        window: Duration,
        idle_grace: Duration,
    ) -> Result<Self, ConfigError> {
        if max_requests == 0 {
            return Err(ConfigError::ZeroMaxRequests);
        }
        if window.is_zero() {
            return Err(ConfigError::ZeroWindow);
        }
        Ok(Self {
            max_requests,
            window,
            idle_grace,
        })
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_MAX_REQUESTS,
            window: DEFAULT_WINDOW,
            idle_grace: DEFAULT_IDLE_GRACE,
        }
    }
}

/// Outcome of a single rate limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Request counted; `remaining` more fit in the current window.
    Admit { remaining: usize },
    /// Quota spent; the oldest counted request expires after `retry_after`.
    Reject { retry_after: Duration },
}

impl Decision {
    pub fn is_admit(&self) -> bool {
        matches!(self, Decision::Admit { .. })
    }

    pub fn is_reject(&self) -> bool {
        !self.is_admit()
    }
}

// Admit timestamps for one caller. Never holds more than `max_requests` entries.
#[derive(Debug)]
struct SlidingWindow {
    hits: VecDeque<Instant>,
    last_admit: Instant,
}

impl SlidingWindow {
    fn new(capacity: usize, now: Instant) -> Self {
        Self {
            hits: VecDeque::with_capacity(capacity),
            last_admit: now,
        }
    }

    // Every entry is compared against `now`; callers may hand in timestamps
    // out of order, so the ring is not assumed sorted. A timestamp ahead of
    // `now` has zero age and stays.
    fn purge(&mut self, now: Instant, window: Duration) {
        self.hits
            .retain(|&t| now.saturating_duration_since(t) < window);
    }

    fn retry_after(&self, now: Instant, window: Duration) -> Duration {
        self.hits
            .iter()
            .map(|&t| window.saturating_sub(now.saturating_duration_since(t)))
            .min()
            .unwrap_or(Duration::ZERO)
    }

    fn is_idle(&self, now: Instant, config: &RateLimitConfig) -> bool {
        self.hits.is_empty()
            && now.saturating_duration_since(self.last_admit)
                >= config.window.saturating_add(config.idle_grace)
    }
}

/// Process-wide limiter shared by the request pipeline.
///
/// State lives in a sharded map; the purge, count and append for one key run
/// under that key's shard lock, so two concurrent requests from the same caller
/// can never both slip under the limit.
#[derive(Debug)]
pub struct RateLimiter {
    config: RateLimitConfig,
    clock: Arc<dyn Clock>,
    windows: DashMap<String, SlidingWindow>,
    tracked: Gauge,
    shutdown: watch::Sender<bool>,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig, clock: Arc<dyn Clock>) -> Self {
        let (shutdown, _) = watch::channel(false);
        Self {
            config,
            clock,
            windows: DashMap::new(),
            tracked: TRACKED_CALLERS.clone(),
            shutdown,
        }
    }

    /// Report the tracked-caller count to `gauge` instead of the global one.
    pub fn with_tracked_gauge(mut self, gauge: Gauge) -> Self {
        gauge.set(self.windows.len() as f64);
        self.tracked = gauge;
        self
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Check `caller_key` against the current clock reading.
    pub fn check(&self, caller_key: &str) -> Decision {
        self.check_and_record(caller_key, self.clock.now())
    }

    /// Decide whether a request from `caller_key` at `now` is admitted,
    /// recording it only if it is.
    pub fn check_and_record(&self, caller_key: &str, now: Instant) -> Decision {
        let capacity = self.config.max_requests;
        let mut window = match self.windows.get_mut(caller_key) {
            Some(window) => window,
            None => self
                .windows
                .entry(caller_key.to_owned())
                .or_insert_with(|| {
                    self.tracked.inc();
                    SlidingWindow::new(capacity, now)
                }),
        };

        window.purge(now, self.config.window);

        if window.hits.len() >= capacity {
            let retry_after = window.retry_after(now, self.config.window);
            trace!(caller = caller_key, ?retry_after, "rejecting request");
            return Decision::Reject { retry_after };
        }

        window.hits.push_back(now);
        if now > window.last_admit {
            window.last_admit = now;
        }

        Decision::Admit {
            remaining: capacity - window.hits.len(),
        }
    }

    /// Evict every key whose window has been empty for at least `idle_grace`.
    /// Returns how many keys were dropped.
    pub fn sweep_at(&self, now: Instant) -> usize {
        let before = self.windows.len();
        self.windows.retain(|_, window| {
            window.purge(now, self.config.window);
            !window.is_idle(now, &self.config)
        });
        let after = self.windows.len();
        self.tracked.set(after as f64);

        before.saturating_sub(after)
    }

    pub fn sweep(&self) -> usize {
        self.sweep_at(self.clock.now())
    }

    pub fn tracked_callers(&self) -> usize {
        self.windows.len()
    }

    pub fn is_shut_down(&self) -> bool {
        *self.shutdown.borrow()
    }

    /// Run [`sweep`](Self::sweep) every `every` until [`shutdown`](Self::shutdown).
    pub fn spawn_sweeper(self: &Arc<Self>, every: Duration) -> JoinHandle<()> {
        let limiter = Arc::clone(self);
        let mut stop = self.shutdown.subscribe();

        tokio::spawn(async move {
            if *stop.borrow_and_update() {
                return;
            }

            let mut ticker = interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            info!(interval = ?every, "Rate limit sweeper started");

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let evicted = limiter.sweep();
                        if evicted > 0 {
                            debug!(evicted, remaining = limiter.tracked_callers(), "Evicted idle callers");
                        }
                    }
                    _ = stop.changed() => break,
                }
            }

            info!("Rate limit sweeper stopped");
        })
    }

    /// Stop the sweeper and drop all tracked state. Safe to call twice.
    pub fn shutdown(&self) {
        if self.shutdown.send_replace(true) {
            return;
        }
        self.windows.clear();
        self.tracked.set(0.0);
        info!("Rate limiter shut down");
    }
}
