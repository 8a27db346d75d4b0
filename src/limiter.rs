//! Rate limiting for bridge API compliance.

use std::time::Duration;

use log::debug;
use tokio::sync::Mutex;
use tokio::time::{Instant, sleep};

use crate::config::BridgeConfig;

/// Enforces the bridge's documented throughput ceilings.
///
/// Two independent limits are tracked. Per-light commands go through a token
/// bucket that allows bursts up to capacity and refills continuously; group
/// broadcasts go through a minimum-interval gate. Acquiring a slot may wait
/// but never fails.
///
/// One limiter is shared process-wide: construct it once at startup and hand
/// an `Arc` of it to every [`BridgeClient`](crate::BridgeClient) that talks
/// to the same bridge.
#[derive(Debug)]
pub struct RateLimiter {
    max_tokens: f64,
    refill_rate: f64,
    group_interval: Duration,
    light: Mutex<LightBucket>,
    group: Mutex<GroupGate>,
}

/// Token state for per-light commands, guarded by the light lock.
#[derive(Debug)]
struct LightBucket {
    tokens: f64,
    last_refill: Instant,
}

/// Timestamp of the last granted group command, guarded by the group lock.
#[derive(Debug)]
struct GroupGate {
    last_call: Option<Instant>,
}

impl RateLimiter {
    /// Create a limiter allowing `light_rate` light commands per second and
    /// one group command per `group_interval`.
    pub fn new(light_rate: u32, group_interval: Duration) -> Self {
        // A zero rate would never refill; clamp to one per second.
        let rate = light_rate.max(1) as f64;
        RateLimiter {
            max_tokens: rate,
            refill_rate: rate,
            group_interval,
            light: Mutex::new(LightBucket {
                tokens: rate,
                last_refill: Instant::now(),
            }),
            group: Mutex::new(GroupGate { last_call: None }),
        }
    }

    /// Create a limiter from the config's rate-limit fields.
    pub fn from_config(config: &BridgeConfig) -> Self {
        Self::new(config.light_rate_limit, config.group_rate_limit)
    }

    /// Take one token for a light command, waiting for a refill whenever the
    /// bucket is empty.
    ///
    /// The bucket state stays locked for the whole acquire, waits included,
    /// so refill and consume never interleave between callers.
    pub async fn acquire_light_slot(&self) {
        let mut bucket = self.light.lock().await;
        bucket.refill(self.max_tokens, self.refill_rate);

        while bucket.tokens < 1.0 {
            let wait = Duration::from_secs_f64(1.0 / self.refill_rate);
            debug!("light token bucket empty, waiting {wait:?}");
            sleep(wait).await;
            bucket.refill(self.max_tokens, self.refill_rate);
        }

        bucket.tokens -= 1.0;
    }

    /// Wait out the minimum interval since the last granted group command.
    pub async fn acquire_group_slot(&self) {
        let mut gate = self.group.lock().await;
        if let Some(last) = gate.last_call {
            let elapsed = last.elapsed();
            if elapsed < self.group_interval {
                let wait = self.group_interval - elapsed;
                debug!("group gate closed, waiting {wait:?}");
                sleep(wait).await;
            }
        }
        gate.last_call = Some(Instant::now());
    }
}

impl LightBucket {
    fn refill(&mut self, max_tokens: f64, refill_rate: f64) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_refill).as_secs_f64();
        self.tokens = (self.tokens + elapsed * refill_rate).min(max_tokens);
        self.last_refill = now;
    }
}
