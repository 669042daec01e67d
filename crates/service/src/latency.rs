//! Artificial latency for the in-memory stores.
//!
//! Each store operation sleeps for a per-operation delay before touching
//! state. [`Delayed`] wraps any store and applies a [`Latency`] profile, so
//! the same store runs with realistic delays in the server and none in tests.

use std::time::Duration;

use rand::Rng;

/// Store operation kinds, each with its own base delay.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    GetAll,
    GetById,
    GetHotlist,
    GetByStage,
    GetByLeadId,
    Create,
    Update,
    Delete,
    BulkDelete,
    UpdateStatus,
    ToggleHotlist,
}

impl Op {
    pub fn base_delay(self) -> Duration {
        let ms = match self {
            Op::GetAll => 300,
            Op::GetById => 200,
            Op::GetHotlist => 250,
            Op::GetByStage => 250,
            Op::GetByLeadId => 200,
            Op::Create => 400,
            Op::Update => 350,
            Op::Delete => 300,
            Op::BulkDelete => 300,
            Op::UpdateStatus => 250,
            Op::ToggleHotlist => 200,
        };
        Duration::from_millis(ms)
    }
}

/// Delay profile: base delays scaled by a percentage, plus optional random jitter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Latency {
    scale_percent: u32,
    jitter: Duration,
}

impl Latency {
    pub fn new(scale_percent: u32, jitter: Duration) -> Self {
        Self { scale_percent, jitter }
    }

    /// No delay at all.
    pub fn none() -> Self {
        Self::new(0, Duration::ZERO)
    }

    /// Base delays as-is.
    pub fn realistic() -> Self {
        Self::new(100, Duration::ZERO)
    }

    pub fn from_config(cfg: &configs::LatencyConfig) -> Self {
        if !cfg.enabled {
            return Self::none();
        }
        Self::new(cfg.scale_percent, Duration::from_millis(cfg.jitter_ms))
    }

    pub fn is_none(&self) -> bool {
        self.scale_percent == 0 && self.jitter.is_zero()
    }

    /// Delay to apply before `op`; jitter is drawn fresh on every call.
    pub fn delay_for(&self, op: Op) -> Duration {
        let base_ms = op.base_delay().as_millis() as u64;
        let scaled = Duration::from_millis(base_ms * u64::from(self.scale_percent) / 100);
        if self.jitter.is_zero() {
            return scaled;
        }
        let extra = rand::thread_rng().gen_range(0..=self.jitter.as_millis() as u64);
        scaled + Duration::from_millis(extra)
    }

    pub async fn pause(&self, op: Op) {
        let delay = self.delay_for(op);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::realistic()
    }
}

/// Decorator that delays every call on the wrapped store.
#[derive(Clone, Debug)]
pub struct Delayed<S> {
    inner: S,
    latency: Latency,
}

impl<S> Delayed<S> {
    pub fn new(inner: S, latency: Latency) -> Self {
        Self { inner, latency }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub(crate) async fn pause(&self, op: Op) {
        self.latency.pause(op).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_delays_stay_in_range() {
        for op in [
            Op::GetAll,
            Op::GetById,
            Op::GetHotlist,
            Op::GetByStage,
            Op::GetByLeadId,
            Op::Create,
            Op::Update,
            Op::Delete,
            Op::BulkDelete,
            Op::UpdateStatus,
            Op::ToggleHotlist,
        ] {
            let d = Latency::realistic().delay_for(op);
            assert!(d >= Duration::from_millis(200) && d <= Duration::from_millis(400), "{op:?}: {d:?}");
        }
    }

    #[test]
    fn scale_and_jitter() {
        let half = Latency::new(50, Duration::ZERO);
        assert_eq!(half.delay_for(Op::Create), Duration::from_millis(200));

        let jittery = Latency::new(0, Duration::from_millis(20));
        for _ in 0..50 {
            assert!(jittery.delay_for(Op::GetAll) <= Duration::from_millis(20));
        }
        assert!(!jittery.is_none());
        assert!(Latency::none().is_none());
    }

    #[test]
    fn disabled_config_means_no_delay() {
        let cfg = configs::LatencyConfig { enabled: false, scale_percent: 100, jitter_ms: 50 };
        assert!(Latency::from_config(&cfg).is_none());
        let cfg = configs::LatencyConfig { enabled: true, scale_percent: 10, jitter_ms: 0 };
        assert_eq!(Latency::from_config(&cfg).delay_for(Op::Update), Duration::from_millis(35));
    }

    #[tokio::test(start_paused = true)]
    async fn pause_sleeps_for_the_scaled_delay() {
        let start = tokio::time::Instant::now();
        Latency::realistic().pause(Op::Create).await;
        assert!(start.elapsed() >= Duration::from_millis(400));
    }
}
