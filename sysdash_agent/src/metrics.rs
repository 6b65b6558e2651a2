//! Synthetic metrics generation. Only memory is read from the host (via sysinfo);
//! the other fields are independent uniform draws.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

use crate::state::SharedSystem;
use crate::types::MetricsSample;

/// Upper bound (exclusive) for percentage-style fields.
pub const PERCENT_MAX: f64 = 100.0;
/// Upper bound (exclusive) for simulated API latency in milliseconds.
pub const LATENCY_MAX_MS: f64 = 1000.0;

/// Per-connection generator. Each client gets its own RNG so streams never share a sequence.
pub struct MetricsGenerator {
    rng: StdRng,
}

impl MetricsGenerator {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn generate(&mut self, memory_percent: f64) -> MetricsSample {
        MetricsSample {
            cpu: self.draw(PERCENT_MAX),
            memory: memory_percent.clamp(0.0, PERCENT_MAX),
            api_latency: self.draw(LATENCY_MAX_MS),
            disk_usage: self.draw(PERCENT_MAX),
            network_usage: self.draw(PERCENT_MAX),
            temperature: self.draw(PERCENT_MAX),
        }
    }

    #[inline]
    fn draw(&mut self, max: f64) -> f64 {
        self.rng.gen::<f64>() * max
    }
}

/// Used memory as a percentage of total, from a fresh memory refresh.
pub async fn memory_percent(sys: &SharedSystem) -> f64 {
    let mut sys = sys.lock().await;
    if let Err(e) = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        sys.refresh_memory();
    })) {
        warn!("sysinfo memory refresh panicked: {e:?}");
    }
    used_ratio(sys.total_memory(), sys.available_memory())
}

pub(crate) fn used_ratio(total: u64, available: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let used = total.saturating_sub(available);
    (used as f64 / total as f64 * 100.0).clamp(0.0, PERCENT_MAX)
}
