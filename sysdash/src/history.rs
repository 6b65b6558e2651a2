//! Small utilities to manage bounded history buffers for charts.

use std::collections::VecDeque;

use crate::types::{Metric, MetricsSample};

/// Points kept per chart.
pub const WINDOW_SIZE: usize = 10;

pub fn push_capped<T>(dq: &mut VecDeque<T>, v: T, cap: usize) {
    while dq.len() >= cap && cap > 0 {
        dq.pop_front();
    }
    dq.push_back(v);
}

// One FIFO window per metric, indexed by `Metric::index`
pub struct MetricWindows {
    windows: [VecDeque<f64>; 6],
    cap: usize,
}

impl MetricWindows {
    pub fn new(cap: usize) -> Self {
        Self {
            windows: std::array::from_fn(|_| VecDeque::with_capacity(cap)),
            cap,
        }
    }

    pub fn push_sample(&mut self, s: &MetricsSample) {
        for m in Metric::ALL {
            push_capped(&mut self.windows[m.index()], s.value(m), self.cap);
        }
    }

    pub fn window(&self, m: Metric) -> &VecDeque<f64> {
        &self.windows[m.index()]
    }

    /// Chart points: x is the 1-based position in the window.
    pub fn points(&self, m: Metric) -> Vec<(f64, f64)> {
        self.window(m)
            .iter()
            .enumerate()
            .map(|(i, &v)| ((i + 1) as f64, v))
            .collect()
    }
}

impl Default for MetricWindows {
    fn default() -> Self {
        Self::new(WINDOW_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(v: f64) -> MetricsSample {
        MetricsSample {
            cpu: v,
            memory: v + 1.0,
            api_latency: v + 2.0,
            disk_usage: v + 3.0,
            network_usage: v + 4.0,
            temperature: v + 5.0,
        }
    }

    #[test]
    fn push_capped_evicts_oldest() {
        let mut dq = VecDeque::new();
        for i in 0..5 {
            push_capped(&mut dq, i, 3);
        }
        assert_eq!(dq, VecDeque::from(vec![2, 3, 4]));
    }

    #[test]
    fn eleven_pushes_keep_two_through_eleven() {
        let mut w = MetricWindows::default();
        for i in 1..=11 {
            w.push_sample(&sample(i as f64));
        }
        for m in Metric::ALL {
            assert_eq!(w.window(m).len(), WINDOW_SIZE);
        }
        let cpu: Vec<f64> = w.window(Metric::Cpu).iter().copied().collect();
        assert_eq!(cpu, (2..=11).map(|i| i as f64).collect::<Vec<_>>());
        let temp: Vec<f64> = w.window(Metric::Temperature).iter().copied().collect();
        assert_eq!(temp, (2..=11).map(|i| i as f64 + 5.0).collect::<Vec<_>>());
    }

    #[test]
    fn windows_never_exceed_cap() {
        let mut w = MetricWindows::default();
        for i in 0..100 {
            w.push_sample(&sample(i as f64));
            assert!(w.window(Metric::Memory).len() <= WINDOW_SIZE);
        }
    }

    #[test]
    fn points_are_one_based() {
        let mut w = MetricWindows::default();
        w.push_sample(&sample(5.0));
        w.push_sample(&sample(7.0));
        assert_eq!(w.points(Metric::Cpu), vec![(1.0, 5.0), (2.0, 7.0)]);
    }
}
