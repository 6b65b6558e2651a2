//! One client's alerting loop body: generate, log, then emit metrics, log and alerts.

use std::sync::Arc;

use time::OffsetDateTime;

use crate::alerts::AlertThresholds;
use crate::error::AgentError;
use crate::logfile::{format_log_entry, LogSink};
use crate::metrics::{memory_percent, MetricsGenerator};
use crate::state::{AppState, SharedSystem};
use crate::types::ServerEvent;

pub struct Session {
    generator: MetricsGenerator,
    thresholds: Arc<AlertThresholds>,
    log: Arc<dyn LogSink>,
    sys: SharedSystem,
}

impl Session {
    pub fn new(state: &AppState) -> Self {
        Self::with_generator(state, MetricsGenerator::from_entropy())
    }

    pub fn with_generator(state: &AppState, generator: MetricsGenerator) -> Self {
        Self {
            generator,
            thresholds: state.thresholds.clone(),
            log: state.log.clone(),
            sys: state.sys.clone(),
        }
    }

    /// Events for one tick: exactly one `metrics`, one `log`, then any alerts.
    pub async fn tick(&mut self) -> Result<Vec<ServerEvent>, AgentError> {
        let memory = memory_percent(&self.sys).await;
        let sample = self.generator.generate(memory);

        let entry = format_log_entry(OffsetDateTime::now_utc(), &sample)?;
        self.log.append(&entry);

        let alerts = self.thresholds.evaluate(&sample);
        let mut events = Vec::with_capacity(2 + alerts.len());
        events.push(ServerEvent::Metrics(sample));
        events.push(ServerEvent::Log(entry));
        events.extend(alerts.into_iter().map(ServerEvent::Alert));
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AgentConfig;
    use std::sync::Mutex;
    use tokio::sync::watch;

    #[derive(Default)]
    struct MemoryLog(Mutex<Vec<String>>);

    impl LogSink for MemoryLog {
        fn append(&self, entry: &str) {
            self.0.lock().unwrap().push(entry.to_owned());
        }
    }

    fn state_with(log: Arc<MemoryLog>) -> AppState {
        let (_tx, rx) = watch::channel(false);
        AppState::new(&AgentConfig::default(), log, rx)
    }

    #[tokio::test]
    async fn tick_orders_metrics_log_alerts() {
        let log = Arc::new(MemoryLog::default());
        let state = state_with(log.clone());
        let mut s = Session::with_generator(&state, MetricsGenerator::seeded(11));

        for _ in 0..50 {
            let events = s.tick().await.unwrap();
            assert!(events.len() >= 2);
            let ServerEvent::Metrics(sample) = &events[0] else {
                panic!("first event must be metrics, got {:?}", events[0]);
            };
            let ServerEvent::Log(line) = &events[1] else {
                panic!("second event must be log, got {:?}", events[1]);
            };
            assert!(line.contains(" - Metrics: "));
            assert!(line.ends_with('\n'));

            let expected = state.thresholds.evaluate(sample);
            let got: Vec<_> = events[2..]
                .iter()
                .map(|e| match e {
                    ServerEvent::Alert(a) => *a,
                    other => panic!("only alerts after log, got {other:?}"),
                })
                .collect();
            assert_eq!(got, expected);
        }
        assert_eq!(log.0.lock().unwrap().len(), 50);
    }

    #[tokio::test]
    async fn logged_line_matches_emitted_line() {
        let log = Arc::new(MemoryLog::default());
        let state = state_with(log.clone());
        let mut s = Session::with_generator(&state, MetricsGenerator::seeded(3));
        let events = s.tick().await.unwrap();
        let ServerEvent::Log(line) = &events[1] else {
            panic!("expected log event");
        };
        assert_eq!(log.0.lock().unwrap().as_slice(), std::slice::from_ref(line));
    }
}
