//! Telemetry for the grounded-response pipeline
//!
//! In-process event collection and counters. Moderation violations are a
//! normal outcome and are counted separately from failures.

use std::sync::{Arc, Mutex};
use std::time::Instant;
use uuid::Uuid;

/// Telemetry event types
#[derive(Debug, Clone)]
pub enum TelemetryEvent {
    StateTransition {
        request_id: Uuid,
        from: String,
        to: String,
        timestamp: Instant,
    },
    ModerationBlocked {
        request_id: Uuid,
        term_count: usize,
        timestamp: Instant,
    },
    DocumentsRetrieved {
        request_id: Uuid,
        count: usize,
        timestamp: Instant,
    },
    BackendDispatched {
        request_id: Uuid,
        timestamp: Instant,
    },
    BackendFailed {
        request_id: Uuid,
        detail: String,
        timestamp: Instant,
    },
    TermStoreDegraded {
        request_id: Uuid,
        detail: String,
        timestamp: Instant,
    },
}

/// Aggregate counters
#[derive(Debug, Clone, Default)]
pub struct TelemetryStats {
    pub requests_started: usize,
    pub moderation_blocks: usize,
    pub zero_grounding_requests: usize,
    pub backend_dispatches: usize,
    pub backend_failures: usize,
    pub term_store_degradations: usize,
    pub state_transitions: usize,
}

/// Telemetry collector shared across requests
#[derive(Clone)]
pub struct TelemetryCollector {
    events: Arc<Mutex<Vec<TelemetryEvent>>>,
    stats: Arc<Mutex<TelemetryStats>>,
    start_time: Instant,
}

impl TelemetryCollector {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            stats: Arc::new(Mutex::new(TelemetryStats::default())),
            start_time: Instant::now(),
        }
    }

    /// Record an event and bump the matching counter
    pub fn record(&self, event: TelemetryEvent) {
        if let Ok(mut stats) = self.stats.lock() {
            match &event {
                TelemetryEvent::StateTransition { .. } => stats.state_transitions += 1,
                TelemetryEvent::ModerationBlocked { .. } => stats.moderation_blocks += 1,
                TelemetryEvent::DocumentsRetrieved { count, .. } => {
                    if *count == 0 {
                        stats.zero_grounding_requests += 1;
                    }
                }
                TelemetryEvent::BackendDispatched { .. } => stats.backend_dispatches += 1,
                TelemetryEvent::BackendFailed { .. } => stats.backend_failures += 1,
                TelemetryEvent::TermStoreDegraded { .. } => stats.term_store_degradations += 1,
            }
        }
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }

    /// Mark the start of a new request
    pub fn request_started(&self) {
        if let Ok(mut stats) = self.stats.lock() {
            stats.requests_started += 1;
        }
    }

    /// Snapshot of the current counters
    pub fn stats(&self) -> TelemetryStats {
        self.stats.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Number of recorded events
    pub fn event_count(&self) -> usize {
        self.events.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// Seconds since the collector was created
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for TelemetryCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_track_events() {
        let collector = TelemetryCollector::new();
        let id = Uuid::new_v4();

        collector.request_started();
        collector.record(TelemetryEvent::ModerationBlocked {
            request_id: id,
            term_count: 1,
            timestamp: Instant::now(),
        });
        collector.record(TelemetryEvent::DocumentsRetrieved {
            request_id: id,
            count: 0,
            timestamp: Instant::now(),
        });

        let stats = collector.stats();
        assert_eq!(stats.requests_started, 1);
        assert_eq!(stats.moderation_blocks, 1);
        assert_eq!(stats.zero_grounding_requests, 1);
        assert_eq!(collector.event_count(), 2);
    }

    #[test]
    fn test_nonzero_retrieval_not_counted_as_zero_grounding() {
        let collector = TelemetryCollector::new();
        collector.record(TelemetryEvent::DocumentsRetrieved {
            request_id: Uuid::new_v4(),
            count: 3,
            timestamp: Instant::now(),
        });
        assert_eq!(collector.stats().zero_grounding_requests, 0);
    }
}
