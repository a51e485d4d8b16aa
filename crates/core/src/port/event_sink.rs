// Event Sink Port

use crate::domain::ShopEvent;
use tracing::info;

/// Observer for everything the shop reports (allows recording in tests)
pub trait EventSink: Send + Sync {
    fn emit(&self, event: ShopEvent);
}

/// Structured log output (production)
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: ShopEvent) {
        let customer = event.customer().map(|c| c.value());
        let barber = event.barber().unwrap_or_default();
        info!(kind = event.kind(), barber, customer, "{}", event);
    }
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::domain::CustomerId;
    use std::sync::Mutex;

    /// Keeps every event in emission order
    #[derive(Default)]
    pub struct RecordingEventSink {
        events: Mutex<Vec<ShopEvent>>,
    }

    impl RecordingEventSink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn events(&self) -> Vec<ShopEvent> {
            self.events.lock().unwrap().clone()
        }

        pub fn count_kind(&self, kind: &str) -> usize {
            self.events
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.kind() == kind)
                .count()
        }

        /// Customers mentioned by events of the given kind, in order
        pub fn customers(&self, kind: &str) -> Vec<CustomerId> {
            self.events
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.kind() == kind)
                .filter_map(ShopEvent::customer)
                .collect()
        }

        /// Index of the first event of the given kind
        pub fn position(&self, kind: &str) -> Option<usize> {
            self.events
                .lock()
                .unwrap()
                .iter()
                .position(|e| e.kind() == kind)
        }
    }

    impl EventSink for RecordingEventSink {
        fn emit(&self, event: ShopEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    /// Records like `RecordingEventSink`, but panics on one kind of event
    pub struct FailingEventSink {
        fail_on: &'static str,
        recorded: RecordingEventSink,
    }

    impl FailingEventSink {
        pub fn new(fail_on: &'static str) -> Self {
            Self {
                fail_on,
                recorded: RecordingEventSink::new(),
            }
        }

        pub fn events(&self) -> Vec<ShopEvent> {
            self.recorded.events()
        }
    }

    impl EventSink for FailingEventSink {
        fn emit(&self, event: ShopEvent) {
            if event.kind() == self.fail_on {
                panic!("event sink failed on {}", self.fail_on);
            }
            self.recorded.emit(event);
        }
    }
}
