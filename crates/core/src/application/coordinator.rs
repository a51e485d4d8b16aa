// Shutdown Coordinator - one-shot OPEN -> CLOSED transition

use crate::application::closing::ClosingAnnouncer;
use crate::application::constants::millis;
use crate::application::shop::{ClosureReport, Shop};
use crate::error::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

/// Closes the shop once the open window has elapsed.
///
/// Order matters: arrivals are told to stop first, then the waiting room is
/// closed, then every barber's acknowledgement is collected. The report is
/// returned only after the last barber has gone home.
pub struct ShutdownCoordinator {
    shop: Arc<Shop>,
    open_for: Duration,
    announcer: ClosingAnnouncer,
}

impl ShutdownCoordinator {
    pub fn new(shop: Arc<Shop>, open_for: Duration, announcer: ClosingAnnouncer) -> Self {
        Self {
            shop,
            open_for,
            announcer,
        }
    }

    pub async fn run(self) -> Result<ClosureReport> {
        info!(open_for_ms = millis(self.open_for), "Shop open");
        sleep(self.open_for).await;

        info!("Closing time reached");
        self.announcer.announce();
        let report = self.shop.close().await?;

        info!(
            served = report.customers_served(),
            seated = report.seated,
            turned_away = report.turned_away(),
            "Shop fully closed"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::closing::closing_channel;
    use crate::domain::CustomerId;
    use crate::port::event_sink::mocks::RecordingEventSink;

    #[tokio::test(start_paused = true)]
    async fn test_closes_after_open_window() {
        let events = Arc::new(RecordingEventSink::new());
        let shop = Arc::new(Shop::new(2, Duration::from_millis(10), events.clone()));
        let (announcer, notice) = closing_channel();

        let started = tokio::time::Instant::now();
        let report = ShutdownCoordinator::new(shop.clone(), Duration::from_secs(2), announcer)
            .run()
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_secs(2));
        assert!(notice.is_closing());
        assert!(!shop.is_open());
        assert_eq!(report, ClosureReport::default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_window_closes_immediately() {
        let events = Arc::new(RecordingEventSink::new());
        let shop = Arc::new(Shop::new(5, Duration::from_millis(10), events.clone()));
        let (announcer, notice) = closing_channel();

        let started = tokio::time::Instant::now();
        ShutdownCoordinator::new(shop.clone(), Duration::ZERO, announcer)
            .run()
            .await
            .unwrap();

        assert!(started.elapsed() < Duration::from_millis(5));
        assert!(notice.is_closing());
        assert_eq!(shop.add_customer(CustomerId::new(1)), crate::domain::Admission::Closed);
        assert!(events.position("closing_begun") < events.position("fully_closed"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_report_waits_for_all_barbers() {
        let events = Arc::new(RecordingEventSink::new());
        let shop = Arc::new(Shop::new(6, Duration::from_millis(100), events.clone()));
        for i in 1..=2 {
            shop.add_barber(format!("Barber {}", i)).unwrap();
        }
        for id in 1..=6 {
            shop.add_customer(CustomerId::new(id));
        }
        let (announcer, _notice) = closing_channel();

        let report = ShutdownCoordinator::new(shop, Duration::ZERO, announcer)
            .run()
            .await
            .unwrap();

        assert_eq!(report.barbers.len(), 2);
        assert_eq!(report.customers_served(), 6);
        assert_eq!(events.count_kind("barber_going_home"), 2);
    }
}
