//! Shutdown Scenarios - full runs from opening to full closure

use barbershop_core::application::Barbershop;
use barbershop_core::domain::{ShopConfig, ShopEvent};
use barbershop_core::port::arrival_sampler::mocks::{FixedGap, ScriptedGaps};
use barbershop_core::port::event_sink::mocks::RecordingEventSink;
use barbershop_core::AppError;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

fn config(seats: usize, haircut_ms: u64, arrival_ms: u64, open_ms: u64) -> ShopConfig {
    ShopConfig::new(
        seats,
        Duration::from_millis(haircut_ms),
        Duration::from_millis(arrival_ms),
        Duration::from_millis(open_ms),
    )
}

/// Scenario: zero open time closes before anyone is admitted
#[tokio::test(start_paused = true)]
async fn test_zero_open_time_admits_nobody() {
    let events = Arc::new(RecordingEventSink::new());

    let report = Barbershop::new(config(5, 100, 1, 0))
        .with_events(events.clone())
        .with_sampler(Arc::new(FixedGap(Duration::ZERO)))
        .run()
        .await
        .unwrap();

    assert_eq!(report.seated, 0);
    assert_eq!(report.customers_served(), 0);
    assert_eq!(report.barbers.len(), 1);
    assert_eq!(events.count_kind("customer_seated"), 0);
    assert_eq!(events.count_kind("fully_closed"), 1);
}

/// Zero barbers and zero arrivals: closing completes at once
#[tokio::test(start_paused = true)]
async fn test_no_barbers_closes_immediately() {
    let events = Arc::new(RecordingEventSink::new());

    let report = Barbershop::new(config(3, 100, 10, 0).with_barbers(0))
        .with_events(events.clone())
        .run()
        .await
        .unwrap();

    assert!(report.barbers.is_empty());
    assert_eq!(report.customers_served(), 0);
    assert_eq!(
        events.events(),
        vec![ShopEvent::ClosingBegun, ShopEvent::FullyClosed]
    );
}

/// "Fully closed" is reported only after every barber went home
#[tokio::test(start_paused = true)]
async fn test_fully_closed_only_after_all_barbers_home() {
    let events = Arc::new(RecordingEventSink::new());

    let report = Barbershop::new(config(6, 120, 20, 500).with_barbers(4))
        .with_events(events.clone())
        .with_sampler(Arc::new(FixedGap(Duration::from_millis(20))))
        .run()
        .await
        .unwrap();

    let recorded = events.events();
    let closed_at = events.position("fully_closed").unwrap();
    let homes: Vec<_> = recorded
        .iter()
        .enumerate()
        .filter(|(_, e)| matches!(e, ShopEvent::BarberGoingHome { .. }))
        .map(|(i, e)| (i, e.barber().unwrap_or_default().to_string()))
        .collect();

    assert_eq!(homes.len(), 4);
    assert!(homes.iter().all(|(i, _)| *i < closed_at));
    let names: HashSet<_> = homes.into_iter().map(|(_, name)| name).collect();
    let expected: HashSet<_> = (1..=4).map(|i| format!("Barber {}", i)).collect();
    assert_eq!(names, expected);
    assert_eq!(report.barbers.len(), 4);
}

/// Customers seated before closing are all served before the run ends
#[tokio::test(start_paused = true)]
async fn test_seated_customers_drain_after_closing() {
    let events = Arc::new(RecordingEventSink::new());

    // Arrivals far outpace a slow barber, so the room is full at closing time
    let report = Barbershop::new(config(4, 300, 10, 1_000))
        .with_events(events.clone())
        .with_sampler(Arc::new(FixedGap(Duration::from_millis(10))))
        .run()
        .await
        .unwrap();

    let closing_at = events.position("closing_begun").unwrap();
    let finished_after_closing = events.events()[closing_at..]
        .iter()
        .filter(|e| matches!(e, ShopEvent::HaircutFinished { .. }))
        .count();

    assert!(finished_after_closing >= 4, "queue was not drained after closing");
    assert_eq!(report.customers_served(), report.seated);
    assert!(report.turned_away_full > 0);
}

/// No customer is produced once the closing notice has gone out
#[tokio::test(start_paused = true)]
async fn test_no_arrivals_after_closing_begins() {
    let events = Arc::new(RecordingEventSink::new());

    Barbershop::new(config(2, 10, 7, 200).with_barbers(2))
        .with_events(events.clone())
        .with_sampler(Arc::new(FixedGap(Duration::from_millis(7))))
        .run()
        .await
        .unwrap();

    let closing_at = events.position("closing_begun").unwrap();
    let late_arrivals = events.events()[closing_at..]
        .iter()
        .filter(|e| {
            matches!(
                e,
                ShopEvent::CustomerSeated { .. }
                    | ShopEvent::TurnedAwayFull { .. }
                    | ShopEvent::TurnedAwayClosed { .. }
            )
        })
        .count();
    assert_eq!(late_arrivals, 0);
}

/// Arrival identifiers run 1, 2, 3, ... across accepted and rejected customers
#[tokio::test(start_paused = true)]
async fn test_arrival_identifiers_are_sequential() {
    let events = Arc::new(RecordingEventSink::new());
    let gaps = [5, 5, 5, 5, 5, 5].map(Duration::from_millis);

    let report = Barbershop::new(config(1, 50, 5, 100))
        .with_events(events.clone())
        .with_sampler(Arc::new(ScriptedGaps::new(gaps, Duration::from_secs(10))))
        .run()
        .await
        .unwrap();

    let mut ids: Vec<u64> = events
        .events()
        .iter()
        .filter(|e| {
            matches!(
                e,
                ShopEvent::CustomerSeated { .. } | ShopEvent::TurnedAwayFull { .. }
            )
        })
        .filter_map(|e| e.customer().map(|c| c.value()))
        .collect();
    ids.sort_unstable();

    assert_eq!(ids, (1..=6).collect::<Vec<_>>());
    assert_eq!(report.seated + report.turned_away_full, 6);
}

/// Invalid configuration is rejected before any unit starts
#[tokio::test(start_paused = true)]
async fn test_invalid_configuration_never_opens() {
    let events = Arc::new(RecordingEventSink::new());

    let result = Barbershop::new(config(3, 10, 0, 100))
        .with_events(events.clone())
        .run()
        .await;

    assert!(matches!(result, Err(AppError::InvalidArguments(_))));
    assert!(events.events().is_empty());
}
