// Arrival Generator - randomized customer arrivals until closing

use crate::application::closing::ClosingNotice;
use crate::application::constants::{millis, FIRST_CUSTOMER_ID};
use crate::application::shop::Shop;
use crate::domain::CustomerId;
use crate::port::ArrivalSampler;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

/// Produces customers at randomized gaps and offers each to the shop.
///
/// Rejected customers are simply dropped; there is no retry.
pub struct ArrivalGenerator {
    shop: Arc<Shop>,
    mean_gap: Duration,
    sampler: Arc<dyn ArrivalSampler>,
    next_customer: CustomerId,
}

impl ArrivalGenerator {
    pub fn new(shop: Arc<Shop>, mean_gap: Duration, sampler: Arc<dyn ArrivalSampler>) -> Self {
        Self {
            shop,
            mean_gap,
            sampler,
            next_customer: CustomerId::new(FIRST_CUSTOMER_ID),
        }
    }

    /// Run until the closing notice arrives; returns how many customers arrived.
    ///
    /// The notice always wins over a gap timer that is ready at the same time.
    pub async fn run(mut self, mut closing: ClosingNotice) -> u64 {
        info!(mean_gap_ms = millis(self.mean_gap), "Arrival generator started");
        let mut arrived = 0u64;

        while !closing.is_closing() {
            let gap = self.sampler.next_gap(self.mean_gap);
            tokio::select! {
                biased;
                _ = closing.wait() => break,
                _ = sleep(gap) => {
                    let customer = self.next_customer;
                    self.next_customer = customer.next();
                    self.shop.add_customer(customer);
                    arrived += 1;
                }
            }
        }

        info!(arrived, "Arrival generator stopped");
        arrived
    }
}
