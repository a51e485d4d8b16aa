// Barbershop - wires shop, barbers, arrivals and the coordinator for one run

use crate::application::arrivals::ArrivalGenerator;
use crate::application::closing::closing_channel;
use crate::application::constants::{barber_name, millis};
use crate::application::coordinator::ShutdownCoordinator;
use crate::application::shop::{ClosureReport, Shop};
use crate::domain::ShopConfig;
use crate::error::Result;
use crate::port::{ArrivalSampler, EventSink, TracingEventSink, UniformJitter};
use std::sync::Arc;
use tracing::info;

/// One business day of the shop, from opening to full closure
pub struct Barbershop {
    config: ShopConfig,
    events: Arc<dyn EventSink>,
    sampler: Arc<dyn ArrivalSampler>,
}

impl Barbershop {
    /// Production wiring: tracing output and uniform arrival jitter
    pub fn new(config: ShopConfig) -> Self {
        Self {
            config,
            events: Arc::new(TracingEventSink),
            sampler: Arc::new(UniformJitter),
        }
    }

    pub fn with_events(mut self, events: Arc<dyn EventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn with_sampler(mut self, sampler: Arc<dyn ArrivalSampler>) -> Self {
        self.sampler = sampler;
        self
    }

    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    /// Open the shop and block until it is fully closed.
    ///
    /// Nothing is started if the configuration is invalid.
    pub async fn run(self) -> Result<ClosureReport> {
        self.config.validate()?;
        let config = self.config;
        info!(
            seats = config.seats,
            barbers = config.barbers,
            haircut_ms = millis(config.haircut),
            mean_arrival_ms = millis(config.mean_arrival),
            open_for_ms = millis(config.open_for),
            "Opening barbershop"
        );

        let shop = Arc::new(Shop::new(config.seats, config.haircut, self.events));
        for index in 0..config.barbers {
            shop.add_barber(barber_name(index, config.barbers))?;
        }

        let (announcer, notice) = closing_channel();

        // A zero-length window never admits anyone, so arrivals are not started
        let arrivals = if config.open_for.is_zero() {
            None
        } else {
            let generator =
                ArrivalGenerator::new(Arc::clone(&shop), config.mean_arrival, self.sampler);
            Some(tokio::spawn(generator.run(notice)))
        };

        let coordinator = ShutdownCoordinator::new(Arc::clone(&shop), config.open_for, announcer);
        let report = match tokio::spawn(coordinator.run()).await {
            Ok(report) => report,
            Err(join_err) => {
                if let Some(arrivals) = &arrivals {
                    arrivals.abort();
                }
                return Err(join_err.into());
            }
        };

        if let Some(arrivals) = arrivals {
            let arrived = arrivals.await?;
            info!(arrived, "Arrivals finished");
        }

        report
    }
}
