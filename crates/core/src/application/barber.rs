// Barber - service loop draining the waiting room

use crate::application::shop::{BarberReport, Shop};
use crate::domain::{CustomerId, ShopEvent};
use std::sync::Arc;
use tokio::time::sleep;
use tracing::info;

/// A barber serves one customer at a time until the shop closes and the
/// waiting room is empty, then goes home for good.
pub struct Barber {
    name: String,
    shop: Arc<Shop>,
}

impl Barber {
    pub fn new(name: impl Into<String>, shop: Arc<Shop>) -> Self {
        Self {
            name: name.into(),
            shop,
        }
    }

    /// Run the service loop; the returned report was also sent to the shop.
    ///
    /// The acknowledgement goes out even if the task is aborted or unwinds,
    /// so closing never waits on a barber that is gone.
    pub async fn run(self) -> BarberReport {
        info!(barber = %self.name, "Barber started");
        let mut shift = Shift {
            shop: Arc::clone(&self.shop),
            report: BarberReport {
                name: self.name.clone(),
                served: 0,
            },
        };

        loop {
            // Snapshot only; a customer may arrive right after this read
            if self.shop.room().is_empty() {
                self.shop.emit(ShopEvent::BarberSleeping {
                    barber: self.name.clone(),
                });
            }

            match self.shop.room().dequeue().await {
                Some(customer) => {
                    self.cut_hair(customer).await;
                    shift.report.served += 1;
                }
                None => break,
            }
        }

        info!(barber = %self.name, served = shift.report.served, "Barber stopped");
        self.shop.emit(ShopEvent::BarberGoingHome {
            barber: self.name.clone(),
        });
        shift.report.clone()
    }

    /// Fixed-duration service; never interrupted once started
    async fn cut_hair(&self, customer: CustomerId) {
        self.shop.emit(ShopEvent::HaircutStarted {
            barber: self.name.clone(),
            customer,
        });
        sleep(self.shop.haircut_duration()).await;
        self.shop.emit(ShopEvent::HaircutFinished {
            barber: self.name.clone(),
            customer,
        });
    }
}

/// Sends the going-home acknowledgement when the barber's task ends, however it ends
struct Shift {
    shop: Arc<Shop>,
    report: BarberReport,
}

impl Drop for Shift {
    fn drop(&mut self) {
        self.shop.acknowledge_home(std::mem::take(&mut self.report));
    }
}
