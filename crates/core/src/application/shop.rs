// Shop - coordination context shared by barbers, arrivals and the coordinator

use crate::application::barber::Barber;
use crate::domain::{Admission, CustomerId, DomainError, ShopEvent, WaitingRoom};
use crate::error::Result;
use crate::port::EventSink;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Acknowledgement a barber sends when going home
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BarberReport {
    pub name: String,
    pub served: u64,
}

/// Outcome of a completed closing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClosureReport {
    /// One entry per registered barber, in the order they went home
    pub barbers: Vec<BarberReport>,
    pub seated: u64,
    pub turned_away_full: u64,
    pub turned_away_closed: u64,
}

impl ClosureReport {
    pub fn customers_served(&self) -> u64 {
        self.barbers.iter().map(|b| b.served).sum()
    }

    pub fn turned_away(&self) -> u64 {
        self.turned_away_full + self.turned_away_closed
    }
}

/// Registration bookkeeping; `closing` freezes `barbers` for the fan-in
struct Roster {
    barbers: usize,
    closing: bool,
}

#[derive(Default)]
struct Tally {
    seated: AtomicU64,
    turned_away_full: AtomicU64,
    turned_away_closed: AtomicU64,
}

/// The barbershop: owns the waiting room and the going-home channel.
///
/// Shared via `Arc` with every barber task and the arrival generator, none of
/// which outlive the closing sequence.
pub struct Shop {
    haircut: Duration,
    open: AtomicBool,
    room: WaitingRoom<CustomerId>,
    roster: Mutex<Roster>,
    home_tx: mpsc::UnboundedSender<BarberReport>,
    home_rx: Mutex<Option<mpsc::UnboundedReceiver<BarberReport>>>,
    events: Arc<dyn EventSink>,
    tally: Tally,
}

impl Shop {
    pub fn new(seats: usize, haircut: Duration, events: Arc<dyn EventSink>) -> Self {
        let (home_tx, home_rx) = mpsc::unbounded_channel();
        Self {
            haircut,
            open: AtomicBool::new(true),
            room: WaitingRoom::new(seats),
            roster: Mutex::new(Roster {
                barbers: 0,
                closing: false,
            }),
            home_tx,
            home_rx: Mutex::new(Some(home_rx)),
            events,
            tally: Tally::default(),
        }
    }

    pub fn haircut_duration(&self) -> Duration {
        self.haircut
    }

    /// Number of barbers ever registered
    pub fn barber_count(&self) -> usize {
        lock(&self.roster).barbers
    }

    /// Advisory only: admission is decided by the waiting room, not this flag
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }

    /// Customers currently waiting (snapshot)
    pub fn waiting(&self) -> usize {
        self.room.len()
    }

    /// Register a barber and start its service loop.
    ///
    /// Fails once closing has begun, so the number of acknowledgements the
    /// coordinator waits for cannot change underneath it.
    pub fn add_barber(self: &Arc<Self>, name: impl Into<String>) -> Result<JoinHandle<BarberReport>> {
        let name = name.into();
        let mut roster = lock(&self.roster);
        if roster.closing {
            return Err(DomainError::ShopClosing(name).into());
        }
        roster.barbers += 1;
        info!(barber = %name, barbers = roster.barbers, "Barber registered");

        let barber = Barber::new(name, Arc::clone(self));
        Ok(tokio::spawn(barber.run()))
    }

    /// Offer a customer a seat; never waits for one to free up
    pub fn add_customer(&self, customer: CustomerId) -> Admission {
        let admission = self.room.try_enqueue(customer);
        let event = match admission {
            Admission::Accepted => {
                self.tally.seated.fetch_add(1, Ordering::Relaxed);
                ShopEvent::CustomerSeated { customer }
            }
            Admission::Full => {
                self.tally.turned_away_full.fetch_add(1, Ordering::Relaxed);
                ShopEvent::TurnedAwayFull { customer }
            }
            Admission::Closed => {
                self.tally.turned_away_closed.fetch_add(1, Ordering::Relaxed);
                ShopEvent::TurnedAwayClosed { customer }
            }
        };
        self.emit(event);
        admission
    }

    /// Close the shop and wait until every registered barber has gone home.
    ///
    /// Customers already seated are still served; only then does this return.
    pub async fn close(&self) -> Result<ClosureReport> {
        let expected = {
            let mut roster = lock(&self.roster);
            if roster.closing {
                return Err(DomainError::AlreadyClosed.into());
            }
            roster.closing = true;
            roster.barbers
        };
        let mut home_rx = lock(&self.home_rx)
            .take()
            .ok_or(DomainError::AlreadyClosed)?;

        self.open.store(false, Ordering::Release);
        self.emit(ShopEvent::ClosingBegun);
        self.room.close();
        info!(barbers = expected, waiting = self.room.len(), "Waiting for barbers to go home");

        let mut barbers = Vec::with_capacity(expected);
        while barbers.len() < expected {
            // The shop keeps a sender alive, so this only ends on an acknowledgement
            match home_rx.recv().await {
                Some(report) => {
                    debug!(barber = %report.name, served = report.served, "Barber acknowledged");
                    barbers.push(report);
                }
                None => break,
            }
        }

        let report = ClosureReport {
            barbers,
            seated: self.tally.seated.load(Ordering::Relaxed),
            turned_away_full: self.tally.turned_away_full.load(Ordering::Relaxed),
            turned_away_closed: self.tally.turned_away_closed.load(Ordering::Relaxed),
        };
        self.emit(ShopEvent::FullyClosed);
        Ok(report)
    }

    pub(crate) fn room(&self) -> &WaitingRoom<CustomerId> {
        &self.room
    }

    pub(crate) fn emit(&self, event: ShopEvent) {
        self.events.emit(event);
    }

    pub(crate) fn acknowledge_home(&self, report: BarberReport) {
        // Receiver only disappears after close() has collected everyone
        let _ = self.home_tx.send(report);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
