// Shop Events - observable occasions during a run

use super::CustomerId;
use std::fmt;

/// Everything the shop reports to its observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopEvent {
    /// Closing time reached; no further arrivals are produced
    ClosingBegun,
    /// Every barber has gone home
    FullyClosed,
    CustomerSeated { customer: CustomerId },
    TurnedAwayFull { customer: CustomerId },
    TurnedAwayClosed { customer: CustomerId },
    /// Advisory only: the room looked empty right before the barber waited on it
    BarberSleeping { barber: String },
    HaircutStarted { barber: String, customer: CustomerId },
    HaircutFinished { barber: String, customer: CustomerId },
    BarberGoingHome { barber: String },
}

impl ShopEvent {
    /// Stable label for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            ShopEvent::ClosingBegun => "closing_begun",
            ShopEvent::FullyClosed => "fully_closed",
            ShopEvent::CustomerSeated { .. } => "customer_seated",
            ShopEvent::TurnedAwayFull { .. } => "turned_away_full",
            ShopEvent::TurnedAwayClosed { .. } => "turned_away_closed",
            ShopEvent::BarberSleeping { .. } => "barber_sleeping",
            ShopEvent::HaircutStarted { .. } => "haircut_started",
            ShopEvent::HaircutFinished { .. } => "haircut_finished",
            ShopEvent::BarberGoingHome { .. } => "barber_going_home",
        }
    }

    pub fn customer(&self) -> Option<CustomerId> {
        match self {
            ShopEvent::CustomerSeated { customer }
            | ShopEvent::TurnedAwayFull { customer }
            | ShopEvent::TurnedAwayClosed { customer }
            | ShopEvent::HaircutStarted { customer, .. }
            | ShopEvent::HaircutFinished { customer, .. } => Some(*customer),
            _ => None,
        }
    }

    pub fn barber(&self) -> Option<&str> {
        match self {
            ShopEvent::BarberSleeping { barber }
            | ShopEvent::HaircutStarted { barber, .. }
            | ShopEvent::HaircutFinished { barber, .. }
            | ShopEvent::BarberGoingHome { barber } => Some(barber),
            _ => None,
        }
    }
}

impl fmt::Display for ShopEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShopEvent::ClosingBegun => write!(f, "Closing shop"),
            ShopEvent::FullyClosed => write!(f, "Shop closed"),
            ShopEvent::CustomerSeated { customer } => {
                write!(f, "Customer {} takes a seat in the waiting room", customer)
            }
            ShopEvent::TurnedAwayFull { customer } => {
                write!(f, "Shop is full, customer {} will come back later", customer)
            }
            ShopEvent::TurnedAwayClosed { customer } => {
                write!(f, "Shop is closed, customer {} is turned away", customer)
            }
            ShopEvent::BarberSleeping { barber } => write!(f, "{} is sleeping: Zzzz...", barber),
            ShopEvent::HaircutStarted { barber, customer } => {
                write!(f, "{} is cutting customer {}'s hair", barber, customer)
            }
            ShopEvent::HaircutFinished { barber, customer } => {
                write!(f, "{} finished cutting customer {}'s hair", barber, customer)
            }
            ShopEvent::BarberGoingHome { barber } => write!(f, "{} is going home", barber),
        }
    }
}
