// Application Layer - concurrent units and their wiring

pub mod arrivals;
pub mod barber;
pub mod barbershop;
pub mod closing;
pub mod constants;
pub mod coordinator;
pub mod shop;

// Re-exports
pub use arrivals::ArrivalGenerator;
pub use barber::Barber;
pub use barbershop::Barbershop;
pub use closing::{closing_channel, ClosingAnnouncer, ClosingNotice};
pub use coordinator::ShutdownCoordinator;
pub use shop::{BarberReport, ClosureReport, Shop};
