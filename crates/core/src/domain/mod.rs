// Domain Layer - Pure coordination entities

pub mod customer;
pub mod error;
pub mod event;
pub mod shop_config;
pub mod waiting_room;

// Re-exports
pub use customer::CustomerId;
pub use error::DomainError;
pub use event::ShopEvent;
pub use shop_config::{ConfigIssue, ShopArgs, ShopConfig};
pub use waiting_room::{Admission, WaitingRoom};
