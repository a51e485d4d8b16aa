// Barbershop Core - Coordination Logic & Ports
// NO CLI, NO subscriber set-up: the binary crate wires those in

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{AppError, Result};
