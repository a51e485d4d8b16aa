// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Shop is closing: barber {0} cannot be registered")]
    ShopClosing(String),

    #[error("Shop has already been closed")]
    AlreadyClosed,
}
