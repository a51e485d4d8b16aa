// Shop Configuration

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{AppError, Result};

/// Barbers registered when the caller does not ask for more
pub const DEFAULT_BARBERS: usize = 1;

/// Raw command-line values, in the units the CLI accepts them.
#[derive(Debug, Clone, Default)]
pub struct ShopArgs {
    /// Waiting room capacity
    pub seats: String,
    /// Haircut time in milliseconds
    pub haircut_ms: String,
    /// Average gap between arrivals in milliseconds
    pub arrival_ms: String,
    /// Time the shop stays open in seconds
    pub open_secs: String,
}

/// A single rejected configuration value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub name: &'static str,
    pub reason: String,
}

impl ConfigIssue {
    fn new(name: &'static str, reason: impl Into<String>) -> Self {
        Self {
            name,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.reason)
    }
}

/// Validated shop configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    pub seats: usize,
    pub barbers: usize,
    pub haircut: Duration,
    pub mean_arrival: Duration,
    pub open_for: Duration,
}

impl ShopConfig {
    pub fn new(seats: usize, haircut: Duration, mean_arrival: Duration, open_for: Duration) -> Self {
        Self {
            seats,
            barbers: DEFAULT_BARBERS,
            haircut,
            mean_arrival,
            open_for,
        }
    }

    pub fn with_barbers(mut self, barbers: usize) -> Self {
        self.barbers = barbers;
        self
    }

    /// Parse raw CLI values, reporting every bad value rather than only the first
    pub fn parse(args: &ShopArgs) -> Result<Self> {
        let mut issues = Vec::new();

        let seats = parse_field::<usize>("seats", &args.seats, &mut issues);
        let haircut_ms = parse_field::<u64>("haircut_ms", &args.haircut_ms, &mut issues);
        let arrival_ms = parse_field::<u64>("arrival_ms", &args.arrival_ms, &mut issues);
        let open_secs = parse_field::<u64>("open_secs", &args.open_secs, &mut issues);

        match (seats, haircut_ms, arrival_ms, open_secs) {
            (Some(seats), Some(haircut_ms), Some(arrival_ms), Some(open_secs)) => {
                let config = Self::new(
                    seats,
                    Duration::from_millis(haircut_ms),
                    Duration::from_millis(arrival_ms),
                    Duration::from_secs(open_secs),
                );
                config.validate()?;
                Ok(config)
            }
            _ => Err(AppError::InvalidArguments(issues)),
        }
    }

    /// Check invariants the types alone cannot express
    pub fn validate(&self) -> Result<()> {
        let mut issues = Vec::new();
        if self.mean_arrival.is_zero() {
            issues.push(ConfigIssue::new(
                "arrival_ms",
                "average arrival time must be positive",
            ));
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(AppError::InvalidArguments(issues))
        }
    }
}

fn parse_field<T>(name: &'static str, raw: &str, issues: &mut Vec<ConfigIssue>) -> Option<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(e) => {
            issues.push(ConfigIssue::new(name, format!("{:?} {}", raw, e)));
            None
        }
    }
}

#[cfg(test)]
#[path = "shop_config_test.rs"]
mod shop_config_test;
