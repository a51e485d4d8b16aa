// Shop constants (no magic values)

use std::time::Duration;

/// Name used when the shop has a single barber; numbered otherwise
pub const DEFAULT_BARBER_NAME: &str = "Barber";

/// Identifier given to the first customer of a run
pub const FIRST_CUSTOMER_ID: u64 = 1;

/// Name for the barber at `index` (0-based) out of `total`
pub fn barber_name(index: usize, total: usize) -> String {
    if total == 1 {
        DEFAULT_BARBER_NAME.to_string()
    } else {
        format!("{} {}", DEFAULT_BARBER_NAME, index + 1)
    }
}

/// Whole milliseconds for log fields, saturating instead of truncating
pub fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
