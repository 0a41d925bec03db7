use chrono::{DateTime, Utc};

#[macro_export]
macro_rules! now {
    () => {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or(std::time::Duration::default())
            .as_millis()
    };
}

/// Epoch milliseconds of a timestamp; instants before the epoch clamp to 0.
pub fn epoch_millis(timestamp: &DateTime<Utc>) -> u128 {
    timestamp.timestamp_millis().max(0) as u128
}

pub fn nanos_to_millis(nanos: u64) -> u128 {
    (nanos / 1_000_000) as u128
}
