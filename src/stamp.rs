use std::time::{Duration, SystemTime, UNIX_EPOCH};

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// The timestamp and nonce for a single request.
///
/// Both values are derived from one reading of the clock, and the same `RequestStamp` is used for
/// the MAC input and for the emitted header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestStamp {
    /// Seconds since the Unix epoch, UTC
    pub ts: u64,
    /// Seconds elapsed since the most recent UTC midnight
    pub nonce: u64,
}

impl RequestStamp {
    /// Stamp for the given time.  Times before the epoch are clamped to the epoch.
    pub fn at(time: SystemTime) -> RequestStamp {
        let since_epoch = time
            .duration_since(UNIX_EPOCH)
            .unwrap_or_else(|_| Duration::from_secs(0));
        RequestStamp::from_ts(since_epoch.as_secs())
    }

    /// Stamp for the current time.
    pub fn now() -> RequestStamp {
        RequestStamp::at(SystemTime::now())
    }

    /// Unix time has no leap seconds, so every UTC midnight is a multiple of 86400.
    pub fn from_ts(ts: u64) -> RequestStamp {
        RequestStamp {
            ts,
            nonce: ts % SECONDS_PER_DAY,
        }
    }
}
