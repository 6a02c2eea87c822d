//! The wall-clock capability used by the generate-from-now entry point.

#[cfg(not(feature = "std"))]
use core as std;

use std::fmt;

/// A reader of the current wall-clock time.
///
/// Implementations return microseconds since the Unix epoch with at least millisecond resolution;
/// the codec truncates to whole milliseconds anyway. A failing reader must report [`ClockError`]
/// rather than substitute a default time.
pub trait Clock {
    /// Returns the current time as microseconds since the Unix epoch.
    fn unix_ts_us(&mut self) -> Result<i64, ClockError>;
}

/// Error reported when the wall-clock reader cannot produce a usable reading.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ClockError {}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not read the system clock")
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for ClockError {}

/// The system clock, read through [`std::time::SystemTime`].
///
/// Fails if the clock reads before the Unix epoch or past the microsecond range of `i64`.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn unix_ts_us(&mut self) -> Result<i64, ClockError> {
        use std::time;
        let elapsed = time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .map_err(|_| ClockError {})?;
        i64::try_from(elapsed.as_micros()).map_err(|_| ClockError {})
    }
}
