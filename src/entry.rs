//! Entry point functions binding the system clock and OS entropy to the codec

#![cfg(feature = "std")]

use rand::rngs::OsRng;

use crate::clock::{Clock, SystemClock};
use crate::entropy::with_rand08::Adapter;
use crate::{codec, Epoch, Error, RandomPolicy, Uuid};

/// Generates a UUIDv7 object from the current system time.
///
/// Randomness is drawn from the operating system; there is no generator state, so identifiers
/// created within the same millisecond are ordered only by their random bits.
///
/// # Errors
///
/// Fails with [`Error::Clock`] if the system clock cannot be read and [`Error::Entropy`] if the
/// OS random source cannot supply bytes.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid7_codec::generate(Default::default())?;
/// println!("{}", uuid); // e.g., "018bcfe5-6800-7c05-9219-566f82fff672"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
/// # Ok::<(), uuid7_codec::Error>(())
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn generate(policy: RandomPolicy) -> Result<Uuid, Error> {
    codec::encode(SystemClock.unix_ts_us()?, policy, &mut Adapter(OsRng))
}

/// Generates a UUIDv7 object from a caller-supplied timestamp, given as microseconds relative to
/// `epoch`.
///
/// # Errors
///
/// Fails with [`Error::TimestampOutOfRange`] if the timestamp's millisecond count does not fit in
/// 48 bits and [`Error::Entropy`] if the OS random source cannot supply bytes.
///
/// # Examples
///
/// ```rust
/// use uuid7_codec::{Epoch, RandomPolicy};
///
/// // lower bound of all identifiers created at or after 2023-11-14T22:13:20Z
/// let floor =
///     uuid7_codec::from_timestamp(1_700_000_000_000_000, Epoch::Unix, RandomPolicy::ZeroFloor)?;
/// assert_eq!(floor.to_string(), "018bcfe5-6800-7000-8000-000000000000");
/// # Ok::<(), uuid7_codec::Error>(())
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn from_timestamp(micros: i64, epoch: Epoch, policy: RandomPolicy) -> Result<Uuid, Error> {
    codec::encode(epoch.to_unix_micros(micros), policy, &mut Adapter(OsRng))
}

/// Extracts the embedded timestamp of a UUIDv7 object as microseconds relative to `epoch`.
///
/// # Examples
///
/// ```rust
/// use uuid7_codec::{Epoch, Uuid};
///
/// let uuid = "018bcfe5-6800-7c05-9219-566f82fff672".parse::<Uuid>()?;
/// assert_eq!(uuid7_codec::extract_timestamp(&uuid, Epoch::Unix), 1_700_000_000_000_000);
/// # Ok::<(), uuid7_codec::ParseError>(())
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn extract_timestamp(uuid: &Uuid, epoch: Epoch) -> i64 {
    epoch.from_unix_micros(codec::decode(uuid))
}
