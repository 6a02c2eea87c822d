//! The codec between Unix epoch microsecond timestamps and the UUIDv7 bit layout.

#[cfg(not(feature = "std"))]
use core as std;

use std::fmt;

use crate::clock::ClockError;
use crate::entropy::{EntropyError, EntropySource};
use crate::Uuid;

/// Selects how the 80 non-timestamp bits of an encoded identifier are filled.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum RandomPolicy {
    /// Every bit except the fixed version/variant markers is drawn from the entropy source.
    #[default]
    Random,

    /// All non-marker bits are zero, producing the lexicographically smallest identifier for the
    /// timestamp. Useful as a deterministic inclusive lower bound for range comparisons ("all
    /// identifiers generated at or after time T").
    ZeroFloor,
}

/// Encodes a Unix epoch microsecond timestamp into a UUIDv7 value.
///
/// The timestamp is truncated to whole milliseconds (the resolution of the `unix_ts_ms` field)
/// and placed big-endian in the leading 48 bits, so that byte order of identifiers follows
/// chronological order of their timestamps. The trailing 80 bits are filled per `policy`, then
/// the version and variant markers are forced over the high nibble of byte 6 and the top two
/// bits of byte 8.
///
/// # Errors
///
/// Returns [`Error::TimestampOutOfRange`] if the timestamp is negative or its millisecond count
/// does not fit in 48 bits, and [`Error::Entropy`] if the entropy source fails; no identifier is
/// produced and no weaker randomness is substituted.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use uuid7_codec::entropy::with_rand08::Adapter;
/// use uuid7_codec::RandomPolicy;
///
/// let floor = uuid7_codec::encode(1_700_000_000_000_000, RandomPolicy::ZeroFloor, &mut Adapter(OsRng))?;
/// let random = uuid7_codec::encode(1_700_000_000_000_000, RandomPolicy::Random, &mut Adapter(OsRng))?;
/// assert!(floor <= random);
/// # Ok::<(), uuid7_codec::Error>(())
/// ```
pub fn encode(
    unix_ts_us: i64,
    policy: RandomPolicy,
    entropy: &mut impl EntropySource,
) -> Result<Uuid, Error> {
    if unix_ts_us < 0 {
        return Err(Error::TimestampOutOfRange(unix_ts_us));
    }
    let unix_ts_ms = (unix_ts_us / 1000) as u64;
    if unix_ts_ms >= 1 << 48 {
        return Err(Error::TimestampOutOfRange(unix_ts_us));
    }

    let (rand_a, rand_b) = match policy {
        RandomPolicy::ZeroFloor => (0, 0),
        RandomPolicy::Random => {
            let mut bytes = [0u8; 10];
            entropy.fill_bytes(&mut bytes)?;
            (
                ((bytes[0] & 0x0f) as u16) << 8 | bytes[1] as u16,
                u64::from_be_bytes([
                    bytes[2] & 0x3f,
                    bytes[3],
                    bytes[4],
                    bytes[5],
                    bytes[6],
                    bytes[7],
                    bytes[8],
                    bytes[9],
                ]),
            )
        }
    };

    Ok(Uuid::from_fields_v7(unix_ts_ms, rand_a, rand_b))
}

/// Decodes the embedded timestamp of a UUIDv7 value as microseconds since the Unix epoch.
///
/// Reads the leading 48 bits as a big-endian millisecond count and scales to microseconds. The
/// version/variant markers live outside the timestamp field and are not validated: decoding is
/// total over all 128-bit inputs, and an identifier of another version decodes best-effort to
/// whatever its leading bits hold.
pub const fn decode(uuid: &Uuid) -> i64 {
    uuid.unix_ts_ms() as i64 * 1000
}

/// Error reported by the codec and the entry point functions.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The entropy source could not supply random bytes.
    Entropy(EntropyError),

    /// The wall-clock reader failed.
    Clock(ClockError),

    /// The millisecond count of the supplied timestamp (attached, in microseconds) does not fit
    /// in the 48-bit `unix_ts_ms` field.
    TimestampOutOfRange(i64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Entropy(e) => e.fmt(f),
            Error::Clock(e) => e.fmt(f),
            Error::TimestampOutOfRange(ts) => {
                write!(f, "timestamp out of range for 48-bit millisecond field: {}", ts)
            }
        }
    }
}

impl From<EntropyError> for Error {
    fn from(src: EntropyError) -> Self {
        Error::Entropy(src)
    }
}

impl From<ClockError> for Error {
    fn from(src: ClockError) -> Self {
        Error::Clock(src)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Entropy(e) => Some(e),
            Error::Clock(e) => Some(e),
            Error::TimestampOutOfRange(_) => None,
        }
    }
}
