//! The entropy source capability used for the random portion of generated identifiers.

#[cfg(not(feature = "std"))]
use core as std;

use std::fmt;

pub mod with_rand08;

/// A source of cryptographically strong random bytes.
///
/// The random bits of an identifier double as its uniqueness insurance across concurrent
/// generators with no coordination, so implementations must draw from a cryptographically secure
/// generator, not a general-purpose pseudo-random one. A failing source must report
/// [`EntropyError`] rather than fall back to weaker randomness.
///
/// The trait exists as a seam between the codec logic and the way randomness is obtained:
/// production code wraps an OS-backed generator through [`with_rand08::Adapter`], while tests
/// substitute fixed byte sequences.
///
/// # Examples
///
/// ```rust
/// use uuid7_codec::entropy::{EntropyError, EntropySource};
/// use uuid7_codec::RandomPolicy;
///
/// struct Fixed(u8);
///
/// impl EntropySource for Fixed {
///     fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
///         dest.fill(self.0);
///         Ok(())
///     }
/// }
///
/// let uuid = uuid7_codec::encode(0, RandomPolicy::Random, &mut Fixed(0xff))?;
/// assert_eq!(uuid.to_string(), "00000000-0000-7fff-bfff-ffffffffffff");
/// # Ok::<(), uuid7_codec::Error>(())
/// ```
pub trait EntropySource {
    /// Fills `dest` with random data, or fails if the underlying source cannot supply bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

/// Error reported when an entropy source cannot supply random bytes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct EntropyError {}

impl fmt::Display for EntropyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not generate random values")
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for EntropyError {}
