//! Integration with `rand` (v0.8) crate.

use super::{EntropyError, EntropySource};
use rand::RngCore;

/// An adapter that implements [`EntropySource`] for [`RngCore`] types.
///
/// The adapter routes through [`RngCore::try_fill_bytes`] so that a failing generator (e.g.
/// [`OsRng`](rand::rngs::OsRng) when the OS random device is unavailable) surfaces as an
/// [`EntropyError`] instead of panicking.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use uuid7_codec::entropy::with_rand08::Adapter;
/// use uuid7_codec::RandomPolicy;
///
/// let uuid = uuid7_codec::encode(1_700_000_000_000_000, RandomPolicy::Random, &mut Adapter(OsRng))?;
/// assert_eq!(uuid.version(), Some(7));
/// # Ok::<(), uuid7_codec::Error>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> EntropySource for Adapter<T> {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.0.try_fill_bytes(dest).map_err(|_| EntropyError {})
    }
}
