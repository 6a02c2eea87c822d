//! A codec between timestamps and UUID version 7 identifiers
//!
//! ```rust
//! let uuid = uuid7_codec::generate(Default::default())?;
//! println!("{}", uuid); // e.g., "018bcfe5-6800-7c05-9219-566f82fff672"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//! # Ok::<(), uuid7_codec::Error>(())
//! ```
//!
//! This crate converts between a microsecond-resolution timestamp and the UUIDv7 layout defined
//! by [RFC 9562]: the embedded millisecond timestamp occupies the most significant 48 bits, so
//! byte-lexicographic comparison of identifiers equals chronological comparison of their
//! timestamps. Ties within the same millisecond are broken only by random bits; this crate keeps
//! no counter and makes no monotonicity promise at sub-millisecond scale.
//!
//! [RFC 9562]: https://www.rfc-editor.org/rfc/rfc9562
//!
//! # Field and bit layout
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |        rand_a         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                          rand_b                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 48-bit `unix_ts_ms` field is dedicated to the Unix timestamp in milliseconds.
//! - The 4-bit `ver` field is set at `0111`.
//! - The 2-bit `var` field is set at `10`.
//! - The 12-bit `rand_a` and 62-bit `rand_b` fields are filled with cryptographically strong
//!   random bits, or with zeros under the [`RandomPolicy::ZeroFloor`] policy, which yields the
//!   smallest possible identifier for a given timestamp (useful as an inclusive lower bound in
//!   range queries over identifier-keyed data).
//!
//! # Timestamps and epochs
//!
//! Timestamps cross the API as `i64` microsecond counts. Two epoch conventions are supported:
//! [`Epoch::Unix`] (1970-01-01) and [`Epoch::Y2k`] (2000-01-01, the convention used by hosts such
//! as PostgreSQL for their native timestamp types). The codec itself always operates on Unix
//! epoch microseconds; [`Epoch`] translates at the boundary.
//!
//! ```rust
//! use uuid7_codec::{Epoch, RandomPolicy};
//!
//! // 2023-11-14T22:13:20Z as Unix epoch microseconds
//! let uuid =
//!     uuid7_codec::from_timestamp(1_700_000_000_000_000, Epoch::Unix, RandomPolicy::ZeroFloor)?;
//! assert_eq!(uuid.to_string(), "018bcfe5-6800-7000-8000-000000000000");
//! assert_eq!(uuid7_codec::extract_timestamp(&uuid, Epoch::Unix), 1_700_000_000_000_000);
//! # Ok::<(), uuid7_codec::Error>(())
//! ```
//!
//! # Custom entropy and clock sources
//!
//! The entry point functions read `std::time::SystemTime` and draw randomness from the operating
//! system. Both dependencies are capability traits ([`clock::Clock`] and
//! [`entropy::EntropySource`]) that can be substituted, e.g. with fixed byte sequences for
//! deterministic tests, without touching the codec logic in [`codec`].

#![cfg_attr(not(feature = "std"), no_std)]

mod id;
pub use id::{ParseError, Uuid, Variant};

pub mod clock;
pub mod codec;
pub mod entropy;
pub mod epoch;

#[doc(inline)]
pub use codec::{decode, encode, Error, RandomPolicy};
pub use epoch::Epoch;

mod entry;
#[cfg(feature = "std")]
pub use entry::{extract_timestamp, from_timestamp, generate};
