//! Translation between timestamp epoch conventions.
//!
//! The codec in this crate always operates on microseconds since the Unix epoch. Callers that
//! keep timestamps relative to a different origin (e.g. PostgreSQL's 2000-01-01 timestamp types)
//! translate at the boundary through [`Epoch`].

/// Number of microseconds between 2000-01-01 and 1970-01-01 (10957 days).
pub const Y2K_OFFSET_MICROS: i64 = 10_957 * 86_400 * 1_000_000;

/// Identifies the origin a caller's microsecond timestamp is counted from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Epoch {
    /// 1970-01-01T00:00:00Z, the Unix epoch.
    #[default]
    Unix,

    /// 2000-01-01T00:00:00Z, used by hosts such as PostgreSQL for their native timestamp types.
    Y2k,
}

impl Epoch {
    /// Converts a microsecond count relative to this epoch into microseconds since the Unix
    /// epoch.
    ///
    /// Saturates at the bounds of `i64` instead of wrapping; a saturated result sits far outside
    /// the 48-bit millisecond range and is rejected by [`encode`](crate::encode).
    pub const fn to_unix_micros(self, micros: i64) -> i64 {
        match self {
            Epoch::Unix => micros,
            Epoch::Y2k => micros.saturating_add(Y2K_OFFSET_MICROS),
        }
    }

    /// Converts microseconds since the Unix epoch into a microsecond count relative to this
    /// epoch. Inverse of [`to_unix_micros`](Epoch::to_unix_micros) except at the saturated
    /// bounds of `i64`.
    pub const fn from_unix_micros(self, micros: i64) -> i64 {
        match self {
            Epoch::Unix => micros,
            Epoch::Y2k => micros.saturating_sub(Y2K_OFFSET_MICROS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Epoch, Y2K_OFFSET_MICROS};

    /// Holds the fixed offset between the two epoch origins
    #[test]
    fn holds_fixed_offset_between_epoch_origins() {
        assert_eq!(Y2K_OFFSET_MICROS, 946_684_800_000_000);
        assert_eq!(Epoch::Y2k.to_unix_micros(0), Y2K_OFFSET_MICROS);
        assert_eq!(Epoch::Unix.to_unix_micros(0), 0);
    }

    /// Converts symmetrically for both epoch kinds
    #[test]
    fn converts_symmetrically_for_both_epoch_kinds() {
        let cases = [
            0i64,
            1,
            -1,
            1_700_000_000_000_000,
            -946_684_800_000_000,
            2_147_483_647_000_000,
        ];

        for ts in cases {
            for epoch in [Epoch::Unix, Epoch::Y2k] {
                assert_eq!(epoch.from_unix_micros(epoch.to_unix_micros(ts)), ts);
                assert_eq!(epoch.to_unix_micros(epoch.from_unix_micros(ts)), ts);
            }
        }
    }

    /// Saturates instead of wrapping at the bounds of i64
    #[test]
    fn saturates_instead_of_wrapping_at_bounds_of_i64() {
        assert_eq!(Epoch::Y2k.to_unix_micros(i64::MAX), i64::MAX);
        assert_eq!(
            Epoch::Y2k.to_unix_micros(i64::MAX - Y2K_OFFSET_MICROS),
            i64::MAX
        );
        assert_eq!(Epoch::Y2k.from_unix_micros(i64::MIN), i64::MIN);
        assert_eq!(
            Epoch::Y2k.from_unix_micros(i64::MIN + Y2K_OFFSET_MICROS),
            i64::MIN
        );
    }

    /// Maps the millennium boundary between conventions
    #[test]
    fn maps_millennium_boundary_between_conventions() {
        // 2000-01-01T00:00:00Z is zero in the Y2k convention
        assert_eq!(Epoch::Y2k.from_unix_micros(946_684_800_000_000), 0);
        assert_eq!(Epoch::Y2k.to_unix_micros(-946_684_800_000_000), 0);
    }
}
