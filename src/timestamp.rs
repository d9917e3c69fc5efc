use core::fmt::Display;

use serde_derive::{Deserialize, Serialize};

/// A chain timestamp, counted in nanoseconds since the UNIX epoch.
///
/// Recorded alongside every consensus snapshot. The gate itself never inspects
/// wall-clock time, so no conversion to a calendar type is provided here.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn from_nanoseconds(nanos: u64) -> Self {
        Self(nanos)
    }

    pub fn nanoseconds(&self) -> u64 {
        self.0
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Timestamp {
    fn from(nanos: u64) -> Self {
        Self(nanos)
    }
}
