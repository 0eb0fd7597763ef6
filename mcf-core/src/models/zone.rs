/// An identifier for a reserve zone.
///
/// Zone 0 is reserved as the market-wide sentinel: every entity belongs to it
/// in addition to its own tagged zone, so ancillary-service requirements can
/// be expressed per zone and for the market as a whole with one mechanism.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[repr(transparent)]
pub struct ZoneId(u32);

impl ZoneId {
    /// The sentinel zone aggregating all entities regardless of tag
    pub const MARKET_WIDE: ZoneId = ZoneId(0);

    /// Whether this is the market-wide sentinel zone
    pub fn is_market_wide(&self) -> bool {
        *self == Self::MARKET_WIDE
    }
}

impl From<u32> for ZoneId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<ZoneId> for u32 {
    fn from(value: ZoneId) -> Self {
        value.0
    }
}

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_market_wide() {
            write!(f, "market-wide")
        } else {
            self.0.fmt(f)
        }
    }
}
