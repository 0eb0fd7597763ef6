use mcf_core::models::{Map, ZoneId};
use std::hash::Hash;

/// Zone membership lists keyed by zone id.
///
/// The market-wide sentinel entry holds every entity regardless of tag;
/// every other entry holds only the entities tagged exactly with that zone.
/// Each tagged entity therefore has exactly two memberships: its own zone
/// and the market-wide zone.
pub type ZoneMap<E> = Map<ZoneId, Vec<E>>;

/// Groups entities by reserve-zone membership.
///
/// Untagged entities (and entities tagged with the sentinel itself) appear
/// only in the market-wide list. The market-wide entry always exists, even
/// when there are no entities at all, and is the first entry in iteration
/// order.
pub fn zone_membership<E: Eq + Hash + Clone>(
    entities: impl IntoIterator<Item = (E, Option<ZoneId>)>,
) -> ZoneMap<E> {
    let mut market = Vec::new();
    let mut tagged = ZoneMap::default();

    for (entity, tag) in entities {
        if let Some(zone) = tag
            && !zone.is_market_wide()
        {
            tagged.entry(zone).or_default().push(entity.clone());
        }
        market.push(entity);
    }

    let mut zones = ZoneMap::default();
    zones.insert(ZoneId::MARKET_WIDE, market);
    zones.extend(tagged);
    zones
}
