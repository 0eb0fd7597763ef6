mod bid;
mod curve;
mod generator;
mod map;
mod zone;

pub use bid::{BidCategory, COMMITMENT_GROUP, UnknownCategory};
pub use curve::{CurveError, CurveMode, CurvePoint, OfferCurve};
pub use generator::Generator;
pub use map::Map;
pub use zone::ZoneId;
