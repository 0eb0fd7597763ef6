use std::str::FromStr;
use thiserror::Error;

/// The name of the commitment-status variable group.
///
/// Block bounds scale by this variable when it exists in the model; thermal
/// formulation steps create it and cost builders read it back by this name.
pub const COMMITMENT_GROUP: &str = "commitment";

/// The kinds of curve-bearing market participation the engine formulates.
///
/// All four share one block-building algorithm; a category carries the data
/// that used to be spread across per-type code paths: the objective sign,
/// whether block bounds scale with a commitment variable, and the canonical
/// group names its variables and constraints are registered under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum BidCategory {
    /// Thermal generation offer curves (a cost, scaled by commitment)
    Generation,
    /// Virtual supply bids (a cost)
    Increment,
    /// Virtual demand bids (revenue-like, entered with negative sign)
    Decrement,
    /// Price-sensitive demand curves (revenue-like, entered with negative sign)
    PriceSensitiveDemand,
}

impl BidCategory {
    /// The sign with which this category's cost terms enter the minimized
    /// objective: +1 for cost curves, -1 for revenue-like curves.
    pub fn objective_sign(&self) -> f64 {
        match self {
            BidCategory::Generation | BidCategory::Increment => 1.0,
            BidCategory::Decrement | BidCategory::PriceSensitiveDemand => -1.0,
        }
    }

    /// The commitment group whose variable, when present for an entity and
    /// period, scales this category's block upper bounds.
    pub fn commitment_group(&self) -> Option<&'static str> {
        match self {
            BidCategory::Generation => Some(COMMITMENT_GROUP),
            _ => None,
        }
    }

    /// The name of the pre-existing aggregate variable group this category's
    /// blocks must sum to.
    pub fn aggregate_group(&self) -> &'static str {
        match self {
            BidCategory::Generation => "generation",
            BidCategory::Increment => "increment",
            BidCategory::Decrement => "decrement",
            BidCategory::PriceSensitiveDemand => "demand",
        }
    }

    /// The name under which this category's auxiliary block variables are
    /// registered.
    pub fn block_group(&self) -> &'static str {
        match self {
            BidCategory::Generation => "generation_blocks",
            BidCategory::Increment => "increment_blocks",
            BidCategory::Decrement => "decrement_blocks",
            BidCategory::PriceSensitiveDemand => "demand_blocks",
        }
    }

    /// The name of the linking equality constraint family
    pub fn linking_group(&self) -> &'static str {
        match self {
            BidCategory::Generation => "generation_block_link",
            BidCategory::Increment => "increment_block_link",
            BidCategory::Decrement => "decrement_block_link",
            BidCategory::PriceSensitiveDemand => "demand_block_link",
        }
    }

    /// The name of the block upper-bound constraint family
    pub fn limit_group(&self) -> &'static str {
        match self {
            BidCategory::Generation => "generation_block_limit",
            BidCategory::Increment => "increment_block_limit",
            BidCategory::Decrement => "decrement_block_limit",
            BidCategory::PriceSensitiveDemand => "demand_block_limit",
        }
    }
}

impl FromStr for BidCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "generation" => Ok(BidCategory::Generation),
            "increment" => Ok(BidCategory::Increment),
            "decrement" => Ok(BidCategory::Decrement),
            "demand" | "price_sensitive_demand" => Ok(BidCategory::PriceSensitiveDemand),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// A configuration named a bid category the engine does not recognize
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized bid category `{0}`")]
pub struct UnknownCategory(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signs_partition_the_categories() {
        assert_eq!(BidCategory::Generation.objective_sign(), 1.0);
        assert_eq!(BidCategory::Increment.objective_sign(), 1.0);
        assert_eq!(BidCategory::Decrement.objective_sign(), -1.0);
        assert_eq!(BidCategory::PriceSensitiveDemand.objective_sign(), -1.0);
    }

    #[test]
    fn only_generation_scales_with_commitment() {
        assert_eq!(
            BidCategory::Generation.commitment_group(),
            Some(COMMITMENT_GROUP)
        );
        assert_eq!(BidCategory::Decrement.commitment_group(), None);
    }

    #[test]
    fn parses_known_names() {
        assert_eq!(
            "generation".parse::<BidCategory>(),
            Ok(BidCategory::Generation)
        );
        assert_eq!(
            "price_sensitive_demand".parse::<BidCategory>(),
            Ok(BidCategory::PriceSensitiveDemand)
        );
        assert!("energy_limited_hydro".parse::<BidCategory>().is_err());
    }
}
