mod blocks;
mod cost;
mod error;
mod thermal;
mod zones;

pub use blocks::{BlockProperties, BlockSet, add_block_variables, block_properties};
pub use cost::{block_cost_expression, commitment_cost_expression};
pub use error::FormulationError;
pub use thermal::{
    CAPACITY_MAX_GROUP, CAPACITY_MIN_GROUP, MIN_DOWN_GROUP, MIN_UP_GROUP, RAMP_DOWN_GROUP,
    RAMP_UP_GROUP, STARTUP_GROUP, STARTUP_LINK_GROUP, add_capacity_constraints,
    add_commitment_variables, add_min_up_down_constraints, add_ramp_constraints,
};
pub use zones::{ZoneMap, zone_membership};
