use super::ZoneId;

/// Static attributes of a thermal generator, as resolved by the dataset layer.
///
/// Ramp limits, minimum up/down times, and the initial state arrive here as
/// already-resolved values; the formulation engine consumes them without
/// further interpretation. Durations are expressed in whole periods of the
/// model horizon.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Generator {
    /// Minimum stable output when committed (MW)
    pub min_power: f64,
    /// Maximum output (MW)
    pub max_power: f64,
    /// Maximum upward ramp between consecutive periods (MW)
    pub ramp_up: f64,
    /// Maximum downward ramp between consecutive periods (MW)
    pub ramp_down: f64,
    /// Minimum number of periods the unit must stay on once started
    pub min_up_time: usize,
    /// Minimum number of periods the unit must stay off once stopped
    pub min_down_time: usize,
    /// Whether the unit was committed in the period before the horizon
    pub initially_on: bool,
    /// Output in the period before the horizon (MW), seeding ramp limits
    pub initial_output: f64,
    /// Cost per period of being committed, independent of output ($)
    pub no_load_cost: f64,
    /// Cost incurred in any period the unit starts up ($)
    pub startup_cost: f64,
    /// Reserve zone this unit is tagged with, if any
    pub zone: Option<ZoneId>,
}
