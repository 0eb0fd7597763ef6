/**
 * The in-memory MILP model: variables, named groups, constraints, and the
 * single shared objective that formulation steps accumulate into.
 */
mod model;
pub use model::*;

/**
 * The formulation steps that turn market data into model artifacts: the
 * piecewise block engine, cost term builders, zone aggregation, and the
 * thermal unit-commitment constraints.
 */
mod formulation;
pub use formulation::*;
