use super::{BlockProperties, FormulationError, thermal::STARTUP_GROUP};
use crate::{LinExpr, Model};
use mcf_core::models::{BidCategory, COMMITMENT_GROUP, Generator, Map};
use std::fmt::Display;
use std::hash::Hash;

/// Builds the signed variable-cost expression for a bid category:
/// `sign * Σ price[e,t,q] * block[e,t,q]`.
///
/// The sum ranges only over each entity's actual block count per period,
/// pairing the registered block variables with the block prices they were
/// built from. The category's sign lets one builder serve both cost curves
/// (generation, increments: +1) and revenue-like curves (decrements,
/// price-sensitive demand: -1).
///
/// Fails if the category's block variables have not been created yet.
pub fn block_cost_expression<E: Eq + Hash + Clone + Display>(
    model: &Model<E>,
    category: BidCategory,
    blocks: &BlockProperties<E>,
) -> Result<LinExpr, FormulationError> {
    let sign = category.objective_sign();
    let mut expr = LinExpr::new();

    for ((entity, period), set) in blocks {
        let aux = model
            .block_variables(category.block_group(), entity, *period)
            .ok_or_else(|| FormulationError::missing(category.block_group(), entity, *period))?;

        for (&var, &price) in aux.iter().zip(&set.prices) {
            expr.add_term(var, sign * price);
        }
    }

    Ok(expr)
}

/// Builds the commitment-dependent cost expression for thermal units:
/// `Σ no_load * u[e,t] + startup * v[e,t]`.
///
/// Requires the commitment and startup variables created by
/// [`add_commitment_variables`](super::add_commitment_variables).
pub fn commitment_cost_expression<E: Eq + Hash + Clone + Display>(
    model: &Model<E>,
    units: &Map<E, Generator>,
) -> Result<LinExpr, FormulationError> {
    let mut expr = LinExpr::new();

    for (entity, unit) in units {
        for period in 0..model.horizon() {
            let status = model
                .scalar_variable(COMMITMENT_GROUP, entity, period)
                .ok_or_else(|| FormulationError::missing(COMMITMENT_GROUP, entity, period))?;
            let start = model
                .scalar_variable(STARTUP_GROUP, entity, period)
                .ok_or_else(|| FormulationError::missing(STARTUP_GROUP, entity, period))?;

            expr.add_term(status, unit.no_load_cost);
            expr.add_term(start, unit.startup_cost);
        }
    }

    Ok(expr)
}
