use super::FormulationError;
use crate::{Constraint, LinExpr, Model, Variable};
use mcf_core::models::{BidCategory, COMMITMENT_GROUP, Generator, Map};
use std::fmt::Display;
use std::hash::Hash;
use tracing::{Level, event};

/// The startup-indicator variable group
pub const STARTUP_GROUP: &str = "startup";
/// The startup linkage constraint family
pub const STARTUP_LINK_GROUP: &str = "startup_link";
/// The minimum-output constraint family (`pmin * u <= p`)
pub const CAPACITY_MIN_GROUP: &str = "capacity_min";
/// The maximum-output constraint family (`p <= pmax * u`)
pub const CAPACITY_MAX_GROUP: &str = "capacity_max";
/// The upward ramp constraint family
pub const RAMP_UP_GROUP: &str = "ramp_up";
/// The downward ramp constraint family
pub const RAMP_DOWN_GROUP: &str = "ramp_down";
/// The minimum up-time constraint family
pub const MIN_UP_GROUP: &str = "min_up";
/// The minimum down-time constraint family
pub const MIN_DOWN_GROUP: &str = "min_down";

fn initial_status(unit: &Generator) -> f64 {
    if unit.initially_on { 1.0 } else { 0.0 }
}

/// Creates the binary commitment and startup variables for every unit and
/// period, plus the startup linkage rows `u[t] - u[t-1] - v[t] <= 0`
/// (seeded by the unit's initial status at t = 0).
///
/// The linkage is an inequality: `v` is only forced up when the unit
/// actually transitions from off to on, and the startup cost in the
/// objective keeps it tight at the optimum.
pub fn add_commitment_variables<E: Eq + Hash + Clone>(
    model: &mut Model<E>,
    units: &Map<E, Generator>,
) {
    for (entity, unit) in units {
        for period in 0..model.horizon() {
            let status = model.add_scalar_variable(
                COMMITMENT_GROUP,
                entity.clone(),
                period,
                Variable::binary(),
            );
            let start =
                model.add_scalar_variable(STARTUP_GROUP, entity.clone(), period, Variable::binary());

            let mut expr = LinExpr::term(status, 1.0);
            expr.add_term(start, -1.0);
            let rhs = if period == 0 {
                initial_status(unit)
            } else {
                // u[t] - u[t-1] - v[t] <= 0; the lookup cannot fail, we just
                // created the previous period's status in this same loop.
                if let Some(previous) = model.scalar_variable(COMMITMENT_GROUP, entity, period - 1)
                {
                    expr.add_term(previous, -1.0);
                }
                0.0
            };
            model.add_scalar_constraint(
                STARTUP_LINK_GROUP,
                entity.clone(),
                period,
                Constraint::at_most(expr, rhs),
            );
        }
    }

    event!(
        Level::DEBUG,
        units = units.len(),
        periods = model.horizon(),
        "added commitment and startup variables"
    );
}

/// Ties each unit's aggregate generation to its commitment status:
/// `pmin * u <= p <= pmax * u`.
///
/// Fails if the generation or commitment variables are absent.
pub fn add_capacity_constraints<E: Eq + Hash + Clone + Display>(
    model: &mut Model<E>,
    units: &Map<E, Generator>,
) -> Result<(), FormulationError> {
    let generation = BidCategory::Generation.aggregate_group();

    for (entity, unit) in units {
        for period in 0..model.horizon() {
            let power = model
                .scalar_variable(generation, entity, period)
                .ok_or_else(|| FormulationError::missing(generation, entity, period))?;
            let status = model
                .scalar_variable(COMMITMENT_GROUP, entity, period)
                .ok_or_else(|| FormulationError::missing(COMMITMENT_GROUP, entity, period))?;

            // p - pmax*u <= 0
            let mut upper = LinExpr::term(power, 1.0);
            upper.add_term(status, -unit.max_power);
            model.add_scalar_constraint(
                CAPACITY_MAX_GROUP,
                entity.clone(),
                period,
                Constraint::at_most(upper, 0.0),
            );

            // pmin*u - p <= 0
            let mut lower = LinExpr::term(status, unit.min_power);
            lower.add_term(power, -1.0);
            model.add_scalar_constraint(
                CAPACITY_MIN_GROUP,
                entity.clone(),
                period,
                Constraint::at_most(lower, 0.0),
            );
        }
    }

    Ok(())
}

/// Limits each unit's output change between consecutive periods to its
/// resolved ramp rates, seeding t = 0 with the initial output.
pub fn add_ramp_constraints<E: Eq + Hash + Clone + Display>(
    model: &mut Model<E>,
    units: &Map<E, Generator>,
) -> Result<(), FormulationError> {
    let generation = BidCategory::Generation.aggregate_group();

    for (entity, unit) in units {
        for period in 0..model.horizon() {
            let power = model
                .scalar_variable(generation, entity, period)
                .ok_or_else(|| FormulationError::missing(generation, entity, period))?;

            let (mut up, mut down) = (LinExpr::term(power, 1.0), LinExpr::term(power, -1.0));
            let (up_rhs, down_rhs) = if period == 0 {
                (
                    unit.ramp_up + unit.initial_output,
                    unit.ramp_down - unit.initial_output,
                )
            } else {
                let previous = model
                    .scalar_variable(generation, entity, period - 1)
                    .ok_or_else(|| FormulationError::missing(generation, entity, period - 1))?;
                up.add_term(previous, -1.0);
                down.add_term(previous, 1.0);
                (unit.ramp_up, unit.ramp_down)
            };

            model.add_scalar_constraint(
                RAMP_UP_GROUP,
                entity.clone(),
                period,
                Constraint::at_most(up, up_rhs),
            );
            model.add_scalar_constraint(
                RAMP_DOWN_GROUP,
                entity.clone(),
                period,
                Constraint::at_most(down, down_rhs),
            );
        }
    }

    Ok(())
}

/// Enforces minimum up and down times from the units' resolved durations.
///
/// Up-time: a startup at t keeps the unit on for the following window,
/// `Σ u[tau] >= w * v[t]` over `tau in [t, t+min_up)` clipped to the
/// horizon, with `w` the clipped window length. Down-time uses the implied
/// shutdown indicator `s[t] = v[t] - u[t] + u[t-1]` and requires
/// `Σ (1 - u[tau]) >= w * s[t]` over the clipped down window. Durations of
/// one period or less need no rows.
pub fn add_min_up_down_constraints<E: Eq + Hash + Clone + Display>(
    model: &mut Model<E>,
    units: &Map<E, Generator>,
) -> Result<(), FormulationError> {
    for (entity, unit) in units {
        for period in 0..model.horizon() {
            let start = model
                .scalar_variable(STARTUP_GROUP, entity, period)
                .ok_or_else(|| FormulationError::missing(STARTUP_GROUP, entity, period))?;
            let status = model
                .scalar_variable(COMMITMENT_GROUP, entity, period)
                .ok_or_else(|| FormulationError::missing(COMMITMENT_GROUP, entity, period))?;

            if unit.min_up_time > 1 {
                let window = unit.min_up_time.min(model.horizon() - period);
                // sum(u[tau]) - w*v[t] >= 0
                let mut expr = LinExpr::term(start, -(window as f64));
                for tau in period..period + window {
                    let u = model
                        .scalar_variable(COMMITMENT_GROUP, entity, tau)
                        .ok_or_else(|| FormulationError::missing(COMMITMENT_GROUP, entity, tau))?;
                    expr.add_term(u, 1.0);
                }
                model.add_scalar_constraint(
                    MIN_UP_GROUP,
                    entity.clone(),
                    period,
                    Constraint::at_least(expr, 0.0),
                );
            }

            if unit.min_down_time > 1 {
                let window = unit.min_down_time.min(model.horizon() - period);
                let w = window as f64;
                // sum(u[tau]) + w*(v[t] - u[t] + u[t-1]) <= w
                let mut expr = LinExpr::term(start, w);
                expr.add_term(status, -w);
                let mut rhs = w;
                if period == 0 {
                    rhs -= w * initial_status(unit);
                } else {
                    let previous = model
                        .scalar_variable(COMMITMENT_GROUP, entity, period - 1)
                        .ok_or_else(|| {
                            FormulationError::missing(COMMITMENT_GROUP, entity, period - 1)
                        })?;
                    expr.add_term(previous, w);
                }
                for tau in period..period + window {
                    let u = model
                        .scalar_variable(COMMITMENT_GROUP, entity, tau)
                        .ok_or_else(|| FormulationError::missing(COMMITMENT_GROUP, entity, tau))?;
                    expr.add_term(u, 1.0);
                }
                model.add_scalar_constraint(
                    MIN_DOWN_GROUP,
                    entity.clone(),
                    period,
                    Constraint::at_most(expr, rhs),
                );
            }
        }
    }

    Ok(())
}
