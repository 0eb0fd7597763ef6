use super::FormulationError;
use crate::{Constraint, LinExpr, Model, Variable};
use mcf_core::models::{BidCategory, CurveMode, Map, OfferCurve};
use std::fmt::Display;
use std::hash::Hash;
use tracing::{Level, event};

/// The derived block structure of one curve: parallel per-block prices and
/// non-negative MW limits.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockSet {
    /// Marginal price of each block ($/MWh)
    pub prices: Vec<f64>,
    /// MW capacity of each block
    pub limits: Vec<f64>,
}

impl BlockSet {
    /// The number of blocks
    pub fn len(&self) -> usize {
        self.limits.len()
    }

    /// Whether the set has no blocks
    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }
}

/// Block structures keyed by (entity, period).
///
/// Block counts are ragged: different entities and different periods may
/// carry different numbers of blocks, and a missing key simply means that
/// entity offered no curve that period.
pub type BlockProperties<E> = Map<(E, usize), BlockSet>;

/// Converts raw per-entity, per-period curves into block prices and limits.
///
/// Prices are taken from each point directly. In cumulative mode, a block's
/// limit is its raw quantity minus the preceding block's raw quantity; the
/// difference runs in descending block order so that each subtraction reads
/// the original value of its predecessor, not an already-differenced one.
/// In block mode the quantities are used as limits with no differencing.
/// A single-block curve needs no differencing in either mode.
///
/// A negative derived limit means the cumulative quantities were not
/// non-decreasing; this is malformed upstream data and fails fast.
pub fn block_properties<E: Eq + Hash + Clone + Display>(
    curves: &Map<(E, usize), OfferCurve>,
) -> Result<BlockProperties<E>, FormulationError> {
    let mut properties = BlockProperties::default();

    for ((entity, period), curve) in curves {
        let prices = curve.points().iter().map(|point| point.price).collect();
        let mut limits: Vec<f64> = curve.points().iter().map(|point| point.quantity).collect();

        if curve.mode() == CurveMode::Cumulative {
            // Backward, in-place: limits[q-1] must still hold the raw
            // cumulative quantity when limits[q] consumes it.
            for q in (1..limits.len()).rev() {
                limits[q] -= limits[q - 1];
            }
        }

        for (q, &limit) in limits.iter().enumerate() {
            if limit < 0.0 {
                return Err(FormulationError::Configuration(format!(
                    "negative block limit {limit} (block {q}, entity `{entity}`, period {period}): \
                     cumulative quantities must be non-decreasing"
                )));
            }
        }

        properties.insert((entity.clone(), *period), BlockSet { prices, limits });
    }

    Ok(properties)
}

/// Creates the ragged auxiliary block variables for a bid category, along
/// with their linking and limit constraints.
///
/// For every (entity, period) with a block set, this step:
///
/// 1. creates one non-negative continuous variable per block, registered
///    under the category's block group;
/// 2. adds the linking equality `aggregate = Σ blocks` against the
///    pre-existing aggregate variable, failing with
///    [`FormulationError::MissingVariable`] if that variable is absent;
/// 3. adds one upper-bound row per block: `p_aux <= L * commitment` when a
///    commitment variable exists in the model for that entity and period,
///    otherwise the static `p_aux <= L`.
///
/// Both constraint families are registered under the category's linking and
/// limit group names and can be retrieved afterwards.
///
/// No ordering constraint ties cheaper blocks to dispatch first: because
/// block prices are expected non-decreasing (merit order) and the objective
/// minimizes cost, an optimal LP solution fills lower-index blocks before
/// higher-index ones on its own. Callers supplying non-monotonic prices get
/// a feasible but economically meaningless solution.
pub fn add_block_variables<E: Eq + Hash + Clone + Display>(
    model: &mut Model<E>,
    category: BidCategory,
    entities: &[E],
    blocks: &BlockProperties<E>,
) -> Result<(), FormulationError> {
    let aggregate_group = category.aggregate_group();
    let mut variables = 0usize;
    let mut rows = 0usize;

    for entity in entities {
        for period in 0..model.horizon() {
            let Some(set) = blocks.get(&(entity.clone(), period)) else {
                continue;
            };

            let aggregate = model
                .scalar_variable(aggregate_group, entity, period)
                .ok_or_else(|| FormulationError::missing(aggregate_group, entity, period))?;

            let commitment = category
                .commitment_group()
                .and_then(|group| model.scalar_variable(group, entity, period));

            let mut link = LinExpr::term(aggregate, 1.0);
            for &limit in &set.limits {
                let aux = model.add_block_variable(
                    category.block_group(),
                    entity.clone(),
                    period,
                    Variable::non_negative(),
                );
                link.add_term(aux, -1.0);

                let bound = match commitment {
                    // p_aux - L*u <= 0
                    Some(status) => {
                        let mut expr = LinExpr::term(aux, 1.0);
                        expr.add_term(status, -limit);
                        Constraint::at_most(expr, 0.0)
                    }
                    // p_aux <= L
                    None => Constraint::at_most(LinExpr::term(aux, 1.0), limit),
                };
                model.add_block_constraint(category.limit_group(), entity.clone(), period, bound);

                variables += 1;
                rows += 1;
            }

            model.add_scalar_constraint(
                category.linking_group(),
                entity.clone(),
                period,
                Constraint::equality(link, 0.0),
            );
            rows += 1;
        }
    }

    event!(
        Level::DEBUG,
        category = ?category,
        variables,
        constraints = rows,
        "added block variables"
    );

    Ok(())
}
