use mcf_core::models::Map;
use std::hash::Hash;
use tracing::{Level, event};

mod constraint;
mod expr;
mod variable;

pub use constraint::{ConId, Constraint, Relation};
pub use expr::LinExpr;
pub use variable::{VarId, VarKind, Variable};

/// The optimization direction of the shared objective.
///
/// Market-clearing formulations always minimize cost; the accumulator
/// re-asserts this on every mutation so that no step can leave the model
/// in a maximizing state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sense {
    /// Minimize the objective (the only sense this engine produces)
    Minimize,
    /// Maximize the objective
    Maximize,
}

/// The in-memory MILP model that formulation steps build up.
///
/// The model owns every variable and constraint it creates, and registers
/// them under caller-supplied group names so that later steps can retrieve
/// them. Two group shapes exist:
///
/// * *scalar* groups hold one artifact per (entity, period), e.g. the
///   aggregate generation variable `p[e,t]`;
/// * *block* groups hold a ragged list per (entity, period), e.g. the
///   auxiliary variables of a piecewise cost curve.
///
/// Lookups return `Option` handles rather than bare existence booleans, so
/// a step that branches on a structural variant (say, the presence of
/// commitment variables) can use the handle it just probed for.
///
/// The model is the only shared mutable state in a formulation session:
/// steps run sequentially, each mutating it through `&mut` and reading
/// immutable input snapshots. The objective is a single affine expression
/// that grows monotonically; its final value is the sum of every added term
/// regardless of the order in which steps ran.
#[derive(Debug)]
pub struct Model<E: Eq + Hash + Clone> {
    horizon: usize,
    variables: Vec<Variable>,
    constraints: Vec<Constraint>,
    scalar_vars: Map<String, Map<(E, usize), VarId>>,
    block_vars: Map<String, Map<(E, usize), Vec<VarId>>>,
    scalar_cons: Map<String, Map<(E, usize), ConId>>,
    block_cons: Map<String, Map<(E, usize), Vec<ConId>>>,
    objective: LinExpr,
    sense: Sense,
}

impl<E: Eq + Hash + Clone> Model<E> {
    /// Creates an empty model over `horizon` consecutive periods (0-indexed).
    pub fn new(horizon: usize) -> Self {
        Self {
            horizon,
            variables: Vec::new(),
            constraints: Vec::new(),
            scalar_vars: Map::default(),
            block_vars: Map::default(),
            scalar_cons: Map::default(),
            block_cons: Map::default(),
            objective: LinExpr::new(),
            sense: Sense::Minimize,
        }
    }

    /// The number of periods in the model horizon
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// The total number of decision variables created so far
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// The total number of constraints created so far
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// The data of a variable previously created by this model.
    ///
    /// Panics if the handle comes from a different model.
    pub fn variable(&self, id: VarId) -> &Variable {
        &self.variables[id.index()]
    }

    /// The data of a constraint previously created by this model.
    ///
    /// Panics if the handle comes from a different model.
    pub fn constraint(&self, id: ConId) -> &Constraint {
        &self.constraints[id.index()]
    }

    /// Creates a variable and registers it in the named scalar group under
    /// (entity, period). Re-registering the same key overwrites the entry
    /// but never destroys the variable itself.
    pub fn add_scalar_variable(
        &mut self,
        group: &str,
        entity: E,
        period: usize,
        data: Variable,
    ) -> VarId {
        let id = self.push_variable(data);
        self.scalar_vars
            .entry(group.to_string())
            .or_default()
            .insert((entity, period), id);
        id
    }

    /// Creates a variable and appends it to the named block group's ragged
    /// list under (entity, period), returning its handle.
    pub fn add_block_variable(
        &mut self,
        group: &str,
        entity: E,
        period: usize,
        data: Variable,
    ) -> VarId {
        let id = self.push_variable(data);
        self.block_vars
            .entry(group.to_string())
            .or_default()
            .entry((entity, period))
            .or_default()
            .push(id);
        id
    }

    /// Looks up the scalar variable registered for (entity, period) in the
    /// named group, if any.
    pub fn scalar_variable(&self, group: &str, entity: &E, period: usize) -> Option<VarId> {
        self.scalar_vars
            .get(group)?
            .get(&(entity.clone(), period))
            .copied()
    }

    /// Looks up the ragged block variables registered for (entity, period)
    /// in the named group, if any.
    pub fn block_variables(&self, group: &str, entity: &E, period: usize) -> Option<&[VarId]> {
        self.block_vars
            .get(group)?
            .get(&(entity.clone(), period))
            .map(Vec::as_slice)
    }

    /// The full registry of a scalar variable group, if the group exists.
    /// Doubles as the existence probe for structural variants.
    pub fn scalar_group(&self, group: &str) -> Option<&Map<(E, usize), VarId>> {
        self.scalar_vars.get(group)
    }

    /// The full registry of a block variable group, if the group exists.
    pub fn block_group(&self, group: &str) -> Option<&Map<(E, usize), Vec<VarId>>> {
        self.block_vars.get(group)
    }

    /// Creates a constraint and registers it in the named scalar group.
    pub fn add_scalar_constraint(
        &mut self,
        group: &str,
        entity: E,
        period: usize,
        data: Constraint,
    ) -> ConId {
        let id = self.push_constraint(data);
        self.scalar_cons
            .entry(group.to_string())
            .or_default()
            .insert((entity, period), id);
        id
    }

    /// Creates a constraint and appends it to the named block group's ragged
    /// list under (entity, period).
    pub fn add_block_constraint(
        &mut self,
        group: &str,
        entity: E,
        period: usize,
        data: Constraint,
    ) -> ConId {
        let id = self.push_constraint(data);
        self.block_cons
            .entry(group.to_string())
            .or_default()
            .entry((entity, period))
            .or_default()
            .push(id);
        id
    }

    /// Looks up the scalar constraint registered for (entity, period), if any.
    pub fn scalar_constraint(&self, group: &str, entity: &E, period: usize) -> Option<ConId> {
        self.scalar_cons
            .get(group)?
            .get(&(entity.clone(), period))
            .copied()
    }

    /// Looks up the ragged block constraints registered for (entity, period),
    /// if any.
    pub fn block_constraints(&self, group: &str, entity: &E, period: usize) -> Option<&[ConId]> {
        self.block_cons
            .get(group)?
            .get(&(entity.clone(), period))
            .map(Vec::as_slice)
    }

    /// Merges a cost term into the shared objective and re-asserts the
    /// minimize sense.
    ///
    /// Safe to call any number of times, from independent builders, in any
    /// order: the final objective equals the sum of all added expressions
    /// as variable-to-coefficient pairs, regardless of call order. There is
    /// no removal operation.
    pub fn add_objective_term(&mut self, term: LinExpr) {
        event!(
            Level::DEBUG,
            terms = term.len(),
            total = self.objective.len(),
            "accumulating objective term"
        );
        self.objective += term;
        self.sense = Sense::Minimize;
    }

    /// The shared objective accumulated so far
    pub fn objective(&self) -> &LinExpr {
        &self.objective
    }

    /// The optimization sense of the objective
    pub fn sense(&self) -> Sense {
        self.sense
    }

    fn push_variable(&mut self, data: Variable) -> VarId {
        let id = VarId::new(self.variables.len());
        self.variables.push(data);
        id
    }

    fn push_constraint(&mut self, data: Constraint) -> ConId {
        let id = ConId::new(self.constraints.len());
        self.constraints.push(data);
        id
    }
}
