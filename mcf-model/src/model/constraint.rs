use super::LinExpr;

/// A handle to a constraint owned by a [`Model`](super::Model).
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ConId(usize);

impl ConId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(&self) -> usize {
        self.0
    }
}

/// The relation between a constraint's expression and its right-hand side
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    /// expr == rhs
    Equal,
    /// expr <= rhs
    LessEqual,
    /// expr >= rhs
    GreaterEqual,
}

/// A single linear constraint row: `expr <relation> rhs`.
///
/// Any constant inside the expression is folded into the comparison by the
/// model consumer; builders in this crate keep expression constants at zero
/// and put all constant data in `rhs`.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint {
    /// The linear left-hand side
    pub expr: LinExpr,
    /// How the expression compares to `rhs`
    pub relation: Relation,
    /// The right-hand side constant
    pub rhs: f64,
}

impl Constraint {
    /// An equality row `expr == rhs`
    pub fn equality(expr: LinExpr, rhs: f64) -> Self {
        Self {
            expr,
            relation: Relation::Equal,
            rhs,
        }
    }

    /// An upper-bound row `expr <= rhs`
    pub fn at_most(expr: LinExpr, rhs: f64) -> Self {
        Self {
            expr,
            relation: Relation::LessEqual,
            rhs,
        }
    }

    /// A lower-bound row `expr >= rhs`
    pub fn at_least(expr: LinExpr, rhs: f64) -> Self {
        Self {
            expr,
            relation: Relation::GreaterEqual,
            rhs,
        }
    }
}
