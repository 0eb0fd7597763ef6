use super::VarId;
use mcf_core::models::Map;

/// An affine expression over model variables.
///
/// Coefficients accumulate per variable, so merging two expressions that
/// mention the same variable sums their contributions. Equality compares
/// the variable-to-coefficient pairs (and the constant) irrespective of
/// insertion order, which is exactly the notion of equality the objective
/// accumulator's order-independence guarantee is stated in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinExpr {
    terms: Map<VarId>,
    constant: f64,
}

impl LinExpr {
    /// An empty expression
    pub fn new() -> Self {
        Self::default()
    }

    /// A single-term expression `coefficient * var`
    pub fn term(var: VarId, coefficient: f64) -> Self {
        let mut expr = Self::new();
        expr.add_term(var, coefficient);
        expr
    }

    /// Adds `coefficient * var`, accumulating with any existing term
    pub fn add_term(&mut self, var: VarId, coefficient: f64) {
        if coefficient != 0.0 {
            *self.terms.entry(var).or_default() += coefficient;
        }
    }

    /// Adds a constant offset
    pub fn add_constant(&mut self, value: f64) {
        self.constant += value;
    }

    /// The accumulated coefficient of a variable (zero if absent)
    pub fn coefficient(&self, var: VarId) -> f64 {
        self.terms.get(&var).copied().unwrap_or(0.0)
    }

    /// The constant offset
    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// The number of variables with a recorded coefficient
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the expression has no terms and no constant
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty() && self.constant == 0.0
    }

    /// Iterates over the (variable, coefficient) pairs
    pub fn terms(&self) -> impl Iterator<Item = (VarId, f64)> + '_ {
        self.terms.iter().map(|(&var, &coefficient)| (var, coefficient))
    }

    /// Multiplies every coefficient and the constant by `factor`
    pub fn scaled(mut self, factor: f64) -> Self {
        for coefficient in self.terms.values_mut() {
            *coefficient *= factor;
        }
        self.constant *= factor;
        self
    }
}

impl std::ops::AddAssign for LinExpr {
    fn add_assign(&mut self, rhs: Self) {
        for (var, coefficient) in rhs.terms {
            self.add_term(var, coefficient);
        }
        self.constant += rhs.constant;
    }
}

impl FromIterator<(VarId, f64)> for LinExpr {
    fn from_iter<I: IntoIterator<Item = (VarId, f64)>>(iter: I) -> Self {
        let mut expr = Self::new();
        for (var, coefficient) in iter {
            expr.add_term(var, coefficient);
        }
        expr
    }
}
