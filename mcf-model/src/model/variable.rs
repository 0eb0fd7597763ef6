/// A handle to a variable owned by a [`Model`](super::Model).
///
/// Handles are plain arena indices: cheap to copy, hashable, and only
/// meaningful to the model that created them.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
#[repr(transparent)]
pub struct VarId(usize);

impl VarId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(&self) -> usize {
        self.0
    }
}

/// The domain of a decision variable
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VarKind {
    /// A real-valued variable
    Continuous,
    /// A 0/1 variable (commitment and startup status)
    Binary,
}

/// The data of a single decision variable: its kind and simple bounds.
///
/// Piecewise block limits are *not* expressed here — they are named
/// constraint rows so that later steps can retrieve them — so auxiliary
/// variables carry only the non-negativity bound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Variable {
    /// Continuous or binary
    pub kind: VarKind,
    /// Lower bound (may be negative infinity)
    pub lower: f64,
    /// Upper bound (may be positive infinity)
    pub upper: f64,
}

impl Variable {
    /// A continuous variable bounded below by zero
    pub fn non_negative() -> Self {
        Self {
            kind: VarKind::Continuous,
            lower: 0.0,
            upper: f64::INFINITY,
        }
    }

    /// A continuous variable with the given bounds
    pub fn continuous(lower: f64, upper: f64) -> Self {
        Self {
            kind: VarKind::Continuous,
            lower,
            upper,
        }
    }

    /// A free continuous variable
    pub fn free() -> Self {
        Self::continuous(f64::NEG_INFINITY, f64::INFINITY)
    }

    /// A 0/1 decision variable
    pub fn binary() -> Self {
        Self {
            kind: VarKind::Binary,
            lower: 0.0,
            upper: 1.0,
        }
    }
}
