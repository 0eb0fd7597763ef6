use mcf_core::models::UnknownCategory;
use std::fmt::Display;
use thiserror::Error;

/// The ways a formulation step can fail.
///
/// Every variant aborts the build immediately: there is no partial
/// formulation to recover, and nothing here is retried. The caller fixes
/// the offending input (curve data or call ordering) and rebuilds from
/// scratch.
#[derive(Debug, Error)]
pub enum FormulationError {
    /// Malformed upstream data or an unrecognized configuration option
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A builder referenced an aggregate variable that does not yet exist
    /// in the model, i.e. the formulation steps ran in the wrong order.
    #[error("no variable in group `{group}` for entity `{entity}`, period {period}")]
    MissingVariable {
        /// The variable group the builder looked in
        group: String,
        /// The entity whose variable was absent
        entity: String,
        /// The period whose variable was absent
        period: usize,
    },
}

impl FormulationError {
    pub(crate) fn missing<E: Display>(group: &str, entity: &E, period: usize) -> Self {
        Self::MissingVariable {
            group: group.to_string(),
            entity: entity.to_string(),
            period,
        }
    }
}

impl From<UnknownCategory> for FormulationError {
    fn from(value: UnknownCategory) -> Self {
        Self::Configuration(value.to_string())
    }
}
