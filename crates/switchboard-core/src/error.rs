use thiserror::Error;

/// Errors surfaced by arguments and variable wrappers.
///
/// A type mismatch between an input and an argument is not an error:
/// it is reported as `applies() == false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// The two operands have no ordering relationship.
    #[error("cannot compare {left} with {right}")]
    Uncomparable { left: String, right: String },

    #[error("argument {argument} has no variable named '{name}'")]
    UnknownVariable { argument: &'static str, name: String },
}

impl ArgumentError {
    pub fn uncomparable(left: impl std::fmt::Debug, right: impl std::fmt::Debug) -> Self {
        let err = Self::Uncomparable {
            left: format!("{left:?}"),
            right: format!("{right:?}"),
        };
        tracing::debug!(error = %err, "uncomparable operands");
        err
    }
}
