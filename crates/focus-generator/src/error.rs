//! Error type for generation.

use focus_core::ConfigError;

/// Error type for dataset generation.
///
/// Configuration problems are caller mistakes and fail before any work
/// begins; the other variants indicate a gap in the engine's own data
/// tables or unit ordering and are propagated rather than papered over
/// with placeholder values.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Malformed generation request
    #[error("invalid generation request: {0}")]
    Config(#[from] ConfigError),

    /// A generator unit ran before a column it depends on was populated
    #[error("cannot generate {column}: dependency {needs} has not been generated")]
    MissingDependency {
        column: &'static str,
        needs: &'static str,
    },

    /// An identity pool was built empty
    #[error("identity pool '{0}' is empty")]
    EmptyPool(&'static str),
}
