//! Error types for the request boundary.

/// A malformed [`GenerationRequest`]: the caller asked for something the
/// engine refuses to attempt. Raised before any generation work begins.
///
/// [`GenerationRequest`]: crate::request::GenerationRequest
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Row count must be strictly positive
    #[error("row_count must be greater than zero")]
    ZeroRowCount,

    /// The provider set is empty
    #[error("at least one cloud provider must be selected")]
    NoProviders,

    /// Multi-month generation outside the supported window
    #[error("month_count must be between {min} and {max}, got {got}")]
    MonthCountOutOfRange { got: u32, min: u32, max: u32 },

    /// Trend parameters feed multipliers and must be real numbers
    #[error("trend parameter '{name}' must be finite, got {value}")]
    NonFiniteParameter { name: String, value: f64 },

    /// Not a real calendar month
    #[error("invalid billing month {year:04}-{month:02}")]
    InvalidBillingMonth { year: i32, month: u32 },

    /// Billing month strings must look like YYYY-MM
    #[error("malformed billing month '{0}', expected YYYY-MM")]
    MalformedBillingMonth(String),
}
