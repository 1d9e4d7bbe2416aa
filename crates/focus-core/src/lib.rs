//! Core types for the focus-gen engine.
//!
//! This crate holds everything the generator and the validator share:
//!
//! - [`catalog`] - the static FOCUS v1.1 column catalog (names, order,
//!   feature levels, data types, allowed values)
//! - [`record`] - the [`FocusRecord`] row model and its [`FocusValue`] cells
//! - [`request`] - the [`GenerationRequest`] handed in at the boundary
//! - [`error`] - the [`ConfigError`] boundary error taxonomy
//!
//! # Architecture
//!
//! ```text
//! focus-core (this crate)
//!    │
//!    ├─── focus-generator  (produces Vec<FocusRecord> from a request)
//!    │
//!    └─── focus-validate   (checks Vec<FocusRecord> against the catalog)
//! ```

pub mod catalog;
pub mod error;
pub mod record;
pub mod request;

// Re-exports for convenience
pub use catalog::{ColumnKind, ColumnMetadata, DataType, FeatureLevel, FocusColumn};
pub use error::ConfigError;
pub use record::{FocusRecord, FocusValue};
pub use request::{
    BillingMonth, CloudProvider, Distribution, GenerationRequest, Profile, TrendOptions,
    TrendScenario,
};
