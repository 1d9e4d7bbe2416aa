//! Deterministic FOCUS record generation.
//!
//! The crate turns a validated [`GenerationRequest`] into a dataset of
//! schema-conformant [`FocusRecord`]s:
//!
//! - [`orchestrator::DatasetGenerator`] drives the per-row pipeline
//! - [`generators`] holds the column generator units, one per column cluster
//! - [`pools`] builds the per-dataset identity pools that make resources and
//!   accounts recur across rows and billing periods
//! - [`trend`] shapes multi-month cost curves
//! - [`postprocess`] applies distribution reweighting and a defensive
//!   conditional-nullability sweep
//!
//! # Example
//!
//! ```
//! use focus_core::{CloudProvider, Distribution, GenerationRequest, Profile};
//! use focus_generator::DatasetGenerator;
//!
//! let request = GenerationRequest::new(
//!     Profile::Greenfield,
//!     Distribution::EvenlyDistributed,
//!     vec![CloudProvider::Aws],
//!     5,
//! );
//! let records = DatasetGenerator::new(request)?.generate()?;
//! assert_eq!(records.len(), 5);
//! # Ok::<(), focus_generator::GenerateError>(())
//! ```
//!
//! [`GenerationRequest`]: focus_core::GenerationRequest
//! [`FocusRecord`]: focus_core::FocusRecord

pub mod context;
pub mod error;
pub mod family;
pub mod generators;
pub mod orchestrator;
pub mod pools;
pub mod postprocess;
mod seeding;
pub mod summary;
pub mod trend;

#[cfg(test)]
pub(crate) mod testing;

pub use context::RowContext;
pub use error::GenerateError;
pub use family::ServiceFamily;
pub use orchestrator::DatasetGenerator;
pub use pools::IdentityPools;
pub use summary::DatasetSummary;
