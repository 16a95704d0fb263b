//! reckon-core: incremental line evaluator for a live calculator notepad.
//!
//! A document is free-form text: some lines are prose or headings, some
//! define named variables, some are arithmetic. Each edit event runs one
//! synchronous pipeline pass that recomputes exactly the lines whose
//! state could have changed and projects the result into a minimal
//! per-line display model.
//!
//! Pipeline per pass: raw text → [`normalize`] → dirty check
//! ([`dirty`]) → per dirty line: [`classify`] → [`resolve`] (+ currency
//! registration side-effect) → external evaluation → token cache →
//! [`project`].
//!
//! # Public API
//!
//! - [`DocumentEvaluator`] -- owns all per-document state, runs passes
//! - [`LineToken`] / [`DisplayToken`] -- cached state and display model
//! - [`ExpressionEvaluator`] -- the seam to the arithmetic backend
//! - [`RateProvider`] / [`RateTable`] -- currency data collaborators
//! - [`MessageCatalog`] -- human-readable string collaborator

pub mod catalog;
pub mod classify;
pub mod constants;
pub mod currency;
pub mod dirty;
pub mod document;
pub mod evaluator;
pub mod normalize;
pub mod project;
pub mod resolve;
pub mod types;

#[cfg(feature = "adapter")]
pub mod adapter;

pub use catalog::{EnglishCatalog, MessageCatalog, MessageKey};
pub use currency::{ConversionRegistry, RateError, RateProvider, RateTable, StaticRateProvider};
pub use document::{derive_title, DocumentEvaluator};
pub use evaluator::{EvalFailure, ExpressionEvaluator};
pub use normalize::normalize;
pub use project::{project, DisplayToken};
pub use types::{LineToken, ValidationKind};
