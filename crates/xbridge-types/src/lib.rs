//! # Xbridge Types
//!
//! Shared wire types for the xbridge workspace: the aggregator's chain
//! directory records, per-chain token lists, quote request/response shapes,
//! the LLM-extracted transaction details, and the seeded chain documents.
//!
//! All types are plain serde data with camelCase wire names. Schema
//! enforcement is deliberately serde-driven: required fields carry no
//! defaults, so a payload missing one fails deserialization at the boundary.

pub mod chain;
pub mod document;
pub mod extraction;
pub mod quote;
pub mod token;

pub use chain::*;
pub use document::*;
pub use extraction::*;
pub use quote::*;
pub use token::*;
