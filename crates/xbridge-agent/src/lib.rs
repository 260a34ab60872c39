//! # Xbridge Agent
//!
//! Turns a free-text bridge/swap request into a priced route:
//!
//! 1. a language model extracts the five transaction parameters
//!    ([`extractor`], [`parsing`]);
//! 2. the orchestration pipeline resolves both chains (in parallel), both
//!    tokens (in parallel), fetches a quote, and formats the result
//!    ([`pipeline`]);
//! 3. the pipeline's tail is also mounted as a `rig` tool ([`tools`]) so an
//!    agent with its own extraction loop can call it directly.

pub mod extractor;
pub mod parsing;
pub mod pipeline;
pub mod prompt;
pub mod tools;

pub use extractor::{DetailExtractor, LlmExtractor, DEFAULT_EXTRACTION_MODEL};
pub use parsing::ExtractionError;
pub use pipeline::{
    resolve_and_quote, PipelineError, QuoteArtifact, QuotePipeline, QuoteSummary, Side,
};
pub use tools::BridgeQuoteTool;
