//! Boundary with the external explanation service
//!
//! Builds the request payload, parses the delimiter-based reply, and turns
//! explained candidates into records. The network call itself belongs to a
//! [`Reasoner`] implementation.

pub mod annotate;
pub mod prompt;
pub mod response;

pub use annotate::{annotate, exclude_already_recommended, Explained, Reasoner, ReasoningError, RecommendationRecord};
pub use prompt::{CandidateProjection, PersonaSummary, ReasoningRequest};
pub use response::{parse_reasoning, RankedReason, ReasoningReply};
