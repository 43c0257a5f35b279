//! Content-based matching of listings against a persona

pub mod builder;
pub mod engine;
pub mod rooms;
pub mod snapshot;
pub mod vectorizer;

pub use builder::{build_pair, vectorize, PersonaProfile};
pub use engine::{MatchingEngine, RankedCandidate};
pub use rooms::room_count;
pub use snapshot::SnapshotCache;
pub use vectorizer::CorpusVectorizer;
