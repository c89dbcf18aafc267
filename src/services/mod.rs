pub mod generators;
pub mod pipeline;
pub mod recommendations;
pub mod seed;
pub mod signature;

pub use pipeline::GenerationPipeline;
pub use recommendations::{get_recommendations, Recommender, ScoredItem};
pub use signature::{make_signature, Signature};
