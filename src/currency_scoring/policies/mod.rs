mod score_weights;

pub use score_weights::{SeverityWeights, SimpleWeights};
