/// Client-side derivations over fetched contracts
mod framework_scorer;

pub use framework_scorer::{FrameworkScore, FrameworkScorer, OpenRisks};
