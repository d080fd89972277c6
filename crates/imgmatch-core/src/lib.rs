pub mod config;
pub mod error;
pub mod extract;
pub mod listing;
pub mod logging;
pub mod matcher;
pub mod pipeline;
pub mod report;

pub use error::MatchError;
pub use matcher::MatchedPair;
pub use pipeline::run;
