//! Hand-off of render-thread audio to analysis channels

pub mod feed;

pub use feed::{AnalyseFeed, FeedConsumer, FeedProducer};
