//! View components

mod feed;

pub use feed::{FeedPhase, FeedView};
