pub mod types;

pub use types::{Sentence, TimedSegment, Word};
