pub mod feedback;
pub mod impact;

pub use feedback::{FeedbackRecord, NewFeedback};
pub use impact::ImpactStats;
